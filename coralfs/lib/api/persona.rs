use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumString};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// The type tag carried by a [`PersonaID`].
///
/// Canonical strings are lowercase except for the identifier schemes
/// (`SID`/`UID`/`GID`); parsing is case-insensitive and never fails,
/// falling back to [`PersonaIDType::Unknown`] for unrecognized text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PersonaIDType {
    /// An unrecognized identifier type.
    #[default]
    #[strum(serialize = "unknown")]
    Unknown,

    /// A user identifier.
    #[strum(serialize = "user")]
    User,

    /// A group identifier.
    #[strum(serialize = "group")]
    Group,

    /// A Windows security identifier.
    #[strum(serialize = "SID")]
    Sid,

    /// A POSIX user identifier.
    #[strum(serialize = "UID")]
    Uid,

    /// A POSIX group identifier.
    #[strum(serialize = "GID")]
    Gid,
}

/// The type tag a [`Persona`] may carry in its `"type:name"` wire form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PersonaType {
    /// An unrecognized persona type.
    #[default]
    #[strum(serialize = "unknown")]
    Unknown,

    /// A user persona.
    #[strum(serialize = "user")]
    User,

    /// A group persona.
    #[strum(serialize = "group")]
    Group,

    /// A well-known persona such as `everyone`.
    #[strum(serialize = "wellknown")]
    WellKnown,
}

/// A typed identity identifier.
///
/// Encodes as `"<type>:<id>"` when the type is known, else as the bare id
/// string. Decodes by splitting on the first colon; a single token is an id
/// with [`PersonaIDType::Unknown`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PersonaID {
    /// The raw identifier.
    pub id: String,

    /// The identifier scheme.
    pub kind: PersonaIDType,
}

/// A reference to a user, group, or well-known identity.
///
/// The appliance accepts three wire shapes: an object carrying only an `id`,
/// a `"type:name"` string, and a bare name string. Exactly one representation
/// is chosen at encode time, in that priority order; encoding fails when none
/// of the fields is populated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Persona {
    /// The typed identifier, when known.
    pub id: Option<PersonaID>,

    /// The persona type, only meaningful together with `name`.
    pub kind: Option<PersonaType>,

    /// The persona name.
    pub name: Option<String>,
}

/// The object wire shape of a [`Persona`].
#[derive(Serialize)]
struct PersonaWithID<'a> {
    id: &'a PersonaID,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl PersonaIDType {
    /// Parses an identifier type, case-insensitively, defaulting to
    /// [`PersonaIDType::Unknown`] for unrecognized text.
    pub fn parse(text: &str) -> Self {
        text.parse().unwrap_or_default()
    }
}

impl PersonaType {
    /// Parses a persona type, case-insensitively, defaulting to
    /// [`PersonaType::Unknown`] for unrecognized text.
    pub fn parse(text: &str) -> Self {
        text.parse().unwrap_or_default()
    }
}

impl PersonaID {
    /// Creates a typed identifier.
    pub fn new(kind: PersonaIDType, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

impl Persona {
    /// Creates a persona referenced by its typed identifier.
    pub fn by_id(id: PersonaID) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Creates a persona referenced by type and name.
    pub fn by_type_name(kind: PersonaType, name: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Creates a persona referenced by name alone.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl Serialize for PersonaIDType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PersonaIDType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text))
    }
}

impl Serialize for PersonaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PersonaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text))
    }
}

impl Serialize for PersonaID {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.kind {
            PersonaIDType::Unknown => serializer.serialize_str(&self.id),
            kind => serializer.serialize_str(&format!("{}:{}", kind, self.id)),
        }
    }
}

impl<'de> Deserialize<'de> for PersonaID {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        match text.split_once(':') {
            None => Ok(Self {
                id: text,
                kind: PersonaIDType::Unknown,
            }),
            Some((kind, id)) => Ok(Self {
                id: id.to_string(),
                kind: PersonaIDType::parse(kind),
            }),
        }
    }
}

impl Serialize for Persona {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(id) = &self.id {
            PersonaWithID { id }.serialize(serializer)
        } else if let (Some(kind), Some(name)) = (&self.kind, &self.name) {
            serializer.serialize_str(&format!("{kind}:{name}"))
        } else if let Some(name) = &self.name {
            serializer.serialize_str(name)
        } else {
            Err(serde::ser::Error::custom(
                "persona has no encodable representation",
            ))
        }
    }
}

impl<'de> Deserialize<'de> for Persona {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Object {
                #[serde(default)]
                id: Option<PersonaID>,
            },
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Object { id } => Ok(Self {
                id,
                ..Self::default()
            }),
            Wire::Text(text) => match text.split_once(':') {
                None => Ok(Self::by_name(text)),
                Some((kind, name)) => Ok(Self::by_type_name(PersonaType::parse(kind), name)),
            },
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
