use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::ser::SerializeMap;
use serde_json::Value;
use typed_builder::TypedBuilder;

use super::codec::absent_if_empty;
use super::UserMapping;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// An NFS export.
///
/// All fields are independently optional so the same type serves reads and
/// sparse partial updates: a `PUT` serializes only the fields the caller
/// populated, an absent field never clobbers the server-side value, and a
/// present-but-empty list explicitly clears the corresponding property.
///
/// The id is assigned by the appliance. It is populated on reads and is never
/// part of a request body; updates address the export through the URL.
#[derive(Debug, Default, Clone, PartialEq, Serialize, TypedBuilder)]
pub struct Export {
    /// The export id, present only on reads.
    #[serde(skip_serializing)]
    #[builder(default, setter(strip_option))]
    pub id: Option<i32>,

    /// The exported filesystem paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub paths: Option<Vec<String>>,

    /// The clients allowed to mount the export.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub clients: Option<Vec<String>>,

    /// The clients allowed to mount the export with root access.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub root_clients: Option<Vec<String>>,

    /// Credential mapping applied to all clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub map_all: Option<UserMapping>,

    /// Credential mapping applied to non-root clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub map_non_root: Option<UserMapping>,

    /// Credential mapping applied to root clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub map_root: Option<UserMapping>,
}

/// The staging mirror of [`Export`] used during decode.
#[derive(Default, Deserialize)]
struct ExportWire {
    #[serde(default)]
    id: Option<i32>,

    #[serde(default)]
    paths: Option<Vec<String>>,

    #[serde(default)]
    clients: Option<Vec<String>>,

    #[serde(default)]
    root_clients: Option<Vec<String>>,

    #[serde(default, deserialize_with = "absent_if_empty")]
    map_all: Option<UserMapping>,

    #[serde(default, deserialize_with = "absent_if_empty")]
    map_non_root: Option<UserMapping>,

    #[serde(default, deserialize_with = "absent_if_empty")]
    map_root: Option<UserMapping>,
}

/// An ordered list of exports.
///
/// Round-trips under the `exports` wire key in both directions; the key is
/// omitted entirely when the list is empty.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExportList(pub Vec<Export>);

#[derive(Deserialize)]
struct ExportListWire {
    #[serde(default)]
    exports: Vec<Export>,
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl<'de> Deserialize<'de> for Export {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Stage the raw value so a malformed export degrades to the empty
        // export instead of failing an enclosing list decode.
        let staged = Value::deserialize(deserializer)?;
        let wire = serde_json::from_value::<ExportWire>(staged).unwrap_or_default();

        Ok(Self {
            id: wire.id,
            paths: wire.paths,
            clients: wire.clients,
            root_clients: wire.root_clients,
            map_all: wire.map_all,
            map_non_root: wire.map_non_root,
            map_root: wire.map_root,
        })
    }
}

impl Serialize for ExportList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if !self.0.is_empty() {
            map.serialize_entry("exports", &self.0)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExportList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = ExportListWire::deserialize(deserializer)?;
        Ok(Self(wire.exports))
    }
}

impl std::ops::Deref for ExportList {
    type Target = Vec<Export>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for ExportList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Export>> for ExportList {
    fn from(exports: Vec<Export>) -> Self {
        Self(exports)
    }
}

impl IntoIterator for ExportList {
    type Item = Export;
    type IntoIter = std::vec::IntoIter<Export>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
