use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::codec::{absent_if_empty, absent_if_no_entries, WireEmpty};
use super::Persona;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// An overlay describing how a client's credentials are remapped by an
/// export.
///
/// Every field is independently optional: an absent field is never
/// transmitted and never overwrites the corresponding server-side value. The
/// appliance frequently answers with placeholder sub-objects (`"primary_group"
/// : {}`), which decode back to absence rather than zero-valued personas.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct UserMapping {
    /// Whether the mapping applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub enabled: Option<bool>,

    /// The identity credentials are mapped to.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "absent_if_empty"
    )]
    #[builder(default, setter(strip_option))]
    pub user: Option<Persona>,

    /// The primary group of the mapped identity.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "absent_if_empty"
    )]
    #[builder(default, setter(strip_option))]
    pub primary_group: Option<Persona>,

    /// Supplemental groups of the mapped identity.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "absent_if_no_entries"
    )]
    #[builder(default, setter(strip_option))]
    pub secondary_group: Option<Vec<Persona>>,
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl WireEmpty for Persona {
    fn is_wire_empty(&self) -> bool {
        self.id.is_none() && self.kind.is_none() && self.name.is_none()
    }
}

impl WireEmpty for UserMapping {
    fn is_wire_empty(&self) -> bool {
        self.enabled.is_none()
            && self.user.is_none()
            && self.primary_group.is_none()
            && self
                .secondary_group
                .as_ref()
                .map_or(true, |personas| personas.is_empty())
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Persona, PersonaID, PersonaIDType};

    #[test]
    fn test_mapping_is_empty_with_all_fields_absent() {
        assert!(UserMapping::default().is_wire_empty());
        assert!(UserMapping {
            secondary_group: Some(vec![]),
            ..UserMapping::default()
        }
        .is_wire_empty());
    }

    #[test]
    fn test_mapping_is_not_empty_with_any_field_present() {
        assert!(!UserMapping::builder().enabled(false).build().is_wire_empty());
        assert!(!UserMapping::builder()
            .user(Persona::by_name("nobody"))
            .build()
            .is_wire_empty());
        assert!(!UserMapping::builder()
            .primary_group(Persona::by_name("wheel"))
            .build()
            .is_wire_empty());
        assert!(!UserMapping::builder()
            .secondary_group(vec![Persona::by_name("ops")])
            .build()
            .is_wire_empty());
    }

    #[test]
    fn test_mapping_decode_normalizes_placeholders() -> anyhow::Result<()> {
        let mapping: UserMapping = serde_json::from_str(
            r#"{"enabled":true,"primary_group":{},"secondary_group":[],"user":{"id":"USER:root"}}"#,
        )?;

        assert_eq!(mapping.enabled, Some(true));
        assert!(mapping.primary_group.is_none());
        assert!(mapping.secondary_group.is_none());
        assert_eq!(
            mapping.user.and_then(|user| user.id),
            Some(PersonaID::new(PersonaIDType::User, "root"))
        );

        Ok(())
    }

    #[test]
    fn test_mapping_decode_accepts_bare_name_user() -> anyhow::Result<()> {
        let mapping: UserMapping = serde_json::from_str(r#"{"user":"nobody"}"#)?;
        assert_eq!(
            mapping.user.and_then(|user| user.name),
            Some("nobody".to_string())
        );

        Ok(())
    }

    #[test]
    fn test_mapping_encode_omits_absent_fields() -> anyhow::Result<()> {
        let mapping = UserMapping::builder().enabled(true).build();
        assert_eq!(serde_json::to_string(&mapping)?, r#"{"enabled":true}"#);

        Ok(())
    }
}
