use serde::{Deserialize, Serialize};
use serde_json::Value;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A named entry in a namespace directory listing.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeName {
    /// The volume name.
    pub name: String,
}

/// A namespace listing response wrapping entries under the `children` key.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeList {
    /// The volumes under the configured volumes root.
    #[serde(default)]
    pub children: Vec<VolumeName>,
}

/// A single volume attribute; the value shape depends on the attribute and is
/// carried through untouched.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAttr {
    /// The attribute name.
    pub name: String,

    /// The attribute value.
    #[serde(default)]
    pub value: Value,
}

/// A volume metadata response wrapping attributes under the `attrs` key.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAttributes {
    /// The volume's attributes.
    #[serde(default)]
    pub attrs: Vec<VolumeAttr>,
}

/// An identity in an ACL ownership request.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ownership {
    /// The identity name.
    pub name: String,

    /// The identity type, `user` or `group`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// The body of a namespace ACL update request.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AclUpdate {
    /// Which ACL representation is authoritative.
    pub authoritative: String,

    /// The ACL action to perform.
    pub action: String,

    /// The owning user.
    pub owner: Ownership,

    /// The owning group, when configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Ownership>,
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
