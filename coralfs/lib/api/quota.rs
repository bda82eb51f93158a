use serde::{Deserialize, Serialize};
use serde_json::Value;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Usage counters reported for a quota.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotaUsage {
    /// The number of inodes charged to the quota.
    #[serde(default)]
    pub inodes: i64,

    /// Logical bytes charged to the quota.
    #[serde(default)]
    pub logical: i64,

    /// Physical bytes charged to the quota.
    #[serde(default)]
    pub physical: i64,
}

/// Threshold state reported for a quota.
///
/// The `*_last_exceeded` values have no documented shape and are carried
/// through untouched.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotaThresholds {
    /// The advisory threshold in bytes, when set.
    #[serde(default)]
    pub advisory: Option<i64>,

    /// Whether the advisory threshold is currently exceeded.
    #[serde(default)]
    pub advisory_exceeded: bool,

    /// When the advisory threshold was last exceeded.
    #[serde(default)]
    pub advisory_last_exceeded: Value,

    /// The hard threshold in bytes, when set.
    #[serde(default)]
    pub hard: Option<i64>,

    /// Whether the hard threshold is currently exceeded.
    #[serde(default)]
    pub hard_exceeded: bool,

    /// When the hard threshold was last exceeded.
    #[serde(default)]
    pub hard_last_exceeded: Value,

    /// The soft threshold in bytes, when set.
    #[serde(default)]
    pub soft: Option<i64>,

    /// Whether the soft threshold is currently exceeded.
    #[serde(default)]
    pub soft_exceeded: bool,

    /// When the soft threshold was last exceeded.
    #[serde(default)]
    pub soft_last_exceeded: Value,
}

/// A directory quota as reported by the appliance.
///
/// `linked` and `persona` are opaque passthrough values.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quota {
    /// Whether the quota directory is presented as its own container.
    #[serde(default)]
    pub container: bool,

    /// Whether the thresholds are enforced.
    #[serde(default)]
    pub enforced: bool,

    /// The quota id.
    #[serde(default)]
    pub id: String,

    /// Whether snapshot usage counts against the quota.
    #[serde(default)]
    pub include_snapshots: bool,

    /// Linked-quota information, carried through untouched.
    #[serde(default)]
    pub linked: Value,

    /// The notification policy name.
    #[serde(default)]
    pub notifications: String,

    /// The directory the quota covers.
    #[serde(default)]
    pub path: String,

    /// The identity the quota applies to, carried through untouched.
    #[serde(default)]
    pub persona: Value,

    /// Whether the quota has finished its initial scan.
    #[serde(default)]
    pub ready: bool,

    /// The threshold state.
    #[serde(default)]
    pub thresholds: QuotaThresholds,

    /// Whether thresholds account for filesystem overhead.
    #[serde(default)]
    pub thresholds_include_overhead: bool,

    /// The quota type, e.g. `directory`.
    #[serde(default, rename = "type")]
    pub kind: String,

    /// Current usage counters.
    #[serde(default)]
    pub usage: QuotaUsage,
}

/// Threshold settings for quota write requests.
///
/// Unset thresholds are transmitted as explicit nulls; the appliance treats
/// a missing key and a null differently for threshold clearing.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotaThresholdsUpdate {
    /// The advisory threshold in bytes, or null.
    pub advisory: Value,

    /// The hard threshold in bytes, or null.
    pub hard: Value,

    /// The soft threshold in bytes, or null.
    pub soft: Value,
}

/// The body of a quota creation request.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotaCreate {
    /// Whether the thresholds are enforced.
    pub enforced: bool,

    /// Whether snapshot usage counts against the quota.
    pub include_snapshots: bool,

    /// The directory the quota covers.
    pub path: String,

    /// The threshold settings.
    pub thresholds: QuotaThresholdsUpdate,

    /// Whether thresholds account for filesystem overhead.
    pub thresholds_include_overhead: bool,

    /// The quota type, e.g. `directory`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// The body of a quota update request.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotaUpdate {
    /// Whether the thresholds are enforced.
    pub enforced: bool,

    /// The threshold settings.
    pub thresholds: QuotaThresholdsUpdate,

    /// Whether thresholds account for filesystem overhead.
    pub thresholds_include_overhead: bool,
}

/// A list response wrapping quotas under the `quotas` key.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotaList {
    /// The quotas on the cluster.
    #[serde(default)]
    pub quotas: Vec<Quota>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl QuotaThresholdsUpdate {
    /// Creates threshold settings with only the hard threshold set.
    pub fn hard_only(size: i64) -> Self {
        Self {
            advisory: Value::Null,
            hard: size.into(),
            soft: Value::Null,
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
