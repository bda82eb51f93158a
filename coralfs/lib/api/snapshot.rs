use serde::{Deserialize, Serialize};
use serde_json::Value;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A filesystem snapshot as reported by the appliance.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Creation time as a Unix timestamp.
    #[serde(default)]
    pub created: i64,

    /// Expiration time as a Unix timestamp, when scheduled.
    #[serde(default)]
    pub expires: Option<i64>,

    /// Whether the snapshot is pinned by locks.
    #[serde(default)]
    pub has_locks: bool,

    /// The snapshot id.
    #[serde(default)]
    pub id: i64,

    /// The snapshot name.
    #[serde(default)]
    pub name: String,

    /// The snapshotted directory.
    #[serde(default)]
    pub path: String,

    /// Share of the filesystem consumed by the snapshot.
    #[serde(default)]
    pub pct_filesystem: f64,

    /// Share of the snapshot reserve consumed by the snapshot.
    #[serde(default)]
    pub pct_reserve: f64,

    /// The schedule that produced the snapshot, when any.
    #[serde(default)]
    pub schedule: Option<String>,

    /// Bytes shadowed into the snapshot.
    #[serde(default)]
    pub shadow_bytes: i64,

    /// The snapshot size in bytes.
    #[serde(default)]
    pub size: i64,

    /// The snapshot state, e.g. `active`.
    #[serde(default)]
    pub state: String,

    /// The id of the snapshot this one aliases, when any.
    #[serde(default)]
    pub target_id: i64,

    /// The name of the snapshot this one aliases, when any.
    #[serde(default)]
    pub target_name: String,
}

/// A list response wrapping snapshots under the `snapshots` key.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotList {
    /// The snapshots on the cluster.
    #[serde(default)]
    pub snapshots: Vec<Snapshot>,

    /// The total number of snapshots.
    #[serde(default)]
    pub total: i64,

    /// An opaque pagination token, null when the listing is complete.
    #[serde(default)]
    pub resume: Value,
}

/// The body of a snapshot creation request.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotCreate {
    /// The directory to snapshot.
    pub path: String,

    /// The snapshot name; the appliance picks one when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_create_omits_absent_name() -> anyhow::Result<()> {
        let create = SnapshotCreate {
            path: "/cfs/volumes/tank".to_string(),
            name: None,
        };
        assert_eq!(
            serde_json::to_string(&create)?,
            r#"{"path":"/cfs/volumes/tank"}"#
        );

        let create = SnapshotCreate {
            path: "/cfs/volumes/tank".to_string(),
            name: Some("nightly".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&create)?,
            r#"{"path":"/cfs/volumes/tank","name":"nightly"}"#
        );

        Ok(())
    }

    #[test]
    fn test_snapshot_list_decode_tolerates_null_fields() -> anyhow::Result<()> {
        let list: SnapshotList = serde_json::from_str(
            r#"{
                "snapshots": [
                    {
                        "created": 1454516325,
                        "expires": null,
                        "has_locks": false,
                        "id": 3,
                        "name": "nightly",
                        "path": "/cfs/volumes/tank",
                        "pct_filesystem": 0.01,
                        "pct_reserve": 0.0,
                        "schedule": null,
                        "shadow_bytes": 0,
                        "size": 4096,
                        "state": "active",
                        "target_id": 0,
                        "target_name": ""
                    }
                ],
                "resume": null,
                "total": 1
            }"#,
        )?;

        assert_eq!(list.total, 1);
        assert_eq!(list.resume, Value::Null);
        assert_eq!(list.snapshots[0].id, 3);
        assert_eq!(list.snapshots[0].expires, None);
        assert_eq!(list.snapshots[0].schedule, None);

        Ok(())
    }
}
