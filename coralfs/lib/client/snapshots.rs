use reqwest::Method;
use serde_json::Value;

use crate::api::{Snapshot, SnapshotCreate, SnapshotList};
use crate::{CoralfsError, CoralfsResult};

use super::{Client, NO_BODY};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Resource path of the snapshot collection.
const SNAPSHOTS_PATH: &str = "platform/1/snapshot/snapshots";

/// Header pair announcing a JSON request body.
const CONTENT_TYPE_JSON: (&str, &str) = ("Content-Type", "application/json");

/// Header naming the source of a server-side copy.
const COPY_SOURCE_HEADER: &str = "x-cfs-copy-source";

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Client {
    /// Lists all snapshots on the cluster.
    pub async fn snapshots(&self) -> CoralfsResult<SnapshotList> {
        let list = self
            .query(Method::GET, SNAPSHOTS_PATH, None, &[], NO_BODY)
            .await?;

        Ok(list.unwrap_or_default())
    }

    /// Fetches a single snapshot by id.
    ///
    /// The appliance answers with the list shape even for a single id.
    pub async fn snapshot(&self, id: i64) -> CoralfsResult<Snapshot> {
        let list: Option<SnapshotList> = self
            .query(
                Method::GET,
                SNAPSHOTS_PATH,
                Some(&id.to_string()),
                &[],
                NO_BODY,
            )
            .await?;

        list.map(|list| list.snapshots)
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(CoralfsError::SnapshotNotFound(id))
    }

    /// Creates a snapshot of the given directory, optionally named.
    pub async fn create_snapshot(
        &self,
        path: &str,
        name: Option<&str>,
    ) -> CoralfsResult<Snapshot> {
        if path.is_empty() {
            return Err(CoralfsError::NoPathSet);
        }

        let body = SnapshotCreate {
            path: path.to_string(),
            name: name.map(ToString::to_string),
        };

        let created = self
            .query_with_headers(
                Method::POST,
                SNAPSHOTS_PATH,
                None,
                &[],
                &[CONTENT_TYPE_JSON],
                Some(&body),
            )
            .await?;

        Ok(created.unwrap_or_default())
    }

    /// Deletes a snapshot.
    pub async fn delete_snapshot(&self, id: i64) -> CoralfsResult<()> {
        let _: Option<Value> = self
            .query(
                Method::DELETE,
                SNAPSHOTS_PATH,
                Some(&id.to_string()),
                &[],
                NO_BODY,
            )
            .await?;

        Ok(())
    }

    /// Copies the contents of a snapshotted volume into a new volume.
    pub async fn copy_snapshot(
        &self,
        snapshot_name: &str,
        source_volume: &str,
        destination: &str,
    ) -> CoralfsResult<()> {
        let copy_source = format!(
            "/{}/{}/",
            self.volume_snapshot_path(snapshot_name),
            source_volume
        );

        let _: Option<Value> = self
            .query_with_headers(
                Method::PUT,
                &self.namespace_path(),
                Some(destination),
                &[],
                &[(COPY_SOURCE_HEADER, copy_source.as_str())],
                NO_BODY,
            )
            .await?;

        Ok(())
    }

    /// Returns the namespace path under which the named snapshot exposes the
    /// volumes root.
    ///
    /// Snapshots of `/cfs` materialize under `/cfs/.snapshot/<name>`.
    fn volume_snapshot_path(&self, name: &str) -> String {
        let namespace = self.namespace_path();
        let (prefix, suffix) = namespace
            .split_once("/cfs/")
            .unwrap_or((namespace.as_str(), ""));

        format!("{prefix}/cfs/.snapshot/{name}/{suffix}")
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
