use reqwest::Method;
use serde_json::Value;

use crate::api::{AclUpdate, Ownership, VolumeAttributes, VolumeList};
use crate::CoralfsResult;

use super::{Client, NO_BODY};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Resource path prefix of the namespace tree.
const NAMESPACE_PATH: &str = "namespace";

/// Header pair marking a namespace PUT as a directory creation.
const TARGET_TYPE_CONTAINER: (&str, &str) = ("x-cfs-target-type", "container");

/// Header pair applying the default access control to a new directory.
const ACCESS_CONTROL_PUBLIC: (&str, &str) = ("x-cfs-access-control", "public_read_write");

/// Header naming the source of a server-side copy.
const COPY_SOURCE_HEADER: &str = "x-cfs-copy-source";

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Client {
    /// Lists the volumes under the configured volumes root.
    pub async fn volumes(&self) -> CoralfsResult<VolumeList> {
        let list = self
            .query(Method::GET, &self.namespace_path(), None, &[], NO_BODY)
            .await?;

        Ok(list.unwrap_or_default())
    }

    /// Fetches the attributes of a volume.
    pub async fn volume(&self, name: &str) -> CoralfsResult<VolumeAttributes> {
        let attrs = self
            .query(
                Method::GET,
                &self.namespace_path(),
                Some(name),
                &[("metadata", "")],
                NO_BODY,
            )
            .await?;

        Ok(attrs.unwrap_or_default())
    }

    /// Creates a volume and hands its ownership to the configured identity.
    pub async fn create_volume(&self, name: &str) -> CoralfsResult<()> {
        let _: Option<Value> = self
            .query_with_headers(
                Method::PUT,
                &self.namespace_path(),
                Some(name),
                &[],
                &[TARGET_TYPE_CONTAINER, ACCESS_CONTROL_PUBLIC],
                NO_BODY,
            )
            .await?;

        let acl = AclUpdate {
            authoritative: "acl".to_string(),
            action: "update".to_string(),
            owner: Ownership {
                name: self.config().username().clone(),
                kind: "user".to_string(),
            },
            group: match self.config().group().is_empty() {
                true => None,
                false => Some(Ownership {
                    name: self.config().group().clone(),
                    kind: "group".to_string(),
                }),
            },
        };

        let _: Option<Value> = self
            .query(
                Method::PUT,
                &self.namespace_path(),
                Some(name),
                &[("acl", "")],
                Some(&acl),
            )
            .await?;

        Ok(())
    }

    /// Recursively deletes a volume.
    pub async fn delete_volume(&self, name: &str) -> CoralfsResult<()> {
        let _: Option<Value> = self
            .query(
                Method::DELETE,
                &self.namespace_path(),
                Some(name),
                &[("recursive", "true")],
                NO_BODY,
            )
            .await?;

        Ok(())
    }

    /// Creates a volume as a server-side copy of an existing one.
    pub async fn copy_volume(&self, source: &str, destination: &str) -> CoralfsResult<()> {
        let copy_source = format!("/{}/{}", self.namespace_path(), source);

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

    /// Returns the namespace path of the configured volumes root.
    pub(crate) fn namespace_path(&self) -> String {
        format!("{NAMESPACE_PATH}{}", self.volumes_root())
    }
}
