use reqwest::Method;
use serde_json::Value;

use crate::api::{Export, ExportList, Persona, PersonaID, PersonaIDType, UserMapping};
use crate::{CoralfsError, CoralfsResult};

use super::{Client, NO_BODY};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Resource path of the NFS export collection.
const EXPORTS_PATH: &str = "platform/1/protocols/nfs/exports";

/// Header pair announcing a JSON request body.
const CONTENT_TYPE_JSON: (&str, &str) = ("Content-Type", "application/json");

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Client {
    /// Lists all NFS exports on the cluster.
    pub async fn exports(&self) -> CoralfsResult<ExportList> {
        let list = self
            .query_with_headers(
                Method::GET,
                EXPORTS_PATH,
                None,
                &[],
                &[CONTENT_TYPE_JSON],
                NO_BODY,
            )
            .await?;

        Ok(list.unwrap_or_default())
    }

    /// Fetches a single export by id.
    ///
    /// The appliance answers with the list shape even for a single id; an
    /// empty list means the export does not exist.
    pub async fn export(&self, id: i32) -> CoralfsResult<Option<Export>> {
        let list: Option<ExportList> = self
            .query_with_headers(
                Method::GET,
                EXPORTS_PATH,
                Some(&id.to_string()),
                &[],
                &[CONTENT_TYPE_JSON],
                NO_BODY,
            )
            .await?;

        Ok(list.and_then(|list| list.into_iter().next()))
    }

    /// Returns the first export carrying a path for the named volume.
    pub async fn export_for_volume(&self, name: &str) -> CoralfsResult<Option<Export>> {
        let path = self.volume_path(name);
        let exports = self.exports().await?;

        Ok(exports.into_iter().find(|export| {
            export
                .paths
                .as_ref()
                .map_or(false, |paths| paths.iter().any(|p| p == &path))
        }))
    }

    /// Creates an export and returns its assigned id.
    pub async fn create_export(&self, export: &Export) -> CoralfsResult<i32> {
        if export.paths.as_ref().map_or(false, |paths| paths.is_empty()) {
            return Err(CoralfsError::NoPathSet);
        }

        let created: Option<Export> = self
            .query_with_headers(
                Method::POST,
                EXPORTS_PATH,
                None,
                &[],
                &[CONTENT_TYPE_JSON],
                Some(export),
            )
            .await?;

        Ok(created.and_then(|export| export.id).unwrap_or_default())
    }

    /// Applies a partial update to an export.
    ///
    /// Only the fields populated on `export` are transmitted; the id selects
    /// the export through the URL and never travels in the body.
    pub async fn update_export(&self, export: &Export) -> CoralfsResult<()> {
        let id = export.id.unwrap_or_default();

        let _: Option<Value> = self
            .query_with_headers(
                Method::PUT,
                EXPORTS_PATH,
                Some(&id.to_string()),
                &[],
                &[CONTENT_TYPE_JSON],
                Some(export),
            )
            .await?;

        Ok(())
    }

    /// Deletes an export.
    pub async fn delete_export(&self, id: i32) -> CoralfsResult<()> {
        let _: Option<Value> = self
            .query(
                Method::DELETE,
                EXPORTS_PATH,
                Some(&id.to_string()),
                &[],
                NO_BODY,
            )
            .await?;

        Ok(())
    }

    /// Exports the named volume, reusing an existing export when one already
    /// covers its path.
    pub async fn export_volume(&self, name: &str) -> CoralfsResult<i32> {
        if let Some(export) = self.export_for_volume(name).await? {
            return Ok(export.id.unwrap_or_default());
        }

        self.create_export(&Export {
            paths: Some(vec![self.volume_path(name)]),
            ..Export::default()
        })
        .await
    }

    /// Stops exporting the named volume. A volume that is not exported is
    /// left alone.
    pub async fn unexport_volume(&self, name: &str) -> CoralfsResult<()> {
        if let Some(export) = self.export_for_volume(name).await? {
            if let Some(id) = export.id {
                self.delete_export(id).await?;
            }
        }

        Ok(())
    }

    /// Returns an export's clients property.
    pub async fn export_clients(&self, id: i32) -> CoralfsResult<Option<Vec<String>>> {
        Ok(self.export(id).await?.and_then(|export| export.clients))
    }

    /// Replaces an export's clients property.
    pub async fn set_export_clients(&self, id: i32, addrs: &[String]) -> CoralfsResult<()> {
        self.update_export(&Export {
            id: Some(id),
            clients: Some(addrs.to_vec()),
            ..Export::default()
        })
        .await
    }

    /// Appends to an export's clients property.
    pub async fn add_export_clients(&self, id: i32, addrs: &[String]) -> CoralfsResult<()> {
        let Some(export) = self.export(id).await? else {
            return Ok(());
        };

        let mut clients = export.clients.unwrap_or_default();
        clients.extend(addrs.iter().cloned());

        self.set_export_clients(id, &clients).await
    }

    /// Sets an export's clients property to the explicit empty list.
    pub async fn clear_export_clients(&self, id: i32) -> CoralfsResult<()> {
        self.set_export_clients(id, &[]).await
    }

    /// Returns an export's root_clients property.
    pub async fn export_root_clients(&self, id: i32) -> CoralfsResult<Option<Vec<String>>> {
        Ok(self
            .export(id)
            .await?
            .and_then(|export| export.root_clients))
    }

    /// Replaces an export's root_clients property.
    pub async fn set_export_root_clients(&self, id: i32, addrs: &[String]) -> CoralfsResult<()> {
        self.update_export(&Export {
            id: Some(id),
            root_clients: Some(addrs.to_vec()),
            ..Export::default()
        })
        .await
    }

    /// Appends to an export's root_clients property.
    pub async fn add_export_root_clients(&self, id: i32, addrs: &[String]) -> CoralfsResult<()> {
        let Some(export) = self.export(id).await? else {
            return Ok(());
        };

        let mut clients = export.root_clients.unwrap_or_default();
        clients.extend(addrs.iter().cloned());

        self.set_export_root_clients(id, &clients).await
    }

    /// Sets an export's root_clients property to the explicit empty list.
    pub async fn clear_export_root_clients(&self, id: i32) -> CoralfsResult<()> {
        self.set_export_root_clients(id, &[]).await
    }

    /// Returns the root mapping of the named volume's export.
    pub async fn root_mapping(&self, name: &str) -> CoralfsResult<Option<UserMapping>> {
        Ok(self
            .export_for_volume(name)
            .await?
            .and_then(|export| export.map_root))
    }

    /// Maps root access on the named volume's export to the given user.
    pub async fn enable_root_mapping(&self, name: &str, user: &str) -> CoralfsResult<()> {
        self.set_root_mapping(name, user, true).await
    }

    /// Disables root mapping on the named volume's export, remapping root to
    /// `nobody`.
    pub async fn disable_root_mapping(&self, name: &str) -> CoralfsResult<()> {
        self.set_root_mapping(name, "nobody", false).await
    }

    async fn set_root_mapping(&self, name: &str, user: &str, enabled: bool) -> CoralfsResult<()> {
        let Some(export) = self.export_for_volume(name).await? else {
            return Ok(());
        };

        let map_root = match export.map_root {
            // A mapping that already names a user keeps its remaining fields.
            Some(mapping) if mapping.user.is_some() => UserMapping {
                enabled: Some(enabled),
                user: Some(Persona::by_id(PersonaID::new(PersonaIDType::User, user))),
                ..mapping
            },
            _ => UserMapping {
                user: Some(Persona::by_name(user)),
                ..UserMapping::default()
            },
        };

        self.update_export(&Export {
            id: export.id,
            map_root: Some(map_root),
            ..Export::default()
        })
        .await
    }
}
