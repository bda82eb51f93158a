use reqwest::Method;

use crate::api::{Quota, QuotaCreate, QuotaList, QuotaThresholdsUpdate, QuotaUpdate};
use crate::{CoralfsError, CoralfsResult};

use super::{Client, NO_BODY};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Resource path of the quota collection.
const QUOTA_PATH: &str = "platform/1/quota/quotas";

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Client {
    /// Returns the quota covering the given directory.
    ///
    /// The appliance only exposes a full listing, so the quota is found by
    /// scanning for an exact path match.
    pub async fn quota(&self, path: &str) -> CoralfsResult<Quota> {
        let list: Option<QuotaList> = self
            .query(Method::GET, QUOTA_PATH, None, &[], NO_BODY)
            .await?;

        list.map(|list| list.quotas)
            .unwrap_or_default()
            .into_iter()
            .find(|quota| quota.path == path)
            .ok_or_else(|| CoralfsError::QuotaNotFound(path.to_string()))
    }

    /// Creates an enforced directory quota with only a hard threshold.
    pub async fn set_quota_hard_threshold(&self, path: &str, size: i64) -> CoralfsResult<()> {
        let body = QuotaCreate {
            enforced: true,
            include_snapshots: false,
            path: path.to_string(),
            thresholds: QuotaThresholdsUpdate::hard_only(size),
            thresholds_include_overhead: false,
            kind: "directory".to_string(),
        };

        let _: Option<Quota> = self
            .query(Method::POST, QUOTA_PATH, None, &[], Some(&body))
            .await?;

        Ok(())
    }

    /// Updates the hard threshold of the quota covering the given directory.
    ///
    /// The quota id is re-resolved with a fresh list query on every call so a
    /// concurrently recreated quota is never modified through a stale
    /// identifier; callers holding a known-good id can use
    /// [`Client::update_quota_by_id`] to save the round trip.
    pub async fn update_quota_hard_threshold(&self, path: &str, size: i64) -> CoralfsResult<()> {
        let quota = self.quota(path).await?;
        self.update_quota_by_id(&quota.id, size).await
    }

    /// Updates the hard threshold of a quota addressed by id.
    pub async fn update_quota_by_id(&self, id: &str, size: i64) -> CoralfsResult<()> {
        let body = QuotaUpdate {
            enforced: true,
            thresholds: QuotaThresholdsUpdate::hard_only(size),
            thresholds_include_overhead: false,
        };

        let _: Option<Quota> = self
            .query(Method::PUT, QUOTA_PATH, Some(id), &[], Some(&body))
            .await?;

        Ok(())
    }

    /// Removes the quota covering the given directory.
    pub async fn delete_quota(&self, path: &str) -> CoralfsResult<()> {
        let _: Option<QuotaList> = self
            .query(Method::DELETE, QUOTA_PATH, None, &[("path", path)], NO_BODY)
            .await?;

        Ok(())
    }
}
