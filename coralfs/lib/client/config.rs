use getset::Getters;
use typed_builder::TypedBuilder;

use crate::{CoralfsError, CoralfsResult};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Root of the namespace tree under which volumes are created.
pub const DEFAULT_VOLUMES_PATH: &str = "/cfs/volumes";

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Connection configuration for a [`Client`](crate::Client).
///
/// All fields are fixed once the client is constructed; concurrent calls
/// share the configuration read-only.
#[derive(Debug, Clone, TypedBuilder, Getters)]
#[getset(get = "pub")]
pub struct ClientConfig {
    /// Base endpoint of the appliance management API, e.g.
    /// `https://coral-1.example.org:8080`.
    #[builder(setter(transform = |endpoint: impl AsRef<str>| endpoint.as_ref().to_string()))]
    endpoint: String,

    /// The user to authenticate as.
    #[builder(setter(transform = |username: impl AsRef<str>| username.as_ref().to_string()))]
    username: String,

    /// The group that owns newly created volumes, when set.
    #[builder(default, setter(transform = |group: impl AsRef<str>| group.as_ref().to_string()))]
    group: String,

    /// The password to authenticate with.
    #[builder(setter(transform = |password: impl AsRef<str>| password.as_ref().to_string()))]
    password: String,

    /// Skip TLS certificate validation.
    #[builder(default)]
    insecure: bool,

    /// Volume root override, joined beneath [`DEFAULT_VOLUMES_PATH`].
    #[builder(default, setter(transform = |path: impl AsRef<str>| path.as_ref().to_string()))]
    volumes_path: String,

    /// Log every request and response through the tracing-backed observer.
    #[builder(default)]
    log_traffic: bool,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ClientConfig {
    /// Checks that the required connection parameters are present.
    pub(crate) fn validate(&self) -> CoralfsResult<()> {
        if self.endpoint.is_empty() || self.username.is_empty() || self.password.is_empty() {
            return Err(CoralfsError::MissingConnectionParams);
        }

        Ok(())
    }

    /// Resolves the effective volumes root.
    ///
    /// An override is always anchored beneath the default root, whether it is
    /// written with or without a leading slash.
    pub(crate) fn volumes_root(&self) -> String {
        if self.volumes_path.is_empty() {
            DEFAULT_VOLUMES_PATH.to_string()
        } else if self.volumes_path.starts_with('/') {
            format!("{DEFAULT_VOLUMES_PATH}{}", self.volumes_path)
        } else {
            format!("{DEFAULT_VOLUMES_PATH}/{}", self.volumes_path)
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
