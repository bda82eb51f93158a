use thiserror::Error;

use crate::client::ApiError;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// The result of a coralfs-related operation.
pub type CoralfsResult<T> = Result<T, CoralfsError>;

/// An error that occurred while talking to the CoralFS platform API.
#[derive(Debug, Error)]
pub enum CoralfsError {
    /// The connection configuration is missing a required parameter.
    #[error("missing endpoint, username, or password")]
    MissingConnectionParams,

    /// A request body could not be serialized to JSON.
    #[error("request encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// A success-path response body could not be decoded.
    #[error("response decoding failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// An error that occurred while constructing or executing an HTTP request.
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A structured error returned by the appliance.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No quota exists for the given path.
    #[error("quota not found: {0}")]
    QuotaNotFound(String),

    /// No snapshot exists with the given id.
    #[error("snapshot not found: {0}")]
    SnapshotNotFound(i64),

    /// An operation that requires a path was given none.
    #[error("no path set")]
    NoPathSet,
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Creates an `Ok` `CoralfsResult`.
#[allow(non_snake_case)]
pub fn Ok<T>(value: T) -> CoralfsResult<T> {
    Result::Ok(value)
}
