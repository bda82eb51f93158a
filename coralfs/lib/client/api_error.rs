use getset::Getters;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// One entry of an appliance error response.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorEntry {
    /// The machine-readable error code.
    #[serde(default)]
    pub code: String,

    /// The request field the error refers to, when any.
    #[serde(default)]
    pub field: String,

    /// The human-readable message.
    #[serde(default)]
    pub message: String,
}

/// A structured failure returned by the appliance.
///
/// Always carries at least one entry: when the response body is missing,
/// unparseable, or lists no errors, a single entry is synthesized from the
/// HTTP status line, so [`message`](ApiError::message) cannot observe an
/// empty list.
#[derive(Debug, Error, Getters)]
#[error("{}", self.message())]
#[getset(get = "pub")]
pub struct ApiError {
    /// The HTTP status code of the failed response.
    status_code: u16,

    /// The error entries reported by the appliance.
    errors: Vec<ApiErrorEntry>,
}

/// The wire shape of an error response body.
#[derive(Default, Deserialize)]
struct ApiErrorWire {
    #[serde(default)]
    errors: Vec<ApiErrorEntry>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ApiError {
    /// Builds a structured error from a non-success status and raw body.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let mut errors = serde_json::from_slice::<ApiErrorWire>(body)
            .unwrap_or_default()
            .errors;

        // The appliance has been seen returning both empty bodies and entries
        // with blank messages; either way the status line stands in.
        if errors.is_empty() {
            errors.push(ApiErrorEntry {
                message: status.to_string(),
                ..ApiErrorEntry::default()
            });
        } else if errors[0].message.is_empty() {
            errors[0].message = status.to_string();
        }

        Self {
            status_code: status.as_u16(),
            errors,
        }
    }

    /// Returns the message of the first error entry.
    pub fn message(&self) -> &str {
        &self.errors[0].message
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
