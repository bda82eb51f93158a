//! The connection to the appliance: configuration, the generic transport
//! pipeline, and one method per platform API action.

mod api_error;
mod config;
mod exports;
mod observer;
mod quotas;
mod snapshots;
mod transport;
mod volumes;

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub use api_error::*;
pub use config::*;
pub use observer::*;
pub use transport::*;

pub use reqwest::Method;
