//! `coralfs` is a client library for the CoralFS storage appliance's platform API.
//!
//! # Overview
//!
//! CoralFS exposes its management plane as an HTTP/JSON API: volumes live in a
//! namespace tree rooted at `/cfs/volumes`, NFS exports, quotas, and snapshots
//! are flat REST resources under `platform/1/...` paths. This crate wraps that
//! API behind a typed [`Client`]:
//!
//! - **Transport**: every operation is a single stateless request/response
//!   cycle through one generic pipeline that builds the URL, serializes the
//!   body, attaches headers and HTTP Basic credentials, and classifies the
//!   response as a decoded success or a structured [`ApiError`].
//! - **Identity codec**: user/group references ([`api::Persona`],
//!   [`api::PersonaID`]) travel in three different wire shapes depending on
//!   context; the codec picks the right one on encode and accepts any of them
//!   on decode.
//! - **Partial updates**: export fields are tri-state (unset, explicitly
//!   empty, set). Unset fields are never transmitted and never clobber
//!   server-side state; the appliance's `{}` placeholder for "no value"
//!   decodes back to the unset state instead of a zero-valued struct.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use coralfs::{Client, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::builder()
//!         .endpoint("https://coral-1.example.org:8080")
//!         .username("admin")
//!         .password("secret")
//!         .build();
//!
//!     let client = Client::new(config)?;
//!
//!     let id = client.export_volume("tank").await?;
//!     client.set_export_clients(id, &["10.50.0.111".into()]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`api`] - Wire entities and the identity/partial-update codecs
//! - [`client`] - The connection, transport pipeline, and resource operations

#![warn(missing_docs)]

mod error;

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub mod api;
pub mod client;

pub use client::{ApiError, ApiErrorEntry, Client, ClientConfig};
pub use error::*;
