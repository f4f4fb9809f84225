//! Remote catalogue gateway: typed access to the Catalogue Manager REST API.

mod api;
mod client;
pub mod config;
pub mod error;

pub use api::CatalogueApi;
pub use client::{CatalogueClient, WRITE_ACKNOWLEDGED, truncate};
pub use config::ClientConfig;
pub use error::GatewayError;
