//! # HTTP Server Module
//!
//! JSON-over-HTTP transport for the condo catalog.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/condos*` - Condo records and condo-scoped listing queries
//! - `/listings*` - Listing records and status queries
//!
//! Mutation routes (POST/DELETE) require the `X-API-Key` header; reads are
//! open. CORS allows any origin.

pub mod auth;
pub mod condo_routes;
pub mod config;
pub mod errors;
pub mod listing_routes;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::catalog::seed;

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load configuration, seed the catalog, and serve until shutdown.
pub async fn run() -> Result<(), RunError> {
    dotenvy::dotenv().ok();
    let config = HttpServerConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog = Arc::new(seed::seeded_catalog());
    HttpServer::new(config, catalog).start().await?;

    Ok(())
}

/// Parse an integer path segment, naming the segment on failure.
pub(crate) fn parse_id(raw: &str, name: &'static str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidParameter(name))
}
