//! # HTTP Server
//!
//! Combines the route groups, the API-key gate, and the CORS policy into a
//! single axum router.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method};
use axum::routing::get;
use axum::{middleware, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::Catalog;

use super::auth::{api_key_guard, ApiKey, API_KEY_HEADER};
use super::condo_routes;
use super::config::HttpServerConfig;
use super::listing_routes;

/// HTTP server for the condo catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server exposing the given catalog.
    pub fn new(config: HttpServerConfig, catalog: Arc<Catalog>) -> Self {
        let router = Self::build_router(&config, catalog);
        Self { config, router }
    }

    /// Build the combined router with all endpoints.
    fn build_router(config: &HttpServerConfig, catalog: Arc<Catalog>) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([CONTENT_TYPE, HeaderName::from_static(API_KEY_HEADER)]);

        // Mutation routes sit behind the API-key gate; reads are open.
        let api_key = ApiKey::new(&config.api_key);
        let gated = condo_routes::write_routes(catalog.clone())
            .merge(listing_routes::write_routes(catalog.clone()))
            .route_layer(middleware::from_fn_with_state(api_key, api_key_guard));

        Router::new()
            .route("/health", get(health_handler))
            .merge(condo_routes::read_routes(catalog.clone()))
            .merge(listing_routes::read_routes(catalog))
            .merge(gated)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        info!(%addr, "condo-api listening");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check handler
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    #[test]
    fn test_server_socket_addr() {
        let config = HttpServerConfig::with_api_key("secret");
        let server = HttpServer::new(config, Arc::new(Catalog::new()));
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_router_builds() {
        let config = HttpServerConfig::with_api_key("secret");
        let server = HttpServer::new(config, Arc::new(seed::seeded_catalog()));
        let _router = server.router();
        // If we get here, router construction succeeded
    }
}
