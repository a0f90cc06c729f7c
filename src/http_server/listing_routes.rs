//! Listing HTTP Routes
//!
//! Endpoints under `/listings`.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use crate::catalog::{Catalog, Listing};

use super::errors::{ApiError, ApiResult};
use super::parse_id;

/// Read-only listing routes; open to all callers.
pub fn read_routes(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/listings", get(get_listings))
        .route("/listings/status/:status", get(get_listings_by_status))
        .with_state(catalog)
}

/// Listing mutation routes; the server wires these behind the API-key gate.
pub fn write_routes(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/listings", post(create_listing))
        .route("/listings/:listing_id", delete(delete_listing))
        .with_state(catalog)
}

// ==================
// Handlers
// ==================

async fn get_listings(State(catalog): State<Arc<Catalog>>) -> ApiResult<Json<Vec<Listing>>> {
    Ok(Json(catalog.listings()?))
}

async fn get_listings_by_status(
    State(catalog): State<Arc<Catalog>>,
    Path(status): Path<String>,
) -> ApiResult<Json<Vec<Listing>>> {
    // An empty result is a valid response here, unlike the condo-scoped
    // listing queries.
    Ok(Json(catalog.listings_by_status(&status)?))
}

async fn create_listing(
    State(catalog): State<Arc<Catalog>>,
    payload: Result<Json<Listing>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Listing>)> {
    let Json(listing) = payload.map_err(|_| ApiError::InvalidPayload)?;
    let created = catalog.create_listing(listing)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_listing(
    State(catalog): State<Arc<Catalog>>,
    Path(listing_id): Path<String>,
) -> ApiResult<Json<Vec<Listing>>> {
    let listing_id = parse_id(&listing_id, "Listing ID")?;
    Ok(Json(catalog.delete_listing(listing_id)?))
}
