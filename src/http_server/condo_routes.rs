//! Condo HTTP Routes
//!
//! Endpoints under `/condos`, including the condo-scoped listing queries.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use crate::catalog::{Catalog, Condo, Listing};

use super::errors::{ApiError, ApiResult};
use super::parse_id;

/// Read-only condo routes; open to all callers.
pub fn read_routes(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/condos", get(get_condos))
        .route("/condos/:condo_id/listings", get(get_listings_by_condo))
        .route(
            "/condos/:condo_id/type/:type_id",
            get(get_listings_by_condo_and_type),
        )
        .route(
            "/condos/:condo_id/listings/status/:status",
            get(get_listings_by_condo_and_status),
        )
        .route(
            "/condos/:condo_id/listings/:listing_id",
            get(get_listing_detail),
        )
        .with_state(catalog)
}

/// Condo mutation routes; the server wires these behind the API-key gate.
pub fn write_routes(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/condos", post(create_condo))
        .route("/condos/:condo_id", delete(delete_condo))
        .with_state(catalog)
}

// ==================
// Handlers
// ==================

async fn get_condos(State(catalog): State<Arc<Catalog>>) -> ApiResult<Json<Vec<Condo>>> {
    Ok(Json(catalog.condos()?))
}

async fn get_listings_by_condo(
    State(catalog): State<Arc<Catalog>>,
    Path(condo_id): Path<String>,
) -> ApiResult<Json<Vec<Listing>>> {
    let condo_id = parse_id(&condo_id, "Condo ID")?;
    Ok(Json(catalog.listings_by_condo(condo_id)?))
}

async fn get_listings_by_condo_and_type(
    State(catalog): State<Arc<Catalog>>,
    Path((condo_id, type_id)): Path<(String, String)>,
) -> ApiResult<Json<Vec<Listing>>> {
    let condo_id = parse_id(&condo_id, "Condo ID")?;
    Ok(Json(catalog.listings_by_condo_and_type(condo_id, &type_id)?))
}

async fn get_listings_by_condo_and_status(
    State(catalog): State<Arc<Catalog>>,
    Path((condo_id, status)): Path<(String, String)>,
) -> ApiResult<Json<Vec<Listing>>> {
    let condo_id = parse_id(&condo_id, "Condo ID")?;
    Ok(Json(
        catalog.listings_by_condo_and_status(condo_id, &status)?,
    ))
}

async fn get_listing_detail(
    State(catalog): State<Arc<Catalog>>,
    Path((condo_id, listing_id)): Path<(String, String)>,
) -> ApiResult<Response> {
    let condo_id = parse_id(&condo_id, "Condo ID")?;
    let listing_id = parse_id(&listing_id, "Listing ID")?;

    // A miss deliberately yields 200 with an empty body, not 404.
    Ok(match catalog.listing_detail(condo_id, listing_id)? {
        Some(listing) => Json(listing).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

async fn create_condo(
    State(catalog): State<Arc<Catalog>>,
    payload: Result<Json<Condo>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Condo>)> {
    let Json(condo) = payload.map_err(|_| ApiError::InvalidPayload)?;
    let created = catalog.create_condo(condo)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_condo(
    State(catalog): State<Arc<Catalog>>,
    Path(condo_id): Path<String>,
) -> ApiResult<Json<Vec<Condo>>> {
    let condo_id = parse_id(&condo_id, "Condo ID")?;
    Ok(Json(catalog.delete_condo(condo_id)?))
}
