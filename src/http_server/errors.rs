//! # HTTP API Errors
//!
//! Error types for the HTTP surface.
//!
//! Every error is handled at the request boundary: mapped to a status code
//! with a plain-text body. Nothing propagates past the single request and
//! nothing is retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::catalog::CatalogError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request body could not be parsed into the expected shape
    #[error("Invalid request payload")]
    InvalidPayload,

    /// A path segment expected to be an integer was not
    #[error("Invalid {0}")]
    InvalidParameter(&'static str),

    /// X-API-Key header missing or wrong
    #[error("Forbidden")]
    Forbidden,

    /// Catalog-level failure
    #[error("{0}")]
    Catalog(#[from] CatalogError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,

            // 403 Forbidden
            ApiError::Forbidden => StatusCode::FORBIDDEN,

            ApiError::Catalog(err) => match err {
                CatalogError::UnknownCondo
                | CatalogError::UnknownType
                | CatalogError::DuplicateCondo
                | CatalogError::DuplicateListing => StatusCode::BAD_REQUEST,

                // 404 Not Found
                CatalogError::NoListings => StatusCode::NOT_FOUND,

                // 500 Internal Server Error
                CatalogError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidPayload.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidParameter("Condo ID").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::from(CatalogError::NoListings).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CatalogError::Internal).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_catalog_error_propagation() {
        for err in [
            CatalogError::UnknownCondo,
            CatalogError::UnknownType,
            CatalogError::DuplicateCondo,
            CatalogError::DuplicateListing,
        ] {
            assert_eq!(ApiError::from(err).status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_parameter_error_names_the_segment() {
        assert_eq!(
            ApiError::InvalidParameter("Condo ID").to_string(),
            "Invalid Condo ID"
        );
    }
}
