//! # Request Gate
//!
//! Static API-key check for mutation routes. A single shared secret, carried
//! in the `X-API-Key` header and compared in constant time.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use subtle::ConstantTimeEq;
use tracing::warn;

use super::errors::ApiError;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// The configured shared secret, cloned into the middleware layer.
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    pub fn new(secret: &str) -> Self {
        Self(Arc::from(secret))
    }

    /// Constant-time comparison of a presented key against the secret.
    pub fn matches(&self, presented: &str) -> bool {
        presented.as_bytes().ct_eq(self.0.as_bytes()).into()
    }
}

/// Middleware rejecting requests whose `X-API-Key` header does not match
/// the configured secret.
pub async fn api_key_guard(
    State(key): State<ApiKey>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !key.matches(presented) {
        warn!(path = %request.uri().path(), "request rejected: bad api key");
        return Err(ApiError::Forbidden);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_key_matches() {
        let key = ApiKey::new("super-secret");
        assert!(key.matches("super-secret"));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let key = ApiKey::new("super-secret");
        assert!(!key.matches("other-secret"));
        assert!(!key.matches(""));
    }

    #[test]
    fn test_prefix_rejected() {
        let key = ApiKey::new("super-secret");
        assert!(!key.matches("super"));
        assert!(!key.matches("super-secret-and-more"));
    }
}
