//! # Catalog Errors
//!
//! Error types for catalog operations.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised by catalog queries and mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Listing creation referenced a condo that does not exist
    #[error("Invalid Condo ID")]
    UnknownCondo,

    /// Listing creation referenced a room type its condo does not define
    #[error("Invalid Type ID")]
    UnknownType,

    /// Condo creation reused an existing condo id or name
    #[error("Condo already exists")]
    DuplicateCondo,

    /// Listing creation reused an existing listing id
    #[error("Listing ID already exists")]
    DuplicateListing,

    /// A condo-scoped listing query matched nothing
    #[error("No listings found")]
    NoListings,

    /// The store lock was poisoned by a panicking writer
    #[error("catalog lock poisoned")]
    Internal,
}
