//! Listing records.

use serde::{Deserialize, Serialize};

/// A sellable or rentable unit referencing a condo and one of its room
/// types.
///
/// `status` is a free-form string; "available-for-sale" and
/// "available-for-rent" are the values in common use, but no closed set is
/// enforced. Missing payload fields decode to their zero values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Listing {
    pub listing_id: i32,
    pub condo_id: i32,
    pub type_id: String,
    pub price: i64,
    pub description: String,
    pub status: String,
}
