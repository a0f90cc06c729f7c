//! Condo records and their room-type definitions.

use serde::{Deserialize, Serialize};

/// A property record owning a set of room-type definitions.
///
/// `facilities` is semantically a list but travels as a single
/// comma-delimited string; that is the wire shape clients already depend on.
/// Missing payload fields decode to their zero values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Condo {
    pub condo_id: i32,
    pub condo_name: String,
    pub address: String,
    pub city: String,
    pub facilities: String,
    pub description: String,
    pub types: Vec<TypeOfRoom>,
}

impl Condo {
    /// Whether this condo defines a room type with the given id.
    pub fn has_type(&self, type_id: &str) -> bool {
        self.types.iter().any(|t| t.type_id == type_id)
    }
}

/// A room-type definition scoped to one condo.
///
/// Owned exclusively by its parent [`Condo`]; listings reference it by
/// `type_id`. There is no standalone lifecycle: types are created and
/// removed only with their condo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeOfRoom {
    pub type_id: String,
    pub type_name: String,
    pub description: String,
}
