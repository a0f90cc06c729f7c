//! # Entity Store
//!
//! The in-memory holder of all condo and listing records.
//!
//! Identifier lookups go through maps keyed by id; insertion order is kept
//! in parallel vectors so list responses come back in the order records were
//! created. All state sits behind a single `RwLock`, which makes each
//! operation's check-then-mutate sequence atomic.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::condo::Condo;
use super::errors::{CatalogError, CatalogResult};
use super::listing::Listing;
use super::validate::{validate_condo_create, validate_listing_create};

/// Unlocked store contents.
///
/// `condo_names` indexes name-uniqueness checks; `*_order` vectors record
/// insertion order for list responses.
#[derive(Debug, Default)]
pub(crate) struct CatalogState {
    pub(crate) condos: HashMap<i32, Condo>,
    pub(crate) condo_order: Vec<i32>,
    pub(crate) condo_names: HashMap<String, i32>,
    pub(crate) listings: HashMap<i32, Listing>,
    pub(crate) listing_order: Vec<i32>,
}

impl CatalogState {
    pub(crate) fn insert_condo(&mut self, condo: Condo) {
        self.condo_names
            .insert(condo.condo_name.clone(), condo.condo_id);
        self.condo_order.push(condo.condo_id);
        self.condos.insert(condo.condo_id, condo);
    }

    pub(crate) fn insert_listing(&mut self, listing: Listing) {
        self.listing_order.push(listing.listing_id);
        self.listings.insert(listing.listing_id, listing);
    }

    fn condos_in_order(&self) -> Vec<Condo> {
        self.condo_order
            .iter()
            .filter_map(|id| self.condos.get(id))
            .cloned()
            .collect()
    }

    fn listings_in_order(&self) -> Vec<Listing> {
        self.listing_order
            .iter()
            .filter_map(|id| self.listings.get(id))
            .cloned()
            .collect()
    }
}

/// The catalog of condos and listings.
///
/// Owns all records; handlers share one instance behind an `Arc`. Reads take
/// the read lock and return freshly built vectors, never references into the
/// store.
#[derive(Debug, Default)]
pub struct Catalog {
    state: RwLock<CatalogState>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog pre-populated with the given records.
    ///
    /// Seed records bypass validation; callers hand in consistent data.
    pub fn with_records(condos: Vec<Condo>, listings: Vec<Listing>) -> Self {
        let mut state = CatalogState::default();
        for condo in condos {
            state.insert_condo(condo);
        }
        for listing in listings {
            state.insert_listing(listing);
        }
        Self {
            state: RwLock::new(state),
        }
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, CatalogState>> {
        self.state.read().map_err(|_| CatalogError::Internal)
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, CatalogState>> {
        self.state.write().map_err(|_| CatalogError::Internal)
    }

    // ==================
    // Query Operations
    // ==================

    /// All condos, in insertion order.
    pub fn condos(&self) -> CatalogResult<Vec<Condo>> {
        Ok(self.read()?.condos_in_order())
    }

    /// All listings, in insertion order.
    pub fn listings(&self) -> CatalogResult<Vec<Listing>> {
        Ok(self.read()?.listings_in_order())
    }

    /// Listings under one condo. An empty result is `NoListings`.
    pub fn listings_by_condo(&self, condo_id: i32) -> CatalogResult<Vec<Listing>> {
        require_rows(self.filter_listings(|l| l.condo_id == condo_id)?)
    }

    /// Listings with an exactly matching status. An empty result is valid.
    pub fn listings_by_status(&self, status: &str) -> CatalogResult<Vec<Listing>> {
        self.filter_listings(|l| l.status == status)
    }

    /// Listings under one condo with a matching status. Empty is `NoListings`.
    pub fn listings_by_condo_and_status(
        &self,
        condo_id: i32,
        status: &str,
    ) -> CatalogResult<Vec<Listing>> {
        require_rows(self.filter_listings(|l| l.condo_id == condo_id && l.status == status)?)
    }

    /// Listings under one condo with a matching room type. Empty is `NoListings`.
    pub fn listings_by_condo_and_type(
        &self,
        condo_id: i32,
        type_id: &str,
    ) -> CatalogResult<Vec<Listing>> {
        require_rows(self.filter_listings(|l| l.condo_id == condo_id && l.type_id == type_id)?)
    }

    /// The single listing matching both ids, if any.
    ///
    /// A miss is not an error here; the transport layer decides what an
    /// absent listing looks like on the wire.
    pub fn listing_detail(
        &self,
        condo_id: i32,
        listing_id: i32,
    ) -> CatalogResult<Option<Listing>> {
        Ok(self
            .read()?
            .listings
            .get(&listing_id)
            .filter(|l| l.condo_id == condo_id)
            .cloned())
    }

    fn filter_listings(&self, keep: impl Fn(&Listing) -> bool) -> CatalogResult<Vec<Listing>> {
        let state = self.read()?;
        Ok(state
            .listing_order
            .iter()
            .filter_map(|id| state.listings.get(id))
            .filter(|l| keep(l))
            .cloned()
            .collect())
    }

    // ==================
    // Mutation Operations
    // ==================

    /// Validate and append a condo, returning the stored record.
    pub fn create_condo(&self, condo: Condo) -> CatalogResult<Condo> {
        let mut state = self.write()?;
        validate_condo_create(&condo, &state)?;
        state.insert_condo(condo.clone());
        Ok(condo)
    }

    /// Validate and append a listing, returning the stored record.
    pub fn create_listing(&self, listing: Listing) -> CatalogResult<Listing> {
        let mut state = self.write()?;
        validate_listing_create(&listing, &state)?;
        state.insert_listing(listing.clone());
        Ok(listing)
    }

    /// Remove a listing by id, preserving the relative order of the rest.
    ///
    /// An unknown id is an idempotent no-op. Returns the remaining listings.
    pub fn delete_listing(&self, listing_id: i32) -> CatalogResult<Vec<Listing>> {
        let mut state = self.write()?;
        if state.listings.remove(&listing_id).is_some() {
            state.listing_order.retain(|id| *id != listing_id);
        }
        Ok(state.listings_in_order())
    }

    /// Remove a condo by id. Dependent listings are left in place.
    ///
    /// An unknown id is an idempotent no-op. Returns the remaining condos.
    pub fn delete_condo(&self, condo_id: i32) -> CatalogResult<Vec<Condo>> {
        let mut state = self.write()?;
        if let Some(condo) = state.condos.remove(&condo_id) {
            state.condo_order.retain(|id| *id != condo_id);
            state.condo_names.remove(&condo.condo_name);
        }
        Ok(state.condos_in_order())
    }
}

fn require_rows(rows: Vec<Listing>) -> CatalogResult<Vec<Listing>> {
    if rows.is_empty() {
        return Err(CatalogError::NoListings);
    }
    Ok(rows)
}
