//! Pre-mutation validation rules.
//!
//! Pure checks over a snapshot of catalog state; none of them mutate. The
//! store runs these while holding the write lock, so check and append are a
//! single atomic step.

use super::condo::Condo;
use super::errors::{CatalogError, CatalogResult};
use super::listing::Listing;
use super::store::CatalogState;

/// Reject a condo whose id or name is already taken.
pub(crate) fn validate_condo_create(candidate: &Condo, state: &CatalogState) -> CatalogResult<()> {
    if state.condos.contains_key(&candidate.condo_id)
        || state.condo_names.contains_key(&candidate.condo_name)
    {
        return Err(CatalogError::DuplicateCondo);
    }
    Ok(())
}

/// Reject a listing that references a missing condo or room type, or reuses
/// an existing listing id.
pub(crate) fn validate_listing_create(
    candidate: &Listing,
    state: &CatalogState,
) -> CatalogResult<()> {
    let condo = state
        .condos
        .get(&candidate.condo_id)
        .ok_or(CatalogError::UnknownCondo)?;

    if !condo.has_type(&candidate.type_id) {
        return Err(CatalogError::UnknownType);
    }

    if state.listings.contains_key(&candidate.listing_id) {
        return Err(CatalogError::DuplicateListing);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::condo::TypeOfRoom;

    fn state_with_one_condo() -> CatalogState {
        let mut state = CatalogState::default();
        state.insert_condo(Condo {
            condo_id: 1,
            condo_name: "Sunset Plaza".to_string(),
            types: vec![TypeOfRoom {
                type_id: "SP1".to_string(),
                type_name: "1 Bedroom".to_string(),
                description: String::new(),
            }],
            ..Default::default()
        });
        state
    }

    fn candidate_listing() -> Listing {
        Listing {
            listing_id: 10,
            condo_id: 1,
            type_id: "SP1".to_string(),
            price: 100,
            description: String::new(),
            status: "available-for-sale".to_string(),
        }
    }

    #[test]
    fn test_condo_duplicate_id_rejected() {
        let state = state_with_one_condo();
        let candidate = Condo {
            condo_id: 1,
            condo_name: "Different Name".to_string(),
            ..Default::default()
        };

        assert_eq!(
            validate_condo_create(&candidate, &state),
            Err(CatalogError::DuplicateCondo)
        );
    }

    #[test]
    fn test_condo_duplicate_name_rejected() {
        let state = state_with_one_condo();
        let candidate = Condo {
            condo_id: 99,
            condo_name: "Sunset Plaza".to_string(),
            ..Default::default()
        };

        assert_eq!(
            validate_condo_create(&candidate, &state),
            Err(CatalogError::DuplicateCondo)
        );
    }

    #[test]
    fn test_condo_fresh_id_and_name_accepted() {
        let state = state_with_one_condo();
        let candidate = Condo {
            condo_id: 2,
            condo_name: "Ocean Breeze".to_string(),
            ..Default::default()
        };

        assert!(validate_condo_create(&candidate, &state).is_ok());
    }

    #[test]
    fn test_listing_unknown_condo_rejected() {
        let state = state_with_one_condo();
        let candidate = Listing {
            condo_id: 42,
            ..candidate_listing()
        };

        assert_eq!(
            validate_listing_create(&candidate, &state),
            Err(CatalogError::UnknownCondo)
        );
    }

    #[test]
    fn test_listing_unknown_type_rejected() {
        let state = state_with_one_condo();
        let candidate = Listing {
            type_id: "SP9".to_string(),
            ..candidate_listing()
        };

        assert_eq!(
            validate_listing_create(&candidate, &state),
            Err(CatalogError::UnknownType)
        );
    }

    #[test]
    fn test_listing_duplicate_id_rejected() {
        let mut state = state_with_one_condo();
        state.insert_listing(candidate_listing());

        assert_eq!(
            validate_listing_create(&candidate_listing(), &state),
            Err(CatalogError::DuplicateListing)
        );
    }

    #[test]
    fn test_listing_valid_accepted() {
        let state = state_with_one_condo();
        assert!(validate_listing_create(&candidate_listing(), &state).is_ok());
    }
}
