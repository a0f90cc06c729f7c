//! Fixed sample data loaded at process start.
//!
//! The catalog has no persistence; every start rebuilds the same two condos
//! and four listings.

use super::condo::{Condo, TypeOfRoom};
use super::listing::Listing;
use super::store::Catalog;

/// A catalog pre-populated with the stock sample records.
pub fn seeded_catalog() -> Catalog {
    Catalog::with_records(sample_condos(), sample_listings())
}

/// The two sample condos.
pub fn sample_condos() -> Vec<Condo> {
    vec![
        Condo {
            condo_id: 1,
            condo_name: "Sunset Plaza".to_string(),
            address: "123 Sunshine Blvd".to_string(),
            city: "Sunnyville".to_string(),
            facilities: "Pool, Gym, Parking".to_string(),
            description: "A luxurious condo with all amenities.".to_string(),
            types: vec![
                TypeOfRoom {
                    type_id: "SP1".to_string(),
                    type_name: "1 Bedroom".to_string(),
                    description: "One bedroom condo.".to_string(),
                },
                TypeOfRoom {
                    type_id: "SP2".to_string(),
                    type_name: "2 Bedroom".to_string(),
                    description: "Two bedroom condo.".to_string(),
                },
            ],
        },
        Condo {
            condo_id: 2,
            condo_name: "Ocean Breeze".to_string(),
            address: "456 Ocean View".to_string(),
            city: "Beach City".to_string(),
            facilities: "Pool, Sauna, Parking".to_string(),
            description: "Condo with stunning ocean views.".to_string(),
            types: vec![
                TypeOfRoom {
                    type_id: "OB1-ov".to_string(),
                    type_name: "1 Bedroom".to_string(),
                    description: "One bedroom condo with ocean view.".to_string(),
                },
                TypeOfRoom {
                    type_id: "OB2-ov".to_string(),
                    type_name: "2 Bedroom".to_string(),
                    description: "Two bedroom condo with ocean view.".to_string(),
                },
            ],
        },
    ]
}

/// The four sample listings, two per sample condo.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            listing_id: 1,
            condo_id: 1,
            type_id: "SP1".to_string(),
            price: 300000,
            description: "Beautiful one bedroom condo in Sunset Plaza.".to_string(),
            status: "available-for-sale".to_string(),
        },
        Listing {
            listing_id: 2,
            condo_id: 1,
            type_id: "SP2".to_string(),
            price: 450000,
            description: "Spacious two bedroom condo in Sunset Plaza.".to_string(),
            status: "available-for-rent".to_string(),
        },
        Listing {
            listing_id: 3,
            condo_id: 2,
            type_id: "OB1-ov".to_string(),
            price: 350000,
            description: "Cozy one bedroom condo in Ocean Breeze.".to_string(),
            status: "available-for-sale".to_string(),
        },
        Listing {
            listing_id: 4,
            condo_id: 2,
            type_id: "OB2-ov".to_string(),
            price: 500000,
            description: "Luxurious two bedroom condo in Ocean Breeze.".to_string(),
            status: "available-for-rent".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let catalog = seeded_catalog();

        let condos = catalog.condos().unwrap();
        let listings = catalog.listings().unwrap();
        assert_eq!(condos.len(), 2);
        assert_eq!(listings.len(), 4);

        assert_eq!(condos[0].condo_name, "Sunset Plaza");
        assert!(condos[0].has_type("SP1"));
        assert!(condos[0].has_type("SP2"));
        assert_eq!(condos[1].condo_name, "Ocean Breeze");
    }

    #[test]
    fn test_seed_listings_reference_their_condos() {
        let condos = sample_condos();

        for listing in sample_listings() {
            let condo = condos
                .iter()
                .find(|c| c.condo_id == listing.condo_id)
                .expect("seed listing references a seed condo");
            assert!(condo.has_type(&listing.type_id));
        }
    }
}
