//! Tests for facility generation functionality
//!
//! These tests verify the simulated facility provider end to end:
//! result counts, distance policies, ranking, and reproducibility.

use clinic_finder::facility::{catalog, FacilityProvider, SimulatedFacilityProvider};
use clinic_finder::geo::Position;
use clinic_finder::types::FacilityCategory;

fn seoul() -> Position {
    Position::new(37.5665, 126.9780)
}

/// Test result counts for clinic categories versus hospitals
#[test]
fn test_result_count_policy() {
    let mut provider = SimulatedFacilityProvider::with_seed(1);
    let position = seoul();

    let clinics = provider.find_nearby(&position, FacilityCategory::Dental);
    assert_eq!(clinics.len(), 10);

    let hospitals = provider.find_nearby(&position, FacilityCategory::GeneralHospital);
    assert_eq!(hospitals.len(), 6);

    let pharmacies = provider.find_nearby(&position, FacilityCategory::Pharmacy);
    assert_eq!(pharmacies.len(), 10);
}

/// Test that results are ranked ascending by distance for every category
#[test]
fn test_results_ranked_by_distance() {
    let mut provider = SimulatedFacilityProvider::with_seed(2);
    let position = seoul();

    for category in FacilityCategory::ALL {
        let facilities = provider.find_nearby(&position, category);
        assert!(
            facilities.windows(2).all(|w| w[0].distance_m <= w[1].distance_m),
            "results for {} should be sorted ascending",
            category
        );
    }
}

/// Test per-category distance ranges
#[test]
fn test_distance_range_policy() {
    let mut provider = SimulatedFacilityProvider::with_seed(3);
    let position = seoul();

    // Hospitals are drawn from a much wider ring than clinics
    for _ in 0..20 {
        let hospitals = provider.find_nearby(&position, FacilityCategory::GeneralHospital);
        for facility in &hospitals {
            assert!((1_000..=9_000).contains(&facility.distance_m));
        }

        let clinics = provider.find_nearby(&position, FacilityCategory::InternalMedicine);
        for facility in &clinics {
            assert!((50..=1_550).contains(&facility.distance_m));
        }
    }
}

/// Test that generated names come from the category's pool
#[test]
fn test_names_come_from_category_pool() {
    let mut provider = SimulatedFacilityProvider::with_seed(4);
    let position = seoul();

    for category in FacilityCategory::ALL {
        let info = catalog::info(category);
        let facilities = provider.find_nearby(&position, category);
        for facility in &facilities {
            assert!(
                info.name_pool.contains(&facility.name.as_str()),
                "'{}' missing from the {} pool",
                facility.name,
                category
            );
        }
    }
}

/// Test address and phone number formats
#[test]
fn test_address_and_phone_formats() {
    let mut provider = SimulatedFacilityProvider::with_seed(5);
    let facilities = provider.find_nearby(&seoul(), FacilityCategory::Pharmacy);

    for facility in &facilities {
        assert!(facility.address.starts_with("서울시 "));
        assert!(facility.address.ends_with("번지"));

        let parts: Vec<&str> = facility.phone.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "02");
        assert_eq!(parts[1].len(), 4);
        assert_eq!(parts[2].len(), 4);
    }
}

/// Test that facility coordinates are consistent with the stated distance
#[test]
fn test_coordinates_match_distance() {
    let mut provider = SimulatedFacilityProvider::with_seed(6);
    let position = seoul();
    let facilities = provider.find_nearby(&position, FacilityCategory::Orthopedic);

    for facility in &facilities {
        let recovered = position.planar_distance_m(facility.lat, facility.lng);
        let delta = (recovered - facility.distance_m as f64).abs();
        assert!(
            delta < 1.0,
            "coordinates imply {:.1}m but record says {}m",
            recovered,
            facility.distance_m
        );
    }
}

/// Test seeded reproducibility of a full generation
#[test]
fn test_seeded_generation_is_reproducible() {
    let position = seoul();
    let mut first = SimulatedFacilityProvider::with_seed(77);
    let mut second = SimulatedFacilityProvider::with_seed(77);

    let a = first.find_nearby(&position, FacilityCategory::Neurology);
    let b = second.find_nearby(&position, FacilityCategory::Neurology);

    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.name, y.name);
        assert_eq!(x.address, y.address);
        assert_eq!(x.distance_m, y.distance_m);
        assert_eq!(x.phone, y.phone);
    }
}

/// Test the human-readable distance formatting
#[test]
fn test_distance_display_formatting() {
    let mut provider = SimulatedFacilityProvider::with_seed(8);
    let facilities = provider.find_nearby(&seoul(), FacilityCategory::GeneralHospital);

    for facility in &facilities {
        let display = facility.distance_display();
        if facility.distance_m < 1_000 {
            assert!(display.ends_with('m') && !display.ends_with("km"));
        } else {
            assert!(display.ends_with("km"));
        }
    }
}
