//! Unit tests for great-circle distance and initial bearing.

use maphistory::services::geo_math::{bearing_degrees, distance_meters, EARTH_RADIUS_METERS};
use maphistory::types::geo::Coordinate;

fn c(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).expect("valid coordinate")
}

#[test]
fn test_distance_zero_for_coincident_points() {
    let p = c(45.4642, 9.19);
    assert_eq!(distance_meters(p, p), 0.0);
}

#[test]
fn test_distance_is_symmetric() {
    let milan = c(45.4642, 9.19);
    let rome = c(41.9028, 12.4964);
    assert_eq!(distance_meters(milan, rome), distance_meters(rome, milan));
}

#[test]
fn test_distance_milan_rome() {
    let d = distance_meters(c(45.4642, 9.19), c(41.9028, 12.4964));
    // ~477 km on a 6371 km sphere
    assert!((d - 477_000.0).abs() < 3_000.0, "got {}", d);
}

#[test]
fn test_distance_antipodal_is_half_circumference() {
    let d = distance_meters(c(0.0, 0.0), c(0.0, 180.0));
    let half = std::f64::consts::PI * EARTH_RADIUS_METERS;
    assert!((d - half).abs() < 1e-3, "got {}", d);
}

#[test]
fn test_bearing_degenerate_case_is_zero() {
    let p = c(10.0, 20.0);
    assert_eq!(bearing_degrees(p, p), 0.0);
}

#[test]
fn test_bearing_diagonal() {
    let b = bearing_degrees(c(0.0, 0.0), c(1.0, 1.0));
    assert!((b - 45.0).abs() < 0.01, "got {}", b);
}

#[test]
fn test_bearing_west_is_in_range() {
    let b = bearing_degrees(c(45.0, 9.0), c(45.0, 8.0));
    assert!((0.0..360.0).contains(&b));
    assert!(b > 260.0 && b < 280.0, "got {}", b);
}
