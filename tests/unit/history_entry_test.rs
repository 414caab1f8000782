//! Unit tests for HistoryEntry construction and distance recompute.

use maphistory::services::history_classifier::classify;
use maphistory::types::errors::HistoryError;
use maphistory::types::geo::Coordinate;
use maphistory::types::history::{content_hash_of, HistoryEntry, HistoryType};
use maphistory::types::settings::UnitSystem;

fn home() -> HistoryEntry {
    HistoryEntry::create(
        1,
        HistoryType::Favorite,
        Coordinate::new(45.0, 9.0).unwrap(),
        "Home",
        100,
    )
}

#[test]
fn test_create_derives_display_fields() {
    let entry = home();
    let classification = classify(HistoryType::Favorite);
    assert_eq!(entry.id(), 1);
    assert_eq!(entry.name(), "Home");
    assert_eq!(entry.timestamp(), 100);
    assert_eq!(entry.type_label(), classification.type_label);
    assert_eq!(entry.icon_key(), classification.icon_key);
    assert_eq!(
        entry.content_hash(),
        content_hash_of(HistoryType::Favorite, entry.coordinate(), "Home")
    );
}

#[test]
fn test_derived_fields_start_uncomputed() {
    let entry = home();
    assert_eq!(entry.distance_meters(), None);
    assert_eq!(entry.bearing_degrees(), None);
    assert_eq!(entry.distance_label(), None);
}

#[test]
fn test_invalid_coordinate_cannot_be_built() {
    assert_eq!(
        Coordinate::new(95.0, 9.0).unwrap_err(),
        HistoryError::InvalidCoordinate {
            latitude: 95.0,
            longitude: 9.0
        }
    );
    assert!(Coordinate::new(f64::NAN, 9.0).is_err());
    assert!(Coordinate::new(45.0, f64::NEG_INFINITY).is_err());

    let parsed = serde_json::from_str::<Coordinate>(r#"{"latitude": 45.0, "longitude": 200.0}"#);
    assert!(parsed.is_err());
}

#[test]
fn test_recompute_sets_distance_bearing_and_label() {
    let mut entry = home();
    let reference = Coordinate::new(44.0, 9.0).unwrap();

    entry.recompute(reference, UnitSystem::Metric);

    let meters = entry.distance_meters().unwrap();
    assert!((meters - 111_195.0).abs() < 1.0, "got {}", meters);
    assert!(entry.bearing_degrees().unwrap().abs() < 1e-9);
    assert_eq!(entry.distance_label(), Some("111 km"));
}

#[test]
fn test_recompute_is_idempotent_and_unit_aware() {
    let mut entry = home();
    let reference = Coordinate::new(45.01, 9.0).unwrap();

    entry.recompute(reference, UnitSystem::Metric);
    let first = entry.clone();
    entry.recompute(reference, UnitSystem::Metric);
    assert_eq!(entry, first);

    entry.recompute(reference, UnitSystem::Imperial);
    assert_eq!(entry.distance_meters(), first.distance_meters());
    assert_eq!(entry.distance_label(), Some("0.69 mi"));
    // Due south of the reference point.
    assert!((entry.bearing_degrees().unwrap() - 180.0).abs() < 1e-6);
}

#[test]
fn test_recompute_does_not_change_identity() {
    let mut entry = home();
    let (id, hash) = (entry.id(), entry.content_hash());
    entry.recompute(Coordinate::new(0.0, 0.0).unwrap(), UnitSystem::Nautical);
    assert_eq!(entry.id(), id);
    assert_eq!(entry.content_hash(), hash);
}

#[test]
fn test_hash_distinguishes_type_and_name() {
    let p = Coordinate::new(45.0, 9.0).unwrap();
    let favorite = content_hash_of(HistoryType::Favorite, p, "Home");
    assert_ne!(favorite, content_hash_of(HistoryType::Parking, p, "Home"));
    assert_ne!(favorite, content_hash_of(HistoryType::Favorite, p, "home"));
    assert_eq!(favorite, content_hash_of(HistoryType::Favorite, p, "Home"));
}

#[test]
fn test_serializes_stored_and_derived_fields() {
    let mut entry = home();
    entry.recompute(Coordinate::new(44.0, 9.0).unwrap(), UnitSystem::Metric);

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["content_hash"], entry.content_hash());
    assert_eq!(json["history_type"], "favorite");
    assert_eq!(json["coordinate"]["latitude"], 45.0);
    assert_eq!(json["name"], "Home");
    assert_eq!(json["icon_key"], entry.icon_key());
    assert_eq!(json["distance_label"], "111 km");
}
