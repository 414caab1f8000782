//! Unit tests for the History Classifier.

use maphistory::services::history_classifier::{classify, classify_code};
use maphistory::types::errors::HistoryError;
use maphistory::types::history::HistoryType;
use rstest::rstest;
use std::collections::HashSet;

#[rstest]
#[case(HistoryType::Unknown, "history_type_unknown", "ic_custom_history_unknown")]
#[case(HistoryType::Direction, "history_type_direction", "ic_custom_history_direction")]
#[case(HistoryType::Parking, "history_type_parking", "ic_custom_parking")]
#[case(HistoryType::RouteWaypoint, "history_type_route_waypoint", "ic_custom_waypoint")]
#[case(HistoryType::Favorite, "history_type_favorite", "ic_custom_favorites")]
#[case(HistoryType::PointOfInterest, "history_type_poi", "ic_custom_poi")]
fn test_classify(#[case] history_type: HistoryType, #[case] label: &str, #[case] icon: &str) {
    let classification = classify(history_type);
    assert_eq!(classification.type_label, label);
    assert_eq!(classification.icon_key, icon);
}

#[test]
fn test_concrete_types_have_distinct_metadata() {
    let labels: HashSet<_> = HistoryType::CONCRETE
        .iter()
        .map(|t| classify(*t).type_label)
        .collect();
    let icons: HashSet<_> = HistoryType::CONCRETE
        .iter()
        .map(|t| classify(*t).icon_key)
        .collect();
    assert_eq!(labels.len(), 5);
    assert_eq!(icons.len(), 5);
}

#[test]
fn test_classify_code_matches_classify() {
    for t in HistoryType::CONCRETE {
        assert_eq!(classify_code(t.code()).unwrap(), classify(t));
    }
    assert_eq!(
        classify_code(-1).unwrap(),
        classify(HistoryType::Unknown)
    );
}

#[rstest]
#[case(-2)]
#[case(5)]
#[case(i32::MAX)]
fn test_classify_code_rejects_unknown_tags(#[case] code: i32) {
    assert_eq!(classify_code(code), Err(HistoryError::InvalidType(code)));
}
