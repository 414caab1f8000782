//! Unit tests for unit-aware distance labels.

use maphistory::services::distance_formatter::format_distance;
use maphistory::types::settings::UnitSystem;
use rstest::rstest;

#[rstest]
#[case(0.0, "0 m")]
#[case(850.0, "850 m")]
#[case(1_234.0, "1.2 km")]
#[case(9_940.0, "9.9 km")]
#[case(12_345.0, "12 km")]
#[case(477_000.0, "477 km")]
#[case(999.4, "999 m")]
#[case(999.7, "1.0 km")]
#[case(9_990.0, "10 km")]
fn test_metric_labels(#[case] meters: f64, #[case] expected: &str) {
    assert_eq!(format_distance(meters, UnitSystem::Metric), expected);
}

#[rstest]
#[case(100.0, "328 ft")]
#[case(1_207.0, "0.75 mi")]
#[case(5_000.0, "3.1 mi")]
#[case(200_000.0, "124 mi")]
#[case(1_605.0, "1.0 mi")]
#[case(16_050.0, "10 mi")]
fn test_imperial_labels(#[case] meters: f64, #[case] expected: &str) {
    assert_eq!(format_distance(meters, UnitSystem::Imperial), expected);
}

#[rstest]
#[case(150.0, "150 m")]
#[case(5_000.0, "2.7 nmi")]
#[case(100_000.0, "54 nmi")]
#[case(18_500.0, "10 nmi")]
fn test_nautical_labels(#[case] meters: f64, #[case] expected: &str) {
    assert_eq!(format_distance(meters, UnitSystem::Nautical), expected);
}

#[test]
fn test_negative_distance_clamps_to_zero() {
    assert_eq!(format_distance(-5.0, UnitSystem::Metric), "0 m");
    assert_eq!(format_distance(-0.0, UnitSystem::Metric), "0 m");
    assert_eq!(format_distance(f64::NAN, UnitSystem::Nautical), "0 m");
}

#[rstest]
#[case(UnitSystem::Metric)]
#[case(UnitSystem::Imperial)]
#[case(UnitSystem::Nautical)]
fn test_labels_never_show_the_next_unit_threshold(#[case] units: UnitSystem) {
    let mut meters = 0.0;
    while meters < 40_000.0 {
        let label = format_distance(meters, units);
        for rolled_over in ["1000 m", "5280 ft", "1.00 mi", "10.0 km", "10.0 mi", "10.0 nmi"] {
            assert_ne!(label, rolled_over, "{} m formatted as {}", meters, label);
        }
        meters += 0.5;
    }
}
