//! Property-based tests for HistorySettings serialization round-trip.
//!
//! HistorySettings must survive JSON serialization and deserialization
//! without data loss for arbitrary valid inputs.

use maphistory::types::settings::{HistorySettings, UnitSystem};
use proptest::prelude::*;

fn arb_unit_system() -> impl Strategy<Value = UnitSystem> {
    prop_oneof![
        Just(UnitSystem::Metric),
        Just(UnitSystem::Imperial),
        Just(UnitSystem::Nautical),
    ]
}

fn arb_settings() -> impl Strategy<Value = HistorySettings> {
    (
        arb_unit_system(),
        proptest::option::of(0usize..100_000),
        proptest::option::of("[a-zA-Z0-9/._-]{1,50}"),
    )
        .prop_map(|(unit_system, capacity, database_path)| HistorySettings {
            unit_system,
            capacity,
            database_path,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string(&settings)
            .expect("HistorySettings should serialize to JSON");
        let restored: HistorySettings = serde_json::from_str(&json)
            .expect("HistorySettings should deserialize from JSON");
        prop_assert_eq!(restored, settings);
    }
}
