//! History Classifier.
//!
//! Maps a [`HistoryType`] to the display metadata the UI layer needs: a
//! localization key for the type label and an icon asset key. Resolving
//! either into text or an image is done by the caller.

use crate::types::errors::HistoryError;
use crate::types::history::HistoryType;

/// Display metadata for a history type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub type_label: &'static str,
    pub icon_key: &'static str,
}

/// Returns the display metadata for `history_type`.
pub fn classify(history_type: HistoryType) -> Classification {
    let (type_label, icon_key) = match history_type {
        HistoryType::Unknown => ("history_type_unknown", "ic_custom_history_unknown"),
        HistoryType::Direction => ("history_type_direction", "ic_custom_history_direction"),
        HistoryType::Parking => ("history_type_parking", "ic_custom_parking"),
        HistoryType::RouteWaypoint => ("history_type_route_waypoint", "ic_custom_waypoint"),
        HistoryType::Favorite => ("history_type_favorite", "ic_custom_favorites"),
        HistoryType::PointOfInterest => ("history_type_poi", "ic_custom_poi"),
    };
    Classification {
        type_label,
        icon_key,
    }
}

/// Classifies a raw type tag, e.g. one read back from storage.
///
/// Fails with `HistoryError::InvalidType` for tags outside the enumeration.
pub fn classify_code(code: i32) -> Result<Classification, HistoryError> {
    HistoryType::from_code(code).map(classify)
}
