use ring::digest;
use serde::{Deserialize, Serialize};

use super::errors::HistoryError;
use super::geo::Coordinate;
use super::settings::UnitSystem;
use crate::services::distance_formatter::format_distance;
use crate::services::geo_math;
use crate::services::history_classifier::classify;

/// Scale used to round coordinates to 5 decimal places before hashing.
pub const COORDINATE_SCALE: f64 = 100_000.0;

/// Semantic kind of a history entry.
///
/// The integer codes returned by [`HistoryType::code`] are the stable storage form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryType {
    Unknown,
    Direction,
    Parking,
    RouteWaypoint,
    Favorite,
    PointOfInterest,
}

impl HistoryType {
    /// Every concrete (non-`Unknown`) type, in code order.
    pub const CONCRETE: [HistoryType; 5] = [
        HistoryType::Direction,
        HistoryType::Parking,
        HistoryType::RouteWaypoint,
        HistoryType::Favorite,
        HistoryType::PointOfInterest,
    ];

    pub fn code(self) -> i32 {
        match self {
            HistoryType::Unknown => -1,
            HistoryType::Direction => 0,
            HistoryType::Parking => 1,
            HistoryType::RouteWaypoint => 2,
            HistoryType::Favorite => 3,
            HistoryType::PointOfInterest => 4,
        }
    }

    pub fn from_code(code: i32) -> Result<Self, HistoryError> {
        match code {
            -1 => Ok(HistoryType::Unknown),
            0 => Ok(HistoryType::Direction),
            1 => Ok(HistoryType::Parking),
            2 => Ok(HistoryType::RouteWaypoint),
            3 => Ok(HistoryType::Favorite),
            4 => Ok(HistoryType::PointOfInterest),
            other => Err(HistoryError::InvalidType(other)),
        }
    }
}

/// Rounds a coordinate component to the fixed-point precision used for dedup.
pub fn round_coordinate(degrees: f64) -> i64 {
    (degrees * COORDINATE_SCALE).round() as i64
}

/// Computes the content hash of an entry's semantic fields.
///
/// SHA-256 over `type code | rounded lat | rounded lon | name`, truncated to the
/// first 8 bytes. Stable across processes, so stored hashes stay valid.
pub fn content_hash_of(history_type: HistoryType, coordinate: Coordinate, name: &str) -> i64 {
    let mut buf = Vec::with_capacity(20 + name.len());
    buf.extend_from_slice(&history_type.code().to_be_bytes());
    buf.extend_from_slice(&round_coordinate(coordinate.latitude()).to_be_bytes());
    buf.extend_from_slice(&round_coordinate(coordinate.longitude()).to_be_bytes());
    buf.extend_from_slice(name.as_bytes());

    let hash = digest::digest(&digest::SHA256, &buf);
    let mut head = [0u8; 8];
    head.copy_from_slice(&hash.as_ref()[..8]);
    i64::from_be_bytes(head)
}

/// A location the user visited or navigated to.
///
/// Display metadata is derived from the type; distance and bearing are derived
/// from the last reference point passed to [`HistoryEntry::recompute`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    id: i64,
    content_hash: i64,
    history_type: HistoryType,
    coordinate: Coordinate,
    timestamp: i64,
    name: String,
    type_label: String,
    icon_key: String,
    distance_meters: Option<f64>,
    bearing_degrees: Option<f64>,
    distance_label: Option<String>,
}

impl HistoryEntry {
    /// Creates a new entry.
    ///
    /// `Coordinate` is range-checked when it is built, so invalid positions
    /// are rejected with `HistoryError::InvalidCoordinate` before reaching here.
    pub fn create(
        id: i64,
        history_type: HistoryType,
        coordinate: Coordinate,
        name: &str,
        timestamp: i64,
    ) -> Self {
        let content_hash = content_hash_of(history_type, coordinate, name);
        Self::restore(id, content_hash, history_type, coordinate, name, timestamp)
    }

    /// Rebuilds an entry from persisted fields, keeping the stored content hash.
    pub fn restore(
        id: i64,
        content_hash: i64,
        history_type: HistoryType,
        coordinate: Coordinate,
        name: &str,
        timestamp: i64,
    ) -> Self {
        let classification = classify(history_type);
        Self {
            id,
            content_hash,
            history_type,
            coordinate,
            timestamp,
            name: name.to_string(),
            type_label: classification.type_label.to_string(),
            icon_key: classification.icon_key.to_string(),
            distance_meters: None,
            bearing_degrees: None,
            distance_label: None,
        }
    }

    /// Updates distance, bearing and the distance label against `reference`.
    pub fn recompute(&mut self, reference: Coordinate, unit_system: UnitSystem) {
        let meters = geo_math::distance_meters(reference, self.coordinate);
        self.distance_meters = Some(meters);
        self.bearing_degrees = Some(geo_math::bearing_degrees(reference, self.coordinate));
        self.distance_label = Some(format_distance(meters, unit_system));
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn content_hash(&self) -> i64 {
        self.content_hash
    }

    pub fn history_type(&self) -> HistoryType {
        self.history_type
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn latitude(&self) -> f64 {
        self.coordinate.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.coordinate.longitude()
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    pub fn icon_key(&self) -> &str {
        &self.icon_key
    }

    /// Distance to the last reference point, `None` until computed.
    pub fn distance_meters(&self) -> Option<f64> {
        self.distance_meters
    }

    /// Initial bearing from the last reference point, `None` until computed.
    pub fn bearing_degrees(&self) -> Option<f64> {
        self.bearing_degrees
    }

    pub fn distance_label(&self) -> Option<&str> {
        self.distance_label.as_deref()
    }

    /// Moves the timestamp forward; earlier timestamps are ignored.
    pub(crate) fn touch(&mut self, timestamp: i64) {
        self.timestamp = self.timestamp.max(timestamp);
    }

    /// Renames the entry and recomputes its content hash.
    pub(crate) fn rename(&mut self, name: &str) {
        self.name = name.to_string();
        self.content_hash = content_hash_of(self.history_type, self.coordinate, name);
    }
}
