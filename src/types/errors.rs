use std::fmt;

// === HistoryError ===

/// Errors related to location history operations.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryError {
    /// Latitude or longitude is outside the WGS-84 range (or not finite).
    InvalidCoordinate { latitude: f64, longitude: f64 },
    /// A raw history type tag does not name any known type.
    InvalidType(i32),
    /// History entry with the given ID was not found.
    NotFound(i64),
    /// The change would make the entry identical to the entry with this ID.
    DuplicateEntry(i64),
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::InvalidCoordinate {
                latitude,
                longitude,
            } => write!(f, "Invalid coordinate: ({}, {})", latitude, longitude),
            HistoryError::InvalidType(code) => write!(f, "Invalid history type: {}", code),
            HistoryError::NotFound(id) => write!(f, "History entry not found: {}", id),
            HistoryError::DuplicateEntry(id) => {
                write!(f, "Duplicate history entry: {}", id)
            }
            HistoryError::DatabaseError(msg) => write!(f, "History database error: {}", msg),
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<rusqlite::Error> for HistoryError {
    fn from(e: rusqlite::Error) -> Self {
        HistoryError::DatabaseError(e.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
