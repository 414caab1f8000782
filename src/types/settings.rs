use serde::{Deserialize, Serialize};

/// Unit system used for distance labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
    Nautical,
}

/// User-facing settings for the location history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistorySettings {
    #[serde(default)]
    pub unit_system: UnitSystem,
    /// Maximum number of stored entries; `None` keeps everything.
    #[serde(default = "default_capacity")]
    pub capacity: Option<usize>,
    /// SQLite file holding the history; `None` uses the platform data directory.
    #[serde(default)]
    pub database_path: Option<String>,
}

fn default_capacity() -> Option<usize> {
    Some(HistorySettings::DEFAULT_CAPACITY)
}

impl HistorySettings {
    pub const DEFAULT_CAPACITY: usize = 200;
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            capacity: default_capacity(),
            database_path: None,
        }
    }
}
