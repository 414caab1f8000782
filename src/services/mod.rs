// Location history services
// Stateless helpers (geometry, formatting, classification) and the settings engine.

pub mod distance_formatter;
pub mod geo_math;
pub mod history_classifier;
pub mod settings_engine;
