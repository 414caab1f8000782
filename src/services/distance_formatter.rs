// Distance formatting
// Turns a distance in meters into a short, unit-aware label for list rows.

use crate::types::settings::UnitSystem;

const METERS_PER_KILOMETER: f64 = 1000.0;
const METERS_PER_MILE: f64 = 1609.344;
const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;
const FEET_PER_METER: f64 = 3.280_84;

/// Formats `meters` for display in the given unit system.
///
/// - Metric: `"850 m"`, `"1.2 km"`, `"37 km"`
/// - Imperial: `"420 ft"`, `"0.75 mi"`, `"3.4 mi"`, `"120 mi"`
/// - Nautical: `"150 m"`, `"2.7 nmi"`, `"45 nmi"`
///
/// Unit and precision are picked from the value as it will be displayed, so
/// 999.7 m reads `"1.0 km"` rather than `"1000 m"`.
pub fn format_distance(meters: f64, unit_system: UnitSystem) -> String {
    // Also maps NaN and -0.0 to 0.
    let meters = if meters > 0.0 { meters } else { 0.0 };
    match unit_system {
        UnitSystem::Metric => {
            let whole_meters = meters.round();
            if whole_meters < METERS_PER_KILOMETER {
                return format!("{:.0} m", whole_meters);
            }
            format_scaled(meters / METERS_PER_KILOMETER, "km")
        }
        UnitSystem::Imperial => {
            let miles = meters / METERS_PER_MILE;
            if miles < 0.1 {
                return format!("{:.0} ft", (meters * FEET_PER_METER).round());
            }
            let hundredths = round_to(miles, 100.0);
            if hundredths < 1.0 {
                format!("{:.2} mi", hundredths)
            } else {
                format_scaled(miles, "mi")
            }
        }
        UnitSystem::Nautical => {
            let nmi = meters / METERS_PER_NAUTICAL_MILE;
            if nmi < 0.1 {
                return format!("{:.0} m", meters.round());
            }
            format_scaled(nmi, "nmi")
        }
    }
}

/// One decimal below 10 units, whole units from there on.
fn format_scaled(value: f64, unit: &str) -> String {
    let tenths = round_to(value, 10.0);
    if tenths < 10.0 {
        format!("{:.1} {}", tenths, unit)
    } else {
        format!("{:.0} {}", value.round(), unit)
    }
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}
