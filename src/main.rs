//! maphistory — console demo.
//!
//! Records a few visits into an in-memory database, refreshes distances
//! against a reference point and prints the resulting history list.
//! Set `RUST_LOG=debug` to see the store's log output.

use maphistory::database::{Database, SqliteHistoryRepository};
use maphistory::managers::history_store::{HistoryStore, HistoryStoreTrait};
use maphistory::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use maphistory::types::geo::Coordinate;
use maphistory::types::history::{HistoryEntry, HistoryType};
use maphistory::types::settings::UnitSystem;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!();
    println!("maphistory v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!();

    let mut engine = SettingsEngine::new(None);
    let settings = engine.load()?;

    let db = Database::open_in_memory()?;
    let repo = SqliteHistoryRepository::new(db.connection());
    let mut store = HistoryStore::load_from(&repo)?;
    store.set_capacity(settings.capacity);

    let visits = [
        (HistoryType::Favorite, 45.4642, 9.19, "Home", 100),
        (HistoryType::Parking, 45.4781, 9.2275, "Parked car", 200),
        (HistoryType::PointOfInterest, 45.4641, 9.1919, "Duomo", 300),
        (HistoryType::RouteWaypoint, 45.4854, 9.2043, "Centrale", 400),
        (HistoryType::Favorite, 45.464201, 9.190001, "Home", 500),
    ];
    for (history_type, lat, lon, name, timestamp) in visits {
        let (entry, was_new) =
            store.insert_or_update(history_type, Coordinate::new(lat, lon)?, name, timestamp)?;
        println!(
            "  {} #{} {} '{}'",
            if was_new { "added  " } else { "updated" },
            entry.id(),
            entry.type_label(),
            entry.name()
        );
    }

    let reference = Coordinate::new(45.4668, 9.1905)?;
    for units in [settings.unit_system, UnitSystem::Imperial] {
        store.refresh_all(reference, units);
        println!();
        println!("  History ({:?}):", units);
        for entry in store.list_all() {
            print_entry(&entry);
        }
    }

    if let Some(latest) = store.list_recent(1).first() {
        println!();
        println!("  Most recent entry as JSON:");
        println!("{}", serde_json::to_string_pretty(latest)?);
    }

    store.save_to(&repo)?;
    println!();
    println!("  Saved {} entries", store.len());
    Ok(())
}

fn print_entry(entry: &HistoryEntry) {
    println!(
        "    #{:<3} {:<12} {:<28} {:>9} {:>6.1}°  [{}]",
        entry.id(),
        entry.name(),
        entry.type_label(),
        entry.distance_label().unwrap_or("-"),
        entry.bearing_degrees().unwrap_or(0.0),
        entry.icon_key()
    );
}
