//! Location history database layer.
//!
//! Provides SQLite connection management, schema migrations and the
//! repository the history store persists through.
//!
//! # Usage
//!
//! ```no_run
//! use maphistory::database::{Database, SqliteHistoryRepository};
//! use maphistory::managers::history_store::HistoryStore;
//!
//! let db = Database::open("history.db").expect("failed to open database");
//! let repo = SqliteHistoryRepository::new(db.connection());
//! let store = HistoryStore::load_from(&repo).expect("failed to load history");
//! store.save_to(&repo).expect("failed to save history");
//! ```

pub mod connection;
pub mod history_repository;
pub mod migrations;

pub use connection::Database;
pub use history_repository::{HistoryPersistence, SqliteHistoryRepository};
