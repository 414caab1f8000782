//! SQLite persistence for the location history.
//!
//! Only non-derived fields are stored. Display metadata is re-derived from the
//! type on load, and distance/bearing are recomputed by the store.

use log::{debug, warn};
use rusqlite::{params, Connection};

use crate::types::errors::HistoryError;
use crate::types::geo::Coordinate;
use crate::types::history::{content_hash_of, HistoryEntry, HistoryType};

/// Contract the history store needs from a storage backend.
///
/// A save followed by a load must return the same ids, content hashes and
/// non-derived fields.
pub trait HistoryPersistence {
    fn load_all(&self) -> Result<Vec<HistoryEntry>, HistoryError>;
    fn save_all(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError>;
}

/// History persistence backed by a SQLite connection.
pub struct SqliteHistoryRepository<'a> {
    conn: &'a Connection,
}

/// Raw column values of one `history` row.
struct HistoryRow {
    id: i64,
    content_hash: i64,
    history_type: i32,
    latitude: f64,
    longitude: f64,
    timestamp: i64,
    name: String,
}

impl<'a> SqliteHistoryRepository<'a> {
    /// Creates a repository using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn read_row(row: &rusqlite::Row) -> rusqlite::Result<HistoryRow> {
        Ok(HistoryRow {
            id: row.get(0)?,
            content_hash: row.get(1)?,
            history_type: row.get(2)?,
            latitude: row.get(3)?,
            longitude: row.get(4)?,
            timestamp: row.get(5)?,
            name: row.get(6)?,
        })
    }

    fn row_to_entry(row: HistoryRow) -> Result<HistoryEntry, HistoryError> {
        let history_type = HistoryType::from_code(row.history_type)?;
        let coordinate = Coordinate::new(row.latitude, row.longitude)?;

        let expected = content_hash_of(history_type, coordinate, &row.name);
        if expected != row.content_hash {
            warn!(
                "history entry {} has stored hash {} but content hashes to {}",
                row.id, row.content_hash, expected
            );
        }

        Ok(HistoryEntry::restore(
            row.id,
            row.content_hash,
            history_type,
            coordinate,
            &row.name,
            row.timestamp,
        ))
    }
}

impl<'a> HistoryPersistence for SqliteHistoryRepository<'a> {
    /// Loads every stored entry in id order.
    fn load_all(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, content_hash, history_type, latitude, longitude, timestamp, name \
                 FROM history ORDER BY id",
            )
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::read_row)
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            let row = row.map_err(|e| HistoryError::DatabaseError(e.to_string()))?;
            results.push(Self::row_to_entry(row)?);
        }
        debug!("read {} history rows", results.len());
        Ok(results)
    }

    /// Replaces the stored history with `entries` in a single transaction.
    fn save_all(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        tx.execute("DELETE FROM history", [])
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO history \
                     (id, content_hash, history_type, latitude, longitude, timestamp, name) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                )
                .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

            for entry in entries {
                stmt.execute(params![
                    entry.id(),
                    entry.content_hash(),
                    entry.history_type().code(),
                    entry.latitude(),
                    entry.longitude(),
                    entry.timestamp(),
                    entry.name(),
                ])
                .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;
            }
        }

        tx.commit()
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;
        debug!("wrote {} history rows", entries.len());
        Ok(())
    }
}
