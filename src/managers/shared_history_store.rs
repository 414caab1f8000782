//! Thread-safe handle around [`HistoryStore`].
//!
//! Background location updates and UI queries can hold clones of the same
//! handle. Every call takes the lock for its whole duration, so writes never
//! interleave and list calls return a consistent snapshot.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use log::warn;

use super::history_store::{HistoryStore, HistoryStoreTrait};
use crate::database::history_repository::HistoryPersistence;
use crate::types::errors::HistoryError;
use crate::types::geo::Coordinate;
use crate::types::history::{HistoryEntry, HistoryType};
use crate::types::settings::UnitSystem;

/// Cloneable, mutex-guarded history store.
#[derive(Debug, Clone, Default)]
pub struct SharedHistoryStore {
    inner: Arc<Mutex<HistoryStore>>,
}

impl SharedHistoryStore {
    pub fn new(store: HistoryStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HistoryStore> {
        // Store operations never leave the maps half-updated, so a poisoned
        // lock still guards a usable store.
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("history store lock was poisoned; recovering");
            poisoned.into_inner()
        })
    }

    /// Runs `f` with exclusive access to the underlying store.
    pub fn with_store<R>(&self, f: impl FnOnce(&mut HistoryStore) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    pub fn insert_or_update(
        &self,
        history_type: HistoryType,
        coordinate: Coordinate,
        name: &str,
        timestamp: i64,
    ) -> Result<(HistoryEntry, bool), HistoryError> {
        self.lock()
            .insert_or_update(history_type, coordinate, name, timestamp)
    }

    pub fn record(
        &self,
        history_type: HistoryType,
        coordinate: Coordinate,
        name: &str,
    ) -> Result<(HistoryEntry, bool), HistoryError> {
        self.lock().record(history_type, coordinate, name)
    }

    pub fn remove(&self, id: i64) -> bool {
        self.lock().remove(id)
    }

    pub fn refresh_all(&self, reference: Coordinate, unit_system: UnitSystem) {
        self.lock().refresh_all(reference, unit_system)
    }

    pub fn list_all(&self) -> Vec<HistoryEntry> {
        self.lock().list_all()
    }

    pub fn list_by_type(&self, history_type: HistoryType) -> Vec<HistoryEntry> {
        self.lock().list_by_type(history_type)
    }

    pub fn get(&self, id: i64) -> Option<HistoryEntry> {
        self.lock().get(id).cloned()
    }

    pub fn enforce_capacity(&self, max: usize) -> BTreeSet<i64> {
        self.lock().enforce_capacity(max)
    }

    pub fn take_evicted(&self) -> BTreeSet<i64> {
        self.lock().take_evicted()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn save_to(&self, persistence: &dyn HistoryPersistence) -> Result<(), HistoryError> {
        self.lock().save_to(persistence)
    }
}
