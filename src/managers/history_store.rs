//! History Store.
//!
//! Owns the collection of visited locations. Entries are addressed two ways:
//! by their store-assigned `id` (stable external reference) and by their
//! content hash (dedup: the same place visited again updates the existing
//! entry instead of adding a new one).

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};

use crate::database::history_repository::HistoryPersistence;
use crate::types::errors::HistoryError;
use crate::types::geo::Coordinate;
use crate::types::history::{content_hash_of, round_coordinate, HistoryEntry, HistoryType};
use crate::types::settings::UnitSystem;

/// Trait defining history store operations.
pub trait HistoryStoreTrait {
    fn insert_or_update(
        &mut self,
        history_type: HistoryType,
        coordinate: Coordinate,
        name: &str,
        timestamp: i64,
    ) -> Result<(HistoryEntry, bool), HistoryError>;
    fn record(
        &mut self,
        history_type: HistoryType,
        coordinate: Coordinate,
        name: &str,
    ) -> Result<(HistoryEntry, bool), HistoryError>;
    fn remove(&mut self, id: i64) -> bool;
    fn refresh_all(&mut self, reference: Coordinate, unit_system: UnitSystem);
    fn list_by_type(&self, history_type: HistoryType) -> Vec<HistoryEntry>;
    fn list_all(&self) -> Vec<HistoryEntry>;
    fn list_recent(&self, limit: usize) -> Vec<HistoryEntry>;
    fn search(&self, query: &str) -> Vec<HistoryEntry>;
    fn get(&self, id: i64) -> Option<&HistoryEntry>;
    fn find_by_content(
        &self,
        history_type: HistoryType,
        coordinate: Coordinate,
        name: &str,
    ) -> Option<&HistoryEntry>;
    fn rename(&mut self, id: i64, name: &str) -> Result<HistoryEntry, HistoryError>;
    fn touch(&mut self, id: i64, timestamp: i64) -> Result<HistoryEntry, HistoryError>;
    fn enforce_capacity(&mut self, max: usize) -> BTreeSet<i64>;
    fn clear_all(&mut self) -> usize;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// In-memory history store with content-hash deduplication.
#[derive(Debug)]
pub struct HistoryStore {
    entries: BTreeMap<i64, HistoryEntry>,
    /// Content hash -> ids. A bucket holds more than one id only when distinct
    /// contents share a hash.
    by_hash: HashMap<i64, Vec<i64>>,
    next_id: i64,
    last_timestamp: i64,
    capacity: Option<usize>,
    evicted: BTreeSet<i64>,
}

impl HistoryStore {
    /// Creates an empty store without a capacity bound.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            by_hash: HashMap::new(),
            next_id: 1,
            last_timestamp: 0,
            capacity: None,
            evicted: BTreeSet::new(),
        }
    }

    /// Creates an empty store that evicts the oldest entries beyond `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new()
        }
    }

    /// Builds a store from previously persisted entries.
    ///
    /// Entries with the same content (type, rounded position, name) are merged
    /// into the one with the lowest id, keeping the latest timestamp. Entries
    /// that only share a content hash are kept apart.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        let mut store = Self::new();
        let mut sorted = entries;
        sorted.sort_by_key(|e| e.id());

        for entry in sorted {
            let id = entry.id();
            store.next_id = store.next_id.max(id + 1);
            store.last_timestamp = store.last_timestamp.max(entry.timestamp());

            if store.entries.contains_key(&id) {
                warn!("skipping history entry with duplicate id {}", id);
                continue;
            }
            let existing = store.lookup(
                entry.content_hash(),
                entry.history_type(),
                entry.coordinate(),
                entry.name(),
            );
            if let Some(existing_id) = existing {
                warn!(
                    "merging duplicate history entry {} into {}",
                    id, existing_id
                );
                if let Some(existing) = store.entries.get_mut(&existing_id) {
                    existing.touch(entry.timestamp());
                }
                continue;
            }
            store.index(entry.content_hash(), id);
            store.entries.insert(id, entry);
        }
        store
    }

    /// Loads all entries from `persistence`.
    pub fn load_from(persistence: &dyn HistoryPersistence) -> Result<Self, HistoryError> {
        let entries = persistence.load_all()?;
        let store = Self::from_entries(entries);
        info!("loaded {} history entries", store.len());
        Ok(store)
    }

    /// Writes every entry to `persistence`, replacing what it held.
    pub fn save_to(&self, persistence: &dyn HistoryPersistence) -> Result<(), HistoryError> {
        persistence.save_all(&self.entries())?;
        info!("saved {} history entries", self.len());
        Ok(())
    }

    /// Snapshot of all entries in id order.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.values().cloned().collect()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Changes the capacity bound, evicting immediately if it shrank below the size.
    pub fn set_capacity(&mut self, capacity: Option<usize>) {
        self.capacity = capacity;
        self.apply_capacity(None);
    }

    /// Drains the ids evicted by automatic capacity enforcement since the last call.
    pub fn take_evicted(&mut self) -> BTreeSet<i64> {
        std::mem::take(&mut self.evicted)
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn apply_capacity(&mut self, keep: Option<i64>) {
        if let Some(max) = self.capacity {
            let removed = self.evict_oldest(max, keep);
            self.evicted.extend(removed);
        }
    }

    /// Evicts the oldest entries (by timestamp, then lowest id) until at most
    /// `max` remain. `keep` is never evicted, so with it set at least one entry
    /// survives.
    fn evict_oldest(&mut self, max: usize, keep: Option<i64>) -> BTreeSet<i64> {
        let mut removed = BTreeSet::new();
        let max = if keep.is_some() { max.max(1) } else { max };
        if self.entries.len() <= max {
            return removed;
        }

        let mut by_age: Vec<(i64, i64)> = self
            .entries
            .values()
            .filter(|e| Some(e.id()) != keep)
            .map(|e| (e.timestamp(), e.id()))
            .collect();
        by_age.sort_unstable();

        let excess = self.entries.len() - max;
        for (_, id) in by_age.into_iter().take(excess) {
            if self.remove(id) {
                removed.insert(id);
            }
        }
        info!("evicted {} history entries (capacity {})", removed.len(), max);
        removed
    }

    /// Id of the entry whose content matches exactly, among those sharing `hash`.
    fn lookup(
        &self,
        hash: i64,
        history_type: HistoryType,
        coordinate: Coordinate,
        name: &str,
    ) -> Option<i64> {
        self.by_hash.get(&hash).and_then(|ids| {
            ids.iter().copied().find(|id| {
                self.entries
                    .get(id)
                    .is_some_and(|e| same_content(e, history_type, coordinate, name))
            })
        })
    }

    fn index(&mut self, hash: i64, id: i64) {
        let ids = self.by_hash.entry(hash).or_default();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    fn unindex(&mut self, hash: i64, id: i64) {
        if let Some(ids) = self.by_hash.get_mut(&hash) {
            ids.retain(|&other| other != id);
            if ids.is_empty() {
                self.by_hash.remove(&hash);
            }
        }
    }

    fn sorted(mut entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
        entries.sort_by(|a, b| {
            b.timestamp()
                .cmp(&a.timestamp())
                .then_with(|| b.id().cmp(&a.id()))
        });
        entries
    }
}

fn same_content(
    entry: &HistoryEntry,
    history_type: HistoryType,
    coordinate: Coordinate,
    name: &str,
) -> bool {
    entry.history_type() == history_type
        && round_coordinate(entry.latitude()) == round_coordinate(coordinate.latitude())
        && round_coordinate(entry.longitude()) == round_coordinate(coordinate.longitude())
        && entry.name() == name
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStoreTrait for HistoryStore {
    /// Inserts a new entry, or updates the entry with the same content.
    ///
    /// Returns the stored entry and whether it was newly created. Capacity
    /// eviction triggered by the insertion never removes the new entry.
    fn insert_or_update(
        &mut self,
        history_type: HistoryType,
        coordinate: Coordinate,
        name: &str,
        timestamp: i64,
    ) -> Result<(HistoryEntry, bool), HistoryError> {
        self.last_timestamp = self.last_timestamp.max(timestamp);

        let hash = content_hash_of(history_type, coordinate, name);
        if let Some(id) = self.lookup(hash, history_type, coordinate, name) {
            if let Some(existing) = self.entries.get_mut(&id) {
                existing.touch(timestamp);
                debug!("history entry {} revisited at {}", id, existing.timestamp());
                return Ok((existing.clone(), false));
            }
        }

        let id = self.next_id;
        let entry = HistoryEntry::create(id, history_type, coordinate, name, timestamp);
        self.next_id += 1;
        self.index(hash, id);
        self.entries.insert(id, entry.clone());
        debug!("history entry {} added ({:?} '{}')", id, history_type, name);

        self.apply_capacity(Some(id));
        Ok((entry, true))
    }

    /// Same as `insert_or_update`, stamped with the store clock.
    ///
    /// The store clock never goes backwards within a session even if the
    /// system clock does.
    fn record(
        &mut self,
        history_type: HistoryType,
        coordinate: Coordinate,
        name: &str,
    ) -> Result<(HistoryEntry, bool), HistoryError> {
        let timestamp = Self::now().max(self.last_timestamp);
        self.insert_or_update(history_type, coordinate, name, timestamp)
    }

    /// Removes an entry. Removing an unknown id is a no-op returning `false`.
    fn remove(&mut self, id: i64) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => {
                self.unindex(entry.content_hash(), id);
                debug!("history entry {} removed", id);
                true
            }
            None => false,
        }
    }

    fn refresh_all(&mut self, reference: Coordinate, unit_system: UnitSystem) {
        for entry in self.entries.values_mut() {
            entry.recompute(reference, unit_system);
        }
    }

    fn list_by_type(&self, history_type: HistoryType) -> Vec<HistoryEntry> {
        Self::sorted(
            self.entries
                .values()
                .filter(|e| e.history_type() == history_type)
                .cloned()
                .collect(),
        )
    }

    /// Lists all entries, most recently touched first (ties: higher id first).
    fn list_all(&self) -> Vec<HistoryEntry> {
        Self::sorted(self.entries())
    }

    fn list_recent(&self, limit: usize) -> Vec<HistoryEntry> {
        let mut all = self.list_all();
        all.truncate(limit);
        all
    }

    /// Case-insensitive substring search on entry names.
    fn search(&self, query: &str) -> Vec<HistoryEntry> {
        let needle = query.to_lowercase();
        Self::sorted(
            self.entries
                .values()
                .filter(|e| e.name().to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        )
    }

    fn get(&self, id: i64) -> Option<&HistoryEntry> {
        self.entries.get(&id)
    }

    fn find_by_content(
        &self,
        history_type: HistoryType,
        coordinate: Coordinate,
        name: &str,
    ) -> Option<&HistoryEntry> {
        let hash = content_hash_of(history_type, coordinate, name);
        self.lookup(hash, history_type, coordinate, name)
            .and_then(|id| self.entries.get(&id))
    }

    /// Renames an entry. Fails if the new name makes it identical to another entry.
    fn rename(&mut self, id: i64, name: &str) -> Result<HistoryEntry, HistoryError> {
        let entry = self.entries.get(&id).ok_or(HistoryError::NotFound(id))?;
        let old_hash = entry.content_hash();
        let history_type = entry.history_type();
        let coordinate = entry.coordinate();
        let new_hash = content_hash_of(history_type, coordinate, name);

        if let Some(other) = self.lookup(new_hash, history_type, coordinate, name) {
            if other != id {
                return Err(HistoryError::DuplicateEntry(other));
            }
        }

        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(HistoryError::NotFound(id))?;
        entry.rename(name);
        let renamed = entry.clone();
        self.unindex(old_hash, id);
        self.index(new_hash, id);
        debug!("history entry {} renamed to '{}'", id, name);
        Ok(renamed)
    }

    /// Marks an entry as visited again at `timestamp` (never moves it back in time).
    fn touch(&mut self, id: i64, timestamp: i64) -> Result<HistoryEntry, HistoryError> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(HistoryError::NotFound(id))?;
        entry.touch(timestamp);
        self.last_timestamp = self.last_timestamp.max(timestamp);
        Ok(entry.clone())
    }

    /// Evicts the oldest entries (by timestamp, then lowest id) until at most `max` remain.
    fn enforce_capacity(&mut self, max: usize) -> BTreeSet<i64> {
        self.evict_oldest(max, None)
    }

    fn clear_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.by_hash.clear();
        info!("cleared {} history entries", count);
        count
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
