// Location history state managers
// Managers own mutable state: the history store and its thread-safe handle.

pub mod history_store;
pub mod shared_history_store;
