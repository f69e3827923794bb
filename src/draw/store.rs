//! Persistence adapter contract
//!
//! A key-value store loaded once at startup and asked to save after
//! every mutation. Implementations degrade gracefully: a missing or
//! corrupt value loads as `None`, and a failed save surfaces as
//! `DrawError::Storage`, which the core downgrades to a warning and
//! keeps running in memory.

use crate::draw::history::HistoryRecord;
use crate::error::DrawResult;

/// Where entries and history live between sessions
pub trait StateStore {
    /// Previously saved entries and history.
    ///
    /// Either side is `None` when absent or unreadable; the two keys
    /// load and fail independently.
    fn load(&self) -> (Option<Vec<String>>, Option<Vec<HistoryRecord>>);

    /// Persist the current entries and history.
    ///
    /// Best-effort and not transactional: the in-memory mutation that
    /// triggered the save is never rolled back on failure.
    fn save(&mut self, entries: &[String], history: &[HistoryRecord]) -> DrawResult<()>;
}
