//! Draw history log
//!
//! Newest-first record of past draw outcomes, capped at
//! [`crate::consts::HISTORY_CAP`] records. Oldest records past the cap
//! are discarded, not archived.

use serde::{Deserialize, Serialize};

use crate::consts::HISTORY_CAP;
use crate::error::{DrawError, DrawResult};

/// A single settled draw outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Text of the selected entry
    pub item: String,
    /// Locale-formatted timestamp captured at settlement
    pub time: String,
}

/// Capped newest-first log of draw outcomes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Rebuild a history from previously persisted records
    pub fn from_records(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }

    /// Prepend a new outcome, discarding the oldest record past the cap
    pub fn record(&mut self, item: String, time: String) {
        self.records.insert(0, HistoryRecord { item, time });
        self.records.truncate(HISTORY_CAP);
    }

    /// Remove every record. Errors with `NothingToClear` when already empty.
    pub fn clear(&mut self) -> DrawResult<()> {
        if self.records.is_empty() {
            return Err(DrawError::NothingToClear);
        }
        self.records.clear();
        Ok(())
    }

    /// Records, newest first
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Most recent outcome, if any
    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_prepends_newest_first() {
        let mut hist = History::new();
        hist.record("first".into(), "t1".into());
        hist.record("second".into(), "t2".into());
        assert_eq!(hist.latest().unwrap().item, "second");
        assert_eq!(hist.records()[1].item, "first");
    }

    #[test]
    fn test_cap_discards_oldest() {
        let mut hist = History::new();
        for i in 0..55 {
            hist.record(format!("win-{i}"), format!("t{i}"));
        }
        assert_eq!(hist.len(), HISTORY_CAP);
        // Newest kept, the five oldest gone
        assert_eq!(hist.latest().unwrap().item, "win-54");
        assert_eq!(hist.records().last().unwrap().item, "win-5");
    }

    #[test]
    fn test_clear() {
        let mut hist = History::new();
        assert_eq!(hist.clear(), Err(DrawError::NothingToClear));
        hist.record("x".into(), "t".into());
        hist.clear().unwrap();
        assert!(hist.is_empty());
    }

    #[test]
    fn test_persisted_layout() {
        let mut hist = History::new();
        hist.record("prize".into(), "1/2/2025, 3:04:05 PM".into());
        let json = serde_json::to_string(&hist).unwrap();
        assert_eq!(json, r#"[{"item":"prize","time":"1/2/2025, 3:04:05 PM"}]"#);
        let back: History = serde_json::from_str(&json).unwrap();
        assert_eq!(back.records(), hist.records());
    }
}
