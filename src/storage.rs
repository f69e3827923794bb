//! Persistence adapters
//!
//! `LocalStore` keeps entries and history in the browser's LocalStorage
//! under two independent keys, in the same JSON layout the widget has
//! always used. `MemoryStore` backs native builds and tests.

use crate::draw::history::HistoryRecord;
use crate::draw::store::StateStore;
use crate::error::DrawResult;

/// In-memory store used on native and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Option<Vec<String>>,
    history: Option<Vec<HistoryRecord>>,
}

impl MemoryStore {
    /// Entries from the most recent save, if any
    pub fn saved_entries(&self) -> Option<&Vec<String>> {
        self.entries.as_ref()
    }

    /// History from the most recent save, if any
    pub fn saved_history(&self) -> Option<&Vec<HistoryRecord>> {
        self.history.as_ref()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> (Option<Vec<String>>, Option<Vec<HistoryRecord>>) {
        (self.entries.clone(), self.history.clone())
    }

    fn save(&mut self, entries: &[String], history: &[HistoryRecord]) -> DrawResult<()> {
        self.entries = Some(entries.to_vec());
        self.history = Some(history.to_vec());
        Ok(())
    }
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    const ENTRIES_KEY: &'static str = "luckyDrawItems";
    const HISTORY_KEY: &'static str = "luckyDrawHistory";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }

    fn read<T: serde::de::DeserializeOwned>(storage: &web_sys::Storage, key: &str) -> Option<T> {
        let json = storage.get_item(key).ok()??;
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring unreadable value under {key:?}: {e}");
                None
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl StateStore for LocalStore {
    fn load(&self) -> (Option<Vec<String>>, Option<Vec<HistoryRecord>>) {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, starting fresh");
            return (None, None);
        };
        (
            Self::read(&storage, Self::ENTRIES_KEY),
            Self::read(&storage, Self::HISTORY_KEY),
        )
    }

    fn save(&mut self, entries: &[String], history: &[HistoryRecord]) -> DrawResult<()> {
        use crate::error::DrawError;

        let storage =
            Self::storage().ok_or_else(|| DrawError::Storage("LocalStorage unavailable".into()))?;

        let entries_json =
            serde_json::to_string(entries).map_err(|e| DrawError::Storage(e.to_string()))?;
        let history_json =
            serde_json::to_string(history).map_err(|e| DrawError::Storage(e.to_string()))?;

        storage
            .set_item(Self::ENTRIES_KEY, &entries_json)
            .map_err(|e| DrawError::Storage(format!("{e:?}")))?;
        storage
            .set_item(Self::HISTORY_KEY, &history_json)
            .map_err(|e| DrawError::Storage(format!("{e:?}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load(), (None, None));

        let entries = vec!["A".to_string(), "B".to_string()];
        let history = vec![HistoryRecord {
            item: "A".into(),
            time: "now".into(),
        }];
        store.save(&entries, &history).unwrap();

        let (loaded_entries, loaded_history) = store.load();
        assert_eq!(loaded_entries.unwrap(), entries);
        assert_eq!(loaded_history.unwrap(), history);
    }
}
