//! Entry registry
//!
//! The ordered, duplicate-free list of candidate entries. An entry's
//! text is its identity (case-sensitive exact match); insertion order is
//! both display order and the index space used for removal.

use serde::{Deserialize, Serialize};

use crate::error::{DrawError, DrawResult};

/// Ordered collection of unique entry labels
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    entries: Vec<String>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rebuild a registry from previously persisted entries
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Add an entry, trimming surrounding whitespace first.
    ///
    /// Returns the stored text on success. The registry is unchanged on
    /// `EmptyInput` (blank after trimming) and `DuplicateEntry`.
    pub fn add(&mut self, text: &str) -> DrawResult<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DrawError::EmptyInput);
        }
        if self.entries.iter().any(|e| e == text) {
            return Err(DrawError::DuplicateEntry(text.to_string()));
        }
        self.entries.push(text.to_string());
        Ok(text.to_string())
    }

    /// Remove the entry at `index`, shifting later entries down one slot.
    ///
    /// Returns the removed text.
    pub fn remove_at(&mut self, index: usize) -> DrawResult<String> {
        if index >= self.entries.len() {
            return Err(DrawError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Remove every entry. Errors with `NothingToClear` when already empty.
    pub fn clear(&mut self) -> DrawResult<()> {
        if self.entries.is_empty() {
            return Err(DrawError::NothingToClear);
        }
        self.entries.clear();
        Ok(())
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entry at `index`, if any
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn registry_abc() -> Registry {
        Registry::from_entries(vec!["A".into(), "B".into(), "C".into()])
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut reg = Registry::new();
        reg.add("first").unwrap();
        reg.add("second").unwrap();
        reg.add("third").unwrap();
        assert_eq!(reg.entries(), ["first", "second", "third"]);
    }

    #[test]
    fn test_add_trims_whitespace() {
        let mut reg = Registry::new();
        assert_eq!(reg.add("  spaced  ").unwrap(), "spaced");
        assert_eq!(reg.entries(), ["spaced"]);
    }

    #[test]
    fn test_add_empty_input_rejected() {
        let mut reg = Registry::new();
        assert_eq!(reg.add(""), Err(DrawError::EmptyInput));
        assert_eq!(reg.add("   "), Err(DrawError::EmptyInput));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut reg = registry_abc();
        assert_eq!(reg.add("A"), Err(DrawError::DuplicateEntry("A".into())));
        assert_eq!(reg.entries(), ["A", "B", "C"]);
    }

    #[test]
    fn test_add_duplicate_after_trim_rejected() {
        let mut reg = registry_abc();
        assert_eq!(reg.add(" B "), Err(DrawError::DuplicateEntry("B".into())));
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_duplicate_match_is_case_sensitive() {
        let mut reg = registry_abc();
        assert!(reg.add("a").is_ok());
        assert_eq!(reg.entries(), ["A", "B", "C", "a"]);
    }

    #[test]
    fn test_remove_at_shifts_down() {
        let mut reg = registry_abc();
        assert_eq!(reg.remove_at(1).unwrap(), "B");
        assert_eq!(reg.entries(), ["A", "C"]);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut reg = registry_abc();
        assert_eq!(
            reg.remove_at(3),
            Err(DrawError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut reg = registry_abc();
        reg.clear().unwrap();
        assert!(reg.is_empty());
        assert_eq!(reg.clear(), Err(DrawError::NothingToClear));
    }

    #[test]
    fn test_serializes_as_plain_string_array() {
        let reg = registry_abc();
        let json = serde_json::to_string(&reg).unwrap();
        assert_eq!(json, r#"["A","B","C"]"#);
        let back: Registry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entries(), reg.entries());
    }

    proptest! {
        /// Adding any sequence of distinct trimmed texts keeps them all,
        /// in call order.
        #[test]
        fn prop_distinct_adds_all_land_in_order(
            texts in proptest::collection::hash_set("[a-z]{1,8}", 0..20)
        ) {
            let texts: Vec<String> = texts.into_iter().collect();
            let mut reg = Registry::new();
            for t in &texts {
                reg.add(t).unwrap();
            }
            prop_assert_eq!(reg.len(), texts.len());
            prop_assert_eq!(reg.entries(), texts.as_slice());
        }

        /// A valid removal drops exactly one entry and preserves the
        /// relative order of the rest.
        #[test]
        fn prop_remove_at_drops_exactly_one(
            texts in proptest::collection::hash_set("[a-z]{1,8}", 1..20),
            idx_seed: usize,
        ) {
            let texts: Vec<String> = texts.into_iter().collect();
            let mut reg = Registry::from_entries(texts.clone());
            let idx = idx_seed % texts.len();
            let removed = reg.remove_at(idx).unwrap();
            prop_assert_eq!(&removed, &texts[idx]);
            prop_assert_eq!(reg.len(), texts.len() - 1);
            let mut expected = texts;
            expected.remove(idx);
            prop_assert_eq!(reg.entries(), expected.as_slice());
        }
    }
}
