//! Dictionary tables consulted before the phonetic rules.
//!
//! Each language-pair direction has one `DictionaryTable` with two
//! partitions: person names, which are only consulted when a gender is
//! given, and general vocabulary.

mod entry;
mod loader;

pub use entry::DictEntry;
pub use loader::{parse_mapping, DictRecordError, ParsedMapping};

use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct DictionaryTable {
    names: HashMap<String, String>,
    other: HashMap<String, String>,
}

impl DictionaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, lowercased. Returns `false` if the key was already
    /// present in the target partition; the earlier entry is kept.
    pub fn insert(&mut self, entry: DictEntry) -> bool {
        let map = if entry.is_person_name {
            &mut self.names
        } else {
            &mut self.other
        };
        match map.entry(entry.source.to_lowercase()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(entry.dest.to_lowercase());
                true
            }
        }
    }

    /// Exact, case-insensitive lookup in one partition.
    pub fn lookup(&self, word: &str, use_person_names: bool) -> Option<&str> {
        let map = if use_person_names {
            &self.names
        } else {
            &self.other
        };
        map.get(normalize(word).as_ref()).map(String::as_str)
    }

    pub fn names_len(&self) -> usize {
        self.names.len()
    }

    pub fn other_len(&self) -> usize {
        self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.other.is_empty()
    }
}

/// Lowercase `word`, borrowing it when it is already lowercase.
pub fn normalize(word: &str) -> Cow<'_, str> {
    if word.chars().all(|c| c.to_lowercase().eq([c])) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.to_lowercase())
    }
}

impl FromIterator<DictEntry> for DictionaryTable {
    fn from_iter<I: IntoIterator<Item = DictEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_are_separate() {
        let table: DictionaryTable = [
            DictEntry::new("galle", "ගාල්ල", false),
            DictEntry::new("galle", "ගාලේ", true),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.lookup("galle", false), Some("ගාල්ල"));
        assert_eq!(table.lookup("galle", true), Some("ගාලේ"));
        assert_eq!(table.names_len(), 1);
        assert_eq!(table.other_len(), 1);
    }

    #[test]
    fn first_entry_wins() {
        let mut table = DictionaryTable::new();
        assert!(table.insert(DictEntry::new("Perera", "පෙරේරා", true)));
        assert!(!table.insert(DictEntry::new("perera", "පෙරෙරා", true)));
        assert_eq!(table.lookup("perera", true), Some("පෙරේරා"));
    }

    #[test]
    fn lookup_is_case_insensitive_and_exact() {
        let table: DictionaryTable = [DictEntry::new("Colombo", "Kolamba", false)]
            .into_iter()
            .collect();
        assert_eq!(table.lookup("COLOMBO", false), Some("kolamba"));
        assert_eq!(table.lookup("colomb", false), None);
        assert_eq!(table.lookup("colombo7", false), None);
        assert_eq!(table.lookup("colombo", true), None);
    }

    #[test]
    fn normalize_borrows_lowercase_words() {
        assert!(matches!(normalize("kumarasiri"), Cow::Borrowed("kumarasiri")));
        assert!(matches!(normalize("කොළඹ"), Cow::Borrowed(_)));
        assert!(matches!(normalize("a-b, c"), Cow::Borrowed(_)));
        assert_eq!(normalize("Kumarasiri"), "kumarasiri");
        assert!(matches!(normalize("ǅ"), Cow::Owned(_)));
    }

    #[test]
    fn empty_table() {
        let table = DictionaryTable::new();
        assert!(table.is_empty());
        assert_eq!(table.lookup("", false), None);
    }
}
