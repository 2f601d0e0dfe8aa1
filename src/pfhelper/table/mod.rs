//! In-memory representation of one Postfix lookup table.
//!
//! A [`Table`] is an insertion-ordered mapping from key to
//! [`TableEntry`]. It is produced by [`parser`], mutated in place by the
//! command layer, and written back by [`serialize`]. The [`store`] module
//! caches one live `Table` per resolved file path.
//!
//! The core is pure: reading the file happens in [`store`], writing and
//! running `postmap` happen in the command layer.

use indexmap::IndexMap;

use crate::error::{PfError, Result};
use crate::model::{is_pseudo_key, TableEntry};

pub mod parser;
pub mod serialize;
pub mod store;

pub use serialize::SerializeOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    entries: IndexMap<String, TableEntry>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a key, failing with [`PfError::KeyNotFound`] when absent.
    pub fn get(&self, key: &str) -> Result<&TableEntry> {
        self.entries
            .get(key)
            .ok_or_else(|| PfError::KeyNotFound(key.to_string()))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut TableEntry> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| PfError::KeyNotFound(key.to_string()))
    }

    /// Non-erroring lookup, for existence-style checks.
    pub fn lookup(&self, key: &str) -> Option<&TableEntry> {
        self.entries.get(key)
    }

    pub fn lookup_mut(&mut self, key: &str) -> Option<&mut TableEntry> {
        self.entries.get_mut(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: TableEntry) -> Option<TableEntry> {
        self.entries.insert(key.into(), entry)
    }

    /// Removes an entry outright, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<TableEntry> {
        self.entries.shift_remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TableEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Iterates real entries only, skipping the comment pseudo-keys.
    pub fn real_entries(&self) -> impl Iterator<Item = (&str, &TableEntry)> {
        self.iter().filter(|(k, _)| !is_pseudo_key(k))
    }

    pub fn has_real_entry(&self) -> bool {
        self.real_entries().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deletes an entry: with `comment_out` the entry is only marked
    /// deleted and keeps its value and comments, otherwise it is removed.
    /// A missing key is a no-op either way.
    pub fn del_entry(&mut self, key: &str, comment_out: bool) {
        if comment_out {
            if let Some(entry) = self.entries.get_mut(key) {
                entry.deleted = true;
            }
        } else {
            self.entries.shift_remove(key);
        }
    }

    pub fn serialize(&self, opts: SerializeOptions) -> String {
        serialize::serialize(self, opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_key_errors() {
        let table = Table::new();
        assert!(matches!(
            table.get("nope"),
            Err(PfError::KeyNotFound(k)) if k == "nope"
        ));
    }

    #[test]
    fn insert_and_lookup() {
        let mut table = Table::new();
        table.insert("a@d", TableEntry::new("u@d", vec![], 1));
        assert!(table.contains("a@d"));
        assert_eq!(table.get("a@d").unwrap().value.as_deref(), Some("u@d"));
    }

    #[test]
    fn del_entry_hard_removes() {
        let mut table = Table::new();
        table.insert("a@d", TableEntry::new("u@d", vec![], 1));
        table.del_entry("a@d", false);
        assert!(!table.contains("a@d"));
    }

    #[test]
    fn del_entry_soft_keeps_value() {
        let mut table = Table::new();
        table.insert("a@d", TableEntry::new("u@d", vec!["kept".into()], 1));
        table.del_entry("a@d", true);
        let entry = table.get("a@d").unwrap();
        assert!(entry.deleted);
        assert_eq!(entry.value.as_deref(), Some("u@d"));
        assert_eq!(entry.comment, vec!["kept".to_string()]);
    }

    #[test]
    fn del_entry_missing_key_is_noop() {
        let mut table = Table::new();
        table.del_entry("ghost", false);
        table.del_entry("ghost", true);
        assert!(table.is_empty());
    }

    #[test]
    fn real_entries_skip_pseudo_keys() {
        use crate::model::{HEADER_KEY, TRAILING_KEY};
        let mut table = Table::new();
        table.insert(HEADER_KEY, TableEntry::comment_only(vec!["head".into()], 0));
        table.insert("a@d", TableEntry::new("u@d", vec![], 2));
        table.insert(TRAILING_KEY, TableEntry::comment_only(vec!["tail".into()], 3));
        let keys: Vec<&str> = table.real_entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a@d"]);
        assert!(table.has_real_entry());
    }
}
