//! Flat key/value stores.
//!
//! One type, two instances: the generic stored-data map and the environment
//! variables. Values are single strings; `set` always succeeds, `edit`
//! refuses to create a key. Callers own the user-facing wording, so the
//! store itself reports misses as plain `Option`/`bool`.

use std::collections::HashMap;

/// A unique-key to string-value map.
#[derive(Debug, Default)]
pub struct FlatStore {
    entries: HashMap<String, String>,
}

impl FlatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite a key.
    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Overwrite an existing key. Returns false (and changes nothing) if the
    /// key is absent; that is what distinguishes edit from set.
    pub fn edit(&mut self, key: &str, value: &str) -> bool {
        match self.entries.get_mut(key) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }

    /// All entries, sorted by key. Stable within a run.
    pub fn list(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
