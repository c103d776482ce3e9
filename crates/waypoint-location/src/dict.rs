//! String tables
//!
//! Params, query strings and component slots are all flat `string -> string`
//! tables. Iteration follows insertion order; equality does not.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringDict {
    entries: IndexMap<String, String>,
}

impl StringDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set a value, overwriting any previous value for the key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Copy every entry of `other` into this table, overwriting on conflict.
    /// Returns the number of entries copied.
    pub fn extend_from(&mut self, other: &StringDict) -> usize {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
        other.len()
    }

    /// True when every entry of `other` is present here with the same value
    pub fn includes(&self, other: &StringDict) -> bool {
        other
            .iter()
            .all(|(key, value)| self.get(key) == Some(value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl PartialEq for StringDict {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.includes(other)
    }
}

impl Eq for StringDict {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringDict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (key, value) in iter {
            dict.set(key, value);
        }
        dict
    }
}
