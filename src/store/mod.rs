pub mod key;
pub mod memory;

pub use self::key::DnsKey;
pub use self::memory::MemoryStore;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use std::collections::BTreeMap;

/// Value of a dictionary entry in the dynamic store
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StoreValue {
    /// A single string (e.g. `PrimaryService`, `DomainName`)
    String(String),
    /// An array of strings (e.g. `ServerAddresses`, `ServiceOrder`)
    Array(Vec<String>),
}

impl StoreValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StoreValue::String(s) => Some(s),
            StoreValue::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            StoreValue::String(_) => None,
            StoreValue::Array(a) => Some(a),
        }
    }
}

impl From<&str> for StoreValue {
    fn from(s: &str) -> Self {
        StoreValue::String(s.to_string())
    }
}

impl From<String> for StoreValue {
    fn from(s: String) -> Self {
        StoreValue::String(s)
    }
}

impl From<Vec<String>> for StoreValue {
    fn from(a: Vec<String>) -> Self {
        StoreValue::Array(a)
    }
}

/// Dictionary stored under a single dynamic store key
pub type Dictionary = BTreeMap<String, StoreValue>;

/// Live hierarchical key-value store holding runtime network configuration.
///
/// Keys are paths such as `State:/Network/Global/DNS`. Implementations only
/// need the three operations the DNS writer and reader use.
pub trait DynamicStore {
    /// List the keys matching a regular expression, in the store's order
    fn key_list(&self, pattern: &str) -> Result<Vec<String>>;

    /// Get the dictionary stored under `key`
    fn get(&self, key: &str) -> Option<Dictionary>;

    /// Create or replace the dictionary stored under `key`.
    /// Returns `false` if the store rejected the write.
    fn set(&self, key: &str, value: &Dictionary) -> bool;
}

impl<S: DynamicStore + ?Sized> DynamicStore for &S {
    fn key_list(&self, pattern: &str) -> Result<Vec<String>> {
        (**self).key_list(pattern)
    }

    fn get(&self, key: &str) -> Option<Dictionary> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &Dictionary) -> bool {
        (**self).set(key, value)
    }
}

impl<S: DynamicStore + ?Sized> DynamicStore for Box<S> {
    fn key_list(&self, pattern: &str) -> Result<Vec<String>> {
        (**self).key_list(pattern)
    }

    fn get(&self, key: &str) -> Option<Dictionary> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &Dictionary) -> bool {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_count<S: DynamicStore>(store: S) -> usize {
        store.key_list(".*").map(|keys| keys.len()).unwrap_or(0)
    }

    #[test]
    fn test_store_value_accessors() {
        let s = StoreValue::from("abc");
        let a = StoreValue::from(vec!["1.1.1.1".to_string()]);
        assert_eq!(s.as_str(), Some("abc"));
        assert_eq!(s.as_array(), None);
        assert_eq!(a.as_str(), None);
        assert_eq!(a.as_array(), Some(&["1.1.1.1".to_string()][..]));
    }

    #[test]
    fn test_store_by_reference_and_box() {
        let store = MemoryStore::new();
        store.insert("State:/Network/Global/DNS", Dictionary::new());
        assert_eq!(key_count(&store), 1);
        let boxed: Box<dyn DynamicStore> = Box::new(store);
        assert_eq!(key_count(boxed), 1);
    }
}
