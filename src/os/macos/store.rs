use super::value::{dictionary_from_cf, dictionary_to_cf};
use crate::error::Result;
use crate::store::{Dictionary, DynamicStore};
use core_foundation::dictionary::CFDictionary;
use core_foundation::propertylist::CFPropertyList;
use system_configuration::dynamic_store::{SCDynamicStore, SCDynamicStoreBuilder};
use tracing::debug;

/// Session to the system dynamic store.
///
/// The session is released when the value is dropped.
pub struct SystemStore {
    store: SCDynamicStore,
}

impl SystemStore {
    /// Open a session registered under `name`
    pub fn open(name: &str) -> SystemStore {
        debug!(name, "opening dynamic store session");
        SystemStore {
            store: SCDynamicStoreBuilder::new(name).build(),
        }
    }
}

impl DynamicStore for SystemStore {
    fn key_list(&self, pattern: &str) -> Result<Vec<String>> {
        Ok(match self.store.get_keys(pattern) {
            Some(keys) => keys.iter().map(|key| key.to_string()).collect(),
            None => Vec::new(),
        })
    }

    fn get(&self, key: &str) -> Option<Dictionary> {
        self.store
            .get(key)
            .and_then(CFPropertyList::downcast_into::<CFDictionary>)
            .map(|dict| dictionary_from_cf(&dict))
    }

    fn set(&self, key: &str, value: &Dictionary) -> bool {
        self.store.set(key, dictionary_to_cf(value))
    }
}

impl std::fmt::Debug for SystemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::key::DNS_KEY_PATTERN;

    #[test]
    fn test_list_dns_keys() {
        let store = SystemStore::open("netdns-test");
        let keys = store.key_list(DNS_KEY_PATTERN).unwrap();
        for key in &keys {
            println!("{}: {:?}", key, store.get(key));
        }
    }

    #[test]
    fn test_missing_key() {
        let store = SystemStore::open("netdns-test");
        assert_eq!(store.get("State:/Network/NetdnsTest/Missing"), None);
    }
}
