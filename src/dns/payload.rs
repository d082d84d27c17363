#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::store::{Dictionary, StoreValue};

pub const SERVER_ADDRESSES: &str = "ServerAddresses";
pub const SEARCH_DOMAINS: &str = "SearchDomains";
pub const DOMAIN_NAME: &str = "DomainName";

/// DNS configuration written to every matched key.
///
/// Holds only the `ServerAddresses` entry; addresses are kept as given,
/// without syntax checks.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DnsPayload {
    server_addresses: Vec<String>,
}

impl DnsPayload {
    pub fn new<S: AsRef<str>>(addresses: &[S]) -> DnsPayload {
        DnsPayload {
            server_addresses: addresses.iter().map(|a| a.as_ref().to_string()).collect(),
        }
    }

    pub fn server_addresses(&self) -> &[String] {
        &self.server_addresses
    }

    /// Return the store dictionary `{ServerAddresses: [..]}`
    pub fn to_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.insert(
            SERVER_ADDRESSES.to_string(),
            StoreValue::Array(self.server_addresses.clone()),
        );
        dict
    }
}

/// DNS settings read back from a store key
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DnsSettings {
    /// Resolver addresses, in resolution order
    pub server_addresses: Vec<String>,
    pub search_domains: Vec<String>,
    pub domain_name: Option<String>,
}

impl DnsSettings {
    /// Read the known DNS entries of a dictionary; other entries are ignored
    pub fn from_dictionary(dict: &Dictionary) -> DnsSettings {
        let strings = |name: &str| -> Vec<String> {
            dict.get(name)
                .and_then(StoreValue::as_array)
                .map(|a| a.to_vec())
                .unwrap_or_default()
        };
        DnsSettings {
            server_addresses: strings(SERVER_ADDRESSES),
            search_domains: strings(SEARCH_DOMAINS),
            domain_name: dict
                .get(DOMAIN_NAME)
                .and_then(StoreValue::as_str)
                .map(|s| s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_dictionary() {
        let payload = DnsPayload::new(&["192.168.199.1", "1.1.1.1"]);
        let dict = payload.to_dictionary();
        assert_eq!(dict.len(), 1);
        assert_eq!(
            dict.get("ServerAddresses"),
            Some(&StoreValue::Array(vec![
                "192.168.199.1".to_string(),
                "1.1.1.1".to_string()
            ]))
        );
    }

    #[test]
    fn test_empty_payload_is_kept() {
        let payload = DnsPayload::new::<&str>(&[]);
        assert!(payload.server_addresses().is_empty());
        assert_eq!(
            payload.to_dictionary().get(SERVER_ADDRESSES),
            Some(&StoreValue::Array(Vec::new()))
        );
    }

    #[test]
    fn test_settings_from_dictionary() {
        let mut dict = Dictionary::new();
        dict.insert(
            SERVER_ADDRESSES.to_string(),
            StoreValue::Array(vec!["10.0.0.1".to_string()]),
        );
        dict.insert(
            SEARCH_DOMAINS.to_string(),
            StoreValue::Array(vec!["corp.example".to_string()]),
        );
        dict.insert(DOMAIN_NAME.to_string(), StoreValue::from("example"));
        // wrong type, ignored
        dict.insert(SERVER_ADDRESSES.to_string() + "Bak", StoreValue::from("x"));

        let settings = DnsSettings::from_dictionary(&dict);
        assert_eq!(settings.server_addresses, vec!["10.0.0.1"]);
        assert_eq!(settings.search_domains, vec!["corp.example"]);
        assert_eq!(settings.domain_name.as_deref(), Some("example"));
    }

    #[test]
    fn test_settings_wrong_types() {
        let mut dict = Dictionary::new();
        dict.insert(SERVER_ADDRESSES.to_string(), StoreValue::from("10.0.0.1"));
        dict.insert(
            DOMAIN_NAME.to_string(),
            StoreValue::Array(vec!["example".to_string()]),
        );
        assert_eq!(DnsSettings::from_dictionary(&dict), DnsSettings::default());
    }
}
