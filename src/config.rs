#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::store::key::DNS_KEY_PATTERN;

/// Default name of the dynamic store session
pub const DEFAULT_SESSION_NAME: &str = "setDNS";

/// Settings for a DNS write session
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WriterConfig {
    /// Name the session is registered under in the dynamic store
    pub session_name: String,
    /// Pattern selecting the keys the payload is written to
    pub key_pattern: String,
}

impl WriterConfig {
    pub fn new() -> WriterConfig {
        WriterConfig::default()
    }

    pub fn session_name(mut self, name: impl Into<String>) -> WriterConfig {
        self.session_name = name.into();
        self
    }

    pub fn key_pattern(mut self, pattern: impl Into<String>) -> WriterConfig {
        self.key_pattern = pattern.into();
        self
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            session_name: DEFAULT_SESSION_NAME.to_string(),
            key_pattern: DNS_KEY_PATTERN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WriterConfig::default();
        assert_eq!(config.session_name, "setDNS");
        assert_eq!(config.key_pattern, "State:/Network/(Service/.+|Global)/DNS");
    }

    #[test]
    fn test_builder() {
        let config = WriterConfig::new()
            .session_name("netdns-test")
            .key_pattern("State:/Network/Global/DNS");
        assert_eq!(config.session_name, "netdns-test");
        assert_eq!(config.key_pattern, "State:/Network/Global/DNS");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial() {
        let config: WriterConfig =
            serde_json::from_str(r#"{"session_name":"custom"}"#).unwrap();
        assert_eq!(config.session_name, "custom");
        assert_eq!(config.key_pattern, DNS_KEY_PATTERN);
    }
}
