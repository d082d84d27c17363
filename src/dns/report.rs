#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::store::DnsKey;

/// Result of writing the payload to one key
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyOutcome {
    /// Store key path
    pub key: String,
    /// Whether the store accepted the write
    pub written: bool,
}

impl KeyOutcome {
    /// Typed view of the key, if it is a DNS key
    pub fn dns_key(&self) -> Option<DnsKey> {
        self.key.parse().ok()
    }
}

/// Per-key outcomes of a DNS write, in write order
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DnsReport {
    pub outcomes: Vec<KeyOutcome>,
}

impl DnsReport {
    pub(crate) fn push(&mut self, key: String, written: bool) {
        self.outcomes.push(KeyOutcome { key, written });
    }

    /// True only if at least one key was written and every write succeeded
    pub fn is_success(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(|o| o.written)
    }

    /// Keys the store rejected
    pub fn failed_keys(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.written)
            .map(|o| o.key.as_str())
            .collect()
    }

    /// Keys written successfully
    pub fn written_keys(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.written)
            .map(|o| o.key.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(outcomes: &[(&str, bool)]) -> DnsReport {
        let mut report = DnsReport::default();
        for (key, written) in outcomes {
            report.push(key.to_string(), *written);
        }
        report
    }

    #[test]
    fn test_success_requires_every_write() {
        assert!(report(&[("a", true), ("b", true)]).is_success());
        assert!(!report(&[("a", true), ("b", false)]).is_success());
        assert!(!report(&[]).is_success());
    }

    #[test]
    fn test_failed_and_written_keys() {
        let r = report(&[("a", true), ("b", false), ("c", true)]);
        assert_eq!(r.failed_keys(), vec!["b"]);
        assert_eq!(r.written_keys(), vec!["a", "c"]);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn test_outcome_dns_key() {
        let r = report(&[("State:/Network/Service/1/DNS", true), ("other", true)]);
        assert_eq!(
            r.outcomes[0].dns_key(),
            Some(DnsKey::Service("1".to_string()))
        );
        assert_eq!(r.outcomes[1].dns_key(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_report() {
        let r = report(&[("State:/Network/Global/DNS", false)]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"outcomes":[{"key":"State:/Network/Global/DNS","written":false}]}"#
        );
    }
}
