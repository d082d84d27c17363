//! Well-known dynamic store keys.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pattern matching the DNS entry of every network service plus the global one
pub const DNS_KEY_PATTERN: &str = "State:/Network/(Service/.+|Global)/DNS";
/// Pattern matching the DNS entry of every network service
pub const SERVICE_DNS_KEY_PATTERN: &str = "State:/Network/Service/.+/DNS";

pub const STATE_GLOBAL_DNS: &str = "State:/Network/Global/DNS";
pub const STATE_GLOBAL_IPV4: &str = "State:/Network/Global/IPv4";
pub const SETUP_GLOBAL_IPV4: &str = "Setup:/Network/Global/IPv4";
pub const STATE_INTERFACES: &str = "State:/Network/Interface";

const SERVICE_PREFIX: &str = "State:/Network/Service/";
const DNS_SUFFIX: &str = "/DNS";

/// DNS entry a matched key refers to
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DnsKey {
    /// `State:/Network/Global/DNS`
    Global,
    /// `State:/Network/Service/<id>/DNS`
    Service(String),
}

impl DnsKey {
    /// Return the store key path
    pub fn path(&self) -> String {
        match self {
            DnsKey::Global => STATE_GLOBAL_DNS.to_string(),
            DnsKey::Service(id) => format!("{}{}{}", SERVICE_PREFIX, id, DNS_SUFFIX),
        }
    }

    /// Service id, if the key belongs to a network service
    pub fn service_id(&self) -> Option<&str> {
        match self {
            DnsKey::Global => None,
            DnsKey::Service(id) => Some(id),
        }
    }
}

impl fmt::Display for DnsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for DnsKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == STATE_GLOBAL_DNS {
            return Ok(DnsKey::Global);
        }
        match s
            .strip_prefix(SERVICE_PREFIX)
            .and_then(|rest| rest.strip_suffix(DNS_SUFFIX))
        {
            Some(id) if !id.is_empty() => Ok(DnsKey::Service(id.to_string())),
            _ => Err(()),
        }
    }
}
