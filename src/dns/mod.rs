pub mod payload;
pub mod reader;
pub mod report;
pub mod writer;

pub use self::payload::{DnsPayload, DnsSettings};
pub use self::reader::{
    global_dns, network_interfaces, primary_service, service_dns, service_order, ServiceDns,
};
pub use self::report::{DnsReport, KeyOutcome};
pub use self::writer::{apply_dns, apply_dns_matching, set_dns};

#[cfg(target_vendor = "apple")]
use crate::config::WriterConfig;
#[cfg(target_vendor = "apple")]
use crate::error::Result;
#[cfg(target_vendor = "apple")]
use crate::os::macos::SystemStore;

/// Set the DNS servers of every network service on this host.
///
/// Requires root privileges; without them the store rejects the writes.
#[cfg(target_vendor = "apple")]
pub fn set_system_dns<S: AsRef<str>>(addresses: &[S]) -> Result<DnsReport> {
    set_system_dns_with(&WriterConfig::default(), addresses)
}

/// Set the DNS servers of every network service on this host, using the
/// session name and key pattern from `config`.
#[cfg(target_vendor = "apple")]
pub fn set_system_dns_with<S: AsRef<str>>(
    config: &WriterConfig,
    addresses: &[S],
) -> Result<DnsReport> {
    let store = SystemStore::open(&config.session_name);
    apply_dns_matching(&store, &config.key_pattern, addresses)
}
