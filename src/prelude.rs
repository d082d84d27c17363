pub use crate::config::WriterConfig;
pub use crate::dns::{
    apply_dns, apply_dns_matching, global_dns, network_interfaces, primary_service, service_dns,
    service_order, set_dns, DnsPayload, DnsReport, DnsSettings, KeyOutcome, ServiceDns,
};
pub use crate::error::{Error, Result};
pub use crate::store::{Dictionary, DnsKey, DynamicStore, MemoryStore, StoreValue};

#[cfg(target_vendor = "apple")]
pub use crate::dns::{set_system_dns, set_system_dns_with};
#[cfg(target_vendor = "apple")]
pub use crate::os::macos::SystemStore;
