//! Set the DNS resolvers of every network service through the system
//! dynamic configuration store.
//!
//! The writer and reader work against any [`DynamicStore`]. On Apple
//! platforms [`SystemStore`] talks to the SystemConfiguration dynamic store;
//! [`MemoryStore`] keeps everything in process.

mod os;

pub mod config;
pub mod dns;
pub mod error;
pub mod prelude;
pub mod store;

pub use config::WriterConfig;
pub use dns::{apply_dns, set_dns, DnsPayload, DnsReport, DnsSettings};
pub use error::{Error, Result};
pub use store::{Dictionary, DynamicStore, MemoryStore, StoreValue};

#[cfg(target_vendor = "apple")]
pub use dns::{set_system_dns, set_system_dns_with};
#[cfg(target_vendor = "apple")]
pub use os::macos::SystemStore;
