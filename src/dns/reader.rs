//! Read the DNS state the system currently publishes in the dynamic store.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::payload::DnsSettings;
use crate::error::Result;
use crate::store::key::{
    SERVICE_DNS_KEY_PATTERN, SETUP_GLOBAL_IPV4, STATE_GLOBAL_DNS, STATE_GLOBAL_IPV4,
    STATE_INTERFACES,
};
use crate::store::{DnsKey, DynamicStore, StoreValue};
use tracing::debug;

const SERVICE_ORDER: &str = "ServiceOrder";
const PRIMARY_SERVICE: &str = "PrimaryService";
const INTERFACES: &str = "Interfaces";

/// DNS settings of one network service
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServiceDns {
    pub service_id: String,
    pub settings: DnsSettings,
}

/// Get the global DNS settings
pub fn global_dns<St: DynamicStore + ?Sized>(store: &St) -> Option<DnsSettings> {
    store
        .get(STATE_GLOBAL_DNS)
        .map(|dict| DnsSettings::from_dictionary(&dict))
}

/// Get the DNS settings of every network service.
///
/// Services listed in the configured service order come first, in that
/// order; the others follow in the order the store lists them.
pub fn service_dns<St: DynamicStore + ?Sized>(store: &St) -> Result<Vec<ServiceDns>> {
    let mut services: Vec<ServiceDns> = Vec::new();
    for key in store.key_list(SERVICE_DNS_KEY_PATTERN)? {
        let service_id = match key.parse::<DnsKey>() {
            Ok(DnsKey::Service(id)) => id,
            _ => continue,
        };
        let dict = match store.get(&key) {
            Some(dict) => dict,
            None => {
                debug!(key = %key, "DNS key disappeared while listing");
                continue;
            }
        };
        services.push(ServiceDns {
            service_id,
            settings: DnsSettings::from_dictionary(&dict),
        });
    }

    let order = service_order(store);
    // Stable sort keeps listing order for services absent from ServiceOrder.
    services.sort_by_key(|s| {
        order
            .iter()
            .position(|id| *id == s.service_id)
            .unwrap_or(order.len())
    });
    Ok(services)
}

/// Get the configured network service order
pub fn service_order<St: DynamicStore + ?Sized>(store: &St) -> Vec<String> {
    string_array(store, SETUP_GLOBAL_IPV4, SERVICE_ORDER)
}

/// Get the id of the primary network service
pub fn primary_service<St: DynamicStore + ?Sized>(store: &St) -> Option<String> {
    store
        .get(STATE_GLOBAL_IPV4)?
        .get(PRIMARY_SERVICE)
        .and_then(StoreValue::as_str)
        .map(|s| s.to_string())
}

/// Get the BSD names of the network interfaces known to the store
pub fn network_interfaces<St: DynamicStore + ?Sized>(store: &St) -> Vec<String> {
    string_array(store, STATE_INTERFACES, INTERFACES)
}

fn string_array<St: DynamicStore + ?Sized>(store: &St, key: &str, name: &str) -> Vec<String> {
    store
        .get(key)
        .and_then(|dict| dict.get(name).and_then(StoreValue::as_array).map(|a| a.to_vec()))
        .unwrap_or_default()
}
