use super::payload::DnsPayload;
use super::report::DnsReport;
use crate::error::{Error, Result};
use crate::store::key::DNS_KEY_PATTERN;
use crate::store::DynamicStore;
use tracing::{debug, info, warn};

/// Install `addresses` as the DNS servers of every network service and of
/// the global DNS entry.
///
/// Returns `false` if no DNS key exists or if any single write failed.
/// Use [`apply_dns`] to find out which keys were rejected.
pub fn set_dns<St, S>(store: &St, addresses: &[S]) -> bool
where
    St: DynamicStore + ?Sized,
    S: AsRef<str>,
{
    match apply_dns(store, addresses) {
        Ok(report) => report.is_success(),
        Err(_) => false,
    }
}

/// Write `{ServerAddresses: addresses}` to every key matching the DNS key
/// pattern, reporting the outcome of each write.
pub fn apply_dns<St, S>(store: &St, addresses: &[S]) -> Result<DnsReport>
where
    St: DynamicStore + ?Sized,
    S: AsRef<str>,
{
    apply_dns_matching(store, DNS_KEY_PATTERN, addresses)
}

/// Same as [`apply_dns`] with a caller-supplied key pattern.
///
/// Keys are written in the order the store lists them. A rejected write does
/// not stop the remaining ones and is not retried.
pub fn apply_dns_matching<St, S>(store: &St, pattern: &str, addresses: &[S]) -> Result<DnsReport>
where
    St: DynamicStore + ?Sized,
    S: AsRef<str>,
{
    let payload = DnsPayload::new(addresses);
    let dict = payload.to_dictionary();

    let keys = store.key_list(pattern)?;
    if keys.is_empty() {
        warn!(pattern, "no DNS keys found in the dynamic store");
        return Err(Error::NoServices);
    }

    let mut report = DnsReport::default();
    for (index, key) in keys.into_iter().enumerate() {
        debug!(index, key = %key, "writing DNS servers");
        let written = store.set(&key, &dict);
        if !written {
            warn!(key = %key, "dynamic store rejected DNS servers");
        }
        report.push(key, written);
    }

    info!(
        keys = report.len(),
        failed = report.failed_keys().len(),
        servers = ?payload.server_addresses(),
        "DNS servers applied"
    );
    Ok(report)
}
