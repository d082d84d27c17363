// This example shows the DNS configuration published in the dynamic store.

#[cfg(target_vendor = "apple")]
fn main() {
    use netdns::prelude::*;

    tracing_subscriber::fmt().with_target(false).init();

    let store = SystemStore::open(netdns::config::DEFAULT_SESSION_NAME);

    println!("Global DNS");
    match global_dns(&store) {
        Some(settings) => println!("\t{:?}", settings),
        None => println!("\tnone"),
    }

    println!("Primary service: {:?}", primary_service(&store));
    println!("Service order: {:?}", service_order(&store));

    match service_dns(&store) {
        Ok(services) => {
            for service in services {
                println!("Service {}", service.service_id);
                println!("\tServers: {:?}", service.settings.server_addresses);
                println!("\tSearch domains: {:?}", service.settings.search_domains);
                println!("\tDomain name: {:?}", service.settings.domain_name);
            }
        }
        Err(e) => println!("Error: {}", e),
    }

    println!("Interfaces: {:?}", network_interfaces(&store));
}

#[cfg(not(target_vendor = "apple"))]
fn main() {
    println!("The system dynamic store is only available on Apple platforms");
}
