// This example installs DNS servers on every network service. Run it as root.

use clap::Parser;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "set_dns")]
#[command(about = "Set the DNS servers of every network service")]
struct Args {
    /// DNS server addresses, in resolution order
    #[arg(default_value = "192.168.199.1")]
    addresses: Vec<String>,

    /// Name of the dynamic store session
    #[arg(long, default_value = netdns::config::DEFAULT_SESSION_NAME)]
    session_name: String,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(target_vendor = "apple")]
fn run(args: &Args) -> ExitCode {
    use tracing::error;

    let config = netdns::WriterConfig::new().session_name(args.session_name.as_str());
    match netdns::set_system_dns_with(&config, &args.addresses) {
        Ok(report) => {
            for outcome in &report.outcomes {
                let status = if outcome.written { "ok" } else { "failed" };
                println!("{}\t{}", status, outcome.key);
            }
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                error!(failed = ?report.failed_keys(), "some keys were not updated; are you root?");
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_vendor = "apple"))]
fn run(_args: &Args) -> ExitCode {
    tracing::error!("the system dynamic store is only available on Apple platforms");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    run(&args)
}
