//! Sluice relay server binary.
//!
//! ```bash
//! # Run on the default address 0.0.0.0:9600
//! sluice-relay serve
//!
//! # Custom port and caps
//! sluice-relay serve --port 9000 --max-rooms 256 --max-rooms-per-ip 4
//! ```
//!
//! Exit codes: 0 on clean shutdown, 1 on bind failure or a fatal server
//! error, 2 on a configuration error.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sluice_relay::config::{RelayConfig, ServeArgs};
use sluice_relay::engine;

#[derive(Parser, Debug)]
#[command(name = "sluice-relay", version, about = "Zero-knowledge rendezvous relay")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Run the relay server.
    Serve(ServeArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let Command::Serve(args) = cli.command;

    let config = match RelayConfig::load(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            std::process::exit(2);
        }
    };

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(addr = %config.bind_addr, "starting sluice relay");

    let (bound_addr, relay, mut server) = match engine::start_server(config).await {
        Ok(started) => started,
        Err(err) => {
            tracing::error!(error = %err, "failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!(addr = %bound_addr, "relay listening");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
        result = &mut server => {
            if let Err(err) = result {
                tracing::error!(error = %err, "relay server task failed");
            }
            std::process::exit(1);
        }
    }

    relay.shutdown().await;
    let _ = server.await;
}
