/// Send a single event using configuration from the environment
///
/// ```bash
/// ADJUST_APP_TOKEN=abc123 ADJUST_ENVIRONMENT=sandbox \
///     cargo run --example track_event -- <idfa> <event_token>
/// ```
use std::env;

use adjust_s2s::{AdjustClient, ClientConfig, DeviceIdType};
use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adjust_s2s=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <idfa> <event_token>", args[0]);
        std::process::exit(1);
    }

    let config = ClientConfig::from_env().context("Failed to load Adjust configuration")?;
    let client = AdjustClient::with_config(config)?;

    let resp = client
        .track_event(DeviceIdType::Idfa, &args[1], &args[2], &chrono::Utc::now())
        .await
        .context("Tracking request failed")?;

    println!("Status: {}", resp.status);
    println!("Tracker: {} ({})", resp.tracker_name, resp.tracker_token);
    println!("Network: {}, Country: {}", resp.network, resp.country);

    Ok(())
}
