use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use steam_deals::{search_alerts, Alerts, FilterCriteria, InvocationParams};
use storesearch::StoreSearchClient;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    params: InvocationParams,

    /// Base URL of the storefront API
    #[arg(long, env = "STEAM_DEALS_STORE_API", default_value = StoreSearchClient::STORE_API_BASE_URL)]
    store_api: String,

    /// Search again every N seconds instead of running once
    #[arg(long, env = "STEAM_DEALS_EVERY_SECS", value_parser = clap::value_parser!(u64).range(1..))]
    every: Option<u64>,

    /// Pretty print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn print_alerts(alerts: &Alerts, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(alerts)?
    } else {
        serde_json::to_string(alerts)?
    };
    println!("{json}");
    Ok(())
}

async fn poll(
    client: &StoreSearchClient,
    criteria: &FilterCriteria,
    every: Duration,
    pretty: bool,
) -> Result<()> {
    let mut interval = tokio::time::interval(every);
    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                return Ok(());
            }
        }
        // every tick is a fresh search, a failed one doesn't stop the next
        match search_alerts(client, criteria).await {
            Ok(alerts) => print_alerts(&alerts, pretty)?,
            Err(e) => error!("Search failed {e}"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let criteria = args.params.criteria()?;
    let client = StoreSearchClient::with_base_url(
        concat!("steam-deals/", env!("CARGO_PKG_VERSION")),
        args.store_api,
    )?;
    match args.every {
        Some(secs) => poll(&client, &criteria, Duration::from_secs(secs), args.pretty).await,
        None => {
            let alerts = search_alerts(&client, &criteria).await?;
            print_alerts(&alerts, args.pretty)
        }
    }
}
