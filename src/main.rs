use crate::app_config::AppConfig;
use crate::cli::Cli;
use crate::feed::HttpHotelFeed;
use crate::search::{SearchError, get_nearby_hotels};
use clap::Parser;
use tracing::{Level, error, info, warn};

mod app_config;
mod cli;
mod domain;
mod extensions;
mod feed;
mod search;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    let max_level = config.as_ref().map_or(Level::INFO, |config| config.log().level_or(Level::INFO));
    tracing_subscriber::fmt().with_max_level(max_level).with_writer(std::io::stderr).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = config.inspect_err(|err| error!("❌ Could not load configuration: {}", err))?;
    if let Err(err) = config.log().level() {
        warn!("⚠️ {}, logging at {} level", err, max_level);
    }
    info!("✅  Loaded configuration");

    let feed = HttpHotelFeed::new(&config)?;
    let hotels = get_nearby_hotels(&feed, &config, cli.latitude, cli.longitude, &cli.order_by)
        .await
        .inspect_err(|err: &SearchError| error!("❌ Search failed: {}", err))?;

    for hotel in hotels {
        println!("{}", hotel);
    }

    Ok(())
}
