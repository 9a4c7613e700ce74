use clap::Parser;

/// Lists hotels from the hotel feed ordered by distance or price.
#[derive(Debug, Parser)]
#[command(version, allow_negative_numbers = true)]
pub struct Cli {
    /// Latitude of the search origin in degrees
    pub latitude: f64,

    /// Longitude of the search origin in degrees
    pub longitude: f64,

    /// Either "proximity" or "pricepernight", other values order by proximity
    #[arg(long, default_value = "proximity")]
    pub order_by: String,
}
