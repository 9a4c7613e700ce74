use crate::app_config::AppConfig;
use crate::domain::{GeoLocation, GeoLocationError, Hotel, HotelError, OrderBy};
use crate::feed::{FeedError, HotelFeed, map_hotels};
use crate::search::format::format_hotels;
use crate::search::ordering::sort_hotels;
use thiserror::Error;
use tracing::{info, instrument};

/// Lists the hotels of the feed as display lines, ordered by `order_by` relative to the given origin.
///
/// `order_by` is either `"proximity"` or `"pricepernight"`, any other value orders by proximity.
#[instrument(skip(feed, config))]
pub async fn get_nearby_hotels(
    feed: &dyn HotelFeed,
    config: &AppConfig,
    latitude: f64,
    longitude: f64,
    order_by: &str,
) -> Result<Vec<String>, SearchError> {
    let origin = GeoLocation::validated(latitude, longitude)?;
    let order_by = OrderBy::from(order_by);

    let feed_response = feed.fetch().await?;
    let hotels = rank_hotels(map_hotels(feed_response.message), &origin, order_by)?;

    info!("🔎 Found {} hotels ordered by {}", hotels.len(), order_by);
    Ok(format_hotels(&hotels, config.format().thousands_separator())?)
}

/// Assigns each hotel its distance to `origin` and sorts the hotels.
pub fn rank_hotels(mut hotels: Vec<Hotel>, origin: &GeoLocation, order_by: OrderBy) -> Result<Vec<Hotel>, HotelError> {
    for hotel in &hotels {
        hotel.set_distance(origin.distance_km(&GeoLocation::new(hotel.latitude(), hotel.longitude())))?;
    }

    sort_hotels(&mut hotels, order_by);
    Ok(hotels)
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("invalid search origin: {0}")]
    InvalidOrigin(#[from] GeoLocationError),
    #[error("could not retrieve hotels: {0}")]
    Feed(#[from] FeedError),
    #[error(transparent)]
    Hotel(#[from] HotelError),
}
