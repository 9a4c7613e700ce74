use crate::domain::{Hotel, OrderBy};
use ordered_float::OrderedFloat;

/// Sorts hotels ascending by distance or by price. The sort is stable, hotels with equal keys keep their
/// relative order. Hotels without a distance sort last when ordering by proximity.
pub fn sort_hotels(hotels: &mut [Hotel], order_by: OrderBy) {
    match order_by {
        OrderBy::Proximity => hotels.sort_by_key(|hotel| OrderedFloat(hotel.distance().unwrap_or(f64::INFINITY))),
        OrderBy::PricePerNight => hotels.sort_by(|a, b| a.price().sort_key().cmp(&b.price().sort_key())),
    }
}
