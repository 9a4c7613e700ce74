mod geo_location;
mod hotel;
mod number;
mod order_by;
mod price;

pub use geo_location::{GeoLocation, GeoLocationError};
pub use hotel::{Hotel, HotelError};
pub use number::Number;
pub use order_by::OrderBy;
pub use price::Price;
