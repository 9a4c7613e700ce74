mod client;
mod feed_response;
mod fetch;
mod map_hotels;

pub use feed_response::FeedResponse;
pub use fetch::{FeedError, HotelFeed, HttpHotelFeed};
pub use map_hotels::map_hotels;
