use crate::domain::{GeoLocation, Price};
use crate::extensions::float_ext::FixedPoint;
use std::cell::OnceCell;
use thiserror::Error;

#[derive(Debug, PartialEq)]
pub struct Hotel {
    name: String,
    location: GeoLocation,
    price: Price,
    distance: OnceCell<f64>, // In kilometers
}

impl Hotel {
    /// Coordinates and price are not validated, the feed ingestion filters entries beforehand.
    pub fn new(name: String, latitude: f64, longitude: f64, price: Price) -> Self {
        Hotel {
            name,
            location: GeoLocation::new(latitude, longitude),
            price,
            distance: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    /// Stores the computed distance in kilometers. A distance can only be set once.
    pub fn set_distance(&self, distance: f64) -> Result<(), HotelError> {
        self.distance.set(distance).map_err(|_| HotelError::DistanceAlreadySet {
            name: self.name.clone(),
        })
    }

    pub fn distance(&self) -> Option<f64> {
        self.distance.get().copied()
    }

    /// The distance with two decimals, e.g. `"272.70"`.
    pub fn formatted_distance(&self) -> Option<String> {
        self.formatted_distance_grouped(None)
    }

    /// The distance with two decimals and the integer part grouped by `thousands_separator`.
    pub fn formatted_distance_grouped(&self, thousands_separator: Option<char>) -> Option<String> {
        self.distance().map(|distance| distance.to_fixed(2, thousands_separator))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum HotelError {
    #[error("distance of hotel '{name}' is already set")]
    DistanceAlreadySet { name: String },
    #[error("distance of hotel '{name}' is not set")]
    DistanceNotSet { name: String },
}
