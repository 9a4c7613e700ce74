use thiserror::Error;

/// Mean radius of the Earth in kilometers used for all distance calculations.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6372.797;

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoLocation { latitude, longitude }
    }

    /// Creates a location after checking that both coordinates are finite and within their valid degree ranges.
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self, GeoLocationError> {
        if !(latitude >= -90.0 && latitude <= 90.0) {
            return Err(GeoLocationError::InvalidLatitude(latitude));
        }

        if !(longitude >= -180.0 && longitude <= 180.0) {
            return Err(GeoLocationError::InvalidLongitude(longitude));
        }

        Ok(GeoLocation { latitude, longitude })
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &GeoLocation) -> f64 {
        haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Haversine distance in kilometers between two points given in degrees.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (lat1.to_radians(), lon1.to_radians(), lat2.to_radians(), lon2.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin() * (dlat / 2.0).sin() + lat1.cos() * lat2.cos() * (dlon / 2.0).sin() * (dlon / 2.0).sin();
    // Rounding can push `a` just above 1 for (nearly) antipodal points
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_MEAN_RADIUS_KM * c
}

#[derive(Error, Debug, PartialEq)]
pub enum GeoLocationError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    InvalidLongitude(f64),
}
