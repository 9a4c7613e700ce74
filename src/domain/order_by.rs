use std::fmt::Display;

/// How search results are ordered. Both orders are ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderBy {
    #[default]
    Proximity,
    PricePerNight,
}

impl From<&str> for OrderBy {
    /// Unrecognized values fall back to ordering by proximity.
    fn from(value: &str) -> Self {
        match value {
            "pricepernight" => OrderBy::PricePerNight,
            _ => OrderBy::Proximity,
        }
    }
}

impl Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderBy::Proximity => write!(f, "proximity"),
            OrderBy::PricePerNight => write!(f, "pricepernight"),
        }
    }
}
