use crate::domain::{Hotel, HotelError};

/// Renders a hotel as `Hotel {name}, {distance} KM, {price} EUR`.
pub fn format_hotel(hotel: &Hotel, thousands_separator: Option<char>) -> Result<String, HotelError> {
    let distance = match thousands_separator {
        Some(separator) => hotel.formatted_distance_grouped(Some(separator)),
        None => hotel.formatted_distance(),
    };
    let distance = distance.ok_or_else(|| HotelError::DistanceNotSet {
        name: hotel.name().to_string(),
    })?;

    Ok(format!("Hotel {}, {} KM, {} EUR", hotel.name(), distance, hotel.price()))
}

pub fn format_hotels(hotels: &[Hotel], thousands_separator: Option<char>) -> Result<Vec<String>, HotelError> {
    hotels.iter().map(|hotel| format_hotel(hotel, thousands_separator)).collect()
}
