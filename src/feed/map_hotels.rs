use crate::domain::{Hotel, Number, Price};
use serde_json::Value;
use tracing::{debug, instrument, warn};

static NULL: Value = Value::Null;

/// Turns raw feed entries `[name, latitude, longitude, price]` into hotels.
///
/// An entry is skipped when any of its four values is falsy: `null`, `false`, `0`, `""`, `"0"` or an empty
/// list or object. A missing value counts as `null`. As a consequence a hotel with a price of 0 or located
/// on the equator or the prime meridian is never listed.
#[instrument(skip_all)]
pub fn map_hotels(entries: Vec<Value>) -> Vec<Hotel> {
    let total = entries.len();
    let hotels = entries.into_iter().filter_map(map_hotel).collect::<Vec<_>>();

    debug!("Mapped {} hotels, skipped {} entries", hotels.len(), total - hotels.len());
    hotels
}

fn map_hotel(entry: Value) -> Option<Hotel> {
    let Value::Array(fields) = entry else {
        warn!("⚠️ Skipping feed entry, expected a list but found {}", entry);
        return None;
    };

    let field = |index: usize| fields.get(index).unwrap_or(&NULL);
    let (name, latitude, longitude, price) = (field(0), field(1), field(2), field(3));
    if ![name, latitude, longitude, price].into_iter().all(is_truthy) {
        return None;
    }

    let Some(name) = to_name(name) else {
        warn!("⚠️ Skipping feed entry, invalid hotel name {}", name);
        return None;
    };
    let Some(price) = to_price(price) else {
        warn!("⚠️ Skipping hotel '{}', invalid price {}", name, price);
        return None;
    };

    Some(Hotel::new(name, to_float(latitude), to_float(longitude), price))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(number) => !Number::from(number).is_zero(),
        Value::String(text) => !(text.is_empty() || text == "0"),
        Value::Array(values) => !values.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn to_name(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(Number::from(number).to_string()),
        Value::Bool(true) => Some("1".to_string()),
        _ => None,
    }
}

fn to_price(value: &Value) -> Option<Price> {
    match value {
        Value::Number(number) => Some(Price::Number(number.into())),
        Value::String(text) => Some(Price::Text(text.clone())),
        Value::Bool(true) => Some(Price::Number(Number::PositiveInt(1))),
        _ => None,
    }
}

/// Coerces a coordinate to a float. Text is read up to the first character that does not continue a number,
/// so `"12.5abc"` becomes 12.5 and text without a leading number becomes 0.
fn to_float(value: &Value) -> f64 {
    match value {
        Value::Number(number) => Number::from(number).as_f64(),
        Value::String(text) => leading_float(text),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    }
}

fn leading_float(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let end = leading_float_end(trimmed.as_bytes());
    trimmed[..end].parse::<f64>().unwrap_or(0.0)
}

/// Length of the longest prefix of `bytes` that reads as `[sign] digits [. digits] [(e|E) [sign] digits]`,
/// with at least one mantissa digit. Returns 0 when there is no such prefix.
fn leading_float_end(bytes: &[u8]) -> usize {
    let digits_from = |start: usize| start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut position = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        position += 1;
    }

    let integer_end = digits_from(position);
    let mut mantissa_digits = integer_end - position;
    position = integer_end;

    if bytes.get(position) == Some(&b'.') {
        let fraction_end = digits_from(position + 1);
        mantissa_digits += fraction_end - position - 1;
        position = fraction_end;
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(position), Some(b'e' | b'E')) {
        let mut exponent_start = position + 1;
        if matches!(bytes.get(exponent_start), Some(b'+' | b'-')) {
            exponent_start += 1;
        }
        let exponent_end = digits_from(exponent_start);
        if exponent_end > exponent_start {
            position = exponent_end;
        }
    }

    position
}
