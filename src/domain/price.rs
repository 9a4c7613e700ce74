use crate::domain::Number;
use ordered_float::OrderedFloat;
use std::fmt::Display;

/// A nightly price exactly as the feed provided it.
#[derive(Clone, Debug, PartialEq)]
pub enum Price {
    Number(Number),
    Text(String),
}

/// Sort key for prices. Numeric prices (including numeric text) come first in numeric order,
/// followed by any other text in lexical order.
///
/// Non-numeric text sorts after every number, so `"!!"` comes after `100`. A loose comparison that
/// compares a number with non-numeric text as strings would order them the other way round, but is not
/// a total order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriceKey<'a> {
    Numeric(OrderedFloat<f64>),
    Text(&'a str),
}

impl Price {
    /// The numeric value of the price, if it is a number or text that reads as one (e.g. `" 95.5"`).
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Price::Number(number) => Some(number.as_f64()),
            Price::Text(text) => parse_numeric_text(text),
        }
    }

    pub fn sort_key(&self) -> PriceKey<'_> {
        match (self.numeric_value(), self) {
            (Some(value), _) => PriceKey::Numeric(OrderedFloat(value)),
            (None, Price::Text(text)) => PriceKey::Text(text),
            (None, Price::Number(number)) => PriceKey::Numeric(OrderedFloat(number.as_f64())),
        }
    }
}

fn parse_numeric_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let is_plain_number = !trimmed.is_empty()
        && trimmed.chars().any(|c| c.is_ascii_digit())
        && trimmed.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));

    if is_plain_number { trimmed.parse::<f64>().ok() } else { None }
}

impl From<Number> for Price {
    fn from(value: Number) -> Self {
        Price::Number(value)
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Price::Text(value.to_string())
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Price::Number(number) => write!(f, "{}", number),
            Price::Text(text) => write!(f, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Price::Number(Number::PositiveInt(100)), "100")]
    #[case(Price::Number(Number::Float(99.99)), "99.99")]
    #[case(Price::from("95"), "95")]
    #[case(Price::from("on request"), "on request")]
    fn display_keeps_the_value_as_is(#[case] price: Price, #[case] expected: &str) {
        assert_eq!(price.to_string(), expected);
    }

    #[rstest]
    #[case("95", Some(95.0))]
    #[case(" 120.5 ", Some(120.5))]
    #[case("1e2", Some(100.0))]
    #[case("-5", Some(-5.0))]
    #[case("inf", None)]
    #[case("NaN", None)]
    #[case("12 EUR", None)]
    #[case("", None)]
    #[case(".", None)]
    fn numeric_value_of_text(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(Price::from(text).numeric_value(), expected);
    }

    #[test]
    fn numeric_text_sorts_between_numbers() {
        let mut prices = vec![
            Price::Number(Number::PositiveInt(50)),
            Price::from("30"),
            Price::Number(Number::Float(40.5)),
        ];
        prices.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        assert_eq!(
            prices,
            vec![
                Price::from("30"),
                Price::Number(Number::Float(40.5)),
                Price::Number(Number::PositiveInt(50)),
            ]
        );
    }

    #[test]
    fn sort_key_reads_numeric_text_as_a_number() {
        assert_eq!(Price::from(" 95.5").sort_key(), PriceKey::Numeric(OrderedFloat(95.5)));
        assert_eq!(Price::from("95 EUR").sort_key(), PriceKey::Text("95 EUR"));
    }

    #[test]
    fn punctuation_text_sorts_after_numbers() {
        assert!(Price::Number(Number::PositiveInt(100)).sort_key() < Price::from("!!").sort_key());
    }

    #[test]
    fn non_numeric_text_sorts_after_numbers() {
        let text = Price::from("ask at desk");
        let number = Price::Number(Number::PositiveInt(1_000_000));
        assert!(number.sort_key() < text.sort_key());
    }
}
