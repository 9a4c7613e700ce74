use std::cmp::Ordering;
use std::fmt::Display;

#[derive(Clone, Debug)]
pub enum Number {
    PositiveInt(u64),
    NegativeInt(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::PositiveInt(n) => *n as f64,
            Number::NegativeInt(n) => *n as f64,
            Number::Float(n) => *n,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::PositiveInt(n) => *n == 0,
            Number::NegativeInt(n) => *n == 0,
            Number::Float(n) => *n == 0.0,
        }
    }
}

impl From<&serde_json::Number> for Number {
    fn from(value: &serde_json::Number) -> Self {
        if let Some(n) = value.as_u64() {
            Number::PositiveInt(n)
        } else if let Some(n) = value.as_i64() {
            Number::NegativeInt(n)
        } else {
            // Every serde_json number is representable as u64, i64 or f64
            Number::Float(value.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::PositiveInt(a), Number::PositiveInt(b)) => a.partial_cmp(b),
            (Number::NegativeInt(a), Number::NegativeInt(b)) => a.partial_cmp(b),
            (Number::PositiveInt(_), Number::NegativeInt(_)) => Some(Ordering::Greater),
            (Number::NegativeInt(_), Number::PositiveInt(_)) => Some(Ordering::Less),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::PositiveInt(n) => write!(f, "{}", n),
            Number::NegativeInt(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}
