/// Fixed-point rendering of floating point values.
pub trait FixedPoint {
    /// Renders `self` with exactly `decimals` fractional digits and `.` as decimal separator.
    /// When `thousands_separator` is set, the integer digits are grouped by three.
    fn to_fixed(self, decimals: usize, thousands_separator: Option<char>) -> String;
}

impl FixedPoint for f64 {
    fn to_fixed(self, decimals: usize, thousands_separator: Option<char>) -> String {
        let formatted = format!("{:.*}", decimals, self);
        let Some(separator) = thousands_separator else {
            return formatted;
        };

        let (sign, unsigned) = match formatted.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", formatted.as_str()),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };
        if !integer.chars().all(|c| c.is_ascii_digit()) {
            return formatted; // NaN or inf
        }

        let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3);
        grouped.push_str(sign);
        for (index, digit) in integer.chars().enumerate() {
            if index > 0 && (integer.len() - index) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(digit);
        }
        if let Some(fraction) = fraction {
            grouped.push('.');
            grouped.push_str(fraction);
        }

        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.0, "2.00")]
    #[case(0.7523731654217743, "0.75")]
    #[case(272.6952275695036, "272.70")]
    #[case(2312.7747831383285, "2312.77")]
    #[case(0.0, "0.00")]
    fn to_fixed_without_grouping(#[case] input: f64, #[case] expected: &str) {
        assert_eq!(input.to_fixed(2, None), expected);
    }

    #[rstest]
    #[case(217.37758078496347, "217.38")]
    #[case(2312.7747831383285, "2.312.77")]
    #[case(1234567.891, "1.234.567.89")]
    #[case(-1234.5, "-1.234.50")]
    #[case(999.999, "1.000.00")]
    fn to_fixed_with_dot_grouping(#[case] input: f64, #[case] expected: &str) {
        assert_eq!(input.to_fixed(2, Some('.')), expected);
    }

    #[test]
    fn to_fixed_with_comma_grouping() {
        assert_eq!(12345.678_f64.to_fixed(2, Some(',')), "12,345.68");
    }

    #[test]
    fn to_fixed_leaves_non_finite_values_alone() {
        assert_eq!(f64::NAN.to_fixed(2, Some('.')), "NaN");
        assert_eq!(f64::INFINITY.to_fixed(2, Some('.')), "inf");
    }

    #[test]
    fn to_fixed_without_decimals() {
        assert_eq!(1234.4_f64.to_fixed(0, Some('.')), "1.234");
    }
}
