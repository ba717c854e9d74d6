//! Price formatting

/// Groups the integer digits of `value` with `separator` every three digits
/// and keeps `decimals` places after the point.
///
/// ```
/// use contracts::shared::currency::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2, ','), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize, separator: char) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// US dollar amount: `$1,234.50`, `-$3.10`. Non-finite values render as `-`.
///
/// ```
/// use contracts::shared::currency::format_currency;
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// ```
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let amount = format_number_with_decimals(value, 2, ',');
    match amount.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(9.99), "$9.99");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-3.1), "-$3.10");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "-");
        assert_eq!(format_currency(f64::INFINITY), "-");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0, ' '), "1 235");
        assert_eq!(format_number_with_decimals(999.0, 1, ','), "999.0");
        assert_eq!(format_number_with_decimals(1000.0, 0, ','), "1,000");
        assert_eq!(format_number_with_decimals(-1234.0, 0, ','), "-1,234");
    }
}
