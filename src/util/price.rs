//! The one shared parser for formatted currency strings.

/// Extracts the non-negative integer amount from a formatted price such as
/// "฿1,234,500". Total: currency symbols, separators and whitespace are
/// stripped, and a string with no digits (or one that overflows) yields 0.
pub fn parse_amount(price: &str) -> u64 {
    let digits: String = price.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_currency_formatting() {
        assert_eq!(parse_amount("฿1,234,500"), 1_234_500);
        assert_eq!(parse_amount("500,000"), 500_000);
        assert_eq!(parse_amount(" 42 "), 42);
    }

    #[test]
    fn digitless_input_is_zero() {
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("โทรถาม"), 0);
        assert_eq!(parse_amount("N/A"), 0);
    }

    #[test]
    fn overflowing_input_is_zero_not_a_panic() {
        assert_eq!(parse_amount("99999999999999999999999999"), 0);
    }
}
