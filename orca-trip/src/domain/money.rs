//! Currency formatting for cent amounts.

/// How cent amounts are rendered as currency text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Currency symbol (e.g. "$").
    pub symbol: String,

    /// Separator between whole units and cents.
    pub decimal_separator: char,

    /// Separator between groups of three whole-unit digits, if any.
    pub grouping_separator: Option<char>,

    /// Whether the symbol follows the amount ("1,50 €") instead of
    /// preceding it ("$1.50").
    pub symbol_after: bool,
}

impl CurrencyFormat {
    /// Create a new format with the given parameters.
    pub fn new(
        symbol: impl Into<String>,
        decimal_separator: char,
        grouping_separator: Option<char>,
        symbol_after: bool,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            decimal_separator,
            grouping_separator,
            symbol_after,
        }
    }
}

impl Default for CurrencyFormat {
    /// US dollars, the currency ORCA cards are denominated in.
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimal_separator: '.',
            grouping_separator: Some(','),
            symbol_after: false,
        }
    }
}

/// Format an amount in cents as currency text.
///
/// # Examples
///
/// ```
/// use orca_trip::domain::{CurrencyFormat, format_cents};
///
/// let usd = CurrencyFormat::default();
/// assert_eq!(format_cents(275, &usd), "$2.75");
/// assert_eq!(format_cents(0, &usd), "$0.00");
/// assert_eq!(format_cents(123_456, &usd), "$1,234.56");
/// ```
pub fn format_cents(cents: u64, format: &CurrencyFormat) -> String {
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            if let Some(sep) = format.grouping_separator {
                grouped.push(sep);
            }
        }
        grouped.push(digit);
    }

    let amount = format!("{grouped}{}{fraction:02}", format.decimal_separator);
    if format.symbol_after {
        format!("{amount} {}", format.symbol)
    } else {
        format!("{}{amount}", format.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_us_dollars() {
        let format = CurrencyFormat::default();
        assert_eq!(format.symbol, "$");
        assert_eq!(format.decimal_separator, '.');
        assert_eq!(format.grouping_separator, Some(','));
        assert!(!format.symbol_after);
    }

    #[test]
    fn formats_small_amounts() {
        let usd = CurrencyFormat::default();
        assert_eq!(format_cents(0, &usd), "$0.00");
        assert_eq!(format_cents(5, &usd), "$0.05");
        assert_eq!(format_cents(99, &usd), "$0.99");
        assert_eq!(format_cents(100, &usd), "$1.00");
        assert_eq!(format_cents(250, &usd), "$2.50");
    }

    #[test]
    fn groups_thousands() {
        let usd = CurrencyFormat::default();
        assert_eq!(format_cents(99_999, &usd), "$999.99");
        assert_eq!(format_cents(100_000, &usd), "$1,000.00");
        assert_eq!(format_cents(65_535, &usd), "$655.35");
        assert_eq!(format_cents(123_456_789, &usd), "$1,234,567.89");
    }

    #[test]
    fn custom_format() {
        let euro = CurrencyFormat::new("€", ',', Some('.'), true);
        assert_eq!(format_cents(123_450, &euro), "1.234,50 €");

        let plain = CurrencyFormat::new("$", '.', None, false);
        assert_eq!(format_cents(123_450, &plain), "$1234.50");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Stripping the symbol and separators gives back the cent amount
        #[test]
        fn digits_roundtrip(cents in 0u64..10_000_000_000) {
            let text = format_cents(cents, &CurrencyFormat::default());
            let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
            prop_assert_eq!(digits.parse::<u64>().unwrap(), cents);
        }

        /// Always exactly two digits after the decimal separator
        #[test]
        fn two_decimal_places(cents in any::<u32>()) {
            let text = format_cents(u64::from(cents), &CurrencyFormat::default());
            let (_, fraction) = text.rsplit_once('.').unwrap();
            prop_assert_eq!(fraction.len(), 2);
        }
    }
}
