//! Number formatting for human-readable display.
//!
//! Currency values use the Turkish locale: dot as the thousands separator,
//! comma as the decimal separator. Coin amounts and percentages keep plain
//! dot notation, matching what the panel renders.

/// Default currency symbol (Turkish lira).
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₺";

/// Default decimal places for currency and percentage display.
pub const DEFAULT_FIAT_DECIMALS: usize = 2;

/// Default decimal places for coin amounts.
pub const DEFAULT_COIN_DECIMALS: usize = 8;

/// Regroup a plain `1234.56`-style string into `1.234,56`.
fn localize(formatted: &str) -> String {
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(".");

    match frac_part {
        Some(f) => format!("{}{},{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a fiat amount with the default symbol and two decimals.
pub fn format_currency(amount: f64) -> String {
    format_currency_with(amount, DEFAULT_CURRENCY_SYMBOL, DEFAULT_FIAT_DECIMALS)
}

/// Format a fiat amount with an explicit symbol and decimal places.
pub fn format_currency_with(amount: f64, symbol: &str, decimals: usize) -> String {
    let formatted = format!("{:.1$}", amount, decimals);
    format!("{}{}", symbol, localize(&formatted))
}

/// Format a coin amount with the default eight decimals.
pub fn format_number(amount: f64) -> String {
    format_number_with(amount, DEFAULT_COIN_DECIMALS)
}

/// Format a coin amount with explicit decimal places, plain dot notation.
pub fn format_number_with(amount: f64, decimals: usize) -> String {
    format!("{:.1$}", amount, decimals)
}

/// Format a signed percentage: explicit `+` for non-negative values.
pub fn format_percentage(value: f64) -> String {
    format_percentage_with(value, DEFAULT_FIAT_DECIMALS)
}

/// Format a signed percentage with explicit decimal places.
pub fn format_percentage_with(value: f64, decimals: usize) -> String {
    // Collapse negative zero, which would otherwise render as "+-0.00%".
    let value = value + 0.0;
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.2$}%", sign, value, decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localize_integers() {
        assert_eq!(localize("0"), "0");
        assert_eq!(localize("123"), "123");
        assert_eq!(localize("1000"), "1.000");
        assert_eq!(localize("1234567890"), "1.234.567.890");
    }

    #[test]
    fn test_localize_decimals_and_sign() {
        assert_eq!(localize("1234.56"), "1.234,56");
        assert_eq!(localize("-1234.56"), "-1.234,56");
        assert_eq!(localize("-123.00"), "-123,00");
    }

    #[test]
    fn test_format_currency_defaults() {
        assert_eq!(format_currency(1234.56), "₺1.234,56");
        assert_eq!(format_currency(0.0), "₺0,00");
        assert_eq!(format_currency(-50000.0), "₺-50.000,00");
    }

    #[test]
    fn test_format_currency_with_symbol_and_decimals() {
        assert_eq!(format_currency_with(1234.5, "$", 2), "$1.234,50");
        assert_eq!(format_currency_with(999.999, "₺", 0), "₺1.000");
    }

    #[test]
    fn test_format_number_fixed_decimals() {
        assert_eq!(format_number(0.5), "0.50000000");
        assert_eq!(format_number_with(0.5, 2), "0.50");
        assert_eq!(format_number_with(1234.5678, 3), "1234.568");
    }

    #[test]
    fn test_format_percentage_sign() {
        assert_eq!(format_percentage(3.2), "+3.20%");
        assert_eq!(format_percentage(0.0), "+0.00%");
        assert_eq!(format_percentage(-1.555), "-1.55%");
        assert_eq!(format_percentage_with(12.345, 1), "+12.3%");
    }

    #[test]
    fn test_format_percentage_negative_zero() {
        assert_eq!(format_percentage(-0.0), "+0.00%");
        // A tiny negative that rounds to zero keeps the rounded sign.
        assert_eq!(format_percentage(-0.001), "-0.00%");
    }
}
