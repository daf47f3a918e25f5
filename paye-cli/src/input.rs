//! Free-text currency input parsing.
//!
//! The calculation core assumes already-sanitized, non-negative numeric
//! input; this module is the boundary that provides it. It accepts the same
//! shapes a form field would: optional comma thousands separators,
//! surrounding whitespace, and empty input meaning zero.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be used as a currency amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount '{input}' must not be negative")]
    Negative { input: String },
}

/// Parses a string into a non-negative [`Decimal`] amount.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Empty or
/// whitespace-only input is treated as 0. Negative amounts are rejected.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let value: Decimal = normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;

    if value < Decimal::ZERO {
        return Err(ParseAmountError::Negative {
            input: s.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_amount("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn empty_treated_as_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_amount("abc"),
            Err(ParseAmountError::Invalid { .. })
        ));
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(matches!(
            parse_amount("-500"),
            Err(ParseAmountError::Negative { .. })
        ));
    }
}
