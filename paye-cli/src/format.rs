//! Currency and rate formatting for terminal output.
//!
//! All amounts render to two decimal places with comma thousands separators
//! and the GHS label, matching how the figures read on a payslip.

use paye_core::calculations::common::round_half_up;
use rust_decimal::Decimal;

/// Formats an amount as `GHS 1,234.56`.
pub fn ghs(amount: Decimal) -> String {
    format!("GHS {}", money(amount))
}

/// Formats an amount to two decimal places with thousands separators.
pub fn money(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let text = format!("{rounded:.2}");

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!("{sign}{}.{frac_part}", group_thousands(int_part))
}

/// Formats a fractional rate as a percentage, e.g. `0.175` → `17.5%`.
pub fn rate_percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

/// Formats an effective-rate percentage to two decimal places, e.g. `16.83%`.
pub fn percent(value: Decimal) -> String {
    format!("{:.2}%", round_half_up(value))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(money(dec!(50416.67)), "50,416.67");
    }

    #[test]
    fn money_pads_to_two_decimals() {
        assert_eq!(money(dec!(110)), "110.00");
        assert_eq!(money(dec!(5.5)), "5.50");
    }

    #[test]
    fn money_keeps_small_amounts_ungrouped() {
        assert_eq!(money(dec!(999.99)), "999.99");
        assert_eq!(money(dec!(0)), "0.00");
    }

    #[test]
    fn money_handles_negative_amounts() {
        assert_eq!(money(dec!(-1234.5)), "-1,234.50");
    }

    #[test]
    fn ghs_prefixes_currency_label() {
        assert_eq!(ghs(dec!(2079.25)), "GHS 2,079.25");
    }

    #[test]
    fn rate_percent_drops_trailing_zeros() {
        assert_eq!(rate_percent(dec!(0.175)), "17.5%");
        assert_eq!(rate_percent(dec!(0.05)), "5%");
        assert_eq!(rate_percent(dec!(0)), "0%");
    }

    #[test]
    fn percent_renders_two_decimals() {
        assert_eq!(percent(dec!(16.83)), "16.83%");
        assert_eq!(percent(dec!(0)), "0.00%");
    }
}
