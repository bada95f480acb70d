//! # Amount Utilities
//!
//! Declared values and rates are exact decimals ([`Decimal`]), never binary
//! floats. Amounts enter as strings (CLI flags, schedule files) and leave in
//! one of two textual forms:
//!
//! - [`format_amount`] — fixed two fractional digits, for JSON and logs.
//! - [`display_amount`] — shortest form with at least one fractional digit
//!   (`10000.0`, `0.33`), the form used by the console report.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::TariffError;

/// Parse a decimal amount or percentage.
///
/// Accepts plain decimal notation (`"10000"`, `"10000.00"`, `"2.5"`) with an
/// optional leading sign. Surrounding whitespace is ignored. The sign is not
/// checked here; range checks belong to the caller.
///
/// # Errors
///
/// Returns [`TariffError::InvalidInput`] tagged with `field` when the string
/// is empty or not a decimal number.
pub fn parse_amount(field: &'static str, s: &str) -> Result<Decimal, TariffError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TariffError::invalid_input(field, "empty amount"));
    }
    Decimal::from_str(s)
        .map_err(|e| TariffError::invalid_input(field, format!("\"{s}\" is not a decimal: {e}")))
}

/// Round to cents, half to even. The result always carries scale 2.
pub fn round_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    rounded
}

/// Format with exactly two fractional digits.
///
/// `10000` → `"10000.00"`, `0.5` → `"0.50"`
pub fn format_amount(value: Decimal) -> String {
    round_cents(value).to_string()
}

/// Format in the shortest form that keeps at least one fractional digit.
///
/// `10000.00` → `"10000.0"`, `0` → `"0.0"`, `0.330` → `"0.33"`.
pub fn display_amount(value: Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        format!("{normalized}.0")
    } else {
        normalized.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn parse_amount_whole_and_fractional() {
        assert_eq!(parse_amount("declared_value", "10000").unwrap(), dec("10000"));
        assert_eq!(parse_amount("declared_value", " 10000.00 ").unwrap(), dec("10000.00"));
        assert_eq!(parse_amount("base_rate_pct", "2.5").unwrap(), dec("2.5"));
        assert_eq!(parse_amount("base_rate_pct", "-1").unwrap(), dec("-1"));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        let err = parse_amount("declared_value", "ten").unwrap_err();
        assert!(matches!(
            err,
            TariffError::InvalidInput {
                field: "declared_value",
                ..
            }
        ));
        assert!(parse_amount("declared_value", "").is_err());
        assert!(parse_amount("declared_value", "   ").is_err());
    }

    #[test]
    fn round_cents_is_half_even() {
        assert_eq!(round_cents(dec("0.005")), dec("0.00"));
        assert_eq!(round_cents(dec("0.015")), dec("0.02"));
        assert_eq!(round_cents(dec("0.025")), dec("0.02"));
        assert_eq!(round_cents(dec("0.0251")), dec("0.03"));
        assert_eq!(round_cents(dec("7")).to_string(), "7.00");
    }

    #[test]
    fn format_amount_pads_to_cents() {
        assert_eq!(format_amount(dec("10000")), "10000.00");
        assert_eq!(format_amount(dec("0.5")), "0.50");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
        assert_eq!(format_amount(dec("750.004")), "750.00");
    }

    #[test]
    fn display_amount_matches_report_form() {
        assert_eq!(display_amount(dec("10000.00")), "10000.0");
        assert_eq!(display_amount(Decimal::ZERO), "0.0");
        assert_eq!(display_amount(dec("0.00")), "0.0");
        assert_eq!(display_amount(dec("750.00")), "750.0");
        assert_eq!(display_amount(dec("0.33")), "0.33");
        assert_eq!(display_amount(dec("2.50")), "2.5");
    }
}
