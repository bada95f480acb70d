//! # Duty Calculator
//!
//! Computes the ad-valorem duty owed on a declared value:
//!
//! ```text
//! total_rate = base_rate_pct + surcharge_pct
//! duty       = round(declared_value * total_rate / 100, 2)
//! ```
//!
//! ## Rounding
//!
//! Round half to even on the exact decimal product. `0.005` becomes `0.00`
//! and `0.015` becomes `0.02`. No binary float is involved at any step, so
//! the same inputs always produce the same cents.
//!
//! ## Validation
//!
//! Negative values and negative rates are rejected with
//! [`TariffError::InvalidInput`] rather than producing a negative duty.

use rust_decimal::Decimal;

use crate::amount::round_cents;
use crate::error::TariffError;
use crate::shipment::DutyResult;

/// Compute total duty in dollars. See the module docs for the formula.
///
/// # Errors
///
/// [`TariffError::InvalidInput`] if any input is negative or the product
/// overflows the decimal range.
pub fn compute_total_duty(
    declared_value: Decimal,
    base_rate_pct: Decimal,
    surcharge_pct: Decimal,
) -> Result<Decimal, TariffError> {
    compute_duty(declared_value, base_rate_pct, surcharge_pct).map(|r| r.duty_amount)
}

/// Like [`compute_total_duty`] but also returns the combined rate.
pub fn compute_duty(
    declared_value: Decimal,
    base_rate_pct: Decimal,
    surcharge_pct: Decimal,
) -> Result<DutyResult, TariffError> {
    ensure_non_negative("declared_value", declared_value)?;
    ensure_non_negative("base_rate_pct", base_rate_pct)?;
    ensure_non_negative("surcharge_pct", surcharge_pct)?;

    let total_rate_pct = base_rate_pct
        .checked_add(surcharge_pct)
        .ok_or_else(|| TariffError::invalid_input("surcharge_pct", "combined rate overflows"))?;

    let duty = declared_value
        .checked_mul(total_rate_pct)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| {
            TariffError::invalid_input(
                "declared_value",
                format!("{declared_value} at {total_rate_pct}% overflows"),
            )
        })?;

    Ok(DutyResult {
        total_rate_pct,
        duty_amount: round_cents(duty),
    })
}

fn ensure_non_negative(field: &'static str, value: Decimal) -> Result<(), TariffError> {
    if value < Decimal::ZERO {
        return Err(TariffError::invalid_input(
            field,
            format!("must be non-negative, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn zero_rates_give_zero_duty() {
        let duty = compute_total_duty(dec("10000.00"), dec("0.0"), dec("0.0")).unwrap();
        assert_eq!(duty, Decimal::ZERO);
    }

    #[test]
    fn base_plus_surcharge() {
        let duty = compute_total_duty(dec("10000.00"), dec("5.0"), dec("2.5")).unwrap();
        assert_eq!(duty, dec("750.00"));
    }

    #[test]
    fn zero_value_gives_zero_duty() {
        let duty = compute_total_duty(Decimal::ZERO, dec("7.0"), dec("1.0")).unwrap();
        assert_eq!(duty, Decimal::ZERO);
    }

    #[test]
    fn repeating_rate_rounds_to_cents() {
        let third = Decimal::ONE / Decimal::from(3);
        let duty = compute_total_duty(dec("100.00"), third, Decimal::ZERO).unwrap();
        assert_eq!(duty, dec("0.33"));
        assert_eq!(duty.scale(), 2);
    }

    #[test]
    fn midpoints_round_to_even() {
        // 1.00 * 0.5% = 0.005
        assert_eq!(
            compute_total_duty(dec("1.00"), dec("0.5"), Decimal::ZERO).unwrap(),
            dec("0.00")
        );
        // 1.00 * 1.5% = 0.015
        assert_eq!(
            compute_total_duty(dec("1.00"), dec("1.5"), Decimal::ZERO).unwrap(),
            dec("0.02")
        );
        // 1.00 * 2.5% = 0.025
        assert_eq!(
            compute_total_duty(dec("1.00"), dec("2.0"), dec("0.5")).unwrap(),
            dec("0.02")
        );
    }

    #[test]
    fn compute_duty_reports_total_rate() {
        let result = compute_duty(dec("200"), dec("3.5"), dec("25")).unwrap();
        assert_eq!(result.total_rate_pct, dec("28.5"));
        assert_eq!(result.duty_amount, dec("57.00"));
    }

    #[test]
    fn negative_inputs_are_rejected() {
        let cases = [
            (dec("-1"), Decimal::ZERO, Decimal::ZERO, "declared_value"),
            (dec("100"), dec("-0.5"), Decimal::ZERO, "base_rate_pct"),
            (dec("100"), Decimal::ZERO, dec("-2"), "surcharge_pct"),
        ];
        for (value, base, surcharge, expected) in cases {
            match compute_total_duty(value, base, surcharge) {
                Err(TariffError::InvalidInput { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected InvalidInput for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn overflow_is_invalid_input() {
        let err = compute_total_duty(Decimal::MAX, dec("100"), Decimal::ZERO).unwrap_err();
        assert!(matches!(err, TariffError::InvalidInput { .. }));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::RoundingStrategy;

    proptest! {
        /// Duty equals the rounded formula for any non-negative inputs in cents/bps.
        #[test]
        fn duty_matches_formula(
            value_cents in 0i64..10_000_000_000,
            base_bps in 0i64..100_000,
            surcharge_bps in 0i64..100_000,
        ) {
            let value = Decimal::new(value_cents, 2);
            let base = Decimal::new(base_bps, 2);
            let surcharge = Decimal::new(surcharge_bps, 2);

            let expected = (value * (base + surcharge) / Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
            let duty = compute_total_duty(value, base, surcharge).unwrap();
            prop_assert_eq!(duty, expected);
            prop_assert!(duty >= Decimal::ZERO);
        }

        /// Adding surcharge never lowers the duty.
        #[test]
        fn duty_is_monotonic_in_surcharge(
            value_cents in 0i64..1_000_000_000,
            base_bps in 0i64..10_000,
            extra_bps in 0i64..10_000,
        ) {
            let value = Decimal::new(value_cents, 2);
            let base = Decimal::new(base_bps, 2);
            let without = compute_total_duty(value, base, Decimal::ZERO).unwrap();
            let with = compute_total_duty(value, base, Decimal::new(extra_bps, 2)).unwrap();
            prop_assert!(with >= without);
        }
    }
}
