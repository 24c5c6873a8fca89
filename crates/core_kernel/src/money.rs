//! Monetary arithmetic with precise decimal rounding
//!
//! This module provides the rounding authority for the invoicing system
//! using rust_decimal for precise calculations without floating-point errors.
//!
//! The rounding policy for all persisted monetary fields is half-up
//! (midpoint away from zero) to 2 decimal places. This is the single place
//! that policy is defined; callers must not round independently.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rounds to 2 decimal places, half-up (midpoint away from zero).
///
/// `round_half_up(dec!(2.005)) == dec!(2.01)`, unlike banker's rounding
/// which would yield `2.00`.
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Tolerant coercion of raw user input into a decimal amount.
///
/// Trims whitespace and accepts a comma as the decimal separator. Returns
/// `None` for anything that does not parse; callers that must never fail
/// map `None` to zero.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<Decimal>().ok()
}

/// A VAT rate expressed in percent (e.g. `22.0` for 22%)
///
/// Rates are kept as entered; conversion to a fraction happens only when
/// the rate is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VatRate(Decimal);

impl VatRate {
    /// Creates a rate from a percentage value
    pub fn from_percent(percent: Decimal) -> Self {
        Self(percent)
    }

    /// Returns the rate as entered, in percent
    pub fn as_percent(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a fraction (22% -> 0.22)
    pub fn as_fraction(&self) -> Decimal {
        self.0 / dec!(100)
    }

    /// Applies the rate to a taxable amount, unrounded.
    /// `None` when the multiplication overflows `Decimal`.
    pub fn checked_apply(&self, taxable: Decimal) -> Option<Decimal> {
        taxable.checked_mul(self.as_fraction())
    }
}

impl Default for VatRate {
    fn default() -> Self {
        Self(Decimal::ZERO)
    }
}

impl fmt::Display for VatRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_midpoint() {
        assert_eq!(round_half_up(dec!(2.005)), dec!(2.01));
        assert_eq!(round_half_up(dec!(2.004)), dec!(2.00));
        assert_eq!(round_half_up(dec!(2.015)), dec!(2.02));
    }

    #[test]
    fn test_round_half_up_scales_to_2dp() {
        assert_eq!(round_half_up(dec!(220)), dec!(220.00));
        assert_eq!(round_half_up(dec!(0.1)), dec!(0.10));
    }

    #[test]
    fn test_parse_amount_accepts_comma() {
        assert_eq!(parse_amount("1000,50"), Some(dec!(1000.50)));
        assert_eq!(parse_amount(" 22.0 "), Some(dec!(22.0)));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("12.3.4"), None);
    }

    #[test]
    fn test_vat_rate_apply() {
        let rate = VatRate::from_percent(dec!(22.0));
        assert_eq!(rate.checked_apply(dec!(1000)), Some(dec!(220.000)));
        assert_eq!(rate.as_fraction(), dec!(0.22));
    }

    #[test]
    fn test_vat_rate_apply_overflow_is_none() {
        let rate = VatRate::from_percent(dec!(200));
        assert_eq!(rate.checked_apply(Decimal::MAX), None);
    }

    #[test]
    fn test_vat_rate_display() {
        assert_eq!(VatRate::from_percent(dec!(22.0)).to_string(), "22%");
        assert_eq!(VatRate::from_percent(dec!(4.5)).to_string(), "4.5%");
    }
}
