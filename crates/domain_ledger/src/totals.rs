//! Derived-total computation
//!
//! VAT and total amounts are never user-entered; they are recomputed from
//! the taxable amount and VAT rate at save time, rounded half-up to 2
//! decimal places (see `core_kernel::money`).

use core_kernel::{parse_amount, round_half_up, VatRate};
use rust_decimal::Decimal;

/// The two derived monetary fields of an invoice record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedTotals {
    pub vat_amount: Decimal,
    pub total_amount: Decimal,
}

impl DerivedTotals {
    pub const ZERO: DerivedTotals = DerivedTotals {
        vat_amount: Decimal::ZERO,
        total_amount: Decimal::ZERO,
    };
}

/// Computes VAT and total from typed inputs.
///
/// `vat = round_half_up(taxable * rate / 100)`,
/// `total = round_half_up(taxable + vat)`.
///
/// `None` when either step overflows `Decimal`.
pub fn checked_derived_totals(
    taxable_amount: Decimal,
    vat_rate_percent: Decimal,
) -> Option<DerivedTotals> {
    let rate = VatRate::from_percent(vat_rate_percent);
    let vat_amount = round_half_up(rate.checked_apply(taxable_amount)?);
    let total_amount = round_half_up(taxable_amount.checked_add(vat_amount)?);

    Some(DerivedTotals {
        vat_amount,
        total_amount,
    })
}

/// As [`checked_derived_totals`], coercing overflow to zero totals.
/// This function never panics; inputs large enough to overflow get the
/// same `(0.00, 0.00)` result as unparseable input.
pub fn derived_totals(taxable_amount: Decimal, vat_rate_percent: Decimal) -> DerivedTotals {
    checked_derived_totals(taxable_amount, vat_rate_percent).unwrap_or(DerivedTotals::ZERO)
}

/// Computes totals from raw form input without ever failing.
///
/// Missing or non-numeric values coerce to zero, so the worst case is
/// `(0.00, 0.00)`. Entry forms call this on every keystroke; rejection of
/// bad input is validation's job, not arithmetic's.
pub fn derived_totals_from_input(
    taxable_amount: Option<&str>,
    vat_rate_percent: Option<&str>,
) -> DerivedTotals {
    let taxable = taxable_amount
        .and_then(parse_amount)
        .unwrap_or(Decimal::ZERO);
    let rate = vat_rate_percent
        .and_then(parse_amount)
        .unwrap_or(Decimal::ZERO);

    derived_totals(taxable, rate)
}
