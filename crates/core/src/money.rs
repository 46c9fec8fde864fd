//! Monetary helpers.
//!
//! Amounts are plain `f64` currency units. Accumulation stays unrounded; only
//! report-facing values go through [`round_money`].

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to 2 decimal places, ties away from zero.
///
/// Rounds the exact binary value of `value`, so `0.015` (stored just below the
/// tie) becomes `0.01`. Non-finite and out-of-range values pass through.
pub fn round_money(value: f64) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    let cents = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // Correctly rounded while the mantissa fits in 53 bits.
    cents.mantissa() as f64 / 10f64.powi(cents.scale() as i32)
}

/// `rate` share of `amount`, rounded for display (e.g. `share_of(200.0, 0.15)` is `30.0`).
pub fn share_of(amount: f64, rate: f64) -> f64 {
    round_money(amount * rate)
}
