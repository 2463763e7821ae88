//! Wei amount utilities.
//!
//! ## Overview
//!
//! All fees, pools, and rewards are `u128` wei. Arithmetic on amounts is
//! plain integer math; floating point is never used, so repeated rounds
//! cannot accumulate rounding drift.
//!
//! ## Conversions
//!
//! Human-readable ETH strings are converted through `rust_decimal` at the
//! edges only (configuration, display). The game core itself never sees a
//! decimal value.
//!
//! ## Examples
//!
//! ```
//! use rankr::types::amount::{to_wei, from_wei};
//!
//! let fee = to_wei("0.00001").unwrap();
//! assert_eq!(fee, 10_000_000_000_000);
//! assert_eq!(from_wei(fee), "0.00001");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Wei per ETH: 10^18
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Default entry fee: 0.00001 ETH, the original Rankr constant.
pub const DEFAULT_ENTRY_FEE: u128 = 10_000_000_000_000;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert an ETH decimal string to wei.
///
/// Returns `None` for negative, unparseable, fractional-wei, or
/// out-of-range values.
///
/// # Example
///
/// ```
/// use rankr::types::amount::to_wei;
///
/// assert_eq!(to_wei("1"), Some(1_000_000_000_000_000_000));
/// assert_eq!(to_wei("0.001"), Some(1_000_000_000_000_000));
/// assert_eq!(to_wei("-1"), None);
/// assert_eq!(to_wei("abc"), None);
/// ```
pub fn to_wei(s: &str) -> Option<u128> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_wei(decimal)
}

/// Convert a Decimal ETH value to wei.
///
/// Returns `None` if the value is negative, has sub-wei precision, or does
/// not fit in `u128` after scaling.
pub fn decimal_to_wei(d: Decimal) -> Option<u128> {
    if d.is_sign_negative() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from_u128(WEI_PER_ETH)?)?;
    if scaled.fract() != Decimal::ZERO {
        return None;
    }
    scaled.to_u128()
}

/// Convert a wei amount to a Decimal ETH value.
///
/// Returns `None` when the amount exceeds Decimal's 28-digit range.
pub fn wei_to_decimal(value: u128) -> Option<Decimal> {
    let d = Decimal::from_u128(value)?;
    d.checked_div(Decimal::from_u128(WEI_PER_ETH)?)
}

/// Convert a wei amount to a human-readable ETH string (trailing zeros
/// trimmed). Falls back to `"<wei> wei"` for amounts beyond Decimal range.
///
/// # Example
///
/// ```
/// use rankr::types::amount::from_wei;
///
/// assert_eq!(from_wei(1_000_000_000_000_000_000), "1");
/// assert_eq!(from_wei(1_500_000_000_000_000_000), "1.5");
/// assert_eq!(from_wei(1), "0.000000000000000001");
/// ```
pub fn from_wei(value: u128) -> String {
    match wei_to_decimal(value) {
        Some(d) => format!("{}", d.normalize()),
        None => format!("{} wei", value),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
