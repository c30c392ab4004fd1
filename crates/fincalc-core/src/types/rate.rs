//! Interest rate type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CalcError, CalcResult};

/// An interest or discount rate expressed as a decimal fraction.
///
/// A value of `0.05` represents 5%. Rates must be greater than -1 so that the
/// accumulation base `1 + r` stays positive; anything at or below -1 has no
/// meaning for compounding arithmetic and is rejected at construction.
///
/// # Example
///
/// ```rust
/// use fincalc_core::types::Rate;
/// use rust_decimal_macros::dec;
///
/// let rate = Rate::new(dec!(0.05)).unwrap();
/// assert_eq!(rate.value(), dec!(0.05));
/// assert_eq!(rate.as_percentage(), dec!(5.00));
///
/// assert!(Rate::new(dec!(-1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rate {
    /// Rate as a decimal fraction (0.05 = 5%)
    value: Decimal,
}

impl Rate {
    /// Creates a new rate from a decimal fraction.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidRate` when `fraction <= -1`.
    pub fn new(fraction: Decimal) -> CalcResult<Self> {
        if fraction <= Decimal::NEGATIVE_ONE {
            return Err(CalcError::invalid_rate(
                fraction,
                "rate must be greater than -1",
            ));
        }
        Ok(Self { value: fraction })
    }

    /// Creates a rate from a percentage value (5.0 = 5%).
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidRate` when the equivalent fraction is at or
    /// below -1.
    pub fn from_percent(percent: Decimal) -> CalcResult<Self> {
        Self::new(percent / Decimal::ONE_HUNDRED)
    }

    /// Creates a zero rate.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            value: Decimal::ZERO,
        }
    }

    /// Returns the rate as a decimal fraction.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage (0.05 -> 5.00).
    #[must_use]
    pub fn as_percentage(&self) -> Decimal {
        self.value * Decimal::ONE_HUNDRED
    }

    /// Returns true if the rate is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns true if the rate is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value.is_sign_negative() && !self.value.is_zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}
