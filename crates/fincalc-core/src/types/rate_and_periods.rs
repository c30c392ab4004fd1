//! Rate and periods pair used by factor-style formulas.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Rate;
use crate::error::{CalcError, CalcResult};

/// A validated pair of rate and number of compounding periods.
///
/// Most time-value-of-money formulas are parameterized by exactly this pair,
/// so it is carried as one value with the compounding arithmetic attached.
///
/// # Example
///
/// ```rust
/// use fincalc_core::types::RateAndPeriods;
/// use rust_decimal_macros::dec;
///
/// let rp = RateAndPeriods::from_fraction(dec!(0.05), 2).unwrap();
/// // (1 + 0.05)^2 = 1.1025
/// assert_eq!(rp.accumulation_factor().unwrap(), dec!(1.1025));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateAndPeriods {
    /// The per-period rate
    rate: Rate,
    /// Number of compounding periods
    periods: u32,
}

impl RateAndPeriods {
    /// Creates a pair from an already validated rate.
    #[must_use]
    pub fn of(rate: Rate, periods: u32) -> Self {
        Self { rate, periods }
    }

    /// Creates a pair from a raw decimal fraction (0.05 = 5%).
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidRate` when the fraction is at or below -1.
    pub fn from_fraction(fraction: Decimal, periods: u32) -> CalcResult<Self> {
        Ok(Self::of(Rate::new(fraction)?, periods))
    }

    /// Returns the rate.
    #[must_use]
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Returns the number of periods.
    #[must_use]
    pub fn periods(&self) -> u32 {
        self.periods
    }

    /// Calculates the accumulation factor `(1 + r)^n`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Overflow` when the factor exceeds the decimal
    /// range (large positive rates over many periods).
    pub fn accumulation_factor(&self) -> CalcResult<Decimal> {
        checked_pow(Decimal::ONE + self.rate.value(), self.periods)
    }

    /// Calculates the discount factor `1 / (1 + r)^n`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Overflow` when the accumulation factor exceeds the
    /// decimal range, and `CalcError::DivisionByZero` when it underflows to
    /// zero (deeply negative rates over many periods).
    pub fn discount_factor(&self) -> CalcResult<Decimal> {
        let accumulation = self.accumulation_factor()?;
        if accumulation.is_zero() {
            return Err(CalcError::division_by_zero(
                "discount factor: accumulation factor underflowed to zero",
            ));
        }
        Decimal::ONE
            .checked_div(accumulation)
            .ok_or_else(|| CalcError::overflow("discount factor"))
    }
}

impl fmt::Display for RateAndPeriods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} over {} periods", self.rate, self.periods)
    }
}

/// Raises a decimal base to a non-negative integer power by binary
/// exponentiation with checked multiplication.
fn checked_pow(base: Decimal, mut exp: u32) -> CalcResult<Decimal> {
    let mut result = Decimal::ONE;
    let mut base = base;
    loop {
        if exp & 1 == 1 {
            result = result
                .checked_mul(base)
                .ok_or_else(|| CalcError::overflow("integer power"))?;
        }
        exp >>= 1;
        if exp == 0 {
            break;
        }
        base = base
            .checked_mul(base)
            .ok_or_else(|| CalcError::overflow("integer power"))?;
    }
    Ok(result)
}
