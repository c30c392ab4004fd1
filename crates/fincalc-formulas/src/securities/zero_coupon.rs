//! Zero coupon bond valuation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use fincalc_core::error::CalcResult;
use fincalc_core::traits::MonetaryOperator;
use fincalc_core::types::{Money, RateAndPeriods};

use crate::error::{FormulaError, FormulaResult};

/// The value of a zero coupon bond.
///
/// A zero coupon bond pays no periodic coupons and instead pays its face
/// value as one lump sum at maturity, so its value today is the face value
/// discounted over the years to maturity:
///
/// ```text
/// value = face / (1 + r)^n
/// ```
///
/// With zero years to maturity the bond is worth exactly its face value.
///
/// # Example
///
/// ```rust
/// use fincalc_formulas::prelude::*;
/// use fincalc_core::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let bond = ZeroCouponBondValue::of(RateAndPeriods::from_fraction(dec!(0.05), 2).unwrap());
/// let value = bond.apply(Money::new(dec!(100), Currency::USD)).unwrap();
/// assert_eq!(value.round_dp(2).amount(), dec!(90.70));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZeroCouponBondValue {
    rate_and_periods: RateAndPeriods,
}

impl ZeroCouponBondValue {
    /// Creates the operator with a fixed rate and years to maturity.
    #[must_use]
    pub fn of(rate_and_periods: RateAndPeriods) -> Self {
        Self { rate_and_periods }
    }

    /// Creates the operator from a raw rate fraction and years to maturity.
    ///
    /// # Errors
    ///
    /// Returns `FormulaError::InvalidParameter` when the fraction is at or
    /// below -1.
    pub fn from_fraction(fraction: Decimal, years_to_maturity: u32) -> FormulaResult<Self> {
        let rate_and_periods = RateAndPeriods::from_fraction(fraction, years_to_maturity)
            .map_err(|e| FormulaError::invalid_parameter("rate", e.to_string()))?;
        Ok(Self::of(rate_and_periods))
    }

    /// Returns the fixed rate and years to maturity.
    #[must_use]
    pub fn rate_and_periods(&self) -> RateAndPeriods {
        self.rate_and_periods
    }

    /// Returns the number of years to maturity.
    #[must_use]
    pub fn years_to_maturity(&self) -> u32 {
        self.rate_and_periods.periods()
    }

    /// Calculates the bond value for the given face amount.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Overflow` when the accumulation factor exceeds
    /// the decimal range.
    pub fn calculate(face: Money, rate_and_periods: RateAndPeriods) -> CalcResult<Money> {
        face.div_decimal(rate_and_periods.accumulation_factor()?)
    }
}

impl MonetaryOperator for ZeroCouponBondValue {
    fn apply(&self, face: Money) -> CalcResult<Money> {
        Self::calculate(face, self.rate_and_periods)
    }
}

impl fmt::Display for ZeroCouponBondValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZeroCouponBondValue[{}]", self.rate_and_periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_core::types::Currency;
    use rust_decimal_macros::dec;

    fn rp(fraction: Decimal, periods: u32) -> RateAndPeriods {
        RateAndPeriods::from_fraction(fraction, periods).unwrap()
    }

    #[test]
    fn test_discounts_face_value() {
        let bond = ZeroCouponBondValue::of(rp(dec!(0.05), 2));
        let value = bond.apply(Money::new(dec!(100), Currency::USD)).unwrap();

        // 100 / 1.1025 = 90.7029...
        assert_eq!(value.round_dp(2).amount(), dec!(90.70));
    }

    #[test]
    fn test_at_maturity_is_face_value() {
        let bond = ZeroCouponBondValue::of(rp(dec!(0.05), 0));
        let face = Money::new(dec!(100), Currency::USD);
        assert_eq!(bond.apply(face).unwrap(), face);
    }

    #[test]
    fn test_longer_maturity_is_worth_less() {
        let face = Money::new(dec!(100), Currency::USD);
        let short = ZeroCouponBondValue::of(rp(dec!(0.05), 2)).apply(face).unwrap();
        let long = ZeroCouponBondValue::of(rp(dec!(0.05), 10)).apply(face).unwrap();
        assert!(long < short);
    }

    #[test]
    fn test_equality() {
        let a = ZeroCouponBondValue::of(rp(dec!(0.05), 2));
        let b = ZeroCouponBondValue::of(rp(dec!(0.05), 2));
        let c = ZeroCouponBondValue::of(rp(dec!(0.05), 3));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_fraction_out_of_range() {
        let err = ZeroCouponBondValue::from_fraction(dec!(-1.01), 5).unwrap_err();
        assert!(matches!(err, FormulaError::InvalidParameter { .. }));
    }

    #[test]
    fn test_display() {
        let bond = ZeroCouponBondValue::of(rp(dec!(0.05), 2));
        assert_eq!(
            format!("{}", bond),
            "ZeroCouponBondValue[5.00% over 2 periods]"
        );
    }
}
