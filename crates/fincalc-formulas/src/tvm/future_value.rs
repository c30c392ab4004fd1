//! Future value of a single amount.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use fincalc_compound::descriptor::{ArgKind, CompoundType};
use fincalc_compound::function::CompoundFunction;
use fincalc_compound::value::CompoundValue;
use fincalc_core::error::CalcResult;
use fincalc_core::traits::MonetaryOperator;
use fincalc_core::types::{Money, RateAndPeriods};

use crate::error::{FormulaError, FormulaResult};
use crate::tvm::rate_and_periods_args;

static INPUT_TYPE: Lazy<CompoundType> = Lazy::new(|| {
    CompoundType::builder("FutureValue")
        .required("rate", ArgKind::Rate)
        .required("periods", ArgKind::Integer)
        .required("amount", ArgKind::Money)
        .build()
});

/// The future value of a present amount after compounding.
///
/// An amount invested at a per-period rate `r` for `n` periods grows by the
/// accumulation factor:
///
/// ```text
/// FV = amount * (1 + r)^n
/// ```
///
/// # Example
///
/// ```rust
/// use fincalc_formulas::prelude::*;
/// use fincalc_core::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let fv = FutureValue::of(RateAndPeriods::from_fraction(dec!(0.05), 2).unwrap());
/// let result = fv.apply(Money::new(dec!(100), Currency::USD)).unwrap();
/// assert_eq!(result.amount(), dec!(110.2500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FutureValue {
    rate_and_periods: RateAndPeriods,
}

impl FutureValue {
    /// Creates the operator with fixed rate and periods.
    #[must_use]
    pub fn of(rate_and_periods: RateAndPeriods) -> Self {
        Self { rate_and_periods }
    }

    /// Creates the operator from a raw rate fraction and periods.
    ///
    /// # Errors
    ///
    /// Returns `FormulaError::InvalidParameter` when the fraction is at or
    /// below -1.
    pub fn from_fraction(fraction: Decimal, periods: u32) -> FormulaResult<Self> {
        let rate_and_periods = RateAndPeriods::from_fraction(fraction, periods)
            .map_err(|e| FormulaError::invalid_parameter("rate", e.to_string()))?;
        Ok(Self::of(rate_and_periods))
    }

    /// Returns the fixed rate and periods.
    #[must_use]
    pub fn rate_and_periods(&self) -> RateAndPeriods {
        self.rate_and_periods
    }

    /// Calculates the future value of `amount` under `rate_and_periods`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Overflow` when the accumulation factor or the
    /// scaled amount exceeds the decimal range.
    pub fn calculate(amount: Money, rate_and_periods: RateAndPeriods) -> CalcResult<Money> {
        amount.mul_decimal(rate_and_periods.accumulation_factor()?)
    }
}

impl MonetaryOperator for FutureValue {
    fn apply(&self, amount: Money) -> CalcResult<Money> {
        Self::calculate(amount, self.rate_and_periods)
    }
}

impl CompoundFunction for FutureValue {
    type Output = Money;
    type Error = FormulaError;

    fn input_type(&self) -> &CompoundType {
        &INPUT_TYPE
    }

    fn result_kind(&self) -> ArgKind {
        ArgKind::Money
    }

    fn calculate(&self, input: &CompoundValue) -> FormulaResult<Money> {
        self.check_input(input)?;
        let rate_and_periods = rate_and_periods_args(input)?;
        let amount = input.get_money("amount")?;
        Ok(Self::calculate(amount, rate_and_periods)?)
    }
}

impl fmt::Display for FutureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FutureValue[{}]", self.rate_and_periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_compound::error::CompoundError;
    use fincalc_core::types::{Currency, Rate};
    use rust_decimal_macros::dec;

    fn rp(fraction: Decimal, periods: u32) -> RateAndPeriods {
        RateAndPeriods::from_fraction(fraction, periods).unwrap()
    }

    #[test]
    fn test_operator_form() {
        let fv = FutureValue::of(rp(dec!(0.05), 2));
        let result = fv.apply(Money::new(dec!(100), Currency::USD)).unwrap();
        assert_eq!(result.amount(), dec!(110.2500));
    }

    #[test]
    fn test_zero_periods_is_identity() {
        let fv = FutureValue::of(rp(dec!(0.05), 0));
        let amount = Money::new(dec!(100), Currency::USD);
        assert_eq!(fv.apply(amount).unwrap(), amount);
    }

    #[test]
    fn test_negative_rate_shrinks() {
        let fv = FutureValue::of(rp(dec!(-0.05), 1));
        let result = fv.apply(Money::new(dec!(100), Currency::USD)).unwrap();
        assert_eq!(result.amount(), dec!(95.00));
    }

    #[test]
    fn test_from_fraction_out_of_range() {
        let err = FutureValue::from_fraction(dec!(-2), 5).unwrap_err();
        assert!(matches!(err, FormulaError::InvalidParameter { .. }));
    }

    #[test]
    fn test_compound_form() {
        let fv = FutureValue::of(rp(dec!(0.05), 2));
        let value = CompoundValue::builder(fv.input_type())
            .with("rate", Rate::new(dec!(0.05)).unwrap())
            .with("periods", 2i64)
            .with("amount", Money::new(dec!(100), Currency::USD))
            .build()
            .unwrap();

        let result = CompoundFunction::calculate(&fv, &value).unwrap();
        assert_eq!(result.amount(), dec!(110.2500));
        assert_eq!(fv.result_kind(), ArgKind::Money);
    }

    #[test]
    fn test_compound_form_uses_bundle_arguments() {
        // The generic form computes from the bundle, not the fixed params.
        let fv = FutureValue::of(rp(dec!(0.99), 30));
        let value = CompoundValue::builder(fv.input_type())
            .with("rate", Rate::new(dec!(0.05)).unwrap())
            .with("periods", 2i64)
            .with("amount", Money::new(dec!(100), Currency::USD))
            .build()
            .unwrap();

        let result = CompoundFunction::calculate(&fv, &value).unwrap();
        assert_eq!(result.amount(), dec!(110.2500));
    }

    #[test]
    fn test_compound_form_rejects_foreign_descriptor() {
        let fv = FutureValue::of(rp(dec!(0.05), 2));
        let foreign = CompoundType::builder("SomethingElse")
            .required("rate", ArgKind::Rate)
            .required("periods", ArgKind::Integer)
            .required("amount", ArgKind::Money)
            .build();
        let value = CompoundValue::builder(&foreign)
            .with("rate", Rate::new(dec!(0.05)).unwrap())
            .with("periods", 2i64)
            .with("amount", Money::new(dec!(100), Currency::USD))
            .build()
            .unwrap();

        let err = CompoundFunction::calculate(&fv, &value).unwrap_err();
        assert!(matches!(
            err,
            FormulaError::Compound(CompoundError::InvalidInputType { .. })
        ));
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let amount = Money::new(dec!(123.45), Currency::EUR);
        let first = FutureValue::calculate(amount, rp(dec!(0.07), 12)).unwrap();
        let second = FutureValue::calculate(amount, rp(dec!(0.07), 12)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display() {
        let fv = FutureValue::of(rp(dec!(0.05), 10));
        assert_eq!(format!("{}", fv), "FutureValue[5.00% over 10 periods]");
    }
}
