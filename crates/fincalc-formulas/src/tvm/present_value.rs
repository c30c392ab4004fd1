//! Present value of a single amount.

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
    CompoundType::builder("PresentValue")
        .required("rate", ArgKind::Rate)
        .required("periods", ArgKind::Integer)
        .required("amount", ArgKind::Money)
        .build()
});

/// The present value of a future amount.
///
/// A future amount is discounted back over `n` periods at a per-period rate
/// `r`:
///
/// ```text
/// PV = amount / (1 + r)^n
/// ```
///
/// # Example
///
/// ```rust
/// use fincalc_formulas::prelude::*;
/// use fincalc_core::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let pv = PresentValue::of(RateAndPeriods::from_fraction(dec!(0.05), 2).unwrap());
/// let result = pv.apply(Money::new(dec!(110.25), Currency::USD)).unwrap();
/// assert_eq!(result.round_dp(2).amount(), dec!(100.00));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentValue {
    rate_and_periods: RateAndPeriods,
}

impl PresentValue {
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

    /// Calculates the present value of `amount` under `rate_and_periods`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Overflow` when the accumulation factor exceeds the
    /// decimal range.
    pub fn calculate(amount: Money, rate_and_periods: RateAndPeriods) -> CalcResult<Money> {
        amount.mul_decimal(rate_and_periods.discount_factor()?)
    }
}

impl MonetaryOperator for PresentValue {
    fn apply(&self, amount: Money) -> CalcResult<Money> {
        Self::calculate(amount, self.rate_and_periods)
    }
}

impl CompoundFunction for PresentValue {
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

impl fmt::Display for PresentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PresentValue[{}]", self.rate_and_periods)
    }
}
