//! Annuity payment formulas.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use fincalc_compound::descriptor::{ArgKind, CompoundType};
use fincalc_compound::function::CompoundFunction;
use fincalc_compound::value::CompoundValue;
use fincalc_core::error::{CalcError, CalcResult};
use fincalc_core::traits::MonetaryOperator;
use fincalc_core::types::{Money, RateAndPeriods};

use crate::error::{FormulaError, FormulaResult};
use crate::tvm::{rate_and_periods_args, FutureValue};

static FV_INPUT_TYPE: Lazy<CompoundType> = Lazy::new(|| {
    CompoundType::builder("AnnuityPaymentFv")
        .required("rate", ArgKind::Rate)
        .required("periods", ArgKind::Integer)
        .required("amount", ArgKind::Money)
        .build()
});

static PV_INPUT_TYPE: Lazy<CompoundType> = Lazy::new(|| {
    CompoundType::builder("AnnuityPaymentPv")
        .required("rate", ArgKind::Rate)
        .required("periods", ArgKind::Integer)
        .required("amount", ArgKind::Money)
        .build()
});

/// The periodic payment of an annuity when its future value is known.
///
/// Used when saving towards a target balance: the amount is first scaled by
/// the future value factor, then divided by the accumulated annuity divisor:
///
/// ```text
/// payment = FV(amount) / ((1 + r)^n - 1)
/// ```
///
/// The divisor is zero when `n = 0` or `r = 0`; both are surfaced as an
/// explicit division-by-zero error rather than an infinite or NaN payment.
///
/// # Example
///
/// ```rust
/// use fincalc_formulas::prelude::*;
/// use fincalc_core::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let payment = AnnuityPaymentFv::of(RateAndPeriods::from_fraction(dec!(0.05), 10).unwrap());
/// let result = payment.apply(Money::new(dec!(10000), Currency::USD)).unwrap();
/// assert_eq!(result.round_dp(2).amount(), dec!(25900.91));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnuityPaymentFv {
    rate_and_periods: RateAndPeriods,
}

impl AnnuityPaymentFv {
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

    /// Calculates the annuity payment for the given future amount.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::DivisionByZero` when the divisor `(1 + r)^n - 1`
    /// is zero (`periods = 0` or a zero rate).
    pub fn calculate(amount: Money, rate_and_periods: RateAndPeriods) -> CalcResult<Money> {
        let accumulation = rate_and_periods.accumulation_factor()?;
        let divisor = accumulation - Decimal::ONE;
        if divisor.is_zero() {
            return Err(CalcError::division_by_zero(
                "annuity payment: (1 + r)^n - 1 is zero when periods = 0 or rate = 0",
            ));
        }
        let scaled = FutureValue::calculate(amount, rate_and_periods)?;
        scaled.div_decimal(divisor)
    }
}

impl MonetaryOperator for AnnuityPaymentFv {
    fn apply(&self, amount: Money) -> CalcResult<Money> {
        Self::calculate(amount, self.rate_and_periods)
    }
}

impl CompoundFunction for AnnuityPaymentFv {
    type Output = Money;
    type Error = FormulaError;

    fn input_type(&self) -> &CompoundType {
        &FV_INPUT_TYPE
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

impl fmt::Display for AnnuityPaymentFv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnnuityPaymentFv[{}]", self.rate_and_periods)
    }
}

/// The periodic payment of an annuity when its present value is known.
///
/// Used when paying down a known balance, e.g. the payments on a loan:
///
/// ```text
/// payment = amount * r / (1 - (1 + r)^-n)
/// ```
///
/// The divisor is zero when `n = 0` or `r = 0`; both are surfaced as an
/// explicit division-by-zero error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnuityPaymentPv {
    rate_and_periods: RateAndPeriods,
}

impl AnnuityPaymentPv {
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

    /// Calculates the annuity payment for the given present amount.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::DivisionByZero` when the divisor
    /// `1 - (1 + r)^-n` is zero (`periods = 0` or a zero rate).
    pub fn calculate(amount: Money, rate_and_periods: RateAndPeriods) -> CalcResult<Money> {
        let discount = rate_and_periods.discount_factor()?;
        let divisor = Decimal::ONE - discount;
        if divisor.is_zero() {
            return Err(CalcError::division_by_zero(
                "annuity payment: 1 - (1 + r)^-n is zero when periods = 0 or rate = 0",
            ));
        }
        amount
            .mul_decimal(rate_and_periods.rate().value())?
            .div_decimal(divisor)
    }
}

impl MonetaryOperator for AnnuityPaymentPv {
    fn apply(&self, amount: Money) -> CalcResult<Money> {
        Self::calculate(amount, self.rate_and_periods)
    }
}

impl CompoundFunction for AnnuityPaymentPv {
    type Output = Money;
    type Error = FormulaError;

    fn input_type(&self) -> &CompoundType {
        &PV_INPUT_TYPE
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

impl fmt::Display for AnnuityPaymentPv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnnuityPaymentPv[{}]", self.rate_and_periods)
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
    fn test_payment_from_future_value() {
        // Saving towards 10,000 over 10 periods at 5%.
        let payment = AnnuityPaymentFv::of(rp(dec!(0.05), 10));
        let result = payment.apply(Money::new(dec!(10000), Currency::USD)).unwrap();

        // 10000 * 1.05^10 / (1.05^10 - 1)
        assert_eq!(result.round_dp(2).amount(), dec!(25900.91));
    }

    #[test]
    fn test_payment_from_future_value_single_period() {
        let payment = AnnuityPaymentFv::of(rp(dec!(0.05), 1));
        let result = payment.apply(Money::new(dec!(100), Currency::USD)).unwrap();

        // 100 * 1.05 / 0.05 = 2100
        assert_eq!(result.round_dp(2).amount(), dec!(2100.00));
    }

    #[test]
    fn test_fv_zero_periods_is_explicit_error() {
        let payment = AnnuityPaymentFv::of(rp(dec!(0.05), 0));
        let err = payment.apply(Money::new(dec!(100), Currency::USD)).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero { .. }));
    }

    #[test]
    fn test_fv_zero_rate_is_explicit_error() {
        let payment = AnnuityPaymentFv::of(rp(dec!(0), 10));
        let err = payment.apply(Money::new(dec!(100), Currency::USD)).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero { .. }));
    }

    #[test]
    fn test_fv_compound_form() {
        let payment = AnnuityPaymentFv::of(rp(dec!(0.05), 10));
        let value = CompoundValue::builder(payment.input_type())
            .with("rate", Rate::new(dec!(0.05)).unwrap())
            .with("periods", 10i64)
            .with("amount", Money::new(dec!(10000), Currency::USD))
            .build()
            .unwrap();

        let result = CompoundFunction::calculate(&payment, &value).unwrap();
        assert_eq!(result.round_dp(2).amount(), dec!(25900.91));
    }

    #[test]
    fn test_fv_compound_form_rejects_pv_descriptor() {
        let fv_payment = AnnuityPaymentFv::of(rp(dec!(0.05), 10));
        let pv_payment = AnnuityPaymentPv::of(rp(dec!(0.05), 10));

        let value = CompoundValue::builder(pv_payment.input_type())
            .with("rate", Rate::new(dec!(0.05)).unwrap())
            .with("periods", 10i64)
            .with("amount", Money::new(dec!(10000), Currency::USD))
            .build()
            .unwrap();

        let err = CompoundFunction::calculate(&fv_payment, &value).unwrap_err();
        assert!(matches!(
            err,
            FormulaError::Compound(CompoundError::InvalidInputType { .. })
        ));
    }

    #[test]
    fn test_payment_from_present_value() {
        // Paying down 10,000 over 10 periods at 5%.
        let payment = AnnuityPaymentPv::of(rp(dec!(0.05), 10));
        let result = payment.apply(Money::new(dec!(10000), Currency::USD)).unwrap();

        // 10000 * 0.05 / (1 - 1.05^-10)
        assert_eq!(result.round_dp(2).amount(), dec!(1295.05));
    }

    #[test]
    fn test_pv_zero_periods_is_explicit_error() {
        let payment = AnnuityPaymentPv::of(rp(dec!(0.05), 0));
        let err = payment.apply(Money::new(dec!(100), Currency::USD)).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero { .. }));
    }

    #[test]
    fn test_payments_relate_through_rate() {
        // On the same balance the present-value payment is the future-value
        // payment scaled by the rate: A*r*(1+r)^n/((1+r)^n - 1) versus
        // A*(1+r)^n/((1+r)^n - 1).
        let rate_and_periods = rp(dec!(0.05), 10);
        let balance = Money::new(dec!(10000), Currency::EUR);

        let from_pv = AnnuityPaymentPv::calculate(balance, rate_and_periods).unwrap();
        let from_fv = AnnuityPaymentFv::calculate(balance, rate_and_periods).unwrap();

        let expected = from_fv
            .mul_decimal(rate_and_periods.rate().value())
            .unwrap();
        assert!((from_pv.amount() - expected.amount()).abs() < dec!(0.000001));
    }

    #[test]
    fn test_from_fraction_out_of_range() {
        let err = AnnuityPaymentFv::from_fraction(dec!(-3), 10).unwrap_err();
        assert!(matches!(err, FormulaError::InvalidParameter { .. }));

        let err = AnnuityPaymentPv::from_fraction(dec!(-3), 10).unwrap_err();
        assert!(matches!(err, FormulaError::InvalidParameter { .. }));
    }

    #[test]
    fn test_display() {
        let payment = AnnuityPaymentFv::of(rp(dec!(0.05), 10));
        assert_eq!(
            format!("{}", payment),
            "AnnuityPaymentFv[5.00% over 10 periods]"
        );
    }
}
