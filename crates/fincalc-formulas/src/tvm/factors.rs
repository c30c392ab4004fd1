//! Accumulation, discount, and annuity factors.
//!
//! The factor formulas are plain decimal functions of a rate/periods pair.
//! They underlie the monetary formulas in this module and are also useful on
//! their own (e.g. building a table of discount factors).

use rust_decimal::Decimal;

use fincalc_core::error::CalcResult;
use fincalc_core::types::RateAndPeriods;

/// The future value factor `(1 + r)^n`.
///
/// Scales a present amount to its future value.
#[derive(Debug, Clone, Copy)]
pub struct FutureValueFactor;

impl FutureValueFactor {
    /// Calculates `(1 + r)^n`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Overflow` when the factor exceeds the decimal
    /// range.
    pub fn calculate(rate_and_periods: RateAndPeriods) -> CalcResult<Decimal> {
        rate_and_periods.accumulation_factor()
    }
}

/// The present value factor `1 / (1 + r)^n`.
///
/// Scales a future amount to its present value.
#[derive(Debug, Clone, Copy)]
pub struct PresentValueFactor;

impl PresentValueFactor {
    /// Calculates `1 / (1 + r)^n`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Overflow` when the accumulation factor exceeds
    /// the decimal range.
    pub fn calculate(rate_and_periods: RateAndPeriods) -> CalcResult<Decimal> {
        rate_and_periods.discount_factor()
    }
}

/// The present value annuity factor.
///
/// The sum of the discount factors of `n` level payments:
///
/// ```text
/// PVAF = (1 - (1 + r)^-n) / r
/// ```
///
/// Boundary cases are defined, not exceptional: zero periods yields `0` for
/// any rate (there are no payments to discount), and a zero rate yields `n`
/// (the analytic limit, each payment discounting to itself).
#[derive(Debug, Clone, Copy)]
pub struct PresentValueAnnuityFactor;

impl PresentValueAnnuityFactor {
    /// Calculates the present value annuity factor.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Overflow` when the accumulation factor exceeds
    /// the decimal range.
    pub fn calculate(rate_and_periods: RateAndPeriods) -> CalcResult<Decimal> {
        if rate_and_periods.periods() == 0 {
            return Ok(Decimal::ZERO);
        }
        let rate = rate_and_periods.rate();
        if rate.is_zero() {
            return Ok(Decimal::from(rate_and_periods.periods()));
        }
        let discount = rate_and_periods.discount_factor()?;
        Ok((Decimal::ONE - discount) / rate.value())
    }
}

/// The future value annuity factor.
///
/// The accumulated value of `n` level payments of one unit:
///
/// ```text
/// FVAF = ((1 + r)^n - 1) / r
/// ```
///
/// Zero periods yields `0` for any rate; a zero rate yields `n`.
#[derive(Debug, Clone, Copy)]
pub struct FutureValueAnnuityFactor;

impl FutureValueAnnuityFactor {
    /// Calculates the future value annuity factor.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Overflow` when the accumulation factor exceeds
    /// the decimal range.
    pub fn calculate(rate_and_periods: RateAndPeriods) -> CalcResult<Decimal> {
        if rate_and_periods.periods() == 0 {
            return Ok(Decimal::ZERO);
        }
        let rate = rate_and_periods.rate();
        if rate.is_zero() {
            return Ok(Decimal::from(rate_and_periods.periods()));
        }
        let accumulation = rate_and_periods.accumulation_factor()?;
        Ok((accumulation - Decimal::ONE) / rate.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rp(fraction: Decimal, periods: u32) -> RateAndPeriods {
        RateAndPeriods::from_fraction(fraction, periods).unwrap()
    }

    fn assert_close(actual: Decimal, expected: Decimal) {
        assert!(
            (actual - expected).abs() < dec!(0.000000000001),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_future_value_factor() {
        assert_eq!(
            FutureValueFactor::calculate(rp(dec!(0.05), 2)).unwrap(),
            dec!(1.1025)
        );
        assert_eq!(
            FutureValueFactor::calculate(rp(dec!(0.05), 0)).unwrap(),
            Decimal::ONE
        );
    }

    #[test]
    fn test_present_value_factor() {
        assert_close(
            PresentValueFactor::calculate(rp(dec!(0.05), 1)).unwrap(),
            dec!(0.952380952380952),
        );
        assert_eq!(
            PresentValueFactor::calculate(rp(dec!(0.05), 0)).unwrap(),
            Decimal::ONE
        );
    }

    #[test]
    fn test_pv_annuity_factor_zero_periods() {
        assert_eq!(
            PresentValueAnnuityFactor::calculate(rp(dec!(0.05), 0)).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            PresentValueAnnuityFactor::calculate(rp(dec!(-0.05), 0)).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_pv_annuity_factor_one_period() {
        assert_close(
            PresentValueAnnuityFactor::calculate(rp(dec!(0.05), 1)).unwrap(),
            dec!(0.952380952380952),
        );
        assert_close(
            PresentValueAnnuityFactor::calculate(rp(dec!(-0.05), 1)).unwrap(),
            dec!(1.05263157894736),
        );
    }

    #[test]
    fn test_pv_annuity_factor_ten_periods() {
        assert_close(
            PresentValueAnnuityFactor::calculate(rp(dec!(0.05), 10)).unwrap(),
            dec!(7.721734929184812),
        );
        assert_close(
            PresentValueAnnuityFactor::calculate(rp(dec!(-0.05), 10)).unwrap(),
            dec!(13.40365140230186),
        );
    }

    #[test]
    fn test_pv_annuity_factor_zero_rate() {
        assert_eq!(
            PresentValueAnnuityFactor::calculate(rp(dec!(0), 10)).unwrap(),
            dec!(10)
        );
    }

    #[test]
    fn test_fv_annuity_factor() {
        // ((1.05)^2 - 1) / 0.05 = 0.1025 / 0.05 = 2.05
        assert_eq!(
            FutureValueAnnuityFactor::calculate(rp(dec!(0.05), 2)).unwrap(),
            dec!(2.05)
        );
        assert_eq!(
            FutureValueAnnuityFactor::calculate(rp(dec!(0.05), 0)).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            FutureValueAnnuityFactor::calculate(rp(dec!(0), 7)).unwrap(),
            dec!(7)
        );
    }

    #[test]
    fn test_pv_annuity_factor_matches_sum_of_discount_factors() {
        let mut sum = Decimal::ZERO;
        for k in 1..=10u32 {
            sum += PresentValueFactor::calculate(rp(dec!(0.05), k)).unwrap();
        }
        let factor = PresentValueAnnuityFactor::calculate(rp(dec!(0.05), 10)).unwrap();
        assert_close(factor, sum);
    }
}
