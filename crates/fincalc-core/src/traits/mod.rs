//! Core trait abstractions for the Fincalc library.
//!
//! The traits here define the seams between the formula library and its
//! callers. Formulas that map a single monetary amount to another implement
//! [`MonetaryOperator`]; the named-argument calling convention lives in the
//! `fincalc-compound` crate.

use crate::error::CalcResult;
use crate::types::Money;

/// A calculation that maps one monetary amount to another.
///
/// This is the "simple operator form" of a formula: the instance carries the
/// fixed construction parameters (rate, periods, ...) and `apply` performs
/// the arithmetic on the supplied amount. Implementations are pure; equal
/// inputs always produce equal outputs.
///
/// # Example
///
/// ```rust,ignore
/// use fincalc_core::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let fv = FutureValue::of(RateAndPeriods::from_fraction(dec!(0.05), 10)?);
/// let result = fv.apply(Money::new(dec!(1000), Currency::USD))?;
/// ```
pub trait MonetaryOperator {
    /// Applies the calculation to the given amount.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::CalcError`] when the arithmetic is
    /// undefined for the operator's parameters (zero divisors, overflow,
    /// currency mismatches).
    fn apply(&self, amount: Money) -> CalcResult<Money>;
}
