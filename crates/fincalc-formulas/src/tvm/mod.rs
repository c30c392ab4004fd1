//! Time value of money formulas.
//!
//! This module provides the compounding formulas: future and present value,
//! the accumulation/discount factor family, and annuity payments.

mod annuity;
mod factors;
mod future_value;
mod present_value;

pub use annuity::{AnnuityPaymentFv, AnnuityPaymentPv};
pub use factors::{
    FutureValueAnnuityFactor, FutureValueFactor, PresentValueAnnuityFactor, PresentValueFactor,
};
pub use future_value::FutureValue;
pub use present_value::PresentValue;

use fincalc_compound::value::CompoundValue;
use fincalc_core::types::RateAndPeriods;

use crate::error::{FormulaError, FormulaResult};

/// Reads the conventional `rate`/`periods` argument pair from a bundle.
pub(crate) fn rate_and_periods_args(input: &CompoundValue) -> FormulaResult<RateAndPeriods> {
    let rate = input.get_rate("rate")?;
    let raw = input.get_integer("periods")?;
    let periods = u32::try_from(raw).map_err(|_| {
        FormulaError::invalid_parameter("periods", "must be between 0 and 4294967295")
    })?;
    Ok(RateAndPeriods::of(rate, periods))
}
