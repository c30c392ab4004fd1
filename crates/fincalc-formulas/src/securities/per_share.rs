//! Per-share ratio formulas.

use once_cell::sync::Lazy;

use fincalc_compound::descriptor::{ArgKind, CompoundType};
use fincalc_compound::function::CompoundFunction;
use fincalc_compound::value::CompoundValue;
use fincalc_core::error::CalcResult;
use fincalc_core::types::Money;

use crate::error::{FormulaError, FormulaResult};

static BOOK_VALUE_INPUT_TYPE: Lazy<CompoundType> = Lazy::new(|| {
    CompoundType::builder("BookValuePerShare")
        .required("equity", ArgKind::Money)
        .required("shares", ArgKind::Integer)
        .build()
});

/// Reads a share count argument, rejecting negative values.
fn shares_arg(input: &CompoundValue, name: &str) -> FormulaResult<u64> {
    let raw = input.get_integer(name)?;
    u64::try_from(raw)
        .map_err(|_| FormulaError::invalid_parameter(name, "share count must not be negative"))
}

/// Book value per share.
///
/// Total shareholder equity divided by the number of common shares
/// outstanding:
///
/// ```text
/// BVPS = equity / common shares
/// ```
///
/// A zero share count is an explicit division-by-zero error.
///
/// # Example
///
/// ```rust
/// use fincalc_formulas::prelude::*;
/// use fincalc_core::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let equity = Money::new(dec!(100), Currency::GBP);
/// let per_share = BookValuePerShare::calculate(equity, 10).unwrap();
/// assert_eq!(per_share, Money::new(dec!(10), Currency::GBP));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BookValuePerShare;

impl BookValuePerShare {
    /// Calculates the book value per share.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::DivisionByZero` when `common_shares` is zero.
    pub fn calculate(equity: Money, common_shares: u64) -> CalcResult<Money> {
        equity.div_shares(common_shares)
    }
}

impl CompoundFunction for BookValuePerShare {
    type Output = Money;
    type Error = FormulaError;

    fn input_type(&self) -> &CompoundType {
        &BOOK_VALUE_INPUT_TYPE
    }

    fn result_kind(&self) -> ArgKind {
        ArgKind::Money
    }

    fn calculate(&self, input: &CompoundValue) -> FormulaResult<Money> {
        self.check_input(input)?;
        let equity = input.get_money("equity")?;
        let shares = shares_arg(input, "shares")?;
        Ok(Self::calculate(equity, shares)?)
    }
}

/// Earnings per share.
///
/// Income available to common shareholders divided by the weighted average
/// number of shares outstanding:
///
/// ```text
/// EPS = (net income - preferred dividends) / weighted average shares
/// ```
///
/// Both amounts must share one currency; a zero share count is an explicit
/// division-by-zero error.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarningsPerShare;

impl EarningsPerShare {
    /// Calculates the earnings per share.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::CurrencyMismatch` when the amounts are in
    /// different currencies and `CalcError::DivisionByZero` when
    /// `weighted_average_shares` is zero.
    pub fn calculate(
        net_income: Money,
        preferred_dividends: Money,
        weighted_average_shares: u64,
    ) -> CalcResult<Money> {
        net_income
            .checked_sub(&preferred_dividends)?
            .div_shares(weighted_average_shares)
    }
}

/// Dividends per share.
///
/// Total dividends paid over a period divided by the number of shares
/// outstanding:
///
/// ```text
/// DPS = dividends / shares
/// ```
///
/// A zero share count is an explicit division-by-zero error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DividendsPerShare;

impl DividendsPerShare {
    /// Calculates the dividends per share.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::DivisionByZero` when `shares` is zero.
    pub fn calculate(dividends: Money, shares: u64) -> CalcResult<Money> {
        dividends.div_shares(shares)
    }
}
