//! Monetary amount type tagged with a currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::Currency;
use crate::error::{CalcError, CalcResult};

/// A monetary amount with currency.
///
/// All arithmetic is checked: operations across two different currencies and
/// divisions by zero return a [`CalcError`] instead of a silently wrong
/// amount.
///
/// # Example
///
/// ```rust
/// use fincalc_core::types::{Currency, Money};
/// use rust_decimal_macros::dec;
///
/// let amount = Money::new(dec!(100), Currency::GBP);
/// let per_share = amount.div_shares(10).unwrap();
/// assert_eq!(per_share, Money::new(dec!(10), Currency::GBP));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// The amount in units of the currency
    amount: Decimal,
    /// Currency of the amount
    currency: Currency,
}

impl Money {
    /// Creates a new monetary amount.
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns the decimal amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns true if both amounts share the same currency.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    /// Adds another amount of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::CurrencyMismatch` for cross-currency operands and
    /// `CalcError::Overflow` if the sum exceeds the decimal range.
    pub fn checked_add(&self, other: &Self) -> CalcResult<Self> {
        if !self.same_currency(other) {
            return Err(CalcError::currency_mismatch(
                "add",
                self.currency,
                other.currency,
            ));
        }
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| CalcError::overflow("add"))?;
        Ok(Self::new(amount, self.currency))
    }

    /// Subtracts another amount of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::CurrencyMismatch` for cross-currency operands and
    /// `CalcError::Overflow` if the difference exceeds the decimal range.
    pub fn checked_sub(&self, other: &Self) -> CalcResult<Self> {
        if !self.same_currency(other) {
            return Err(CalcError::currency_mismatch(
                "subtract",
                self.currency,
                other.currency,
            ));
        }
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| CalcError::overflow("subtract"))?;
        Ok(Self::new(amount, self.currency))
    }

    /// Multiplies the amount by a decimal factor.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Overflow` if the product exceeds the decimal range.
    pub fn mul_decimal(&self, factor: Decimal) -> CalcResult<Self> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or_else(|| CalcError::overflow("multiply"))?;
        Ok(Self::new(amount, self.currency))
    }

    /// Divides the amount by a decimal divisor.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::DivisionByZero` for a zero divisor and
    /// `CalcError::Overflow` if the quotient exceeds the decimal range.
    pub fn div_decimal(&self, divisor: Decimal) -> CalcResult<Self> {
        if divisor.is_zero() {
            return Err(CalcError::division_by_zero("divide"));
        }
        let amount = self
            .amount
            .checked_div(divisor)
            .ok_or_else(|| CalcError::overflow("divide"))?;
        Ok(Self::new(amount, self.currency))
    }

    /// Divides the amount by an integer share count.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::DivisionByZero` when `shares` is zero.
    pub fn div_shares(&self, shares: u64) -> CalcResult<Self> {
        if shares == 0 {
            return Err(CalcError::division_by_zero("divide by shares"));
        }
        self.div_decimal(Decimal::from(shares))
    }

    /// Rounds the amount to the specified number of decimal places.
    #[must_use]
    pub fn round_dp(&self, decimal_places: u32) -> Self {
        Self::new(self.amount.round_dp(decimal_places), self.currency)
    }

    /// Rounds the amount to the currency's standard decimal places.
    #[must_use]
    pub fn round_to_currency(&self) -> Self {
        self.round_dp(self.currency.decimal_places())
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            None // Can't compare amounts in different currencies
        } else {
            self.amount.partial_cmp(&other.amount)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
