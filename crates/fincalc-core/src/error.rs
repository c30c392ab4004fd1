//! Error types for the Fincalc core library.
//!
//! This module defines the error types raised by monetary and rate
//! arithmetic, providing structured error handling with context.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::Currency;

/// A specialized Result type for core calculation operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// The main error type for monetary and rate arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Invalid rate value.
    #[error("Invalid rate: {value} - {reason}")]
    InvalidRate {
        /// The invalid rate value.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Arithmetic attempted across two different currencies.
    #[error("Currency mismatch in {operation}: {left} vs {right}")]
    CurrencyMismatch {
        /// The operation that was attempted.
        operation: String,
        /// Currency of the left operand.
        left: Currency,
        /// Currency of the right operand.
        right: Currency,
    },

    /// Division by a zero divisor.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The operation that was attempted.
        operation: String,
    },

    /// Decimal arithmetic overflowed.
    #[error("Decimal overflow in {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: String,
    },
}

impl CalcError {
    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidRate {
            value,
            reason: reason.into(),
        }
    }

    /// Creates a currency mismatch error.
    #[must_use]
    pub fn currency_mismatch(operation: impl Into<String>, left: Currency, right: Currency) -> Self {
        Self::CurrencyMismatch {
            operation: operation.into(),
            left,
            right,
        }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }
}
