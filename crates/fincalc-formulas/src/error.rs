//! Error types for formula calculations.

use thiserror::Error;

use fincalc_compound::error::CompoundError;
use fincalc_core::error::CalcError;

/// A specialized Result type for formula calculations.
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Errors that can occur while constructing or evaluating a formula.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    /// A formula was constructed with a missing or out-of-range fixed
    /// parameter.
    #[error("Invalid construction parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: String,
        /// Why the parameter was rejected.
        reason: String,
    },

    /// Compound argument error.
    #[error("Compound argument error: {0}")]
    Compound(#[from] CompoundError),

    /// Core arithmetic error.
    #[error("Calculation error: {0}")]
    Calc(#[from] CalcError),
}

impl FormulaError {
    /// Creates an invalid construction parameter error.
    #[must_use]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = FormulaError::invalid_parameter("rate", "rate must be greater than -1");
        assert!(err.to_string().contains("rate"));
        assert!(err.to_string().contains("greater than -1"));
    }

    #[test]
    fn test_from_calc_error() {
        let err: FormulaError = CalcError::division_by_zero("annuity factor").into();
        assert!(matches!(err, FormulaError::Calc(_)));
        assert!(err.to_string().contains("annuity factor"));
    }
}
