//! The compound function contract.

use crate::descriptor::{ArgKind, CompoundType};
use crate::error::CompoundError;
use crate::value::CompoundValue;

/// The contract implemented by every formula that takes a compound argument
/// bundle.
///
/// A compound function exposes the descriptor of the input it requires and
/// the kind of result it produces, and computes that result from a validated
/// [`CompoundValue`]. Implementations are pure: no retries, no hidden state,
/// no silent defaults — any failure is surfaced to the caller immediately.
///
/// `calculate` must reject any bundle whose descriptor is not equal to the
/// function's own declared input descriptor; the provided
/// [`check_input`](CompoundFunction::check_input) performs exactly that
/// precondition and is expected to be the first thing an implementation
/// calls.
///
/// # Example
///
/// ```rust
/// use fincalc_compound::prelude::*;
///
/// struct PeriodSum {
///     input_type: CompoundType,
/// }
///
/// impl CompoundFunction for PeriodSum {
///     type Output = i64;
///     type Error = CompoundError;
///
///     fn input_type(&self) -> &CompoundType {
///         &self.input_type
///     }
///
///     fn result_kind(&self) -> ArgKind {
///         ArgKind::Integer
///     }
///
///     fn calculate(&self, input: &CompoundValue) -> Result<i64, CompoundError> {
///         self.check_input(input)?;
///         Ok(input.get_integer("a")? + input.get_integer("b")?)
///     }
/// }
/// ```
pub trait CompoundFunction {
    /// The concrete result type of the calculation.
    type Output;

    /// The error type surfaced by the calculation.
    type Error: From<CompoundError>;

    /// Returns the descriptor of the argument bundle this function requires.
    fn input_type(&self) -> &CompoundType;

    /// Returns the declared kind of the result.
    fn result_kind(&self) -> ArgKind;

    /// Computes the result from a validated argument bundle.
    ///
    /// # Errors
    ///
    /// Returns `CompoundError::InvalidInputType` (via
    /// [`check_input`](CompoundFunction::check_input)) when the bundle was
    /// built against a different descriptor, the getter errors when an
    /// argument is absent or of the wrong type, and any formula-specific
    /// arithmetic error.
    fn calculate(&self, input: &CompoundValue) -> Result<Self::Output, Self::Error>;

    /// Verifies that the bundle's descriptor equals this function's declared
    /// input descriptor.
    ///
    /// # Errors
    ///
    /// Returns `CompoundError::InvalidInputType` carrying both descriptors
    /// when they differ.
    fn check_input(&self, input: &CompoundValue) -> Result<(), Self::Error> {
        let expected = self.input_type();
        let actual = input.compound_type();
        if actual != expected {
            return Err(CompoundError::invalid_input_type(expected, actual).into());
        }
        Ok(())
    }
}
