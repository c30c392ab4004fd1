//! Compound argument values.
//!
//! A [`CompoundValue`] is an immutable bundle of named argument values built
//! against a [`CompoundType`]. All validation happens when the bundle is
//! built; once `build` succeeds the bundle is known to satisfy its
//! descriptor and the typed getters cannot encounter an undeclared shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use fincalc_core::types::{Money, Rate};

use crate::descriptor::{ArgKind, CompoundType};
use crate::error::{CompoundError, CompoundResult};

/// A single compound argument value, tagged with its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgValue {
    /// An interest or discount rate.
    Rate(Rate),
    /// A signed integer (periods, share counts).
    Integer(i64),
    /// A plain high-precision decimal.
    Decimal(Decimal),
    /// A currency-tagged monetary amount.
    Money(Money),
}

impl ArgValue {
    /// Returns the type tag of this value.
    #[must_use]
    pub fn kind(&self) -> ArgKind {
        match self {
            ArgValue::Rate(_) => ArgKind::Rate,
            ArgValue::Integer(_) => ArgKind::Integer,
            ArgValue::Decimal(_) => ArgKind::Decimal,
            ArgValue::Money(_) => ArgKind::Money,
        }
    }
}

impl From<Rate> for ArgValue {
    fn from(rate: Rate) -> Self {
        ArgValue::Rate(rate)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Integer(value)
    }
}

impl From<Decimal> for ArgValue {
    fn from(value: Decimal) -> Self {
        ArgValue::Decimal(value)
    }
}

impl From<Money> for ArgValue {
    fn from(amount: Money) -> Self {
        ArgValue::Money(amount)
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Rate(rate) => write!(f, "{rate}"),
            ArgValue::Integer(value) => write!(f, "{value}"),
            ArgValue::Decimal(value) => write!(f, "{value}"),
            ArgValue::Money(amount) => write!(f, "{amount}"),
        }
    }
}

/// An immutable, type-checked bundle of named argument values.
///
/// Built by a caller immediately before invoking a
/// [`crate::function::CompoundFunction`], validated against the descriptor at
/// build time, and discarded after use. There are no mutation operations;
/// every "modification" is a new build.
///
/// # Example
///
/// ```rust
/// use fincalc_compound::prelude::*;
/// use fincalc_core::types::Rate;
/// use rust_decimal_macros::dec;
///
/// let descriptor = CompoundType::builder("DiscountFactor")
///     .required("rate", ArgKind::Rate)
///     .required("periods", ArgKind::Integer)
///     .build();
///
/// let value = CompoundValue::builder(&descriptor)
///     .with("rate", Rate::new(dec!(0.05)).unwrap())
///     .with("periods", 10i64)
///     .build()
///     .unwrap();
///
/// assert_eq!(value.get_rate("rate").unwrap().value(), dec!(0.05));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundValue {
    /// The descriptor this value was built against.
    compound_type: CompoundType,
    /// Argument name -> value.
    values: BTreeMap<String, ArgValue>,
}

impl CompoundValue {
    /// Creates a new builder against the given descriptor.
    #[must_use]
    pub fn builder(compound_type: &CompoundType) -> CompoundValueBuilder {
        CompoundValueBuilder {
            compound_type: compound_type.clone(),
            values: BTreeMap::new(),
        }
    }

    /// Returns the descriptor this value was built against.
    #[must_use]
    pub fn compound_type(&self) -> &CompoundType {
        &self.compound_type
    }

    /// Returns the raw value stored under the given name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Returns the rate stored under the given name.
    ///
    /// # Errors
    ///
    /// Returns `CompoundError::MissingArgument` when the name is absent and
    /// `CompoundError::TypeMismatch` when the stored value is not a rate.
    pub fn get_rate(&self, name: &str) -> CompoundResult<Rate> {
        match self.require(name)? {
            ArgValue::Rate(rate) => Ok(*rate),
            other => Err(CompoundError::type_mismatch(name, ArgKind::Rate, other.kind())),
        }
    }

    /// Returns the integer stored under the given name.
    ///
    /// # Errors
    ///
    /// Returns `CompoundError::MissingArgument` when the name is absent and
    /// `CompoundError::TypeMismatch` when the stored value is not an integer.
    pub fn get_integer(&self, name: &str) -> CompoundResult<i64> {
        match self.require(name)? {
            ArgValue::Integer(value) => Ok(*value),
            other => Err(CompoundError::type_mismatch(
                name,
                ArgKind::Integer,
                other.kind(),
            )),
        }
    }

    /// Returns the decimal stored under the given name.
    ///
    /// # Errors
    ///
    /// Returns `CompoundError::MissingArgument` when the name is absent and
    /// `CompoundError::TypeMismatch` when the stored value is not a decimal.
    pub fn get_decimal(&self, name: &str) -> CompoundResult<Decimal> {
        match self.require(name)? {
            ArgValue::Decimal(value) => Ok(*value),
            other => Err(CompoundError::type_mismatch(
                name,
                ArgKind::Decimal,
                other.kind(),
            )),
        }
    }

    /// Returns the monetary amount stored under the given name.
    ///
    /// # Errors
    ///
    /// Returns `CompoundError::MissingArgument` when the name is absent and
    /// `CompoundError::TypeMismatch` when the stored value is not monetary.
    pub fn get_money(&self, name: &str) -> CompoundResult<Money> {
        match self.require(name)? {
            ArgValue::Money(amount) => Ok(*amount),
            other => Err(CompoundError::type_mismatch(
                name,
                ArgKind::Money,
                other.kind(),
            )),
        }
    }

    /// Returns the number of stored argument values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no argument values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn require(&self, name: &str) -> CompoundResult<&ArgValue> {
        self.values
            .get(name)
            .ok_or_else(|| CompoundError::missing_argument(name))
    }
}

impl fmt::Display for CompoundValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.compound_type.key())?;
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// Builder for [`CompoundValue`].
///
/// Accumulates name/value pairs and validates the whole bundle against the
/// descriptor in [`build`](CompoundValueBuilder::build).
#[derive(Debug, Clone)]
pub struct CompoundValueBuilder {
    compound_type: CompoundType,
    values: BTreeMap<String, ArgValue>,
}

impl CompoundValueBuilder {
    /// Supplies a value for the given argument name.
    ///
    /// Supplying the same name twice replaces the earlier value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Validates the accumulated pairs against the descriptor and finalizes
    /// the bundle.
    ///
    /// # Errors
    ///
    /// - `CompoundError::UnknownArgument` when a supplied name is not
    ///   declared on the descriptor
    /// - `CompoundError::ArgumentTypeMismatch` when a supplied value's type
    ///   differs from the declared type
    /// - `CompoundError::RequiredArgumentMissing` when a required name has no
    ///   value
    pub fn build(self) -> CompoundResult<CompoundValue> {
        let key = self.compound_type.key();

        for (name, value) in &self.values {
            let spec = self
                .compound_type
                .arg(name)
                .ok_or_else(|| CompoundError::unknown_argument(key, name))?;
            if value.kind() != spec.kind() {
                return Err(CompoundError::argument_type_mismatch(
                    key,
                    name,
                    spec.kind(),
                    value.kind(),
                ));
            }
        }

        for (name, spec) in self.compound_type.args() {
            if spec.is_required() && !self.values.contains_key(name) {
                return Err(CompoundError::required_argument_missing(
                    key,
                    name,
                    spec.kind(),
                ));
            }
        }

        Ok(CompoundValue {
            compound_type: self.compound_type,
            values: self.values,
        })
    }
}
