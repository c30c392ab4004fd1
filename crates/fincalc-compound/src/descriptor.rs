//! Compound type descriptors.
//!
//! A [`CompoundType`] declares the named, typed arguments a formula requires
//! as input. Descriptors are built once per formula type, shared as
//! process-wide constants, and compared structurally when a bundle is
//! dispatched to a function.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The type tag of a compound argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgKind {
    /// An interest or discount rate ([`fincalc_core::types::Rate`]).
    Rate,
    /// A signed integer (periods, share counts).
    Integer,
    /// A plain high-precision decimal.
    Decimal,
    /// A currency-tagged monetary amount ([`fincalc_core::types::Money`]).
    Money,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArgKind::Rate => "Rate",
            ArgKind::Integer => "Integer",
            ArgKind::Decimal => "Decimal",
            ArgKind::Money => "Money",
        };
        write!(f, "{s}")
    }
}

/// The declaration of a single named argument: its type and whether it is
/// required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgSpec {
    /// Expected value type.
    kind: ArgKind,
    /// Whether a value must be supplied.
    required: bool,
}

impl ArgSpec {
    /// Returns the expected value type.
    #[must_use]
    pub fn kind(&self) -> ArgKind {
        self.kind
    }

    /// Returns true if a value must be supplied for this argument.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// An immutable descriptor of the named, typed arguments a function requires.
///
/// Equality is structural: two descriptors are equal iff their identifying
/// key and their full set of named, typed declarations match exactly.
/// Declaration order is irrelevant (the arguments are kept in an ordered
/// map); names are case-sensitive.
///
/// # Example
///
/// ```rust
/// use fincalc_compound::descriptor::{ArgKind, CompoundType};
///
/// let descriptor = CompoundType::builder("FutureValue")
///     .required("rate", ArgKind::Rate)
///     .required("periods", ArgKind::Integer)
///     .required("amount", ArgKind::Money)
///     .build();
///
/// assert_eq!(descriptor.key(), "FutureValue");
/// assert_eq!(descriptor.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundType {
    /// Identifying key, derived from the owning formula.
    key: String,
    /// Argument name -> declaration. Ordered for structural equality.
    args: BTreeMap<String, ArgSpec>,
}

impl CompoundType {
    /// Creates a new builder with the given identifying key.
    #[must_use]
    pub fn builder(key: impl Into<String>) -> CompoundTypeBuilder {
        CompoundTypeBuilder {
            key: key.into(),
            args: BTreeMap::new(),
        }
    }

    /// Returns the identifying key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the declaration for the given argument name.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&ArgSpec> {
        self.args.get(name)
    }

    /// Iterates over the declared arguments in name order.
    pub fn args(&self) -> impl Iterator<Item = (&str, &ArgSpec)> {
        self.args.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Returns the number of declared arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns true if no arguments are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl fmt::Display for CompoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        for (i, (name, spec)) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let marker = if spec.required { "" } else { "?" };
            write!(f, "{name}{marker}: {}", spec.kind)?;
        }
        write!(f, ")")
    }
}

/// Builder for [`CompoundType`].
///
/// Declaring the same name twice replaces the earlier declaration, so names
/// are unique in the finished descriptor by construction and `build` cannot
/// fail.
#[derive(Debug, Clone)]
pub struct CompoundTypeBuilder {
    key: String,
    args: BTreeMap<String, ArgSpec>,
}

impl CompoundTypeBuilder {
    /// Declares a required argument.
    #[must_use]
    pub fn required(mut self, name: impl Into<String>, kind: ArgKind) -> Self {
        self.args.insert(
            name.into(),
            ArgSpec {
                kind,
                required: true,
            },
        );
        self
    }

    /// Declares an optional argument.
    #[must_use]
    pub fn optional(mut self, name: impl Into<String>, kind: ArgKind) -> Self {
        self.args.insert(
            name.into(),
            ArgSpec {
                kind,
                required: false,
            },
        );
        self
    }

    /// Finalizes the declarations into an immutable descriptor.
    #[must_use]
    pub fn build(self) -> CompoundType {
        CompoundType {
            key: self.key,
            args: self.args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn future_value_type() -> CompoundType {
        CompoundType::builder("FutureValue")
            .required("rate", ArgKind::Rate)
            .required("periods", ArgKind::Integer)
            .required("amount", ArgKind::Money)
            .build()
    }

    #[test]
    fn test_builder() {
        let descriptor = future_value_type();
        assert_eq!(descriptor.key(), "FutureValue");
        assert_eq!(descriptor.len(), 3);
        assert!(!descriptor.is_empty());

        let rate = descriptor.arg("rate").unwrap();
        assert_eq!(rate.kind(), ArgKind::Rate);
        assert!(rate.is_required());
    }

    #[test]
    fn test_optional_argument() {
        let descriptor = CompoundType::builder("Test")
            .required("amount", ArgKind::Money)
            .optional("reference", ArgKind::Decimal)
            .build();

        assert!(!descriptor.arg("reference").unwrap().is_required());
        assert!(descriptor.arg("amount").unwrap().is_required());
    }

    #[test]
    fn test_equality_ignores_declaration_order() {
        let a = CompoundType::builder("FutureValue")
            .required("rate", ArgKind::Rate)
            .required("periods", ArgKind::Integer)
            .build();
        let b = CompoundType::builder("FutureValue")
            .required("periods", ArgKind::Integer)
            .required("rate", ArgKind::Rate)
            .build();

        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_is_structural() {
        let a = future_value_type();
        let b = future_value_type();
        assert_eq!(a, b);

        // Different key
        let c = CompoundType::builder("PresentValue")
            .required("rate", ArgKind::Rate)
            .required("periods", ArgKind::Integer)
            .required("amount", ArgKind::Money)
            .build();
        assert_ne!(a, c);

        // Different argument type
        let d = CompoundType::builder("FutureValue")
            .required("rate", ArgKind::Decimal)
            .required("periods", ArgKind::Integer)
            .required("amount", ArgKind::Money)
            .build();
        assert_ne!(a, d);

        // Different required flag
        let e = CompoundType::builder("FutureValue")
            .optional("rate", ArgKind::Rate)
            .required("periods", ArgKind::Integer)
            .required("amount", ArgKind::Money)
            .build();
        assert_ne!(a, e);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let a = CompoundType::builder("Test").required("rate", ArgKind::Rate).build();
        let b = CompoundType::builder("Test").required("Rate", ArgKind::Rate).build();
        assert_ne!(a, b);
    }

    #[test]
    fn test_redeclaration_replaces() {
        let descriptor = CompoundType::builder("Test")
            .required("rate", ArgKind::Decimal)
            .required("rate", ArgKind::Rate)
            .build();

        assert_eq!(descriptor.len(), 1);
        assert_eq!(descriptor.arg("rate").unwrap().kind(), ArgKind::Rate);
    }

    #[test]
    fn test_display() {
        let descriptor = CompoundType::builder("Test")
            .required("amount", ArgKind::Money)
            .optional("reference", ArgKind::Decimal)
            .build();

        assert_eq!(
            format!("{}", descriptor),
            "Test(amount: Money, reference?: Decimal)"
        );
    }

    #[test]
    fn test_serde() {
        let descriptor = future_value_type();
        let json = serde_json::to_string(&descriptor).unwrap();
        let parsed: CompoundType = serde_json::from_str(&json).unwrap();
        assert_eq!(descriptor, parsed);
    }
}
