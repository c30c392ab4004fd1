//! # Fincalc Compound
//!
//! Typed named-argument bundles for the Fincalc financial formula library.
//!
//! Formulas with more than one input take their arguments as a named, typed
//! bundle that is validated before any arithmetic runs. This crate provides
//! the three pieces of that calling convention:
//!
//! - [`CompoundType`]: an immutable descriptor of the named, typed arguments
//!   a function requires
//! - [`CompoundValue`]: an immutable bundle of argument values, validated
//!   against a descriptor when it is built
//! - [`CompoundFunction`]: the contract implemented by each formula —
//!   expose the required descriptor and result kind, reject bundles built
//!   against a different descriptor, compute a result
//!
//! ## Example
//!
//! ```rust
//! use fincalc_compound::prelude::*;
//! use fincalc_core::types::{Currency, Money, Rate};
//! use rust_decimal_macros::dec;
//!
//! let descriptor = CompoundType::builder("FutureValue")
//!     .required("rate", ArgKind::Rate)
//!     .required("periods", ArgKind::Integer)
//!     .required("amount", ArgKind::Money)
//!     .build();
//!
//! let value = CompoundValue::builder(&descriptor)
//!     .with("rate", Rate::new(dec!(0.05)).unwrap())
//!     .with("periods", 10i64)
//!     .with("amount", Money::new(dec!(1000), Currency::USD))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(value.compound_type(), &descriptor);
//! assert_eq!(value.get_integer("periods").unwrap(), 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod descriptor;
pub mod error;
pub mod function;
pub mod value;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::descriptor::{ArgKind, ArgSpec, CompoundType, CompoundTypeBuilder};
    pub use crate::error::{CompoundError, CompoundResult};
    pub use crate::function::CompoundFunction;
    pub use crate::value::{ArgValue, CompoundValue, CompoundValueBuilder};
}

// Re-export commonly used types at crate root
pub use descriptor::{ArgKind, ArgSpec, CompoundType};
pub use error::{CompoundError, CompoundResult};
pub use function::CompoundFunction;
pub use value::{ArgValue, CompoundValue};
