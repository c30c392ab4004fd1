//! # Fincalc Core
//!
//! Core types and abstractions for the Fincalc financial formula library.
//!
//! This crate provides the foundational building blocks used throughout
//! Fincalc:
//!
//! - **Types**: Domain-specific types like `Money`, `Rate`, `RateAndPeriods`,
//!   `Currency`
//! - **Traits**: The `MonetaryOperator` capability implemented by formulas
//!   that map one monetary amount to another
//! - **Errors**: Structured error types for monetary arithmetic
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Checked Arithmetic**: Cross-currency operations and zero divisors are
//!   errors, never silent defaults
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! // Create domain types with compile-time safety
//! let amount = Money::new(dec!(1000), Currency::USD);
//! let rate = Rate::new(dec!(0.05)).unwrap();
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
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod error;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::traits::MonetaryOperator;
    pub use crate::types::{Currency, Money, Rate, RateAndPeriods};
}

// Re-export commonly used types at crate root
pub use error::{CalcError, CalcResult};
pub use traits::MonetaryOperator;
pub use types::{Currency, Money, Rate, RateAndPeriods};
