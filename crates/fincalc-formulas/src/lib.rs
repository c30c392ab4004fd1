//! # Fincalc Formulas
//!
//! Financial formula calculators for the Fincalc library.
//!
//! This crate provides:
//!
//! - **Time value of money**: Future/present value, accumulation and
//!   discount factors, annuity payment and annuity factor formulas
//! - **Securities**: Zero coupon bond value and per-share ratios
//!
//! Every formula is a pure function of its inputs. Formulas that map a
//! single monetary amount implement
//! [`MonetaryOperator`](fincalc_core::traits::MonetaryOperator) (the simple
//! operator form); formulas over a named bundle of arguments implement
//! [`CompoundFunction`](fincalc_compound::function::CompoundFunction) (the
//! generic form).
//!
//! ## Example
//!
//! ```rust
//! use fincalc_formulas::prelude::*;
//! use fincalc_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! // How much will 1,000 USD be worth after 10 periods at 5%?
//! let fv = FutureValue::of(RateAndPeriods::from_fraction(dec!(0.05), 10).unwrap());
//! let result = fv.apply(Money::new(dec!(1000), Currency::USD)).unwrap();
//! assert!(result.amount() > dec!(1628));
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
pub mod securities;
pub mod tvm;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{FormulaError, FormulaResult};
    pub use crate::securities::{
        BookValuePerShare, DividendsPerShare, EarningsPerShare, ZeroCouponBondValue,
    };
    pub use crate::tvm::{
        AnnuityPaymentFv, AnnuityPaymentPv, FutureValue, FutureValueAnnuityFactor,
        FutureValueFactor, PresentValue, PresentValueAnnuityFactor, PresentValueFactor,
    };
    pub use fincalc_compound::prelude::*;
    pub use fincalc_core::traits::MonetaryOperator;
}

// Re-export commonly used types at crate root
pub use error::{FormulaError, FormulaResult};
