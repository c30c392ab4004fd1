//! Security valuation and per-share formulas.

mod per_share;
mod zero_coupon;

pub use per_share::{BookValuePerShare, DividendsPerShare, EarningsPerShare};
pub use zero_coupon::ZeroCouponBondValue;
