//! Zero-coupon bond arithmetic under annual compounding.

use bdt_core::{DiscountFactor, Price, Rate};

/// Face value of the unit bond priced on the lattice.
pub const FACE_VALUE: Price = 100.0;

/// Discount factor over `periods` whole years: `(1+rate)^(−periods)`.
#[inline]
pub fn discount_factor(rate: Rate, periods: usize) -> DiscountFactor {
    (1.0 + rate).powi(-(periods as i32))
}

/// Time-0 price of a unit-face zero-coupon bond maturing at `tenor`:
/// `100·(1+zero_rate)^(−tenor)`.
#[inline]
pub fn zero_coupon_price(zero_rate: Rate, tenor: usize) -> Price {
    FACE_VALUE * discount_factor(zero_rate, tenor)
}
