//! # bdt-termstructures
//!
//! The input side of the lattice calibration: a validated term structure of
//! (zero rate, volatility) quotes on a contiguous integer tenor grid, plus
//! the zero-coupon bond arithmetic that turns quoted rates into the price
//! targets the calibrator reproduces.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The quote term structure supplied by the market-data collaborator.
pub mod quotes;

/// Zero-coupon bond arithmetic under annual compounding.
pub mod zero_coupon;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use quotes::{QuoteTermStructure, RateVolQuote};
pub use zero_coupon::{discount_factor, zero_coupon_price, FACE_VALUE};
