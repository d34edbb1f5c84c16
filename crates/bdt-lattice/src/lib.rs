//! # bdt-lattice
//!
//! The recombining binomial short-rate lattice and its backward-induction
//! valuation.
//!
//! # Overview
//!
//! * [`ShortRateLattice`] / [`Node`] — the level-owned, index-addressed
//!   lattice data model
//! * [`zero_bond_value`] / [`value_at`] — backward-induction pricing of
//!   unit-face zero-coupon bonds on the committed lattice
//! * [`zero_bond_value_with_trial`] — the calibrator's objective: prices a
//!   candidate rate ladder as if it were the next level, without touching
//!   committed state

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod lattice;
pub mod valuation;

pub use lattice::{Node, ShortRateLattice};
pub use valuation::{value_at, zero_bond_value, zero_bond_value_with_trial};
