//! # bdt-models
//!
//! Calibratable short-rate lattice models.
//!
//! The single model provided is [`BlackDermanToy`], which fits a recombining
//! binomial lattice to an input term structure of zero-coupon prices and
//! short-rate volatilities, one level at a time.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod black_derman_toy;

pub use black_derman_toy::BlackDermanToy;
