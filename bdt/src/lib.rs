//! # bdt
//!
//! A Black–Derman–Toy short-rate lattice calibration library.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bdt-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bdt = "0.1"
//! ```
//!
//! ```rust
//! use bdt::models::BlackDermanToy;
//! use bdt::termstructures::{QuoteTermStructure, RateVolQuote};
//!
//! let quotes = QuoteTermStructure::new(vec![
//!     RateVolQuote { rate: 0.10, vol: 0.20 },
//!     RateVolQuote { rate: 0.11, vol: 0.19 },
//! ])
//! .unwrap();
//!
//! let lattice = BlackDermanToy::new(quotes).calibrate().unwrap();
//! assert_eq!(lattice.depth(), 2);
//! assert_eq!(lattice.level(1).len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use bdt_core as core;

/// 1-D root-finding solvers.
pub use bdt_math as math;

/// Input quote term structures and zero-coupon arithmetic.
pub use bdt_termstructures as termstructures;

/// The recombining lattice and backward-induction valuation.
pub use bdt_lattice as lattice;

/// Calibratable short-rate lattice models.
pub use bdt_models as models;
