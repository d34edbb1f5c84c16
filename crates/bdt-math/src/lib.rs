//! # bdt-math
//!
//! Numerical utilities for bdt-rs: 1-D root-finding solvers with bounded
//! iteration budgets, used by the per-level lattice calibration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// 1D root-finding solvers.
pub mod solvers1d;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use solvers1d::{bisection, brent, secant};
