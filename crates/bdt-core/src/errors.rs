//! Error types for bdt-rs.
//!
//! A single `thiserror`-derived enum shared by every crate in the workspace.
//! The `ensure!` and `fail!` macros cover the common precondition-check and
//! bail-out patterns.

use thiserror::Error;

/// The top-level error type used throughout bdt-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// The input term structure is structurally unusable: a missing tenor,
    /// a rate at or below −100 %, or a non-positive volatility.
    ///
    /// Raised at construction time, before any lattice work begins.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The per-level solve did not converge.
    ///
    /// The build aborts at the failing level; no partial lattice is returned.
    #[error("calibration failed at level {level}")]
    CalibrationFailure {
        /// Time index of the lattice level whose solve failed.
        level: usize,
    },
}

/// Shorthand `Result` type used throughout bdt-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if the condition is false.
///
/// # Example
/// ```
/// use bdt_core::ensure;
/// fn positive(x: f64) -> bdt_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use bdt_core::fail;
/// fn always_err() -> bdt_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
