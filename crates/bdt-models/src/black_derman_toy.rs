//! Black–Derman–Toy short-rate lattice model.
//!
//! ```text
//! d ln(r) = θ(t) dt + σ(t) dW
//! ```
//!
//! A single-factor lognormal short-rate model, fitted to an input term
//! structure of zero-coupon prices and short-rate volatilities one lattice
//! level at a time. Within a level the rates are log-linearly spaced by the
//! level's volatility; the level's base rate is the one scalar unknown,
//! solved so that the lattice reprices the input bond for that maturity.

use bdt_core::{
    errors::{Error, Result},
    Price, Rate, Real, Volatility,
};
use bdt_lattice::{zero_bond_value_with_trial, ShortRateLattice};
use bdt_math::solvers1d::brent;
use bdt_termstructures::QuoteTermStructure;

/// Residual reported for an infeasible (negative) trial base rate.
///
/// Steers the solver back into the positive-rate region without raising an
/// error and without touching lattice state.
const NEGATIVE_RATE_PENALTY: Real = 1000.0;

/// Accuracy demanded of each level's base-rate solve.
const ACCURACY: Real = 1.0e-12;

/// Smallest upper bracket edge tried when the initial guess is tiny or
/// negative.
const MIN_BRACKET: Rate = 0.01;

/// Cap on the bracket-expansion doublings before a level is declared
/// uncalibratable.
const MAX_BRACKET_DOUBLINGS: u32 = 60;

/// Black–Derman–Toy model calibrated to a quote term structure.
///
/// `calibrate` builds the full recombining lattice; the model itself only
/// holds the validated quotes and their derived price targets.
#[derive(Debug, Clone)]
pub struct BlackDermanToy {
    quotes: QuoteTermStructure,
}

impl BlackDermanToy {
    /// Create a model over an already-validated quote term structure.
    pub fn new(quotes: QuoteTermStructure) -> Self {
        Self { quotes }
    }

    /// The input quotes the lattice is fitted to.
    pub fn quotes(&self) -> &QuoteTermStructure {
        &self.quotes
    }

    /// Build and calibrate the lattice, one level per quoted tenor.
    ///
    /// Level 0 is seeded directly from the one-period rate. Every later
    /// level `t` is solved against the input zero-coupon price for tenor
    /// `t + 1`, with the raw input rate at that tenor as the initial guess;
    /// the converged scalar is re-expanded through the log-linear spacing
    /// formula and committed exactly once.
    ///
    /// Fails with [`Error::CalibrationFailure`] carrying the failing level's
    /// index if any solve does not converge; no partial lattice is returned.
    pub fn calibrate(&self) -> Result<ShortRateLattice> {
        let mut lattice = ShortRateLattice::new();
        lattice.append_level(&[self.quotes.rate(1)])?;
        for t in 1..self.quotes.max_tenor() {
            let vol = self.quotes.vol(t + 1);
            let target = self.quotes.zero_coupon_price(t + 1);
            let guess = self.quotes.rate(t + 1);
            let base = solve_level(&lattice, t, guess, vol, target)?;
            lattice.append_level(&expand_rates(base, vol, t + 1))?;
        }
        Ok(lattice)
    }
}

/// Log-linear rate ladder for a level of `count` nodes:
/// `rate_i = base·exp((i − 1)·2·vol)`.
///
/// The base scalar sits one spacing step above the bottom node, so
/// `rates[1] == base` and `rates[i] / rates[0] == exp(2·vol·i)`.
pub fn expand_rates(base: Rate, vol: Volatility, count: usize) -> Vec<Rate> {
    (0..count)
        .map(|i| base * ((i as Real - 1.0) * 2.0 * vol).exp())
        .collect()
}

/// Signed calibration residual at a trial base rate:
/// `target − implied root value` of the trial ladder.
fn residual(lattice: &ShortRateLattice, trial: Rate, vol: Volatility, target: Price) -> Real {
    if trial < 0.0 {
        return NEGATIVE_RATE_PENALTY;
    }
    let ladder = expand_rates(trial, vol, lattice.depth() + 1);
    target - zero_bond_value_with_trial(lattice, &ladder)
}

/// Solve one level's base rate so the lattice root reprices `target`.
///
/// The residual is increasing in the base rate on `g ≥ 0` (higher short
/// rates discount harder), so the root is bracketed upward from zero and
/// handed to Brent. A bracket that never changes sign — an unreachable
/// target, for instance one above par — maps to `CalibrationFailure`, as
/// does an exhausted solver budget.
fn solve_level(
    lattice: &ShortRateLattice,
    level: usize,
    guess: Rate,
    vol: Volatility,
    target: Price,
) -> Result<Rate> {
    let f = |g: Rate| residual(lattice, g, vol, target);

    if f(0.0) > 0.0 {
        return Err(Error::CalibrationFailure { level });
    }
    let mut hi = guess.max(MIN_BRACKET);
    let mut doublings = 0;
    while f(hi) < 0.0 {
        hi *= 2.0;
        doublings += 1;
        if doublings > MAX_BRACKET_DOUBLINGS {
            return Err(Error::CalibrationFailure { level });
        }
    }

    brent(f, 0.0, hi, ACCURACY).map_err(|_| Error::CalibrationFailure { level })
}
