//! 1D root-finding solvers.
//!
//! Every solver runs against a fixed iteration budget and a caller-supplied
//! absolute accuracy, so a residual that never settles surfaces as an error
//! instead of spinning. Callers that need a domain-specific failure (the
//! lattice calibrator, for one) map these errors onto their own.

use bdt_core::{
    errors::{Error, Result},
    Real,
};

/// Iteration budget shared by all solvers.
const MAX_ITERATIONS: u32 = 100;

/// Accuracy used when the caller passes a non-positive one.
const DEFAULT_ACCURACY: Real = 1.0e-11;

fn effective_accuracy(accuracy: Real) -> Real {
    if accuracy > 0.0 {
        accuracy
    } else {
        DEFAULT_ACCURACY
    }
}

// ── Brent ─────────────────────────────────────────────────────────────────────

/// Brent's method for finding a root of `f(x)` in `[x_min, x_max]`.
///
/// Combines bisection, secant, and inverse quadratic interpolation; the
/// bracket must straddle the root (`f(x_min)` and `f(x_max)` of opposite
/// sign). This is the workhorse behind the per-level calibration solve.
pub fn brent<F>(f: F, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let acc = effective_accuracy(accuracy);
    let mut a = x_min;
    let mut b = x_max;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa * fb > 0.0 {
        return Err(Error::Precondition(format!(
            "Brent: root not bracketed by [{a}, {b}]"
        )));
    }
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..MAX_ITERATIONS {
        // Keep b the best estimate, with c on the opposite side of the root.
        if (fb > 0.0) == (fc > 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * acc;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol || fb == 0.0 {
            return Ok(b);
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            // Interpolate: secant with two points, inverse quadratic with three.
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let accept_1 = 3.0 * xm * q - (tol * q).abs();
            let accept_2 = (e * q).abs();
            if 2.0 * p < accept_1.min(accept_2) {
                // Interpolation accepted.
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            // Interpolation is converging too slowly: bisect.
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol {
            d
        } else if xm >= 0.0 {
            tol
        } else {
            -tol
        };
        fb = f(b);
    }

    Err(Error::Runtime(
        "Brent solver: maximum iterations reached".into(),
    ))
}

// ── Bisection ────────────────────────────────────────────────────────────────

/// Simple bisection over a sign-changing bracket.
///
/// Slow but unconditionally convergent; useful as an independent cross-check
/// on a Brent result.
pub fn bisection<F>(f: F, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let acc = effective_accuracy(accuracy);
    let mut a = x_min;
    let mut b = x_max;
    let fa = f(a);
    let fb = f(b);

    if fa * fb > 0.0 {
        return Err(Error::Precondition(format!(
            "Bisection: root not bracketed by [{a}, {b}]"
        )));
    }
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }

    // Orient the bracket so f(a) < 0.
    if fa > 0.0 {
        std::mem::swap(&mut a, &mut b);
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = 0.5 * (a + b);
        let fm = f(mid);
        if fm == 0.0 || (b - a).abs() * 0.5 < acc {
            return Ok(mid);
        }
        if fm < 0.0 {
            a = mid;
        } else {
            b = mid;
        }
    }

    Err(Error::Runtime(
        "Bisection solver: maximum iterations reached".into(),
    ))
}

// ── Secant ────────────────────────────────────────────────────────────────────

/// Secant method from two starting points.
///
/// Does not require a sign change, so it can wander outside `[x_min, x_max]`;
/// the caller's residual must tolerate out-of-range trials.
pub fn secant<F>(f: F, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let acc = effective_accuracy(accuracy);
    let mut x0 = x_min;
    let mut x1 = x_max;
    let mut f0 = f(x0);
    let mut f1 = f(x1);

    if f0.abs() < acc {
        return Ok(x0);
    }
    if f1.abs() < acc {
        return Ok(x1);
    }

    for _ in 0..MAX_ITERATIONS {
        let denom = f1 - f0;
        if denom.abs() < f64::EPSILON {
            return Err(Error::Runtime(
                "Secant: flat residual (f(x0) ≈ f(x1))".into(),
            ));
        }
        let x2 = x1 - f1 * (x1 - x0) / denom;
        let f2 = f(x2);

        if f2.abs() < acc || (x2 - x1).abs() < acc {
            return Ok(x2);
        }

        x0 = x1;
        f0 = f1;
        x1 = x2;
        f1 = f2;
    }

    Err(Error::Runtime(
        "Secant solver: maximum iterations reached".into(),
    ))
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Annual-compounding discount residual: (1+r)^(-n) − target.
    fn discount_residual(n: i32, target: Real) -> impl Fn(Real) -> Real {
        move |r| (1.0 + r).powi(-n) - target
    }

    #[test]
    fn brent_recovers_yield_from_discount_factor() {
        // (1+r)^(-5) = 0.7  =>  r = 0.7^(-1/5) − 1
        let expected = 0.7_f64.powf(-0.2) - 1.0;
        let root = brent(discount_residual(5, 0.7), 0.0, 1.0, 1e-12).unwrap();
        assert!((root - expected).abs() < 1e-10, "got {root}");
    }

    #[test]
    fn bisection_recovers_yield_from_discount_factor() {
        let expected = 0.7_f64.powf(-0.2) - 1.0;
        let root = bisection(discount_residual(5, 0.7), 0.0, 1.0, 1e-12).unwrap();
        assert!((root - expected).abs() < 1e-9, "got {root}");
    }

    #[test]
    fn secant_recovers_yield_from_discount_factor() {
        let expected = 0.7_f64.powf(-0.2) - 1.0;
        let root = secant(discount_residual(5, 0.7), 0.01, 0.2, 1e-12).unwrap();
        assert!((root - expected).abs() < 1e-10, "got {root}");
    }

    #[test]
    fn brent_requires_a_sign_change() {
        assert!(brent(|x| x * x + 1.0, -1.0, 1.0, 1e-10).is_err());
    }

    #[test]
    fn bisection_requires_a_sign_change() {
        assert!(bisection(|x| x * x + 1.0, -1.0, 1.0, 1e-10).is_err());
    }

    #[test]
    fn brent_accepts_root_at_bracket_edge() {
        let root = brent(|x| x, 0.0, 1.0, 1e-12).unwrap();
        assert_eq!(root, 0.0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // The calibration residual is a monotone discount-style curve;
            // Brent must recover the known root across the quote range.
            #[test]
            fn brent_inverts_discount_factors(
                n in 1..30i32,
                target in 0.2..0.99f64,
            ) {
                let expected = target.powf(-1.0 / n as f64) - 1.0;
                let root = brent(discount_residual(n, target), 0.0, 10.0, 1e-12).unwrap();
                prop_assert!((root - expected).abs() < 1e-8);
            }

            #[test]
            fn bisection_inverts_discount_factors(
                n in 1..30i32,
                target in 0.2..0.99f64,
            ) {
                let expected = target.powf(-1.0 / n as f64) - 1.0;
                let root = bisection(discount_residual(n, target), 0.0, 10.0, 1e-10).unwrap();
                prop_assert!((root - expected).abs() < 1e-7);
            }
        }
    }
}
