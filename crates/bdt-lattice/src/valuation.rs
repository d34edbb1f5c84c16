//! Backward-induction valuation of unit-face zero-coupon bonds.
//!
//! All valuations are pure reads of committed lattice state (plus, for the
//! calibrator, a candidate rate ladder passed in by value). The recombining
//! structure makes an iterative backward sweep the natural algorithm: one
//! `Vec` of working values rolled from the maturity level to the root, O(t²)
//! work for a depth-t valuation and no recursion-depth limits.

use bdt_core::{Price, Rate, Real};
use bdt_termstructures::{discount_factor, FACE_VALUE};

use crate::lattice::ShortRateLattice;

/// Symmetric branch probability of the binomial model.
const PROB: Real = 0.5;

/// Time-0 value of the unit-face zero-coupon bond maturing one period after
/// `level`, i.e. at tenor `level + 1`.
///
/// Nodes of `level` carry the final discounting period: their value is
/// `100·(1+rate)^(−1)`, rolled back through levels `level−1..=0`.
///
/// # Panics
/// Panics if `level >= lattice.depth()`.
pub fn zero_bond_value(lattice: &ShortRateLattice, level: usize) -> Price {
    sweep(lattice, 0, 0, level)
}

/// Value of the subtree rooted at node `(tenor, id)`, maturing one period
/// after the lattice's deepest level.
///
/// # Panics
/// Panics if the lattice is empty or the node indices are out of range.
pub fn value_at(lattice: &ShortRateLattice, tenor: usize, id: usize) -> Price {
    sweep(lattice, tenor, id, lattice.depth() - 1)
}

/// Root value with `trial_rates` standing in as the next (deepest) level.
///
/// This is the calibrator's objective: the candidate ladder is priced as the
/// terminal level of a lattice one level deeper than the committed one, and
/// nothing is written back. `trial_rates` must hold `depth() + 1` entries.
pub fn zero_bond_value_with_trial(lattice: &ShortRateLattice, trial_rates: &[Rate]) -> Price {
    debug_assert_eq!(trial_rates.len(), lattice.depth() + 1);
    let mut values: Vec<Price> = trial_rates
        .iter()
        .map(|&rate| FACE_VALUE * discount_factor(rate, 1))
        .collect();
    for t in (0..lattice.depth()).rev() {
        roll_back_level(lattice, t, 0, &mut values);
    }
    values[0]
}

/// Backward sweep over the trapezoid of nodes reachable from `(tenor, id)`,
/// with maturity one period after `horizon`.
fn sweep(lattice: &ShortRateLattice, tenor: usize, id: usize, horizon: usize) -> Price {
    let mut values: Vec<Price> = lattice.level(horizon)[id..=id + (horizon - tenor)]
        .iter()
        .map(|node| FACE_VALUE * discount_factor(node.rate(), 1))
        .collect();
    for t in (tenor..horizon).rev() {
        roll_back_level(lattice, t, id, &mut values);
    }
    values[0]
}

/// One backward-induction step: replace the working values (children of level
/// `t`, offset by `id`) with the values at level `t`'s nodes.
fn roll_back_level(lattice: &ShortRateLattice, t: usize, id: usize, values: &mut Vec<Price>) {
    let nodes = &lattice.level(t)[id..];
    let count = values.len() - 1;
    for (j, node) in nodes.iter().enumerate().take(count) {
        let df = discount_factor(node.rate(), 1);
        values[j] = df * (PROB * values[j] + (1.0 - PROB) * values[j + 1]);
    }
    values.truncate(count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// One level, one node: the bond is a single discounting period.
    #[test]
    fn single_node_discounts_once() {
        let mut lattice = ShortRateLattice::new();
        lattice.append_level(&[0.10]).unwrap();
        assert_abs_diff_eq!(
            zero_bond_value(&lattice, 0),
            100.0 / 1.1,
            epsilon = 1e-12
        );
    }

    /// Two levels priced by hand against the recurrence.
    #[test]
    fn two_level_value_matches_hand_rolled_recurrence() {
        let mut lattice = ShortRateLattice::new();
        lattice.append_level(&[0.10]).unwrap();
        lattice.append_level(&[0.0979, 0.1432]).unwrap();

        let down = 100.0 / 1.0979;
        let up = 100.0 / 1.1432;
        let expected = (0.5 * down + 0.5 * up) / 1.10;
        assert_abs_diff_eq!(zero_bond_value(&lattice, 1), expected, epsilon = 1e-12);
    }

    /// Terminal nodes of the deepest level value to a single discount.
    #[test]
    fn value_at_terminal_node() {
        let mut lattice = ShortRateLattice::new();
        lattice.append_level(&[0.10]).unwrap();
        lattice.append_level(&[0.09, 0.14]).unwrap();
        assert_abs_diff_eq!(value_at(&lattice, 1, 1), 100.0 / 1.14, epsilon = 1e-12);
    }

    /// `value_at` on the root equals `zero_bond_value` at the horizon.
    #[test]
    fn root_value_equals_deepest_zero_bond_value() {
        let mut lattice = ShortRateLattice::new();
        lattice.append_level(&[0.10]).unwrap();
        lattice.append_level(&[0.09, 0.14]).unwrap();
        lattice.append_level(&[0.08, 0.12, 0.18]).unwrap();
        assert_abs_diff_eq!(
            value_at(&lattice, 0, 0),
            zero_bond_value(&lattice, 2),
            epsilon = 1e-12
        );
    }

    /// Pricing a trial ladder equals pricing the same ladder once committed.
    #[test]
    fn trial_valuation_matches_committed_valuation() {
        let mut lattice = ShortRateLattice::new();
        lattice.append_level(&[0.10]).unwrap();
        let trial = [0.0979, 0.1432];

        let trial_value = zero_bond_value_with_trial(&lattice, &trial);

        lattice.append_level(&trial).unwrap();
        assert_abs_diff_eq!(
            trial_value,
            zero_bond_value(&lattice, 1),
            epsilon = 1e-12
        );
    }

    /// The trial valuation leaves the lattice untouched.
    #[test]
    fn trial_valuation_is_pure() {
        let mut lattice = ShortRateLattice::new();
        lattice.append_level(&[0.10]).unwrap();
        let before = lattice.clone();
        let _ = zero_bond_value_with_trial(&lattice, &[0.05, 0.25]);
        assert_eq!(lattice.level(0), before.level(0));
        assert_eq!(lattice.depth(), before.depth());
    }

    /// Flat lattice at rate r reprices the closed-form curve at every level.
    #[test]
    fn flat_lattice_reprices_flat_curve() {
        let r = 0.07;
        let mut lattice = ShortRateLattice::new();
        for t in 0..6 {
            lattice.append_level(&vec![r; t + 1]).unwrap();
        }
        for t in 0..6 {
            let expected = 100.0 * (1.0 + r).powi(-(t as i32 + 1));
            assert_abs_diff_eq!(zero_bond_value(&lattice, t), expected, epsilon = 1e-10);
        }
    }
}
