//! The recombining lattice data model.
//!
//! Each level owns its node array; parent→child links are indices into the
//! next level's array, never owning references, because an up-then-down and a
//! down-then-up move share their destination node.

use bdt_core::{ensure, errors::Result, Rate};

/// A single state in the recombining lattice.
///
/// `tenor` and `id` are fixed at creation; the rate is committed exactly once
/// (when the level is appended); the child indices are set once, when the
/// next level is appended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    tenor: usize,
    id: usize,
    rate: Rate,
    left: Option<usize>,
    right: Option<usize>,
}

impl Node {
    /// Time index of the level this node belongs to.
    pub fn tenor(&self) -> usize {
        self.tenor
    }

    /// Position within the level; 0 is the lowest rate.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The committed short rate at this node.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Index of the down child in the next level, once that level exists.
    pub fn left(&self) -> Option<usize> {
        self.left
    }

    /// Index of the up child in the next level, once that level exists.
    pub fn right(&self) -> Option<usize> {
        self.right
    }
}

/// A recombining binomial lattice of short rates, built level by level.
///
/// Level `t` owns `t + 1` nodes with ids `0..=t`. Node `(t, i)`'s down child
/// is `(t+1, i)` and its up child is `(t+1, i+1)`, so interior nodes of a
/// level are shared between two parents.
///
/// The lattice is append-only: once a level is in, its rates are immutable
/// and only the construction of the next level reads them.
#[derive(Debug, Clone, Default)]
pub struct ShortRateLattice {
    levels: Vec<Vec<Node>>,
}

impl ShortRateLattice {
    /// An empty lattice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of levels currently built.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// The nodes of level `t`.
    ///
    /// # Panics
    /// Panics if `t >= depth()`.
    pub fn level(&self, t: usize) -> &[Node] {
        &self.levels[t]
    }

    /// All levels, shallowest first.
    pub fn levels(&self) -> &[Vec<Node>] {
        &self.levels
    }

    /// The node at `(tenor, id)`.
    ///
    /// # Panics
    /// Panics if the indices are out of range.
    pub fn node(&self, tenor: usize, id: usize) -> &Node {
        &self.levels[tenor][id]
    }

    /// Append the next level with its committed rates and link the previous
    /// level's nodes to their children.
    ///
    /// The new level's index is the current depth, so `rates` must hold
    /// `depth() + 1` entries.
    pub fn append_level(&mut self, rates: &[Rate]) -> Result<()> {
        let t = self.levels.len();
        ensure!(
            rates.len() == t + 1,
            "level {t} requires {} rates, got {}",
            t + 1,
            rates.len()
        );
        let nodes = rates
            .iter()
            .enumerate()
            .map(|(i, &rate)| Node {
                tenor: t,
                id: i,
                rate,
                left: None,
                right: None,
            })
            .collect();
        if let Some(parents) = self.levels.last_mut() {
            for (i, parent) in parents.iter_mut().enumerate() {
                parent.left = Some(i);
                parent.right = Some(i + 1);
            }
        }
        self.levels.push(nodes);
        Ok(())
    }
}
