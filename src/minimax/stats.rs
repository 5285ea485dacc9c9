//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes in the built tree.
    pub tree_nodes: u32,

    /// Nodes the value recursion entered.
    pub nodes_visited: u32,

    /// Leaves whose score was read.
    pub leaves_evaluated: u32,

    /// Alpha or beta cutoffs taken.
    pub cutoffs: u32,

    /// Time spent building and searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of the built tree the search had to look at.
    #[must_use]
    pub fn visit_ratio(&self) -> f64 {
        if self.tree_nodes == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / self.tree_nodes as f64
        }
    }
}
