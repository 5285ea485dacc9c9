//! Arena-based minimax tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references. The tree owns
//! every node outright and is dropped as a unit once a move is chosen.

use serde::{Deserialize, Serialize};

use super::node::{NodeId, SearchNode};
use crate::core::{Card, GameState, Result, Transition};

/// Arena-based minimax tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchTree {
    /// All nodes in the tree, in allocation (breadth-first) order.
    nodes: Vec<SearchNode>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl SearchTree {
    /// Create a tree holding only `state` as its root.
    pub fn new(state: GameState) -> Self {
        let mut nodes = Vec::with_capacity(256);
        nodes.push(SearchNode::root(state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0 as usize]
    }

    #[must_use]
    pub fn root_node(&self) -> &SearchNode {
        self.get(self.root)
    }

    /// Allocate a child of `parent`, appended after its existing children.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        state: GameState,
        action: Transition,
        card: Option<Card>,
    ) -> NodeId {
        let depth = self.get(parent).depth + 1;
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes
            .push(SearchNode::new(parent, depth, state, Some(action), card));
        self.get_mut(parent).children.push(id);
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// IDs of childless nodes.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().filter(|(_, n)| n.is_leaf()).map(|(id, _)| id)
    }

    /// Follow recorded best children from the root.
    ///
    /// Stops at a leaf or at a node the search never solved.
    pub fn optimal_path(&self) -> Vec<NodeId> {
        let mut path = vec![self.root];
        let mut current = self.root_node();
        while let Some(idx) = current.best_child {
            let next = current.children[idx];
            path.push(next);
            current = self.get(next);
        }
        path
    }

    /// Flag the nodes of `optimal_path` for rendering.
    pub fn mark_optimal_path(&mut self) {
        for node in &mut self.nodes {
            node.on_path = false;
        }
        for id in self.optimal_path() {
            self.get_mut(id).on_path = true;
        }
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            node_count: self.nodes.len(),
            leaf_count: self.nodes.iter().filter(|n| n.is_leaf()).count(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            solved_count: self
                .nodes
                .iter()
                .filter(|n| !n.is_leaf() && n.value.is_some())
                .count(),
        }
    }

    /// Encode the whole tree with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a tree produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Statistics about a built tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Nodes without children.
    pub leaf_count: usize,

    /// Deepest node.
    pub max_depth: u16,

    /// Internal nodes with a value, i.e. fully searched without a cutoff.
    pub solved_count: usize,
}

impl TreeStats {
    /// Average children per internal node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let internal = self.node_count - self.leaf_count;
        if internal == 0 {
            0.0
        } else {
            (self.node_count - 1) as f64 / internal as f64
        }
    }
}
