//! Search-tree node structures.
//!
//! Uses arena-based allocation with index references (NodeId) so a finished
//! tree can be handed to a renderer or serialized as one flat vector.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, GameState, Transition};

use super::heuristic::Score;

/// Index into the SearchTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the minimax tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchNode {
    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Full snapshot of the game at this node.
    pub state: GameState,

    /// Leaf: heuristic score. Internal: minimax value once solved.
    /// Stays `None` for internal nodes the search pruned away.
    pub value: Option<Score>,

    /// Children in construction order.
    pub children: SmallVec<[NodeId; 8]>,

    /// The transition that produced this node (None for root).
    pub action: Option<Transition>,

    /// The literal candidate passed to `update` to get here.
    /// `None` for the root and for draw-and-pass children.
    pub card: Option<Card>,

    /// Index into `children` of the first child with the extremal value.
    pub best_child: Option<usize>,

    /// `card` of the best child: the move this node would make.
    pub best_card: Option<Card>,

    /// Set on the root and along recorded best children.
    pub on_path: bool,
}

impl SearchNode {
    pub fn root(state: GameState) -> Self {
        Self::new(NodeId::NONE, 0, state, None, None)
    }

    pub fn new(
        parent: NodeId,
        depth: u16,
        state: GameState,
        action: Option<Transition>,
        card: Option<Card>,
    ) -> Self {
        Self {
            parent,
            depth,
            state,
            value: None,
            children: SmallVec::new(),
            action,
            card,
            best_child: None,
            best_card: None,
            on_path: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Edge label for the inbound action; empty for the root.
    #[must_use]
    pub fn label(&self) -> String {
        self.action.map(|a| a.to_string()).unwrap_or_default()
    }

    /// State text plus value, as shown in a rendered tree.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.value {
            Some(value) => format!("{}\nValue: {}", self.state, value),
            None => format!("{}\nValue: None", self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Rank};

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.raw(), 5);
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_node_root() {
        let node = SearchNode::root(GameState::from_seed(1));

        assert!(node.parent.is_none());
        assert_eq!(node.depth, 0);
        assert!(node.is_leaf());
        assert_eq!(node.value, None);
        assert_eq!(node.label(), "");
    }

    #[test]
    fn test_label_and_summary() {
        let card = Card::new(Color::Blue, Rank::Skip);
        let mut node = SearchNode::new(
            NodeId::new(0),
            1,
            GameState::from_seed(1),
            Some(Transition::Played(card)),
            Some(card),
        );

        assert_eq!(node.label(), "Play card: BLUE-SKIP");
        assert!(node.summary().ends_with("Value: None"));

        node.value = Some(-3);
        assert!(node.summary().ends_with("Value: -3"));
        assert!(node.summary().starts_with("Player 1: "));
    }
}
