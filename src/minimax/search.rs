//! Minimax value recursion with optional alpha-beta pruning.
//!
//! Max and min levels share one recursive function keyed by `maximizing`.
//! Children are visited in construction order and ties go to the first
//! child reaching the extremal value, so results are stable run to run.
//!
//! A node whose scan is cut short returns the cutting child's value and
//! label without recording anything; fully scanned nodes record their
//! value, best child, and the card that realizes it. The root is never cut
//! (its window is unbounded), so its recorded card is always the move.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, Transition};

use super::heuristic::Score;
use super::node::NodeId;
use super::stats::SearchStats;
use super::tree::SearchTree;

/// Result of searching a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Minimax value of the root.
    pub value: Score,

    /// Label returned by the recursion (the root's best child, or the
    /// root's own inbound action if it is a leaf).
    pub action: Option<Transition>,

    /// The card recorded on the root; this is the move to make.
    pub card: Option<Card>,
}

impl SearchOutcome {
    #[must_use]
    pub fn label(&self) -> String {
        self.action.map(|a| a.to_string()).unwrap_or_default()
    }
}

/// Value search over a built tree.
#[derive(Clone, Debug, Default)]
pub struct AlphaBeta {
    stats: SearchStats,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search with alpha-beta pruning from `(-inf, +inf)`.
    pub fn search(&mut self, tree: &mut SearchTree) -> SearchOutcome {
        self.run(tree, true)
    }

    /// Plain minimax: every node is visited and solved.
    pub fn exhaustive(&mut self, tree: &mut SearchTree) -> SearchOutcome {
        self.run(tree, false)
    }

    fn run(&mut self, tree: &mut SearchTree, prune: bool) -> SearchOutcome {
        self.stats.reset();
        self.stats.tree_nodes = tree.len() as u32;

        let root = tree.root();
        let (value, action) = self.value(tree, root, Score::MIN, Score::MAX, true, prune);

        SearchOutcome {
            value,
            action,
            card: tree.root_node().best_card,
        }
    }

    fn value(
        &mut self,
        tree: &mut SearchTree,
        id: NodeId,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        prune: bool,
    ) -> (Score, Option<Transition>) {
        self.stats.nodes_visited += 1;

        let node = tree.get(id);
        if node.is_leaf() {
            self.stats.leaves_evaluated += 1;
            let value = node.value.expect("leaves are scored when the tree is built");
            return (value, node.action);
        }

        let children = node.children.clone();
        let mut values: SmallVec<[Score; 8]> = SmallVec::with_capacity(children.len());

        for &child in &children {
            let (v, _) = self.value(tree, child, alpha, beta, !maximizing, prune);
            values.push(v);

            if maximizing {
                if prune && v >= beta {
                    self.stats.cutoffs += 1;
                    return (v, tree.get(child).action);
                }
                alpha = alpha.max(v);
            } else {
                if prune && v <= alpha {
                    self.stats.cutoffs += 1;
                    return (v, tree.get(child).action);
                }
                beta = beta.min(v);
            }
        }

        let best = first_extremum(&values, maximizing);
        let chosen = tree.get(children[best]);
        let (card, action) = (chosen.card, chosen.action);

        let node = tree.get_mut(id);
        node.value = Some(values[best]);
        node.best_child = Some(best);
        node.best_card = card;

        (values[best], action)
    }

    /// Get search statistics of the last run.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Index of the first maximum (or minimum) value.
fn first_extremum(values: &[Score], maximizing: bool) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        let better = if maximizing { v > values[best] } else { v < values[best] };
        if better {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, GameState, Rank};

    fn card(n: u8) -> Card {
        Card::new(Color::Red, Rank::Number(n))
    }

    /// Root with one child per slice; each child holds the given leaves.
    /// An empty slice makes the child itself a leaf valued `leaf_value`.
    fn two_level(groups: &[&[Score]]) -> SearchTree {
        let state = GameState::from_seed(1);
        let mut tree = SearchTree::new(state.clone());
        let root = tree.root();
        for (i, leaves) in groups.iter().enumerate() {
            let c = card(i as u8);
            let child = tree.add_child(root, state.clone(), Transition::Played(c), Some(c));
            for (j, &value) in leaves.iter().enumerate() {
                let leaf_card = Card::new(Color::Blue, Rank::Number(j as u8));
                let leaf = tree.add_child(
                    child,
                    state.clone(),
                    Transition::Played(leaf_card),
                    Some(leaf_card),
                );
                tree.get_mut(leaf).value = Some(value);
            }
        }
        tree
    }

    fn one_level(values: &[Score]) -> SearchTree {
        let state = GameState::from_seed(1);
        let mut tree = SearchTree::new(state.clone());
        let root = tree.root();
        for (i, &value) in values.iter().enumerate() {
            let c = card(i as u8);
            let child = tree.add_child(root, state.clone(), Transition::Played(c), Some(c));
            tree.get_mut(child).value = Some(value);
        }
        tree
    }

    #[test]
    fn test_first_extremum() {
        assert_eq!(first_extremum(&[1, 5, 5, 2], true), 1);
        assert_eq!(first_extremum(&[4, 1, 1], false), 1);
        assert_eq!(first_extremum(&[3], true), 0);
    }

    #[test]
    fn test_max_prefers_first_of_tied_children() {
        let mut tree = one_level(&[3, 5, 5]);

        let outcome = AlphaBeta::new().search(&mut tree);

        assert_eq!(outcome.value, 5);
        assert_eq!(outcome.card, Some(card(1)));
        assert_eq!(outcome.action, Some(Transition::Played(card(1))));
        assert_eq!(tree.root_node().best_child, Some(1));
        assert_eq!(tree.root_node().value, Some(5));
    }

    #[test]
    fn test_min_level_prefers_first_of_tied_children() {
        let mut tree = two_level(&[&[4, 1, 1]]);

        AlphaBeta::new().search(&mut tree);

        let min_node = tree.get(tree.root_node().children[0]);
        assert_eq!(min_node.value, Some(1));
        assert_eq!(min_node.best_child, Some(1));
        assert_eq!(min_node.best_card, Some(Card::new(Color::Blue, Rank::Number(1))));
    }

    #[test]
    fn test_textbook_pruning() {
        let mut tree = two_level(&[&[3, 12, 8], &[2, 4, 6], &[14, 5, 2]]);
        let mut search = AlphaBeta::new();

        let outcome = search.search(&mut tree);

        assert_eq!(outcome.value, 3);
        assert_eq!(outcome.card, Some(card(0)));
        assert_eq!(outcome.label(), "Play card: RED-0");
        assert_eq!(search.stats().cutoffs, 2);

        let root = tree.root_node();
        let cut: Vec<_> = root.children[1..].iter().map(|&c| tree.get(c).value).collect();
        assert_eq!(cut, vec![None, None]);
        // Root + three min nodes + 3 + 1 + 3 leaves.
        assert_eq!(search.stats().nodes_visited, 11);
    }

    #[test]
    fn test_exhaustive_agrees_and_visits_everything() {
        let groups: &[&[Score]] = &[&[3, 12, 8], &[2, 4, 6], &[14, 5, 2]];
        let mut pruned = two_level(groups);
        let mut full = two_level(groups);

        let mut a = AlphaBeta::new();
        let mut b = AlphaBeta::new();
        let fast = a.search(&mut pruned);
        let slow = b.exhaustive(&mut full);

        assert_eq!(fast.value, slow.value);
        assert_eq!(fast.card, slow.card);
        assert_eq!(b.stats().nodes_visited as usize, full.len());
        assert_eq!(b.stats().cutoffs, 0);
        assert!(a.stats().nodes_visited < b.stats().nodes_visited);
        assert_eq!(full.get(full.root_node().children[2]).value, Some(2));
    }

    #[test]
    fn test_leaf_root_returns_own_value() {
        let mut tree = SearchTree::new(GameState::from_seed(2));
        tree.get_mut(tree.root()).value = Some(-4);

        let outcome = AlphaBeta::new().search(&mut tree);

        assert_eq!(outcome.value, -4);
        assert_eq!(outcome.action, None);
        assert_eq!(outcome.card, None);
        assert_eq!(outcome.label(), "");
    }

    #[test]
    fn test_repeated_searches_are_identical() {
        let groups: &[&[Score]] = &[&[1, 1], &[1, 0], &[1, 1]];
        let mut first = two_level(groups);
        let mut second = two_level(groups);

        let a = AlphaBeta::new().search(&mut first);
        let b = AlphaBeta::new().search(&mut second);

        assert_eq!(a, b);
        assert_eq!(a.card, Some(card(0)));
    }
}
