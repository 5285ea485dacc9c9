//! Breadth-first construction of the bounded-depth game tree.
//!
//! The depth budget counts ply-turns: it drops by one each time the queue
//! reaches a node whose player to move differs from the previous one, so
//! both players get the same number of turns. Once it is spent, expansion
//! stops everywhere and every unexpanded node is a leaf.

use smallvec::SmallVec;
use std::collections::VecDeque;

use crate::core::{Card, Color, GameState, PlayerId};

use super::heuristic::leaf_value;
use super::tree::SearchTree;

/// Candidate moves for `mover` in `state`, in construction order.
///
/// Each legal card in hand order; a wild becomes one candidate per playable
/// color. With no legal card the single candidate is `None` (pass).
pub fn candidates(state: &GameState, mover: PlayerId) -> SmallVec<[Option<Card>; 16]> {
    let mut out = SmallVec::new();
    for card in state.legal_plays(mover) {
        if card.is_wild() {
            out.extend(Color::PLAYABLE.map(|color| Some(card.recolor(color))));
        } else {
            out.push(Some(card));
        }
    }
    if out.is_empty() {
        out.push(None);
    }
    out
}

/// Expand `state` into a tree `depth` ply-turns deep and score its leaves
/// for `searcher`.
pub fn build_tree(state: &GameState, searcher: PlayerId, depth: u32) -> SearchTree {
    let mut tree = SearchTree::new(state.clone());
    let mut queue = VecDeque::from([tree.root()]);
    let mut flag = state.turn();
    let mut budget = depth;

    while let Some(id) = queue.pop_front() {
        let mut working = tree.get(id).state.clone();

        if working.turn() != flag {
            budget = budget.saturating_sub(1);
            flag = working.turn();
        }
        if budget == 0 {
            break;
        }

        let mover = working.turn();
        if working.has_won(PlayerId::ONE) || working.has_won(PlayerId::TWO) {
            continue;
        }
        if working.deck().is_empty() && !working.can_play(mover) {
            continue;
        }

        // Stuck players draw once before choosing, as in live play.
        if !working.can_play(mover) {
            working.draw(mover, 1);
        }

        for candidate in candidates(&working, mover) {
            let mut next = working.clone();
            let transition = next.update(candidate);
            let child = tree.add_child(id, next, transition, candidate);
            queue.push_back(child);
        }
    }

    score_leaves(&mut tree, searcher);
    log::trace!("built {:?} for {}", tree.stats(), searcher);
    tree
}

fn score_leaves(tree: &mut SearchTree, searcher: PlayerId) {
    let leaves: Vec<_> = tree.leaves().collect();
    for id in leaves {
        let node = tree.get_mut(id);
        node.value = Some(leaf_value(&node.state, searcher));
    }
}
