//! The search-driven player.

use std::time::Instant;

use crate::core::{Agent, Card, GameState, PlayerId, Result};

use super::builder::{build_tree, candidates};
use super::config::SearchConfig;
use super::search::{AlphaBeta, SearchOutcome};
use super::stats::SearchStats;
use super::tree::SearchTree;

/// Chooses moves by building a depth-limited tree and searching it.
///
/// The agent sees both hands; it does not model hidden information.
/// The last tree is kept so callers can inspect or render it.
#[derive(Clone, Debug)]
pub struct MinimaxAgent {
    player: PlayerId,
    config: SearchConfig,
    tree: Option<SearchTree>,
    stats: SearchStats,
}

impl MinimaxAgent {
    pub fn new(player: PlayerId, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            player,
            config,
            tree: None,
            stats: SearchStats::default(),
        })
    }

    /// The seat this agent plays and evaluates for.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Build and search a tree for the current position.
    ///
    /// Does not touch `state`; the tree works on its own copies.
    pub fn search(&mut self, state: &GameState) -> SearchOutcome {
        let start = Instant::now();

        let mut tree = build_tree(state, self.player, self.config.depth);
        let mut search = AlphaBeta::new();
        let outcome = if self.config.pruning {
            search.search(&mut tree)
        } else {
            search.exhaustive(&mut tree)
        };
        tree.mark_optimal_path();

        self.stats = search.stats().clone();
        self.stats.time_us = start.elapsed().as_micros() as u64;
        log::debug!("{} action: {}", self.player, outcome.label());
        log::debug!("{} value: {}", self.player, outcome.value);

        self.tree = Some(tree);
        outcome
    }

    /// Tree from the most recent search.
    #[must_use]
    pub fn tree(&self) -> Option<&SearchTree> {
        self.tree.as_ref()
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Agent for MinimaxAgent {
    fn play(&mut self, state: &mut GameState) -> Option<Card> {
        debug_assert_eq!(state.turn(), self.player, "asked to move out of turn");

        if !state.can_play(self.player) {
            state.draw(self.player, 1);
        }
        if !state.can_play(self.player) {
            return None;
        }

        // A depth-0 root is a leaf with no recorded move.
        self.search(state)
            .card
            .or_else(|| candidates(state, self.player).first().copied().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Rank, Transition};

    fn num(color: Color, n: u8) -> Card {
        Card::new(color, Rank::Number(n))
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SearchConfig::default().with_depth(40);
        assert!(MinimaxAgent::new(PlayerId::ONE, config).is_err());
    }

    #[test]
    fn test_stuck_agent_draws_then_passes() {
        let mut state = GameState::builder()
            .hand(PlayerId::ONE, [num(Color::Blue, 1)])
            .hand(PlayerId::TWO, [num(Color::Yellow, 3)])
            .top(num(Color::Red, 5))
            .draw_first([num(Color::Green, 7)])
            .build();
        let mut agent = MinimaxAgent::new(PlayerId::ONE, SearchConfig::default()).unwrap();

        assert_eq!(agent.play(&mut state), None);
        assert_eq!(state.hand(PlayerId::ONE).len(), 2);
        assert!(agent.tree().is_none());
    }

    #[test]
    fn test_stuck_agent_plays_drawn_card() {
        let mut state = GameState::builder()
            .hand(PlayerId::ONE, [num(Color::Blue, 1)])
            .hand(PlayerId::TWO, [num(Color::Yellow, 3)])
            .top(num(Color::Red, 5))
            .draw_first([num(Color::Red, 7)])
            .build();
        let mut agent = MinimaxAgent::new(PlayerId::ONE, SearchConfig::default()).unwrap();

        assert_eq!(agent.play(&mut state), Some(num(Color::Red, 7)));
    }

    #[test]
    fn test_played_card_is_recorded_on_root() {
        let mut agent = MinimaxAgent::new(PlayerId::ONE, SearchConfig::default()).unwrap();
        let mut state = GameState::builder()
            .hand(PlayerId::ONE, [num(Color::Red, 1), num(Color::Green, 4), num(Color::Green, 5)])
            .hand(PlayerId::TWO, [num(Color::Yellow, 3), num(Color::Yellow, 4)])
            .top(num(Color::Red, 5))
            .build();
        let choice = agent.play(&mut state);

        assert!(choice.is_some());
        assert!(agent.stats().nodes_visited > 0);
        let tree = agent.tree().unwrap();
        assert!(tree.root_node().on_path);
        assert_eq!(tree.root_node().best_card, choice);
    }

    #[test]
    fn test_depth_zero_still_plays_a_legal_card() {
        let mut state = GameState::builder()
            .hand(PlayerId::ONE, [num(Color::Red, 1), num(Color::Blue, 2)])
            .hand(PlayerId::TWO, [num(Color::Yellow, 3), num(Color::Yellow, 4)])
            .top(num(Color::Red, 5))
            .build();
        let config = SearchConfig::default().with_depth(0);
        let mut agent = MinimaxAgent::new(PlayerId::ONE, config).unwrap();

        let choice = agent.play(&mut state);

        assert_eq!(choice, Some(num(Color::Red, 1)));
        assert_eq!(agent.tree().unwrap().len(), 1);
        assert_eq!(state.update(choice), Transition::Played(num(Color::Red, 1)));
    }

    #[test]
    fn test_search_leaves_state_untouched() {
        let state = GameState::from_seed(17);
        let before = state.clone();
        let config = SearchConfig::default().with_depth(2);
        let mut agent = MinimaxAgent::new(PlayerId::ONE, config).unwrap();

        agent.search(&state);

        assert_eq!(state, before);
    }
}
