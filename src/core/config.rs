//! Game setup parameters.

use serde::{Deserialize, Serialize};

use super::card::DECK_SIZE;
use super::error::{Result, UnoError};

/// Parameters for dealing a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each player.
    pub hand_size: usize,

    /// Seed for the shuffle source.
    /// Same seed deals the same game.
    pub seed: u64,

    /// Upper bound on `update` calls in `GameState::run`.
    pub max_turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            seed: 42,
            max_turns: 10_000,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Check the deal fits the deck with room for a top card.
    pub fn validate(&self) -> Result<()> {
        if self.hand_size == 0 {
            return Err(UnoError::InvalidConfiguration("hand size must be positive"));
        }
        // Two hands, one top card, and at most eight rejected wilds.
        if 2 * self.hand_size + 1 + 8 > DECK_SIZE {
            return Err(UnoError::InvalidConfiguration("hands do not fit in the deck"));
        }
        if self.max_turns == 0 {
            return Err(UnoError::InvalidConfiguration("turn limit must be positive"));
        }
        Ok(())
    }
}
