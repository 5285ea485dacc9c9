//! # uno-minimax
//!
//! A two-player Uno engine and a depth-limited alpha-beta minimax agent.
//!
//! ## Design Principles
//!
//! 1. **Single Entry Point**: Every state change, in live play and inside
//!    the search, goes through `GameState::update`.
//!
//! 2. **Cheap Snapshots**: Piles are `im` persistent vectors, so each search
//!    node can own a full copy of the game.
//!
//! 3. **Reproducible**: All shuffling draws from one seeded ChaCha stream
//!    carried in the state. Same seed, same game.
//!
//! ## Modules
//!
//! - `core`: Cards, piles, hands, players, game state, RNG, configuration
//! - `minimax`: Tree construction, evaluation, alpha-beta search, the agent

pub mod core;
pub mod minimax;

// Re-export commonly used types
pub use crate::core::{
    Agent, Card, Color, Rank, Deck, Hand,
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    GameConfig, GameState, GameStateBuilder, Phase, Transition,
    Result, UnoError,
};

pub use crate::minimax::{
    MinimaxAgent, SearchConfig, SearchOutcome, AlphaBeta,
    SearchTree, SearchNode, NodeId, TreeStats, SearchStats,
    Score,
};
