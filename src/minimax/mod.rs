//! Depth-limited minimax search for two-player Uno.
//!
//! ## Overview
//!
//! A decision is made in two passes:
//!
//! - **Build**: the current state is expanded breadth-first into an arena
//!   tree, a fixed number of ply-turns deep. Every child holds its own
//!   snapshot of the game, so the caller's state is never touched.
//! - **Search**: a single recursion computes minimax values, with or without
//!   alpha-beta pruning. The card recorded on the root is the move.
//!
//! Leaves are scored by card advantage with a bonus for a finished game,
//! always from the searching agent's seat.
//!
//! ## Usage
//!
//! ```rust
//! use uno_minimax::core::{GameState, PlayerId};
//! use uno_minimax::minimax::{MinimaxAgent, SearchConfig};
//!
//! let state = GameState::from_seed(7);
//! let mut agent = MinimaxAgent::new(PlayerId::ONE, SearchConfig::default()).unwrap();
//!
//! let outcome = agent.search(&state);
//! println!("{} (value {})", outcome.label(), outcome.value);
//!
//! let tree = agent.tree().unwrap();
//! println!("{:?}", tree.stats());
//! ```

pub mod agent;
pub mod builder;
pub mod config;
pub mod heuristic;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use agent::MinimaxAgent;
pub use builder::{build_tree, candidates};
pub use config::{SearchConfig, MAX_DEPTH};
pub use heuristic::{evaluate, leaf_value, Score, WIN_SCORE};
pub use node::{NodeId, SearchNode};
pub use search::{AlphaBeta, SearchOutcome};
pub use stats::SearchStats;
pub use tree::{SearchTree, TreeStats};
