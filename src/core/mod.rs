//! Core game types: cards, piles, hands, players, state, RNG, configuration.
//!
//! Everything the search needs to simulate Uno lives here; the search itself
//! only ever advances a game through `GameState::update`.

pub mod agent;
pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod hand;
pub mod player;
pub mod rng;
pub mod state;

pub use agent::Agent;
pub use card::{full_deck, Card, Color, Rank, DECK_SIZE};
pub use config::GameConfig;
pub use deck::Deck;
pub use error::{Result, UnoError};
pub use hand::Hand;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, GameStateBuilder, Phase, Transition};
