//! Crate error type.

use thiserror::Error;

/// Recoverable failures surfaced to callers.
///
/// Rule violations inside the engine (e.g. playing a card that is not in
/// hand) are invariant breaks and panic instead.
#[derive(Debug, Error)]
pub enum UnoError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("game did not finish within {0} turns")]
    TurnLimit(u32),
    #[error("search tree codec failed: {0}")]
    Codec(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, UnoError>;
