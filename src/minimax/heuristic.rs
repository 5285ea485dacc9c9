//! Static evaluation of a game state.

use crate::core::{GameState, PlayerId};

/// Position score from the searching agent's point of view.
pub type Score = i32;

/// Bonus (or malus) for a decided game.
pub const WIN_SCORE: Score = 100;

/// Card advantage of `me` plus a bonus for a won game.
///
/// Always scored from `me`'s fixed seat, never from the player to move.
#[must_use]
pub fn evaluate(state: &GameState, me: PlayerId) -> Score {
    let other = me.opponent();
    let mut score = state.hand(other).len() as Score - state.hand(me).len() as Score;

    if state.has_won(me) {
        score += WIN_SCORE;
    }
    if state.has_won(other) {
        score -= WIN_SCORE;
    }

    score
}

/// Score of a search leaf.
///
/// A leaf `me` reached with its own move (opponent to move) scores `h`; a
/// leaf where `me` is to move scores `-h`.
#[must_use]
pub fn leaf_value(state: &GameState, me: PlayerId) -> Score {
    let h = evaluate(state, me);
    if state.turn() == me {
        -h
    } else {
        h
    }
}
