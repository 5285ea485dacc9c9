use super::card::Card;
use super::state::GameState;

/// Something that can take a turn.
///
/// `play` is called for the player to move. An agent with no legal card is
/// expected to draw one for that player (`GameState::draw`) and return
/// `None` if it still cannot play; `GameState::update` then passes the turn.
pub trait Agent {
    fn play(&mut self, state: &mut GameState) -> Option<Card>;
}
