//! Draw pile and discard pile.
//!
//! Both piles are `im::Vector`s so that cloning a full game state for every
//! search node shares structure instead of copying ~100 cards.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{full_deck, Card};
use super::rng::GameRng;

/// Ordered draw pile; cards are taken from the front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// The full 108-card universe, shuffled.
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards = full_deck();
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// A pile in exactly the given order (front first).
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Next card to be drawn.
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Take one card from the front.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Take up to `amount` cards from the front.
    ///
    /// A short pile yields only what it has; running dry is normal play,
    /// the next `update` recycles the discard pile.
    pub fn draw(&mut self, amount: usize) -> Vec<Card> {
        let take = amount.min(self.cards.len());
        (0..take).filter_map(|_| self.cards.pop_front()).collect()
    }

    /// Replace the (empty) pile with the discard pile, shuffled.
    pub fn recycle(&mut self, discard: &mut Vector<Card>, rng: &mut GameRng) {
        debug_assert!(self.cards.is_empty(), "recycling over a non-empty pile");
        let mut cards = std::mem::take(discard);
        rng.shuffle_vector(&mut cards);
        self.cards.append(cards);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
