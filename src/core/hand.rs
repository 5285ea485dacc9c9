//! A player's hand: an unordered multiset of cards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::card::Card;

/// Cards held by one player.
///
/// Insertion order is kept so that legal plays are enumerated in a stable
/// order, which the search relies on for tie-breaking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    /// SmallVec keeps an opening hand of seven inline.
    cards: SmallVec<[Card; 16]>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove exactly one instance equal to `card`.
    ///
    /// Returns false (and leaves the hand untouched) if none is held.
    pub fn remove(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Cards that may legally be placed on `top`, in hand order.
    pub fn playable<'a>(&'a self, top: &'a Card) -> impl Iterator<Item = Card> + 'a {
        self.cards.iter().filter(move |c| c.matches(top)).copied()
    }

    pub fn can_play(&self, top: &Card) -> bool {
        self.cards.iter().any(|c| c.matches(top))
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Color, Rank};

    #[test]
    fn test_remove_takes_one_instance() {
        let five = Card::new(Color::Blue, Rank::Number(5));
        let skip = Card::new(Color::Red, Rank::Skip);
        let mut hand: Hand = [five, skip, five].into_iter().collect();

        assert!(hand.remove(&five));
        assert_eq!(hand.cards(), &[skip, five]);
        assert!(hand.remove(&five));
        assert!(!hand.remove(&five));
        assert_eq!(hand.cards(), &[skip]);
    }

    #[test]
    fn test_remove_recolored_wild_misses() {
        let wild = Card::new(Color::Wild, Rank::Wild);
        let mut hand: Hand = [wild].into_iter().collect();

        assert!(!hand.remove(&wild.recolor(Color::Red)));
        assert!(hand.remove(&wild.recolor(Color::Red).base()));
        assert!(hand.is_empty());
    }

    #[test]
    fn test_playable_in_hand_order() {
        let top = Card::new(Color::Green, Rank::Number(4));
        let hand: Hand = [
            Card::new(Color::Red, Rank::Number(4)),
            Card::new(Color::Red, Rank::Number(1)),
            Card::new(Color::Wild, Rank::WildFour),
            Card::new(Color::Green, Rank::Skip),
        ]
        .into_iter()
        .collect();

        let playable: Vec<_> = hand.playable(&top).collect();
        assert_eq!(
            playable,
            vec![
                Card::new(Color::Red, Rank::Number(4)),
                Card::new(Color::Wild, Rank::WildFour),
                Card::new(Color::Green, Rank::Skip),
            ]
        );
        assert!(hand.can_play(&top));
    }

    #[test]
    fn test_display() {
        let hand: Hand = [
            Card::new(Color::Red, Rank::Number(1)),
            Card::new(Color::Wild, Rank::Wild),
        ]
        .into_iter()
        .collect();
        assert_eq!(hand.to_string(), "[RED-1, WILD-WILD]");
    }
}
