//! Uno card model: colors, ranks, cards, and the 108-card universe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card color. `Wild` marks an uncolored wild card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

impl Color {
    /// The four colors a wild card can be painted, in branching order.
    pub const PLAYABLE: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    fn name(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::Wild => "WILD",
        }
    }
}

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    /// Numbered card between 0 and 9.
    Number(u8),
    Reverse,
    DrawTwo,
    Skip,
    WildFour,
    Wild,
}

pub const MAX_NUMBER: u8 = 9;
pub const DECK_SIZE: usize = 108;
pub const WILDS_PER_KIND: usize = 4;

impl Rank {
    /// Ranks dealt twice per color (everything colored except zero).
    pub fn doubled() -> impl Iterator<Item = Rank> {
        (1..=MAX_NUMBER)
            .map(Rank::Number)
            .chain([Rank::Reverse, Rank::DrawTwo, Rank::Skip])
    }

    /// True for ranks whose play makes the next player lose their turn.
    #[inline]
    pub fn has_effect(self) -> bool {
        matches!(self, Rank::WildFour | Rank::Skip | Rank::DrawTwo | Rank::Reverse)
    }

    /// Cards the receiving player draws when this rank's effect resolves.
    #[inline]
    pub fn penalty(self) -> usize {
        match self {
            Rank::WildFour => 4,
            Rank::DrawTwo => 2,
            _ => 0,
        }
    }

    /// True for the two wild ranks.
    #[inline]
    pub fn is_wild(self) -> bool {
        matches!(self, Rank::WildFour | Rank::Wild)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(n) => write!(f, "{}", n),
            Rank::Reverse => write!(f, "REVERSE"),
            Rank::DrawTwo => write!(f, "DRAW_TWO"),
            Rank::Skip => write!(f, "SKIP"),
            Rank::WildFour => write!(f, "WILD_FOUR"),
            Rank::Wild => write!(f, "WILD"),
        }
    }
}

/// A single Uno card.
///
/// Wild cards keep `Color::Wild` while in a hand or a pile; they only carry
/// a concrete color while they are the top card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// Whether this card may be placed on `top`.
    ///
    /// Not symmetric: a `Color::Wild` receiver matches anything, while any
    /// card tested against a wild-colored target needs a shared rank.
    #[inline]
    #[must_use]
    pub fn matches(&self, top: &Card) -> bool {
        self.color == top.color || self.rank == top.rank || self.color == Color::Wild
    }

    /// The same card painted `color`, as played onto the table.
    #[must_use]
    pub fn recolor(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Identity of the physical card, ignoring any color painted on a wild.
    #[must_use]
    pub fn base(self) -> Self {
        if self.rank.is_wild() {
            Self::new(Color::Wild, self.rank)
        } else {
            self
        }
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        self.color == Color::Wild
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.color.name(), self.rank)
    }
}

/// Builds the full 108-card universe in deterministic order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for _ in 0..2 {
        for color in Color::PLAYABLE {
            deck.extend(Rank::doubled().map(|rank| Card::new(color, rank)));
        }
    }
    deck.extend(Color::PLAYABLE.map(|color| Card::new(color, Rank::Number(0))));
    for rank in [Rank::WildFour, Rank::Wild] {
        deck.extend(std::iter::repeat(Card::new(Color::Wild, rank)).take(WILDS_PER_KIND));
    }
    deck
}
