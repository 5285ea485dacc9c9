//! Game state and the single transition that advances it.
//!
//! ## Phases
//!
//! - `AwaitingAction`: the player to move plays a card or passes
//! - `EffectPending`: the next `update` resolves a skip (and any draw penalty)
//! - `GameOver`: a hand emptied; `winner` is set
//!
//! ## Conservation
//!
//! Both hands, the draw pile, the discard pile and the top card together hold
//! the 108-card universe at all times. Wild cards count by their base
//! identity, whatever color they were painted when played.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::agent::Agent;
use super::card::{full_deck, Card, Color, Rank};
use super::config::GameConfig;
use super::deck::Deck;
use super::error::{Result, UnoError};
use super::hand::Hand;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;

/// Coarse state-machine position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingAction,
    EffectPending,
    GameOver,
}

/// What a call to `update` did. Its `Display` is the action label shown on
/// search-tree edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// A pending effect consumed the mover's turn.
    Skipped,
    /// The mover had nothing to play and passed after drawing.
    Passed,
    /// The mover played this card (as painted, for wilds).
    Played(Card),
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Skipped => write!(f, "Skipped turn"),
            Transition::Passed => write!(f, "Cannot play, draw a card from deck"),
            Transition::Played(card) => write!(f, "Play card: {}", card),
        }
    }
}

/// Complete two-player game state.
///
/// Cloning is cheap: the piles are persistent vectors and hands are small.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    hands: PlayerMap<Hand>,
    deck: Deck,
    discard: Vector<Card>,
    top: Card,
    turn: PlayerId,
    effect_pending: bool,
    game_over: bool,
    winner: Option<PlayerId>,
    rng: GameRng,
}

impl GameState {
    /// Deal a new game.
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::deal(config.hand_size, GameRng::new(config.seed)))
    }

    /// Deal a standard seven-card game from `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::deal(GameConfig::default().hand_size, GameRng::new(seed))
    }

    /// Start building a hand-crafted position.
    pub fn builder() -> GameStateBuilder {
        GameStateBuilder::default()
    }

    fn deal(hand_size: usize, mut rng: GameRng) -> Self {
        let mut deck = Deck::shuffled(&mut rng);
        let hands = PlayerMap::new(|_| deck.draw(hand_size).into_iter().collect::<Hand>());

        // A wild may not open the game; rejected wilds go to the discard pile.
        let mut discard = Vector::new();
        let top = loop {
            match deck.draw_one() {
                Some(card) if card.is_wild() => discard.push_back(card),
                Some(card) => break card,
                None => unreachable!("a validated deal always leaves a colored card"),
            }
        };

        Self {
            hands,
            deck,
            discard,
            top,
            turn: PlayerId::ONE,
            effect_pending: false,
            game_over: false,
            winner: None,
            rng,
        }
    }

    // === Accessors ===

    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn discard(&self) -> &Vector<Card> {
        &self.discard
    }

    pub fn top(&self) -> Card {
        self.top
    }

    /// The player to move.
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    pub fn effect_pending(&self) -> bool {
        self.effect_pending
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn has_won(&self, player: PlayerId) -> bool {
        self.hands[player].is_empty()
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.effect_pending {
            Phase::EffectPending
        } else {
            Phase::AwaitingAction
        }
    }

    /// Cards `player` may put on the current top card, in hand order.
    pub fn legal_plays(&self, player: PlayerId) -> Vec<Card> {
        self.hands[player].playable(&self.top).collect()
    }

    pub fn can_play(&self, player: PlayerId) -> bool {
        self.hands[player].can_play(&self.top)
    }

    // === Mutation ===

    /// Move up to `amount` cards from the draw pile into `player`'s hand.
    ///
    /// Returns how many were actually drawn.
    pub fn draw(&mut self, player: PlayerId, amount: usize) -> usize {
        let cards = self.deck.draw(amount);
        let drawn = cards.len();
        self.hands[player].extend(cards);
        drawn
    }

    /// Advance the game by one action of the player to move.
    ///
    /// `None` means the mover has no legal play and has already drawn.
    /// Wild cards arrive painted; they leave the hand by base identity.
    ///
    /// # Panics
    ///
    /// If `card` (by base identity) is not in the mover's hand.
    pub fn update(&mut self, card: Option<Card>) -> Transition {
        let mover = self.turn;

        if self.deck.is_empty() {
            self.recycle();
        }

        if self.effect_pending {
            // The penalty lands on the player whose turn is being skipped.
            self.effect_pending = false;
            let penalty = self.top.rank.penalty();
            if penalty > 0 {
                self.draw(mover, penalty);
            }
            self.next_turn();
            return Transition::Skipped;
        }

        let Some(card) = card else {
            self.next_turn();
            return Transition::Passed;
        };

        let held = card.base();
        assert!(self.hands[mover].remove(&held), "{} does not hold {}", mover, held);

        self.play(card);
        self.effect_pending = card.rank.has_effect();
        self.next_turn();

        if self.hands[mover].is_empty() {
            self.game_over = true;
            self.winner = Some(mover);
        }

        Transition::Played(card)
    }

    /// Play a whole game between two agents.
    ///
    /// Returns the winner, or `TurnLimit` if `max_turns` updates pass first.
    pub fn run(
        &mut self,
        agents: &mut PlayerMap<Box<dyn Agent>>,
        max_turns: u32,
    ) -> Result<PlayerId> {
        let mut turns = 0;
        loop {
            if let Some(winner) = self.winner {
                log::info!("{} won after {} turns", winner, turns);
                return Ok(winner);
            }
            if turns == max_turns {
                return Err(UnoError::TurnLimit(max_turns));
            }

            let mover = self.turn;
            let choice = agents[mover].play(self);
            let transition = self.update(choice);
            log::debug!("{}: {}", mover, transition);
            turns += 1;
        }
    }

    fn play(&mut self, card: Card) {
        self.discard.push_back(self.top.base());
        if self.deck.is_empty() {
            self.recycle();
        }
        self.top = card;
    }

    fn recycle(&mut self) {
        self.deck.recycle(&mut self.discard, &mut self.rng);
    }

    fn next_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    // === Accounting ===

    /// Multiset of every card in the game, by base identity.
    pub fn card_counts(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        let hands = PlayerId::all().flat_map(|p| self.hands[p].cards().iter());
        let everything = hands
            .chain(self.deck.iter())
            .chain(self.discard.iter())
            .chain(std::iter::once(&self.top));
        for card in everything {
            *counts.entry(card.base()).or_insert(0) += 1;
        }
        counts
    }

    /// Total cards across all zones; 108 in every reachable state.
    pub fn total_cards(&self) -> usize {
        PlayerId::all().map(|p| self.hands[p].len()).sum::<usize>()
            + self.deck.len()
            + self.discard.len()
            + 1
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player 1: {}", self.hands[PlayerId::ONE])?;
        writeln!(f, "Top     : {}", self.top)?;
        writeln!(f, "Player 2: {}", self.hands[PlayerId::TWO])?;
        match self.deck.peek() {
            Some(card) => writeln!(f, "Deck    : [{} ...", card)?,
            None => writeln!(f, "Deck    : []")?,
        }
        write!(f, "{} turn", self.turn)
    }
}

/// Builder for hand-crafted positions.
///
/// Cards not placed explicitly are shuffled into the draw pile (or the
/// discard pile, see [`GameStateBuilder::empty_draw_pile`]), so the result
/// still holds exactly the 108-card universe.
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    hands: PlayerMap<Vec<Card>>,
    top: Card,
    draw_front: Vec<Card>,
    rest_to_discard: bool,
    turn: PlayerId,
    effect_pending: bool,
    seed: u64,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self {
            hands: PlayerMap::with_default(),
            top: Card::new(Color::Red, Rank::Number(0)),
            draw_front: Vec::new(),
            rest_to_discard: false,
            turn: PlayerId::ONE,
            effect_pending: false,
            seed: 42,
        }
    }
}

impl GameStateBuilder {
    pub fn hand(mut self, player: PlayerId, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hands[player] = cards.into_iter().collect();
        self
    }

    pub fn top(mut self, card: Card) -> Self {
        self.top = card;
        self
    }

    /// Cards placed at the front of the draw pile, in draw order.
    pub fn draw_first(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.draw_front = cards.into_iter().collect();
        self
    }

    /// Put every unplaced card in the discard pile, leaving only the
    /// `draw_first` cards to draw.
    pub fn empty_draw_pile(mut self) -> Self {
        self.rest_to_discard = true;
        self
    }

    pub fn turn(mut self, player: PlayerId) -> Self {
        self.turn = player;
        self
    }

    pub fn effect_pending(mut self, pending: bool) -> Self {
        self.effect_pending = pending;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// # Panics
    ///
    /// If more copies of a card are placed than the universe contains.
    pub fn build(self) -> GameState {
        let mut rng = GameRng::new(self.seed);
        let mut rest = full_deck();

        let placed = PlayerId::all()
            .flat_map(|p| self.hands[p].iter())
            .chain(self.draw_front.iter())
            .chain(std::iter::once(&self.top));
        for card in placed {
            let base = card.base();
            let idx = rest
                .iter()
                .position(|c| *c == base)
                .unwrap_or_else(|| panic!("no copy of {} left to place", base));
            rest.swap_remove(idx);
        }
        rng.shuffle(&mut rest);

        let (deck, discard) = if self.rest_to_discard {
            (Deck::from_cards(self.draw_front), rest.into_iter().collect())
        } else {
            (Deck::from_cards(self.draw_front.into_iter().chain(rest)), Vector::new())
        };

        GameState {
            hands: PlayerMap::new(|p| self.hands[p].iter().copied().collect()),
            deck,
            discard,
            top: self.top,
            turn: self.turn,
            effect_pending: self.effect_pending,
            game_over: false,
            winner: None,
            rng,
        }
    }
}
