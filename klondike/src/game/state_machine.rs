//! Klondike game orchestration.
//!
//! A [`Game`] owns the deck, tableau, foundations and drawn (waste) pile and
//! is the only way to mutate them during play. Moves are transactional: the
//! board is cloned before a card is taken, and the clone is written back if
//! the card can't be placed.

use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::entities::{
    Card, ColumnView, Deck, FoundationView, GameStatus, GameView, Place, STANDARD_DECK_SIZE, Suit,
};
use super::errors::{GameError, GameResult};
use super::foundation::FoundationStack;
use super::tableau::{NUM_COLUMNS, Tableau};

/// Number of times a new game's deck is shuffled.
pub const DEFAULT_SHUFFLES: i32 = 5;

/// Number of cards moved from the deck to the drawn pile per draw.
pub const DRAW_COUNT: usize = 3;

/// Order foundations are kept and displayed in.
pub const FOUNDATION_ORDER: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

/// Game configuration settings
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameSettings {
    /// Seed for the shuffle. A random seed is used when unset.
    pub seed: Option<u64>,
    pub shuffles: i32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new(None, DEFAULT_SHUFFLES)
    }
}

impl GameSettings {
    #[must_use]
    pub const fn new(seed: Option<u64>, shuffles: i32) -> Self {
        Self { seed, shuffles }
    }
}

/// Every piece of mutable game state. Cloning it is how a move takes its
/// rollback snapshot.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Board {
    deck: Deck,
    tableau: Tableau,
    foundations: [FoundationStack; 4],
    /// Front is the most recently drawn card.
    waste: VecDeque<Card>,
}

impl Board {
    fn foundation_mut(&mut self, suit: Suit) -> &mut FoundationStack {
        &mut self.foundations[foundation_idx(suit)]
    }

    fn take(&mut self, place: Place) -> GameResult<Card> {
        match place {
            Place::Column(column) => self.tableau.get_out(column),
            Place::Drawn => self.waste.pop_front().ok_or(GameError::EmptyWaste),
            Place::Foundation(suit) => self.foundation_mut(suit).pull(),
        }
    }

    fn place(&mut self, card: Card, place: Place) -> GameResult<()> {
        match place {
            Place::Column(column) => self.tableau.put_in(card, column),
            Place::Drawn => Err(GameError::MoveToDrawDisallowed),
            Place::Foundation(suit) => self.foundation_mut(suit).push(card),
        }
    }
}

const fn foundation_idx(suit: Suit) -> usize {
    match suit {
        Suit::Spade => 0,
        Suit::Diamond => 1,
        Suit::Club => 2,
        Suit::Heart => 3,
    }
}

const fn validate_place(place: Place) -> GameResult<()> {
    match place {
        Place::Column(column) if column >= NUM_COLUMNS => Err(GameError::InvalidPlace),
        _ => Ok(()),
    }
}

/// A single game of Klondike solitaire with a three-card draw.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    board: Board,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game dealt from a standard deck shuffled [`DEFAULT_SHUFFLES`] times
    /// with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::from_settings(GameSettings::default())
            .expect("a shuffled standard deck always deals a tableau")
    }

    pub fn from_settings(settings: GameSettings) -> GameResult<Self> {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut deck = Deck::default();
        deck.shuffle(settings.shuffles, &mut rng)?;
        debug!(
            "shuffled deck {} times (seed: {:?})",
            settings.shuffles, settings.seed
        );
        Self::from_deck(deck)
    }

    /// Deal a game off the top of an arranged deck. Whatever the tableau
    /// doesn't consume stays in the deck. The deck's composition isn't
    /// checked.
    pub fn from_deck(mut deck: Deck) -> GameResult<Self> {
        let tableau = Tableau::deal(&mut deck)?;
        debug!("dealt tableau, {} cards left in the deck", deck.len());
        Ok(Self {
            board: Board {
                deck,
                tableau,
                foundations: FOUNDATION_ORDER.map(FoundationStack::new),
                waste: VecDeque::with_capacity(STANDARD_DECK_SIZE),
            },
            status: GameStatus::InProgress,
        })
    }

    /// Draw up to three cards onto the front of the drawn pile, the last one
    /// drawn ending up on top.
    ///
    /// # Errors
    ///
    /// `EmptyDeck` if there's nothing to draw. `DeckExhaustedDuringDraw` if
    /// fewer than three cards were left; the cards that were drawn stay on
    /// the drawn pile.
    pub fn draw_three(&mut self) -> GameResult<()> {
        if self.board.deck.is_empty() {
            return Err(GameError::EmptyDeck);
        }

        for drawn in 0..DRAW_COUNT {
            let Ok(card) = self.board.deck.draw() else {
                debug!("deck ran out after drawing {drawn} cards");
                return Err(GameError::DeckExhaustedDuringDraw);
            };
            self.board.waste.push_front(card);
        }

        debug!("drew {DRAW_COUNT} cards, {} left", self.board.deck.len());
        Ok(())
    }

    /// Turn the drawn pile back into the deck once the deck is used up. The
    /// drawn pile's order is kept as is.
    pub fn reset_waste_to_deck(&mut self) -> GameResult<()> {
        if !self.board.deck.is_empty() {
            return Err(GameError::DeckNotEmpty);
        }

        let cards: Vec<Card> = self.board.waste.drain(..).collect();
        self.board.deck.reset(Some(&cards));
        debug!("reset {} drawn cards into the deck", cards.len());
        Ok(())
    }

    /// Move a single card from one place to another.
    ///
    /// Either the whole move happens or nothing does: if the card can't be
    /// placed, every part of the game is restored to how it was before the
    /// call and the rule that was broken is returned.
    pub fn move_card(&mut self, from: Place, to: Place) -> GameResult<()> {
        validate_place(from)?;
        validate_place(to)?;
        if to == Place::Drawn {
            return Err(GameError::MoveToDrawDisallowed);
        }

        let snapshot = self.board.clone();
        let card = self.board.take(from)?;
        if let Err(err) = self.board.place(card, to) {
            warn!("can't move {card} from {from} to {to}: {err}");
            self.board = snapshot;
            return Err(err);
        }

        debug!("moved {card} from {from} to {to}");
        if self.is_finished() {
            self.status = GameStatus::Won;
            info!("game won");
        }
        Ok(())
    }

    /// Like [`Game::move_card`], but with places given as their tokens
    /// (`1`-`7`, `drawn`, `S`, `D`, `C`, `H`).
    pub fn move_by_tokens(&mut self, from: &str, to: &str) -> GameResult<()> {
        let from: Place = from.parse()?;
        let to: Place = to.parse()?;
        self.move_card(from, to)
    }

    /// All four foundations hold a full suit.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.board
            .foundations
            .iter()
            .all(FoundationStack::is_complete)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.board.deck
    }

    #[must_use]
    pub fn tableau(&self) -> &Tableau {
        &self.board.tableau
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &FoundationStack {
        &self.board.foundations[foundation_idx(suit)]
    }

    #[must_use]
    pub fn foundations(&self) -> &[FoundationStack; 4] {
        &self.board.foundations
    }

    /// The drawn pile, most recently drawn card first.
    #[must_use]
    pub fn waste(&self) -> &VecDeque<Card> {
        &self.board.waste
    }

    /// Number of cards across the deck, tableau, foundations and drawn pile.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let foundations: usize = self.board.foundations.iter().map(FoundationStack::len).sum();
        self.board.deck.len() + self.board.tableau.len() + foundations + self.board.waste.len()
    }

    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            foundations: self
                .board
                .foundations
                .iter()
                .map(|stack| FoundationView {
                    suit: stack.suit(),
                    top: stack.top().copied(),
                    len: stack.len(),
                })
                .collect(),
            waste_top: self.board.waste.front().copied(),
            waste_len: self.board.waste.len(),
            deck_len: self.board.deck.len(),
            columns: self
                .board
                .tableau
                .columns()
                .iter()
                .map(|column| ColumnView {
                    hidden: column.hidden_len(),
                    visible: column.visible().to_vec(),
                })
                .collect(),
            status: self.status,
        }
    }
}

/// Start a new game with a freshly shuffled deck.
#[must_use]
pub fn new_game() -> Game {
    Game::new()
}
