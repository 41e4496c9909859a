use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr, sync::LazyLock};

use super::errors::{GameError, GameResult};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Spade,
    Club,
    Heart,
    Diamond,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Heart | Self::Diamond => Color::Red,
            Self::Club | Self::Spade => Color::Black,
        }
    }

    /// Single-letter token used to name a suit's foundation.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Spade => 'S',
            Self::Club => 'C',
            Self::Heart => 'H',
            Self::Diamond => 'D',
        }
    }

    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.letter() == letter.to_ascii_uppercase())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Spade => "♠",
            Self::Club => "♣",
            Self::Heart => "♥",
            Self::Diamond => "♦",
        };
        write!(f, "{repr}")
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Color {
    Red,
    Black,
}

/// Card ranks run from ace=1 to king=13. A joker is depicted as 14.
pub type Rank = u8;

pub const ACE: Rank = 1;
pub const KING: Rank = 13;
pub const JOKER: Rank = 14;

/// An immutable playing card.
///
/// Suited cards have a rank in `ACE..=KING`; a joker has rank `JOKER` and
/// no suit. Construction through [`Card::new`] enforces this.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card {
    rank: Rank,
    suit: Option<Suit>,
}

impl Card {
    pub fn new(rank: Rank, suit: Option<Suit>) -> GameResult<Self> {
        match (rank, suit) {
            (ACE..=KING, Some(_)) => Ok(Self { rank, suit }),
            (JOKER, None) => Ok(Self { rank, suit }),
            (JOKER, Some(_)) => Err(GameError::InvalidJoker),
            _ => Err(GameError::InvalidRank),
        }
    }

    #[must_use]
    pub const fn joker() -> Self {
        Self {
            rank: JOKER,
            suit: None,
        }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Red for hearts and diamonds, black for clubs and spades, none for a
    /// joker.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        match self.suit {
            Some(suit) => Some(suit.color()),
            None => None,
        }
    }

    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank == JOKER
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rank = match self.rank {
            ACE => "A",
            11 => "J",
            12 => "Q",
            KING => "K",
            JOKER => "JKR",
            v => &v.to_string(),
        };
        let suit = self.suit.map(|suit| suit.to_string()).unwrap_or_default();
        let repr = format!("{rank}{suit}");
        write!(f, "{repr:>3}")
    }
}

// Deserialized cards go through the same validation as constructed ones.
impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawCard {
            rank: Rank,
            suit: Option<Suit>,
        }

        let raw = RawCard::deserialize(deserializer)?;
        Self::new(raw.rank, raw.suit).map_err(serde::de::Error::custom)
    }
}

/// Number of cards in a standard deck without jokers.
pub const STANDARD_DECK_SIZE: usize = 52;

/// The one standard deck every new deck starts as a copy of.
static STANDARD_DECK: LazyLock<Vec<Card>> = LazyLock::new(|| {
    [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond]
        .into_iter()
        .flat_map(|suit| (ACE..=KING).map(move |rank| Card { rank, suit: Some(suit) }))
        .collect()
});

/// An ordered pool of cards. The top of the deck is the end of the
/// sequence.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A standard deck with `jokers` jokers placed on top.
    #[must_use]
    pub fn with_jokers(jokers: usize) -> Self {
        let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE + jokers);
        cards.extend_from_slice(&STANDARD_DECK);
        cards.extend(std::iter::repeat_n(Card::joker(), jokers));
        Self { cards }
    }

    pub fn draw(&mut self) -> GameResult<Card> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn insert_top(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn insert_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Shuffle the whole deck `times` times in a row. Zero times leaves the
    /// deck untouched.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, times: i32, rng: &mut R) -> GameResult<()> {
        if times < 0 {
            return Err(GameError::NegativeShuffleCount);
        }
        for _ in 0..times {
            self.cards.shuffle(rng);
        }
        Ok(())
    }

    /// Replace the deck's contents with a fresh standard deck, or with a
    /// verbatim copy of `source`. The composition of `source` isn't checked.
    pub fn reset(&mut self, source: Option<&[Card]>) {
        self.cards.clear();
        match source {
            Some(cards) => self.cards.extend_from_slice(cards),
            None => self.cards.extend_from_slice(&STANDARD_DECK),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::with_jokers(0)
    }
}

/// Where a card can be moved from or to: a tableau column (zero-based
/// index, labelled 1-7), the drawn pile, or a suit's foundation.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Place {
    Column(usize),
    Drawn,
    Foundation(Suit),
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Column(idx) => write!(f, "{}", idx + 1),
            Self::Drawn => write!(f, "drawn"),
            Self::Foundation(suit) => write!(f, "{}", suit.letter()),
        }
    }
}

impl FromStr for Place {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("drawn") {
            return Ok(Self::Drawn);
        }

        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c @ '1'..='7'), None) => Ok(Self::Column(usize::from(c as u8 - b'1'))),
            (Some(c), None) => Suit::from_letter(c)
                .map(Self::Foundation)
                .ok_or(GameError::InvalidPlace),
            _ => Err(GameError::InvalidPlace),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
        };
        write!(f, "{repr}")
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FoundationView {
    pub suit: Suit,
    pub top: Option<Card>,
    pub len: usize,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ColumnView {
    /// Number of face-down cards.
    pub hidden: usize,
    pub visible: Vec<Card>,
}

/// Read-only snapshot of everything a renderer needs to draw the board.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameView {
    pub foundations: Vec<FoundationView>,
    pub waste_top: Option<Card>,
    pub waste_len: usize,
    pub deck_len: usize,
    pub columns: Vec<ColumnView>,
    pub status: GameStatus,
}

impl GameView {
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let foundations: usize = self.foundations.iter().map(|f| f.len).sum();
        let columns: usize = self
            .columns
            .iter()
            .map(|c| c.hidden + c.visible.len())
            .sum();
        foundations + columns + self.waste_len + self.deck_len
    }
}
