//! Game error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every rule violation the engine can report.
///
/// Errors raised while constructing values (`InvalidRank`, `InvalidJoker`,
/// `NegativeShuffleCount`) indicate caller mistakes. Errors raised by a move
/// are recoverable: the game state is rolled back before they're returned.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Error, Hash, PartialEq, Serialize)]
pub enum GameError {
    #[error("invalid card rank")]
    InvalidRank,
    #[error("a joker can't have a suit")]
    InvalidJoker,
    #[error("deck is empty")]
    EmptyDeck,
    #[error("can't shuffle a negative number of times")]
    NegativeShuffleCount,
    #[error("invalid column")]
    InvalidColumn,
    #[error("column has no cards")]
    EmptyColumn,
    #[error("card doesn't fit there")]
    WrongCard,
    #[error("can't put the same color on each other")]
    ColorMismatch,
    #[error("wrong suit for that foundation")]
    WrongSuit,
    #[error("foundation is empty")]
    EmptyFoundation,
    #[error("nothing to take from the drawn pile")]
    EmptyWaste,
    #[error("invalid place, use 1-7, drawn, S, D, C or H")]
    InvalidPlace,
    #[error("can't put cards back onto the drawn pile")]
    MoveToDrawDisallowed,
    #[error("deck isn't empty")]
    DeckNotEmpty,
    #[error("deck ran out of cards while drawing")]
    DeckExhaustedDuringDraw,
}

impl GameError {
    /// Whether this error is a rule violation during play, as opposed to a
    /// caller mistake at construction time.
    #[must_use]
    pub const fn is_rule_violation(&self) -> bool {
        !matches!(
            self,
            Self::InvalidRank | Self::InvalidJoker | Self::NegativeShuffleCount
        )
    }
}

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;
