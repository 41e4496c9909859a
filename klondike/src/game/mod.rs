//! Klondike game engine - cards, piles and the game orchestrator.
//!
//! This module provides the whole rules engine:
//! - Cards, suits and the deck
//! - The seven-column tableau with hidden/visible splits
//! - Per-suit foundations
//! - Transactional moves, three-card draws and waste resets

pub mod entities;
pub mod errors;
pub mod foundation;
pub mod state_machine;
pub mod tableau;

pub use errors::{GameError, GameResult};
pub use state_machine::{
    DEFAULT_SHUFFLES, DRAW_COUNT, FOUNDATION_ORDER, Game, GameSettings, new_game,
};
