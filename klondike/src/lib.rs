//! # Klondike
//!
//! A single-player Klondike solitaire engine with a three-card draw.
//!
//! The engine models a standard deck, a tableau of seven columns split into
//! hidden and visible cards, four suit foundations and the drawn (waste)
//! pile, and enforces the legal-move rules of the game. Every rule violation
//! is reported as a [`GameError`]; a move that breaks a rule leaves the game
//! exactly as it was.
//!
//! ## Core Modules
//!
//! - [`game::entities`]: cards, the deck, places and read-only views
//! - [`game::tableau`]: the seven-column play area
//! - [`game::foundation`]: per-suit foundation stacks
//! - [`game::state_machine`]: the [`Game`] orchestrator
//!
//! ## Example
//!
//! ```
//! use klondike::{Game, GameSettings, entities::Place};
//!
//! let mut game = Game::from_settings(GameSettings::new(Some(7), 5)).unwrap();
//! game.draw_three().unwrap();
//! assert_eq!(game.deck().len(), 21);
//!
//! // Moves either fully succeed or leave the game untouched.
//! let before = game.clone();
//! if game.move_card(Place::Drawn, Place::Column(0)).is_err() {
//!     assert_eq!(game, before);
//! }
//! ```

/// Core game logic, entities, and the game orchestrator.
pub mod game;
pub use game::{
    DEFAULT_SHUFFLES, DRAW_COUNT, FOUNDATION_ORDER, Game, GameError, GameResult, GameSettings,
    entities::{self, Card, Deck, GameStatus, GameView, Place, Suit},
    foundation::FoundationStack,
    new_game,
    tableau::{self, Tableau},
};
