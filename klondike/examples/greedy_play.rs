//! Greedy Play Example
//!
//! Plays a seeded game by always taking the first legal move it finds and
//! drawing when stuck. Shows how the engine reports rule violations.

use klondike::{FOUNDATION_ORDER, Game, GameError, GameSettings, GameStatus, Place};

fn main() {
    println!("=== Klondike Greedy Play Example ===\n");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2024);
    let mut game = Game::from_settings(GameSettings::new(Some(seed), 5)).unwrap();

    let places: Vec<Place> = (0..7)
        .map(Place::Column)
        .chain(std::iter::once(Place::Drawn))
        .chain(FOUNDATION_ORDER.into_iter().map(Place::Foundation))
        .collect();

    // Example 1: a move that breaks a rule leaves the game untouched
    println!("Example 1: an illegal move");
    let before = game.clone();
    let result = game.move_card(Place::Foundation(FOUNDATION_ORDER[0]), Place::Column(0));
    println!("Result: {result:?}, unchanged: {}\n", game == before);

    // Example 2: greedy play
    println!("Example 2: greedy play with seed {seed}");
    let mut moves = 0;
    let mut idle_cycles = 0;
    while game.status() == GameStatus::InProgress && idle_cycles < 2 {
        // Only move cards home or out of the drawn pile so play can't loop.
        let found = places.iter().any(|&from| {
            places.iter().any(|&to| {
                let useful = matches!(to, Place::Foundation(_)) || from == Place::Drawn;
                useful && game.move_card(from, to).is_ok()
            })
        });
        if found {
            moves += 1;
            idle_cycles = 0;
            continue;
        }

        match game.draw_three() {
            Ok(()) | Err(GameError::DeckExhaustedDuringDraw) => {}
            Err(GameError::EmptyDeck) => {
                idle_cycles += 1;
                let _ = game.reset_waste_to_deck();
            }
            Err(err) => println!("unexpected: {err}"),
        }
    }

    let view = game.view();
    let home: usize = view.foundations.iter().map(|f| f.len).sum();
    println!("Moves made: {moves}");
    println!("Cards on foundations: {home}");
    println!("Status: {}", game.status());
}
