//! Shared helpers for arranging deals in integration tests.

#![allow(dead_code)]

use klondike::{Card, Deck, Suit};

pub fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, Some(suit)).unwrap()
}

/// Index in deal order of column `column`'s visible card.
pub fn visible_slot(column: usize) -> usize {
    column * (column + 1) / 2 + column
}

/// A standard deck arranged so the `i`-th card drawn is `draw_order[i]`,
/// followed by the remaining standard cards in their usual order.
pub fn deck_drawing(draw_order: &[Card]) -> Deck {
    let mut cards: Vec<Card> = Deck::default()
        .cards()
        .iter()
        .copied()
        .filter(|c| !draw_order.contains(c))
        .collect();
    cards.extend(draw_order.iter().rev());
    let mut deck = Deck::default();
    deck.reset(Some(&cards));
    deck
}

/// A standard deck that draws each `placed` card at the given position
/// (counting from the first card dealt) and fills every other position from
/// the rest of the deck, kings of diamonds first.
pub fn deck_with_slots(placed: &[(usize, Card)]) -> Deck {
    let reserved: Vec<Card> = placed.iter().map(|(_, c)| *c).collect();
    let standard = Deck::default();
    let mut filler = standard
        .cards()
        .iter()
        .copied()
        .filter(|c| !reserved.contains(c))
        .rev();

    let last_slot = placed.iter().map(|(s, _)| *s).max().unwrap_or(0).max(27);
    let mut order = Vec::with_capacity(last_slot + 1);
    for slot in 0..=last_slot {
        match placed.iter().find(|(s, _)| *s == slot) {
            Some((_, c)) => order.push(*c),
            None => order.extend(filler.next()),
        }
    }
    deck_drawing(&order)
}
