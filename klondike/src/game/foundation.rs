//! Per-suit home piles, built up from Ace to King.

use serde::{Deserialize, Serialize};

use super::entities::{ACE, Card, KING, Suit};
use super::errors::{GameError, GameResult};

/// An ascending, single-suit stack built from ace to king.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FoundationStack {
    suit: Suit,
    cards: Vec<Card>,
}

impl FoundationStack {
    #[must_use]
    pub fn new(suit: Suit) -> Self {
        Self {
            suit,
            cards: Vec::with_capacity(usize::from(KING)),
        }
    }

    pub fn push(&mut self, card: Card) -> GameResult<()> {
        if card.suit() != Some(self.suit) {
            return Err(GameError::WrongSuit);
        }

        let next = self.cards.last().map_or(ACE, |top| top.rank() + 1);
        if card.rank() != next {
            return Err(GameError::WrongCard);
        }

        self.cards.push(card);
        Ok(())
    }

    pub fn pull(&mut self) -> GameResult<Card> {
        self.cards.pop().ok_or(GameError::EmptyFoundation)
    }

    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Holds every rank of its suit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == usize::from(KING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(rank, Some(suit)).unwrap()
    }

    fn filled(suit: Suit, up_to: u8) -> FoundationStack {
        let mut stack = FoundationStack::new(suit);
        for rank in ACE..=up_to {
            stack.push(card(rank, suit)).unwrap();
        }
        stack
    }

    #[test]
    fn test_empty_stack_takes_only_aces() {
        for rank in ACE..=KING {
            let mut stack = FoundationStack::new(Suit::Club);
            let result = stack.push(card(rank, Suit::Club));
            assert_eq!(result.is_ok(), rank == ACE);
            if rank != ACE {
                assert_eq!(result, Err(GameError::WrongCard));
            }
        }
    }

    #[test]
    fn test_push_wrong_suit() {
        let mut stack = FoundationStack::new(Suit::Heart);
        assert_eq!(
            stack.push(card(ACE, Suit::Diamond)),
            Err(GameError::WrongSuit)
        );
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_joker_is_wrong_suit() {
        let mut stack = FoundationStack::new(Suit::Spade);
        assert_eq!(stack.push(Card::joker()), Err(GameError::WrongSuit));
    }

    #[test]
    fn test_push_must_be_next_rank() {
        let mut stack = filled(Suit::Spade, 3);
        assert_eq!(stack.push(card(5, Suit::Spade)), Err(GameError::WrongCard));
        assert_eq!(stack.push(card(3, Suit::Spade)), Err(GameError::WrongCard));
        assert_eq!(stack.push(card(4, Suit::Spade)), Ok(()));
        assert_eq!(stack.top(), Some(&card(4, Suit::Spade)));
    }

    #[test]
    fn test_pull() {
        let mut stack = filled(Suit::Diamond, 2);
        assert_eq!(stack.pull(), Ok(card(2, Suit::Diamond)));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_pull_empty() {
        let mut stack = FoundationStack::new(Suit::Diamond);
        assert_eq!(stack.pull(), Err(GameError::EmptyFoundation));
    }

    #[test]
    fn test_complete() {
        assert!(!filled(Suit::Heart, 12).is_complete());
        let stack = filled(Suit::Heart, KING);
        assert!(stack.is_complete());
        assert_eq!(stack.suit(), Suit::Heart);
    }
}
