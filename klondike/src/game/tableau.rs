//! The seven-column play area.

use serde::{Deserialize, Serialize};

use super::entities::{Card, Deck, KING};
use super::errors::{GameError, GameResult};

pub const NUM_COLUMNS: usize = 7;

/// Number of cards consumed from the deck when dealing a tableau.
pub const DEAL_SIZE: usize = NUM_COLUMNS * (NUM_COLUMNS + 1) / 2;

/// A tableau column split into face-down (hidden) and face-up (visible)
/// cards. Only the last visible card can be taken or built upon.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Column {
    hidden: Vec<Card>,
    visible: Vec<Card>,
}

impl Column {
    /// Face-down cards, the next one to be revealed last.
    #[must_use]
    pub fn hidden(&self) -> &[Card] {
        &self.hidden
    }

    #[must_use]
    pub fn hidden_len(&self) -> usize {
        self.hidden.len()
    }

    #[must_use]
    pub fn visible(&self) -> &[Card] {
        &self.visible
    }

    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.visible.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hidden.len() + self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Tableau {
    columns: [Column; NUM_COLUMNS],
}

impl Tableau {
    /// Deal a tableau off the top of `deck`. Column `i` receives `i` hidden
    /// cards followed by a single visible card, one column after another.
    pub fn deal(deck: &mut Deck) -> GameResult<Self> {
        if deck.len() < DEAL_SIZE {
            return Err(GameError::EmptyDeck);
        }

        let mut columns: [Column; NUM_COLUMNS] = Default::default();
        for (i, column) in columns.iter_mut().enumerate() {
            for _ in 0..i {
                column.hidden.push(deck.draw()?);
            }
            column.visible.push(deck.draw()?);
        }
        Ok(Self { columns })
    }

    pub fn column(&self, column: usize) -> GameResult<&Column> {
        self.columns.get(column).ok_or(GameError::InvalidColumn)
    }

    #[must_use]
    pub fn columns(&self) -> &[Column; NUM_COLUMNS] {
        &self.columns
    }

    /// Total number of cards across every column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Place `card` on `column`. An empty column only takes a king; otherwise
    /// the card must be one rank lower than, and a different color from, the
    /// column's top card.
    pub fn put_in(&mut self, card: Card, column: usize) -> GameResult<()> {
        let column = self
            .columns
            .get_mut(column)
            .ok_or(GameError::InvalidColumn)?;

        match column.visible.last() {
            None if card.rank() != KING => return Err(GameError::WrongCard),
            None => {}
            Some(top) => {
                if top.color() == card.color() {
                    return Err(GameError::ColorMismatch);
                }
                if top.rank().checked_sub(1) != Some(card.rank()) {
                    return Err(GameError::WrongCard);
                }
            }
        }

        column.visible.push(card);
        Ok(())
    }

    /// Take the top visible card off `column`. Taking the last visible card
    /// turns the next hidden card (if any) face up.
    pub fn get_out(&mut self, column: usize) -> GameResult<Card> {
        let column = self
            .columns
            .get_mut(column)
            .ok_or(GameError::InvalidColumn)?;

        if column.visible.len() > 1 {
            return column.visible.pop().ok_or(GameError::EmptyColumn);
        }

        let card = column.visible.pop().ok_or(GameError::EmptyColumn)?;
        if let Some(revealed) = column.hidden.pop() {
            column.visible.push(revealed);
        }
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, Some(suit)).unwrap()
    }

    fn dealt() -> (Tableau, Deck) {
        let mut deck = Deck::default();
        let tableau = Tableau::deal(&mut deck).unwrap();
        (tableau, deck)
    }

    /// Tableau whose first column holds `hidden` face-down and `visible`
    /// face-up cards, all other columns empty.
    fn with_first_column(hidden: Vec<Card>, visible: Vec<Card>) -> Tableau {
        let mut columns: [Column; NUM_COLUMNS] = Default::default();
        columns[0] = Column { hidden, visible };
        Tableau { columns }
    }

    // === Deal Tests ===

    #[test]
    fn test_deal_shapes_columns() {
        let (tableau, deck) = dealt();
        for (i, column) in tableau.columns().iter().enumerate() {
            assert_eq!(column.hidden_len(), i);
            assert_eq!(column.visible().len(), 1);
        }
        assert_eq!(tableau.len(), DEAL_SIZE);
        assert_eq!(deck.len(), 24);
    }

    #[test]
    fn test_deal_draws_from_top_column_by_column() {
        let mut deck = Deck::default();
        let mut expected = deck.cards().to_vec();
        let (first, second_hidden, second_visible) = {
            let first = expected.pop().unwrap();
            let hidden = expected.pop().unwrap();
            let visible = expected.pop().unwrap();
            (first, hidden, visible)
        };

        let tableau = Tableau::deal(&mut deck).unwrap();
        assert_eq!(tableau.column(0).unwrap().visible(), &[first]);
        let column = tableau.column(1).unwrap();
        assert_eq!(column.hidden, vec![second_hidden]);
        assert_eq!(column.visible(), &[second_visible]);
    }

    #[test]
    fn test_deal_needs_enough_cards() {
        let mut deck = Deck::default();
        let ten = deck.cards()[..10].to_vec();
        deck.reset(Some(&ten));
        assert_eq!(Tableau::deal(&mut deck), Err(GameError::EmptyDeck));
        assert_eq!(deck.len(), 10);
    }

    // === put_in Tests ===

    #[test]
    fn test_put_in_invalid_column() {
        let (mut tableau, _) = dealt();
        assert_eq!(
            tableau.put_in(card(13, Suit::Spade), NUM_COLUMNS),
            Err(GameError::InvalidColumn)
        );
    }

    #[test]
    fn test_put_in_empty_column_takes_only_kings() {
        for rank in 1..=13 {
            let mut tableau = with_first_column(vec![], vec![]);
            let result = tableau.put_in(card(rank, Suit::Heart), 0);
            if rank == KING {
                assert_eq!(result, Ok(()));
                assert_eq!(tableau.column(0).unwrap().visible().len(), 1);
            } else {
                assert_eq!(result, Err(GameError::WrongCard));
                assert!(tableau.column(0).unwrap().is_empty());
            }
        }
    }

    #[test]
    fn test_put_in_alternating_colors() {
        let mut tableau = with_first_column(vec![], vec![card(9, Suit::Spade)]);
        assert_eq!(tableau.put_in(card(8, Suit::Heart), 0), Ok(()));
        assert_eq!(tableau.put_in(card(7, Suit::Club), 0), Ok(()));
        assert_eq!(tableau.column(0).unwrap().visible().len(), 3);
    }

    #[test]
    fn test_put_in_same_color() {
        let mut tableau = with_first_column(vec![], vec![card(9, Suit::Spade)]);
        assert_eq!(
            tableau.put_in(card(8, Suit::Club), 0),
            Err(GameError::ColorMismatch)
        );
    }

    #[test]
    fn test_put_in_wrong_rank() {
        let mut tableau = with_first_column(vec![], vec![card(9, Suit::Spade)]);
        assert_eq!(
            tableau.put_in(card(7, Suit::Heart), 0),
            Err(GameError::WrongCard)
        );
        assert_eq!(
            tableau.put_in(card(10, Suit::Heart), 0),
            Err(GameError::WrongCard)
        );
        assert_eq!(tableau.column(0).unwrap().visible(), &[card(9, Suit::Spade)]);
    }

    #[test]
    fn test_put_in_on_ace_never_fits() {
        let mut tableau = with_first_column(vec![], vec![card(1, Suit::Spade)]);
        assert_eq!(tableau.put_in(Card::joker(), 0), Err(GameError::WrongCard));
    }

    // === get_out Tests ===

    #[test]
    fn test_get_out_empty_column() {
        let mut tableau = with_first_column(vec![], vec![]);
        assert_eq!(tableau.get_out(0), Err(GameError::EmptyColumn));
    }

    #[test]
    fn test_get_out_invalid_column() {
        let (mut tableau, _) = dealt();
        assert_eq!(tableau.get_out(9), Err(GameError::InvalidColumn));
    }

    #[test]
    fn test_get_out_pops_top_of_run() {
        let mut tableau = with_first_column(
            vec![card(2, Suit::Club)],
            vec![card(9, Suit::Spade), card(8, Suit::Heart)],
        );
        assert_eq!(tableau.get_out(0), Ok(card(8, Suit::Heart)));
        let column = tableau.column(0).unwrap();
        assert_eq!(column.visible(), &[card(9, Suit::Spade)]);
        assert_eq!(column.hidden_len(), 1);
    }

    #[test]
    fn test_get_out_reveals_hidden_card() {
        let mut tableau = with_first_column(
            vec![card(2, Suit::Club), card(3, Suit::Diamond)],
            vec![card(9, Suit::Spade)],
        );
        assert_eq!(tableau.get_out(0), Ok(card(9, Suit::Spade)));
        let column = tableau.column(0).unwrap();
        assert_eq!(column.visible(), &[card(3, Suit::Diamond)]);
        assert_eq!(column.hidden_len(), 1);
        assert_eq!(column.len(), 2);
    }

    #[test]
    fn test_get_out_last_card_empties_column() {
        let mut tableau = with_first_column(vec![], vec![card(4, Suit::Heart)]);
        assert_eq!(tableau.get_out(0), Ok(card(4, Suit::Heart)));
        assert!(tableau.column(0).unwrap().is_empty());
        assert_eq!(tableau.get_out(0), Err(GameError::EmptyColumn));
    }
}
