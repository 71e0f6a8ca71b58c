//! A single tableau pile.
//!
//! Index 0 is the bottom card, the last index is the top card (nearest the
//! player). Cards are stored in an `im::Vector` so cloning a pile for an
//! undo snapshot shares structure instead of copying every card.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PileError;

/// A card at a position in a pile, with its orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInPile {
    pub card: Card,
    pub face_up: bool,
}

impl CardInPile {
    /// Create a pile entry.
    #[must_use]
    pub const fn new(card: Card, face_up: bool) -> Self {
        Self { card, face_up }
    }

    /// A face-up entry.
    #[must_use]
    pub const fn up(card: Card) -> Self {
        Self::new(card, true)
    }

    /// A face-down entry.
    #[must_use]
    pub const fn down(card: Card) -> Self {
        Self::new(card, false)
    }
}

/// An ordered stack of cards with orientation.
///
/// ## Usage
///
/// ```
/// use spider_engine::cards::{Card, Rank, Suit};
/// use spider_engine::zones::{CardInPile, Pile};
///
/// let mut pile = Pile::new();
/// pile.add_card(Card::new(Suit::Spades, Rank::Jack), false);
/// pile.add_card(Card::new(Suit::Spades, Rank::Ten), true);
///
/// let moved = pile.remove_cards_from(1).unwrap();
/// assert_eq!(moved, vec![CardInPile::up(Card::new(Suit::Spades, Rank::Ten))]);
///
/// assert!(pile.flip_top_card_if_face_down().unwrap());
/// assert!(pile.top_card().unwrap().face_up);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<CardInPile>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pile from entries, bottom first.
    pub fn from_cards(cards: impl IntoIterator<Item = CardInPile>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Push a card onto the top.
    pub fn add_card(&mut self, card: Card, face_up: bool) {
        self.cards.push_back(CardInPile::new(card, face_up));
    }

    /// Append many entries onto the top, preserving their order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = CardInPile>) {
        self.cards.extend(cards);
    }

    /// Peek at the top card.
    pub fn top_card(&self) -> Result<CardInPile, PileError> {
        self.cards.back().copied().ok_or(PileError::Empty)
    }

    /// Copy of every entry, bottom first.
    ///
    /// The returned vector is independent of the pile.
    #[must_use]
    pub fn cards(&self) -> Vec<CardInPile> {
        self.cards.iter().copied().collect()
    }

    /// Borrowing iterator, bottom first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &CardInPile> + ExactSizeIterator + '_ {
        self.cards.iter()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the pile holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Can `sequence` be placed on this pile?
    ///
    /// An empty pile takes any non-empty sequence. Otherwise the top card
    /// must be exactly one rank above the sequence's first card. Suit does
    /// not matter for placement.
    #[must_use]
    pub fn can_accept(&self, sequence: &[CardInPile]) -> bool {
        let Some(first) = sequence.first() else {
            return false;
        };

        match self.cards.back() {
            None => true,
            Some(top) => top.card.rank.is_one_above(first.card.rank),
        }
    }

    /// Detach and return the cards from `start` to the top.
    ///
    /// Fails without touching the pile if `start` is outside `[0, len)`.
    pub fn remove_cards_from(&mut self, start: usize) -> Result<Vec<CardInPile>, PileError> {
        if start >= self.cards.len() {
            return Err(PileError::InvalidStartIndex {
                index: start,
                len: self.cards.len(),
            });
        }

        let removed = self.cards.split_off(start);
        Ok(removed.into_iter().collect())
    }

    /// Turn the top card face up if it is face down.
    ///
    /// Returns whether a card was flipped. An empty pile or an already
    /// face-up top is a no-op.
    pub fn flip_top_card_if_face_down(&mut self) -> Result<bool, PileError> {
        match self.cards.back_mut() {
            Some(top) if !top.face_up => {
                top.face_up = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn up(suit: Suit, rank: Rank) -> CardInPile {
        CardInPile::up(Card::new(suit, rank))
    }

    fn down(suit: Suit, rank: Rank) -> CardInPile {
        CardInPile::down(Card::new(suit, rank))
    }

    #[test]
    fn test_add_and_top() {
        let mut pile = Pile::new();
        assert_eq!(pile.top_card(), Err(PileError::Empty));

        pile.add_card(Card::new(Suit::Hearts, Rank::Five), false);
        pile.add_card(Card::new(Suit::Hearts, Rank::Four), true);

        assert_eq!(pile.len(), 2);
        assert_eq!(pile.top_card(), Ok(up(Suit::Hearts, Rank::Four)));
    }

    #[test]
    fn test_cards_is_defensive_copy() {
        let mut pile = Pile::from_cards([up(Suit::Spades, Rank::Nine)]);

        let mut copy = pile.cards();
        copy[0].face_up = false;
        copy.push(up(Suit::Spades, Rank::Eight));

        assert_eq!(pile.len(), 1);
        assert!(pile.top_card().unwrap().face_up);

        pile.add_card(Card::new(Suit::Clubs, Rank::Two), true);
        assert_eq!(copy.len(), 2);
        assert_eq!(copy[1], up(Suit::Spades, Rank::Eight));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut pile = Pile::from_cards([down(Suit::Spades, Rank::King), up(Suit::Spades, Rank::Two)]);
        let snapshot = pile.clone();

        pile.remove_cards_from(1).unwrap();
        pile.flip_top_card_if_face_down().unwrap();

        assert_eq!(snapshot.len(), 2);
        assert!(!snapshot.iter().next().unwrap().face_up);
    }

    #[test]
    fn test_can_accept() {
        let empty = Pile::new();
        assert!(empty.can_accept(&[up(Suit::Hearts, Rank::Three)]));
        assert!(!empty.can_accept(&[]));

        let jack = Pile::from_cards([up(Suit::Spades, Rank::Jack)]);
        assert!(jack.can_accept(&[up(Suit::Spades, Rank::Ten), up(Suit::Spades, Rank::Nine)]));
        // Cross-suit placement
        assert!(jack.can_accept(&[up(Suit::Hearts, Rank::Ten)]));
        assert!(!jack.can_accept(&[up(Suit::Spades, Rank::Nine)]));
        assert!(!jack.can_accept(&[up(Suit::Spades, Rank::Queen)]));
    }

    #[test]
    fn test_remove_cards_from() {
        let mut pile = Pile::from_cards([
            down(Suit::Clubs, Rank::Ace),
            up(Suit::Spades, Rank::Ten),
            up(Suit::Spades, Rank::Nine),
        ]);

        let removed = pile.remove_cards_from(1).unwrap();
        assert_eq!(removed, vec![up(Suit::Spades, Rank::Ten), up(Suit::Spades, Rank::Nine)]);
        assert_eq!(pile.len(), 1);

        assert_eq!(
            pile.remove_cards_from(1),
            Err(PileError::InvalidStartIndex { index: 1, len: 1 })
        );
        assert_eq!(pile.len(), 1);

        let all = pile.remove_cards_from(0).unwrap();
        assert_eq!(all.len(), 1);
        assert!(pile.is_empty());
    }

    #[test]
    fn test_add_cards_restores_removed() {
        let original = Pile::from_cards([up(Suit::Hearts, Rank::Six), up(Suit::Hearts, Rank::Five)]);
        let mut pile = original.clone();

        let removed = pile.remove_cards_from(0).unwrap();
        pile.add_cards(removed);

        assert_eq!(pile, original);
    }

    #[test]
    fn test_flip_is_idempotent() {
        let mut empty = Pile::new();
        assert_eq!(empty.flip_top_card_if_face_down(), Ok(false));

        let mut pile = Pile::from_cards([down(Suit::Diamonds, Rank::Queen)]);
        assert_eq!(pile.flip_top_card_if_face_down(), Ok(true));
        assert_eq!(pile.flip_top_card_if_face_down(), Ok(false));
        assert!(pile.top_card().unwrap().face_up);
    }
}
