//! The 104-card spider deck.
//!
//! Spider always plays with 104 cards. The suit variant only changes how
//! many distinct suits those cards use:
//!
//! | Variant     | Suits | Copies of each suit |
//! |-------------|-------|---------------------|
//! | `OneSuit`   | 1     | 8                   |
//! | `TwoSuits`  | 2     | 4                   |
//! | `FourSuits` | 4     | 2                   |
//!
//! The top of the deck is the end of the sequence.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::card::{Card, Rank, Suit};
use crate::core::{DealRng, DeckError};

/// Cards in a spider deck, whatever the suit variant.
pub const SPIDER_DECK_SIZE: usize = 104;

/// Suit diversity of a spider deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitVariant {
    /// Spades only, eight copies.
    OneSuit,
    /// Spades and hearts, four copies each.
    #[default]
    TwoSuits,
    /// All four suits, two copies each.
    FourSuits,
}

impl SuitVariant {
    /// The distinct suits in play.
    #[must_use]
    pub fn suits(self) -> &'static [Suit] {
        match self {
            SuitVariant::OneSuit => &Suit::ALL[..1],
            SuitVariant::TwoSuits => &Suit::ALL[..2],
            SuitVariant::FourSuits => &Suit::ALL,
        }
    }

    /// How many times each distinct suit's Ace..King is repeated.
    #[must_use]
    pub fn copies_per_suit(self) -> usize {
        match self {
            SuitVariant::OneSuit => 8,
            SuitVariant::TwoSuits => 4,
            SuitVariant::FourSuits => 2,
        }
    }

    /// How many times each distinct card value occurs in the deck.
    ///
    /// Equal to [`copies_per_suit`](Self::copies_per_suit): every copy of a
    /// suit contributes one of each rank.
    #[must_use]
    pub fn copies_per_card(self) -> usize {
        self.copies_per_suit()
    }
}

/// An ordered pool of cards with draw and drain operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpiderDeck {
    cards: Vec<Card>,
}

impl SpiderDeck {
    /// Build the unshuffled 104-card deck for a suit variant.
    #[must_use]
    pub fn new(variant: SuitVariant) -> Self {
        let mut cards = Vec::with_capacity(SPIDER_DECK_SIZE);

        for _ in 0..variant.copies_per_suit() {
            for &suit in variant.suits() {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        Self { cards }
    }

    /// Wrap an arbitrary card list. The top is the last element.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffle into a uniformly random order.
    #[instrument(skip_all, fields(seed = rng.seed()))]
    pub fn shuffle(&mut self, rng: &mut DealRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }

    /// Remove and return every remaining card, in current order.
    pub fn draw_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn counts(cards: &[Card]) -> FxHashMap<Card, usize> {
        let mut map = FxHashMap::default();
        for &card in cards {
            *map.entry(card).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn test_every_variant_has_104_cards() {
        for variant in [SuitVariant::OneSuit, SuitVariant::TwoSuits, SuitVariant::FourSuits] {
            assert_eq!(SpiderDeck::new(variant).len(), SPIDER_DECK_SIZE);
        }
    }

    #[test]
    fn test_composition() {
        let cases = [
            (SuitVariant::OneSuit, 13, 8),
            (SuitVariant::TwoSuits, 26, 4),
            (SuitVariant::FourSuits, 52, 2),
        ];

        for (variant, distinct, copies) in cases {
            let deck = SpiderDeck::new(variant);
            let counts = counts(deck.cards());
            assert_eq!(counts.len(), distinct, "{variant:?}");
            assert!(counts.values().all(|&c| c == copies), "{variant:?}");
            assert!(counts.keys().all(|card| variant.suits().contains(&card.suit)));
        }
    }

    #[test]
    fn test_draw_takes_from_top() {
        let mut deck = SpiderDeck::new(SuitVariant::FourSuits);
        let expected_top = *deck.cards().last().unwrap();

        let drawn = deck.draw().unwrap();
        assert_eq!(drawn, expected_top);
        assert_eq!(deck.len(), SPIDER_DECK_SIZE - 1);
    }

    #[test]
    fn test_draw_empty_fails() {
        let mut deck = SpiderDeck::from_cards(vec![Card::new(Suit::Spades, Rank::Ace)]);
        assert!(deck.draw().is_ok());
        assert_eq!(deck.draw(), Err(DeckError::EmptyDeck));
    }

    #[test]
    fn test_draw_all_empties_deck() {
        let mut deck = SpiderDeck::new(SuitVariant::TwoSuits);
        for _ in 0..54 {
            deck.draw().unwrap();
        }
        let before = deck.cards().to_vec();

        let rest = deck.draw_all();
        assert_eq!(rest, before);
        assert!(deck.is_empty());
        assert!(deck.draw_all().is_empty());
    }

    #[test]
    fn test_shuffle_changes_order() {
        let mut deck = SpiderDeck::new(SuitVariant::FourSuits);
        let original = deck.clone();

        deck.shuffle(&mut DealRng::new(42));

        assert_ne!(deck, original);
        assert_eq!(counts(deck.cards()), counts(original.cards()));
    }
}
