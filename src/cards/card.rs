//! Card values: suit, rank, and display helpers.
//!
//! A `Card` is an immutable value. Orientation (face up or down) belongs to
//! the card's position in a pile, see [`CardInPile`](crate::zones::CardInPile).

use serde::{Deserialize, Serialize};

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

/// How suits are rendered in text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuitStyle {
    /// ♠ ♥ ♦ ♣
    #[default]
    Unicode,
    /// S H D C
    Ascii,
}

impl Suit {
    /// All suits, in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Full suit name ("Spades").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }

    /// Single-glyph symbol in the requested style.
    #[must_use]
    pub const fn symbol(self, style: SuitStyle) -> &'static str {
        match (style, self) {
            (SuitStyle::Unicode, Suit::Spades) => "♠",
            (SuitStyle::Unicode, Suit::Hearts) => "♥",
            (SuitStyle::Unicode, Suit::Diamonds) => "♦",
            (SuitStyle::Unicode, Suit::Clubs) => "♣",
            (SuitStyle::Ascii, Suit::Spades) => "S",
            (SuitStyle::Ascii, Suit::Hearts) => "H",
            (SuitStyle::Ascii, Suit::Diamonds) => "D",
            (SuitStyle::Ascii, Suit::Clubs) => "C",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, Ace (1) through King (13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, Ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, 1..=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank from its numeric value, `None` outside 1..=13.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Rank> {
        if value >= 1 && value <= 13 {
            Some(Rank::ALL[(value - 1) as usize])
        } else {
            None
        }
    }

    /// True if `self` is exactly one rank above `other`.
    #[must_use]
    pub const fn is_one_above(self, other: Rank) -> bool {
        self.value() == other.value() + 1
    }

    /// Short name: "A", "2".."10", "J", "Q", "K".
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Long name: "Ace", "2".."10", "Jack", "Queen", "King".
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            other => other.short_name(),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card. Equality is structural: two cards of the same suit and
/// rank are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Short rank label, as printed on the card corner.
    #[must_use]
    pub const fn rank_name(&self) -> &'static str {
        self.rank.short_name()
    }

    /// Suit symbol in the given style.
    #[must_use]
    pub const fn suit_symbol(&self, style: SuitStyle) -> &'static str {
        self.suit.symbol(style)
    }

    /// Compact label such as "10♠" or "QH".
    #[must_use]
    pub fn label(&self, style: SuitStyle) -> String {
        format!("{}{}", self.rank_name(), self.suit_symbol(style))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::from_value(10), Some(Rank::Ten));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);

        for rank in Rank::ALL {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }
    }

    #[test]
    fn test_is_one_above() {
        assert!(Rank::Jack.is_one_above(Rank::Ten));
        assert!(Rank::Two.is_one_above(Rank::Ace));
        assert!(!Rank::Ten.is_one_above(Rank::Jack));
        assert!(!Rank::Queen.is_one_above(Rank::Ten));
    }

    #[test]
    fn test_display() {
        let card = Card::new(Suit::Clubs, Rank::King);
        assert_eq!(card.to_string(), "King of Clubs");
        assert_eq!(Card::new(Suit::Hearts, Rank::Seven).to_string(), "7 of Hearts");
    }

    #[test]
    fn test_label_styles() {
        let ten = Card::new(Suit::Spades, Rank::Ten);
        assert_eq!(ten.label(SuitStyle::Unicode), "10♠");
        assert_eq!(ten.label(SuitStyle::Ascii), "10S");

        let queen = Card::new(Suit::Hearts, Rank::Queen);
        assert_eq!(queen.label(SuitStyle::Ascii), "QH");
        assert_eq!(queen.rank_name(), "Q");
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(
            Card::new(Suit::Diamonds, Rank::Four),
            Card::new(Suit::Diamonds, Rank::Four)
        );
        assert_ne!(
            Card::new(Suit::Diamonds, Rank::Four),
            Card::new(Suit::Hearts, Rank::Four)
        );
    }
}
