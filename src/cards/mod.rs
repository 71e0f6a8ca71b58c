//! Card system: card values and the spider deck.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `Card`: immutable card values
//! - `SuitStyle`: Unicode or ASCII suit rendering
//! - `SuitVariant`: 1, 2 or 4 distinct suits across 104 cards
//! - `SpiderDeck`: build, shuffle, draw, drain

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit, SuitStyle};
pub use deck::{SpiderDeck, SuitVariant, SPIDER_DECK_SIZE};
