//! # spider-engine
//!
//! Rule engine for Spider Solitaire: dealing, move validation, run
//! completion, win/loss detection and bounded undo.
//!
//! ## Design Principles
//!
//! 1. **Atomic operations**: every mutating call either succeeds completely
//!    or leaves the game exactly as it was, and reports a typed error.
//!
//! 2. **Cheap snapshots**: piles, stock and completed runs live in `im-rs`
//!    persistent vectors, so undo snapshots share structure with the live
//!    state.
//!
//! 3. **No globals**: randomness comes from a seedable per-game RNG and
//!    observation goes through an injected [`EventSink`].
//!
//! ## Modules
//!
//! - `core`: errors, configuration, deal RNG
//! - `cards`: suits, ranks, cards, the 104-card deck
//! - `zones`: piles and the ten-pile tableau
//! - `rules`: sequence shape checks and terminal detection
//! - `game`: game state, undo history, renderer views
//! - `events`: observer hook for hosts

pub mod cards;
pub mod core;
pub mod events;
pub mod game;
pub mod rules;
pub mod zones;

pub use crate::cards::{Card, Rank, SpiderDeck, Suit, SuitStyle, SuitVariant, SPIDER_DECK_SIZE};
pub use crate::core::{DealRng, DeckError, GameConfig, PileError, SpiderError};
pub use crate::events::{EventSink, GameEvent};
pub use crate::game::{CardView, GameState, GameView, PileView, Run};
pub use crate::rules::{RUNS_TO_WIN, RUN_LENGTH};
pub use crate::zones::{CardInPile, Pile, Tableau, TABLEAU_PILES};
