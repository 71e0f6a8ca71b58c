//! Core engine plumbing: RNG, configuration, errors.
//!
//! Nothing here knows the rules of spider; it is the ambient layer the
//! card, pile and game modules build on.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, DEFAULT_HISTORY_CAPACITY};
pub use error::{DeckError, PileError, SpiderError};
pub use rng::DealRng;
