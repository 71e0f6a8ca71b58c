//! Game configuration.
//!
//! A host configures a deal by providing a `GameConfig`:
//! - `suit_variant`: how many distinct suits the 104 cards use (difficulty)
//! - `history_capacity`: how many undo snapshots are retained
//! - `seed`: fixed seed for a reproducible deal, or `None` for a fresh one

use serde::{Deserialize, Serialize};

use super::error::SpiderError;
use crate::cards::SuitVariant;

/// Default number of undo snapshots retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 25;

/// Configuration for a single game of spider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Suit diversity of the deck.
    pub suit_variant: SuitVariant,

    /// Maximum snapshots kept for undo. Oldest are evicted first.
    pub history_capacity: usize,

    /// Shuffle seed. `None` draws a fresh seed at deal time.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            suit_variant: SuitVariant::TwoSuits,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration for the given suit variant with default settings.
    pub fn new(suit_variant: SuitVariant) -> Self {
        Self {
            suit_variant,
            ..Self::default()
        }
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the undo history capacity.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Check the configuration can produce a playable game.
    pub fn validate(&self) -> Result<(), SpiderError> {
        if self.history_capacity == 0 {
            return Err(SpiderError::InvalidConfig {
                reason: "history capacity must be at least 1",
            });
        }
        Ok(())
    }
}
