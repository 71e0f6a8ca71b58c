//! Error types for the spider engine.
//!
//! Three families, mirroring where a failure originates:
//!
//! - **Setup**: the deck did not produce the cards a deal needs
//! - **Validation**: the caller asked for something illegal; state is untouched
//! - **Internal consistency**: a post-condition failed after validation passed,
//!   which means an engine bug. State is still left uncorrupted.
//!
//! Every kind is a variant with a structured payload so callers can branch
//! on it without string matching.

use derive_more::{Display, Error};

/// Errors raised by [`SpiderDeck`](crate::cards::SpiderDeck).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum DeckError {
    /// Tried to draw from a deck with no cards left.
    #[display("deck is empty")]
    EmptyDeck,
}

/// Errors raised by [`Pile`](crate::zones::Pile) primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum PileError {
    /// Peeked at an empty pile.
    #[display("pile is empty")]
    Empty,

    /// Slice start outside `[0, len)`.
    #[display("start index {index} out of range for pile of {len} cards")]
    InvalidStartIndex { index: usize, len: usize },
}

/// Errors returned by [`GameState`](crate::game::GameState) operations.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum SpiderError {
    // === Setup ===
    /// The deck did not contain exactly the number of cards a deal needs.
    #[display("not enough cards to start spider: expected {expected}, found {found}")]
    InsufficientCards { expected: usize, found: usize },

    /// Drawing from the deck failed while dealing.
    #[display("deal failed: {source}")]
    Deck { source: DeckError },

    /// The configuration cannot produce a playable game.
    #[display("invalid configuration: {reason}")]
    InvalidConfig {
        #[error(not(source))]
        reason: &'static str,
    },

    // === Validation ===
    /// Fewer than ten cards remain in the stock.
    #[display("not enough cards in stock to deal a row: {available} left")]
    InsufficientStock { available: usize },

    /// Source pile index outside the tableau.
    #[display("invalid source pile index {index}")]
    InvalidSourceIndex { index: usize },

    /// Destination pile index outside the tableau.
    #[display("invalid destination pile index {index}")]
    InvalidDestinationIndex { index: usize },

    /// Source and destination are the same pile.
    #[display("cannot move cards within the same pile")]
    SamePileMove,

    /// Start index outside the source pile.
    #[display("invalid start index {index} for pile of {len} cards")]
    InvalidStartIndex { index: usize, len: usize },

    /// The selected slice is empty.
    #[display("no cards to move")]
    NoCardsToMove,

    /// A face-down card sits inside the selected slice.
    #[display("card at position {position} is face down")]
    CardFaceDown { position: usize },

    /// The slice is not a single-suit run descending by one.
    #[display("invalid move: sequence not ordered")]
    InvalidSequence,

    /// The destination pile's top does not accept the slice.
    #[display("invalid move: destination cannot accept")]
    DestinationNotAccepting,

    /// Undo requested with an empty history.
    #[display("nothing to undo")]
    NoHistory,

    // === Internal consistency ===
    /// Detaching the validated slice failed.
    #[display("failed to remove cards from the pile: {source}")]
    RemoveCardsFailed { source: PileError },

    /// The detached cards differ from the validated slice.
    #[display("internal error: removed cards don't match expected sequence")]
    SequenceMismatch,

    /// Exposing the source pile's new top failed.
    #[display("failed to flip source card: {source}")]
    FlipFailed { source: PileError },

    /// A state-wide invariant (card conservation) does not hold.
    #[display("invariant violation: {message}")]
    InvariantViolation {
        #[error(not(source))]
        message: String,
    },
}

impl SpiderError {
    /// True for errors caused by caller input. These never mutate state.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SpiderError::InsufficientStock { .. }
                | SpiderError::InvalidSourceIndex { .. }
                | SpiderError::InvalidDestinationIndex { .. }
                | SpiderError::SamePileMove
                | SpiderError::InvalidStartIndex { .. }
                | SpiderError::NoCardsToMove
                | SpiderError::CardFaceDown { .. }
                | SpiderError::InvalidSequence
                | SpiderError::DestinationNotAccepting
                | SpiderError::NoHistory
        )
    }

    /// True for post-condition failures that indicate an engine bug.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            SpiderError::RemoveCardsFailed { .. }
                | SpiderError::SequenceMismatch
                | SpiderError::FlipFailed { .. }
                | SpiderError::InvariantViolation { .. }
        )
    }
}

impl From<DeckError> for SpiderError {
    fn from(source: DeckError) -> Self {
        SpiderError::Deck { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_face_down_message_carries_position() {
        let err = SpiderError::CardFaceDown { position: 3 };
        assert_eq!(err.to_string(), "card at position 3 is face down");
    }

    #[test]
    fn test_wrapped_pile_error_is_source() {
        let err = SpiderError::RemoveCardsFailed {
            source: PileError::InvalidStartIndex { index: 4, len: 2 },
        };

        let source = err.source().expect("wrapped error should expose its source");
        assert_eq!(source.to_string(), "start index 4 out of range for pile of 2 cards");
        assert!(err.is_internal());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_classification() {
        assert!(SpiderError::SamePileMove.is_validation());
        assert!(SpiderError::NoHistory.is_validation());
        assert!(SpiderError::SequenceMismatch.is_internal());
        assert!(!SpiderError::InsufficientCards { expected: 104, found: 52 }.is_validation());
        assert!(!SpiderError::InsufficientCards { expected: 104, found: 52 }.is_internal());
    }

    #[test]
    fn test_deck_error_converts() {
        let err: SpiderError = DeckError::EmptyDeck.into();
        assert_eq!(err, SpiderError::Deck { source: DeckError::EmptyDeck });
        assert!(err.source().is_some());
    }
}
