//! Engine events and the sink hosts install to observe them.
//!
//! Events are emitted only after a state change has fully succeeded, so a
//! sink never sees a transition that was later rolled back.

use serde::{Deserialize, Serialize};

use crate::cards::{Suit, SuitVariant};

/// Something that happened to a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh game was dealt.
    Dealt { seed: u64, suit_variant: SuitVariant },

    /// One row of ten cards went from the stock onto the tableau.
    RowDealt { stock_remaining: usize },

    /// A group of cards moved between piles.
    SequenceMoved {
        from: usize,
        start: usize,
        to: usize,
        cards: usize,
    },

    /// A King-to-Ace run left the tableau.
    RunCompleted {
        pile: usize,
        suit: Suit,
        completed: usize,
    },

    /// The win latch was set.
    Won,

    /// The loss latch was set.
    Lost,

    /// The most recent snapshot was restored.
    Undone { history_remaining: usize },
}

/// Receives engine events.
///
/// Implemented for any `FnMut(&GameEvent)` closure:
///
/// ```
/// use spider_engine::events::{EventSink, GameEvent};
///
/// let mut seen = Vec::new();
/// let mut sink = |event: &GameEvent| seen.push(event.clone());
/// sink.on_event(&GameEvent::Won);
/// assert_eq!(seen, vec![GameEvent::Won]);
/// ```
pub trait EventSink {
    /// Called once per event, in order.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event);
    }
}
