//! Bounded undo history.
//!
//! A LIFO of full-state snapshots. Pushing past capacity evicts the oldest
//! entry. There is no redo: popping discards the entry, and the next push
//! simply lands on top of whatever remains.

use std::collections::VecDeque;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::state::Run;
use crate::cards::Card;
use crate::zones::Tableau;

/// Everything undo restores: piles, stock, completed runs, latches.
///
/// Built from persistent vectors, so taking one is cheap and it never
/// observes later changes to the game it was taken from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) tableau: Tableau,
    pub(crate) stock: Vector<Card>,
    pub(crate) completed: Vector<Run>,
    pub(crate) won: bool,
    pub(crate) lost: bool,
}

impl Snapshot {
    /// The piles at capture time.
    #[must_use]
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Stock size at capture time.
    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Completed runs at capture time.
    #[must_use]
    pub fn completed_runs(&self) -> usize {
        self.completed.len()
    }

    /// Win latch at capture time.
    #[must_use]
    pub fn won(&self) -> bool {
        self.won
    }

    /// Loss latch at capture time.
    #[must_use]
    pub fn lost(&self) -> bool {
        self.lost
    }
}

/// Bounded stack of snapshots.
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<Snapshot>,
    capacity: usize,
}

impl History {
    /// Create an empty history holding at most `capacity` snapshots.
    ///
    /// Storage grows with use; `capacity` is only the eviction bound.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Push a snapshot, evicting the oldest if over capacity.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push_back(snapshot);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    /// Number of snapshots held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_stock(n: usize) -> Snapshot {
        let card = Card::new(crate::cards::Suit::Spades, crate::cards::Rank::Ace);
        Snapshot {
            tableau: Tableau::new(),
            stock: std::iter::repeat(card).take(n).collect(),
            completed: Vector::new(),
            won: false,
            lost: false,
        }
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut history = History::new(5);
        history.push(snapshot_with_stock(1));
        history.push(snapshot_with_stock(2));

        assert_eq!(history.pop().map(|s| s.stock_len()), Some(2));
        assert_eq!(history.pop().map(|s| s.stock_len()), Some(1));
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_evicts_oldest() {
        let mut history = History::new(3);
        for n in 0..5 {
            history.push(snapshot_with_stock(n));
        }

        assert_eq!(history.len(), 3);
        let remaining: Vec<_> = std::iter::from_fn(|| history.pop())
            .map(|s| s.stock_len())
            .collect();
        assert_eq!(remaining, vec![4, 3, 2]);
    }

    #[test]
    fn test_huge_capacity_allocates_nothing_up_front() {
        let mut history = History::new(usize::MAX);
        assert!(history.is_empty());

        history.push(snapshot_with_stock(7));
        assert_eq!(history.len(), 1);
        assert_eq!(history.pop().map(|s| s.stock_len()), Some(7));
    }
}
