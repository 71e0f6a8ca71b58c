//! Win and loss detection.
//!
//! Pure functions over a tableau snapshot. The game state calls these after
//! each mutation and latches the results.

use tracing::instrument;

use super::sequence::movable_suffix;
use crate::cards::Card;
use crate::zones::{Pile, Tableau};

/// Completed runs needed to win.
pub const RUNS_TO_WIN: usize = 8;

/// True once enough runs have been completed.
#[must_use]
pub fn is_won(completed_runs: usize) -> bool {
    completed_runs >= RUNS_TO_WIN
}

/// Can `moving` be placed on a pile whose top is `target`? Suit is ignored.
#[must_use]
pub fn can_place_on(moving: Card, target: Card) -> bool {
    target.rank.is_one_above(moving.rank)
}

/// Would `destination` accept a group whose first card is `first`?
fn accepts(destination: &Pile, first: Card) -> bool {
    match destination.top_card() {
        Ok(top) => can_place_on(first, top.card),
        Err(_) => true,
    }
}

/// True if some movable group on the tableau can legally land on another pile.
///
/// For every pile, every card of its movable suffix is tried as the first
/// card of the moved group, against every other pile. An empty destination
/// accepts any group. Returns on the first hit.
#[must_use]
pub fn has_any_valid_move(tableau: &Tableau) -> bool {
    for (i, pile) in tableau.iter().enumerate() {
        let cards = pile.cards();
        let suffix = movable_suffix(&cards);

        for candidate in suffix {
            let found = tableau
                .iter()
                .enumerate()
                .any(|(j, destination)| j != i && accepts(destination, candidate.card));
            if found {
                return true;
            }
        }
    }
    false
}

/// True if the game cannot continue.
///
/// Only possible once the stock is exhausted; an empty pile always leaves a
/// move available.
#[must_use]
#[instrument(skip(tableau))]
pub fn is_lost(tableau: &Tableau, stock_len: usize) -> bool {
    if stock_len > 0 {
        return false;
    }
    if tableau.has_empty_pile() {
        return false;
    }
    !has_any_valid_move(tableau)
}
