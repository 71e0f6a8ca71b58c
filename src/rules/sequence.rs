//! Shape checks over runs of pile entries.
//!
//! All functions take a bottom-first slice, the same order [`Pile::cards`]
//! returns.
//!
//! [`Pile::cards`]: crate::zones::Pile::cards

use crate::cards::Rank;
use crate::zones::CardInPile;

/// Cards in a complete King-to-Ace run.
pub const RUN_LENGTH: usize = 13;

/// True if `cards` is a single-suit run descending by exactly one rank
/// from bottom to top. Empty and single-card slices qualify.
///
/// Orientation is not checked here.
#[must_use]
pub fn is_valid_sequence(cards: &[CardInPile]) -> bool {
    cards.windows(2).all(|pair| {
        let (below, above) = (pair[0].card, pair[1].card);
        below.suit == above.suit && below.rank.is_one_above(above.rank)
    })
}

/// True if `cards` is exactly a complete run: thirteen face-up cards of one
/// suit, King at the bottom down to Ace on top.
#[must_use]
pub fn is_complete_run(cards: &[CardInPile]) -> bool {
    cards.len() == RUN_LENGTH
        && cards[0].card.rank == Rank::King
        && cards.iter().all(|c| c.face_up)
        && is_valid_sequence(cards)
}

/// The longest movable group ending at the top of a pile.
///
/// Walks down from the top card while each card below is face up, of the
/// same suit, and exactly one rank higher. Empty if the top card is face
/// down or the pile is empty.
#[must_use]
pub fn movable_suffix(cards: &[CardInPile]) -> &[CardInPile] {
    match cards.last() {
        Some(top) if top.face_up => {}
        _ => return &[],
    }

    let mut start = cards.len() - 1;
    while start > 0 {
        let below = cards[start - 1];
        let above = cards[start];
        if !below.face_up
            || below.card.suit != above.card.suit
            || !below.card.rank.is_one_above(above.card.rank)
        {
            break;
        }
        start -= 1;
    }

    &cards[start..]
}
