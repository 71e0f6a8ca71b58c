//! Read-only projection of a game for renderers and other hosts.
//!
//! Every projection is a fresh, owned value. Mutating a view never touches
//! the game, and later moves never change a view already handed out.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::cards::{Rank, Suit};
use crate::zones::{CardInPile, Pile};

/// One card as a renderer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardView {
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
}

impl From<CardInPile> for CardView {
    fn from(entry: CardInPile) -> Self {
        Self {
            rank: entry.card.rank,
            suit: entry.card.suit,
            face_up: entry.face_up,
        }
    }
}

/// One pile, bottom card first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileView {
    pub cards: Vec<CardView>,
}

impl PileView {
    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&CardView> {
        self.cards.last()
    }

    /// Index of the top card if the group from `start` to the top could be
    /// picked up as one move, `None` otherwise.
    ///
    /// Used to highlight the cards that would travel with a hovered card.
    #[must_use]
    pub fn movable_end(&self, start: usize) -> Option<usize> {
        let group = self.cards.get(start..)?;
        let first = group.first()?;
        if !first.face_up {
            return None;
        }

        let connected = group.windows(2).all(|pair| {
            let (below, above) = (pair[0], pair[1]);
            above.face_up && below.suit == above.suit && below.rank.is_one_above(above.rank)
        });

        connected.then(|| self.cards.len() - 1)
    }
}

impl From<&Pile> for PileView {
    fn from(pile: &Pile) -> Self {
        Self {
            cards: pile.iter().copied().map(CardView::from).collect(),
        }
    }
}

/// Snapshot of everything a renderer may show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub tableau: Vec<PileView>,
    pub stock_count: usize,
    pub completed_count: usize,
    pub won: bool,
    pub lost: bool,
}

impl GameView {
    /// Project the current state of a game.
    #[must_use]
    pub fn project(state: &GameState) -> Self {
        Self {
            tableau: state.tableau().iter().map(PileView::from).collect(),
            stock_count: state.stock_len(),
            completed_count: state.completed_runs(),
            won: state.is_won(),
            lost: state.is_lost(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Rank, suit: Suit, face_up: bool) -> CardView {
        CardView { rank, suit, face_up }
    }

    fn pile(cards: Vec<CardView>) -> PileView {
        PileView { cards }
    }

    #[test]
    fn test_movable_end_bounds() {
        let p = pile(vec![card(Rank::King, Suit::Spades, true)]);
        assert_eq!(p.movable_end(0), Some(0));
        assert_eq!(p.movable_end(1), None);
        assert_eq!(p.movable_end(2), None);
        assert_eq!(PileView::default().movable_end(0), None);
    }

    #[test]
    fn test_movable_end_face_down_start() {
        let p = pile(vec![
            card(Rank::King, Suit::Spades, false),
            card(Rank::Queen, Suit::Spades, true),
        ]);
        assert_eq!(p.movable_end(0), None);
        assert_eq!(p.movable_end(1), Some(1));
    }

    #[test]
    fn test_movable_end_full_sequence() {
        let p = pile(vec![
            card(Rank::Four, Suit::Spades, true),
            card(Rank::Three, Suit::Spades, true),
            card(Rank::Two, Suit::Spades, true),
            card(Rank::Ace, Suit::Spades, true),
        ]);
        assert_eq!(p.movable_end(0), Some(3));
    }

    #[test]
    fn test_movable_end_mid_sequence() {
        let p = pile(vec![
            card(Rank::King, Suit::Spades, true),
            card(Rank::Queen, Suit::Spades, true),
            card(Rank::Jack, Suit::Spades, true),
            card(Rank::Ten, Suit::Hearts, true),
            card(Rank::Nine, Suit::Hearts, true),
        ]);
        assert_eq!(p.movable_end(3), Some(4));
        assert_eq!(p.movable_end(0), None);
    }

    #[test]
    fn test_movable_end_blockers() {
        let rank_gap = pile(vec![
            card(Rank::Four, Suit::Spades, true),
            card(Rank::Two, Suit::Spades, true),
            card(Rank::Ace, Suit::Spades, true),
        ]);
        assert_eq!(rank_gap.movable_end(0), None);

        let face_down_above = pile(vec![
            card(Rank::Three, Suit::Spades, true),
            card(Rank::Two, Suit::Spades, false),
            card(Rank::Ace, Suit::Spades, true),
        ]);
        assert_eq!(face_down_above.movable_end(0), None);

        let suit_break = pile(vec![
            card(Rank::Four, Suit::Spades, true),
            card(Rank::Three, Suit::Hearts, true),
            card(Rank::Two, Suit::Hearts, true),
        ]);
        assert_eq!(suit_break.movable_end(0), None);
        assert_eq!(suit_break.movable_end(1), Some(2));
    }

    #[test]
    fn test_view_serde() {
        let view = GameView {
            tableau: vec![pile(vec![card(Rank::Ten, Suit::Clubs, true)])],
            stock_count: 50,
            completed_count: 0,
            won: false,
            lost: false,
        };
        let json = serde_json::to_string(&view).unwrap();
        let back: GameView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, back);
    }
}
