//! Spider rules that need no mutable state.
//!
//! - `sequence`: shape checks for move groups, complete runs, movable suffixes
//! - `terminal`: win threshold and the "any legal move left" search
//!
//! The move engine in [`game`](crate::game) calls into these; hosts may
//! also use them to highlight draggable cards.

pub mod sequence;
pub mod terminal;

pub use sequence::{is_complete_run, is_valid_sequence, movable_suffix, RUN_LENGTH};
pub use terminal::{can_place_on, has_any_valid_move, is_lost, is_won, RUNS_TO_WIN};
