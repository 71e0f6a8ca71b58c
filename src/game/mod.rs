//! The playable game: state, move engine, undo history and renderer views.
//!
//! ## Key Types
//!
//! - `GameState`: owns the tableau, stock and completed runs; every rule
//!   is enforced through its operations
//! - `History` / `Snapshot`: bounded undo stack
//! - `GameView`: owned projection handed to renderers

pub mod history;
pub mod state;
pub mod view;

pub use history::{History, Snapshot};
pub use state::{GameState, Run, FIRST_PILE_CARDS, FIRST_PILE_COUNT, REST_PILE_CARDS};
pub use view::{CardView, GameView, PileView};
