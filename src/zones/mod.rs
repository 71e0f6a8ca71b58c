//! Card locations on the table.
//!
//! ## Key Types
//!
//! - `CardInPile`: a card plus its orientation at a pile position
//! - `Pile`: ordered stack owning the slice/splice primitives moves use
//! - `Tableau`: the fixed set of ten piles

pub mod pile;
pub mod tableau;

pub use pile::{CardInPile, Pile};
pub use tableau::{Tableau, TABLEAU_PILES};
