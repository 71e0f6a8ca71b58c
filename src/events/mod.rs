//! Observer hook for hosts.
//!
//! The engine carries no global logging switch. A host that wants to react
//! to game transitions (sound, animation, logging) installs an
//! [`EventSink`] on the [`GameState`](crate::game::GameState).

pub mod event;

pub use event::{EventSink, GameEvent};
