//! Domain Events
//!
//! Return types from aggregate mutations, communicating what happened when
//! state was modified. Callers decide how to present them.

pub mod creature_events;

pub use creature_events::*;
