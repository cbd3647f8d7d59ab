//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations

pub mod creature;
pub mod menagerie;

pub use creature::{Creature, CreatureDraft, ANCIENT_AGE, EVOLUTION_AGE};
pub use menagerie::Menagerie;
