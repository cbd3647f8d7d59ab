//! Menagerie domain: validated creatures and the bounded collection that
//! holds them.
//!
//! The crate performs no I/O and never reads the clock; callers pass in
//! `today` wherever a date bound is involved.

pub mod aggregates;
pub mod common;
pub mod error;
pub mod events;
pub mod value_objects;

pub use aggregates::{Creature, CreatureDraft, Menagerie, ANCIENT_AGE, EVOLUTION_AGE};
pub use error::DomainError;
pub use events::{CreatureUpdate, EvolveOutcome, HealOutcome, TrainOutcome};
pub use value_objects::{
    Age, Capacity, CreatureName, DiscoveryDate, HealthPoints, MagicPower, MagicType, Species,
};
