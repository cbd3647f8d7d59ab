//! Value objects - Immutable objects defined by their attributes

mod attributes;
mod capacity;
mod magic_type;
mod names;

pub use attributes::{Age, DiscoveryDate, HealthPoints, MagicPower};
pub use capacity::Capacity;
pub use magic_type::MagicType;
pub use names::{CreatureName, Species};
