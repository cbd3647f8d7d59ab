//! Creature mutation outcomes

use crate::value_objects::{
    Age, CreatureName, DiscoveryDate, HealthPoints, MagicPower, MagicType, Species,
};

/// Outcome of a training session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrainOutcome {
    /// Power grew (possibly capped at the maximum)
    Trained {
        hours: f64,
        power_gained: f64,
        new_power: MagicPower,
    },
    /// Already at maximum power, nothing changed
    AlreadyAtMax,
}

/// Outcome of healing a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealOutcome {
    /// Healing applied
    Healed {
        amount_healed: i32,
        new_hp: HealthPoints,
    },
    /// Already at max HP
    AlreadyFull,
}

/// Outcome of an evolution attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvolveOutcome {
    /// Creature is younger than the evolution threshold, nothing changed
    TooYoung { age: Age },
    Evolved {
        previous_power: MagicPower,
        new_power: MagicPower,
        previous_hp: HealthPoints,
        new_hp: HealthPoints,
    },
}

impl EvolveOutcome {
    pub fn is_evolved(&self) -> bool {
        matches!(self, Self::Evolved { .. })
    }
}

/// Outcome of updating a single creature field.
#[derive(Debug, Clone, PartialEq)]
pub enum CreatureUpdate {
    NameChanged { from: CreatureName, to: CreatureName },
    SpeciesChanged { from: Species, to: Species },
    AgeChanged { from: Age, to: Age },
    MagicPowerChanged { from: MagicPower, to: MagicPower },
    MagicTypeChanged { from: MagicType, to: MagicType },
    CanFlyChanged { from: bool, to: bool },
    DiscoveryDateChanged { from: DiscoveryDate, to: DiscoveryDate },
    HealthPointsChanged { from: HealthPoints, to: HealthPoints },
}

impl CreatureUpdate {
    /// Name of the field this update touched.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameChanged { .. } => "name",
            Self::SpeciesChanged { .. } => "species",
            Self::AgeChanged { .. } => "age",
            Self::MagicPowerChanged { .. } => "magic_power",
            Self::MagicTypeChanged { .. } => "magic_type",
            Self::CanFlyChanged { .. } => "can_fly",
            Self::DiscoveryDateChanged { .. } => "discovery_date",
            Self::HealthPointsChanged { .. } => "health_points",
        }
    }
}
