//! Creature aggregate - a single magical being
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: all state is reachable only through accessors
//! - **Newtypes**: every constrained field is a value object that is valid by
//!   construction, so an invalid creature cannot be observed
//! - **Validate-then-assign**: setters build the new value object first and
//!   only swap it in on success
//! - **Domain events**: mutations return outcome enums (`TrainOutcome`, etc.)

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::DomainError;
use crate::events::{CreatureUpdate, EvolveOutcome, HealOutcome, TrainOutcome};
use crate::value_objects::{
    Age, CreatureName, DiscoveryDate, HealthPoints, MagicPower, MagicType, Species,
};

/// Creatures at or above this age are ancient.
pub const ANCIENT_AGE: i32 = 1000;

/// Minimum age required to evolve.
pub const EVOLUTION_AGE: i32 = 100;

const FIRE_BONUS: f64 = 1.2;
const FLIGHT_BONUS: f64 = 1.15;

pub const MIN_OPPONENT_LEVEL: i32 = 1;
pub const MAX_OPPONENT_LEVEL: i32 = 100;

pub const MIN_TRAINING_HOURS: f64 = 0.5;
pub const MAX_TRAINING_HOURS: f64 = 24.0;
const FLYER_POWER_PER_HOUR: f64 = 2.5;
const GROUNDED_POWER_PER_HOUR: f64 = 2.0;

pub const MIN_HEALING_POINTS: i32 = 1;
pub const MAX_HEALING_POINTS: i32 = 100;

const EVOLUTION_POWER_FACTOR: f64 = 1.3;
const EVOLUTION_HP_FACTOR: f64 = 1.2;

/// Raw, not-yet-validated creature attributes.
///
/// [`Creature::create`] validates these in declaration order and stops at the
/// first violation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureDraft {
    pub name: String,
    pub species: String,
    pub age: i32,
    pub magic_power: f64,
    pub magic_type: MagicType,
    pub can_fly: bool,
    pub discovery_date: NaiveDate,
    pub health_points: i32,
}

/// A magical creature
///
/// # Invariants
///
/// - `name` is 2-25 letters, spaces or hyphens (enforced by `CreatureName`)
/// - `species` is 3-30 characters, not blank (enforced by `Species`)
/// - `age` is 0-5000, `magic_power` 1-1000, `health_points` 1-500
/// - `discovery_date` was between 1000-01-01 and today when it was set
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use menagerie_domain::aggregates::{Creature, CreatureDraft};
/// use menagerie_domain::value_objects::MagicType;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let creature = Creature::create(
///     CreatureDraft {
///         name: "Smaug".into(),
///         species: "Dragon".into(),
///         age: 1200,
///         magic_power: 500.0,
///         magic_type: MagicType::Fire,
///         can_fly: true,
///         discovery_date: NaiveDate::from_ymd_opt(1937, 9, 21).unwrap(),
///         health_points: 450,
///     },
///     today,
/// )
/// .unwrap();
///
/// assert!(creature.is_ancient());
/// assert_eq!(creature.info(), "Smaug the Dragon (Fire) - Power: 500");
/// ```
///
/// Serialize-only. Every `Creature` comes from [`Creature::new`] or
/// [`Creature::create`], both of which check the discovery date against
/// `today`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    name: CreatureName,
    species: Species,
    age: Age,
    magic_power: MagicPower,
    magic_type: MagicType,
    can_fly: bool,
    discovery_date: DiscoveryDate,
    health_points: HealthPoints,
}

impl Creature {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a creature from already-validated attributes.
    pub fn new(
        name: CreatureName,
        species: Species,
        age: Age,
        magic_power: MagicPower,
        magic_type: MagicType,
        can_fly: bool,
        discovery_date: DiscoveryDate,
        health_points: HealthPoints,
    ) -> Self {
        Self {
            name,
            species,
            age,
            magic_power,
            magic_type,
            can_fly,
            discovery_date,
            health_points,
        }
    }

    /// Validate every field of `draft` and build a creature.
    ///
    /// # Errors
    ///
    /// Returns the `DomainError::Validation` of the first field that violates
    /// its constraint, checked in the order name, species, age, magic power,
    /// discovery date, health points.
    pub fn create(draft: CreatureDraft, today: NaiveDate) -> Result<Self, DomainError> {
        let name = CreatureName::new(draft.name)?;
        let species = Species::new(draft.species)?;
        let age = Age::new(draft.age)?;
        let magic_power = MagicPower::new(draft.magic_power)?;
        let discovery_date = DiscoveryDate::new(draft.discovery_date, today)?;
        let health_points = HealthPoints::new(draft.health_points)?;

        Ok(Self::new(
            name,
            species,
            age,
            magic_power,
            draft.magic_type,
            draft.can_fly,
            discovery_date,
            health_points,
        ))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &CreatureName {
        &self.name
    }

    #[inline]
    pub fn species(&self) -> &Species {
        &self.species
    }

    #[inline]
    pub fn age(&self) -> Age {
        self.age
    }

    #[inline]
    pub fn magic_power(&self) -> MagicPower {
        self.magic_power
    }

    #[inline]
    pub fn magic_type(&self) -> MagicType {
        self.magic_type
    }

    #[inline]
    pub fn can_fly(&self) -> bool {
        self.can_fly
    }

    #[inline]
    pub fn discovery_date(&self) -> DiscoveryDate {
        self.discovery_date
    }

    #[inline]
    pub fn health_points(&self) -> HealthPoints {
        self.health_points
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Battle power against an opponent of the given level (1-100).
    ///
    /// Fire creatures get a 1.2x bonus and flyers a 1.15x bonus; the product
    /// is divided by the opponent's level.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `opponent_level` is outside 1-100.
    pub fn battle_power(&self, opponent_level: i32) -> Result<f64, DomainError> {
        if !(MIN_OPPONENT_LEVEL..=MAX_OPPONENT_LEVEL).contains(&opponent_level) {
            return Err(DomainError::validation(
                "opponent_level",
                format!(
                    "Opponent level must be between {} and {}",
                    MIN_OPPONENT_LEVEL, MAX_OPPONENT_LEVEL
                ),
            ));
        }

        let type_bonus = if self.magic_type == MagicType::Fire {
            FIRE_BONUS
        } else {
            1.0
        };
        let flight_bonus = if self.can_fly { FLIGHT_BONUS } else { 1.0 };

        Ok(self.magic_power.value() * type_bonus * flight_bonus / f64::from(opponent_level))
    }

    /// One-line summary: `<name> the <species> (<type>) - Power: <power>`.
    pub fn info(&self) -> String {
        format!(
            "{} the {} ({}) - Power: {}",
            self.name, self.species, self.magic_type, self.magic_power
        )
    }

    #[inline]
    pub fn is_ancient(&self) -> bool {
        self.age.years() >= ANCIENT_AGE
    }

    // =========================================================================
    // Mutation Methods (return domain events)
    // =========================================================================

    /// Train for 0.5-24 hours.
    ///
    /// Flyers gain 2.5 power per hour, everyone else 2.0. Power stops at the
    /// maximum.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `hours` is outside 0.5-24.
    pub fn train(&mut self, hours: f64) -> Result<TrainOutcome, DomainError> {
        if !(MIN_TRAINING_HOURS..=MAX_TRAINING_HOURS).contains(&hours) {
            return Err(DomainError::validation(
                "hours",
                format!(
                    "Training must be between {} and {} hours",
                    MIN_TRAINING_HOURS, MAX_TRAINING_HOURS
                ),
            ));
        }
        if self.magic_power.is_max() {
            return Ok(TrainOutcome::AlreadyAtMax);
        }

        let rate = if self.can_fly {
            FLYER_POWER_PER_HOUR
        } else {
            GROUNDED_POWER_PER_HOUR
        };
        let previous = self.magic_power;
        self.magic_power = previous.saturating_add(hours * rate);

        Ok(TrainOutcome::Trained {
            hours,
            power_gained: self.magic_power.value() - previous.value(),
            new_power: self.magic_power,
        })
    }

    /// Restore 1-100 health points, capped at the maximum.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `healing_points` is outside 1-100.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use menagerie_domain::HealOutcome;
    /// use menagerie_domain::aggregates::{Creature, CreatureDraft};
    /// use menagerie_domain::value_objects::MagicType;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let mut creature = Creature::create(
    ///     CreatureDraft {
    ///         name: "Nessie".into(),
    ///         species: "Lake Serpent".into(),
    ///         age: 300,
    ///         magic_power: 120.0,
    ///         magic_type: MagicType::Water,
    ///         can_fly: false,
    ///         discovery_date: NaiveDate::from_ymd_opt(1933, 5, 2).unwrap(),
    ///         health_points: 490,
    ///     },
    ///     today,
    /// )
    /// .unwrap();
    ///
    /// match creature.heal(25).unwrap() {
    ///     HealOutcome::Healed { amount_healed, new_hp } => {
    ///         assert_eq!(amount_healed, 10);
    ///         assert_eq!(new_hp.value(), 500);
    ///     }
    ///     _ => panic!("Expected Healed outcome"),
    /// }
    /// ```
    pub fn heal(&mut self, healing_points: i32) -> Result<HealOutcome, DomainError> {
        if !(MIN_HEALING_POINTS..=MAX_HEALING_POINTS).contains(&healing_points) {
            return Err(DomainError::validation(
                "healing_points",
                format!(
                    "Healing points must be between {} and {}",
                    MIN_HEALING_POINTS, MAX_HEALING_POINTS
                ),
            ));
        }
        if self.health_points.is_max() {
            return Ok(HealOutcome::AlreadyFull);
        }

        let previous = self.health_points;
        self.health_points = previous.saturating_add(healing_points);

        Ok(HealOutcome::Healed {
            amount_healed: self.health_points.value() - previous.value(),
            new_hp: self.health_points,
        })
    }

    /// Evolve a creature that is at least 100 years old.
    ///
    /// Power grows by 1.3x and health by 1.2x (truncated), each capped at its
    /// maximum. Younger creatures are left untouched.
    pub fn evolve(&mut self) -> EvolveOutcome {
        if self.age.years() < EVOLUTION_AGE {
            return EvolveOutcome::TooYoung { age: self.age };
        }

        let previous_power = self.magic_power;
        let previous_hp = self.health_points;
        self.magic_power = previous_power.saturating_mul(EVOLUTION_POWER_FACTOR);
        self.health_points = previous_hp.saturating_scale(EVOLUTION_HP_FACTOR);

        EvolveOutcome::Evolved {
            previous_power,
            new_power: self.magic_power,
            previous_hp,
            new_hp: self.health_points,
        }
    }

    // =========================================================================
    // Field setters (validate, then assign)
    // =========================================================================

    /// # Errors
    ///
    /// Returns `DomainError::Validation` and keeps the old name if `name` is
    /// not a valid creature name.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<CreatureUpdate, DomainError> {
        let name = CreatureName::new(name)?;
        let previous = std::mem::replace(&mut self.name, name);
        Ok(CreatureUpdate::NameChanged {
            from: previous,
            to: self.name.clone(),
        })
    }

    /// # Errors
    ///
    /// Returns `DomainError::Validation` and keeps the old species if
    /// `species` is not 3-30 characters.
    pub fn set_species(
        &mut self,
        species: impl Into<String>,
    ) -> Result<CreatureUpdate, DomainError> {
        let species = Species::new(species)?;
        let previous = std::mem::replace(&mut self.species, species);
        Ok(CreatureUpdate::SpeciesChanged {
            from: previous,
            to: self.species.clone(),
        })
    }

    /// # Errors
    ///
    /// Returns `DomainError::Validation` and keeps the old age if `years` is
    /// outside 0-5000.
    pub fn set_age(&mut self, years: i32) -> Result<CreatureUpdate, DomainError> {
        let age = Age::new(years)?;
        let previous = std::mem::replace(&mut self.age, age);
        Ok(CreatureUpdate::AgeChanged {
            from: previous,
            to: self.age,
        })
    }

    /// # Errors
    ///
    /// Returns `DomainError::Validation` and keeps the old power if `power` is
    /// outside 1-1000.
    pub fn set_magic_power(&mut self, power: f64) -> Result<CreatureUpdate, DomainError> {
        let power = MagicPower::new(power)?;
        let previous = std::mem::replace(&mut self.magic_power, power);
        Ok(CreatureUpdate::MagicPowerChanged {
            from: previous,
            to: self.magic_power,
        })
    }

    pub fn set_magic_type(&mut self, magic_type: MagicType) -> CreatureUpdate {
        let previous = std::mem::replace(&mut self.magic_type, magic_type);
        CreatureUpdate::MagicTypeChanged {
            from: previous,
            to: self.magic_type,
        }
    }

    pub fn set_can_fly(&mut self, can_fly: bool) -> CreatureUpdate {
        let previous = std::mem::replace(&mut self.can_fly, can_fly);
        CreatureUpdate::CanFlyChanged {
            from: previous,
            to: self.can_fly,
        }
    }

    /// # Errors
    ///
    /// Returns `DomainError::Validation` and keeps the old date if `date` is
    /// before 1000-01-01 or after `today`.
    pub fn set_discovery_date(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<CreatureUpdate, DomainError> {
        let date = DiscoveryDate::new(date, today)?;
        let previous = std::mem::replace(&mut self.discovery_date, date);
        Ok(CreatureUpdate::DiscoveryDateChanged {
            from: previous,
            to: self.discovery_date,
        })
    }

    /// # Errors
    ///
    /// Returns `DomainError::Validation` and keeps the old value if `hp` is
    /// outside 1-500.
    pub fn set_health_points(&mut self, hp: i32) -> Result<CreatureUpdate, DomainError> {
        let hp = HealthPoints::new(hp)?;
        let previous = std::mem::replace(&mut self.health_points, hp);
        Ok(CreatureUpdate::HealthPointsChanged {
            from: previous,
            to: self.health_points,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
