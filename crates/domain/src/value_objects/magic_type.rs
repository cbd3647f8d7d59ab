//! The closed set of magic schools a creature can wield

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// School of magic a creature draws its power from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagicType {
    Fire,
    Water,
    Earth,
    Air,
    Light,
    Dark,
}

impl MagicType {
    /// Get all magic types in menu order
    pub fn all() -> &'static [MagicType] {
        &[
            MagicType::Fire,
            MagicType::Water,
            MagicType::Earth,
            MagicType::Air,
            MagicType::Light,
            MagicType::Dark,
        ]
    }

    /// Position of this variant in [`MagicType::all`]
    pub fn index(&self) -> usize {
        match self {
            MagicType::Fire => 0,
            MagicType::Water => 1,
            MagicType::Earth => 2,
            MagicType::Air => 3,
            MagicType::Light => 4,
            MagicType::Dark => 5,
        }
    }

    /// Look up a variant by its position in [`MagicType::all`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Get a display name for the magic type
    pub fn display_name(&self) -> &'static str {
        match self {
            MagicType::Fire => "Fire",
            MagicType::Water => "Water",
            MagicType::Earth => "Earth",
            MagicType::Air => "Air",
            MagicType::Light => "Light",
            MagicType::Dark => "Dark",
        }
    }
}

impl fmt::Display for MagicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

/// Accepts either a variant name (any case) or its menu number.
impl std::str::FromStr for MagicType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index)
                .ok_or_else(|| DomainError::parse(format!("Unknown magic type: {}", trimmed)));
        }
        Self::all()
            .iter()
            .copied()
            .find(|t| t.display_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::parse(format!("Unknown magic type: {}", trimmed)))
    }
}
