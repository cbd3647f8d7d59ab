//! Validated text newtypes for creatures
//!
//! These newtypes ensure that text fields are valid by construction:
//! - Not blank
//! - Within length limits (counted in characters)
//! - `CreatureName` additionally restricted to letters, spaces and hyphens

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 25;

const MIN_SPECIES_LENGTH: usize = 3;
const MAX_SPECIES_LENGTH: usize = 30;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// ============================================================================
// CreatureName
// ============================================================================

/// A validated creature name (2-25 chars, letters/spaces/hyphens, not blank)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CreatureName(String);

impl CreatureName {
    /// Create a new validated creature name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is blank or not 2-25 characters long
    /// - The name contains anything other than letters, spaces and hyphens
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let length = name.chars().count();
        if is_blank(&name) || !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
            return Err(DomainError::validation(
                "name",
                format!(
                    "Name must be {}-{} characters long",
                    MIN_NAME_LENGTH, MAX_NAME_LENGTH
                ),
            ));
        }
        if !name
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '-')
        {
            return Err(DomainError::validation(
                "name",
                "Name can only contain letters, spaces and hyphens",
            ));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CreatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CreatureName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CreatureName> for String {
    fn from(name: CreatureName) -> String {
        name.0
    }
}

// ============================================================================
// Species
// ============================================================================

/// A validated species label (3-30 chars, not blank)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Species(String);

impl Species {
    /// Create a new validated species.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the species is blank or not
    /// 3-30 characters long.
    pub fn new(species: impl Into<String>) -> Result<Self, DomainError> {
        let species = species.into();
        let length = species.chars().count();
        if is_blank(&species) || !(MIN_SPECIES_LENGTH..=MAX_SPECIES_LENGTH).contains(&length) {
            return Err(DomainError::validation(
                "species",
                format!(
                    "Species must be {}-{} characters long",
                    MIN_SPECIES_LENGTH, MAX_SPECIES_LENGTH
                ),
            ));
        }
        Ok(Self(species))
    }

    /// Returns the species as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Species {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Species> for String {
    fn from(species: Species) -> String {
        species.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod creature_name {
        use super::*;

        #[test]
        fn accepts_letters_spaces_and_hyphens() {
            let name = CreatureName::new("Mary-Jane Smaug").unwrap();
            assert_eq!(name.as_str(), "Mary-Jane Smaug");
        }

        #[test]
        fn accepts_non_ascii_letters() {
            assert!(CreatureName::new("Жар-птица").is_ok());
        }

        #[test]
        fn length_boundaries() {
            assert!(CreatureName::new("A").is_err());
            assert!(CreatureName::new("Ab").is_ok());
            assert!(CreatureName::new("a".repeat(25)).is_ok());
            assert!(CreatureName::new("a".repeat(26)).is_err());
        }

        #[test]
        fn rejects_blank() {
            let err = CreatureName::new("    ").unwrap_err();
            assert_eq!(err.field(), Some("name"));
            assert!(err.message().contains("2-25"));
        }

        #[test]
        fn rejects_digits_and_punctuation() {
            let err = CreatureName::new("R2-D2").unwrap_err();
            assert_eq!(
                err.message(),
                "Name can only contain letters, spaces and hyphens"
            );
            assert!(CreatureName::new("Smaug!").is_err());
            assert!(CreatureName::new("o'Brien").is_err());
        }

        #[test]
        fn serde_revalidates() {
            let ok: CreatureName = serde_json::from_str("\"Draco\"").unwrap();
            assert_eq!(ok.as_str(), "Draco");
            assert!(serde_json::from_str::<CreatureName>("\"D\"").is_err());
            assert_eq!(serde_json::to_string(&ok).unwrap(), "\"Draco\"");
        }
    }

    mod species {
        use super::*;

        #[test]
        fn length_boundaries() {
            assert!(Species::new("Ox").is_err());
            assert!(Species::new("Elf").is_ok());
            assert!(Species::new("x".repeat(30)).is_ok());
            assert!(Species::new("x".repeat(31)).is_err());
        }

        #[test]
        fn allows_any_characters() {
            let species = Species::new("Dragon #7 (rare)").unwrap();
            assert_eq!(species.to_string(), "Dragon #7 (rare)");
        }

        #[test]
        fn rejects_blank() {
            let err = Species::new("     ").unwrap_err();
            assert_eq!(err.field(), Some("species"));
        }
    }
}
