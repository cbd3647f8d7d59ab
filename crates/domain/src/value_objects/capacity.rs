//! Capacity value object for the creature collection

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum number of creatures a collection may hold (always > 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Capacity(usize);

impl Capacity {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `max` is zero.
    pub fn new(max: usize) -> Result<Self, DomainError> {
        if max == 0 {
            return Err(DomainError::validation(
                "max_creatures",
                "Maximum number of creatures must be a positive integer",
            ));
        }
        Ok(Self(max))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for Capacity {
    type Error = DomainError;

    fn try_from(v: usize) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl From<Capacity> for usize {
    fn from(capacity: Capacity) -> usize {
        capacity.0
    }
}
