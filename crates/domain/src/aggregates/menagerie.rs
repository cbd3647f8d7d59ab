//! Menagerie aggregate - the bounded, ordered collection of creatures
//!
//! Insertion order is preserved by every operation. Searches and deletes are
//! single linear passes; the collection is never larger than its capacity.

use crate::aggregates::Creature;
use crate::common::{contains_ignore_case, eq_ignore_case};
use crate::error::DomainError;
use crate::value_objects::{Capacity, MagicType};

/// An ordered collection of creatures with a fixed maximum size
///
/// # Invariants
///
/// - `0 <= len() <= capacity()` at all times
/// - The capacity never changes after construction
#[derive(Debug, Clone)]
pub struct Menagerie {
    capacity: Capacity,
    creatures: Vec<Creature>,
}

impl Menagerie {
    /// Storage grows on demand; the capacity is only an upper bound.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            capacity,
            creatures: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.creatures.len() >= self.capacity.get()
    }

    /// All creatures in insertion order.
    #[inline]
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Creature at 1-based `position`, if any.
    pub fn get(&self, position: usize) -> Option<&Creature> {
        position
            .checked_sub(1)
            .and_then(|index| self.creatures.get(index))
    }

    /// Mutable creature at 1-based `position`, if any.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut Creature> {
        position
            .checked_sub(1)
            .and_then(|index| self.creatures.get_mut(index))
    }

    // =========================================================================
    // Add
    // =========================================================================

    /// Append a creature at the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ContainerFull` if the collection is at capacity;
    /// nothing is inserted.
    pub fn add(&mut self, creature: Creature) -> Result<(), DomainError> {
        if self.is_full() {
            return Err(DomainError::container_full(
                self.creatures.len(),
                self.capacity.get(),
            ));
        }
        self.creatures.push(creature);
        Ok(())
    }

    // =========================================================================
    // Search
    // =========================================================================

    fn find_where(&self, predicate: impl Fn(&Creature) -> bool) -> Vec<&Creature> {
        self.creatures.iter().filter(|c| predicate(c)).collect()
    }

    /// Creatures whose name contains `query`, ignoring case.
    pub fn find_by_name(&self, query: &str) -> Vec<&Creature> {
        self.find_where(|c| contains_ignore_case(c.name().as_str(), query))
    }

    pub fn find_by_magic_type(&self, magic_type: MagicType) -> Vec<&Creature> {
        self.find_where(|c| c.magic_type() == magic_type)
    }

    /// Creatures whose species contains `query`, ignoring case.
    pub fn find_by_species(&self, query: &str) -> Vec<&Creature> {
        self.find_where(|c| contains_ignore_case(c.species().as_str(), query))
    }

    pub fn find_flying(&self) -> Vec<&Creature> {
        self.find_where(Creature::can_fly)
    }

    pub fn find_ancient(&self) -> Vec<&Creature> {
        self.find_where(Creature::is_ancient)
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Remove the creature at 1-based `position` and return its name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `position` is not between 1 and
    /// `len()`.
    pub fn delete_by_index(&mut self, position: usize) -> Result<String, DomainError> {
        if position == 0 || position > self.creatures.len() {
            return Err(DomainError::validation(
                "index",
                format!(
                    "Creature number must be between 1 and {}",
                    self.creatures.len()
                ),
            ));
        }
        let removed = self.creatures.remove(position - 1);
        Ok(removed.name().as_str().to_string())
    }

    /// Remove every creature whose name equals `name`, ignoring case.
    ///
    /// Returns how many were removed; zero is not an error.
    pub fn delete_by_name(&mut self, name: &str) -> usize {
        self.delete_where(|c| eq_ignore_case(c.name().as_str(), name))
    }

    /// Remove every creature whose species equals `species`, ignoring case.
    ///
    /// Returns how many were removed; zero is not an error.
    pub fn delete_by_species(&mut self, species: &str) -> usize {
        self.delete_where(|c| eq_ignore_case(c.species().as_str(), species))
    }

    fn delete_where(&mut self, predicate: impl Fn(&Creature) -> bool) -> usize {
        let before = self.creatures.len();
        self.creatures.retain(|c| !predicate(c));
        before - self.creatures.len()
    }
}
