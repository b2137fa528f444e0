//! Core types for pooled testing.
//!
//! Individuals are plain indices in `[0, population_size)`. Groups are
//! borrowed slices in ascending identifier order, so chunking a group is
//! deterministic.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identifier of one individual in the population.
pub type Individual = u32;

/// A set of individuals tested together as one unit.
///
/// Members are kept in ascending order; subgroups are formed by chunking
/// this order.
pub type Group<'a> = &'a [Individual];

/// Ground-truth infected individuals for one trial.
///
/// Immutable once generated and discarded after the trial is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfectedSet(BTreeSet<Individual>);

impl InfectedSet {
    /// Creates an empty infected set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns true if the individual is infected.
    #[must_use]
    pub fn contains(&self, individual: Individual) -> bool {
        self.0.contains(&individual)
    }

    /// Number of infected individuals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nobody is infected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the infected individuals in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Individual> + '_ {
        self.0.iter().copied()
    }

    /// Inserts an individual, returning false if it was already present.
    pub(crate) fn insert(&mut self, individual: Individual) -> bool {
        self.0.insert(individual)
    }
}

impl FromIterator<Individual> for InfectedSet {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of one full population pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Tests consumed by the trial.
    pub tests_consumed: u64,
    /// Individuals the resolver confirmed positive.
    pub confirmed_positive: usize,
    /// Size of the ground-truth infected set.
    pub infected: usize,
    /// Number of top-level pools the population was split into.
    pub pools: usize,
}

impl TrialOutcome {
    /// Tests consumed per individual screened.
    #[must_use]
    pub fn tests_per_individual(&self, population_size: usize) -> f64 {
        if population_size == 0 {
            0.0
        } else {
            self.tests_consumed as f64 / population_size as f64
        }
    }
}
