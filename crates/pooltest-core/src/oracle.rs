//! Pool test oracle.
//!
//! Answers whether a group contains at least one infected individual.
//! Every invocation consumes one test, whatever the outcome; nothing is
//! cached.

use crate::types::{Group, InfectedSet};

/// A diagnostic test applied to a whole group at once.
pub trait TestOracle {
    /// Tests the group, consuming exactly one test.
    ///
    /// Returns true iff the group contains an infected individual.
    fn test(&mut self, group: Group<'_>) -> bool;

    /// Tests consumed so far.
    fn tests_consumed(&self) -> u64;
}

/// Returns true iff `group` intersects `infected`.
///
/// Pure predicate with no counter side effect; stops at the first match.
#[must_use]
pub fn is_positive(group: Group<'_>, infected: &InfectedSet) -> bool {
    group.iter().any(|&individual| infected.contains(individual))
}

/// Oracle backed by a trial's ground-truth infected set.
///
/// The counter is scoped to the oracle, so each trial starts from zero.
#[derive(Debug)]
pub struct PoolOracle<'a> {
    infected: &'a InfectedSet,
    tests: u64,
}

impl<'a> PoolOracle<'a> {
    /// Creates an oracle with a zeroed test counter.
    #[must_use]
    pub const fn new(infected: &'a InfectedSet) -> Self {
        Self { infected, tests: 0 }
    }

    /// The ground-truth infected set.
    #[must_use]
    pub const fn infected(&self) -> &InfectedSet {
        self.infected
    }
}

impl TestOracle for PoolOracle<'_> {
    fn test(&mut self, group: Group<'_>) -> bool {
        self.tests += 1;
        is_positive(group, self.infected)
    }

    fn tests_consumed(&self) -> u64 {
        self.tests
    }
}
