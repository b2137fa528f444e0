//! Falsification Tests: Category B - Pool Test Oracle (F006-F010)

use pooltest_core::{InfectedSet, PoolOracle, TestOracle, is_positive};
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

proptest! {
    /// F006: The oracle is positive iff the group intersects the infected set.
    #[test]
    fn f006_positive_iff_intersection(
        infected in btree_set(0u32..200, 0..20),
        group in vec(0u32..200, 0..40),
    ) {
        let set: InfectedSet = infected.iter().copied().collect();
        let mut oracle = PoolOracle::new(&set);
        let expected = group.iter().any(|g| infected.contains(g));
        prop_assert_eq!(oracle.test(&group), expected);
    }

    /// F007: Every call consumes exactly one test, whatever the outcome.
    #[test]
    fn f007_one_test_per_call(
        infected in btree_set(0u32..100, 0..10),
        groups in vec(vec(0u32..100, 1..10), 0..30),
    ) {
        let set: InfectedSet = infected.into_iter().collect();
        let mut oracle = PoolOracle::new(&set);
        for (n, group) in groups.iter().enumerate() {
            let _ = oracle.test(group);
            prop_assert_eq!(oracle.tests_consumed(), n as u64 + 1);
        }
    }

    /// F008: The pure predicate is stable across repeated evaluation.
    #[test]
    fn f008_outcome_deterministic(
        infected in btree_set(0u32..64, 0..8),
        group in vec(0u32..64, 0..32),
    ) {
        let set: InfectedSet = infected.into_iter().collect();
        let first = is_positive(&group, &set);
        for _ in 0..5 {
            prop_assert_eq!(is_positive(&group, &set), first);
        }
    }
}

/// F009: A fresh oracle starts with a zero counter
#[test]
fn f009_fresh_oracle_counter_zero() {
    let set: InfectedSet = [1, 2, 3].into_iter().collect();
    let oracle = PoolOracle::new(&set);
    assert_eq!(oracle.tests_consumed(), 0, "F009 FALSIFIED: counter leaked");
}

/// F010: An empty infected set never yields a positive
#[test]
fn f010_clean_population_always_negative() {
    let set = InfectedSet::new();
    let mut oracle = PoolOracle::new(&set);
    let group: Vec<u32> = (0..1024).collect();
    for chunk in group.chunks(32) {
        assert!(!oracle.test(chunk), "F010 FALSIFIED: false positive");
    }
    assert_eq!(oracle.tests_consumed(), 32);
}
