//! Falsification Tests: Category A - Infection Generation (F001-F005)

use pooltest_core::{PoolError, generate_infected};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    /// F001: The generator returns exactly the requested number of
    /// distinct individuals, all inside the population.
    #[test]
    fn f001_exact_distinct_in_range(
        population in 1usize..5_000,
        fraction in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let count = (population as f64 * fraction).floor() as usize;
        let mut rng = StdRng::seed_from_u64(seed);
        let infected = generate_infected(&mut rng, population, count).unwrap();

        prop_assert_eq!(infected.len(), count);
        prop_assert!(infected.iter().all(|i| (i as usize) < population));
    }

    /// F002: Asking for more infections than individuals is rejected.
    #[test]
    fn f002_oversized_request_rejected(population in 1usize..1_000, extra in 1usize..100) {
        let mut rng = StdRng::seed_from_u64(0);
        let result = generate_infected(&mut rng, population, population + extra);
        prop_assert!(matches!(result, Err(PoolError::InvalidConfiguration(_))), "oversized request accepted");
    }
}

/// F003: Zero infections yields an empty set
#[test]
fn f003_zero_infections_empty() {
    let mut rng = StdRng::seed_from_u64(3);
    let infected = generate_infected(&mut rng, 1_000_000, 0).unwrap();
    assert!(infected.is_empty(), "F003 FALSIFIED: expected no infections");
}

/// F004: Infecting the whole population covers every individual
#[test]
fn f004_full_infection_covers_everyone() {
    let mut rng = StdRng::seed_from_u64(4);
    let infected = generate_infected(&mut rng, 500, 500).unwrap();
    assert!(
        (0..500).all(|i| infected.contains(i)),
        "F004 FALSIFIED: an individual was left uninfected"
    );
}

/// F005: Different seeds draw different sets
///
/// # Falsification Attempt
/// Two independent streams drawing 1000 of 1,000,000 should not coincide.
#[test]
fn f005_streams_are_independent() {
    let a = generate_infected(&mut StdRng::seed_from_u64(1), 1_000_000, 1000).unwrap();
    let b = generate_infected(&mut StdRng::seed_from_u64(2), 1_000_000, 1000).unwrap();
    assert_ne!(a, b, "F005 FALSIFIED: distinct seeds produced the same set");
}
