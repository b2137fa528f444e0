//! Random infection generator.
//!
//! Draws a uniformly random infected subset without replacement by
//! rejecting and redrawing on collision.

use rand::Rng;

use crate::error::{PoolError, Result};
use crate::types::{InfectedSet, Individual};

/// Draws `infection_count` distinct individuals from `[0, population_size)`.
///
/// # Errors
/// Returns [`PoolError::InvalidConfiguration`] if the population is empty,
/// does not fit the identifier type, or is smaller than `infection_count`.
pub fn generate_infected<R: Rng + ?Sized>(
    rng: &mut R,
    population_size: usize,
    infection_count: usize,
) -> Result<InfectedSet> {
    if population_size == 0 {
        return Err(PoolError::invalid_config("population_size must be positive"));
    }
    if infection_count > population_size {
        return Err(PoolError::invalid_config(format!(
            "infection count {infection_count} exceeds population size {population_size}"
        )));
    }
    let upper = Individual::try_from(population_size - 1).map_err(|_| {
        PoolError::invalid_config(format!(
            "population_size {population_size} does not fit individual identifiers"
        ))
    })?;

    let mut infected = InfectedSet::new();
    while infected.len() < infection_count {
        // Collisions are simply redrawn.
        infected.insert(rng.random_range(0..=upper));
    }

    tracing::trace!(population_size, infection_count, "generated infected set");
    Ok(infected)
}
