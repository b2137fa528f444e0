//! Level-indexed subgroup sizes for the adaptive split.
//!
//! The schedule is fixed at 9, 3, then 1: with 32-wide top-level pools this
//! gives the 32 → 9 → 3 → 1 search tree. Sizes are hardcoded rather than
//! derived from the square root of the remaining group, so test-count
//! statistics stay comparable across runs and implementations.

/// Recursion level of a top-level pool.
pub const TOP_LEVEL: u32 = 1;

/// Subgroup size at level 1.
pub const LEVEL_ONE_SUBGROUP: usize = 9;

/// Subgroup size at level 2.
pub const LEVEL_TWO_SUBGROUP: usize = 3;

/// Size of the subgroups a positive group at `level` is split into.
///
/// Levels outside the schedule, including 0, split straight to singletons.
#[must_use]
pub const fn subgroup_size(level: u32) -> usize {
    match level {
        TOP_LEVEL => LEVEL_ONE_SUBGROUP,
        2 => LEVEL_TWO_SUBGROUP,
        _ => 1,
    }
}
