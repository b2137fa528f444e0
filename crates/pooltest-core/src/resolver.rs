//! Adaptive pooling resolver.
//!
//! Tests a group as a whole; a negative result clears every member with a
//! single test, a positive one splits the group per [`subgroup_size`] and
//! recurses until singletons are reached. Depth is bounded by the
//! schedule (at most four levels below a top-level pool once subgroups
//! reach size 1), so plain recursion is safe.

use crate::oracle::TestOracle;
use crate::schedule::subgroup_size;
use crate::types::Group;

/// Resolves `group` at `level`, returning the number of individuals
/// confirmed positive.
///
/// Subgroups are consecutive chunks of `group` in its given order; the last
/// chunk may be short and is resolved like any other.
pub fn resolve<O: TestOracle + ?Sized>(oracle: &mut O, group: Group<'_>, level: u32) -> usize {
    if group.len() == 1 {
        return usize::from(oracle.test(group));
    }

    if !oracle.test(group) {
        return 0;
    }

    let chunk = subgroup_size(level);
    tracing::trace!(level, size = group.len(), chunk, "positive group, splitting");

    group
        .chunks(chunk)
        .map(|subgroup| resolve(oracle, subgroup, level.saturating_add(1)))
        .sum()
}
