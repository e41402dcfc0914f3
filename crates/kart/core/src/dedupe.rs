//! Collapses stat-identical entities into one representative.
//!
//! Many characters share a stat vector. The ranked search shows one row per
//! distinct vector, named after the first entity in load order that has it.
//! The equivalence path never dedupes, so any character can be picked by name.

use std::collections::HashSet;

use crate::stats::StatKey;
use crate::table::{AttributeTable, Entity};

/// Groups `table` by the values at `keys` and keeps the first entity of each
/// group. Groups appear in order of their first occurrence.
pub fn dedupe(table: &AttributeTable, keys: &[StatKey]) -> AttributeTable {
    let mut seen: HashSet<Vec<i32>> = HashSet::with_capacity(table.len());
    let mut representatives: Vec<Entity> = Vec::new();

    for entity in table {
        let group = entity.stats.project(keys);
        if seen.insert(group) {
            representatives.push(entity.clone());
        }
    }

    tracing::debug!(
        kind = %table.kind(),
        before = table.len(),
        after = representatives.len(),
        "deduplicated table"
    );

    AttributeTable::from_subset(table.kind(), representatives)
}
