//! Placement sequencing within mix batches
//!
//! One-day tests are identified per placement, so each placement in a mix
//! batch gets a 1-based ordinal that becomes the suffix of its computed test
//! id ("1042.1", "1042.2", ...). Batch-level 7/28-day tests carry the bare
//! batch id and never consult this map.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::entities::Placement;
use crate::snapshot::{Snapshot, SnapshotIndex, TestDayContext};

/// Ordinal for each placement holding a 1-day test, keyed by
/// `(mix_batch_id, placement_id)`.
///
/// Within a batch, placements order by (start time, oven id), both ascending,
/// absent values first, oven ids compared lexically. Ordinals run 1..N in
/// that order.
pub fn placement_ordinals(snapshot: &Snapshot) -> HashMap<(i32, i32), u32> {
    let index = SnapshotIndex::new(snapshot);
    ordinals_from_contexts(&index.test_day_contexts())
}

pub(crate) fn ordinals_from_contexts(contexts: &[TestDayContext<'_>]) -> HashMap<(i32, i32), u32> {
    // Group the placements carrying 1-day tests by mix batch.
    let mut groups: BTreeMap<i32, Vec<&Placement>> = BTreeMap::new();
    for ctx in contexts.iter().filter(|c| c.day.day_num == 1) {
        groups
            .entry(ctx.mix_batch.mix_batch_id)
            .or_default()
            .push(ctx.placement);
    }

    let mut ordinals = HashMap::new();
    for (mix_batch_id, mut placements) in groups {
        let mut seen = HashSet::new();
        placements.retain(|p| seen.insert(p.placement_id));
        placements.sort_by(|a, b| {
            (a.start_time, a.oven_id.as_deref()).cmp(&(b.start_time, b.oven_id.as_deref()))
        });

        for (i, placement) in placements.iter().enumerate() {
            ordinals.insert((mix_batch_id, placement.placement_id), i as u32 + 1);
        }
    }

    ordinals
}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod tests;
