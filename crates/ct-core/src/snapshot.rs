//! In-memory snapshot of the plant record set
//!
//! The storage collaborator materializes the full entity graph once, before
//! any computation runs. The core never issues further queries: joins are
//! performed through [`SnapshotIndex`], a set of request-scoped lookup maps
//! built per computation and discarded with it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::{
    Bed, Delivery, Job, MixBatch, MixDesign, MixDesignRequirement, Placement, Pour, ProductionDay,
    TestCylinder, TestSet, TestSetDay,
};

/// Flat tables for every entity the engine consumes.
///
/// Tables may be empty but are never implicitly reordered; iteration order of
/// child collections (cylinders, deliveries) follows table order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub production_days: Vec<ProductionDay>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub beds: Vec<Bed>,
    #[serde(default)]
    pub pours: Vec<Pour>,
    #[serde(default)]
    pub mix_designs: Vec<MixDesign>,
    #[serde(default)]
    pub mix_design_requirements: Vec<MixDesignRequirement>,
    #[serde(default)]
    pub mix_batches: Vec<MixBatch>,
    #[serde(default)]
    pub placements: Vec<Placement>,
    #[serde(default)]
    pub deliveries: Vec<Delivery>,
    #[serde(default)]
    pub test_sets: Vec<TestSet>,
    #[serde(default)]
    pub test_set_days: Vec<TestSetDay>,
    #[serde(default)]
    pub test_cylinders: Vec<TestCylinder>,
}

/// Request-scoped join indexes over one snapshot.
pub(crate) struct SnapshotIndex<'a> {
    pub production_days: HashMap<i32, &'a ProductionDay>,
    pub jobs: HashMap<i32, &'a Job>,
    pub beds: HashMap<i32, &'a Bed>,
    pub pours: HashMap<i32, &'a Pour>,
    pub mix_designs: HashMap<i32, &'a MixDesign>,
    pub mix_batches: HashMap<i32, &'a MixBatch>,
    pub placements: HashMap<i32, &'a Placement>,
    pub test_sets: HashMap<i32, &'a TestSet>,
    /// (mix_design_id, test_type) -> required PSI
    requirements: HashMap<(i32, i32), i32>,
    pub deliveries_by_placement: HashMap<i32, Vec<&'a Delivery>>,
    pub cylinders_by_day: HashMap<i32, Vec<&'a TestCylinder>>,
    pub test_sets_by_placement: HashMap<i32, Vec<&'a TestSet>>,
    snapshot: &'a Snapshot,
}

/// One test-set day joined with its full identifying context.
pub(crate) struct TestDayContext<'a> {
    pub day: &'a TestSetDay,
    pub test_set: &'a TestSet,
    pub placement: &'a Placement,
    pub mix_batch: &'a MixBatch,
    pub mix_design: &'a MixDesign,
    pub production_day: &'a ProductionDay,
    pub pour: &'a Pour,
    pub job: &'a Job,
    pub bed: &'a Bed,
    pub cylinders: Vec<&'a TestCylinder>,
    pub deliveries: Vec<&'a Delivery>,
    pub required_psi: i32,
}

impl<'a> SnapshotIndex<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        let mut requirements = HashMap::new();
        for req in &snapshot.mix_design_requirements {
            requirements.insert((req.mix_design_id, req.test_type), req.required_psi);
        }

        let mut deliveries_by_placement: HashMap<i32, Vec<&Delivery>> = HashMap::new();
        for delivery in &snapshot.deliveries {
            deliveries_by_placement
                .entry(delivery.placement_id)
                .or_default()
                .push(delivery);
        }

        let mut cylinders_by_day: HashMap<i32, Vec<&TestCylinder>> = HashMap::new();
        for cylinder in &snapshot.test_cylinders {
            cylinders_by_day
                .entry(cylinder.test_set_day_id)
                .or_default()
                .push(cylinder);
        }

        let mut test_sets_by_placement: HashMap<i32, Vec<&TestSet>> = HashMap::new();
        for test_set in &snapshot.test_sets {
            test_sets_by_placement
                .entry(test_set.placement_id)
                .or_default()
                .push(test_set);
        }

        Self {
            production_days: by_id(&snapshot.production_days, |d| d.production_day_id),
            jobs: by_id(&snapshot.jobs, |j| j.job_id),
            beds: by_id(&snapshot.beds, |b| b.bed_id),
            pours: by_id(&snapshot.pours, |p| p.pour_id),
            mix_designs: by_id(&snapshot.mix_designs, |m| m.mix_design_id),
            mix_batches: by_id(&snapshot.mix_batches, |m| m.mix_batch_id),
            placements: by_id(&snapshot.placements, |p| p.placement_id),
            test_sets: by_id(&snapshot.test_sets, |t| t.test_set_id),
            requirements,
            deliveries_by_placement,
            cylinders_by_day,
            test_sets_by_placement,
            snapshot,
        }
    }

    /// Required PSI for a mix design at a test age; 0 when no requirement
    /// record exists.
    pub fn required_psi(&self, mix_design_id: i32, day_num: i32) -> i32 {
        self.requirements
            .get(&(mix_design_id, day_num))
            .copied()
            .unwrap_or(0)
    }

    /// Join every test-set day with its full context, in table order.
    ///
    /// Days whose foreign keys do not resolve are skipped, not errored.
    pub fn test_day_contexts(&self) -> Vec<TestDayContext<'a>> {
        self.snapshot
            .test_set_days
            .iter()
            .filter_map(|day| self.test_day_context(day))
            .collect()
    }

    pub fn test_day_context(&self, day: &'a TestSetDay) -> Option<TestDayContext<'a>> {
        let test_set = self.test_sets.get(&day.test_set_id)?;
        let placement = self.placements.get(&test_set.placement_id)?;
        let mix_batch = self.mix_batches.get(&placement.mix_batch_id)?;
        let mix_design = self.mix_designs.get(&mix_batch.mix_design_id)?;
        let production_day = self.production_days.get(&mix_batch.production_day_id)?;
        let pour = self.pours.get(&placement.pour_id)?;
        let job = self.jobs.get(&pour.job_id)?;
        let bed = self.beds.get(&pour.bed_id)?;

        Some(TestDayContext {
            day,
            test_set,
            placement,
            mix_batch,
            mix_design,
            production_day,
            pour,
            job,
            bed,
            cylinders: self
                .cylinders_by_day
                .get(&day.test_set_day_id)
                .cloned()
                .unwrap_or_default(),
            deliveries: self
                .deliveries_by_placement
                .get(&placement.placement_id)
                .cloned()
                .unwrap_or_default(),
            required_psi: self.required_psi(mix_batch.mix_design_id, day.day_num),
        })
    }
}

fn by_id<T, F: Fn(&T) -> i32>(items: &[T], id: F) -> HashMap<i32, &T> {
    items.iter().map(|item| (id(item), item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::SnapshotBuilder;

    #[test]
    fn test_contexts_join_full_graph() {
        let mut b = SnapshotBuilder::new();
        let day = b.production_day("2025-09-09");
        let design = b.mix_design("824.1");
        b.requirement(design, 7, 3500);
        let batch = b.mix_batch(day, design);
        let job = b.job("25-020", "Woodbury HS");
        let bed = b.bed();
        let pour = b.pour(job, bed);
        let placement = b.placement(batch, pour, Some("08:00"), None, Some("Walls"), 8.5);
        let set = b.test_set(placement);
        let tsd = b.test_day(set, 7, "2025-09-16", None);
        b.cylinder(tsd, "7C-1", Some(3600));
        b.cylinder(tsd, "7C-2", None);

        let snapshot = b.build();
        let index = SnapshotIndex::new(&snapshot);
        let contexts = index.test_day_contexts();

        assert_eq!(contexts.len(), 1);
        let ctx = &contexts[0];
        assert_eq!(ctx.job.code, "25-020");
        assert_eq!(ctx.mix_design.code, "824.1");
        assert_eq!(ctx.required_psi, 3500);
        assert_eq!(ctx.cylinders.len(), 2);
    }

    #[test]
    fn test_day_with_dangling_test_set_is_skipped() {
        let mut b = SnapshotBuilder::new();
        let day = b.production_day("2025-09-09");
        let design = b.mix_design("824.1");
        let batch = b.mix_batch(day, design);
        let job = b.job("25-020", "Woodbury HS");
        let bed = b.bed();
        let pour = b.pour(job, bed);
        let placement = b.placement(batch, pour, None, None, None, 4.0);
        let set = b.test_set(placement);
        b.test_day(set, 7, "2025-09-16", None);

        let mut snapshot = b.build();
        // Point the day at a test set that does not exist.
        snapshot.test_set_days[0].test_set_id = 999;

        let index = SnapshotIndex::new(&snapshot);
        assert!(index.test_day_contexts().is_empty());
    }

    #[test]
    fn test_required_psi_defaults_to_zero() {
        let snapshot = Snapshot::default();
        let index = SnapshotIndex::new(&snapshot);
        assert_eq!(index.required_psi(1, 7), 0);
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let mut b = SnapshotBuilder::new();
        let day = b.production_day("2025-09-09");
        let design = b.mix_design("824.1");
        b.requirement(design, 7, 3500);
        let batch = b.mix_batch(day, design);
        let job = b.job("25-020", "Woodbury HS");
        let bed = b.bed();
        let pour = b.pour(job, bed);
        let placement = b.placement(batch, pour, Some("08:00"), Some("A1"), Some("Walls"), 8.5);
        b.delivery(placement, "3");
        let set = b.test_set(placement);
        let tsd = b.test_day(set, 7, "2025-09-16", Some("2025-09-16 14:00"));
        b.cylinder(tsd, "7C-1", Some(3600));
        let snapshot = b.build();

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_missing_tables_deserialize_as_empty() {
        let parsed: Snapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Snapshot::default());
    }
}
