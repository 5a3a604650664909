//! Shared snapshot builder for unit tests

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::entities::{
    Bed, Delivery, Job, MixBatch, MixDesign, MixDesignRequirement, Placement, Pour, ProductionDay,
    TestCylinder, TestSet, TestSetDay,
};
use crate::snapshot::Snapshot;

pub(crate) fn date(s: &str) -> NaiveDate {
    s.parse().expect("fixture date")
}

/// Parse "YYYY-MM-DD HH:MM" or "YYYY-MM-DD" (midnight).
pub(crate) fn datetime(s: &str) -> NaiveDateTime {
    if s.contains(' ') {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("fixture datetime")
    } else {
        date(s).and_time(NaiveTime::MIN)
    }
}

pub(crate) fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("fixture time")
}

/// Builds snapshots entity-by-entity with auto-assigned ids.
pub(crate) struct SnapshotBuilder {
    snapshot: Snapshot,
    next_id: i32,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::default(),
            next_id: 1,
        }
    }

    fn next(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn production_day(&mut self, day: &str) -> i32 {
        let id = self.next();
        self.snapshot.production_days.push(ProductionDay {
            production_day_id: id,
            date: date(day),
        });
        id
    }

    pub fn job(&mut self, code: &str, name: &str) -> i32 {
        let id = self.next();
        self.snapshot.jobs.push(Job {
            job_id: id,
            code: code.to_string(),
            name: name.to_string(),
        });
        id
    }

    pub fn bed(&mut self) -> i32 {
        let id = self.next();
        self.snapshot.beds.push(Bed { bed_id: id });
        id
    }

    pub fn pour(&mut self, job_id: i32, bed_id: i32) -> i32 {
        let id = self.next();
        self.snapshot.pours.push(Pour {
            pour_id: id,
            job_id,
            bed_id,
        });
        id
    }

    pub fn mix_design(&mut self, code: &str) -> i32 {
        let id = self.next();
        self.snapshot.mix_designs.push(MixDesign {
            mix_design_id: id,
            code: code.to_string(),
        });
        id
    }

    pub fn requirement(&mut self, mix_design_id: i32, test_type: i32, required_psi: i32) -> i32 {
        let id = self.next();
        self.snapshot
            .mix_design_requirements
            .push(MixDesignRequirement {
                mix_design_requirement_id: id,
                mix_design_id,
                test_type,
                required_psi,
            });
        id
    }

    pub fn mix_batch(&mut self, production_day_id: i32, mix_design_id: i32) -> i32 {
        let id = self.next();
        self.snapshot.mix_batches.push(MixBatch {
            mix_batch_id: id,
            production_day_id,
            mix_design_id,
        });
        id
    }

    pub fn placement(
        &mut self,
        mix_batch_id: i32,
        pour_id: i32,
        start_time: Option<&str>,
        oven_id: Option<&str>,
        piece_type: Option<&str>,
        volume: f64,
    ) -> i32 {
        let id = self.next();
        self.snapshot.placements.push(Placement {
            placement_id: id,
            pour_id,
            mix_batch_id,
            piece_type: piece_type.map(str::to_string),
            volume,
            start_time: start_time.map(time),
            oven_id: oven_id.map(str::to_string),
        });
        id
    }

    pub fn delivery(&mut self, placement_id: i32, truck_id: &str) -> i32 {
        let id = self.next();
        self.snapshot.deliveries.push(Delivery {
            delivery_id: id,
            placement_id,
            truck_id: truck_id.to_string(),
        });
        id
    }

    pub fn test_set(&mut self, placement_id: i32) -> i32 {
        let id = self.next();
        self.snapshot.test_sets.push(TestSet {
            test_set_id: id,
            placement_id,
        });
        id
    }

    pub fn test_day(
        &mut self,
        test_set_id: i32,
        day_num: i32,
        date_due: &str,
        date_tested: Option<&str>,
    ) -> i32 {
        let id = self.next();
        self.snapshot.test_set_days.push(TestSetDay {
            test_set_day_id: id,
            test_set_id,
            day_num,
            date_due: datetime(date_due),
            date_tested: date_tested.map(datetime),
            comments: None,
        });
        id
    }

    pub fn cylinder(&mut self, test_set_day_id: i32, code: &str, break_psi: Option<i32>) -> i32 {
        let id = self.next();
        self.snapshot.test_cylinders.push(TestCylinder {
            test_cylinder_id: id,
            test_set_day_id,
            code: code.to_string(),
            break_psi,
        });
        id
    }

    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}

/// A placement with one test set scheduled at all three ages, used by tests
/// that only need a single plausible pour.
pub(crate) fn single_placement_snapshot() -> Snapshot {
    let mut b = SnapshotBuilder::new();
    let day = b.production_day("2025-09-09");
    let design = b.mix_design("824.1");
    b.requirement(design, 1, 3000);
    b.requirement(design, 7, 3500);
    b.requirement(design, 28, 5000);
    let batch = b.mix_batch(day, design);
    let job = b.job("25-020", "Woodbury HS");
    let bed = b.bed();
    let pour = b.pour(job, bed);
    let placement = b.placement(batch, pour, Some("08:00"), None, Some("Walls"), 8.5);
    let set = b.test_set(placement);
    let d1 = b.test_day(set, 1, "2025-09-10", None);
    b.cylinder(d1, "1C-1", None);
    b.cylinder(d1, "1C-2", None);
    let d7 = b.test_day(set, 7, "2025-09-16", None);
    b.cylinder(d7, "7C-1", None);
    b.cylinder(d7, "7C-2", None);
    let d28 = b.test_day(set, 28, "2025-10-07", None);
    b.cylinder(d28, "28C-1", None);
    b.cylinder(d28, "28C-2", None);
    b.cylinder(d28, "28C-3", None);
    b.build()
}
