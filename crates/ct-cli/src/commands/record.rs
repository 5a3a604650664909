//! Record command implementation
//!
//! Cylinders are addressed by their printed code; the command resolves codes
//! to ids through the schedule-entry details before submitting.

use anyhow::{bail, Context, Result};
use ct_core::{CylinderBreakInput, RecordTestResult};
use ct_store::SnapshotStore;

use crate::cli::{GlobalArgs, RecordArgs};
use crate::commands::common;

/// Execute the record command
pub async fn execute(args: &RecordArgs, global: &GlobalArgs) -> Result<()> {
    let store = common::open_store(global)?;
    let snapshot = store.load_snapshot().await?;

    let details = ct_core::test_day_details(&snapshot, args.id)
        .with_context(|| format!("Schedule entry {} not found", args.id))?;

    if details.date_tested.is_some() {
        log::warn!(
            "schedule entry {} already has a tested date; overwriting",
            args.id
        );
    }

    let mut cylinder_breaks = Vec::with_capacity(args.breaks.len());
    for spec in &args.breaks {
        let Some((code, psi)) = spec.split_once('=') else {
            bail!("Invalid break '{}', expected CODE=PSI", spec);
        };
        let break_psi: i32 = psi
            .trim()
            .parse()
            .with_context(|| format!("Invalid PSI value in '{}'", spec))?;
        let cylinder = details
            .cylinders
            .iter()
            .find(|c| c.code == code)
            .with_context(|| format!("No cylinder '{}' on schedule entry {}", code, args.id))?;

        cylinder_breaks.push(CylinderBreakInput {
            test_cylinder_id: cylinder.test_cylinder_id,
            break_psi,
        });
    }

    let request = RecordTestResult {
        test_set_day_id: args.id,
        date_tested: common::parse_datetime(&args.date_tested)?,
        comments: args.comments.clone(),
        cylinder_breaks,
    };

    store
        .record_result(&request)
        .await
        .context("Failed to record test result")?;

    println!(
        "Recorded {} break(s) for schedule entry {}",
        request.cylinder_breaks.len(),
        args.id
    );

    Ok(())
}
