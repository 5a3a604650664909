//! Untested command implementation
//!
//! Sweeps for placements that never got test cylinders made, so schedulers
//! catch them while the concrete is still young.

use anyhow::{Context, Result};
use ct_core::UntestedPlacement;
use ct_store::SnapshotStore;

use crate::cli::{GlobalArgs, OutputFormat, UntestedArgs};
use crate::commands::common;

/// Execute the untested command
pub async fn execute(args: &UntestedArgs, global: &GlobalArgs) -> Result<()> {
    let store = common::open_store(global)?;
    let snapshot = store.load_snapshot().await?;

    let today = common::today();
    let placements = ct_core::untested_placements(&snapshot, today, args.days_back);

    match args.output {
        OutputFormat::Table => print_table(&placements, args.days_back),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&placements)
                .context("Failed to serialize untested placements")?
        ),
    }

    Ok(())
}

fn print_table(placements: &[UntestedPlacement], days_back: i64) {
    if placements.is_empty() {
        println!(
            "Every placement in the last {} day(s) has a test set.",
            days_back
        );
        return;
    }

    let headers = [
        "PLACEMENT", "POUR", "CAST", "TIME", "JOB", "MIX", "PIECE", "YARDS",
    ];
    let data: Vec<Vec<String>> = placements
        .iter()
        .map(|p| {
            vec![
                p.placement_id.to_string(),
                p.pour_id.to_string(),
                p.cast_date.format("%Y-%m-%d").to_string(),
                common::display_time(p.cast_time),
                p.job_code.clone(),
                p.mix_design_code.clone(),
                p.piece_type.clone(),
                format!("{:.2}", p.volume),
            ]
        })
        .collect();

    common::print_table(&headers, &data);

    println!();
    println!("{} placement(s) with no scheduled tests", placements.len());
}
