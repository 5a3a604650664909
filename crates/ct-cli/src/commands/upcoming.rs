//! Upcoming command implementation

use anyhow::{Context, Result};
use ct_core::QueueRow;
use ct_store::SnapshotStore;

use crate::cli::{GlobalArgs, OutputFormat, UpcomingArgs};
use crate::commands::common;

/// Execute the upcoming command
pub async fn execute(args: &UpcomingArgs, global: &GlobalArgs) -> Result<()> {
    let store = common::open_store(global)?;
    let snapshot = store.load_snapshot().await?;

    let today = common::today();
    let rows = ct_core::upcoming_tests(&snapshot, today, args.days);

    if global.verbose {
        eprintln!(
            "[verbose] {} cylinder(s) due in the next {} day(s)",
            rows.len(),
            args.days
        );
    }

    match args.output {
        OutputFormat::Table => print_table(&rows, args.days),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("Failed to serialize upcoming tests")?
        ),
    }

    Ok(())
}

fn print_table(rows: &[QueueRow], days: i64) {
    if rows.is_empty() {
        println!("Nothing due in the next {} day(s).", days);
        return;
    }

    let headers = [
        "CYLINDER", "DAY", "DUE", "CAST", "JOB", "MIX", "REQ", "PIECE", "OVEN", "ENTRY",
    ];
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.test_cylinder_code.clone(),
                r.day_num.to_string(),
                common::display_datetime(r.date_due),
                format!(
                    "{} {}",
                    r.cast_date.format("%Y-%m-%d"),
                    common::display_time(r.cast_time)
                ),
                r.job_code.clone(),
                r.mix_design_code.clone(),
                r.required_psi.to_string(),
                r.piece_type.clone(),
                r.oven_id.clone().unwrap_or_else(|| "-".to_string()),
                r.test_set_day_id.to_string(),
            ]
        })
        .collect();

    common::print_table(&headers, &data);
}
