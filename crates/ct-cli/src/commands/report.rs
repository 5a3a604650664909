//! Report command implementation
//!
//! Prints the denormalized historical report. Field values come from
//! ct-core verbatim; JSON output is the byte-for-byte contract downstream
//! consumers compare against.

use anyhow::{Context, Result};
use ct_core::ReportRow;
use ct_store::SnapshotStore;

use crate::cli::{GlobalArgs, OutputFormat, ReportArgs};
use crate::commands::common;

/// Execute the report command
pub async fn execute(args: &ReportArgs, global: &GlobalArgs) -> Result<()> {
    let store = common::open_store(global)?;
    let snapshot = store.load_snapshot().await?;
    let rows = ct_core::build_report(&snapshot);

    if global.verbose {
        eprintln!("[verbose] {} report row(s)", rows.len());
    }

    match args.output {
        OutputFormat::Table => print_table(&rows),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("Failed to serialize report")?
        ),
    }

    Ok(())
}

fn print_table(rows: &[ReportRow]) {
    if rows.is_empty() {
        println!("No scheduled tests in the snapshot.");
        return;
    }

    let headers = [
        "TEST", "CYL", "CAST", "MIX", "JOB", "PIECE", "TRUCKS", "REQ", "BRK 1", "BRK 2", "BRK 3",
        "AVG", "AGE", "TESTED", "COMMENTS",
    ];
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.test_id.clone(),
                r.cylinder_id.clone(),
                r.casting_date.clone(),
                r.mix_design.clone(),
                r.job_code.clone(),
                r.piece_type.clone(),
                r.truck_numbers.clone(),
                r.required_psi.clone(),
                r.break1.clone(),
                r.break2.clone(),
                r.break3.clone(),
                r.average_psi.clone(),
                r.age_of_test.clone(),
                r.testing_date.clone(),
                r.comments.clone(),
            ]
        })
        .collect();

    common::print_table(&headers, &data);
}
