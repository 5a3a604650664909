//! Queue command implementation
//!
//! The tester's combined worklist: overdue-and-untested entries regardless
//! of horizon, plus everything due between today and the horizon.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use ct_core::QueueRow;
use ct_store::SnapshotStore;

use crate::cli::{GlobalArgs, OutputFormat, QueueArgs};
use crate::commands::common;

/// Execute the queue command
pub async fn execute(args: &QueueArgs, global: &GlobalArgs) -> Result<()> {
    let store = common::open_store(global)?;
    let snapshot = store.load_snapshot().await?;

    let today = common::today();
    let end = match &args.end_date {
        Some(value) => ct_core::end_of_day(common::parse_date(value)?),
        None => ct_core::end_of_day(today + Duration::days(args.days)),
    };

    if global.verbose {
        eprintln!("[verbose] Queue horizon: {}", end.date());
    }

    let rows = ct_core::test_queue(&snapshot, today, end);

    match args.output {
        OutputFormat::Table => print_table(&rows, today),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("Failed to serialize queue")?
        ),
    }

    Ok(())
}

fn status(row: &QueueRow, today: NaiveDate) -> &'static str {
    if row.date_tested.is_some() {
        "tested"
    } else if row.date_due.date() < today {
        "overdue"
    } else if row.date_due.date() == today {
        "due today"
    } else {
        "scheduled"
    }
}

fn print_table(rows: &[QueueRow], today: NaiveDate) {
    if rows.is_empty() {
        println!("Queue is empty.");
        return;
    }

    let headers = [
        "CYLINDER", "DAY", "DUE", "STATUS", "CAST", "JOB", "MIX", "REQ", "PIECE", "OVEN", "ENTRY",
    ];
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.test_cylinder_code.clone(),
                r.day_num.to_string(),
                common::display_datetime(r.date_due),
                status(r, today).to_string(),
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

    let overdue = rows
        .iter()
        .filter(|r| status(r, today) == "overdue")
        .count();
    let due_today = rows
        .iter()
        .filter(|r| status(r, today) == "due today")
        .count();
    println!();
    println!(
        "{} cylinder(s): {} overdue, {} due today",
        rows.len(),
        overdue,
        due_today
    );
}
