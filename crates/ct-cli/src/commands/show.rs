//! Show command implementation

use anyhow::Result;
use ct_store::SnapshotStore;

use crate::cli::{GlobalArgs, ShowArgs};
use crate::commands::common::{self, ExitCode};

/// Execute the show command
pub async fn execute(args: &ShowArgs, global: &GlobalArgs) -> Result<()> {
    let store = common::open_store(global)?;
    let snapshot = store.load_snapshot().await?;

    let Some(details) = ct_core::test_day_details(&snapshot, args.id) else {
        eprintln!("Schedule entry {} not found", args.id);
        return Err(ExitCode(1).into());
    };

    println!(
        "Schedule entry {} ({}-day test)",
        details.test_set_day_id, details.day_num
    );
    println!("Due:      {}", common::display_datetime(details.date_due));
    println!(
        "Tested:   {}",
        details
            .date_tested
            .map(common::display_datetime)
            .unwrap_or_else(|| "-".to_string())
    );
    println!("Job:      {} {}", details.job_code, details.job_name);
    println!(
        "Mix:      {} (required {} PSI)",
        details.mix_design_code, details.required_psi
    );
    println!("Piece:    {}", details.piece_type);
    println!(
        "Cast:     {} {}",
        details.cast_date.format("%Y-%m-%d"),
        common::display_time(details.cast_time)
    );
    println!("Comments: {}", details.comments.as_deref().unwrap_or("-"));
    println!();

    let headers = ["CYLINDER", "BREAK PSI"];
    let rows: Vec<Vec<String>> = details
        .cylinders
        .iter()
        .map(|c| {
            vec![
                c.code.clone(),
                c.break_psi
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    common::print_table(&headers, &rows);

    Ok(())
}
