//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Casttrack - test-cylinder scheduling and reporting for a precast plant
#[derive(Parser, Debug)]
#[command(name = "ct")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the snapshot data file
    #[arg(short, long, global = true, default_value = "casttrack.json")]
    pub data: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the historical concrete-test report
    Report(ReportArgs),

    /// Show the tester queue: overdue entries plus everything due through the horizon
    Queue(QueueArgs),

    /// List tests due in the next N days
    Upcoming(UpcomingArgs),

    /// List recent placements that never got test cylinders
    Untested(UntestedArgs),

    /// Show one schedule entry with its cylinders
    Show(ShowArgs),

    /// Record break results for a schedule entry
    Record(RecordArgs),
}

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the queue command
#[derive(Args, Debug)]
pub struct QueueArgs {
    /// Horizon in days from today
    #[arg(short = 'n', long, default_value_t = 7)]
    pub days: i64,

    /// Explicit horizon date (YYYY-MM-DD); overrides --days
    #[arg(short, long)]
    pub end_date: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the upcoming command
#[derive(Args, Debug)]
pub struct UpcomingArgs {
    /// Window size in days, starting tomorrow
    #[arg(short = 'n', long, default_value_t = 7)]
    pub days: i64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the untested command
#[derive(Args, Debug)]
pub struct UntestedArgs {
    /// How many days back to sweep
    #[arg(short = 'n', long, default_value_t = 7)]
    pub days_back: i64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Schedule entry (test set day) id
    pub id: i32,
}

/// Arguments for the record command
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Schedule entry (test set day) id
    pub id: i32,

    /// When the test was performed: "YYYY-MM-DD" or "YYYY-MM-DD HH:MM"
    #[arg(long)]
    pub date_tested: String,

    /// Free-text comments for the entry
    #[arg(long)]
    pub comments: Option<String>,

    /// Break result as CODE=PSI (repeatable)
    #[arg(long = "break", value_name = "CODE=PSI")]
    pub breaks: Vec<String>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned table
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
