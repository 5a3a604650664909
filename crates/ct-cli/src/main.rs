//! Casttrack CLI - tester worklists, historical reports, and result recording

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{queue, record, report, show, untested, upcoming};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Report(args) => report::execute(args, &cli.global).await,
        cli::Commands::Queue(args) => queue::execute(args, &cli.global).await,
        cli::Commands::Upcoming(args) => upcoming::execute(args, &cli.global).await,
        cli::Commands::Untested(args) => untested::execute(args, &cli.global).await,
        cli::Commands::Show(args) => show::execute(args, &cli.global).await,
        cli::Commands::Record(args) => record::execute(args, &cli.global).await,
    }
}
