//! Command handling for the `skillpath` application.
//!
//! The binary defers here: [`run`] parses the command line, initializes
//! logging, and dispatches to the handler modules. Everything the
//! handlers do is plumbing; the assessment pipeline itself lives in the
//! `skillpath-assessment`, `skillpath-recommend`, `skillpath-schema`,
//! `skillpath-state`, and `skillpath-sync` crates.

pub mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_fetch_command, handle_history_command, handle_process_command, handle_sync_command,
    handle_validate_command,
};

/// The main entry point for the `skillpath` application.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            answers,
            format,
            dry_run,
            data_dir,
        } => handle_process_command(answers, format, dry_run, data_dir),
        Commands::Validate { payload, format } => handle_validate_command(payload, format),
        Commands::Sync {
            input,
            server,
            data_dir,
        } => handle_sync_command(input, server, data_dir),
        Commands::Fetch {
            assessment_id,
            server,
            format,
        } => handle_fetch_command(assessment_id, server, format),
        Commands::History { limit, data_dir } => handle_history_command(limit, data_dir),
    }
}
