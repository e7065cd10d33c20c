use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for the `skillpath` application.
#[derive(Debug, Parser)]
#[command(
    name = "skillpath",
    about = "Skill assessment scoring, learning-path generation, and progress sync"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `skillpath` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scores an answer file and generates the learning path.
    Process {
        /// Answers JSON file, keyed by question id or by category name.
        #[arg(required = true)]
        answers: PathBuf,
        /// Output format: "text" or "json".
        #[arg(long, default_value = "text")]
        format: String,
        /// Analyze only; records nothing locally.
        #[arg(long, default_value_t = false)]
        dry_run: bool,
        /// Data directory override (default: the platform data dir).
        #[arg(long, env = "SKILLPATH_DATA_DIR", value_name = "DIR")]
        data_dir: Option<PathBuf>,
    },
    /// Validates a payload file against the progress schema.
    Validate {
        /// Payload JSON file to validate.
        #[arg(required = true)]
        payload: PathBuf,
        /// Output format: "text" or "json".
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Uploads the most recent recorded assessment to the progress server.
    Sync {
        /// Payload JSON file to upload instead of the stored assessment.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Progress server base URL.
        #[arg(long, env = "SKILLPATH_SERVER_URL", value_name = "URL")]
        server: Option<String>,
        /// Data directory override (default: the platform data dir).
        #[arg(long, env = "SKILLPATH_DATA_DIR", value_name = "DIR")]
        data_dir: Option<PathBuf>,
    },
    /// Downloads a stored assessment from the progress server.
    Fetch {
        /// Assessment id to fetch.
        #[arg(long, default_value = skillpath_schema::ASSESSMENT_ID)]
        assessment_id: String,
        /// Progress server base URL.
        #[arg(long, env = "SKILLPATH_SERVER_URL", value_name = "URL")]
        server: Option<String>,
        /// Output format: "text" or "json".
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Lists locally recorded assessments.
    History {
        /// Limits number of entries shown (most recent first).
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Data directory override (default: the platform data dir).
        #[arg(long, env = "SKILLPATH_DATA_DIR", value_name = "DIR")]
        data_dir: Option<PathBuf>,
    },
}
