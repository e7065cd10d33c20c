//! CLI command handlers for the skillpath application.

use std::path::PathBuf;

use skillpath_state::{FileStore, StoreError};

mod fetch;
mod history;
mod process;
mod sync;
mod validate;

pub(crate) use fetch::handle_fetch_command;
pub(crate) use history::handle_history_command;
pub(crate) use process::handle_process_command;
pub(crate) use sync::handle_sync_command;
pub(crate) use validate::handle_validate_command;

/// Open the assessment store, honouring an explicit directory override.
pub(crate) fn open_store(data_dir: Option<PathBuf>) -> Result<FileStore, StoreError> {
    match data_dir {
        Some(dir) => FileStore::at(dir),
        None => FileStore::open(),
    }
}
