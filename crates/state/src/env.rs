//! Data directory resolution.

use std::path::PathBuf;

use crate::store::StoreError;

/// Environment variable that overrides the data directory entirely.
pub const DATA_DIR_ENV: &str = "SKILLPATH_DATA_DIR";

/// Directory name under the platform data dir.
const APP_DIR: &str = "skillpath";

/// Returns the directory assessment state lives in.
///
/// `SKILLPATH_DATA_DIR` wins when set and non-empty; otherwise the
/// platform data directory plus `skillpath`.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
        if !custom.is_empty() {
            return Ok(PathBuf::from(custom));
        }
    }
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or(StoreError::NoDataDir)
}
