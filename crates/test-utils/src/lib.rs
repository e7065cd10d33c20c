//! Shared test utilities for skillpath crates.
//!
//! Common fixtures used across the workspace: a guard that serializes
//! env-mutating tests, RAII env-var overrides, and a tempdir fixture
//! pre-wired for the assessment data directory.

use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set (or remove, with `None`) an environment variable, returning a guard
/// that restores the original value on drop.
///
/// # Example
/// ```
/// let _guard = skillpath_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value" until _guard drops.
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Tempdir-backed fixture for tests that touch assessment state on disk.
///
/// Owns an isolated data directory and hands out guards that point
/// `SKILLPATH_DATA_DIR` at it. Everything is cleaned up when the fixture
/// is dropped.
pub struct TestFixture {
    pub tempdir: tempfile::TempDir,
    /// Directory assessment state is written to.
    pub data_dir: PathBuf,
}

impl TestFixture {
    /// Create a fixture with an empty `data/` directory.
    ///
    /// Does NOT touch the environment - use [`TestFixture::data_guard`]
    /// for that.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let data_dir = tempdir.path().join("data");
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { tempdir, data_dir })
    }

    /// The path that should be exported as `SKILLPATH_DATA_DIR`.
    pub fn data_path(&self) -> &Path {
        &self.data_dir
    }

    /// Create an RAII guard that points `SKILLPATH_DATA_DIR` at this
    /// fixture's data directory.
    pub fn data_guard(&self) -> EnvVarGuard {
        set_env_var(
            "SKILLPATH_DATA_DIR",
            Some(self.data_path().to_str().unwrap()),
        )
    }

    /// Write an answers JSON file into the fixture root.
    ///
    /// Returns the path to the written file.
    pub fn write_answers(&self, name: &str, json: &str) -> std::io::Result<PathBuf> {
        let path = self.tempdir.path().join(name);
        std::fs::write(&path, json)?;
        Ok(path)
    }
}

/// A complete by-question answer set covering all 18 questions.
///
/// Mixed profile: weak AI-assisted ratings, strong edge ratings, neutral
/// everywhere else.
pub fn sample_answers() -> serde_json::Value {
    let ratings = [2, 1, 2, 3, 3, 3, 4, 5, 5, 3, 3, 3, 3, 3, 3, 3, 3, 3];
    serde_json::Value::Object(
        ratings
            .iter()
            .enumerate()
            .map(|(i, rating)| (format!("q{}", i + 1), serde_json::json!(rating)))
            .collect(),
    )
}

/// The same mixed profile keyed by category instead of question id.
pub fn sample_category_answers() -> serde_json::Value {
    serde_json::json!({
        "ai-assisted-engineering": [2, 1, 2],
        "prompt-engineering": [3, 3, 3],
        "edge-deployment": [4, 5, 5],
        "system-troubleshooting": [3, 3, 3],
        "project-planning": [3, 3, 3],
        "data-analytics": [3, 3, 3],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_guard_serializes_tests() {
        // Simply verify we can acquire the guard
        let _g = env_guard();
        // Guard should drop cleanly
    }

    #[test]
    fn test_set_env_var_sets_and_restores() {
        let _g = env_guard();

        // Use a unique key to avoid conflicts
        const KEY: &str = "SKILLPATH_TEST_UTILS_TEST_VAR";

        // Ensure clean state
        std::env::remove_var(KEY);

        {
            let _guard = set_env_var(KEY, Some("test_value"));
            assert_eq!(std::env::var(KEY).ok(), Some("test_value".to_string()));
        }
        // After guard drops, should be restored (removed since it didn't exist)
        assert!(std::env::var(KEY).is_err());
    }

    #[test]
    fn test_set_env_var_restores_previous_value() {
        let _g = env_guard();

        const KEY: &str = "SKILLPATH_TEST_RESTORE_VAR";
        std::env::set_var(KEY, "original");

        {
            let _guard = set_env_var(KEY, Some("changed"));
            assert_eq!(std::env::var(KEY).ok(), Some("changed".to_string()));
        }
        // After guard drops, should restore original
        assert_eq!(std::env::var(KEY).ok(), Some("original".to_string()));

        // Cleanup
        std::env::remove_var(KEY);
    }

    #[test]
    fn test_set_env_var_removes_when_none() {
        let _g = env_guard();

        const KEY: &str = "SKILLPATH_TEST_REMOVE_VAR";
        std::env::set_var(KEY, "exists");

        {
            let _guard = set_env_var(KEY, None);
            assert!(std::env::var(KEY).is_err());
        }
        // After guard drops, original value restored
        assert_eq!(std::env::var(KEY).ok(), Some("exists".to_string()));

        // Cleanup
        std::env::remove_var(KEY);
    }

    #[test]
    fn test_fixture_creates_data_dir() {
        let fixture = TestFixture::new().expect("fixture creation");
        assert!(fixture.data_dir.exists());
        assert!(fixture.data_dir.is_dir());
        assert_eq!(fixture.data_path(), fixture.data_dir.as_path());
    }

    #[test]
    fn test_fixture_data_guard() {
        let _g = env_guard();
        let fixture = TestFixture::new().expect("fixture creation");

        let original = std::env::var("SKILLPATH_DATA_DIR").ok();
        {
            let _data_guard = fixture.data_guard();
            let exported = std::env::var("SKILLPATH_DATA_DIR").unwrap();
            assert_eq!(exported, fixture.data_path().to_str().unwrap());
        }
        // Restored after guard drops
        assert_eq!(std::env::var("SKILLPATH_DATA_DIR").ok(), original);
    }

    #[test]
    fn test_fixture_write_answers() {
        let fixture = TestFixture::new().expect("fixture creation");
        let path = fixture
            .write_answers("answers.json", r#"{"q1": 4}"#)
            .expect("write answers");

        assert!(path.exists());
        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["q1"], serde_json::json!(4));
    }

    #[test]
    fn test_sample_answers_cover_every_question() {
        let answers = sample_answers();
        let map = answers.as_object().expect("object");
        assert_eq!(map.len(), 18);
        for n in 1..=18 {
            let rating = map[&format!("q{n}")].as_u64().expect("numeric rating");
            assert!((1..=5).contains(&rating));
        }
    }

    #[test]
    fn test_sample_category_answers_cover_every_category() {
        let answers = sample_category_answers();
        let map = answers.as_object().expect("object");
        assert_eq!(map.len(), 6);
        assert_eq!(map["edge-deployment"], serde_json::json!([4, 5, 5]));
    }
}
