//! Command-line interface for the `skillpath` application.
//!
//! This file serves as the main entry point for the executable,
//! delegating its core functionality to the `skillpath` library.

fn main() -> anyhow::Result<()> {
    skillpath::run()
}
