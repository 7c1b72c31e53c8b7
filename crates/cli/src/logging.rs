// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Logging setup.
//!
//! The TUI owns stdout and stderr while running, so diagnostics go to a
//! log file under the user state directory. Filtering precedence:
//! `--log-level` flag, then `RUST_LOG`, then `info`.

use std::fs;
use std::path::Path;

/// Initialize tracing to the given log file.
///
/// Failing to open the file falls back to stderr rather than aborting;
/// losing logs is better than losing the app.
pub fn init(log_path: &Path, level: Option<&str>) {
    use tracing_subscriber::EnvFilter;

    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    if let Some(parent) = log_path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    if let Ok(file) = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
