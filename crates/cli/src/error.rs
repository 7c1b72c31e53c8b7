// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the qlrs library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Transport(#[from] ql_api::TransportError),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid config at {path}: {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for qlrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
