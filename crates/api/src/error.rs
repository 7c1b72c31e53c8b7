// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error type for blog store transport operations.
//!
//! There is deliberately one error family: a transport failure. Whether the
//! network call failed, the server answered with a non-success status, or
//! the body did not decode, the caller's recovery is the same - leave the
//! cache untouched and surface the message.

use thiserror::Error;

/// Error type for transport operations against the blog store.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request never produced a response (connection refused, DNS
    /// failure, timeout). Displays as the bare message so the view can
    /// render it verbatim.
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response arrived but its body did not decode.
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
