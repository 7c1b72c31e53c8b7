// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire payloads for blog store mutations.
//!
//! The REST contract is small:
//! - `POST /blogs` carries `{title, content}`
//! - `PUT /blogs/` carries `{id, title, content}` (the id travels in the
//!   body, not the path - a quirk of the backend this client targets)
//! - `DELETE /blogs/{id}` has no body

use serde::{Deserialize, Serialize};

/// Body of `POST /blogs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
}

/// Body of `PUT /blogs/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateBlogRequest {
    pub id: String,
    pub title: String,
    pub content: String,
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
