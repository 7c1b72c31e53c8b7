// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The blog post entity.
//!
//! Posts are owned by the remote store: the `id` is assigned server-side
//! and is immutable once created. The wire representation names it `_id`.

use serde::{Deserialize, Serialize};

/// A single blog post as returned by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Opaque unique identity, assigned by the store.
    #[serde(rename = "_id")]
    pub id: String,
    /// Post title. Non-empty by the editor's validation contract.
    pub title: String,
    /// Post body. Non-empty by the editor's validation contract.
    pub content: String,
}

impl BlogPost {
    /// Create a post with a known identity.
    ///
    /// Used by the in-memory store and tests; the HTTP path only ever
    /// deserializes posts from store responses.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        BlogPost {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
#[path = "post_tests.rs"]
mod tests;
