// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the quill spec tests.

use std::sync::Arc;

use ql_api::MemoryStore;
use ql_core::BlogPost;

/// An in-memory backend seeded with `(title, content)` pairs.
pub fn backend(posts: &[(&str, &str)]) -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_posts(posts))
}

/// Posts with predictable ids (`post-1`, `post-2`, ...), matching what
/// [`MemoryStore`] assigns.
pub fn sample_posts(titles: &[&str]) -> Vec<BlogPost> {
    titles
        .iter()
        .enumerate()
        .map(|(i, t)| BlogPost::new(format!("post-{}", i + 1), *t, format!("body {}", i + 1)))
        .collect()
}
