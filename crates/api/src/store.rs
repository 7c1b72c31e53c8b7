// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Store abstraction over the blog REST backend.
//!
//! Provides a trait-based transport layer that enables:
//! - Real HTTP requests for production
//! - In-memory stores for unit testing and demo mode

use std::future::Future;
use std::pin::Pin;

use ql_core::BlogPost;

use crate::error::TransportResult;

/// Boxed future returned by store operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = TransportResult<T>> + Send + 'a>>;

/// The four operations the remote blog store exposes.
///
/// The store is authoritative for identity: `create` returns the post with
/// its server-assigned id, and neither `update` nor `delete` verifies the
/// id locally. Implementations must not cache; callers own staleness.
pub trait BlogStore: Send + Sync {
    /// Fetch the full collection, in the store's order.
    fn fetch_all(&self) -> StoreFuture<'_, Vec<BlogPost>>;

    /// Create a post. Title and content are validated by the editor
    /// before this is called; the store is not asked to re-validate.
    fn create(&self, title: String, content: String) -> StoreFuture<'_, BlogPost>;

    /// Update an existing post's title and content.
    fn update(&self, id: String, title: String, content: String) -> StoreFuture<'_, BlogPost>;

    /// Delete a post. The response body, if any, is ignored.
    fn delete(&self, id: String) -> StoreFuture<'_, ()>;
}
