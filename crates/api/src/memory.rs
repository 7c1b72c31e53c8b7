// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory implementation of [`BlogStore`].
//!
//! Backs `quill --demo` and the test suite. Behaves like the real store:
//! ids are assigned server-side (here: monotonic counter), created posts
//! append to the end of the collection, and unknown ids produce a 404-ish
//! status error. Failures can be induced per call for error-path tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use ql_core::BlogPost;

use crate::error::{TransportError, TransportResult};
use crate::store::{BlogStore, StoreFuture};

struct Inner {
    posts: Vec<BlogPost>,
    next_id: u64,
    /// Failures to serve before succeeding again, front first.
    induced: VecDeque<TransportError>,
}

/// Deterministic in-memory blog store.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        MemoryStore {
            inner: Mutex::new(Inner {
                posts: Vec::new(),
                next_id: 1,
                induced: VecDeque::new(),
            }),
        }
    }

    /// A store seeded with `(title, content)` pairs, in order.
    pub fn with_posts(posts: &[(&str, &str)]) -> Self {
        let store = MemoryStore::new();
        {
            let mut inner = store.lock();
            for (title, content) in posts {
                let id = format!("post-{}", inner.next_id);
                inner.next_id += 1;
                inner.posts.push(BlogPost::new(id, *title, *content));
            }
        }
        store
    }

    /// Queue a failure; the next operation returns it instead of running.
    pub fn fail_next(&self, err: TransportError) {
        self.lock().induced.push_back(err);
    }

    /// Queue a network failure with the given message.
    pub fn fail_next_with(&self, message: &str) {
        self.fail_next(TransportError::Network(message.to_string()));
    }

    /// Snapshot of the current collection, for assertions.
    pub fn posts(&self) -> Vec<BlogPost> {
        self.lock().posts.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means a test already panicked; propagating the
        // inner state is still the most useful behavior.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn take_induced(&self) -> Option<TransportError> {
        self.lock().induced.pop_front()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new()
    }
}

fn not_found(id: &str) -> TransportError {
    TransportError::Status {
        status: 404,
        message: format!("post not found: {}", id),
    }
}

impl BlogStore for MemoryStore {
    fn fetch_all(&self) -> StoreFuture<'_, Vec<BlogPost>> {
        Box::pin(async move {
            if let Some(err) = self.take_induced() {
                return Err(err);
            }
            Ok(self.lock().posts.clone())
        })
    }

    fn create(&self, title: String, content: String) -> StoreFuture<'_, BlogPost> {
        Box::pin(async move {
            if let Some(err) = self.take_induced() {
                return Err(err);
            }
            let mut inner = self.lock();
            let id = format!("post-{}", inner.next_id);
            inner.next_id += 1;
            let post = BlogPost::new(id, title, content);
            // New posts land at the end, matching the backend convention
            // the list view relies on.
            inner.posts.push(post.clone());
            Ok(post)
        })
    }

    fn update(&self, id: String, title: String, content: String) -> StoreFuture<'_, BlogPost> {
        Box::pin(async move {
            if let Some(err) = self.take_induced() {
                return Err(err);
            }
            let mut inner = self.lock();
            let post = inner
                .posts
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| not_found(&id))?;
            post.title = title;
            post.content = content;
            Ok(post.clone())
        })
    }

    fn delete(&self, id: String) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            if let Some(err) = self.take_induced() {
                return Err(err);
            }
            let mut inner = self.lock();
            let before = inner.posts.len();
            inner.posts.retain(|p| p.id != id);
            if inner.posts.len() == before {
                return Err(not_found(&id));
            }
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
