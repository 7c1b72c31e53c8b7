// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The data synchronization layer.
//!
//! [`PostStore`] is the single source of truth for the post collection. It
//! mediates every read and write against the transport client and defines
//! staleness: any successful mutation invalidates the whole cached
//! collection and triggers a background refetch, so the view always shows
//! server-confirmed state rather than a locally-guessed one.
//!
//! Remote calls run as background tasks; their results come back through
//! an event channel and are reconciled in [`PostStore::apply`]. Fetches
//! carry a monotonically increasing sequence number: issuing a fetch
//! aborts the previous in-flight one, and a response older than the last
//! applied sequence is discarded, so the cache always reflects the most
//! recently *issued* fetch rather than the most recently resolved one.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use ql_api::{BlogStore, TransportResult};
use ql_core::BlogPost;

/// Which mutation a [`StoreEvent::MutationFinished`] reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        }
    }

    /// Present participle, for notice titles ("Error while creating").
    pub fn verb(&self) -> &'static str {
        match self {
            MutationKind::Create => "creating",
            MutationKind::Update => "updating",
            MutationKind::Delete => "deleting",
        }
    }
}

/// Result of a background remote call, delivered over the event channel.
#[derive(Debug)]
pub enum StoreEvent {
    /// A fetch resolved. `seq` identifies which issued fetch this answers.
    FetchFinished {
        seq: u64,
        result: TransportResult<Vec<BlogPost>>,
    },
    /// A mutation resolved. The payload is dropped: on success the cache
    /// is invalidated and refetched, never patched.
    MutationFinished {
        kind: MutationKind,
        result: TransportResult<()>,
    },
}

/// A mutation failure to surface to the user.
///
/// All three mutation kinds report failures the same way; none of them is
/// silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationFailure {
    pub kind: MutationKind,
    pub message: String,
}

/// What the list view should render right now.
#[derive(Debug, PartialEq, Eq)]
pub enum CollectionView<'a> {
    /// A fetch is in flight and no collection has ever been applied.
    Loading,
    /// The last fetch failed; the message is rendered verbatim.
    Error(&'a str),
    /// The last fetch succeeded; the slice may be empty.
    Ready(&'a [BlogPost]),
}

/// Single source of truth for the cached post collection.
pub struct PostStore {
    backend: Arc<dyn BlogStore>,
    events: UnboundedSender<StoreEvent>,
    /// Last server-confirmed collection. `None` until the first
    /// successful fetch.
    posts: Option<Vec<BlogPost>>,
    /// Set by mutations, cleared by a successful fetch.
    stale: bool,
    /// Message of the most recent failed fetch, cleared on success.
    fetch_error: Option<String>,
    issued_seq: u64,
    applied_seq: u64,
    in_flight: Option<AbortHandle>,
}

impl PostStore {
    /// Create a store over `backend`. The collection starts absent and
    /// stale; call [`PostStore::refresh_if_stale`] on mount.
    pub fn new(backend: Arc<dyn BlogStore>, events: UnboundedSender<StoreEvent>) -> Self {
        PostStore {
            backend,
            events,
            posts: None,
            stale: true,
            fetch_error: None,
            issued_seq: 0,
            applied_seq: 0,
            in_flight: None,
        }
    }

    /// The three mutually exclusive view states.
    pub fn view(&self) -> CollectionView<'_> {
        if let Some(message) = &self.fetch_error {
            return CollectionView::Error(message);
        }
        match &self.posts {
            Some(posts) => CollectionView::Ready(posts),
            None => CollectionView::Loading,
        }
    }

    /// Last confirmed collection, if any.
    pub fn posts(&self) -> Option<&[BlogPost]> {
        self.posts.as_deref()
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Issue a background fetch unless the cache is already fresh.
    pub fn refresh_if_stale(&mut self) {
        if self.posts.is_none() || self.stale {
            self.refresh();
        }
    }

    /// Issue a background fetch, superseding any fetch still in flight.
    pub fn refresh(&mut self) {
        self.issued_seq += 1;
        let seq = self.issued_seq;

        // The superseded fetch may already have queued its response; the
        // sequence check in apply() covers that window.
        if let Some(prev) = self.in_flight.take() {
            prev.abort();
        }

        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            let result = backend.fetch_all().await;
            let _ = events.send(StoreEvent::FetchFinished { seq, result });
        });
        self.in_flight = Some(task.abort_handle());
        tracing::debug!(seq, "fetch issued");
    }

    /// Create a post in the background. Title and content were validated
    /// by the editor; the store does not re-validate.
    pub fn create(&mut self, title: String, content: String) {
        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = backend.create(title, content).await.map(|_| ());
            let _ = events.send(StoreEvent::MutationFinished {
                kind: MutationKind::Create,
                result,
            });
        });
    }

    /// Update a post in the background. The store is authoritative for
    /// whether the id exists.
    pub fn update(&mut self, id: String, title: String, content: String) {
        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = backend.update(id, title, content).await.map(|_| ());
            let _ = events.send(StoreEvent::MutationFinished {
                kind: MutationKind::Update,
                result,
            });
        });
    }

    /// Delete a post in the background.
    pub fn delete(&mut self, id: String) {
        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = backend.delete(id).await;
            let _ = events.send(StoreEvent::MutationFinished {
                kind: MutationKind::Delete,
                result,
            });
        });
    }

    /// Reconcile a background result with the cache.
    ///
    /// Returns a failure to surface when a mutation failed; fetch failures
    /// are not returned because the list view renders them directly.
    pub fn apply(&mut self, event: StoreEvent) -> Option<MutationFailure> {
        match event {
            StoreEvent::FetchFinished { seq, result } => {
                self.apply_fetch(seq, result);
                None
            }
            StoreEvent::MutationFinished { kind, result } => self.apply_mutation(kind, result),
        }
    }

    fn apply_fetch(&mut self, seq: u64, result: TransportResult<Vec<BlogPost>>) {
        if seq < self.applied_seq {
            // Response from a superseded fetch that resolved late.
            tracing::debug!(seq, applied = self.applied_seq, "stale fetch discarded");
            return;
        }
        if seq == self.issued_seq {
            self.in_flight = None;
        }
        match result {
            Ok(posts) => {
                // Wholesale replace; never merged with prior contents.
                self.applied_seq = seq;
                self.posts = Some(posts);
                self.stale = false;
                self.fetch_error = None;
            }
            Err(err) => {
                // Cache untouched on failure.
                tracing::warn!(seq, error = %err, "fetch failed");
                self.fetch_error = Some(err.to_string());
            }
        }
    }

    fn apply_mutation(
        &mut self,
        kind: MutationKind,
        result: TransportResult<()>,
    ) -> Option<MutationFailure> {
        match result {
            Ok(()) => {
                tracing::info!(kind = kind.as_str(), "mutation confirmed");
                self.invalidate();
                None
            }
            Err(err) => {
                tracing::warn!(kind = kind.as_str(), error = %err, "mutation failed");
                Some(MutationFailure {
                    kind,
                    message: err.to_string(),
                })
            }
        }
    }

    /// Mark the collection stale and refetch. The cache keeps serving the
    /// previous contents until the fetch resolves.
    pub fn invalidate(&mut self) {
        self.stale = true;
        self.refresh();
    }
}

impl Drop for PostStore {
    fn drop(&mut self) {
        // The view is gone; nothing will consume the response.
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
