// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the data synchronization layer: cache replacement,
//! invalidation after mutations, and fetch sequencing.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver};

use ql_api::MemoryStore;
use qlrs::store::{CollectionView, PostStore, StoreEvent};
use specs::{backend, sample_posts};

fn store_over(backend: Arc<MemoryStore>) -> (PostStore, UnboundedReceiver<StoreEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (PostStore::new(backend, tx), rx)
}

async fn pump(store: &mut PostStore, rx: &mut UnboundedReceiver<StoreEvent>) {
    let event = rx.recv().await.unwrap();
    store.apply(event);
}

#[tokio::test]
async fn fetch_result_becomes_the_cache_exactly() {
    let remote = backend(&[("A", "1"), ("B", "2"), ("C", "3")]);
    let (mut store, mut rx) = store_over(remote.clone());

    store.refresh();
    pump(&mut store, &mut rx).await;

    assert_eq!(store.posts().unwrap(), remote.posts().as_slice());
}

#[tokio::test]
async fn create_then_fetch_appends_with_assigned_id() {
    let remote = backend(&[("A", "1")]);
    let (mut store, mut rx) = store_over(remote);

    store.refresh();
    pump(&mut store, &mut rx).await;

    store.create("A".into(), "B".into());
    pump(&mut store, &mut rx).await; // confirmation invalidates + refetches
    pump(&mut store, &mut rx).await; // refetch applies

    let posts = store.posts().unwrap();
    let last = posts.last().unwrap();
    assert_eq!(last.title, "A");
    assert_eq!(last.content, "B");
    assert!(!last.id.is_empty());
}

#[tokio::test]
async fn delete_then_fetch_excludes_the_id() {
    let remote = backend(&[("A", "1"), ("B", "2")]);
    let (mut store, mut rx) = store_over(remote);

    store.refresh();
    pump(&mut store, &mut rx).await;
    let id = store.posts().unwrap()[0].id.clone();

    store.delete(id.clone());
    pump(&mut store, &mut rx).await;
    pump(&mut store, &mut rx).await;

    assert!(store.posts().unwrap().iter().all(|p| p.id != id));
}

#[tokio::test]
async fn update_then_fetch_alters_only_the_target() {
    let remote = backend(&[("A", "1"), ("B", "2")]);
    let (mut store, mut rx) = store_over(remote);

    store.refresh();
    pump(&mut store, &mut rx).await;
    let id = store.posts().unwrap()[1].id.clone();

    store.update(id.clone(), "B2".into(), "2b".into());
    pump(&mut store, &mut rx).await;
    pump(&mut store, &mut rx).await;

    let posts = store.posts().unwrap();
    assert_eq!(posts[0].title, "A");
    assert_eq!(posts[0].content, "1");
    assert_eq!(posts[1].title, "B2");
    assert_eq!(posts[1].content, "2b");
}

#[tokio::test]
async fn failed_fetch_shows_its_message_and_keeps_no_data() {
    let remote = backend(&[]);
    remote.fail_next_with("Network Error");
    let (mut store, mut rx) = store_over(remote);

    store.refresh();
    pump(&mut store, &mut rx).await;

    assert_eq!(store.view(), CollectionView::Error("Network Error"));
    assert!(store.posts().is_none());
}

#[tokio::test]
async fn late_response_from_a_superseded_fetch_is_discarded() {
    let remote = backend(&[]);
    let (mut store, _rx) = store_over(remote);

    // Two fetches were issued; the second resolved first.
    store.apply(StoreEvent::FetchFinished {
        seq: 2,
        result: Ok(sample_posts(&["fresh"])),
    });
    store.apply(StoreEvent::FetchFinished {
        seq: 1,
        result: Ok(sample_posts(&["stale", "stale2"])),
    });

    let posts = store.posts().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "fresh");
}

#[tokio::test]
async fn failed_mutation_does_not_invalidate() {
    let remote = backend(&[("A", "1")]);
    let (mut store, mut rx) = store_over(remote.clone());

    store.refresh();
    pump(&mut store, &mut rx).await;

    remote.fail_next_with("boom");
    store.delete("post-1".into());
    let event = rx.recv().await.unwrap();
    let failure = store.apply(event).unwrap();

    assert_eq!(failure.message, "boom");
    assert!(!store.is_stale());
    assert_eq!(store.posts().unwrap().len(), 1);
}
