// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the entry transition: plays once, only for genuinely new
//! posts, and never on the initial load.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::time::Instant;

use qlrs::ui::animation::{EntryTransition, DURATION, START_OFFSET};
use qlrs::ui::ListView;
use specs::sample_posts;

#[test]
fn initial_load_does_not_animate() {
    let mut list = ListView::new();
    list.sync_collection(&sample_posts(&["A", "B", "C"]), Instant::now());
    assert!(!list.is_animating());
}

#[test]
fn appending_one_post_animates_only_the_new_id() {
    let mut list = ListView::new();
    let now = Instant::now();
    list.sync_collection(&sample_posts(&["A", "B"]), now);

    list.sync_collection(&sample_posts(&["A", "B", "C"]), now);
    assert_eq!(list.animating_ids(), vec!["post-3"]);
}

#[test]
fn a_repeated_sync_does_not_replay_the_transition() {
    let mut list = ListView::new();
    let start = Instant::now();
    list.sync_collection(&sample_posts(&["A"]), start);
    list.sync_collection(&sample_posts(&["A", "B"]), start);
    assert!(list.is_animating());

    let done = start + DURATION;
    list.expire_transitions(done);
    assert!(!list.is_animating());

    // The refetch after an unrelated mutation carries the same ids.
    list.sync_collection(&sample_posts(&["A", "B"]), done);
    assert!(!list.is_animating());
}

#[test]
fn a_refetch_after_delete_does_not_animate_survivors() {
    let mut list = ListView::new();
    let now = Instant::now();
    list.sync_collection(&sample_posts(&["A", "B", "C"]), now);

    let mut remaining = sample_posts(&["A", "B", "C"]);
    remaining.remove(1);
    list.sync_collection(&remaining, now);
    assert!(!list.is_animating());
}

#[test]
fn a_post_deleted_mid_transition_stops_animating() {
    let mut list = ListView::new();
    let now = Instant::now();
    list.sync_collection(&sample_posts(&["A"]), now);
    list.sync_collection(&sample_posts(&["A", "B"]), now);
    assert!(list.is_animating());

    list.sync_collection(&sample_posts(&["A"]), now);
    assert!(!list.is_animating());
}

#[test]
fn the_transition_runs_from_full_offset_to_rest() {
    let now = Instant::now();
    let transition = EntryTransition::begin(now);

    let first = transition.sample(now);
    assert_eq!(first.offset, START_OFFSET);
    assert_eq!(first.opacity, 0.0);

    let last = transition.sample(now + DURATION);
    assert_eq!(last.offset, 0.0);
    assert_eq!(last.opacity, 1.0);
    assert!(transition.finished(now + DURATION));
}
