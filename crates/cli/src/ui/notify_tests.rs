// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use std::time::{Duration, Instant};

use crate::store::{MutationFailure, MutationKind};

use super::*;

#[test]
fn notice_expires_after_ttl() {
    let now = Instant::now();
    let mut notices = Notices::new(Duration::from_secs(5));
    notices.push(Level::Error, "Error", "boom", now);
    assert_eq!(notices.len(), 1);

    notices.prune(now + Duration::from_secs(4));
    assert_eq!(notices.len(), 1);

    notices.prune(now + Duration::from_secs(6));
    assert!(notices.is_empty());
}

#[test]
fn mutation_failures_title_by_verb() {
    let now = Instant::now();
    let mut notices = Notices::new(Duration::from_secs(5));
    for (kind, title) in [
        (MutationKind::Create, "Error while creating"),
        (MutationKind::Update, "Error while updating"),
        (MutationKind::Delete, "Error while deleting"),
    ] {
        notices.push_mutation_failure(
            &MutationFailure {
                kind,
                message: "boom".into(),
            },
            now,
        );
        let last = notices.iter().last().unwrap();
        assert_eq!(last.title, title);
        assert_eq!(last.message, "boom");
        assert_eq!(last.level, Level::Error);
    }
}

#[test]
fn notices_keep_insertion_order() {
    let now = Instant::now();
    let mut notices = Notices::new(Duration::from_secs(5));
    notices.push(Level::Info, "first", "", now);
    notices.push(Level::Error, "second", "", now);
    let titles: Vec<_> = notices.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second"]);
}
