// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the list view states: loading, error, empty, populated.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;
use std::time::Instant;

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use ql_api::MemoryStore;
use qlrs::store::StoreEvent;
use qlrs::{App, Config};
use specs::backend;

fn app_over(remote: Arc<MemoryStore>) -> (App, UnboundedReceiver<StoreEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (App::new(remote, tx, &Config::default()), rx)
}

async fn pump(app: &mut App, rx: &mut UnboundedReceiver<StoreEvent>) {
    let event = rx.recv().await.unwrap();
    app.on_store_event(event, Instant::now());
}

fn screen(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal
        .draw(|frame| app.draw(frame, Instant::now()))
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
        }
        out.push('\n');
    }
    out
}

#[tokio::test]
async fn fetch_in_flight_with_no_data_shows_loading() {
    let (mut app, _rx) = app_over(backend(&[("A", "1")]));
    app.on_start();

    let out = screen(&mut app);
    assert!(out.contains("Loading..."));
}

#[tokio::test]
async fn empty_store_shows_the_empty_indicator() {
    let (mut app, mut rx) = app_over(backend(&[]));
    app.on_start();
    pump(&mut app, &mut rx).await;

    let out = screen(&mut app);
    assert!(out.contains("Currently no posts are present"));
    assert!(!out.contains("Loading"));
    assert!(!out.contains("Error"));
}

#[tokio::test]
async fn fetch_failure_renders_the_message_verbatim() {
    let remote = backend(&[]);
    remote.fail_next_with("Network Error");
    let (mut app, mut rx) = app_over(remote);
    app.on_start();
    pump(&mut app, &mut rx).await;

    let out = screen(&mut app);
    assert!(out.contains("Network Error"));
    assert!(!out.contains("Loading"));
    assert!(!out.contains("Currently no posts"));
}

#[tokio::test]
async fn populated_store_lists_posts_in_fetch_order() {
    let (mut app, mut rx) = app_over(backend(&[("First post", "a"), ("Second post", "b")]));
    app.on_start();
    pump(&mut app, &mut rx).await;

    let out = screen(&mut app);
    let first = out.find("First post").unwrap();
    let second = out.find("Second post").unwrap();
    assert!(first < second);
    assert!(!out.contains("Loading"));
}
