// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! qlrs - Library behind the `quill` terminal blog client.
//!
//! Lists, creates, updates and deletes blog posts against a REST backend.
//! The cached collection lives in [`store::PostStore`], which invalidates
//! it wholesale after every successful mutation and refetches in the
//! background; the TUI in [`ui`] renders it and plays a one-shot entry
//! transition for newly appeared posts.
//!
//! # Main components
//!
//! - [`store::PostStore`] - the data synchronization layer
//! - [`ui::ListView`] / [`ui::EditorDialog`] - the two views
//! - [`Config`] - file/env/flag configuration
//! - [`Error`] - error types for all operations

mod app;
mod term;

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod ui;

pub use app::{run_loop, App};
pub use cli::Cli;
pub use config::Config;
pub use error::{Error, Result};

use std::sync::Arc;

use ql_api::{BlogStore, HttpStore, MemoryStore};

/// Posts seeded into the in-memory store for `--demo`.
const DEMO_POSTS: &[(&str, &str)] = &[
    ("Hello quill", "Press n to write your first post."),
    ("Editing", "Select a post with j/k, then press e."),
    ("Deleting", "Press d to delete the selected post."),
];

/// Run the application. This is the main entry point for library users
/// and keeps `main` down to argument parsing and error printing.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }

    logging::init(&Config::log_path(), cli.log_level.as_deref());
    tracing::info!(server = %config.server_url, demo = cli.demo, "quill starting");

    let backend: Arc<dyn BlogStore> = if cli.demo {
        Arc::new(MemoryStore::with_posts(DEMO_POSTS))
    } else {
        Arc::new(HttpStore::new(&config.server_url, config.request_timeout())?)
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let (events_tx, events_rx) = tokio::sync::mpsc::unbounded_channel();
        let mut app = App::new(backend, events_tx, &config);
        if cli.demo {
            app.show_demo_hint(std::time::Instant::now());
        }
        let input = term::spawn_input_reader();

        let mut guard = term::TerminalGuard::enter()?;
        let result = run_loop(
            &mut guard.terminal,
            &mut app,
            config.tick(),
            input,
            events_rx,
        )
        .await;
        drop(guard);
        result
    })
}
