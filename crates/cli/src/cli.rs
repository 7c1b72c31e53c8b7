// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "quill")]
#[command(about = "A terminal client for a remote blog store")]
#[command(
    long_about = "A terminal client for a remote blog store.\n\n\
    Lists, creates, updates and deletes posts against a REST backend,\n\
    keeping a local cache that is invalidated after every mutation."
)]
pub struct Cli {
    /// Server base URL, overriding the config file and QUILL_SERVER.
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Run against a seeded in-memory store instead of a server.
    #[arg(long)]
    pub demo: bool,

    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter (e.g. "debug" or "qlrs=trace"), overriding RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}
