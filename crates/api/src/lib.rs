// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ql-api: Transport client for the remote blog store.
//!
//! The store exposes a small REST surface (`GET/POST/PUT/DELETE /blogs`).
//! This crate abstracts it behind the [`BlogStore`] trait so the
//! synchronization layer can run against the real HTTP backend in
//! production and an in-memory backend in tests and demo mode.

pub mod error;
pub mod http;
pub mod memory;
pub mod store;

pub use error::{TransportError, TransportResult};
pub use http::HttpStore;
pub use memory::MemoryStore;
pub use store::BlogStore;
