// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ql-core: Shared library for the quill blog client
//!
//! This crate provides the data types exchanged between the quill TUI and
//! the remote blog store: the post entity, the editor draft with its
//! validation rules, and the wire payloads for mutations.

pub mod draft;
pub mod post;
pub mod protocol;

pub use draft::{Draft, Field, FieldErrors};
pub use post::BlogPost;
pub use protocol::{CreateBlogRequest, UpdateBlogRequest};
