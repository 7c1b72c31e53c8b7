// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Editor draft state and validation.
//!
//! A draft lives only while the editor dialog is open. Both fields must be
//! non-empty before a create or update may be issued; validation reports
//! per-field errors so the dialog can annotate the offending input.

use crate::post::BlogPost;

/// The two editable fields of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

impl Field {
    /// Returns the label shown next to the input in the dialog.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
        }
    }
}

/// Per-field validation errors for a draft.
///
/// `None` means the field is valid. Messages are static because the only
/// rule is "required".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub content: Option<&'static str>,
}

impl FieldErrors {
    /// True when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Error message for one field, if any.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Title => self.title,
            Field::Content => self.content,
        }
    }
}

/// Transient title/content input collected by the editor dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    /// A blank draft, used when creating a new post and after every close.
    pub fn blank() -> Self {
        Draft::default()
    }

    /// A draft prefilled from an existing post, used when updating.
    pub fn from_post(post: &BlogPost) -> Self {
        Draft {
            title: post.title.clone(),
            content: post.content.clone(),
        }
    }

    /// Mutable access to one field's text.
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Content => &mut self.content,
        }
    }

    /// Validate the draft, reporting an error per empty field.
    ///
    /// Whitespace-only input counts as empty.
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            title: self
                .title
                .trim()
                .is_empty()
                .then_some("Title is required"),
            content: self
                .content
                .trim()
                .is_empty()
                .then_some("Content is required"),
        }
    }
}

#[cfg(test)]
#[path = "draft_tests.rs"]
mod tests;
