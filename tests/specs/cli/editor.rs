// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the editor dialog: validation gating and mode selection.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use ql_core::{BlogPost, Field};
use qlrs::ui::{EditorDialog, Mode};
use yare::parameterized;

fn typed(editor: &mut EditorDialog, text: &str) {
    for c in text.chars() {
        editor.insert_char(c);
    }
}

#[parameterized(
    both_empty = { "", "" },
    title_empty = { "", "some content" },
    content_empty = { "some title", "" },
    whitespace_only = { "   ", " " },
)]
fn empty_input_blocks_submission(title: &str, content: &str) {
    let mut editor = EditorDialog::new();
    editor.open_create();
    typed(&mut editor, title);
    editor.focus_next();
    typed(&mut editor, content);

    assert!(editor.submit().is_none());
    assert!(editor.is_open());

    let title_flagged = editor.field_error(Field::Title).is_some();
    let content_flagged = editor.field_error(Field::Content).is_some();
    assert_eq!(title_flagged, title.trim().is_empty());
    assert_eq!(content_flagged, content.trim().is_empty());
}

#[test]
fn field_errors_clear_once_input_is_valid() {
    let mut editor = EditorDialog::new();
    editor.open_create();
    assert!(editor.submit().is_none());
    assert!(editor.field_error(Field::Title).is_some());

    typed(&mut editor, "T");
    editor.focus_next();
    typed(&mut editor, "C");
    let submission = editor.submit().unwrap();
    assert_eq!(submission.mode, Mode::Create);
    assert!(editor.field_error(Field::Title).is_none());
    assert!(editor.field_error(Field::Content).is_none());
}

#[test]
fn mode_comes_from_open_time_not_field_values() {
    let mut editor = EditorDialog::new();
    let existing = BlogPost::new("p9", "Old title", "Old body");
    editor.open_update(&existing);

    // Even a fully rewritten draft still updates p9.
    for _ in 0.."Old title".len() {
        editor.backspace();
    }
    typed(&mut editor, "Completely different");
    let submission = editor.submit().unwrap();
    assert_eq!(submission.mode, Mode::Update { id: "p9".into() });
}

#[test]
fn reopening_after_cancel_always_starts_blank() {
    let mut editor = EditorDialog::new();
    let existing = BlogPost::new("p1", "Prefilled", "Body");

    editor.open_update(&existing);
    editor.close();
    editor.open_create();
    assert!(editor.draft().unwrap().title.is_empty());

    typed(&mut editor, "half");
    editor.close();
    editor.open_update(&existing);
    assert_eq!(editor.draft().unwrap().title, "Prefilled");
}
