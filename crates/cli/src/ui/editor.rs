// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The editor dialog: collect and validate one post's title and content.
//!
//! State machine: `Closed -> Open (blank draft, or prefilled from an
//! existing post) -> Submitting -> Closed`. Cancel also closes, and
//! closing always discards the draft. The mode (create vs update) is
//! fixed when the dialog opens - by whether an existing post was
//! supplied - never by what the fields contain.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use ql_core::{BlogPost, Draft, Field, FieldErrors};

use crate::ui::centered_rect;

/// Whether a submission creates a new post or rewrites an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Create,
    Update { id: String },
}

/// A validated draft, ready to dispatch to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub mode: Mode,
    pub title: String,
    pub content: String,
}

struct OpenEditor {
    mode: Mode,
    draft: Draft,
    errors: FieldErrors,
    focus: Field,
    submitting: bool,
}

enum State {
    Closed,
    Open(OpenEditor),
}

/// The editor dialog widget state.
pub struct EditorDialog {
    state: State,
}

impl EditorDialog {
    pub fn new() -> Self {
        EditorDialog {
            state: State::Closed,
        }
    }

    /// Open with a blank draft in create mode.
    pub fn open_create(&mut self) {
        self.state = State::Open(OpenEditor {
            mode: Mode::Create,
            draft: Draft::blank(),
            errors: FieldErrors::default(),
            focus: Field::Title,
            submitting: false,
        });
    }

    /// Open prefilled from `post` in update mode.
    pub fn open_update(&mut self, post: &BlogPost) {
        self.state = State::Open(OpenEditor {
            mode: Mode::Update {
                id: post.id.clone(),
            },
            draft: Draft::from_post(post),
            errors: FieldErrors::default(),
            focus: Field::Title,
            submitting: false,
        });
    }

    /// Close, discarding the draft. Used for cancel and for both mutation
    /// outcomes - the dialog never stays open after a submit resolves.
    pub fn close(&mut self) {
        self.state = State::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(
            self.state,
            State::Open(OpenEditor {
                submitting: true,
                ..
            })
        )
    }

    fn open_mut(&mut self) -> Option<&mut OpenEditor> {
        match &mut self.state {
            State::Open(open) if !open.submitting => Some(open),
            _ => None,
        }
    }

    /// Append a character to the focused field.
    pub fn insert_char(&mut self, c: char) {
        if let Some(open) = self.open_mut() {
            open.draft.field_mut(open.focus).push(c);
        }
    }

    /// Remove the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Some(open) = self.open_mut() {
            open.draft.field_mut(open.focus).pop();
        }
    }

    /// Move focus between the two fields.
    pub fn focus_next(&mut self) {
        if let Some(open) = self.open_mut() {
            open.focus = match open.focus {
                Field::Title => Field::Content,
                Field::Content => Field::Title,
            };
        }
    }

    /// Validate and hand back a submission, or record field errors.
    ///
    /// Returns `None` (and issues nothing) while any field is empty.
    pub fn submit(&mut self) -> Option<Submission> {
        let open = self.open_mut()?;
        let errors = open.draft.validate();
        if !errors.is_empty() {
            open.errors = errors;
            return None;
        }
        open.errors = FieldErrors::default();
        open.submitting = true;
        Some(Submission {
            mode: open.mode.clone(),
            title: open.draft.title.clone(),
            content: open.draft.content.clone(),
        })
    }

    /// Current field-level error, for rendering and tests.
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        match &self.state {
            State::Open(open) => open.errors.get(field),
            State::Closed => None,
        }
    }

    /// Current draft text, for rendering and tests.
    pub fn draft(&self) -> Option<&Draft> {
        match &self.state {
            State::Open(open) => Some(&open.draft),
            State::Closed => None,
        }
    }

    /// Draw the dialog over the given area.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let State::Open(open) = &self.state else {
            return;
        };

        let title = match open.mode {
            Mode::Create => " Add Blog ",
            Mode::Update { .. } => " Update Blog ",
        };

        let dialog = centered_rect(area, 50, 12);
        frame.render_widget(Clear, dialog);

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(dialog);
        frame.render_widget(block, dialog);

        let mut lines = vec![Line::from("Enter your blog title and content")];
        for field in [Field::Title, Field::Content] {
            lines.push(Line::from(""));
            lines.push(field_line(open, field));
            if let Some(message) = open.errors.get(field) {
                lines.push(Line::from(Span::styled(
                    format!("  {}", message),
                    Style::default().fg(Color::Red),
                )));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            if open.submitting {
                "Saving..."
            } else {
                "Enter submit - Tab switch field - Esc cancel"
            },
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for EditorDialog {
    fn default() -> Self {
        EditorDialog::new()
    }
}

fn field_line(open: &OpenEditor, field: Field) -> Line<'_> {
    let focused = open.focus == field && !open.submitting;
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let text = match field {
        Field::Title => &open.draft.title,
        Field::Content => &open.draft.content,
    };
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!("{:>8}: ", field.as_str()), label_style),
        Span::raw(text.as_str()),
        Span::raw(cursor),
    ])
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
