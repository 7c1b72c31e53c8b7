// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transient user-facing notices.
//!
//! Mutation failures land here; each notice carries a deadline and is
//! pruned on the frame tick. Fetch failures do not pass through this
//! panel - the list view renders those itself.

use std::time::{Duration, Instant};

use crate::store::MutationFailure;

/// Severity of a notice, controlling its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// One transient message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: Level,
    pub title: String,
    pub message: String,
    deadline: Instant,
}

/// The active notices, newest last.
pub struct Notices {
    items: Vec<Notice>,
    ttl: Duration,
}

impl Notices {
    pub fn new(ttl: Duration) -> Self {
        Notices {
            items: Vec::new(),
            ttl,
        }
    }

    /// Queue a notice visible for the configured TTL from `now`.
    pub fn push(&mut self, level: Level, title: &str, message: &str, now: Instant) {
        self.items.push(Notice {
            level,
            title: title.to_string(),
            message: message.to_string(),
            deadline: now + self.ttl,
        });
    }

    /// Every mutation failure surfaces the same way, regardless of kind.
    pub fn push_mutation_failure(&mut self, failure: &MutationFailure, now: Instant) {
        self.push(
            Level::Error,
            &format!("Error while {}", failure.kind.verb()),
            &failure.message,
            now,
        );
    }

    /// Drop notices whose deadline has passed.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|n| n.deadline > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Draw the active notices along the bottom of `area`, newest last.
    pub fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        use ratatui::style::{Color, Modifier, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Clear, Paragraph};

        if self.items.is_empty() {
            return;
        }
        let count = (self.items.len() as u16).min(area.height);
        let strip = ratatui::layout::Rect {
            x: area.x,
            y: area.y + area.height - count,
            width: area.width,
            height: count,
        };
        let lines: Vec<Line> = self
            .items
            .iter()
            .rev()
            .take(count as usize)
            .rev()
            .map(|notice| {
                let color = match notice.level {
                    Level::Info => Color::Cyan,
                    Level::Error => Color::Red,
                };
                Line::from(vec![
                    Span::styled(
                        notice.title.clone(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(": "),
                    Span::styled(notice.message.clone(), Style::default().fg(color)),
                ])
            })
            .collect();
        frame.render_widget(Clear, strip);
        frame.render_widget(Paragraph::new(lines), strip);
    }
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
