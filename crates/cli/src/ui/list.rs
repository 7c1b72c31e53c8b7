// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The post list view.
//!
//! Renders the cached collection in fetch order as one card per post and
//! keeps the map from post identity to its rendered anchor - the concrete
//! rectangle an entry transition targets. New posts are detected by
//! diffing incoming ids against the set of already-seen ids, so a refetch
//! caused by a delete or an edit elsewhere never replays the animation.
//! The first populated render seeds the set silently.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use ql_core::BlogPost;

use crate::store::CollectionView;
use crate::ui::animation::EntryTransition;

/// Rows per post card, borders included.
const CARD_HEIGHT: u16 = 4;

/// The list view state.
pub struct ListView {
    /// Identities ever observed in the collection.
    seen: HashSet<String>,
    /// False until the first non-empty collection arrives.
    seeded: bool,
    /// Post id -> rendered anchor, rebuilt each draw.
    anchors: HashMap<String, Rect>,
    /// Running entry transitions by post id.
    transitions: HashMap<String, EntryTransition>,
    selected: usize,
    scroll: usize,
}

impl ListView {
    pub fn new() -> Self {
        ListView {
            seen: HashSet::new(),
            seeded: false,
            anchors: HashMap::new(),
            transitions: HashMap::new(),
            selected: 0,
            scroll: 0,
        }
    }

    /// Reconcile with a freshly applied collection.
    ///
    /// Ids not seen before start an entry transition, except on the first
    /// populated sync, which only seeds the seen set (the initial load is
    /// not "new posts appearing").
    pub fn sync_collection(&mut self, posts: &[BlogPost], now: Instant) {
        if self.seeded {
            for post in posts {
                if self.seen.insert(post.id.clone()) {
                    self.transitions
                        .insert(post.id.clone(), EntryTransition::begin(now));
                }
            }
        } else {
            self.seen.extend(posts.iter().map(|p| p.id.clone()));
            self.seeded = true;
        }

        // Transitions for posts that vanished mid-flight have no anchor
        // left to target.
        self.transitions.retain(|id, _| posts.iter().any(|p| &p.id == id));

        if posts.is_empty() {
            self.selected = 0;
        } else if self.selected >= posts.len() {
            self.selected = posts.len() - 1;
        }
    }

    /// Drop transitions that reached their end state.
    pub fn expire_transitions(&mut self, now: Instant) {
        self.transitions.retain(|_, t| !t.finished(now));
    }

    /// True while any entry transition is running (keeps frames coming).
    pub fn is_animating(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Ids with a running transition, for tests.
    pub fn animating_ids(&self) -> Vec<&str> {
        self.transitions.keys().map(String::as_str).collect()
    }

    /// The rendered anchor for a post, if it was drawn last frame.
    pub fn anchor(&self, id: &str) -> Option<Rect> {
        self.anchors.get(id).copied()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_post<'a>(&self, posts: &'a [BlogPost]) -> Option<&'a BlogPost> {
        posts.get(self.selected)
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Draw the current view state into `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, view: &CollectionView<'_>, now: Instant) {
        self.anchors.clear();
        match view {
            CollectionView::Loading => {
                frame.render_widget(centered_message("Loading...", Style::default()), area);
            }
            CollectionView::Error(message) => {
                frame.render_widget(
                    centered_message(message, Style::default().fg(Color::Red)),
                    area,
                );
            }
            CollectionView::Ready(posts) if posts.is_empty() => {
                frame.render_widget(
                    centered_message("Currently no posts are present", Style::default()),
                    area,
                );
            }
            CollectionView::Ready(posts) => {
                self.render_cards(frame, area, posts, now);
            }
        }
    }

    fn render_cards(&mut self, frame: &mut Frame, area: Rect, posts: &[BlogPost], now: Instant) {
        let visible = (area.height / CARD_HEIGHT).max(1) as usize;
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + visible {
            self.scroll = self.selected + 1 - visible;
        }

        for (row, (index, post)) in posts
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(visible)
            .enumerate()
        {
            let anchor = Rect {
                x: area.x,
                y: area.y + (row as u16) * CARD_HEIGHT,
                width: area.width,
                height: CARD_HEIGHT,
            };
            self.anchors.insert(post.id.clone(), anchor);

            let (target, style) = match self.transitions.get(&post.id) {
                Some(transition) => {
                    let sample = transition.sample(now);
                    let shifted = Rect {
                        y: anchor.y.saturating_add(sample.offset_rows()),
                        ..anchor
                    };
                    (
                        shifted.intersection(area),
                        Style::default().fg(opacity_color(sample.opacity)),
                    )
                }
                None => (anchor, Style::default()),
            };
            if target.height == 0 || target.width == 0 {
                continue;
            }

            let selected = index == self.selected;
            let border_style = if selected {
                Style::default().fg(Color::Cyan)
            } else {
                style
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style);
            let title_style = style.add_modifier(Modifier::BOLD);
            let card = Paragraph::new(vec![
                Line::from(Span::styled(post.title.clone(), title_style)),
                Line::from(Span::styled(post.content.clone(), style)),
            ])
            .block(block);
            frame.render_widget(card, target);
        }
    }
}

impl Default for ListView {
    fn default() -> Self {
        ListView::new()
    }
}

fn centered_message(message: &str, style: Style) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(message, style)))
        .alignment(ratatui::layout::Alignment::Center)
}

/// Dim-to-normal ramp standing in for opacity.
fn opacity_color(opacity: f32) -> Color {
    if opacity < 0.34 {
        Color::DarkGray
    } else if opacity < 0.67 {
        Color::Gray
    } else {
        Color::Reset
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
