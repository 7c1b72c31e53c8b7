// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal UI widgets: the post list, the editor dialog, entry
//! animation, and transient notices.

pub mod animation;
pub mod editor;
pub mod list;
pub mod notify;

pub use editor::{EditorDialog, Mode, Submission};
pub use list::ListView;
pub use notify::{Level, Notices};

use ratatui::layout::Rect;

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
