// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal setup and teardown.
//!
//! Raw mode and the alternate screen are entered on construction and
//! restored on drop, so the shell comes back intact on every exit path,
//! including errors propagating out of the event loop.

use std::io::{self, Stdout};

use crossterm::event::Event;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::error::{Error, Result};

/// Owns the raw-mode terminal for the lifetime of the app.
pub struct TerminalGuard {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().map_err(|e| Error::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, EnterAlternateScreen)
            .map_err(|e| Error::Terminal(e.to_string()))?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(|e| Error::Terminal(e.to_string()))?;
        Ok(TerminalGuard { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Forward terminal events from a blocking reader thread.
///
/// The thread ends when the receiver is dropped; it may linger inside one
/// final blocking read, which is harmless at process exit.
pub fn spawn_input_reader() -> UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        while let Ok(event) = crossterm::event::read() {
            if tx.send(event).is_err() {
                break;
            }
        }
    });
    rx
}
