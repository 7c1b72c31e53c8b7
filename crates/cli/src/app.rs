// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Application state and the event loop.
//!
//! Everything runs on the UI event loop: terminal input arrives from a
//! reader thread, remote results arrive on the store's event channel, and
//! a frame tick drives animation sampling and notice expiry. Remote calls
//! never block the loop; they resolve as [`StoreEvent`]s.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use tokio::sync::mpsc::{self, UnboundedReceiver};

use ql_api::BlogStore;

use crate::config::Config;
use crate::error::Result;
use crate::store::{CollectionView, MutationKind, PostStore, StoreEvent};
use crate::ui::{EditorDialog, Level, ListView, Mode, Notices, Submission};

/// Top-level application state.
pub struct App {
    store: PostStore,
    list: ListView,
    editor: EditorDialog,
    notices: Notices,
    should_quit: bool,
}

impl App {
    pub fn new(
        backend: Arc<dyn BlogStore>,
        events: mpsc::UnboundedSender<StoreEvent>,
        config: &Config,
    ) -> Self {
        App {
            store: PostStore::new(backend, events),
            list: ListView::new(),
            editor: EditorDialog::new(),
            notices: Notices::new(config.notice_ttl()),
            should_quit: false,
        }
    }

    /// Mount: fetch unless the cache is already fresh.
    pub fn on_start(&mut self) {
        self.store.refresh_if_stale();
    }

    /// Queue the startup hint shown when running against the demo store.
    pub fn show_demo_hint(&mut self, now: Instant) {
        self.notices
            .push(Level::Info, "Demo mode", "changes are not persisted", now);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn editor(&self) -> &EditorDialog {
        &self.editor
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    /// Reconcile a background result and update the dependent views.
    pub fn on_store_event(&mut self, event: StoreEvent, now: Instant) {
        // A resolved create/update closes the dialog whatever the outcome;
        // failures surface as a notice, not as dialog state. Only the
        // dialog that issued the mutation is still submitting - a draft
        // opened after cancelling mid-flight must survive the resolution.
        if let StoreEvent::MutationFinished {
            kind: MutationKind::Create | MutationKind::Update,
            ..
        } = &event
        {
            if self.editor.is_submitting() {
                self.editor.close();
            }
        }

        if let Some(failure) = self.store.apply(event) {
            self.notices.push_mutation_failure(&failure, now);
        }

        if let CollectionView::Ready(posts) = self.store.view() {
            self.list.sync_collection(posts, now);
        }
    }

    /// Frame tick: advance time-based state.
    pub fn on_tick(&mut self, now: Instant) {
        self.notices.prune(now);
        self.list.expire_transitions(now);
    }

    /// Route one terminal event.
    pub fn on_input(&mut self, event: Event, now: Instant) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Release {
                self.on_key(key, now);
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent, _now: Instant) {
        // Ctrl-C quits from anywhere.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.editor.is_open() {
            self.on_editor_key(key);
        } else {
            self.on_list_key(key);
        }
    }

    fn on_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.editor.close(),
            KeyCode::Tab | KeyCode::BackTab => self.editor.focus_next(),
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Enter => {
                if let Some(submission) = self.editor.submit() {
                    self.dispatch(submission);
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.editor.insert_char(c);
            }
            _ => {}
        }
    }

    fn on_list_key(&mut self, key: KeyEvent) {
        let len = self.store.posts().map_or(0, <[_]>::len);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.editor.open_create(),
            KeyCode::Char('e') | KeyCode::Enter => {
                let post = self
                    .store
                    .posts()
                    .and_then(|posts| self.list.selected_post(posts).cloned());
                if let Some(post) = post {
                    self.editor.open_update(&post);
                }
            }
            KeyCode::Char('d') => {
                let id = self
                    .store
                    .posts()
                    .and_then(|posts| self.list.selected_post(posts))
                    .map(|p| p.id.clone());
                if let Some(id) = id {
                    self.store.delete(id);
                }
            }
            KeyCode::Char('r') => self.store.refresh(),
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(len),
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(),
            _ => {}
        }
    }

    fn dispatch(&mut self, submission: Submission) {
        match submission.mode {
            Mode::Create => self.store.create(submission.title, submission.content),
            Mode::Update { id } => self.store.update(id, submission.title, submission.content),
        }
    }

    /// Draw one frame.
    pub fn draw(&mut self, frame: &mut Frame, now: Instant) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.draw_header(frame, chunks[0]);
        let view = self.store.view();
        self.list.render(frame, chunks[1], &view, now);
        self.draw_help(frame, chunks[2]);

        self.editor.render(frame, frame.area());
        self.notices.render(frame, chunks[1]);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let refreshing = if self.store.is_fetching() && self.store.posts().is_some() {
            " (refreshing)"
        } else {
            ""
        };
        let header = Line::from(vec![
            Span::styled(" quill ", Style::default().fg(Color::Cyan)),
            Span::raw("- posts"),
            Span::styled(refreshing, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let help = if self.editor.is_open() {
            " Enter submit | Tab field | Esc cancel"
        } else {
            " n new | e edit | d delete | r refresh | j/k move | q quit"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray))),
            area,
        );
    }
}

/// Drive the application until quit.
pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick: Duration,
    mut input: UnboundedReceiver<Event>,
    mut store_events: UnboundedReceiver<StoreEvent>,
) -> Result<()> {
    app.on_start();
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    while !app.should_quit() {
        terminal.draw(|frame| app.draw(frame, Instant::now()))?;

        tokio::select! {
            event = input.recv() => match event {
                Some(event) => app.on_input(event, Instant::now()),
                // Input thread gone; nothing left to drive the UI.
                None => break,
            },
            Some(event) = store_events.recv() => {
                app.on_store_event(event, Instant::now());
            }
            _ = ticker.tick() => app.on_tick(Instant::now()),
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
