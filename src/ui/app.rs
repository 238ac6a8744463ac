//! Terminal setup and the event loop of the search screen
//!
//! Requests run as local tasks on the current thread and report back over a
//! channel, so several can be in flight at once while the screen stays
//! responsive. Keyboard input is read on a separate thread.

use super::error::UiError;
use super::events::{EventResult, handle_event};
use super::state::{AppState, Focus, MessageLevel, Mode};
use super::theme::Theme;
use super::widgets::{FilterBar, HelpBar, HelpOverlay, ResultList, SearchBar, StatusBar, TagList};
use crate::backend::{FetchError, SearchBackend};
use crate::catalog::TaggedEntry;
use crate::controller::{Completion, Generation, SearchController, SearchTicket, TagTicket};
use crate::project::Project;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// Outcome of a backend request, delivered back to the event loop
#[derive(Debug)]
enum Outcome {
    Search(Generation, Result<Vec<Project>, FetchError>),
    Tags(Generation, Result<Vec<TaggedEntry>, FetchError>),
}

type Result<T, E = UiError> = std::result::Result<T, E>;

/// The interactive search screen bound to a backend
pub struct SearchApp<B> {
    backend: B,
    state: AppState,
    theme: Theme,
    backend_label: String,
}

impl<B: SearchBackend + Clone + 'static> SearchApp<B> {
    #[must_use]
    pub fn new(backend: B, controller: SearchController, backend_label: impl Into<String>) -> Self {
        Self {
            backend,
            state: AppState::new(controller),
            theme: Theme::default(),
            backend_label: backend_label.into(),
        }
    }

    /// Take over the terminal until the user quits
    ///
    /// Must be awaited inside a [`tokio::task::LocalSet`].
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be set up, drawn, or restored.
    pub async fn run(mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        Self::cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Ok(Terminal::new(backend)?)
    }

    fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;
        Ok(())
    }

    async fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let (outcome_tx, mut outcomes) = mpsc::unbounded_channel();
        let mut events = spawn_input_thread();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        let (search, tags) = self.state.controller.mount();
        self.spawn_search(search, &outcome_tx);
        self.spawn_tag_fetch(tags, &outcome_tx);

        debug!("search screen started");
        while !self.state.should_exit {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                event = events.recv() => {
                    let event = event.ok_or(UiError::InputClosed)?;
                    let result = handle_event(&mut self.state, &event);
                    self.dispatch(result, &outcome_tx);
                }
                Some(outcome) = outcomes.recv() => self.apply(outcome),
                _ = tick.tick() => self.state.cleanup_messages(),
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, result: EventResult, outcome_tx: &UnboundedSender<Outcome>) {
        match result {
            EventResult::Search(ticket) => self.spawn_search(ticket, outcome_tx),
            EventResult::FetchTags(ticket) => self.spawn_tag_fetch(ticket, outcome_tx),
            EventResult::OpenUrl(url) => match open::that_detached(&url) {
                Ok(()) => self.state.add_message(MessageLevel::Success, format!("Opened {url}")),
                Err(e) => {
                    warn!(%url, error = %e, "failed to open link");
                    self.state.add_message(MessageLevel::Error, format!("Could not open link: {e}"));
                }
            },
            EventResult::CopyUrl(url) => match copy_to_clipboard(&url) {
                Ok(()) => self.state.add_message(MessageLevel::Success, "Link copied"),
                Err(e) => {
                    warn!(error = %e, "clipboard unavailable");
                    self.state.add_message(MessageLevel::Error, format!("Could not copy link: {e}"));
                }
            },
            EventResult::Continue | EventResult::Ignored | EventResult::Quit => {}
        }
    }

    fn spawn_search(&self, ticket: SearchTicket, outcome_tx: &UnboundedSender<Outcome>) {
        let backend = self.backend.clone();
        let tx = outcome_tx.clone();
        tokio::task::spawn_local(async move {
            let outcome = backend.search(&ticket.request).await;
            let _ = tx.send(Outcome::Search(ticket.generation, outcome));
        });
    }

    fn spawn_tag_fetch(&self, ticket: TagTicket, outcome_tx: &UnboundedSender<Outcome>) {
        let backend = self.backend.clone();
        let tx = outcome_tx.clone();
        tokio::task::spawn_local(async move {
            let outcome = backend.list_all().await;
            let _ = tx.send(Outcome::Tags(ticket.generation, outcome));
        });
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Search(generation, result) => {
                if self.state.controller.complete_search(generation, result) == Completion::Applied {
                    self.state.sync_result_cursor();
                }
            }
            Outcome::Tags(generation, result) => {
                if self.state.controller.complete_tag_fetch(generation, result) == Completion::Applied {
                    self.state.refilter_tags();
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let theme = &self.theme;
        let state = &mut self.state;

        let [search_area, filter_area, content_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [tags_area, results_area] =
            Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)]).areas(content_area);

        state.visible_height = usize::from(results_area.height.saturating_sub(2)) / 4;

        let controller = &state.controller;
        let query = controller.state();

        frame.render_widget(
            SearchBar::new(query.query(), state.query_cursor, theme)
                .focused(state.focus == Focus::Query)
                .loading(!controller.can_submit()),
            search_area,
        );

        frame.render_widget(
            FilterBar::new(query.source(), query.sort(), theme)
                .focus(state.focus == Focus::Source, state.focus == Focus::Sort),
            filter_area,
        );

        let tag_list = TagList::new(
            controller.catalog().tags(),
            state.tag_filter.visible(),
            query,
            controller.tag_status(),
            theme,
        )
        .filter(state.tag_filter.query(), state.mode == Mode::TagFilter)
        .focused(state.focus == Focus::Tags);
        frame.render_stateful_widget(tag_list, tags_area, &mut state.tag_list);

        let result_list = ResultList::new(controller.view(), theme).focused(state.focus == Focus::Results);
        frame.render_stateful_widget(result_list, results_area, &mut state.result_list);

        let messages = state.active_messages();
        frame.render_widget(StatusBar::new(&messages, &self.backend_label, theme), status_area);

        let hints = HelpBar::hints_for(state.focus, state.mode);
        frame.render_widget(HelpBar::new(&hints, theme), help_area);

        if state.mode == Mode::Help {
            frame.render_widget(HelpOverlay::new(theme), frame.area());
        }
    }
}

/// Forward terminal events from a blocking reader thread
///
/// The thread stops once the receiving side is dropped.
fn spawn_input_thread() -> UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!(error = %e, "failed to poll terminal events");
                    break;
                }
            }
        }
    });
    rx
}

fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)
}
