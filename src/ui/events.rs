//! Event handling for the search screen
//!
//! Maps key presses to state changes. Anything that needs I/O (a search, a
//! tag fetch, opening a browser, the clipboard) is returned as an
//! [`EventResult`] for the event loop to carry out.

use super::state::{AppState, Focus, MessageLevel, Mode, cycle};
use crate::controller::{SearchTicket, TagTicket};
use crate::project::{SortOption, SourceFilter};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// No action taken
    Ignored,
    /// Leave the search screen
    Quit,
    /// Run a search issued by the controller
    Search(SearchTicket),
    /// Run a tag catalog fetch issued by the controller
    FetchTags(TagTicket),
    /// Open a project link in the browser
    OpenUrl(String),
    /// Copy a project link to the clipboard
    CopyUrl(String),
}

impl From<Option<SearchTicket>> for EventResult {
    fn from(ticket: Option<SearchTicket>) -> Self {
        ticket.map_or(Self::Ignored, Self::Search)
    }
}

/// Handle one terminal event
pub fn handle_event(state: &mut AppState, event: &Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, *key),
        Event::Mouse(mouse) => handle_mouse(state, *mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

/// Handle a key press in the current mode
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match state.mode {
        Mode::Help => {
            // Any key closes help
            state.mode = Mode::Normal;
            EventResult::Continue
        }
        Mode::TagFilter => handle_tag_filter_mode(state, key),
        Mode::Normal => handle_normal_mode(state, key),
    }
}

fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            EventResult::Quit
        }
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        (KeyCode::Tab, _) => {
            state.focus_next();
            EventResult::Continue
        }
        (KeyCode::BackTab, _) => {
            state.focus_prev();
            EventResult::Continue
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            EventResult::FetchTags(state.controller.refresh_tags())
        }
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => state.controller.clear_tags().into(),
        _ => match state.focus {
            Focus::Query => handle_query_key(state, key),
            Focus::Source => handle_choice_key(state, key, |state, forward| {
                let next = cycle(&SourceFilter::ALL, state.controller.state().source(), forward);
                state.controller.set_source(next)
            }),
            Focus::Sort => handle_choice_key(state, key, |state, forward| {
                let next = cycle(&SortOption::ALL, state.controller.state().sort(), forward);
                state.controller.set_sort(next)
            }),
            Focus::Tags => handle_tags_key(state, key),
            Focus::Results => handle_results_key(state, key),
        },
    }
}

/// Explicit submit from any pane
fn submit(state: &mut AppState) -> EventResult {
    match state.controller.submit() {
        Some(ticket) => EventResult::Search(ticket),
        None => {
            state.add_message(MessageLevel::Warning, "A search is already running");
            EventResult::Continue
        }
    }
}

fn handle_query_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => submit(state),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if state.query_backspace() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Delete, _) => {
            if state.query_delete() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.query_home();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.query_end();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

fn handle_choice_key(
    state: &mut AppState,
    key: KeyEvent,
    step: impl FnOnce(&mut AppState, bool) -> Option<SearchTicket>,
) -> EventResult {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => step(state, false).into(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => step(state, true).into(),
        KeyCode::Enter => submit(state),
        _ => EventResult::Ignored,
    }
}

fn handle_tags_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.tag_cursor_move(-1);
            EventResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.tag_cursor_move(1);
            EventResult::Continue
        }
        KeyCode::PageUp => {
            state.tag_cursor_move(-10);
            EventResult::Continue
        }
        KeyCode::PageDown => {
            state.tag_cursor_move(10);
            EventResult::Continue
        }
        KeyCode::Enter | KeyCode::Char(' ') => toggle_current_tag(state),
        KeyCode::Char('/') => {
            state.mode = Mode::TagFilter;
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

fn toggle_current_tag(state: &mut AppState) -> EventResult {
    let Some(tag) = state.current_tag().map(str::to_string) else {
        return EventResult::Ignored;
    };
    state.controller.toggle_tag(&tag).into()
}

fn handle_tag_filter_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            EventResult::Quit
        }
        (KeyCode::Esc, _) => {
            state.tag_filter_clear();
            state.mode = Mode::Normal;
            EventResult::Continue
        }
        (KeyCode::Enter, _) => {
            state.mode = Mode::Normal;
            EventResult::Continue
        }
        (KeyCode::Up, _) => {
            state.tag_cursor_move(-1);
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.tag_cursor_move(1);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            state.tag_filter_pop();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.tag_filter_push(c);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

fn handle_results_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.result_cursor_move(-1);
            EventResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.result_cursor_move(1);
            EventResult::Continue
        }
        KeyCode::PageUp => {
            state.result_cursor_page(false);
            EventResult::Continue
        }
        KeyCode::PageDown => {
            state.result_cursor_page(true);
            EventResult::Continue
        }
        KeyCode::Home => {
            state.result_cursor_home();
            EventResult::Continue
        }
        KeyCode::End => {
            state.result_cursor_end();
            EventResult::Continue
        }
        KeyCode::Enter | KeyCode::Char('o') => current_url(state).map_or(EventResult::Ignored, EventResult::OpenUrl),
        KeyCode::Char('y') => current_url(state).map_or(EventResult::Ignored, EventResult::CopyUrl),
        _ => EventResult::Ignored,
    }
}

fn current_url(state: &AppState) -> Option<String> {
    state
        .current_project()
        .map(|project| project.url.clone())
        .filter(|url| !url.is_empty())
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    let delta = match mouse.kind {
        MouseEventKind::ScrollUp => -1,
        MouseEventKind::ScrollDown => 1,
        _ => return EventResult::Ignored,
    };
    match state.focus {
        Focus::Tags => state.tag_cursor_move(delta),
        _ => state.result_cursor_move(delta),
    }
    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TaggedEntry;
    use crate::controller::SearchController;
    use crate::project::Project;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn loaded_state() -> AppState {
        let mut controller = SearchController::default();
        let (search, tags) = controller.mount();
        let _ = controller.complete_search(
            search.generation,
            Ok(vec![
                Project::new(1, "ros2-nav").with_url("https://github.com/example/ros2-nav"),
                Project::new(2, "no-link"),
            ]),
        );
        let _ = controller.complete_tag_fetch(
            tags.generation,
            Ok(vec![TaggedEntry {
                tags: vec!["ros2".into(), "lidar".into()],
            }]),
        );
        let mut state = AppState::new(controller);
        state.sync_result_cursor();
        state
    }

    #[test]
    fn test_typing_edits_query_without_search() {
        let mut state = loaded_state();
        for c in "ROS2".chars() {
            assert_eq!(handle_key(&mut state, key(KeyCode::Char(c))), EventResult::Continue);
        }
        assert_eq!(state.controller.state().query(), "ROS2");
        assert!(!state.controller.search_status().is_loading());
    }

    #[test]
    fn test_enter_submits_query() {
        let mut state = loaded_state();
        handle_key(&mut state, key(KeyCode::Char('a')));

        match handle_key(&mut state, key(KeyCode::Enter)) {
            EventResult::Search(ticket) => assert_eq!(ticket.request.query, "a"),
            other => panic!("Expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_ignored_while_loading() {
        let mut state = loaded_state();
        let _ = handle_key(&mut state, key(KeyCode::Enter));

        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::Continue);
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn test_source_change_triggers_search() {
        let mut state = loaded_state();
        state.focus = Focus::Source;

        match handle_key(&mut state, key(KeyCode::Right)) {
            EventResult::Search(ticket) => assert_eq!(ticket.request.source, "GitHub"),
            other => panic!("Expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_sort_wraps_backwards() {
        let mut state = loaded_state();
        state.focus = Focus::Sort;

        match handle_key(&mut state, key(KeyCode::Left)) {
            EventResult::Search(ticket) => assert_eq!(ticket.request.sort, "growth_month"),
            other => panic!("Expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_space_toggles_tag_under_cursor() {
        let mut state = loaded_state();
        state.focus = Focus::Tags;
        handle_key(&mut state, key(KeyCode::Down));

        match handle_key(&mut state, key(KeyCode::Char(' '))) {
            EventResult::Search(ticket) => assert_eq!(ticket.request.tags, "ros2"),
            other => panic!("Expected search, got {other:?}"),
        }
        assert!(state.controller.state().is_tag_selected("ros2"));
    }

    #[test]
    fn test_tag_filter_mode() {
        let mut state = loaded_state();
        state.focus = Focus::Tags;
        handle_key(&mut state, key(KeyCode::Char('/')));
        assert_eq!(state.mode, Mode::TagFilter);

        for c in "lid".chars() {
            handle_key(&mut state, key(KeyCode::Char(c)));
        }
        assert_eq!(state.current_tag(), Some("lidar"));

        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.tag_filter.query(), "lid");

        handle_key(&mut state, key(KeyCode::Char('/')));
        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.tag_filter.query(), "");
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_clear_tags_shortcut() {
        let mut state = loaded_state();
        assert_eq!(handle_key(&mut state, ctrl('x')), EventResult::Ignored);

        let _ = state.controller.toggle_tag("lidar");
        assert!(matches!(handle_key(&mut state, ctrl('x')), EventResult::Search(_)));
        assert!(state.controller.state().tags().is_empty());
    }

    #[test]
    fn test_refresh_tags_shortcut() {
        let mut state = loaded_state();
        assert!(matches!(handle_key(&mut state, ctrl('r')), EventResult::FetchTags(_)));
        assert!(state.controller.tag_status().is_loading());
    }

    #[test]
    fn test_results_open_and_copy() {
        let mut state = loaded_state();
        state.focus = Focus::Results;

        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter)),
            EventResult::OpenUrl("https://github.com/example/ros2-nav".to_string())
        );
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('y'))),
            EventResult::CopyUrl("https://github.com/example/ros2-nav".to_string())
        );

        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::Ignored);
    }

    #[test]
    fn test_help_and_quit() {
        let mut state = loaded_state();
        handle_key(&mut state, key(KeyCode::F(1)));
        assert_eq!(state.mode, Mode::Help);

        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.mode, Mode::Normal);
        assert!(!state.should_exit);

        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Quit);
        assert!(state.should_exit);
    }

    #[test]
    fn test_tab_moves_focus() {
        let mut state = loaded_state();
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.focus, Focus::Source);
        handle_key(&mut state, KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(state.focus, Focus::Query);
    }
}
