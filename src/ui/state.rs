//! Application state for the search screen
//!
//! Wraps the [`SearchController`] with everything that only matters while
//! drawing: focus, cursors, the tag filter, and transient status messages.

use super::tag_filter::TagFilter;
use crate::controller::SearchController;
use crate::project::Project;
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

/// Pane that receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Query,
    Source,
    Sort,
    Tags,
    Results,
}

impl Focus {
    const ORDER: [Self; 5] = [Self::Query, Self::Source, Self::Sort, Self::Tags, Self::Results];

    #[must_use]
    pub fn next(self) -> Self {
        cycle(&Self::ORDER, self, true)
    }

    #[must_use]
    pub fn prev(self) -> Self {
        cycle(&Self::ORDER, self, false)
    }
}

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Keys edit the tag filter
    TagFilter,
    /// Help overlay is visible
    Help,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Next or previous element of `all`, wrapping around
#[must_use]
pub fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
    all[next]
}

/// Move a list cursor by `delta`, clamped to `len`
fn move_cursor(list: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        list.select(None);
        return;
    }
    let current = list.selected().unwrap_or(0);
    let target = current.saturating_add_signed(delta).min(len - 1);
    list.select(Some(target));
}

/// Keep a list cursor inside `len` items
fn clamp_cursor(list: &mut ListState, len: usize) {
    if len == 0 {
        list.select(None);
    } else {
        list.select(Some(list.selected().unwrap_or(0).min(len - 1)));
    }
}

/// Application state for the search screen
#[derive(Debug)]
pub struct AppState {
    pub controller: SearchController,
    pub focus: Focus,
    pub mode: Mode,
    /// Byte offset of the cursor within the query
    pub query_cursor: usize,
    pub tag_filter: TagFilter,
    pub tag_list: ListState,
    pub result_list: ListState,
    pub messages: Vec<StatusMessage>,
    pub message_ttl: Duration,
    pub should_exit: bool,
    /// Rows in the result pane (set during render)
    pub visible_height: usize,
}

impl AppState {
    #[must_use]
    pub fn new(controller: SearchController) -> Self {
        let query_cursor = controller.state().query().len();
        let mut state = Self {
            controller,
            focus: Focus::default(),
            mode: Mode::default(),
            query_cursor,
            tag_filter: TagFilter::new(),
            tag_list: ListState::default(),
            result_list: ListState::default(),
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
            visible_height: 10,
        };
        state.refilter_tags();
        state
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Insert a character at the query cursor
    pub fn query_push(&mut self, c: char) {
        let cursor = self.query_cursor;
        self.controller.query_mut().insert(cursor, c);
        self.query_cursor += c.len_utf8();
    }

    /// Remove the character before the cursor
    pub fn query_backspace(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let query = self.controller.query_mut();
        let prev = query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        query.remove(prev);
        self.query_cursor = prev;
        true
    }

    /// Delete the character under the cursor
    pub fn query_delete(&mut self) -> bool {
        let cursor = self.query_cursor;
        let query = self.controller.query_mut();
        if cursor >= query.len() {
            return false;
        }
        query.remove(cursor);
        true
    }

    pub fn query_cursor_left(&mut self) {
        let query = self.controller.state().query();
        self.query_cursor = query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
    }

    pub fn query_cursor_right(&mut self) {
        let query = self.controller.state().query();
        if self.query_cursor < query.len() {
            self.query_cursor = query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    pub fn query_home(&mut self) {
        self.query_cursor = 0;
    }

    pub fn query_end(&mut self) {
        self.query_cursor = self.controller.state().query().len();
    }

    pub fn query_clear(&mut self) {
        self.controller.set_query("");
        self.query_cursor = 0;
    }

    /// Recompute visible tags after the catalog or filter changed
    pub fn refilter_tags(&mut self) {
        self.tag_filter.apply(self.controller.catalog().tags());
        clamp_cursor(&mut self.tag_list, self.tag_filter.visible().len());
    }

    pub fn tag_filter_push(&mut self, c: char) {
        self.tag_filter.push(c, self.controller.catalog().tags());
        self.tag_list.select(Some(0));
        clamp_cursor(&mut self.tag_list, self.tag_filter.visible().len());
    }

    pub fn tag_filter_pop(&mut self) {
        self.tag_filter.pop(self.controller.catalog().tags());
        clamp_cursor(&mut self.tag_list, self.tag_filter.visible().len());
    }

    pub fn tag_filter_clear(&mut self) {
        self.tag_filter.clear(self.controller.catalog().tags());
        clamp_cursor(&mut self.tag_list, self.tag_filter.visible().len());
    }

    pub fn tag_cursor_move(&mut self, delta: isize) {
        move_cursor(&mut self.tag_list, self.tag_filter.visible().len(), delta);
    }

    /// Tag under the cursor in the (possibly filtered) tag pane
    #[must_use]
    pub fn current_tag(&self) -> Option<&str> {
        let row = self.tag_list.selected()?;
        let idx = *self.tag_filter.visible().get(row)?;
        self.controller.catalog().tags().get(idx).map(String::as_str)
    }

    pub fn result_cursor_move(&mut self, delta: isize) {
        move_cursor(&mut self.result_list, self.controller.view().visible().len(), delta);
    }

    pub fn result_cursor_page(&mut self, forward: bool) {
        let page = isize::try_from(self.visible_height.max(1)).unwrap_or(isize::MAX);
        self.result_cursor_move(if forward { page } else { -page });
    }

    pub fn result_cursor_home(&mut self) {
        clamp_cursor(&mut self.result_list, self.controller.view().visible().len());
        if self.result_list.selected().is_some() {
            self.result_list.select(Some(0));
        }
    }

    pub fn result_cursor_end(&mut self) {
        let len = self.controller.view().visible().len();
        self.result_list.select(len.checked_sub(1));
    }

    /// Reset the result cursor after the visible list changed
    pub fn sync_result_cursor(&mut self) {
        let len = self.controller.view().visible().len();
        if len == 0 {
            self.result_list.select(None);
        } else {
            self.result_list.select(Some(0));
            *self.result_list.offset_mut() = 0;
        }
    }

    /// Project under the cursor in the result pane
    #[must_use]
    pub fn current_project(&self) -> Option<&Project> {
        let row = self.result_list.selected()?;
        self.controller.view().visible().get(row)
    }

    pub fn add_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text));
    }

    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TaggedEntry;
    use crate::project::SortOption;

    fn state_with_tags(tags: &[&str]) -> AppState {
        let mut controller = SearchController::default();
        let ticket = controller.begin_tag_fetch();
        let entries = vec![TaggedEntry {
            tags: tags.iter().map(|s| (*s).to_string()).collect(),
        }];
        let _ = controller.complete_tag_fetch(ticket.generation, Ok(entries));
        AppState::new(controller)
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        assert_eq!(Focus::Query.next(), Focus::Source);
        assert_eq!(Focus::Results.next(), Focus::Query);
        assert_eq!(Focus::Query.prev(), Focus::Results);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(&SortOption::ALL, SortOption::GrowthMonth, true), SortOption::Stars);
        assert_eq!(cycle(&SortOption::ALL, SortOption::Stars, false), SortOption::GrowthMonth);
    }

    #[test]
    fn test_query_editing_is_utf8_aware() {
        let mut state = AppState::new(SearchController::default());
        for c in "bräu".chars() {
            state.query_push(c);
        }
        assert_eq!(state.controller.state().query(), "bräu");

        state.query_cursor_left();
        state.query_cursor_left();
        assert!(state.query_backspace());
        assert_eq!(state.controller.state().query(), "bäu");

        state.query_end();
        assert!(!state.query_delete());
        state.query_clear();
        assert_eq!(state.query_cursor, 0);
        assert!(!state.query_backspace());
    }

    #[test]
    fn test_query_edits_issue_no_search() {
        let mut state = AppState::new(SearchController::default());
        state.query_push('x');
        assert!(!state.controller.search_status().is_loading());
    }

    #[test]
    fn test_current_tag_follows_filter() {
        let mut state = state_with_tags(&["lidar", "ros2", "simulation"]);
        assert_eq!(state.current_tag(), Some("lidar"));

        state.tag_cursor_move(1);
        assert_eq!(state.current_tag(), Some("ros2"));

        state.tag_filter_push('s');
        state.tag_filter_push('i');
        state.tag_filter_push('m');
        assert_eq!(state.current_tag(), Some("simulation"));

        state.tag_filter_clear();
        assert_eq!(state.tag_filter.visible().len(), 3);
    }

    #[test]
    fn test_tag_cursor_clamped() {
        let mut state = state_with_tags(&["a", "b"]);
        state.tag_cursor_move(10);
        assert_eq!(state.current_tag(), Some("b"));
        state.tag_cursor_move(-10);
        assert_eq!(state.current_tag(), Some("a"));
    }

    #[test]
    fn test_result_cursor_tracks_results() {
        let mut controller = SearchController::default();
        let ticket = controller.begin_search();
        let _ = controller.complete_search(
            ticket.generation,
            Ok(vec![Project::new(1, "a"), Project::new(2, "b")]),
        );
        let mut state = AppState::new(controller);
        state.sync_result_cursor();

        assert_eq!(state.current_project().map(|p| p.name.as_str()), Some("a"));
        state.result_cursor_end();
        assert_eq!(state.current_project().map(|p| p.name.as_str()), Some("b"));
        state.result_cursor_home();
        assert_eq!(state.current_project().map(|p| p.name.as_str()), Some("a"));
    }

    #[test]
    fn test_messages_expire() {
        let mut state = AppState::new(SearchController::default());
        state.message_ttl = Duration::ZERO;
        state.add_message(MessageLevel::Info, "hello");
        std::thread::sleep(Duration::from_millis(2));

        assert!(state.active_messages().is_empty());
        state.cleanup_messages();
        assert!(state.messages.is_empty());
    }
}
