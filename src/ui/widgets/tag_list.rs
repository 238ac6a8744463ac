//! Tag pane: the catalog as a checklist

use crate::controller::RequestStatus;
use crate::query::QueryState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Tag checklist; ticked rows are part of the current filter
pub struct TagList<'a> {
    tags: &'a [String],
    visible: &'a [usize],
    query: &'a QueryState,
    status: &'a RequestStatus,
    filter: &'a str,
    filtering: bool,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> TagList<'a> {
    #[must_use]
    pub const fn new(
        tags: &'a [String],
        visible: &'a [usize],
        query: &'a QueryState,
        status: &'a RequestStatus,
        theme: &'a Theme,
    ) -> Self {
        Self {
            tags,
            visible,
            query,
            status,
            filter: "",
            filtering: false,
            theme,
            focused: false,
        }
    }

    /// Show the filter line; `filtering` means keys currently edit it
    #[must_use]
    pub const fn filter(mut self, filter: &'a str, filtering: bool) -> Self {
        self.filter = filter;
        self.filtering = filtering;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn header(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        match self.status {
            RequestStatus::Error(message) => {
                lines.push(Line::styled(message.as_str(), self.theme.error_style()));
                lines.push(Line::styled("Ctrl-R to retry", self.theme.dimmed_style()));
            }
            RequestStatus::Loading => {
                lines.push(Line::styled("Loading tags...", self.theme.dimmed_style()));
            }
            RequestStatus::Idle if self.tags.is_empty() => {
                lines.push(Line::styled("No tags", self.theme.dimmed_style()));
            }
            RequestStatus::Idle => {}
        }
        if self.filtering || !self.filter.is_empty() {
            let marker = if self.filtering { "│" } else { "" };
            lines.push(Line::from(vec![
                Span::styled("/", self.theme.cursor_style()),
                Span::raw(self.filter),
                Span::styled(marker, self.theme.cursor_style()),
            ]));
        }
        lines
    }

    fn item(&self, tag: &'a str) -> ListItem<'a> {
        if self.query.is_tag_selected(tag) {
            ListItem::new(Line::from(vec![
                Span::styled("[x] ", self.theme.selected_tag_style()),
                Span::styled(tag, self.theme.selected_tag_style()),
            ]))
        } else {
            ListItem::new(Line::from(vec![
                Span::styled("[ ] ", self.theme.dimmed_style()),
                Span::styled(tag, self.theme.tag_style()),
            ]))
        }
    }
}

impl StatefulWidget for TagList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let title = format!(
            " Tags ({}/{}) ",
            self.query.tags().len(),
            self.tags.len()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let header = self.header();
        let header_height = u16::try_from(header.len()).unwrap_or(u16::MAX);
        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(header_height), Constraint::Min(0)]).areas(inner);
        Paragraph::new(header).render(header_area, buf);

        let items: Vec<ListItem> = self
            .visible
            .iter()
            .filter_map(|&idx| self.tags.get(idx))
            .map(|tag| self.item(tag))
            .collect();

        let highlight = if self.focused {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };
        let list = List::new(items)
            .highlight_style(highlight)
            .highlight_symbol("> ")
            .highlight_spacing(HighlightSpacing::Always);
        StatefulWidget::render(list, list_area, buf, state);
    }
}
