//! Search bar widget for query input

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    query: &'a str,
    /// Byte offset of the cursor in the query
    cursor: usize,
    theme: &'a Theme,
    focused: bool,
    /// A search is in flight, so Enter does nothing
    loading: bool,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            theme,
            focused: true,
            loading: false,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hint = if self.loading {
            Span::styled(" Searching... ", self.theme.dimmed_style())
        } else {
            Span::styled(" Enter: search ", self.theme.dimmed_style())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(" Search ")
            .title_bottom(Line::from(hint).right_aligned());

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled(">", self.theme.cursor_style()), Span::raw(" ")];
        let cursor = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));

        if !self.focused {
            spans.push(Span::raw(self.query));
        } else if self.query.is_empty() {
            spans.push(cursor);
            spans.push(Span::styled(
                "project name, description, or keyword",
                self.theme.dimmed_style(),
            ));
        } else {
            let split = self.cursor.min(self.query.len());
            let (before, after) = self.query.split_at(split);
            spans.push(Span::raw(before));
            spans.push(cursor);
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
