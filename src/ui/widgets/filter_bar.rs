//! Source and sort selectors

use crate::project::{SortOption, SourceFilter};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Two side-by-side selectors; the active choice is highlighted
pub struct FilterBar<'a> {
    source: SourceFilter,
    sort: SortOption,
    theme: &'a Theme,
    source_focused: bool,
    sort_focused: bool,
}

impl<'a> FilterBar<'a> {
    #[must_use]
    pub const fn new(source: SourceFilter, sort: SortOption, theme: &'a Theme) -> Self {
        Self {
            source,
            sort,
            theme,
            source_focused: false,
            sort_focused: false,
        }
    }

    #[must_use]
    pub const fn focus(mut self, source: bool, sort: bool) -> Self {
        self.source_focused = source;
        self.sort_focused = sort;
        self
    }

    fn choices<'c>(&self, labels: impl Iterator<Item = (&'c str, bool)>) -> Line<'c> {
        let mut spans = Vec::new();
        for (i, (label, active)) in labels.enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", self.theme.dimmed_style()));
            }
            let style = if active {
                self.theme.active_choice_style()
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {label} "), style));
        }
        Line::from(spans)
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [source_area, sort_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);

        let source_block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.source_focused))
            .title(" Source ");
        let source_line = self.choices(
            SourceFilter::ALL
                .iter()
                .map(|s| (s.as_param(), *s == self.source)),
        );
        Paragraph::new(source_line)
            .block(source_block)
            .render(source_area, buf);

        let sort_block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.sort_focused))
            .title(" Sort ");
        let sort_line = self.choices(
            SortOption::ALL
                .iter()
                .map(|s| (s.short_label(), *s == self.sort)),
        );
        Paragraph::new(sort_line).block(sort_block).render(sort_area, buf);
    }
}
