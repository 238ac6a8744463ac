//! Result pane: project cards, or the message for the current display mode

use crate::ui::theme::Theme;
use crate::view::{DisplayMode, LOADING_MESSAGE, NO_RESULTS_MESSAGE, ProjectCard, ResultView};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

/// Project cards in server order
pub struct ResultList<'a> {
    view: ResultView<'a>,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> ResultList<'a> {
    #[must_use]
    pub const fn new(view: ResultView<'a>, theme: &'a Theme) -> Self {
        Self {
            view,
            theme,
            focused: false,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn card(&self, card: &ProjectCard<'a>, width: usize) -> ListItem<'a> {
        let mut lines = vec![Line::from(vec![
            Span::styled(card.title, self.theme.title_style()),
            Span::raw("  "),
            Span::styled(format!("[{}]", card.source), self.theme.dimmed_style()),
        ])];

        if !card.description.is_empty() {
            lines.push(Line::raw(truncate(card.description, width)));
        }
        if !card.tags.is_empty() {
            let mut spans = Vec::with_capacity(card.tags.len() * 2);
            for (i, tag) in card.tags.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(format!("#{tag}"), self.theme.tag_style()));
            }
            lines.push(Line::from(spans));
        }
        if !card.url.is_empty() {
            lines.push(Line::styled(card.url, self.theme.url_style()));
        }
        lines.push(Line::default());

        ListItem::new(Text::from(lines))
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let width = usize::from(area.width.saturating_sub(2));
        let items: Vec<ListItem> = self
            .view
            .cards()
            .iter()
            .map(|card| self.card(card, width))
            .collect();

        let highlight = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.normal_style()
        };
        let list = List::new(items)
            .highlight_style(highlight)
            .highlight_symbol("▌ ")
            .highlight_spacing(HighlightSpacing::Always);
        StatefulWidget::render(list, area, buf, state);
    }

    fn render_message(&self, message: &'static str, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::styled(message, self.theme.dimmed_style()))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// Cut `text` to at most `max` characters, marking the cut with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

impl StatefulWidget for ResultList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let title = format!(" Results ({}) ", self.view.visible().len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        match self.view.mode() {
            DisplayMode::Loading => self.render_message(LOADING_MESSAGE, inner, buf),
            DisplayMode::Empty => self.render_message(NO_RESULTS_MESSAGE, inner, buf),
            DisplayMode::List(_) => self.render_cards(inner, buf, state),
            DisplayMode::ErrorBanner { message, retained } => {
                let [banner_area, list_area] =
                    Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);
                Paragraph::new(Line::styled(message, self.theme.error_style()))
                    .block(
                        Block::default()
                            .borders(Borders::BOTTOM)
                            .border_style(self.theme.error_style()),
                    )
                    .wrap(Wrap { trim: true })
                    .render(banner_area, buf);
                if !retained.is_empty() {
                    self.render_cards(list_area, buf, state);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::RequestStatus;
    use crate::project::Project;
    use crate::ui::widgets::buffer_text;

    fn render(view: ResultView<'_>) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 16);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default().with_selected(Some(0));
        StatefulWidget::render(ResultList::new(view, &theme), area, &mut buf, &mut state);
        buffer_text(&buf)
    }

    fn sample() -> Vec<Project> {
        vec![
            Project::new(1, "ros2-nav")
                .with_source("GitHub")
                .with_description("Navigation stack for ROS 2")
                .with_url("https://github.com/example/ros2-nav")
                .with_tags(["ros2", "navigation"]),
        ]
    }

    #[test]
    fn test_cards_show_all_fields() {
        let projects = sample();
        let status = RequestStatus::Idle;
        let out = render(ResultView::new(&projects, &status));

        assert!(out.contains("Results (1)"));
        assert!(out.contains("ros2-nav  [GitHub]"));
        assert!(out.contains("Navigation stack for ROS 2"));
        assert!(out.contains("#ros2 #navigation"));
        assert!(out.contains("https://github.com/example/ros2-nav"));
    }

    #[test]
    fn test_loading_and_empty_messages() {
        let projects = sample();
        let loading = RequestStatus::Loading;
        let out = render(ResultView::new(&projects, &loading));
        assert!(out.contains(LOADING_MESSAGE));
        assert!(!out.contains("ros2-nav"));

        let idle = RequestStatus::Idle;
        let out = render(ResultView::new(&[], &idle));
        assert!(out.contains(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_error_banner_above_retained_cards() {
        let projects = sample();
        let status = RequestStatus::Error("Search failed.".to_string());
        let out = render(ResultView::new(&projects, &status));

        let banner = out.find("Search failed.").unwrap();
        let card = out.find("ros2-nav").unwrap();
        assert!(banner < card);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer line", 6), "a lon…");
    }
}
