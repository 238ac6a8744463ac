//! Help overlay widget for displaying the full keybind reference

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "General",
        &[
            ("Tab/Shift-Tab", "Move between panes"),
            ("Ctrl-R", "Reload tag list"),
            ("Ctrl-X", "Deselect all tags"),
            ("F1", "Toggle this help"),
            ("Esc/Ctrl-C", "Quit"),
        ],
    ),
    (
        "Search",
        &[
            ("Type", "Edit query"),
            ("Enter", "Run search"),
            ("Ctrl-U", "Clear query"),
            ("←/→ Home/End", "Move cursor in query"),
        ],
    ),
    (
        "Source / Sort",
        &[("←/→ h/l", "Previous/next choice (searches)")],
    ),
    (
        "Tags",
        &[
            ("↑/↓ j/k", "Move cursor"),
            ("Space/Enter", "Toggle tag (searches)"),
            ("/", "Filter tag list"),
        ],
    ),
    (
        "Results",
        &[
            ("↑/↓ PgUp/PgDn", "Move cursor"),
            ("Enter/o", "Open link in browser"),
            ("y", "Copy link"),
        ],
    ),
];

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let [_, middle, _] = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .areas(area);

        let [_, center, _] = Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .areas(middle);
        center
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default()];
        for (heading, binds) in SECTIONS {
            lines.push(Line::styled(
                format!("  {heading}"),
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ));
            for (key, desc) in *binds {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {key:<16}"), self.theme.key_style()),
                    Span::raw(*desc),
                ]));
            }
            lines.push(Line::default());
        }
        lines.push(Line::styled("  Press any key to close", self.theme.dimmed_style()));
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_lists_every_section() {
        let theme = Theme::default();
        let content = HelpOverlay::new(&theme).build_content();
        let text: Vec<String> = content.iter().map(ToString::to_string).collect();

        for (heading, _) in SECTIONS {
            assert!(text.iter().any(|l| l.trim() == *heading));
        }
        assert!(text.iter().any(|l| l.contains("Copy link")));
    }
}
