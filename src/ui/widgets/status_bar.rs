//! Status bar widget for displaying messages

use crate::ui::state::{MessageLevel, StatusMessage};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar: latest message on the left, backend address on the right
pub struct StatusBar<'a> {
    messages: &'a [&'a StatusMessage],
    backend: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(messages: &'a [&'a StatusMessage], backend: &'a str, theme: &'a Theme) -> Self {
        Self {
            messages,
            backend,
            theme,
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false))
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(inner);

        if let Some(msg) = self.messages.last() {
            let style = self.theme.message_style(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(left, buf);
        }

        Paragraph::new(Line::styled(self.backend, self.theme.dimmed_style()))
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::buffer_text;

    #[test]
    fn test_shows_latest_message() {
        let theme = Theme::default();
        let first = StatusMessage::new(MessageLevel::Info, "first");
        let second = StatusMessage::new(MessageLevel::Error, "second");
        let messages = [&first, &second];
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);

        StatusBar::new(&messages, "http://localhost:5000", &theme).render(area, &mut buf);

        let out = buffer_text(&buf);
        assert!(out.contains("✗ second"));
        assert!(!out.contains("first"));
        assert!(out.contains("localhost:5000"));
    }
}
