//! Help bar widget for displaying keybind hints

use crate::ui::state::{Focus, Mode};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the focused pane
    #[must_use]
    pub fn hints_for(focus: Focus, mode: Mode) -> Vec<KeyHint> {
        if mode == Mode::TagFilter {
            return vec![
                KeyHint::new("type", "filter tags"),
                KeyHint::new("Enter", "keep filter"),
                KeyHint::new("Esc", "clear filter"),
            ];
        }

        let mut hints = match focus {
            Focus::Query => vec![KeyHint::new("Enter", "search")],
            Focus::Source => vec![KeyHint::new("←/→", "source")],
            Focus::Sort => vec![KeyHint::new("←/→", "sort")],
            Focus::Tags => vec![
                KeyHint::new("Space", "toggle tag"),
                KeyHint::new("/", "filter"),
                KeyHint::new("Ctrl-X", "clear tags"),
            ],
            Focus::Results => vec![KeyHint::new("Enter", "open"), KeyHint::new("y", "copy link")],
        };
        hints.extend([
            KeyHint::new("Tab", "next pane"),
            KeyHint::new("F1", "help"),
            KeyHint::new("Esc", "quit"),
        ]);
        hints
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_follow_focus() {
        let tags = HelpBar::hints_for(Focus::Tags, Mode::Normal);
        assert!(tags.iter().any(|h| h.action == "toggle tag"));

        let filter = HelpBar::hints_for(Focus::Tags, Mode::TagFilter);
        assert!(filter.iter().all(|h| h.action != "quit"));
    }
}
