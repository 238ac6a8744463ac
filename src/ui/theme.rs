//! Palette for the search screen
//!
//! Colours are grouped by what they mark on screen: focus and selection,
//! project card parts, and status feedback.

use super::state::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    /// Highlighted row and active source/sort choice
    pub selection_bg: Color,
    pub selection_fg: Color,
    /// Focused pane borders, the query cursor and headings
    pub accent: Color,
    /// Unfocused borders and secondary text
    pub muted: Color,
    pub card_title: Color,
    pub card_tag: Color,
    pub card_link: Color,
    /// Selected tags in the tag pane
    pub tag_on: Color,
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    /// Failed requests: the result banner and the tag pane error
    pub failure: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            card_title: Color::LightBlue,
            card_tag: Color::Magenta,
            card_link: Color::Cyan,
            tag_on: Color::Green,
            info: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            failure: Color::Red,
        }
    }
}

impl Theme {
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::new()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::new()
    }

    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            self.cursor_style()
        } else {
            Style::new().fg(self.muted)
        }
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::new().fg(self.failure)
    }

    /// Key names in the help overlay
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::new().fg(self.info)
    }

    #[must_use]
    pub fn message_style(&self, level: MessageLevel) -> Style {
        let color = match level {
            MessageLevel::Info => self.info,
            MessageLevel::Success => self.success,
            MessageLevel::Warning => self.warning,
            MessageLevel::Error => self.failure,
        };
        Style::new().fg(color)
    }

    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::new().fg(self.card_tag)
    }

    #[must_use]
    pub fn selected_tag_style(&self) -> Style {
        Style::new().fg(self.tag_on).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::new().fg(self.card_title).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn url_style(&self) -> Style {
        Style::new().fg(self.card_link).add_modifier(Modifier::UNDERLINED)
    }

    /// The chosen entry of the source/sort bar
    #[must_use]
    pub fn active_choice_style(&self) -> Style {
        self.selected_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_levels_use_distinct_colors() {
        let theme = Theme::default();
        let levels = [
            MessageLevel::Info,
            MessageLevel::Success,
            MessageLevel::Warning,
            MessageLevel::Error,
        ];
        let colors: Vec<_> = levels.iter().map(|&l| theme.message_style(l).fg).collect();

        assert_eq!(theme.message_style(MessageLevel::Error), theme.error_style());
        assert!(colors.iter().all(Option::is_some));
        assert_ne!(colors[2], colors[3]);
    }

    #[test]
    fn test_focused_border_stands_out() {
        let theme = Theme::default();
        assert_ne!(theme.border_style(true), theme.border_style(false));
        assert_eq!(theme.border_style(false), theme.dimmed_style());
    }
}
