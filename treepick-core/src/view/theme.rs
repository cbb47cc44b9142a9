//! src/view/theme.rs
//! ============================================================================
//! # Tree styles
//!
//! The selected line is the only node drawn differently from the rest. The
//! `terminal` theme keeps the user's colors and reverses the selection; the
//! `mocha` theme uses the Catppuccin Mocha palette:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme;

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStyles {
    /// Applied to the whole tree area before drawing.
    pub base: Style,
    /// Applied to the label on the selected line.
    pub selected: Style,
}

impl TreeStyles {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Terminal => Self {
                base: Style::default(),
                selected: Style::default().add_modifier(Modifier::REVERSED),
            },
            Theme::Mocha => Self {
                base: Style::default().bg(BACKGROUND).fg(FOREGROUND),
                selected: Style::default()
                    .bg(CURRENT_LINE)
                    .fg(FOREGROUND)
                    .add_modifier(Modifier::BOLD),
            },
        }
    }
}

impl Default for TreeStyles {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}
