//! Light/dark display themes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors used by the renderer for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub danger: Color,
    pub warning: Color,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the toggle action: names the theme that a toggle would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "🌙 Dark Mode",
            Self::Dark => "☀️ Light Mode",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: Color::Rgb(248, 250, 252),
                foreground: Color::Rgb(15, 23, 42),
                muted: Color::Rgb(100, 116, 139),
                border: Color::Rgb(203, 213, 225),
                accent: Color::Rgb(37, 99, 235),
                accent_alt: Color::Rgb(139, 92, 246),
                danger: Color::Rgb(220, 38, 38),
                warning: Color::Rgb(245, 158, 11),
            },
            Self::Dark => Palette {
                background: Color::Rgb(15, 23, 42),
                foreground: Color::Rgb(226, 232, 240),
                muted: Color::Rgb(148, 163, 184),
                border: Color::Rgb(51, 65, 85),
                accent: Color::Rgb(96, 165, 250),
                accent_alt: Color::Rgb(167, 139, 250),
                danger: Color::Rgb(248, 113, 113),
                warning: Color::Rgb(245, 158, 11),
            },
        }
    }
}
