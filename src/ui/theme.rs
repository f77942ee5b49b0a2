// ui/theme.rs - Theme system for UI styling

use ratatui::style::Color;

use crate::config::{ConfigError, ThemeConfig, parse_hex_color};

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub general: GeneralTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
    pub selection_bg: Color,
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub gutter_bg: Color,
    pub gutter_fg: Color,
    pub accent: Color,
}

fn rgb(key: &'static str, value: &str) -> Result<Color, ConfigError> {
    let (r, g, b) = parse_hex_color(key, value)?;
    Ok(Color::Rgb(r, g, b))
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            general: GeneralTheme {
                background: rgb("editor_bg", &config.editor_bg)?,
                foreground: rgb("editor_fg", &config.editor_fg)?,
                selection_bg: rgb("selection_bg", &config.selection_bg)?,
            },
            ui: UiTheme {
                status_bar_bg: rgb("status_bg", &config.status_bg)?,
                status_bar_fg: rgb("status_fg", &config.status_fg)?,
                gutter_bg: rgb("gutter_bg", &config.gutter_bg)?,
                gutter_fg: rgb("gutter_fg", &config.gutter_fg)?,
                accent: rgb("accent", &config.accent)?,
            },
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        // The built-in palette always parses
        Self::from_config(&ThemeConfig::default()).unwrap_or_else(|_| Self {
            general: GeneralTheme {
                background: Color::Black,
                foreground: Color::Gray,
                selection_bg: Color::DarkGray,
            },
            ui: UiTheme {
                status_bar_bg: Color::DarkGray,
                status_bar_fg: Color::White,
                gutter_bg: Color::DarkGray,
                gutter_fg: Color::Blue,
                accent: Color::Blue,
            },
        })
    }
}
