use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config format in '{}': {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("theme.{key}: '{value}' is not a #rrggbb color")]
    InvalidColor { key: &'static str, value: String },
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JotterConfig {
    /// Interval of the gutter polling refresh, in milliseconds
    pub refresh_interval_ms: u64,
    pub tab_width: usize,
    pub undo_depth: usize,
    pub theme: ThemeConfig,
}

impl Default for JotterConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 50,
            tab_width: 4,
            undo_depth: 100,
            theme: ThemeConfig::default(),
        }
    }
}

/// Colors as `#rrggbb` strings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub editor_bg: String,
    pub editor_fg: String,
    pub gutter_bg: String,
    pub gutter_fg: String,
    pub status_bg: String,
    pub status_fg: String,
    pub selection_bg: String,
    pub accent: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            editor_bg: "#282c34".to_string(),
            editor_fg: "#abb2bf".to_string(),
            gutter_bg: "#3e4451".to_string(),
            gutter_fg: "#61afef".to_string(),
            status_bg: "#3e4451".to_string(),
            status_fg: "#ffffff".to_string(),
            selection_bg: "#3e4451".to_string(),
            accent: "#61afef".to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("editor_bg", &self.editor_bg),
            ("editor_fg", &self.editor_fg),
            ("gutter_bg", &self.gutter_bg),
            ("gutter_fg", &self.gutter_fg),
            ("status_bg", &self.status_bg),
            ("status_fg", &self.status_fg),
            ("selection_bg", &self.selection_bg),
            ("accent", &self.accent),
        ]
    }
}

/// Parse a `#rrggbb` color
pub fn parse_hex_color(key: &'static str, value: &str) -> Result<(u8, u8, u8), ConfigError> {
    let invalid = || ConfigError::InvalidColor {
        key,
        value: value.to_string(),
    };
    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Ok((r, g, b)),
        _ => Err(invalid()),
    }
}

impl JotterConfig {
    /// `~/.config/jotter/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jotter").join("config.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: JotterConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given; otherwise the default location, falling back to built-in
    /// defaults when that file does not exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::Zero("refresh_interval_ms"));
        }
        if self.tab_width == 0 {
            return Err(ConfigError::Zero("tab_width"));
        }
        if self.undo_depth == 0 {
            return Err(ConfigError::Zero("undo_depth"));
        }
        for (key, value) in self.theme.entries() {
            parse_hex_color(key, value)?;
        }
        Ok(())
    }
}
