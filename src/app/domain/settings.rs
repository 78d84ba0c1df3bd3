use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::controllers::layout::{DEFAULT_SPLIT, clamp_split};
use crate::app::infrastructure::error::{AppError, Result};

/// Bundled syntect themes available for fenced code in the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SyntaxTheme {
    #[default]
    Base16OceanDark,
    Base16OceanLight,
    Base16EightiesDark,
    Base16MochaDark,
    SolarizedDark,
    SolarizedLight,
    InspiredGitHub,
}

impl SyntaxTheme {
    /// Get the syntect theme key for this theme
    pub fn theme_key(&self) -> &'static str {
        match self {
            Self::Base16OceanDark => "base16-ocean.dark",
            Self::Base16OceanLight => "base16-ocean.light",
            Self::Base16EightiesDark => "base16-eighties.dark",
            Self::Base16MochaDark => "base16-mocha.dark",
            Self::SolarizedDark => "Solarized (dark)",
            Self::SolarizedLight => "Solarized (light)",
            Self::InspiredGitHub => "InspiredGitHub",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,

    /// Editor share of the width, in percent, at startup.
    #[serde(default = "default_initial_split")]
    pub initial_split: f64,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_preview_font_size")]
    pub preview_font_size: u32,

    #[serde(default)]
    pub syntax_theme: SyntaxTheme,
}

fn default_window_width() -> i32 {
    1100
}

fn default_window_height() -> i32 {
    720
}

fn default_initial_split() -> f64 {
    DEFAULT_SPLIT
}

fn default_font_size() -> u32 {
    14
}

fn default_preview_font_size() -> u32 {
    4 // HelpView <font size>, roughly 14pt
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            initial_split: default_initial_split(),
            font_size: default_font_size(),
            preview_font_size: default_preview_font_size(),
            syntax_theme: SyntaxTheme::default(),
        }
    }
}

impl AppSettings {
    /// Load settings from the config directory. A missing or unreadable
    /// file yields defaults; nothing is ever written back.
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No settings file, using defaults");
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(AppError::Settings(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.font_size == 0 {
            return Err(AppError::Settings("font size must be positive".to_string()));
        }
        Ok(())
    }

    /// Startup split, clamped into the range the divider allows.
    pub fn initial_split(&self) -> f64 {
        if self.initial_split.is_finite() {
            clamp_split(self.initial_split)
        } else {
            DEFAULT_SPLIT
        }
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("livemark");
        path.push("settings.json");
        path
    }
}
