use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};

pub const MIN_FONT_SIZE: u32 = 6;
pub const MAX_FONT_SIZE: u32 = 72;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FontChoice {
    ScreenBold,
    Courier,
    HelveticaMono,
}

impl FontChoice {
    pub fn to_fltk(self) -> fltk::enums::Font {
        use fltk::enums::Font;
        match self {
            FontChoice::ScreenBold => Font::ScreenBold,
            FontChoice::Courier => Font::Courier,
            FontChoice::HelveticaMono => Font::Screen,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_line_numbers")]
    pub line_numbers_enabled: bool,

    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font")]
    pub font: FontChoice,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// How long transient status bar messages stay up.
    #[serde(default = "default_status_timeout_ms")]
    pub status_timeout_ms: u64,

    #[serde(default)]
    pub last_open_directory: Option<String>,
}

fn default_line_numbers() -> bool {
    true
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_font() -> FontChoice {
    FontChoice::Courier
}

fn default_font_size() -> u32 {
    14
}

fn default_status_timeout_ms() -> u64 {
    5000
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            line_numbers_enabled: default_line_numbers(),
            theme_mode: default_theme_mode(),
            font: default_font(),
            font_size: default_font_size(),
            status_timeout_ms: default_status_timeout_ms(),
            last_open_directory: None,
        }
    }
}

impl AppSettings {
    /// Load settings from the user config dir, or defaults if missing or broken.
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        match Self::load_from(&config_path) {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                let default = Self::default();
                if let Err(e) = default.save() {
                    tracing::warn!("Could not write default settings: {}", e);
                }
                default
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}. Using defaults.", config_path.display(), e);
                Self::default()
            }
        }
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let settings: AppSettings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(Some(settings))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        tracing::debug!("settings saved to {}", path.display());
        Ok(())
    }

    /// Gutter visibility for this run. A command-line override hides the
    /// gutter without touching the stored preference.
    pub fn session_line_numbers(&self, hidden_by_cli: bool) -> bool {
        self.line_numbers_enabled && !hidden_by_cli
    }

    /// Record an explicit View > Show Line Numbers choice and persist it.
    pub fn set_line_numbers(&mut self, visible: bool) -> Result<()> {
        self.line_numbers_enabled = visible;
        self.save()
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(AppError::Settings(format!(
                "font_size {} outside {}..={}",
                self.font_size, MIN_FONT_SIZE, MAX_FONT_SIZE
            )));
        }
        if self.status_timeout_ms == 0 {
            return Err(AppError::Settings("status_timeout_ms must be positive".to_string()));
        }
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("gapp-text-editor");
        path.push("settings.json");
        path
    }
}
