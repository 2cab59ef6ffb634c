use crate::Result;
use edgelaunch_types::Side;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub launcher: LauncherSettings,

    #[serde(default)]
    pub notification: NotificationConfig,
}

impl Config {
    /// Load config from file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        super::validation::warn_unknown_fields(&content, "config.json");
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Strip placement and launcher layout. All lengths are logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherSettings {
    #[serde(default)]
    pub side: Side,

    /// Width of the touch-sensitive strip
    #[serde(default = "default_sensitivity")]
    pub sensitivity: i32,

    /// Vertical shift of the hit rectangle from the centred position
    #[serde(default)]
    pub offset_position: i32,

    /// How much shorter than the screen the hit rectangle is
    #[serde(default)]
    pub offset_height: i32,

    /// Tint the hit rectangle so it can be found
    #[serde(default)]
    pub show_background: bool,

    #[serde(default = "default_image_width")]
    pub image_width: i32,

    #[serde(default = "default_image_margin")]
    pub image_margin: i32,

    #[serde(default = "default_entries_margin")]
    pub entries_margin: i32,

    /// How long a finger must rest on a folder before it opens
    #[serde(default = "default_folder_dwell")]
    pub folder_dwell_ms: u64,

    #[serde(default = "default_virtual_folder_name")]
    pub virtual_folder_name: String,
}

fn default_sensitivity() -> i32 {
    20
}
fn default_image_width() -> i32 {
    48
}
fn default_image_margin() -> i32 {
    6
}
fn default_entries_margin() -> i32 {
    4
}
fn default_folder_dwell() -> u64 {
    300
}
fn default_virtual_folder_name() -> String {
    "More".to_string()
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            side: Side::default(),
            sensitivity: default_sensitivity(),
            offset_position: 0,
            offset_height: 0,
            show_background: false,
            image_width: default_image_width(),
            image_margin: default_image_margin(),
            entries_margin: default_entries_margin(),
            folder_dwell_ms: default_folder_dwell(),
            virtual_folder_name: default_virtual_folder_name(),
        }
    }
}

impl LauncherSettings {
    /// Height (and width) of one entry slot in the launcher. Never below
    /// one pixel, and saturates instead of overflowing on absurd values.
    #[must_use]
    pub fn entry_size(&self) -> i32 {
        self.image_width
            .saturating_add(self.image_margin.saturating_mul(2))
            .saturating_add(self.entries_margin.saturating_mul(2))
            .max(1)
    }
}

/// Text of the persistent status announcement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_active_body")]
    pub active_body: String,

    #[serde(default = "default_paused_body")]
    pub paused_body: String,
}

fn default_title() -> String {
    "edgelaunch".to_string()
}
fn default_active_body() -> String {
    "Edge launcher is active".to_string()
}
fn default_paused_body() -> String {
    "Edge launcher is paused".to_string()
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            active_body: default_active_body(),
            paused_body: default_paused_body(),
        }
    }
}
