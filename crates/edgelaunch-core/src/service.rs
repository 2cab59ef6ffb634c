//! Start-action dispatch and persisted pause state.
//!
//! `OverlayService` is the process-scoped object the host constructs once
//! and hands every platform event to. It owns the coordinator, so the
//! registration flags live in one place instead of ambient globals.

use crate::config::{Config, Directories};
use crate::overlay::{OverlayCoordinator, OverlayPlatform};
use crate::{Error, Result};
use edgelaunch_types::{Size, StartAction, TouchSample, WindowGeometry};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// Persisted pause/play switch (`state.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceState {
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for ServiceState {
    fn default() -> Self {
        Self {
            is_active: default_active(),
        }
    }
}

impl ServiceState {
    /// Load state from file. A missing or unreadable file yields the default.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            debug!("No service state at {}", path.display());
            return Self::default();
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Failed to parse service state: {e}");
            Self::default()
        })
    }

    /// Save state to file.
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

pub struct OverlayService<P: OverlayPlatform> {
    coordinator: OverlayCoordinator<P>,
    dirs: Directories,
    state: ServiceState,
}

impl<P: OverlayPlatform> OverlayService<P> {
    /// Wrap a coordinator, applying the persisted pause state to it.
    pub fn new(mut coordinator: OverlayCoordinator<P>, dirs: Directories) -> Self {
        let state = ServiceState::load(&dirs.state_file);
        coordinator.set_enabled(state.is_active);
        Self {
            coordinator,
            dirs,
            state,
        }
    }

    /// Dispatch a start action by its tag. Unknown or absent tags are a
    /// no-op.
    pub fn handle_tag(&mut self, tag: Option<&str>) {
        let Some(tag) = tag else {
            debug!("Start signal without action");
            return;
        };

        match tag.parse::<StartAction>() {
            Ok(action) => self.handle(action),
            Err(e) => debug!("Ignoring start signal: {e}"),
        }
    }

    pub fn handle(&mut self, action: StartAction) {
        info!("Handling start action: {action}");
        match action {
            StartAction::Launch => self.adapt_state(),
            StartAction::NotifyDataChanged | StartAction::NotifyConfigChanged => {
                self.reload_config();
            }
            StartAction::EnsureActivationTappable | StartAction::PermissionChanged => {
                self.coordinator.ensure_strip();
            }
            StartAction::Pause => self.set_active(false),
            StartAction::Play => self.set_active(true),
        }
    }

    /// Forward a raw strip touch to the coordinator.
    pub fn on_raw_touch(&mut self, sample: TouchSample, source: &WindowGeometry) -> bool {
        self.coordinator.on_raw_touch(sample, source)
    }

    pub fn on_display_changed(&mut self, screen: Size) {
        self.coordinator.on_display_changed(screen);
    }

    pub fn on_screen_off(&mut self) {
        self.coordinator.on_screen_off();
    }

    /// Re-read `config.json`. A malformed file keeps the current settings.
    pub fn reload_config(&mut self) {
        match load_config(&self.dirs.config_file) {
            Ok(config) => {
                info!("Reloaded config from {}", self.dirs.config_file.display());
                self.coordinator.apply_config(config);
            }
            Err(e) => warn!("Keeping previous config: {e}"),
        }
        self.coordinator.ensure_strip();
    }

    #[must_use]
    pub fn state(&self) -> &ServiceState {
        &self.state
    }

    #[must_use]
    pub fn dirs(&self) -> &Directories {
        &self.dirs
    }

    #[must_use]
    pub fn coordinator(&self) -> &OverlayCoordinator<P> {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut OverlayCoordinator<P> {
        &mut self.coordinator
    }

    fn adapt_state(&mut self) {
        self.coordinator.set_enabled(self.state.is_active);
        self.coordinator.on_start();
    }

    fn set_active(&mut self, active: bool) {
        self.state.is_active = active;
        if let Err(e) = self.state.save(&self.dirs.state_file) {
            warn!("Failed to save service state: {e}");
        }
        self.adapt_state();
    }
}

/// Load the config, mapping a parse failure to a config error with the path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<Config> {
    Config::load(path).map_err(|e| match e {
        Error::Json(e) => Error::Config(format!("{}: {e}", path.display())),
        other => other,
    })
}
