//! Touch-ownership state machine.
//!
//! While idle, the strip only claims touches inside its hit rectangle, and
//! any sample there starts an activation. While a surface is active,
//! every sample the strip receives belongs to that surface, translated into
//! its coordinate space. The activation ends when the surface completes.
//!
//! All calls happen on one dispatch context. Completion signals travel
//! through a channel rather than a stored listener, and are drained at the
//! top of every touch so a completion processed before a queued touch is
//! honoured.

use super::announcement::{Announcement, ForegroundAnnouncer};
use super::completion::{ActivationId, CompletionChannel, CompletionReceiver};
use super::{EdgeStrip, LaunchConfig, LauncherSurface, OverlayPlatform};
use crate::config::Config;
use crate::entries::{DataSource, load_root_entries, prepare_entries};
use crate::geometry::{column_capacity, strip_geometry, surface_geometry};
use crate::translate::translate_sample;
use edgelaunch_types::{Size, TouchSample, WindowGeometry};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationState {
    /// No launcher surface exists
    Idle,
    /// Exactly one launcher surface exists and owns every touch
    Active,
}

struct Activation<S> {
    id: ActivationId,
    surface: S,
    geometry: WindowGeometry,
}

pub struct OverlayCoordinator<P: OverlayPlatform> {
    platform: P,
    entries: Box<dyn DataSource>,
    announcer: Box<dyn ForegroundAnnouncer>,
    config: Config,
    screen: Size,
    /// Cleared while paused; the strip stays attached but claims nothing
    enabled: bool,
    /// `Some` once the strip is registered
    strip: Option<P::Strip>,
    strip_geometry: WindowGeometry,
    announced: bool,
    activation: Option<Activation<P::Surface>>,
    next_activation: u64,
    completions: CompletionChannel,
}

impl<P: OverlayPlatform> OverlayCoordinator<P> {
    pub fn new(
        platform: P,
        entries: Box<dyn DataSource>,
        announcer: Box<dyn ForegroundAnnouncer>,
        config: Config,
        screen: Size,
    ) -> Self {
        let strip_geometry = strip_geometry(&config.launcher, screen, true);
        Self {
            platform,
            entries,
            announcer,
            config,
            screen,
            enabled: true,
            strip: None,
            strip_geometry,
            announced: false,
            activation: None,
            next_activation: 1,
            completions: CompletionChannel::new(),
        }
    }

    /// Register the strip and post the announcement, each at most once.
    ///
    /// A failed registration leaves the coordinator idle and inert; it is
    /// only attempted again on the next explicit call.
    pub fn on_start(&mut self) {
        if self.strip.is_none() {
            self.register_strip();
        }

        if !self.announced {
            match self.announcer.post(&self.announcement()) {
                Ok(()) => {
                    info!("Posted foreground announcement");
                    self.announced = true;
                }
                Err(e) => warn!("Failed to post announcement: {e}"),
            }
        }
    }

    /// Route one raw touch received by the strip.
    ///
    /// `source` is the geometry of the window that received the sample.
    /// Returns whether the touch was claimed; unclaimed touches belong to
    /// whatever is underneath the strip.
    pub fn on_raw_touch(&mut self, sample: TouchSample, source: &WindowGeometry) -> bool {
        self.drain_completions();

        if let Some(activation) = self.activation.as_mut() {
            let translated = translate_sample(sample, source, &activation.geometry);
            activation.surface.deliver(translated);
            self.drain_completions();
            return true;
        }

        if !self.enabled || !source.touchable {
            return false;
        }

        if !source.touch_rect.contains(sample.position()) {
            return false;
        }

        self.activate(sample, source);
        self.drain_completions();
        true
    }

    /// Tear down the active surface. A no-op while idle.
    pub fn on_surface_completed(&mut self) {
        let Some(mut activation) = self.activation.take() else {
            debug!("Surface completion while idle ignored");
            return;
        };

        activation.surface.detach();
        info!("Activation {} finished", activation.id);
    }

    /// Handle a completion signal. Signals from earlier activations are
    /// ignored so they cannot tear down a newer surface.
    pub fn handle_completion(&mut self, id: ActivationId) {
        if self.active_activation() == Some(id) {
            self.on_surface_completed();
        } else {
            debug!("Stale completion for activation {id} ignored");
        }
    }

    /// Process every completion signalled so far.
    pub fn drain_completions(&mut self) {
        while let Some(id) = self.completions.receiver().try_recv() {
            self.handle_completion(id);
        }
    }

    /// Receiver for hosts that await completions on their own event loop.
    #[must_use]
    pub fn completion_receiver(&self) -> CompletionReceiver {
        self.completions.receiver().clone()
    }

    /// Pause or resume claiming touches. Pausing ends any activation.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }

        info!("Edge strip {}", if enabled { "enabled" } else { "paused" });
        self.enabled = enabled;
        if !enabled {
            self.on_surface_completed();
        }
        self.reapply_strip_geometry();
        self.update_announcement();
    }

    /// Replace the configuration. Ends any activation so no gesture is
    /// translated with two different strip origins.
    pub fn apply_config(&mut self, config: Config) {
        if config == self.config {
            debug!("Config unchanged");
            return;
        }

        self.on_surface_completed();
        self.config = config;
        self.reapply_strip_geometry();
        self.update_announcement();
    }

    /// The display was resized or rotated.
    pub fn on_display_changed(&mut self, screen: Size) {
        self.on_surface_completed();
        if screen == self.screen {
            return;
        }

        info!("Display changed to {}x{}", screen.width, screen.height);
        self.screen = screen;
        self.reapply_strip_geometry();
    }

    /// The display went to sleep.
    pub fn on_screen_off(&mut self) {
        self.on_surface_completed();
    }

    /// Register the strip if that has not happened yet, otherwise re-apply
    /// its geometry.
    pub fn ensure_strip(&mut self) {
        if self.strip.is_some() {
            self.reapply_strip_geometry();
        } else {
            self.register_strip();
        }
    }

    /// Detach every window. Used for clean shutdown.
    pub fn shutdown(&mut self) {
        self.on_surface_completed();
        if let Some(mut strip) = self.strip.take() {
            strip.detach();
            info!("Edge strip detached");
        }
    }

    #[must_use]
    pub fn state(&self) -> ActivationState {
        if self.activation.is_some() {
            ActivationState::Active
        } else {
            ActivationState::Idle
        }
    }

    #[must_use]
    pub fn active_activation(&self) -> Option<ActivationId> {
        self.activation.as_ref().map(|activation| activation.id)
    }

    #[must_use]
    pub fn is_strip_registered(&self) -> bool {
        self.strip.is_some()
    }

    #[must_use]
    pub fn is_announced(&self) -> bool {
        self.announced
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn screen(&self) -> Size {
        self.screen
    }

    #[must_use]
    pub fn strip_geometry(&self) -> &WindowGeometry {
        &self.strip_geometry
    }

    #[must_use]
    pub fn surface_geometry(&self) -> WindowGeometry {
        surface_geometry(self.screen)
    }

    fn register_strip(&mut self) {
        let mut strip = self.platform.create_strip();
        match strip.attach(&self.strip_geometry) {
            Ok(()) => {
                info!(
                    "Edge strip attached at ({}, {}) size {}x{}",
                    self.strip_geometry.origin.x,
                    self.strip_geometry.origin.y,
                    self.strip_geometry.size.width,
                    self.strip_geometry.size.height
                );
                self.strip = Some(strip);
            }
            Err(e) => error!("Failed to attach edge strip: {e}"),
        }
    }

    fn reapply_strip_geometry(&mut self) {
        self.strip_geometry = strip_geometry(&self.config.launcher, self.screen, self.enabled);
        if let Some(strip) = self.strip.as_mut()
            && let Err(e) = strip.reconfigure(&self.strip_geometry)
        {
            warn!("Failed to reconfigure edge strip: {e}");
        }
    }

    fn announcement(&self) -> Announcement {
        Announcement::for_state(&self.config.notification, self.enabled)
    }

    fn update_announcement(&mut self) {
        if !self.announced {
            return;
        }
        if let Err(e) = self.announcer.update(&self.announcement()) {
            warn!("Failed to update announcement: {e}");
        }
    }

    /// Build, attach and prime a new surface. Leaves the coordinator idle
    /// if any step fails; the activating touch is then lost.
    fn activate(&mut self, sample: TouchSample, source: &WindowGeometry) {
        let entries = match load_root_entries(self.entries.as_mut()) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Dropping activation, entries failed to load: {e}");
                return;
            }
        };

        let settings = &self.config.launcher;
        let entries = prepare_entries(
            entries,
            column_capacity(settings, self.screen),
            &settings.virtual_folder_name,
        );
        let launch_config = LaunchConfig {
            settings: settings.clone(),
            screen: self.screen,
            entries,
        };

        let id = ActivationId(self.next_activation);
        self.next_activation += 1;

        let geometry = surface_geometry(self.screen);
        let mut surface = self.platform.create_surface(self.completions.sender(id));
        surface.initialize(launch_config);
        if let Err(e) = surface.attach(&geometry) {
            error!("Failed to attach launcher surface: {e}");
            return;
        }

        info!("Activation {id} started");
        let first = translate_sample(sample, source, &geometry);
        let activation = self.activation.insert(Activation {
            id,
            surface,
            geometry,
        });
        activation.surface.deliver(first);
    }
}
