//! Overlay windows and the coordinator that hands touches between them.
//!
//! The window system is injected through [`OverlayPlatform`]: it builds the
//! edge strip and launcher surfaces, and the coordinator drives their
//! attach/deliver/detach lifecycle. Nothing here talks to a real display,
//! so the whole state machine runs under unit tests.

mod announcement;
mod completion;
mod coordinator;

pub use announcement::{Announcement, ForegroundAnnouncer, Priority, TapAction, Visibility};
pub use completion::{ActivationId, CompletionReceiver, CompletionSender};
pub use coordinator::{ActivationState, OverlayCoordinator};

use crate::Result;
use crate::config::LauncherSettings;
use edgelaunch_types::{Entry, Size, TouchSample, WindowGeometry};

/// The thin, always-present window on the screen edge.
///
/// Implementations forward every raw touch they physically receive to the
/// coordinator, untranslated and relative to themselves, together with the
/// geometry they were last attached or reconfigured with.
pub trait EdgeStrip {
    /// Attach the window to the display.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Attach`] if the window system refuses the
    /// window (for example, missing overlay permission).
    fn attach(&mut self, geometry: &WindowGeometry) -> Result<()>;

    /// Apply new geometry to the already attached window.
    ///
    /// # Errors
    ///
    /// Returns an error if the window system rejects the new geometry.
    fn reconfigure(&mut self, geometry: &WindowGeometry) -> Result<()>;

    /// Remove the window. Only used for clean shutdown.
    fn detach(&mut self);
}

/// The full-screen launcher, created per activation.
///
/// A surface reports that the user is done through the
/// [`CompletionSender`] it was created with. After completing it must not
/// expect further samples, and the very first delivered sample is the
/// `Down` that started the activation.
pub trait LauncherSurface {
    fn initialize(&mut self, config: LaunchConfig);

    /// Attach the window to the display.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Attach`] if the window cannot be shown.
    fn attach(&mut self, geometry: &WindowGeometry) -> Result<()>;

    /// Inject a sample already translated into this surface's space.
    fn deliver(&mut self, sample: TouchSample);

    fn detach(&mut self);
}

/// Window-system capability used by the coordinator.
pub trait OverlayPlatform {
    type Strip: EdgeStrip;
    type Surface: LauncherSurface;

    fn create_strip(&mut self) -> Self::Strip;

    fn create_surface(&mut self, completion: CompletionSender) -> Self::Surface;
}

/// Everything one activation of the launcher surface needs. Built fresh for
/// every activation and owned by the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConfig {
    pub settings: LauncherSettings,
    pub screen: Size,
    pub entries: Vec<Entry>,
}
