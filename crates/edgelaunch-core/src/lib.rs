//! Core library for edgelaunch.
//!
//! Owns the touch-ownership state machine that hands a single gesture from
//! the thin edge strip to the full-screen launcher surface, plus everything
//! it needs that does not touch a real window system: geometry, coordinate
//! translation, entry loading, configuration and the start-action service.

pub mod config;
pub mod entries;
pub mod geometry;
pub mod launcher;
pub mod overlay;
pub mod service;
pub mod translate;

mod error;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use overlay::{
    ActivationId, ActivationState, Announcement, CompletionReceiver, CompletionSender, EdgeStrip,
    ForegroundAnnouncer, LaunchConfig, LauncherSurface, OverlayCoordinator, OverlayPlatform,
};
pub use service::{OverlayService, ServiceState};

pub use edgelaunch_types::*;
