//! GTK window system for the overlay coordinator.

use crate::strip_window::{GtkStrip, TouchCallback};
use crate::surface_window::GtkSurface;
use anyhow::{Context, Result};
use edgelaunch_core::{CompletionSender, OverlayPlatform, Size};
use gtk4::gdk;
use gtk4::prelude::*;

pub struct GtkPlatform {
    app: gtk4::Application,
    on_touch: TouchCallback,
}

impl GtkPlatform {
    pub fn new(app: &gtk4::Application, on_touch: TouchCallback) -> Self {
        Self {
            app: app.clone(),
            on_touch,
        }
    }
}

impl OverlayPlatform for GtkPlatform {
    type Strip = GtkStrip;
    type Surface = GtkSurface;

    fn create_strip(&mut self) -> GtkStrip {
        GtkStrip::new(&self.app, self.on_touch.clone())
    }

    fn create_surface(&mut self, completion: CompletionSender) -> GtkSurface {
        GtkSurface::new(&self.app, completion)
    }
}

/// Logical size of the output the strip lives on. Layer surfaces without
/// an explicit output go to the compositor's first one.
pub fn screen_size() -> Result<Size> {
    let display = gdk::Display::default().context("No default display")?;
    let monitor = display
        .monitors()
        .item(0)
        .and_downcast::<gdk::Monitor>()
        .context("Display has no monitors")?;
    let geometry = monitor.geometry();

    Ok(Size::new(geometry.width(), geometry.height()))
}
