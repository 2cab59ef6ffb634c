//! Full-screen launcher surface
//!
//! Created for one activation and destroyed when it completes. It never
//! receives input directly: the strip holds the implicit grab for the whole
//! gesture and the coordinator injects the translated samples through
//! [`LauncherSurface::deliver`].

use edgelaunch_core::launcher::{LauncherModel, Outcome, Slot};
use edgelaunch_core::{
    CompletionSender, Entry, Error, LaunchConfig, LauncherSurface, Rect, Result, TouchSample,
    WindowGeometry,
};
use gtk4::prelude::*;
use gtk4::{cairo, gdk};
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

const SCRIM_ALPHA: f64 = 0.35;
const COLUMN_ALPHA: f64 = 0.85;
const CORNER_RADIUS: f64 = 12.0;

pub struct GtkSurface {
    app: gtk4::Application,
    completion: Option<CompletionSender>,
    model: Rc<RefCell<Option<LauncherModel>>>,
    window: Option<gtk4::Window>,
    area: Option<gtk4::DrawingArea>,
}

impl GtkSurface {
    pub fn new(app: &gtk4::Application, completion: CompletionSender) -> Self {
        Self {
            app: app.clone(),
            completion: Some(completion),
            model: Rc::new(RefCell::new(None)),
            window: None,
            area: None,
        }
    }

    fn finish(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Launch(entry) => launch_entry(entry),
            Outcome::Cancelled => debug!("Launcher dismissed"),
        }

        if let Some(completion) = self.completion.take() {
            completion.complete();
        }
    }
}

impl LauncherSurface for GtkSurface {
    fn initialize(&mut self, config: LaunchConfig) {
        *self.model.borrow_mut() = Some(LauncherModel::new(config));
    }

    fn attach(&mut self, geometry: &WindowGeometry) -> Result<()> {
        if !gtk4_layer_shell::is_supported() {
            return Err(Error::Attach(
                "compositor does not support wlr-layer-shell".to_string(),
            ));
        }

        let window = gtk4::Window::builder()
            .application(&self.app)
            .title("edgelaunch")
            .decorated(false)
            .resizable(false)
            .css_classes(["launcher-surface"])
            .build();

        window.init_layer_shell();
        window.set_layer(Layer::Overlay);
        window.set_keyboard_mode(KeyboardMode::None);
        window.set_namespace(Some("edgelaunch-launcher"));
        for edge in [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right] {
            window.set_anchor(edge, true);
        }
        window.set_exclusive_zone(-1);
        window.set_default_size(geometry.size.width, geometry.size.height);

        let area = gtk4::DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .build();
        let model = self.model.clone();
        area.set_draw_func(move |_, cr, width, height| {
            if let Some(model) = model.borrow().as_ref() {
                draw(cr, model, width, height);
            }
        });
        window.set_child(Some(&area));
        window.present();

        self.window = Some(window);
        self.area = Some(area);
        Ok(())
    }

    fn deliver(&mut self, sample: TouchSample) {
        let outcome = self
            .model
            .borrow_mut()
            .as_mut()
            .and_then(|model| model.handle(&sample));

        if let Some(area) = &self.area {
            area.queue_draw();
        }
        if let Some(outcome) = outcome {
            self.finish(&outcome);
        }
    }

    fn detach(&mut self) {
        self.area = None;
        if let Some(window) = self.window.take() {
            window.destroy();
        }
    }
}

/// Start an entry's command. Commands naming a `.desktop` file go through
/// its desktop entry so startup notification works.
fn launch_entry(entry: &Entry) {
    let Some(command) = entry.command() else {
        return;
    };
    info!("Launching {} ({command})", entry.name);

    let context = gdk::Display::default().map(|display| display.app_launch_context());
    let result = if command.ends_with(".desktop") {
        let app_info = if command.contains('/') {
            gio::DesktopAppInfo::from_filename(command)
        } else {
            gio::DesktopAppInfo::new(command)
        };
        match app_info {
            Some(app_info) => app_info.launch(&[], context.as_ref()),
            None => {
                warn!("Could not find desktop file: {command}");
                return;
            }
        }
    } else {
        gio::AppInfo::create_from_commandline(
            command,
            Some(&entry.name),
            gio::AppInfoCreateFlags::NONE,
        )
        .and_then(|app_info| app_info.launch(&[], context.as_ref()))
    };

    if let Err(e) = result {
        warn!("Failed to launch {}: {e}", entry.name);
    }
}

fn draw(cr: &cairo::Context, model: &LauncherModel, width: i32, height: i32) {
    cr.set_source_rgba(0.0, 0.0, 0.0, SCRIM_ALPHA);
    cr.rectangle(0.0, 0.0, f64::from(width), f64::from(height));
    let _ = cr.fill();

    let settings = model.settings();
    let margin = f64::from(settings.entries_margin + settings.image_margin);

    for (column, entries) in model.columns().iter().enumerate() {
        if entries.is_empty() {
            continue;
        }
        let first = model.slot_rect(Slot { column, row: 0 });
        let last = model.slot_rect(Slot {
            column,
            row: entries.len() - 1,
        });
        let background = Rect::new(
            first.x,
            first.y,
            first.width,
            last.bottom().saturating_sub(first.y),
        );
        cr.set_source_rgba(0.12, 0.12, 0.14, COLUMN_ALPHA);
        rounded_rect(cr, &Bounds::from(background), CORNER_RADIUS);
        let _ = cr.fill();

        for (row, entry) in entries.iter().enumerate() {
            let slot = Slot { column, row };
            let rect = model.slot_rect(slot);
            draw_entry(cr, entry, rect, margin, model.hovered() == Some(slot));
        }
    }
}

fn draw_entry(cr: &cairo::Context, entry: &Entry, rect: Rect, margin: f64, hovered: bool) {
    let x = f64::from(rect.x) + margin;
    let y = f64::from(rect.y) + margin;
    let size = (f64::from(rect.width) - 2.0 * margin).max(1.0);

    if hovered {
        cr.set_source_rgba(0.42, 0.62, 0.98, 1.0);
    } else if entry.is_folder() {
        cr.set_source_rgba(0.30, 0.30, 0.36, 1.0);
    } else {
        cr.set_source_rgba(0.22, 0.22, 0.26, 1.0);
    }
    rounded_rect(cr, &Bounds { x, y, w: size, h: size }, size / 4.0);
    let _ = cr.fill();

    // Initial letter as a stand-in for the icon
    let initial: String = entry.name.chars().take(1).collect();
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(size * 0.5);
    if let Ok(extents) = cr.text_extents(&initial) {
        cr.set_source_rgba(1.0, 1.0, 1.0, 0.95);
        cr.move_to(
            x + (size - extents.width()) / 2.0 - extents.x_bearing(),
            y + (size - extents.height()) / 2.0 - extents.y_bearing(),
        );
        let _ = cr.show_text(&initial);
    }

    if entry.is_folder() {
        cr.set_source_rgba(1.0, 1.0, 1.0, 0.8);
        cr.arc(
            x + size - size / 8.0,
            y + size / 8.0,
            size / 12.0,
            0.0,
            2.0 * std::f64::consts::PI,
        );
        let _ = cr.fill();
    }
}

#[derive(Clone, Copy)]
struct Bounds {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self {
            x: f64::from(rect.x),
            y: f64::from(rect.y),
            w: f64::from(rect.width),
            h: f64::from(rect.height),
        }
    }
}

fn rounded_rect(cr: &cairo::Context, bounds: &Bounds, radius: f64) {
    use std::f64::consts::{FRAC_PI_2, PI};

    let Bounds { x, y, w, h } = *bounds;
    let r = radius.min(w / 2.0).min(h / 2.0);

    cr.new_sub_path();
    cr.arc(x + w - r, y + r, r, -FRAC_PI_2, 0.0);
    cr.arc(x + w - r, y + h - r, r, 0.0, FRAC_PI_2);
    cr.arc(x + r, y + h - r, r, FRAC_PI_2, PI);
    cr.arc(x + r, y + r, r, PI, PI + FRAC_PI_2);
    cr.close_path();
}
