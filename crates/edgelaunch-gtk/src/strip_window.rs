//! Edge strip window
//!
//! A layer-shell surface on `Layer::Top`, anchored to one screen edge and
//! stretched over its full height. Only the hit rectangle is part of the
//! Wayland input region; everywhere else touches fall through to whatever
//! is below. Once a touch lands inside, the implicit grab keeps the whole
//! gesture on this surface, even after the launcher appears above it.

use edgelaunch_core::{EdgeStrip, Error, Result, Side, TouchAction, TouchSample, WindowGeometry};
use gtk4::prelude::*;
use gtk4::{cairo, gdk, glib};
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;

/// Receives every raw sample the strip gets, together with the strip's
/// current geometry. Returns whether the sample was claimed.
pub type TouchCallback = Rc<RefCell<Option<Box<dyn Fn(TouchSample, &WindowGeometry) -> bool>>>>;

pub struct GtkStrip {
    app: gtk4::Application,
    window: Option<gtk4::Window>,
    area: Option<gtk4::DrawingArea>,
    geometry: Rc<Cell<Option<WindowGeometry>>>,
    on_touch: TouchCallback,
}

impl GtkStrip {
    pub fn new(app: &gtk4::Application, on_touch: TouchCallback) -> Self {
        Self {
            app: app.clone(),
            window: None,
            area: None,
            geometry: Rc::new(Cell::new(None)),
            on_touch,
        }
    }

    fn build_window(&self) -> (gtk4::Window, gtk4::DrawingArea) {
        let window = gtk4::Window::builder()
            .application(&self.app)
            .title("edgelaunch strip")
            .decorated(false)
            .resizable(false)
            .css_classes(["edge-strip"])
            .build();

        window.init_layer_shell();
        window.set_layer(Layer::Top);
        window.set_keyboard_mode(KeyboardMode::None);
        window.set_namespace(Some("edgelaunch-strip"));
        window.set_anchor(Edge::Top, true);
        window.set_anchor(Edge::Bottom, true);
        window.set_exclusive_zone(-1);

        let area = gtk4::DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .build();
        {
            let geometry = self.geometry.clone();
            area.set_draw_func(move |_, cr, _, _| {
                let Some(geometry) = geometry.get() else {
                    return;
                };
                if !geometry.highlighted || !geometry.touchable {
                    return;
                }
                let rect = geometry.touch_rect;
                cr.set_source_rgba(1.0, 1.0, 1.0, 0.25);
                cr.rectangle(
                    f64::from(rect.x),
                    f64::from(rect.y),
                    f64::from(rect.width),
                    f64::from(rect.height),
                );
                let _ = cr.fill();
            });
        }
        window.set_child(Some(&area));

        window.add_controller(self.touch_controller());

        {
            let geometry = self.geometry.clone();
            window.connect_map(move |window| {
                if let Some(current) = geometry.get() {
                    apply_input_region(window, &current);
                }
                let Some(surface) = window.surface() else {
                    return;
                };
                let geometry = geometry.clone();
                surface.connect_layout(move |surface, _, _| {
                    let surface = surface.clone();
                    let geometry = geometry.clone();
                    glib::idle_add_local_once(move || {
                        if let Some(current) = geometry.get() {
                            set_input_region(&surface, &current);
                        }
                    });
                });
            });
        }

        (window, area)
    }

    fn touch_controller(&self) -> gtk4::EventControllerLegacy {
        let controller = gtk4::EventControllerLegacy::new();
        let geometry = self.geometry.clone();
        let on_touch = self.on_touch.clone();

        controller.connect_event(move |_, event| {
            let Some(action) = touch_action(event) else {
                return glib::Propagation::Proceed;
            };
            let (Some((x, y)), Some(geometry)) = (event.position(), geometry.get()) else {
                return glib::Propagation::Proceed;
            };

            let sample = TouchSample::new(action, x, y, u64::from(event.time()));
            let claimed = on_touch
                .borrow()
                .as_ref()
                .is_some_and(|callback| callback(sample, &geometry));

            if claimed {
                glib::Propagation::Stop
            } else {
                glib::Propagation::Proceed
            }
        });

        controller
    }

    fn apply(&self, geometry: &WindowGeometry) {
        self.geometry.set(Some(*geometry));

        let Some(window) = &self.window else {
            return;
        };

        let pinned = geometry.anchor.unwrap_or_default();
        window.set_anchor(Edge::Left, pinned == Side::Left);
        window.set_anchor(Edge::Right, pinned == Side::Right);
        window.set_default_size(geometry.size.width, geometry.size.height);
        window.set_size_request(geometry.size.width, -1);
        window.set_can_target(geometry.touchable);

        apply_input_region(window, geometry);
        if let Some(area) = &self.area {
            area.queue_draw();
        }
    }
}

impl EdgeStrip for GtkStrip {
    fn attach(&mut self, geometry: &WindowGeometry) -> Result<()> {
        if !gtk4_layer_shell::is_supported() {
            return Err(Error::Attach(
                "compositor does not support wlr-layer-shell".to_string(),
            ));
        }

        if self.window.is_none() {
            let (window, area) = self.build_window();
            self.window = Some(window);
            self.area = Some(area);
        }
        self.apply(geometry);

        if let Some(window) = &self.window {
            window.present();
        }
        Ok(())
    }

    fn reconfigure(&mut self, geometry: &WindowGeometry) -> Result<()> {
        self.apply(geometry);
        Ok(())
    }

    fn detach(&mut self) {
        self.area = None;
        if let Some(window) = self.window.take() {
            window.destroy();
        }
    }
}

fn touch_action(event: &gdk::Event) -> Option<TouchAction> {
    match event.event_type() {
        gdk::EventType::TouchBegin | gdk::EventType::ButtonPress => Some(TouchAction::Down),
        gdk::EventType::TouchUpdate => Some(TouchAction::Move),
        // Mouse drags stand in for a finger; plain hovering is not a touch
        gdk::EventType::MotionNotify => event
            .modifier_state()
            .contains(gdk::ModifierType::BUTTON1_MASK)
            .then_some(TouchAction::Move),
        gdk::EventType::TouchEnd | gdk::EventType::ButtonRelease => Some(TouchAction::Up),
        gdk::EventType::TouchCancel => Some(TouchAction::Cancel),
        _ => None,
    }
}

fn apply_input_region(window: &gtk4::Window, geometry: &WindowGeometry) {
    if let Some(surface) = window.surface() {
        set_input_region(&surface, geometry);
    }
}

/// Restrict input to the hit rectangle. GTK resets the input region when it
/// lays the window out, so this runs after every layout as well.
fn set_input_region(surface: &gdk::Surface, geometry: &WindowGeometry) {
    let rect = if geometry.touchable {
        geometry.touch_rect
    } else {
        edgelaunch_core::Rect::default()
    };
    debug!(
        "Strip input region {}x{} at ({}, {})",
        rect.width, rect.height, rect.x, rect.y
    );

    let region = cairo::Region::create_rectangle(&cairo::RectangleInt::new(
        rect.x,
        rect.y,
        rect.width,
        rect.height,
    ));
    surface.set_input_region(&region);
}
