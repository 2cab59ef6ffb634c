//! Application wiring: builds the overlay service on startup and routes
//! every platform event into it.

use crate::announcer::GioAnnouncer;
use crate::platform::{self, GtkPlatform};
use crate::strip_window::TouchCallback;
use crate::{styles, watcher};
use anyhow::{Context, Result};
use edgelaunch_core::config::{Config, Directories};
use edgelaunch_core::entries::JsonEntryStore;
use edgelaunch_core::service::load_config;
use edgelaunch_core::{OverlayCoordinator, OverlayService, StartAction, TouchSample, WindowGeometry};
use gtk4::prelude::*;
use gtk4::{gdk, glib};
use std::cell::{OnceCell, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, info, warn};

type Service = OverlayService<GtkPlatform>;

/// Process-wide handle to the service, filled in once on startup.
#[derive(Clone, Default)]
pub struct Host {
    service: Rc<OnceCell<Rc<RefCell<Service>>>>,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self, app: &gtk4::Application) -> Result<()> {
        styles::load();

        let dirs = Directories::new();
        dirs.ensure_exists()
            .context("Failed to create config directories")?;

        let config = load_config(&dirs.config_file).unwrap_or_else(|e| {
            warn!("Using default config: {e}");
            Config::default()
        });
        let screen = platform::screen_size()?;
        info!("Screen size {}x{}", screen.width, screen.height);

        let on_touch: TouchCallback = Rc::new(RefCell::new(None));
        let coordinator = OverlayCoordinator::new(
            GtkPlatform::new(app, on_touch.clone()),
            Box::new(JsonEntryStore::new(&dirs.entries_file)),
            Box::new(GioAnnouncer::new(app)),
            config,
            screen,
        );
        let completions = coordinator.completion_receiver();
        let service = Rc::new(RefCell::new(OverlayService::new(coordinator, dirs.clone())));

        {
            let service = Rc::downgrade(&service);
            *on_touch.borrow_mut() = Some(Box::new(move |sample: TouchSample, geometry: &WindowGeometry| {
                with_service(&service, |s| s.on_raw_touch(sample, geometry)).unwrap_or(false)
            }));
        }

        register_actions(app, &service, &dirs);
        watch_files(&service, &dirs);
        watch_monitors(&service);

        {
            let service = Rc::downgrade(&service);
            glib::spawn_future_local(async move {
                while let Some(id) = completions.recv().await {
                    with_service(&service, |s| s.coordinator_mut().handle_completion(id));
                }
                debug!("Completion receiver closed");
            });
        }

        {
            let service = Rc::downgrade(&service);
            app.connect_shutdown(move |_| {
                with_service(&service, |s| s.coordinator_mut().shutdown());
            });
        }

        if self.service.set(service).is_err() {
            warn!("Edge launcher already started");
        }
        Ok(())
    }

    /// Handle an action tag from the command line of any instance.
    pub fn handle_action(&self, tag: &str) {
        match self.service.get() {
            Some(service) => {
                with_service(&Rc::downgrade(service), |s| s.handle_tag(Some(tag)));
            }
            None => warn!("Ignoring '{tag}': edge launcher not started"),
        }
    }
}

/// Run `f` on the service unless it is gone or already borrowed further up
/// the stack.
fn with_service<T>(service: &Weak<RefCell<Service>>, f: impl FnOnce(&mut Service) -> T) -> Option<T> {
    let service = service.upgrade()?;
    let Ok(mut service) = service.try_borrow_mut() else {
        warn!("Overlay service busy, dropping event");
        return None;
    };
    Some(f(&mut service))
}

fn register_actions(app: &gtk4::Application, service: &Rc<RefCell<Service>>, dirs: &Directories) {
    for (name, action) in [("pause", StartAction::Pause), ("play", StartAction::Play)] {
        let service = Rc::downgrade(service);
        let simple = gio::SimpleAction::new(name, None);
        simple.connect_activate(move |_, _| {
            with_service(&service, |s| s.handle(action));
        });
        app.add_action(&simple);
    }

    let config_file = dirs.config_file.clone();
    let open_settings = gio::SimpleAction::new("open-settings", None);
    open_settings.connect_activate(move |_, _| {
        if !config_file.exists()
            && let Err(e) = Config::default().save(&config_file)
        {
            warn!("Failed to write default config: {e}");
            return;
        }
        let uri = gio::File::for_path(&config_file).uri();
        let context = gdk::Display::default().map(|display| display.app_launch_context());
        if let Err(e) = gio::AppInfo::launch_default_for_uri(&uri, context.as_ref()) {
            warn!("Failed to open settings: {e}");
        }
    });
    app.add_action(&open_settings);
}

fn watch_files(service: &Rc<RefCell<Service>>, dirs: &Directories) {
    let watched = [
        (&dirs.config_file, StartAction::NotifyConfigChanged),
        (&dirs.entries_file, StartAction::NotifyDataChanged),
    ];
    for (path, action) in watched {
        let service = Rc::downgrade(service);
        watcher::watch_file(path, move || {
            with_service(&service, |s| s.handle(action));
        });
    }
}

fn watch_monitors(service: &Rc<RefCell<Service>>) {
    let Some(display) = gdk::Display::default() else {
        return;
    };

    let service = Rc::downgrade(service);
    display.monitors().connect_items_changed(move |_, _, _, _| {
        match platform::screen_size() {
            Ok(screen) => {
                with_service(&service, |s| s.on_display_changed(screen));
            }
            Err(e) => warn!("Display changed but no usable monitor: {e:#}"),
        }
    });
}
