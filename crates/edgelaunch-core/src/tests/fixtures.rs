//! Test fixtures: recording fakes for every injected capability.
//!
//! All fakes share a [`Probe`] so tests can inspect what happened after the
//! fakes have been moved into the coordinator.

use crate::config::{Config, LauncherSettings};
use crate::entries::DataSource;
use crate::overlay::{
    ActivationId, Announcement, CompletionSender, EdgeStrip, ForegroundAnnouncer, LaunchConfig,
    LauncherSurface, OverlayCoordinator, OverlayPlatform,
};
use crate::{Error, Result};
use edgelaunch_types::{Entry, Side, Size, TouchAction, TouchSample, WindowGeometry};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    StripAttached(WindowGeometry),
    StripReconfigured(WindowGeometry),
    StripDetached,
    SurfaceCreated(ActivationId),
    SurfaceInitialized(ActivationId, usize),
    SurfaceAttached(ActivationId),
    SurfaceDelivered(ActivationId, TouchSample),
    SurfaceDetached(ActivationId),
}

type CompletionSlot = Rc<RefCell<Option<CompletionSender>>>;

/// Shared view into everything the fakes record.
#[derive(Clone, Default)]
pub struct Probe {
    pub windows: Rc<RefCell<Vec<WindowEvent>>>,
    pub posts: Rc<RefCell<Vec<Announcement>>>,
    pub updates: Rc<RefCell<Vec<Announcement>>>,
    pub source_calls: Rc<RefCell<Vec<&'static str>>>,
    pub live_surfaces: Rc<Cell<usize>>,
    pub max_live_surfaces: Rc<Cell<usize>>,
    pub fail_strip_attach: Rc<Cell<bool>>,
    pub fail_surface_attach: Rc<Cell<bool>>,
    pub fail_announce: Rc<Cell<bool>>,
    pub fail_entry_open: Rc<Cell<bool>>,
    pub fail_entry_load: Rc<Cell<bool>>,
    /// Surfaces complete themselves on Up/Cancel when set
    pub complete_on_terminal: Rc<Cell<bool>>,
    completions: Rc<RefCell<Vec<CompletionSlot>>>,
    last_config: Rc<RefCell<Option<LaunchConfig>>>,
}

impl Probe {
    pub fn strip_attach_count(&self) -> usize {
        self.windows
            .borrow()
            .iter()
            .filter(|e| matches!(e, WindowEvent::StripAttached(_)))
            .count()
    }

    pub fn surfaces_created(&self) -> Vec<ActivationId> {
        self.windows
            .borrow()
            .iter()
            .filter_map(|e| match e {
                WindowEvent::SurfaceCreated(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn delivered(&self) -> Vec<(ActivationId, TouchSample)> {
        self.windows
            .borrow()
            .iter()
            .filter_map(|e| match e {
                WindowEvent::SurfaceDelivered(id, sample) => Some((*id, *sample)),
                _ => None,
            })
            .collect()
    }

    pub fn detached(&self) -> Vec<ActivationId> {
        self.windows
            .borrow()
            .iter()
            .filter_map(|e| match e {
                WindowEvent::SurfaceDetached(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn last_strip_geometry(&self) -> Option<WindowGeometry> {
        self.windows.borrow().iter().rev().find_map(|e| match e {
            WindowEvent::StripAttached(g) | WindowEvent::StripReconfigured(g) => Some(*g),
            _ => None,
        })
    }

    pub fn last_launch_config(&self) -> Option<LaunchConfig> {
        self.last_config.borrow().clone()
    }

    /// Complete the `index`-th created surface from outside, as a late
    /// asynchronous signal would.
    pub fn complete_surface(&self, index: usize) {
        let slot = self.completions.borrow()[index].clone();
        let sender = slot.borrow_mut().take();
        if let Some(sender) = sender {
            sender.complete();
        }
    }
}

pub struct FakePlatform {
    probe: Probe,
}

impl OverlayPlatform for FakePlatform {
    type Strip = FakeStrip;
    type Surface = FakeSurface;

    fn create_strip(&mut self) -> FakeStrip {
        FakeStrip {
            probe: self.probe.clone(),
        }
    }

    fn create_surface(&mut self, completion: CompletionSender) -> FakeSurface {
        let id = completion.id();
        let slot = Rc::new(RefCell::new(Some(completion)));
        self.probe.completions.borrow_mut().push(slot.clone());
        self.probe
            .windows
            .borrow_mut()
            .push(WindowEvent::SurfaceCreated(id));

        let live = self.probe.live_surfaces.get() + 1;
        self.probe.live_surfaces.set(live);
        if live > self.probe.max_live_surfaces.get() {
            self.probe.max_live_surfaces.set(live);
        }

        FakeSurface {
            id,
            probe: self.probe.clone(),
            completion: slot,
            attached: false,
        }
    }
}

pub struct FakeStrip {
    probe: Probe,
}

impl EdgeStrip for FakeStrip {
    fn attach(&mut self, geometry: &WindowGeometry) -> Result<()> {
        if self.probe.fail_strip_attach.get() {
            return Err(Error::Attach("overlay permission denied".to_string()));
        }
        self.probe
            .windows
            .borrow_mut()
            .push(WindowEvent::StripAttached(*geometry));
        Ok(())
    }

    fn reconfigure(&mut self, geometry: &WindowGeometry) -> Result<()> {
        self.probe
            .windows
            .borrow_mut()
            .push(WindowEvent::StripReconfigured(*geometry));
        Ok(())
    }

    fn detach(&mut self) {
        self.probe
            .windows
            .borrow_mut()
            .push(WindowEvent::StripDetached);
    }
}

pub struct FakeSurface {
    id: ActivationId,
    probe: Probe,
    completion: CompletionSlot,
    attached: bool,
}

impl LauncherSurface for FakeSurface {
    fn initialize(&mut self, config: LaunchConfig) {
        self.probe
            .windows
            .borrow_mut()
            .push(WindowEvent::SurfaceInitialized(self.id, config.entries.len()));
        *self.probe.last_config.borrow_mut() = Some(config);
    }

    fn attach(&mut self, _geometry: &WindowGeometry) -> Result<()> {
        if self.probe.fail_surface_attach.get() {
            return Err(Error::Attach("surface refused".to_string()));
        }
        self.attached = true;
        self.probe
            .windows
            .borrow_mut()
            .push(WindowEvent::SurfaceAttached(self.id));
        Ok(())
    }

    fn deliver(&mut self, sample: TouchSample) {
        assert!(self.attached, "deliver before attach");
        assert!(
            self.completion.borrow().is_some() || !self.probe.complete_on_terminal.get(),
            "deliver after completion"
        );
        self.probe
            .windows
            .borrow_mut()
            .push(WindowEvent::SurfaceDelivered(self.id, sample));

        if self.probe.complete_on_terminal.get() && sample.action.is_terminal() {
            let sender = self.completion.borrow_mut().take();
            if let Some(sender) = sender {
                sender.complete();
            }
        }
    }

    fn detach(&mut self) {
        self.attached = false;
        self.probe
            .windows
            .borrow_mut()
            .push(WindowEvent::SurfaceDetached(self.id));
    }
}

impl Drop for FakeSurface {
    fn drop(&mut self) {
        self.probe
            .live_surfaces
            .set(self.probe.live_surfaces.get() - 1);
    }
}

pub struct FakeAnnouncer {
    probe: Probe,
}

impl ForegroundAnnouncer for FakeAnnouncer {
    fn post(&mut self, announcement: &Announcement) -> Result<()> {
        if self.probe.fail_announce.get() {
            return Err(Error::Announce("no notification service".to_string()));
        }
        self.probe.posts.borrow_mut().push(announcement.clone());
        Ok(())
    }

    fn update(&mut self, announcement: &Announcement) -> Result<()> {
        self.probe.updates.borrow_mut().push(announcement.clone());
        Ok(())
    }
}

pub struct FakeEntries {
    probe: Probe,
    entries: Vec<Entry>,
    open: bool,
}

impl DataSource for FakeEntries {
    fn open(&mut self) -> Result<()> {
        self.probe.source_calls.borrow_mut().push("open");
        if self.probe.fail_entry_open.get() {
            return Err(Error::EntryLoad("store unavailable".to_string()));
        }
        self.open = true;
        Ok(())
    }

    fn close(&mut self) {
        assert!(self.open, "close without open");
        self.open = false;
        self.probe.source_calls.borrow_mut().push("close");
    }

    fn load_root_content(&self) -> Result<Vec<Entry>> {
        self.probe.source_calls.borrow_mut().push("load");
        if self.probe.fail_entry_load.get() {
            return Err(Error::EntryLoad("corrupt store".to_string()));
        }
        Ok(self.entries.clone())
    }
}

pub fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::app(1, "Terminal", "foot"),
        Entry::app(2, "Browser", "firefox"),
        Entry::folder(3, "Tools", vec![Entry::app(4, "Editor", "helix")]),
    ]
}

/// Settings matching the reference scenario: a 5 px strip on the right
/// edge of a 1000x1000 screen, hit rect spanning the full height.
pub fn edge_settings() -> LauncherSettings {
    LauncherSettings {
        side: Side::Right,
        sensitivity: 5,
        ..LauncherSettings::default()
    }
}

pub const SCREEN: Size = Size::new(1000, 1000);

pub fn coordinator_with(
    config: Config,
    entries: Vec<Entry>,
) -> (OverlayCoordinator<FakePlatform>, Probe) {
    let probe = Probe::default();
    probe.complete_on_terminal.set(true);

    let coordinator = OverlayCoordinator::new(
        FakePlatform {
            probe: probe.clone(),
        },
        Box::new(FakeEntries {
            probe: probe.clone(),
            entries,
            open: false,
        }),
        Box::new(FakeAnnouncer {
            probe: probe.clone(),
        }),
        config,
        SCREEN,
    );
    (coordinator, probe)
}

pub fn coordinator() -> (OverlayCoordinator<FakePlatform>, Probe) {
    let config = Config {
        launcher: edge_settings(),
        ..Config::default()
    };
    coordinator_with(config, sample_entries())
}

pub fn touch(action: TouchAction, x: f64, y: f64) -> TouchSample {
    TouchSample::new(action, x, y, 0)
}

pub fn touch_at(action: TouchAction, x: f64, y: f64, timestamp: u64) -> TouchSample {
    TouchSample::new(action, x, y, timestamp)
}
