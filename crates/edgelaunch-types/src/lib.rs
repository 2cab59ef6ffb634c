//! Shared types for edgelaunch components.
//!
//! This crate provides the plain data used across edgelaunch-core and
//! edgelaunch-gtk: screen geometry, touch samples, launchable entries and
//! the start actions accepted by the running service. All types are
//! serializable so they can live in config and entry files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Geometry
// ============================================================================

/// A point in some window's coordinate space.
///
/// Coordinates are fractional because touch input is reported with
/// sub-pixel precision (Wayland uses 24.8 fixed point).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Absolute screen position of a window's top-left corner, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Integer pixel rectangle.
///
/// Containment is half-open: the left and top edges are inside, the right
/// and bottom edges are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether `point` lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= f64::from(self.x)
            && point.x < f64::from(self.right())
            && point.y >= f64::from(self.y)
            && point.y < f64::from(self.bottom())
    }
}

/// Screen edge the strip is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    #[default]
    Right,
}

/// Stacking layer of an overlay window. `Overlay` is drawn above `Edge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Thin always-present strip, below the launcher surface
    Edge,
    /// Full-screen launcher surface
    Overlay,
}

/// Placement and input behaviour of an overlay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowGeometry {
    /// Absolute screen position of the window's top-left corner
    pub origin: Position,
    pub size: Size,
    /// Screen edge the window is anchored to; `None` for full-screen windows
    pub anchor: Option<Side>,
    pub layer: Layer,
    /// Functional touch area, in window-local coordinates
    pub touch_rect: Rect,
    /// Whether the window currently claims touches at all
    pub touchable: bool,
    /// Whether the window may take keyboard focus
    pub focusable: bool,
    /// Whether touches outside `touch_rect` pass through to content below
    pub passthrough: bool,
    /// Whether the window is drawn with a translucent pixel format
    pub translucent: bool,
    /// Whether `touch_rect` is tinted so the user can find it
    pub highlighted: bool,
}

impl WindowGeometry {
    /// Window-local bounds.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }
}

// ============================================================================
// Touch input
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

impl TouchAction {
    /// Whether this action ends a gesture.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// A single touch sample, in the coordinate space of the window that
/// received it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchSample {
    pub action: TouchAction,
    pub x: f64,
    pub y: f64,
    /// Event time in milliseconds, from the windowing layer's clock
    pub timestamp: u64,
}

impl TouchSample {
    #[must_use]
    pub const fn new(action: TouchAction, x: f64, y: f64, timestamp: u64) -> Self {
        Self {
            action,
            x,
            y,
            timestamp,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Same action and timestamp at a different position.
    #[must_use]
    pub const fn with_position(self, point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
            ..self
        }
    }
}

// ============================================================================
// Entries
// ============================================================================

/// A launchable entry or a folder of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EntryKind {
    /// Runs a command line when selected
    App { command: String },
    /// User-defined folder
    Folder {
        #[serde(default)]
        entries: Vec<Entry>,
    },
    /// Synthetic folder holding entries that did not fit on screen
    VirtualFolder {
        #[serde(default)]
        entries: Vec<Entry>,
    },
}

impl Entry {
    #[must_use]
    pub fn app(id: u64, name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: None,
            kind: EntryKind::App {
                command: command.into(),
            },
        }
    }

    #[must_use]
    pub fn folder(id: u64, name: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: None,
            kind: EntryKind::Folder { entries },
        }
    }

    #[must_use]
    pub fn is_folder(&self) -> bool {
        !matches!(self.kind, EntryKind::App { .. })
    }

    /// Children of a folder; empty for apps.
    #[must_use]
    pub fn children(&self) -> &[Entry] {
        match &self.kind {
            EntryKind::App { .. } => &[],
            EntryKind::Folder { entries } | EntryKind::VirtualFolder { entries } => entries,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Entry>> {
        match &mut self.kind {
            EntryKind::App { .. } => None,
            EntryKind::Folder { entries } | EntryKind::VirtualFolder { entries } => Some(entries),
        }
    }

    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::App { command } => Some(command),
            _ => None,
        }
    }
}

// ============================================================================
// Start actions
// ============================================================================

/// Actions accepted by the running service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartAction {
    /// Register the strip and the status announcement
    Launch,
    /// The entry store changed
    NotifyDataChanged,
    /// The configuration file changed
    NotifyConfigChanged,
    /// Retry strip registration or re-apply its geometry
    EnsureActivationTappable,
    /// Overlay permission changed; same handling as `EnsureActivationTappable`
    PermissionChanged,
    /// Stop claiming touches until `Play`
    Pause,
    Play,
}

impl StartAction {
    pub const ALL: [Self; 7] = [
        Self::Launch,
        Self::NotifyDataChanged,
        Self::NotifyConfigChanged,
        Self::EnsureActivationTappable,
        Self::PermissionChanged,
        Self::Pause,
        Self::Play,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Launch => "launch",
            Self::NotifyDataChanged => "notify-data-changed",
            Self::NotifyConfigChanged => "notify-config-changed",
            Self::EnsureActivationTappable => "ensure-activation-tappable",
            Self::PermissionChanged => "permission-changed",
            Self::Pause => "pause",
            Self::Play => "play",
        }
    }
}

impl fmt::Display for StartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised action tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action: {}", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for StartAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
