//! Window geometry for the edge strip and the launcher surface.

use crate::config::LauncherSettings;
use edgelaunch_types::{Layer, Position, Rect, Side, Size, WindowGeometry};

/// Hit rectangle of the strip in screen coordinates.
#[must_use]
pub fn activation_rect(settings: &LauncherSettings, screen: Size) -> Rect {
    let screen_width = screen.width.max(1);
    let screen_height = screen.height.max(1);

    let width = settings.sensitivity.clamp(1, screen_width);
    let height = screen_height
        .saturating_sub(settings.offset_height.max(0))
        .clamp(1, screen_height);
    let top = ((screen_height - height) / 2)
        .saturating_add(settings.offset_position)
        .clamp(0, screen_height - height);

    let left = match settings.side {
        Side::Left => 0,
        Side::Right => screen_width - width,
    };

    Rect::new(left, top, width, height)
}

/// Geometry of the edge strip: full screen height, as wide as the hit
/// rectangle, pinned to the configured side.
#[must_use]
pub fn strip_geometry(settings: &LauncherSettings, screen: Size, touchable: bool) -> WindowGeometry {
    let hit = activation_rect(settings, screen);
    let origin = Position::new(hit.x, 0);

    WindowGeometry {
        origin,
        size: Size::new(hit.width, screen.height.max(1)),
        anchor: Some(settings.side),
        layer: Layer::Edge,
        touch_rect: Rect::new(0, hit.y, hit.width, hit.height),
        touchable,
        focusable: false,
        passthrough: true,
        translucent: true,
        highlighted: settings.show_background,
    }
}

/// Geometry of the full-screen launcher surface.
#[must_use]
pub fn surface_geometry(screen: Size) -> WindowGeometry {
    let size = Size::new(screen.width.max(1), screen.height.max(1));

    WindowGeometry {
        origin: Position::new(0, 0),
        size,
        anchor: None,
        layer: Layer::Overlay,
        touch_rect: Rect::from_size(size),
        touchable: true,
        focusable: false,
        passthrough: false,
        translucent: true,
        highlighted: false,
    }
}

/// How many entry slots fit in one column on this screen.
#[must_use]
pub fn column_capacity(settings: &LauncherSettings, screen: Size) -> usize {
    usize::try_from(screen.height.max(0) / settings.entry_size()).unwrap_or(0)
}
