//! Coordinate translation between overlay windows.

use edgelaunch_types::{Point, TouchSample, WindowGeometry};

/// Map `point` from `from`'s local space into `to`'s local space.
///
/// Origins are whole pixels, so the offset is computed exactly in integers
/// and applied with a single addition per axis.
// Origin differences fit comfortably in f64's 53-bit mantissa
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn translate(point: Point, from: &WindowGeometry, to: &WindowGeometry) -> Point {
    let dx = i64::from(from.origin.x) - i64::from(to.origin.x);
    let dy = i64::from(from.origin.y) - i64::from(to.origin.y);

    Point::new(point.x + dx as f64, point.y + dy as f64)
}

/// Translate a touch sample, keeping its action and timestamp.
#[must_use]
pub fn translate_sample(
    sample: TouchSample,
    from: &WindowGeometry,
    to: &WindowGeometry,
) -> TouchSample {
    sample.with_position(translate(sample.position(), from, to))
}
