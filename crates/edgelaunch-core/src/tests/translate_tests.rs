//! Tests for coordinate translation between overlay windows

use crate::geometry::{strip_geometry, surface_geometry};
use crate::translate::{translate, translate_sample};
use super::fixtures::{SCREEN, edge_settings, touch_at};
use edgelaunch_types::{Point, Position, Size, TouchAction, WindowGeometry};
use proptest::prelude::*;

fn window_at(x: i32, y: i32) -> WindowGeometry {
    let mut geometry = surface_geometry(Size::new(100, 100));
    geometry.origin = Position::new(x, y);
    geometry
}

#[test]
fn test_strip_to_surface_adds_strip_origin() {
    let strip = strip_geometry(&edge_settings(), SCREEN, true);
    let surface = surface_geometry(SCREEN);

    assert_eq!(
        translate(Point::new(2.0, 50.0), &strip, &surface),
        Point::new(997.0, 50.0)
    );
    assert_eq!(
        translate(Point::new(997.0, 50.0), &surface, &strip),
        Point::new(2.0, 50.0)
    );
}

#[test]
fn test_translation_keeps_action_and_timestamp() {
    let from = window_at(10, 20);
    let to = window_at(-5, 0);
    let sample = touch_at(TouchAction::Move, 1.25, 2.5, 1234);

    let translated = translate_sample(sample, &from, &to);
    assert_eq!(translated.action, TouchAction::Move);
    assert_eq!(translated.timestamp, 1234);
    assert_eq!(translated.position(), Point::new(16.25, 22.5));
}

#[test]
fn test_translation_between_same_window_is_identity() {
    let window = window_at(300, 400);
    let point = Point::new(-12.5, 7.75);
    assert_eq!(translate(point, &window, &window), point);
}

#[test]
fn test_extreme_origins_do_not_overflow() {
    let from = window_at(i32::MAX, i32::MIN);
    let to = window_at(i32::MIN, i32::MAX);
    let translated = translate(Point::new(0.0, 0.0), &from, &to);

    assert_eq!(translated.x, 4_294_967_295.0);
    assert_eq!(translated.y, -4_294_967_295.0);
}

/// Touch coordinates arrive as 24.8 fixed point, so generate points on a
/// 1/256 px grid.
fn fixed_point() -> impl Strategy<Value = f64> {
    (-2_000_000i32..2_000_000).prop_map(|raw| f64::from(raw) / 256.0)
}

proptest! {
    #[test]
    fn prop_round_trip_is_identity(
        x in fixed_point(), y in fixed_point(),
        ax in -20_000i32..20_000, ay in -20_000i32..20_000,
        bx in -20_000i32..20_000, by in -20_000i32..20_000,
    ) {
        let a = window_at(ax, ay);
        let b = window_at(bx, by);
        let point = Point::new(x, y);

        prop_assert_eq!(translate(translate(point, &a, &b), &b, &a), point);
    }

    #[test]
    fn prop_translation_adds_origin_difference(
        x in fixed_point(), y in fixed_point(),
        ax in -20_000i32..20_000, ay in -20_000i32..20_000,
        bx in -20_000i32..20_000, by in -20_000i32..20_000,
    ) {
        let a = window_at(ax, ay);
        let b = window_at(bx, by);
        let translated = translate(Point::new(x, y), &a, &b);

        prop_assert_eq!(translated.x, x + f64::from(ax - bx));
        prop_assert_eq!(translated.y, y + f64::from(ay - by));
    }
}
