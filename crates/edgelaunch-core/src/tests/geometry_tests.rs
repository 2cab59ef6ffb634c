//! Tests for strip and surface geometry

use super::fixtures::{SCREEN, edge_settings};
use crate::config::LauncherSettings;
use crate::geometry::{activation_rect, column_capacity, strip_geometry, surface_geometry};
use edgelaunch_types::{Layer, Position, Rect, Side, Size};
use proptest::prelude::*;

#[test]
fn test_right_edge_rect_spans_full_height() {
    assert_eq!(
        activation_rect(&edge_settings(), SCREEN),
        Rect::new(995, 0, 5, 1000)
    );
}

#[test]
fn test_left_edge_rect_starts_at_zero() {
    let settings = LauncherSettings {
        side: Side::Left,
        ..edge_settings()
    };
    assert_eq!(activation_rect(&settings, SCREEN), Rect::new(0, 0, 5, 1000));

    let strip = strip_geometry(&settings, SCREEN, true);
    assert_eq!(strip.origin, Position::new(0, 0));
    assert_eq!(strip.anchor, Some(Side::Left));
}

#[test]
fn test_offset_height_centres_rect() {
    let settings = LauncherSettings {
        offset_height: 400,
        ..edge_settings()
    };
    assert_eq!(
        activation_rect(&settings, SCREEN),
        Rect::new(995, 200, 5, 600)
    );
}

#[test]
fn test_offset_position_shifts_and_clamps() {
    let settings = LauncherSettings {
        offset_height: 400,
        offset_position: -150,
        ..edge_settings()
    };
    assert_eq!(activation_rect(&settings, SCREEN).y, 50);

    let settings = LauncherSettings {
        offset_height: 400,
        offset_position: 5000,
        ..edge_settings()
    };
    let rect = activation_rect(&settings, SCREEN);
    assert_eq!(rect.y, 400);
    assert_eq!(rect.bottom(), 1000);
}

#[test]
fn test_degenerate_settings_keep_rect_on_screen() {
    let settings = LauncherSettings {
        sensitivity: 0,
        offset_height: 5000,
        ..edge_settings()
    };
    assert_eq!(activation_rect(&settings, SCREEN), Rect::new(999, 499, 1, 1));

    let settings = LauncherSettings {
        sensitivity: 5000,
        ..edge_settings()
    };
    assert_eq!(activation_rect(&settings, SCREEN), Rect::new(0, 0, 1000, 1000));
}

#[test]
fn test_strip_touch_rect_is_window_local() {
    let settings = LauncherSettings {
        offset_height: 400,
        ..edge_settings()
    };
    let strip = strip_geometry(&settings, SCREEN, false);

    assert_eq!(strip.origin, Position::new(995, 0));
    assert_eq!(strip.size, Size::new(5, 1000));
    assert_eq!(strip.touch_rect, Rect::new(0, 200, 5, 600));
    assert_eq!(strip.layer, Layer::Edge);
    assert!(!strip.touchable);
    assert!(strip.translucent);
}

#[test]
fn test_show_background_highlights_strip_only() {
    let settings = LauncherSettings {
        show_background: true,
        ..edge_settings()
    };
    assert!(strip_geometry(&settings, SCREEN, true).highlighted);
    assert!(!strip_geometry(&edge_settings(), SCREEN, true).highlighted);
    assert!(!surface_geometry(SCREEN).highlighted);
}

#[test]
fn test_surface_covers_screen_above_strip() {
    let surface = surface_geometry(SCREEN);
    let strip = strip_geometry(&edge_settings(), SCREEN, true);

    assert_eq!(surface.origin, Position::new(0, 0));
    assert_eq!(surface.bounds(), Rect::new(0, 0, 1000, 1000));
    assert_eq!(surface.anchor, None);
    assert!(surface.layer > strip.layer);
    assert!(!surface.passthrough);
}

#[test]
fn test_column_capacity() {
    // 48 + 2 * 6 + 2 * 4 = 68
    assert_eq!(column_capacity(&edge_settings(), SCREEN), 14);
    assert_eq!(column_capacity(&edge_settings(), Size::new(1000, 50)), 0);
}

proptest! {
    #[test]
    fn prop_activation_rect_stays_on_screen(
        width in 1i32..4000, height in 1i32..4000,
        sensitivity in any::<i32>(),
        offset_position in any::<i32>(),
        offset_height in any::<i32>(),
        left in any::<bool>(),
    ) {
        let settings = LauncherSettings {
            side: if left { Side::Left } else { Side::Right },
            sensitivity,
            offset_position,
            offset_height,
            ..LauncherSettings::default()
        };
        let rect = activation_rect(&settings, Size::new(width, height));

        prop_assert!(!rect.is_empty());
        prop_assert!(rect.x >= 0 && rect.right() <= width);
        prop_assert!(rect.y >= 0 && rect.bottom() <= height);
        if left {
            prop_assert_eq!(rect.x, 0);
        } else {
            prop_assert_eq!(rect.right(), width);
        }
    }
}

#[test]
fn test_entry_size_saturates_on_huge_settings() {
    let settings = LauncherSettings {
        image_width: i32::MAX,
        image_margin: i32::MAX,
        entries_margin: i32::MAX,
        ..LauncherSettings::default()
    };
    assert_eq!(settings.entry_size(), i32::MAX);
    assert_eq!(column_capacity(&settings, SCREEN), 0);

    let negative = LauncherSettings {
        image_width: i32::MIN,
        image_margin: i32::MIN,
        entries_margin: i32::MIN,
        ..LauncherSettings::default()
    };
    assert_eq!(negative.entry_size(), 1);
    assert_eq!(column_capacity(&negative, SCREEN), 1000);
}

proptest! {
    #[test]
    fn prop_entry_size_is_positive_for_any_settings(
        image_width in any::<i32>(),
        image_margin in any::<i32>(),
        entries_margin in any::<i32>(),
    ) {
        let settings = LauncherSettings {
            image_width,
            image_margin,
            entries_margin,
            ..LauncherSettings::default()
        };

        prop_assert!(settings.entry_size() >= 1);
        prop_assert!(column_capacity(&settings, SCREEN) <= 1000);
    }
}
