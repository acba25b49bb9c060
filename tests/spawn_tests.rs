// Integration tests for spawn placement.

use bounce_core::{place, ConfigError, SpawnLayout};
use glam::Vec3;

fn assert_close(actual: Vec3, expected: Vec3) {
    assert!(
        actual.abs_diff_eq(expected, 1e-4),
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn line_layout_steps_along_x() {
    let layout = SpawnLayout::Line {
        start: Vec3::ZERO,
        spacing: 2.0,
    };
    assert_eq!(place(3, &layout), Vec3::new(6.0, 0.0, 0.0));
    assert_eq!(layout.place(0), Vec3::ZERO);
}

#[test]
fn line_layout_is_relative_to_start() {
    let layout = SpawnLayout::Line {
        start: Vec3::new(-5.0, 1.0, 2.0),
        spacing: 2.5,
    };
    assert_eq!(layout.place(2), Vec3::new(0.0, 1.0, 2.0));
}

#[test]
fn circle_layout_starts_opposite_positive_x() {
    let center = Vec3::new(1.0, 2.0, 3.0);
    let layout = SpawnLayout::Circle {
        center,
        radius: 5.0,
        spacing_degrees: 90.0,
    };
    assert_close(place(0, &layout), Vec3::new(center.x - 5.0, center.y, center.z));
    // 270 degrees
    assert_close(layout.place(1), Vec3::new(center.x, center.y, center.z - 5.0));
    // 360 degrees
    assert_close(layout.place(2), Vec3::new(center.x + 5.0, center.y, center.z));
    // 450 degrees wraps to 90
    assert_close(layout.place(3), Vec3::new(center.x, center.y, center.z + 5.0));
}

#[test]
fn circle_points_stay_on_radius_in_xz_plane() {
    let layout = SpawnLayout::default_circle();
    let SpawnLayout::Circle { center, radius, .. } = layout.clone() else {
        panic!("default_circle is not a circle");
    };
    for i in 0..24 {
        let p = layout.place(i);
        assert!((p.y - center.y).abs() < 1e-6);
        assert!(((p - center).length() - radius).abs() < 1e-3);
    }
}

#[test]
fn layouts_validate_their_numbers() {
    assert!(SpawnLayout::default().validate().is_ok());
    assert!(SpawnLayout::default_circle().validate().is_ok());

    let bad_spacing = SpawnLayout::Line {
        start: Vec3::ZERO,
        spacing: f32::INFINITY,
    };
    assert!(matches!(
        bad_spacing.validate(),
        Err(ConfigError::InvalidLayout {
            field: "line spacing",
            ..
        })
    ));

    let bad_center = SpawnLayout::Circle {
        center: Vec3::new(0.0, f32::NAN, 0.0),
        radius: 3.0,
        spacing_degrees: 45.0,
    };
    assert!(matches!(
        bad_center.validate(),
        Err(ConfigError::InvalidLayout {
            field: "circle center",
            ..
        })
    ));

    let negative_radius = SpawnLayout::Circle {
        center: Vec3::ZERO,
        radius: -1.0,
        spacing_degrees: 45.0,
    };
    assert!(negative_radius.validate().is_err());
}
