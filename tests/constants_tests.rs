// Tests for default tuning constants and their relationships.

use bounce_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tempo_defaults_are_positive() {
    assert!(DEFAULT_BPM > 0);
    assert!(DEFAULT_BEATS_PER_MEASURE > 0);
    assert!(SECONDS_PER_MINUTE > 0.0);
    assert!(DEFAULT_MAX_BALLS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mapping_ranges_are_ordered() {
    assert!(MIN_PITCH < MAX_PITCH);
    assert!(MIN_BALL_MASS < MAX_BALL_MASS);
    assert!(MIN_BALL_SCALE < MAX_BALL_SCALE);
    assert!(MIN_BOUNCE_HEIGHT < MAX_BOUNCE_HEIGHT);
    assert!(MIN_BALL_MASS > 0.0);
    assert!(MIN_BALL_SCALE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn draft_pitch_is_playable() {
    assert!((MIN_PITCH..=MAX_PITCH).contains(&DRAFT_PITCH));
    assert!(PitchMapping::default().check_pitch(DRAFT_PITCH).is_ok());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_defaults_are_sane() {
    assert!(LINE_SPACING > 0.0);
    assert!(CIRCLE_RADIUS > 0.0);
    assert!(CIRCLE_SPACING_DEGREES > 0.0 && CIRCLE_SPACING_DEGREES < 360.0);
}

#[test]
fn clip_catalogue_is_consistent() {
    assert_eq!(DEFAULT_CLIP_NAMES.len(), DEFAULT_CLIP_COLORS.len());
    for color in DEFAULT_CLIP_COLORS.iter().chain([&NEUTRAL_COLOR]) {
        assert!(color.iter().all(|c| (0.0..=1.0).contains(c)));
    }
}
