// Integration tests for the beat clock.

use bounce_core::{BeatClock, ConfigError};
use rand::prelude::*;
use std::time::Duration;

fn secs(s: f64) -> Duration {
    Duration::from_secs_f64(s)
}

#[test]
fn new_clock_starts_at_downbeat() {
    let clock = BeatClock::new(120, 4).unwrap();
    assert_eq!(clock.beat_count(), 0);
    assert_eq!(clock.current_beat_index(), 0);
    assert_eq!(clock.next_beat_index(), 1);
    assert_eq!(clock.phase(), 0.0);
    assert!((clock.seconds_per_beat() - 0.5).abs() < 1e-12);
    assert!(!clock.half_beat_passed());
}

#[test]
fn rejects_zero_tempo_or_measure() {
    assert_eq!(BeatClock::new(0, 4).unwrap_err(), ConfigError::ZeroBpm);
    assert_eq!(
        BeatClock::new(120, 0).unwrap_err(),
        ConfigError::ZeroBeatsPerMeasure
    );
}

#[test]
fn failed_configure_keeps_previous_state() {
    let mut clock = BeatClock::new(120, 4).unwrap();
    clock.advance(secs(1.25));
    assert_eq!(clock.configure(0, 3), Err(ConfigError::ZeroBpm));
    assert_eq!(clock.bpm(), 120);
    assert_eq!(clock.beats_per_measure(), 4);
    assert_eq!(clock.beat_count(), 2);
}

#[test]
fn configure_resets_position() {
    let mut clock = BeatClock::new(120, 4).unwrap();
    clock.advance(secs(1.25));
    clock.configure(60, 3).unwrap();
    assert_eq!(clock.beat_count(), 0);
    assert_eq!(clock.elapsed_in_beat(), 0.0);
    assert!((clock.seconds_per_beat() - 1.0).abs() < 1e-12);
    assert_eq!(clock.beats_per_measure(), 3);
}

#[test]
fn huge_delta_crosses_every_boundary_in_one_call() {
    let mut clock = BeatClock::new(120, 4).unwrap();
    let crossed = clock.advance(secs(10.0));
    assert_eq!(crossed, 20);
    assert_eq!(clock.beat_count(), 20);
    assert_eq!(clock.elapsed_in_beat(), 0.0);
    // Nothing is left over for the next frame.
    assert_eq!(clock.advance(Duration::ZERO), 0);
    assert_eq!(clock.beat_count(), 20);
}

#[test]
fn beat_count_is_floor_of_total_elapsed() {
    // Binary fractions keep the arithmetic exact.
    let deltas = [0.125, 0.25, 0.375, 0.0, 1.0, 0.0625, 3.5, 0.4375, 0.0625, 2.0];
    let mut clock = BeatClock::new(120, 4).unwrap();
    let spb = clock.seconds_per_beat();
    let mut total = 0.0;
    for d in deltas {
        clock.advance(secs(d));
        total += d;
        assert!(clock.elapsed_in_beat() >= 0.0);
        assert!(clock.elapsed_in_beat() < spb);
        assert_eq!(clock.beat_count(), (total / spb).floor() as u64, "total={total}");
    }
}

#[test]
fn random_frames_preserve_clock_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    for bpm in [60, 90, 128, 174] {
        let mut clock = BeatClock::new(bpm, 4).unwrap();
        let spb = clock.seconds_per_beat();
        let mut total = 0.0;
        let mut crossed_total = 0;
        for _ in 0..2000 {
            let dt = secs(rng.gen_range(0.0..0.05));
            total += dt.as_secs_f64();
            crossed_total += clock.advance(dt);
            assert!(clock.elapsed_in_beat() >= 0.0);
            assert!(clock.elapsed_in_beat() < spb);
            let reconstructed = clock.beat_count() as f64 * spb + clock.elapsed_in_beat();
            assert!((reconstructed - total).abs() < 1e-9, "bpm {bpm} drifted");
        }
        assert_eq!(crossed_total, clock.beat_count());
    }
}

#[test]
fn beat_indices_wrap_at_measure_end() {
    let mut clock = BeatClock::new(60, 4).unwrap();
    let expected = [(1, 2), (2, 3), (3, 0), (0, 1), (1, 2)];
    for (current, next) in expected {
        assert_eq!(clock.advance(secs(1.0)), 1);
        assert_eq!(clock.current_beat_index(), current);
        assert_eq!(clock.next_beat_index(), next);
    }
}

#[test]
fn single_beat_measure_is_always_beat_zero() {
    let mut clock = BeatClock::new(60, 1).unwrap();
    clock.advance(secs(3.0));
    assert_eq!(clock.current_beat_index(), 0);
    assert_eq!(clock.next_beat_index(), 0);
}

#[test]
fn phase_and_half_beat_follow_elapsed_time() {
    let mut clock = BeatClock::new(60, 4).unwrap();
    clock.advance(secs(0.25));
    assert!((clock.phase() - 0.25).abs() < 1e-6);
    assert!(!clock.half_beat_passed());

    // Exactly half is not yet "passed".
    clock.advance(secs(0.25));
    assert!((clock.phase() - 0.5).abs() < 1e-6);
    assert!(!clock.half_beat_passed());

    clock.advance(secs(0.125));
    assert!(clock.half_beat_passed());
    // A level, not an edge: still true on the next frame.
    clock.advance(Duration::ZERO);
    assert!(clock.half_beat_passed());

    assert_eq!(clock.advance(secs(0.375)), 1);
    assert_eq!(clock.phase(), 0.0);
    assert!(!clock.half_beat_passed());
}

#[test]
fn phase_stays_below_one() {
    let mut clock = BeatClock::new(100, 4).unwrap();
    for _ in 0..500 {
        clock.advance(secs(0.017));
        let p = clock.phase();
        assert!((0.0..1.0).contains(&p), "phase {p} out of range");
    }
}

#[test]
fn restart_returns_to_beat_zero() {
    let mut clock = BeatClock::new(120, 4).unwrap();
    clock.advance(secs(1.3));
    clock.restart();
    assert_eq!(clock.beat_count(), 0);
    assert_eq!(clock.elapsed_in_beat(), 0.0);
    assert_eq!(clock.bpm(), 120);
}
