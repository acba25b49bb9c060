//! Error taxonomy for the scheduling core.
//!
//! Configuration problems are reported before anything starts running; pool
//! and pattern errors are surfaced synchronously to the caller of the
//! operation that hit them. Nothing here is retried.

use crate::pool::PoolHandle;
use thiserror::Error;

/// Rejected configuration. Values are never clamped into range.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("bpm must be positive")]
    ZeroBpm,
    #[error("beats per measure must be positive")]
    ZeroBeatsPerMeasure,
    #[error("pool capacity must be positive when set")]
    ZeroCapacity,
    #[error("{name} range must satisfy min < max (got {min}..{max})")]
    InvertedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("pitch {pitch} is outside {min}..={max}")]
    PitchOutOfRange { pitch: f32, min: f32, max: f32 },
    #[error("pattern has {actual} beats but the measure has {expected}")]
    PatternLength { expected: usize, actual: usize },
    #[error("clip {index} does not exist ({count} clips configured)")]
    UnknownClip { index: usize, count: usize },
    #[error("clip catalogue must not be empty")]
    NoClips,
    #[error("spawn layout {field} is invalid (got {value})")]
    InvalidLayout { field: &'static str, value: f32 },
}

/// Failures from [`crate::pool::ResourcePool`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("pool exhausted: all {capacity} entities are in use")]
    Exhausted { capacity: usize },
    #[error("{0} is not checked out of this pool")]
    NotInUse(PoolHandle),
}

/// Failures from [`crate::pattern::BeatPattern`] edits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("beat {index} is outside a {len}-beat measure")]
    IndexOutOfRange { index: usize, len: usize },
}
