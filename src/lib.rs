//! Beat-synchronized bouncing balls.
//!
//! The scheduling core (clock, pool, patterns, pitch mapping, spawn layout)
//! lives in `bounce_core`. This crate adds the stage that drives it once per
//! frame, together with the headless presentation state the stage keeps up
//! to date: beat indicator lights and the new-ball draft.

pub mod draft;
pub mod indicators;
pub mod stage;

pub use draft::BallDraft;
pub use indicators::BeatIndicators;
pub use stage::{CueEvent, Stage, StageError};
