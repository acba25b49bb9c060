//! Headless state of the "new ball" menu.
//!
//! A draft is the only place a pattern may still be edited. Committing it
//! through [`crate::Stage::commit`] copies the pattern into a pooled ball.

use bounce_core::{AudioCue, BeatPattern, BounceSettings, ConfigError, PatternError, DRAFT_PITCH};

#[derive(Clone, Debug, PartialEq)]
pub struct BallDraft {
    pub clip: usize,
    pub pitch: f32,
    pattern: BeatPattern,
}

impl BallDraft {
    /// Fresh draft: first clip, default pitch, downbeat only.
    pub fn new(beats_per_measure: usize) -> Self {
        Self {
            clip: 0,
            pitch: DRAFT_PITCH,
            pattern: BeatPattern::downbeat(beats_per_measure),
        }
    }

    /// Flip one beat; returns its new state.
    pub fn toggle_beat(&mut self, beat: usize) -> Result<bool, PatternError> {
        self.pattern.toggle(beat)
    }

    pub fn set_beat(&mut self, beat: usize, on: bool) -> Result<(), PatternError> {
        self.pattern.set(beat, on)
    }

    /// Back to the state of a freshly opened draft.
    pub fn clear(&mut self) {
        *self = Self::new(self.pattern.len());
    }

    pub fn pattern(&self) -> &BeatPattern {
        &self.pattern
    }

    /// Audition the draft's clip at its pitch, ignoring the pattern.
    pub fn preview(&self, settings: &BounceSettings) -> Result<AudioCue, ConfigError> {
        settings.clip(self.clip)?;
        settings.mapping.check_pitch(self.pitch)?;
        Ok(AudioCue {
            clip: Some(self.clip),
            pitch: self.pitch,
        })
    }
}
