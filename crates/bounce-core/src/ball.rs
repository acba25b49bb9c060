use crate::constants::*;
use crate::error::ConfigError;
use crate::pattern::BeatPattern;
use crate::settings::ClipSetting;
use glam::Vec3;
use std::f32::consts::PI;

/// Closed `[min, max]` interval used by the pitch mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutputRange {
    pub min: f32,
    pub max: f32,
}

impl OutputRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        // Written so that NaN bounds also fail.
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(ConfigError::InvertedRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Height of a bouncing ball at `phase` of its beat window.
///
/// Half a sine: `rest_y` at phase 0 and 1, `peak_y` at phase 0.5.
#[inline]
pub fn bounce_y(rest_y: f32, peak_y: f32, phase: f32) -> f32 {
    lerp(rest_y, peak_y, (phase * PI).sin())
}

/// Linear pitch-to-property mapping.
///
/// Every output is inverted: the highest pitch gets the `min` end of its
/// range, so high notes are small, light and bounce low.
#[derive(Clone, Debug, PartialEq)]
pub struct PitchMapping {
    pub pitch: OutputRange,
    pub mass: OutputRange,
    pub scale: OutputRange,
    pub bounce: OutputRange,
}

impl Default for PitchMapping {
    fn default() -> Self {
        Self {
            pitch: OutputRange::new(MIN_PITCH, MAX_PITCH),
            mass: OutputRange::new(MIN_BALL_MASS, MAX_BALL_MASS),
            scale: OutputRange::new(MIN_BALL_SCALE, MAX_BALL_SCALE),
            bounce: OutputRange::new(MIN_BOUNCE_HEIGHT, MAX_BOUNCE_HEIGHT),
        }
    }
}

impl PitchMapping {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pitch.validate("pitch")?;
        self.mass.validate("mass")?;
        self.scale.validate("scale")?;
        self.bounce.validate("bounce height")
    }

    pub fn check_pitch(&self, pitch: f32) -> Result<(), ConfigError> {
        if self.pitch.contains(pitch) {
            Ok(())
        } else {
            Err(ConfigError::PitchOutOfRange {
                pitch,
                min: self.pitch.min,
                max: self.pitch.max,
            })
        }
    }

    /// `0` at the lowest pitch, `1` at the highest.
    #[inline]
    pub fn remap(&self, pitch: f32) -> f32 {
        (pitch - self.pitch.min) / (self.pitch.max - self.pitch.min)
    }

    #[inline]
    fn inverted(&self, range: OutputRange, pitch: f32) -> f32 {
        lerp(range.max, range.min, self.remap(pitch))
    }

    pub fn mass(&self, pitch: f32) -> f32 {
        self.inverted(self.mass, pitch)
    }

    pub fn scale(&self, pitch: f32) -> f32 {
        self.inverted(self.scale, pitch)
    }

    pub fn bounce_height(&self, pitch: f32) -> f32 {
        self.inverted(self.bounce, pitch)
    }
}

/// What a ball plays when it fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioCue {
    pub clip: Option<usize>,
    pub pitch: f32,
}

impl Default for AudioCue {
    fn default() -> Self {
        Self {
            clip: None,
            pitch: NEUTRAL_AUDIO_PITCH,
        }
    }
}

/// One pooled ball: pitch, beat pattern, and the state derived from them.
#[derive(Clone, Debug)]
pub struct Ball {
    pitch: f32,
    pattern: BeatPattern,
    spawn: Vec3,
    rest_y: f32,
    peak_y: f32,
    pub position: Vec3,
    pub scale: Vec3,
    pub mass: f32,
    pub color: [f32; 3],
    pub audio: AudioCue,
    pub active: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pitch: NEUTRAL_AUDIO_PITCH,
            pattern: BeatPattern::silent(0),
            spawn: Vec3::ZERO,
            rest_y: 0.0,
            peak_y: 0.0,
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            mass: 1.0,
            color: NEUTRAL_COLOR,
            audio: AudioCue::default(),
            active: false,
        }
    }
}

impl Ball {
    /// Load a clip, pitch and pattern into the ball and activate it.
    ///
    /// Color comes from the clip; mass and scale from the pitch. The ball
    /// keeps its previous spawn point until [`Ball::place`] is called.
    pub fn configure(
        &mut self,
        clip_index: usize,
        clip: &ClipSetting,
        pitch: f32,
        pattern: BeatPattern,
        mapping: &PitchMapping,
    ) -> Result<(), ConfigError> {
        self.set_pitch(pitch, mapping)?;
        self.pattern = pattern;
        self.audio.clip = Some(clip_index);
        self.color = clip.color;
        self.active = true;
        Ok(())
    }

    /// Change pitch and everything derived from it.
    pub fn set_pitch(&mut self, pitch: f32, mapping: &PitchMapping) -> Result<(), ConfigError> {
        mapping.check_pitch(pitch)?;
        self.pitch = pitch;
        self.audio.pitch = pitch;
        self.mass = mapping.mass(pitch);
        self.scale = Vec3::splat(mapping.scale(pitch));
        self.place(self.spawn, mapping);
        Ok(())
    }

    pub fn set_pattern(&mut self, pattern: BeatPattern) {
        self.pattern = pattern;
    }

    /// Put the ball on `spawn`, resting on it rather than centered.
    pub fn place(&mut self, spawn: Vec3, mapping: &PitchMapping) {
        self.spawn = spawn;
        self.position = spawn + Vec3::new(0.0, self.scale.y * 0.5, 0.0);
        self.rest_y = self.position.y;
        self.peak_y = self.rest_y + mapping.bounce_height(self.pitch);
    }

    /// Recompute height for this frame and return it.
    ///
    /// `matches_upcoming` is whether the pattern owns the beat being
    /// approached; otherwise the ball sits at rest.
    pub fn tick(&mut self, phase: f32, matches_upcoming: bool) -> f32 {
        self.position.y = if matches_upcoming {
            bounce_y(self.rest_y, self.peak_y, phase)
        } else {
            self.rest_y
        };
        self.position.y
    }

    /// Whether the ball fires when the clock enters `beat_index`.
    #[inline]
    pub fn should_fire_audio(&self, beat_index: usize) -> bool {
        self.active && self.pattern.matches(beat_index)
    }

    /// The ball's cue, regardless of pattern. `None` once cleaned up.
    pub fn play_once(&self) -> Option<AudioCue> {
        self.audio.clip.map(|_| self.audio)
    }

    /// Reset to a neutral, inactive ball. Used as the pool cleanup hook.
    pub fn clear(&mut self) {
        self.audio = AudioCue::default();
        self.color = NEUTRAL_COLOR;
        self.active = false;
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn pattern(&self) -> &BeatPattern {
        &self.pattern
    }

    #[inline]
    pub fn rest_y(&self) -> f32 {
        self.rest_y
    }

    #[inline]
    pub fn peak_y(&self) -> f32 {
        self.peak_y
    }

    #[inline]
    pub fn spawn_point(&self) -> Vec3 {
        self.spawn
    }
}
