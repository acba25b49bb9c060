//! Typed session configuration.
//!
//! Built once, validated once, then handed to the stage. Every check runs
//! before the clock or pool exist.

use crate::ball::PitchMapping;
use crate::constants::*;
use crate::error::ConfigError;
use crate::spawn::SpawnLayout;

/// A sound a ball can carry, plus the color balls using it are drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipSetting {
    pub name: String,
    pub color: [f32; 3],
}

impl ClipSetting {
    pub fn new(name: impl Into<String>, color: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

pub fn default_clips() -> Vec<ClipSetting> {
    DEFAULT_CLIP_NAMES
        .iter()
        .zip(DEFAULT_CLIP_COLORS)
        .map(|(name, color)| ClipSetting::new(*name, color))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TempoSettings {
    pub bpm: u32,
    pub beats_per_measure: u32,
}

impl Default for TempoSettings {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_BPM,
            beats_per_measure: DEFAULT_BEATS_PER_MEASURE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpawnSettings {
    pub layout: SpawnLayout,
    /// Cap on live balls; `None` for no cap.
    pub max_balls: Option<usize>,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            layout: SpawnLayout::default(),
            max_balls: Some(DEFAULT_MAX_BALLS),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BounceSettings {
    pub tempo: TempoSettings,
    pub mapping: PitchMapping,
    pub clips: Vec<ClipSetting>,
    pub spawn: SpawnSettings,
}

impl BounceSettings {
    /// Defaults with the built-in clip catalogue.
    pub fn standard() -> Self {
        Self {
            clips: default_clips(),
            ..Self::default()
        }
    }

    pub fn with_tempo(mut self, bpm: u32, beats_per_measure: u32) -> Self {
        self.tempo = TempoSettings {
            bpm,
            beats_per_measure,
        };
        self
    }

    pub fn with_layout(mut self, layout: SpawnLayout) -> Self {
        self.spawn.layout = layout;
        self
    }

    pub fn with_max_balls(mut self, max_balls: Option<usize>) -> Self {
        self.spawn.max_balls = max_balls;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tempo.bpm == 0 {
            return Err(ConfigError::ZeroBpm);
        }
        if self.tempo.beats_per_measure == 0 {
            return Err(ConfigError::ZeroBeatsPerMeasure);
        }
        if self.spawn.max_balls == Some(0) {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.clips.is_empty() {
            return Err(ConfigError::NoClips);
        }
        self.mapping.validate()?;
        self.spawn.layout.validate()
    }

    pub fn clip(&self, index: usize) -> Result<&ClipSetting, ConfigError> {
        self.clips.get(index).ok_or(ConfigError::UnknownClip {
            index,
            count: self.clips.len(),
        })
    }

    #[inline]
    pub fn beats_per_measure(&self) -> usize {
        self.tempo.beats_per_measure as usize
    }
}
