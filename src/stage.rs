use crate::draft::BallDraft;
use crate::indicators::BeatIndicators;
use bounce_core::{
    AudioCue, Ball, BeatClock, BeatPattern, BounceSettings, ConfigError, PatternError, PoolError,
    PoolHandle, PoolStatus, ResourcePool,
};
use glam::Vec3;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StageError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("ball limit of {0} reached")]
    LimitReached(usize),
}

/// A ball firing its clip as the clock enters `beat_index`.
///
/// Fields:
/// - `ball`: the pooled ball that fired
/// - `clip`: index into the configured clip catalogue
/// - `pitch`: playback pitch of the ball
/// - `beat_index`: beat of the measure being entered
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CueEvent {
    pub ball: PoolHandle,
    pub clip: usize,
    pub pitch: f32,
    pub beat_index: usize,
}

/// Owns the clock, the ball pool and the indicator lights, and drives them
/// from a single `tick` per frame.
///
/// Typical usage:
/// - Construct with `Stage::new(settings)`
/// - Create balls with `open_draft` + `commit`, or directly with `spawn`
/// - `play(true)`, then call `tick(dt, &mut cues)` once per frame
#[derive(Debug)]
pub struct Stage {
    settings: BounceSettings,
    clock: BeatClock,
    balls: ResourcePool<Ball>,
    indicators: BeatIndicators,
    playing: bool,
}

impl Stage {
    /// Validate `settings` and build a paused stage at beat 0.
    pub fn new(settings: BounceSettings) -> Result<Self, StageError> {
        settings.validate()?;
        let clock = BeatClock::new(settings.tempo.bpm, settings.tempo.beats_per_measure)?;
        let balls = ResourcePool::new(Ball::default, settings.spawn.max_balls)?
            .with_cleanup(Ball::clear);
        let indicators = BeatIndicators::new(clock.beats_per_measure());
        log::info!(
            "[stage] bpm={} beats={} max_balls={:?} clips={}",
            clock.bpm(),
            clock.beats_per_measure(),
            settings.spawn.max_balls,
            settings.clips.len()
        );
        Ok(Self {
            settings,
            clock,
            balls,
            indicators,
            playing: false,
        })
    }

    pub fn play(&mut self, play: bool) {
        if self.playing != play {
            log::info!("[stage] {}", if play { "playing" } else { "paused" });
        }
        self.playing = play;
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance one frame by `dt`, pushing any cues fired into `out_cues`.
    ///
    /// Does nothing while paused. For every boundary crossed each ball is
    /// checked against the beat being entered; afterwards every ball's height
    /// is recomputed from the clock phase and the beat after the current one.
    /// Returns the number of boundaries crossed.
    pub fn tick(&mut self, dt: Duration, out_cues: &mut Vec<CueEvent>) -> u64 {
        if !self.playing {
            return 0;
        }

        let entering = self.clock.next_beat_index() as u64;
        let crossed = self.clock.advance(dt);
        let beats = self.clock.beats_per_measure() as u64;

        for k in 0..crossed {
            let beat_index = ((entering + k) % beats) as usize;
            self.balls.for_each_in_use(|handle, ball| {
                if ball.should_fire_audio(beat_index) {
                    if let Some(clip) = ball.audio.clip {
                        out_cues.push(CueEvent {
                            ball: handle,
                            clip,
                            pitch: ball.audio.pitch,
                            beat_index,
                        });
                    }
                }
            });
        }
        if crossed > 0 {
            self.indicators.refresh(self.clock.current_beat_index());
        }

        let phase = self.clock.phase();
        let upcoming = self.clock.next_beat_index();
        self.balls.for_each_in_use(|_, ball| {
            let bounces = ball.pattern().matches(upcoming);
            ball.tick(phase, bounces);
        });

        crossed
    }

    /// Whether another ball may be created under the configured cap.
    pub fn can_spawn(&self) -> bool {
        self.settings
            .spawn
            .max_balls
            .map_or(true, |max| self.balls.in_use_count() < max)
    }

    /// Start configuring a new ball. Pauses the stage.
    pub fn open_draft(&mut self) -> Result<BallDraft, StageError> {
        if let Some(max) = self.settings.spawn.max_balls {
            if self.balls.in_use_count() >= max {
                log::warn!("[stage] refusing new ball, limit {max} reached");
                return Err(StageError::LimitReached(max));
            }
        }
        self.play(false);
        Ok(BallDraft::new(self.settings.beats_per_measure()))
    }

    /// Turn a draft into a live ball.
    pub fn commit(&mut self, draft: &BallDraft) -> Result<PoolHandle, StageError> {
        self.spawn(draft.clip, draft.pitch, draft.pattern().clone())
    }

    /// Acquire a ball, configure it, and put it at the next spawn point.
    ///
    /// All inputs are checked before the pool is touched, so a rejected
    /// request leaves the pool unchanged.
    ///
    /// The spawn point comes from the in-use count, not a stable slot, so
    /// after a removal the new ball lands on the last ball's spot.
    pub fn spawn(
        &mut self,
        clip_index: usize,
        pitch: f32,
        pattern: BeatPattern,
    ) -> Result<PoolHandle, StageError> {
        let expected = self.settings.beats_per_measure();
        if pattern.len() != expected {
            return Err(ConfigError::PatternLength {
                expected,
                actual: pattern.len(),
            }
            .into());
        }
        let clip = self.settings.clip(clip_index)?.clone();
        self.settings.mapping.check_pitch(pitch)?;

        let handle = self.balls.acquire()?;
        let index = self.balls.in_use_count() - 1;
        let spawn_point = self.settings.spawn.layout.place(index);
        let mapping = &self.settings.mapping;
        if let Some(ball) = self.balls.get_mut(handle) {
            ball.configure(clip_index, &clip, pitch, pattern, mapping)?;
            ball.place(spawn_point, mapping);
        }
        log::debug!(
            "[stage] spawned {handle} clip={} pitch={pitch:.2} at ({:.2},{:.2},{:.2})",
            clip.name,
            spawn_point.x,
            spawn_point.y,
            spawn_point.z
        );
        Ok(handle)
    }

    pub fn remove_ball(&mut self, handle: PoolHandle) -> Result<(), StageError> {
        self.balls.release(handle)?;
        Ok(())
    }

    /// Release every ball.
    pub fn clear(&mut self) {
        self.balls.release_all();
    }

    /// Rewind the clock to beat 0, relight the downbeat and drop every ball
    /// back to rest.
    pub fn restart(&mut self) {
        self.clock.restart();
        self.indicators.refresh(0);
        self.balls.for_each_in_use(|_, ball| {
            ball.tick(0.0, false);
        });
    }

    /// One-off cue for a live ball, ignoring its pattern.
    pub fn preview_ball(&self, handle: PoolHandle) -> Option<AudioCue> {
        self.balls.get(handle).and_then(Ball::play_once)
    }

    pub fn ball(&self, handle: PoolHandle) -> Option<&Ball> {
        self.balls.get(handle)
    }

    pub fn ball_position(&self, handle: PoolHandle) -> Option<Vec3> {
        self.balls.get(handle).map(|b| b.position)
    }

    pub fn balls(&self) -> &ResourcePool<Ball> {
        &self.balls
    }

    pub fn status(&self) -> PoolStatus {
        self.balls.status()
    }

    pub fn clock(&self) -> &BeatClock {
        &self.clock
    }

    pub fn indicators(&self) -> &BeatIndicators {
        &self.indicators
    }

    pub fn settings(&self) -> &BounceSettings {
        &self.settings
    }
}
