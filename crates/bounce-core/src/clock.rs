use crate::constants::SECONDS_PER_MINUTE;
use crate::error::ConfigError;
use std::time::Duration;

/// Largest f32 below 1.0.
const MAX_PHASE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Musical clock that turns frame time into whole beats and intra-beat phase.
///
/// The clock only moves when [`BeatClock::advance`] is called. Whether it is
/// "running" is decided by the driver: a paused stage simply stops calling
/// `advance`.
///
/// Invariants after every call:
/// - `elapsed_in_beat` is in `[0, seconds_per_beat)`
/// - `beat_count` is the number of boundaries crossed since the last
///   configure/restart
#[derive(Clone, Debug)]
pub struct BeatClock {
    bpm: u32,
    beats_per_measure: u32,
    seconds_per_beat: f64,
    elapsed_in_beat: f64,
    beat_count: u64,
}

impl BeatClock {
    /// Build a clock at beat 0 for the given tempo and measure length.
    pub fn new(bpm: u32, beats_per_measure: u32) -> Result<Self, ConfigError> {
        let mut clock = Self {
            bpm: 1,
            beats_per_measure: 1,
            seconds_per_beat: SECONDS_PER_MINUTE,
            elapsed_in_beat: 0.0,
            beat_count: 0,
        };
        clock.configure(bpm, beats_per_measure)?;
        Ok(clock)
    }

    /// Set tempo and measure length, then restart from beat 0.
    ///
    /// On error the clock keeps its previous configuration and position.
    pub fn configure(&mut self, bpm: u32, beats_per_measure: u32) -> Result<(), ConfigError> {
        if bpm == 0 {
            return Err(ConfigError::ZeroBpm);
        }
        if beats_per_measure == 0 {
            return Err(ConfigError::ZeroBeatsPerMeasure);
        }
        self.bpm = bpm;
        self.beats_per_measure = beats_per_measure;
        self.seconds_per_beat = SECONDS_PER_MINUTE / bpm as f64;
        self.restart();
        Ok(())
    }

    /// Zero the beat counter and the time accumulated in the current beat.
    pub fn restart(&mut self) {
        self.elapsed_in_beat = 0.0;
        self.beat_count = 0;
    }

    /// Accumulate `dt` and return how many beat boundaries it crossed.
    ///
    /// A long frame (e.g. after a stall) crosses several boundaries in one
    /// call; none of them are deferred to later frames.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        self.elapsed_in_beat += dt.as_secs_f64();
        let mut crossed = 0;
        while self.elapsed_in_beat >= self.seconds_per_beat {
            self.elapsed_in_beat -= self.seconds_per_beat;
            crossed += 1;
        }
        self.beat_count += crossed;
        crossed
    }

    /// Beat within the measure, `beat_count mod beats_per_measure`.
    #[inline]
    pub fn current_beat_index(&self) -> usize {
        (self.beat_count % self.beats_per_measure as u64) as usize
    }

    /// Beat that the next boundary enters.
    #[inline]
    pub fn next_beat_index(&self) -> usize {
        (self.current_beat_index() + 1) % self.beats_per_measure as usize
    }

    /// Progress through the current beat in `[0, 1)`.
    #[inline]
    pub fn phase(&self) -> f32 {
        // Narrowing to f32 must not round up to 1.0.
        ((self.elapsed_in_beat / self.seconds_per_beat) as f32).min(MAX_PHASE)
    }

    /// True once more than half of the current beat has elapsed.
    ///
    /// This is a level, not an edge: it stays true until the next boundary.
    #[inline]
    pub fn half_beat_passed(&self) -> bool {
        self.elapsed_in_beat > self.seconds_per_beat * 0.5
    }

    #[inline]
    pub fn beat_count(&self) -> u64 {
        self.beat_count
    }

    #[inline]
    pub fn elapsed_in_beat(&self) -> f64 {
        self.elapsed_in_beat
    }

    #[inline]
    pub fn seconds_per_beat(&self) -> f64 {
        self.seconds_per_beat
    }

    #[inline]
    pub fn bpm(&self) -> u32 {
        self.bpm
    }

    #[inline]
    pub fn beats_per_measure(&self) -> usize {
        self.beats_per_measure as usize
    }
}
