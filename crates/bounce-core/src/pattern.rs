use crate::error::PatternError;
use rand::Rng;
use smallvec::SmallVec;

/// Per-ball mask over the beats of one measure.
///
/// All patterns alive in a session share the clock's measure length; the
/// stage checks this when a ball is committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeatPattern {
    beats: SmallVec<[bool; 8]>,
}

impl BeatPattern {
    pub fn new(beats: &[bool]) -> Self {
        Self {
            beats: SmallVec::from_slice(beats),
        }
    }

    /// Pattern with no active beats.
    pub fn silent(len: usize) -> Self {
        Self {
            beats: SmallVec::from_elem(false, len),
        }
    }

    /// Pattern active only on the downbeat. This is what a new draft starts with.
    pub fn downbeat(len: usize) -> Self {
        let mut pattern = Self::silent(len);
        if let Some(first) = pattern.beats.first_mut() {
            *first = true;
        }
        pattern
    }

    /// Each beat is active with probability `density`.
    pub fn random<R: Rng>(len: usize, density: f64, rng: &mut R) -> Self {
        let density = density.clamp(0.0, 1.0);
        Self {
            beats: (0..len).map(|_| rng.gen_bool(density)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.beats.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// Whether the owning ball is active on `beat_index`.
    ///
    /// Indices come from the clock, which wraps them to the shared measure
    /// length, so an out-of-range index is a caller bug.
    #[inline]
    pub fn matches(&self, beat_index: usize) -> bool {
        debug_assert!(
            beat_index < self.beats.len(),
            "beat {beat_index} outside {}-beat pattern",
            self.beats.len()
        );
        self.beats.get(beat_index).copied().unwrap_or(false)
    }

    /// Flip one beat. Only drafts are edited; committed balls keep their copy.
    pub fn toggle(&mut self, beat_index: usize) -> Result<bool, PatternError> {
        let len = self.beats.len();
        let beat = self
            .beats
            .get_mut(beat_index)
            .ok_or(PatternError::IndexOutOfRange {
                index: beat_index,
                len,
            })?;
        *beat = !*beat;
        Ok(*beat)
    }

    pub fn set(&mut self, beat_index: usize, on: bool) -> Result<(), PatternError> {
        let len = self.beats.len();
        let beat = self
            .beats
            .get_mut(beat_index)
            .ok_or(PatternError::IndexOutOfRange {
                index: beat_index,
                len,
            })?;
        *beat = on;
        Ok(())
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.beats
    }

    pub fn active_count(&self) -> usize {
        self.beats.iter().filter(|b| **b).count()
    }
}
