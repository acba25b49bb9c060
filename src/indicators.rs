use smallvec::SmallVec;
use std::fmt;

/// One light per beat of the measure; exactly the current beat is lit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeatIndicators {
    lights: SmallVec<[bool; 8]>,
}

impl BeatIndicators {
    /// Lights for a measure of `beats`, with the downbeat lit.
    pub fn new(beats: usize) -> Self {
        let mut indicators = Self {
            lights: SmallVec::from_elem(false, beats),
        };
        indicators.refresh(0);
        indicators
    }

    /// Light `current_beat` and turn every other light off.
    /// Returns whether anything changed.
    pub fn refresh(&mut self, current_beat: usize) -> bool {
        let mut changed = false;
        for (i, light) in self.lights.iter_mut().enumerate() {
            let on = i == current_beat;
            changed |= *light != on;
            *light = on;
        }
        changed
    }

    #[inline]
    pub fn is_on(&self, beat: usize) -> bool {
        self.lights.get(beat).copied().unwrap_or(false)
    }

    pub fn lit(&self) -> Option<usize> {
        self.lights.iter().position(|on| *on)
    }

    pub fn lights(&self) -> &[bool] {
        &self.lights
    }
}

impl fmt::Display for BeatIndicators {
    /// Beats are numbered from 1; the lit one is bracketed, e.g. `1 [2] 3 4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, on) in self.lights.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if *on {
                write!(f, "[{}]", i + 1)?;
            } else {
                write!(f, "{}", i + 1)?;
            }
        }
        Ok(())
    }
}
