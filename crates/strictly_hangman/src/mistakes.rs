//! Bounded track of wrong guesses.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wrong guesses tolerated by default: an eight-frame figure, frame 0 shown
/// before any mistake, frames 1 to 7 on the first seven mistakes, and the
/// eighth mistake, with no frame left to draw, loses.
pub const DEFAULT_MISTAKE_CEILING: usize = 8;

/// Result of [`MistakeTrack::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MistakeAdvance {
    /// Stage index after the increment; selects the figure frame.
    pub stage: usize,
    /// True once `stage` has reached the ceiling.
    pub exhausted: bool,
}

/// Counter of wrong guesses with a fixed ceiling.
///
/// Stage 0 is the state before any mistake. Each wrong guess advances by one;
/// the track is exhausted when the stage reaches the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMistakeTrack")]
pub struct MistakeTrack {
    stage: usize,
    ceiling: usize,
}

/// Unchecked wire form of [`MistakeTrack`].
#[derive(Deserialize)]
struct RawMistakeTrack {
    stage: usize,
    ceiling: usize,
}

impl TryFrom<RawMistakeTrack> for MistakeTrack {
    type Error = String;

    fn try_from(raw: RawMistakeTrack) -> Result<Self, Self::Error> {
        if raw.ceiling == 0 {
            return Err("mistake ceiling must be at least 1".to_string());
        }
        if raw.stage > raw.ceiling {
            return Err(format!(
                "mistake stage {} is past ceiling {}",
                raw.stage, raw.ceiling
            ));
        }
        Ok(Self {
            stage: raw.stage,
            ceiling: raw.ceiling,
        })
    }
}

impl MistakeTrack {
    /// Creates a track at stage 0. A ceiling of 0 is raised to 1.
    #[instrument]
    pub fn new(ceiling: usize) -> Self {
        Self {
            stage: 0,
            ceiling: ceiling.max(1),
        }
    }

    /// Records one wrong guess.
    #[instrument(skip(self), fields(stage = self.stage, ceiling = self.ceiling))]
    pub fn advance(&mut self) -> MistakeAdvance {
        self.stage = (self.stage + 1).min(self.ceiling);
        let advance = MistakeAdvance {
            stage: self.stage,
            exhausted: self.is_exhausted(),
        };
        debug!(?advance, "Mistake track advanced");
        advance
    }

    /// Current stage index.
    pub fn stage(&self) -> usize {
        self.stage
    }

    /// Stage at which the track is exhausted.
    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Wrong guesses left before exhaustion.
    pub fn remaining(&self) -> usize {
        self.ceiling - self.stage
    }

    /// True once the ceiling has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.stage >= self.ceiling
    }
}

impl Default for MistakeTrack {
    fn default() -> Self {
        Self::new(DEFAULT_MISTAKE_CEILING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_to_ceiling() {
        let mut track = MistakeTrack::new(3);
        assert_eq!(track.stage(), 0);
        assert_eq!(
            track.advance(),
            MistakeAdvance {
                stage: 1,
                exhausted: false
            }
        );
        assert_eq!(track.remaining(), 2);
        track.advance();
        let last = track.advance();
        assert_eq!(last.stage, 3);
        assert!(last.exhausted);
        assert!(track.is_exhausted());
    }

    #[test]
    fn test_default_ceiling() {
        let track = MistakeTrack::default();
        assert_eq!(track.ceiling(), DEFAULT_MISTAKE_CEILING);
        assert_eq!(track.remaining(), 8);
    }

    #[test]
    fn test_zero_ceiling_is_raised() {
        let mut track = MistakeTrack::new(0);
        assert!(track.advance().exhausted);
    }

    #[test]
    fn test_deserialize_validates() {
        let track: MistakeTrack = serde_json::from_str(r#"{"stage":2,"ceiling":8}"#).unwrap();
        assert_eq!(track.remaining(), 6);

        assert!(serde_json::from_str::<MistakeTrack>(r#"{"stage":0,"ceiling":0}"#).is_err());
        assert!(serde_json::from_str::<MistakeTrack>(r#"{"stage":9,"ceiling":8}"#).is_err());
    }
}
