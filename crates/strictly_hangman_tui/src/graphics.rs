//! Mistake figure frames.
//!
//! Frame 0 is the empty gallows shown before any mistake; frame 7 is the
//! complete figure.

/// Figure frames, one per mistake stage.
pub const FRAMES: [&str; 8] = [
    "╭───────╮
│       │
│
│
│
│",
    "╭───────╮
│       │
│       ◯
│
│
│",
    "╭───────╮
│       │
│       ◯
│       │
│
│",
    "╭───────╮
│       │
│       ◯
│       │╲
│
│",
    "╭───────╮
│       │
│       ◯
│      ╱│╲
│
│",
    "╭───────╮
│       │
│       ◯
│      ╱│╲
│       │
│",
    "╭───────╮
│       │
│       ◯
│      ╱│╲
│       │
│        ╲",
    "╭───────╮
│       │
│       ◯
│      ╱│╲
│       │
│      ╱ ╲",
];

/// Wrong guesses a session tolerates. Mistakes 1 to 7 draw frames 1 to 7; the
/// eighth has no frame of its own and loses, leaving the full figure up.
pub const MISTAKE_CEILING: usize = FRAMES.len();

/// The frame for `stage`, clamped to the last frame.
pub fn frame(stage: usize) -> &'static str {
    FRAMES[stage.min(FRAMES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_have_same_height() {
        assert!(FRAMES.iter().all(|f| f.lines().count() == 6));
    }

    #[test]
    fn test_frame_clamps() {
        assert_eq!(frame(0), FRAMES[0]);
        assert_eq!(frame(99), FRAMES[7]);
        assert_eq!(MISTAKE_CEILING, 8);
        assert_eq!(frame(MISTAKE_CEILING), FRAMES[7]);
    }

    #[test]
    fn test_each_stage_adds_ink() {
        let ink = |f: &str| f.chars().filter(|c| !c.is_whitespace()).count();
        for pair in FRAMES.windows(2) {
            assert!(ink(pair[1]) > ink(pair[0]));
        }
    }
}
