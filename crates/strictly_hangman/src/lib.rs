//! Strictly Hangman - pure session logic for the hangman word game.
//!
//! A player submits one letter at a time against a secret word. Correct
//! guesses reveal board cells, wrong guesses advance a mistake track, and the
//! session ends when the word is revealed or the mistake budget runs out.
//!
//! # Architecture
//!
//! - **SecretWord**: validated, upper-cased word chosen once per session
//! - **GuessBoard**: per-position reveal state
//! - **GuessHistory**: letters already submitted, in guess order
//! - **MistakeTrack**: bounded counter of wrong guesses
//! - **Session**: the coordinator that classifies each guess
//! - **Layout**: pure decisions about what fits on a terminal of a given size
//!
//! # Example
//!
//! ```
//! use strictly_hangman::{GuessKind, Outcome, Session};
//!
//! let mut session = Session::start("cat").unwrap();
//! session.submit_guess("c");
//! session.submit_guess("a");
//! let result = session.submit_guess("t");
//! assert!(matches!(result.kind(), GuessKind::Correct { .. }));
//! assert_eq!(session.outcome(), Outcome::Won);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod history;
mod invariants;
mod layout;
mod mistakes;
mod notice;
mod session;
mod word;

// Crate-level exports - Errors
pub use error::InvalidWordError;

// Crate-level exports - Session state
pub use board::{Cell, GuessBoard};
pub use history::{GuessHistory, KEYBOARD_ROWS};
pub use mistakes::{DEFAULT_MISTAKE_CEILING, MistakeAdvance, MistakeTrack};
pub use word::SecretWord;

// Crate-level exports - Session engine
pub use notice::Notice;
pub use session::{GuessKind, GuessResult, Outcome, Session, SessionSnapshot, TerminalReason};

// Crate-level exports - Invariants
pub use invariants::{
    BoardMatchesHistory, Invariant, InvariantSet, InvariantViolation, MistakesMatchWrongGuesses,
    OutcomeMatchesState, SessionInvariants,
};

// Crate-level exports - Layout
pub use layout::{ElementSizes, LayoutDecision, decide_layout};
