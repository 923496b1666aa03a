//! First-class invariants for hangman sessions.
//!
//! Invariants are logical properties that must hold after every guess.
//! The session checks them in debug builds; tests check them directly.

use crate::board::Cell;
use crate::session::{Outcome, Session};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2) as InvariantSet<S>>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// A cell is revealed iff its letter has been guessed, and shows that letter.
pub struct BoardMatchesHistory;

impl Invariant<Session> for BoardMatchesHistory {
    fn holds(session: &Session) -> bool {
        session
            .board
            .cells()
            .iter()
            .zip(session.secret.letters())
            .all(|(cell, &letter)| match cell {
                Cell::Hidden => !session.history.contains(letter),
                Cell::Revealed(shown) => *shown == letter && session.history.contains(letter),
            })
    }

    fn description() -> &'static str {
        "Board cells are revealed exactly where a guessed letter occurs"
    }
}

/// The mistake stage counts the guessed letters absent from the word.
pub struct MistakesMatchWrongGuesses;

impl Invariant<Session> for MistakesMatchWrongGuesses {
    fn holds(session: &Session) -> bool {
        let wrong = session
            .history
            .letters()
            .iter()
            .filter(|&&letter| !session.secret.contains(letter))
            .count();
        session.mistakes.stage() == wrong
    }

    fn description() -> &'static str {
        "Mistake stage equals the number of wrong guesses"
    }
}

/// Won iff the board is complete; Lost iff the mistake track is exhausted.
pub struct OutcomeMatchesState;

impl Invariant<Session> for OutcomeMatchesState {
    fn holds(session: &Session) -> bool {
        let complete = session.board.is_complete();
        let exhausted = session.mistakes.is_exhausted();
        match session.outcome {
            Outcome::InProgress => !complete && !exhausted,
            Outcome::Won => complete && !exhausted,
            Outcome::Lost => exhausted && !complete,
        }
    }

    fn description() -> &'static str {
        "Outcome agrees with board completion and mistake exhaustion"
    }
}

/// Every invariant a session maintains.
pub type SessionInvariants = (BoardMatchesHistory, MistakesMatchWrongGuesses, OutcomeMatchesState);
