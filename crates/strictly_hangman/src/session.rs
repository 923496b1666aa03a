//! The session engine: one guess at a time, deterministic transitions.
//!
//! A [`Session`] owns the secret word, board, guess history and mistake track
//! for the lifetime of one game. Every call to [`Session::submit_guess`]
//! returns a classified [`GuessResult`]; nothing is propagated as an error.
//!
//! Processing order for a guess:
//! 1. a finished session ignores the guess and reports [`GuessKind::SessionOver`]
//! 2. empty input is a no-op
//! 3. anything other than one letter is rejected without mutation
//! 4. a letter already in the history is a duplicate, whatever it would have done
//! 5. otherwise the letter is recorded and either reveals cells or costs a mistake

use crate::board::{Cell, GuessBoard};
use crate::error::InvalidWordError;
use crate::history::GuessHistory;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::mistakes::{DEFAULT_MISTAKE_CEILING, MistakeTrack};
use crate::notice::Notice;
use crate::word::{SecretWord, normalize_letter};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Overall state of a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum Outcome {
    /// Guesses are still being accepted.
    #[default]
    InProgress,
    /// Every cell is revealed.
    Won,
    /// The mistake track is exhausted.
    Lost,
}

impl Outcome {
    /// True for `Won` and `Lost`. Terminal outcomes never change.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Why a session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum TerminalReason {
    /// The whole word was revealed.
    #[display("word revealed")]
    WordRevealed,
    /// The mistake ceiling was reached.
    #[display("mistake ceiling reached, word was {}", secret)]
    MistakesExhausted {
        /// The secret word, disclosed so it can be shown to the player.
        secret: String,
    },
}

/// Classification of one submitted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessKind {
    /// The letter occurs in the word; every matching index was revealed.
    Correct {
        /// Indices revealed by this guess, ascending.
        revealed: Vec<usize>,
    },
    /// The letter does not occur in the word.
    Wrong {
        /// Mistake stage after this guess.
        stage: usize,
        /// True when this mistake ended the session.
        fatal: bool,
    },
    /// The letter was guessed before. Nothing changed.
    Duplicate,
    /// Nothing was typed. Nothing changed.
    Empty,
    /// The input was not a single letter. Nothing changed.
    InvalidInput,
    /// The session had already ended. Nothing changed.
    SessionOver,
}

/// Everything the caller learns from one call to [`Session::submit_guess`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GuessResult {
    /// The normalized letter, when the input was a single letter.
    #[getter(copy)]
    letter: Option<char>,
    /// How the guess was classified.
    kind: GuessKind,
    /// Outcome after the guess.
    #[getter(copy)]
    outcome: Outcome,
    /// True only on the call that moved the session into a terminal outcome.
    #[getter(copy)]
    ended: bool,
    /// Why the session ended, on the call that ended it.
    reason: Option<TerminalReason>,
}

impl GuessResult {
    fn unchanged(letter: Option<char>, kind: GuessKind, outcome: Outcome) -> Self {
        Self {
            letter,
            kind,
            outcome,
            ended: false,
            reason: None,
        }
    }
}

/// Read-only view of a session for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Board cells left to right.
    cells: Vec<Cell>,
    /// Current mistake stage (figure frame index).
    #[getter(copy)]
    stage: usize,
    /// Mistake ceiling.
    #[getter(copy)]
    ceiling: usize,
    /// Current outcome.
    #[getter(copy)]
    outcome: Outcome,
    /// Letters guessed so far, in guess order.
    used_letters: Vec<char>,
    /// Message for the notice area, if any.
    notice: Option<Notice>,
    /// The secret word, present only once the session is lost.
    disclosed_word: Option<String>,
}

enum ParsedGuess {
    Empty,
    Letter(char),
    Invalid,
}

impl ParsedGuess {
    fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (None, _) => ParsedGuess::Empty,
            (Some(c), None) if c.is_alphabetic() => ParsedGuess::Letter(normalize_letter(c)),
            _ => ParsedGuess::Invalid,
        }
    }

    fn letter(&self) -> Option<char> {
        match self {
            ParsedGuess::Letter(c) => Some(*c),
            _ => None,
        }
    }
}

/// One game of hangman.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) secret: SecretWord,
    pub(crate) board: GuessBoard,
    pub(crate) history: GuessHistory,
    pub(crate) mistakes: MistakeTrack,
    pub(crate) outcome: Outcome,
    notice: Option<Notice>,
}

impl Session {
    /// Starts a session with the default mistake ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidWordError`] if `word` is empty or contains non-letters.
    pub fn start(word: &str) -> Result<Self, InvalidWordError> {
        Self::with_ceiling(word, DEFAULT_MISTAKE_CEILING)
    }

    /// Starts a session that is lost on the `ceiling`-th wrong guess.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidWordError`] if `word` is empty or contains non-letters.
    #[instrument(skip(word), fields(len = word.chars().count()))]
    pub fn with_ceiling(word: &str, ceiling: usize) -> Result<Self, InvalidWordError> {
        let secret = SecretWord::new(word)?;
        info!(letters = secret.len(), ceiling, "Session started");
        Ok(Self {
            board: GuessBoard::new(secret.len()),
            secret,
            history: GuessHistory::new(),
            mistakes: MistakeTrack::new(ceiling),
            outcome: Outcome::InProgress,
            notice: None,
        })
    }

    /// Processes one guess. Never fails; see the module docs for the order
    /// in which input is classified.
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn submit_guess(&mut self, input: &str) -> GuessResult {
        let parsed = ParsedGuess::parse(input);

        if self.outcome.is_terminal() {
            debug!("Guess ignored, session already over");
            return GuessResult::unchanged(parsed.letter(), GuessKind::SessionOver, self.outcome);
        }

        let letter = match parsed {
            ParsedGuess::Empty => {
                return GuessResult::unchanged(None, GuessKind::Empty, self.outcome);
            }
            ParsedGuess::Invalid => {
                debug!("Rejected input that is not a single letter");
                self.notice = Some(Notice::InvalidInput);
                return GuessResult::unchanged(None, GuessKind::InvalidInput, self.outcome);
            }
            ParsedGuess::Letter(letter) => letter,
        };

        self.notice = None;

        if !self.history.insert(letter) {
            debug!(%letter, "Duplicate guess");
            self.notice = Some(Notice::DuplicateGuess);
            return GuessResult::unchanged(Some(letter), GuessKind::Duplicate, self.outcome);
        }

        let result = match self.secret.positions_of(letter) {
            revealed if !revealed.is_empty() => self.apply_correct(letter, revealed),
            _ => self.apply_wrong(letter),
        };

        debug_assert!(
            <SessionInvariants as InvariantSet<Session>>::check_all(self).is_ok(),
            "session invariants violated after guess {letter}"
        );

        result
    }

    /// Convenience for callers that already hold a `char`.
    pub fn submit_letter(&mut self, letter: char) -> GuessResult {
        let mut buf = [0u8; 4];
        self.submit_guess(letter.encode_utf8(&mut buf))
    }

    fn apply_correct(&mut self, letter: char, revealed: Vec<usize>) -> GuessResult {
        for &index in &revealed {
            self.board.reveal(index, letter);
        }
        debug!(%letter, ?revealed, "Correct guess");

        let mut ended = false;
        let mut reason = None;
        if self.board.is_complete() {
            info!("Word revealed, session won");
            self.outcome = Outcome::Won;
            self.notice = Some(Notice::Won);
            ended = true;
            reason = Some(TerminalReason::WordRevealed);
        }

        GuessResult {
            letter: Some(letter),
            kind: GuessKind::Correct { revealed },
            outcome: self.outcome,
            ended,
            reason,
        }
    }

    fn apply_wrong(&mut self, letter: char) -> GuessResult {
        let advance = self.mistakes.advance();
        debug!(%letter, stage = advance.stage, "Wrong guess");

        let mut reason = None;
        if advance.exhausted {
            let secret = self.secret.to_string();
            info!(%secret, "Mistake ceiling reached, session lost");
            self.outcome = Outcome::Lost;
            self.notice = Some(Notice::Lost(secret.clone()));
            reason = Some(TerminalReason::MistakesExhausted { secret });
        }

        GuessResult {
            letter: Some(letter),
            kind: GuessKind::Wrong {
                stage: advance.stage,
                fatal: advance.exhausted,
            },
            outcome: self.outcome,
            ended: advance.exhausted,
            reason,
        }
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The board.
    pub fn board(&self) -> &GuessBoard {
        &self.board
    }

    /// Letters guessed so far.
    pub fn history(&self) -> &GuessHistory {
        &self.history
    }

    /// The mistake track.
    pub fn mistakes(&self) -> &MistakeTrack {
        &self.mistakes
    }

    /// The current notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Number of letters in the secret word.
    pub fn word_len(&self) -> usize {
        self.secret.len()
    }

    /// The secret word, but only once the session is lost.
    pub fn disclosed_word(&self) -> Option<String> {
        (self.outcome == Outcome::Lost).then(|| self.secret.to_string())
    }

    /// Why the session ended, if it has.
    pub fn terminal_reason(&self) -> Option<TerminalReason> {
        match self.outcome {
            Outcome::InProgress => None,
            Outcome::Won => Some(TerminalReason::WordRevealed),
            Outcome::Lost => Some(TerminalReason::MistakesExhausted {
                secret: self.secret.to_string(),
            }),
        }
    }

    /// Captures the state a renderer needs.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            cells: self.board.cells().to_vec(),
            stage: self.mistakes.stage(),
            ceiling: self.mistakes.ceiling(),
            outcome: self.outcome,
            used_letters: self.history.letters().to_vec(),
            notice: self.notice.clone(),
            disclosed_word: self.disclosed_word(),
        }
    }
}
