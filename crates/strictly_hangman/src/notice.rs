//! Player-facing messages produced by the session.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A message for the notice area under the input line.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Notice {
    /// The letter had already been guessed.
    #[display("Silly, you already guessed that! Try again")]
    DuplicateGuess,

    /// Input that is not a single letter reached the engine.
    #[display("Only single letters can be guessed")]
    InvalidInput,

    /// The word was fully revealed.
    #[display("Woo you win! Feel free to re-run the program to play again!")]
    Won,

    /// The mistake budget ran out; discloses the secret word.
    #[display("You lose :(\nThe word we were looking for: {}", _0)]
    Lost(String),
}

impl Notice {
    /// True for the win and loss messages.
    pub fn is_final(&self) -> bool {
        matches!(self, Notice::Won | Notice::Lost(_))
    }
}
