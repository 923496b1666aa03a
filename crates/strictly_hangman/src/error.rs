//! Error types for session construction.

use derive_more::{Display, Error};

/// A secret word that cannot start a session.
///
/// This is the only error the core propagates to its caller; everything that
/// happens during play is a classified [`GuessResult`](crate::GuessResult).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InvalidWordError {
    /// The word has no letters at all.
    #[display("Secret word is empty")]
    Empty,

    /// The word contains something other than a letter.
    #[display("Secret word {:?} contains non-letter character {:?}", word, character)]
    NonAlphabetic {
        /// The rejected word, as supplied.
        word: String,
        /// The first offending character.
        character: char,
    },
}
