//! The secret word a session is played against.

use crate::error::InvalidWordError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Upper-cases a single letter.
///
/// Letters whose upper-case form is more than one character (such as `ß`)
/// are kept as they are, so every letter maps to exactly one board cell.
pub(crate) fn normalize_letter(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

/// An immutable, upper-cased, non-empty sequence of letters.
///
/// Serialized as a plain string; deserializing runs the same validation as
/// [`SecretWord::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretWord {
    letters: Vec<char>,
}

impl SecretWord {
    /// Validates and normalizes a candidate word.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidWordError::Empty`] for an empty string and
    /// [`InvalidWordError::NonAlphabetic`] if any character is not a letter.
    #[instrument]
    pub fn new(word: &str) -> Result<Self, InvalidWordError> {
        if word.is_empty() {
            return Err(InvalidWordError::Empty);
        }

        if let Some(character) = word.chars().find(|c| !c.is_alphabetic()) {
            return Err(InvalidWordError::NonAlphabetic {
                word: word.to_string(),
                character,
            });
        }

        Ok(Self {
            letters: word.chars().map(normalize_letter).collect(),
        })
    }

    /// Number of letters (and therefore board cells).
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; a secret word has at least one letter.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The normalized letters in order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Positions at which `letter` occurs.
    pub fn positions_of(&self, letter: char) -> Vec<usize> {
        self.letters
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == letter)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether `letter` occurs anywhere in the word.
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl std::fmt::Display for SecretWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl std::str::FromStr for SecretWord {
    type Err = InvalidWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SecretWord {
    type Error = InvalidWordError;

    fn try_from(word: String) -> Result<Self, Self::Error> {
        Self::new(&word)
    }
}

impl From<SecretWord> for String {
    fn from(word: SecretWord) -> Self {
        word.letters.into_iter().collect()
    }
}
