//! Letters already submitted during a session.

use serde::{Deserialize, Serialize};

/// Keyboard rows used to lay out the used-letters panel.
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Set of guessed letters, remembered in the order they were guessed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessHistory {
    letters: Vec<char>,
}

impl GuessHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `letter`. Returns false if it was already present.
    pub fn insert(&mut self, letter: char) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    /// Whether `letter` has been guessed.
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Guessed letters in guess order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of distinct letters guessed.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True before the first accepted guess.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The keyboard layout with each key marked used or not.
    pub fn keyboard(&self) -> Vec<Vec<(char, bool)>> {
        KEYBOARD_ROWS
            .iter()
            .map(|row| row.chars().map(|key| (key, self.contains(key))).collect())
            .collect()
    }
}
