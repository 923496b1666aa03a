//! Where secret words come from.

use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// The word list compiled into the binary.
const EMBEDDED_DICTIONARY: &str = include_str!("../assets/dictionary.txt");

/// Supplies secret words. Only promises a non-empty, alphabetic, upper-case word.
pub trait WordSource {
    /// Picks the word for the next session.
    fn pick_word(&mut self) -> Result<String, WordSourceError>;
}

/// A word list to pick from uniformly at random.
#[derive(Debug)]
pub struct Dictionary {
    words: Vec<String>,
    rng: StdRng,
}

impl Dictionary {
    /// The built-in word list.
    #[instrument]
    pub fn embedded() -> Result<Self, WordSourceError> {
        Self::from_text(EMBEDDED_DICTIONARY)
    }

    /// Reads a whitespace-separated word list from a file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordSourceError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            WordSourceError::new(format!(
                "Failed to read dictionary {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_text(&text)
    }

    /// Parses a whitespace-separated word list.
    ///
    /// Words are upper-cased; entries containing anything but letters are
    /// skipped.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn from_text(text: &str) -> Result<Self, WordSourceError> {
        let (words, skipped): (Vec<String>, Vec<&str>) = text
            .split_whitespace()
            .map(|w| (w, w.chars().all(char::is_alphabetic)))
            .fold((Vec::new(), Vec::new()), |(mut ok, mut bad), (w, valid)| {
                if valid {
                    ok.push(w.to_uppercase());
                } else {
                    bad.push(w);
                }
                (ok, bad)
            });

        if !skipped.is_empty() {
            warn!(count = skipped.len(), first = skipped[0], "Skipped non-alphabetic dictionary entries");
        }

        if words.is_empty() {
            return Err(WordSourceError::new(
                "Dictionary contains no usable words".to_string(),
            ));
        }

        info!(count = words.len(), "Dictionary loaded");
        Ok(Self {
            words,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Replaces the random source with a seeded one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The usable words, upper-cased.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl WordSource for Dictionary {
    #[instrument(skip(self), fields(count = self.words.len()))]
    fn pick_word(&mut self) -> Result<String, WordSourceError> {
        let index = self.rng.random_range(0..self.words.len());
        debug!(index, "Picked dictionary word");
        Ok(self.words[index].clone())
    }
}

/// Always the same word; used for `--word`.
#[derive(Debug, Clone)]
pub struct FixedWord(String);

impl FixedWord {
    /// Wraps `word`, upper-cased.
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into().to_uppercase())
    }
}

impl WordSource for FixedWord {
    fn pick_word(&mut self) -> Result<String, WordSourceError> {
        Ok(self.0.clone())
    }
}

/// A word source that cannot supply words.
#[derive(Debug, Clone, Display, Error)]
#[display("Word source error: {} at {}:{}", message, file, line)]
pub struct WordSourceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordSourceError {
    /// Creates a new word source error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
