//! Per-position reveal state for the secret word.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Not guessed yet.
    Hidden,
    /// Revealed letter.
    Revealed(char),
}

impl Cell {
    /// Glyph shown for this cell, using `blank` for hidden cells.
    pub fn glyph(self, blank: char) -> char {
        match self {
            Cell::Hidden => blank,
            Cell::Revealed(letter) => letter,
        }
    }
}

/// Ordered board cells, one per letter of the secret word.
///
/// The board trusts its caller: [`GuessBoard::reveal`] is only ever called by
/// the session with indices that match the secret word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessBoard {
    cells: Vec<Cell>,
}

impl GuessBoard {
    /// Glyph used by [`GuessBoard::render`] for hidden cells.
    pub const HIDDEN_GLYPH: char = '_';

    /// Creates a board of `len` hidden cells.
    #[instrument]
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![Cell::Hidden; len],
        }
    }

    /// Reveals `letter` at `index`. Out-of-range indices are ignored.
    pub fn reveal(&mut self, index: usize, letter: char) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Revealed(letter);
        }
    }

    /// True when no cell is hidden.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Hidden)
    }

    /// All cells in order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a board with no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of revealed cells.
    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Hidden).count()
    }

    /// Formats the board left to right, joining cells with `separator`.
    pub fn render(&self, separator: &str) -> String {
        self.cells
            .iter()
            .map(|c| c.glyph(Self::HIDDEN_GLYPH).to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}
