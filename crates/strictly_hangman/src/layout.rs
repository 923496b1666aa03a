//! Responsive layout decisions.
//!
//! A pure function of the terminal size and the rendered sizes of the screen
//! elements. It holds no state and is safe to call every frame.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Rendered sizes, in terminal cells, of the elements the layout arranges.
///
/// Board cells are assumed to share one width: `cell_width` is taken from the
/// first rendered cell and applied to all of them. That holds while every
/// cell is drawn with the same style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new, Serialize, Deserialize)]
pub struct ElementSizes {
    /// Widest line of the title block.
    pub title_width: u16,
    /// Width of the used-letters panel.
    pub panel_width: u16,
    /// Width of the mistake graphic the panel sits beside.
    pub graphic_width: u16,
    /// Number of board cells.
    pub cell_count: usize,
    /// Width of one board cell.
    pub cell_width: u16,
    /// Width of the gap between adjacent cells.
    pub separator_width: u16,
}

impl ElementSizes {
    /// Horizontal distance from the start of one cell to the start of the next.
    pub fn cell_stride(&self) -> usize {
        usize::from(self.cell_width) + usize::from(self.separator_width)
    }

    /// Width of the whole board on one line.
    pub fn board_width(&self) -> usize {
        match self.cell_count {
            0 => 0,
            n => n * self.cell_stride() - usize::from(self.separator_width),
        }
    }

    /// Width of the first `cells` board cells on one line.
    pub fn prefix_width(&self, cells: usize) -> usize {
        Self {
            cell_count: cells.min(self.cell_count),
            ..*self
        }
        .board_width()
    }
}

/// What to draw for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDecision {
    /// Draw the title block.
    pub show_title: bool,
    /// Draw the used-letters panel beside the graphic.
    pub show_panel: bool,
    /// Trailing board cells moved onto a continuation line.
    pub cutoff_cells: usize,
}

impl LayoutDecision {
    /// Splits `cells` into the leading cells that fit and the continuation.
    pub fn split_board<'a, T>(&self, cells: &'a [T]) -> (&'a [T], &'a [T]) {
        let fitting = cells.len().saturating_sub(self.cutoff_cells);
        cells.split_at(fitting)
    }

    /// True when the board needs a continuation line.
    pub fn wraps_board(&self) -> bool {
        self.cutoff_cells > 0
    }
}

/// Decides which optional elements to show and how the board wraps.
///
/// - the title is shown iff it fits the width
/// - the panel is shown iff it fits beside the mistake graphic
/// - if the board is wider than the terminal, the smallest number of trailing
///   cells is moved to a continuation line so the rest fits
///
/// A zero width or height means nothing fits: both optional elements are
/// hidden and every cell is moved to the continuation line.
#[instrument(level = "trace")]
pub fn decide_layout(width: u16, height: u16, sizes: &ElementSizes) -> LayoutDecision {
    if width == 0 || height == 0 {
        return LayoutDecision {
            show_title: false,
            show_panel: false,
            cutoff_cells: sizes.cell_count,
        };
    }

    let available = usize::from(width);
    let show_title = usize::from(sizes.title_width) <= available;
    let show_panel = usize::from(sizes.graphic_width) + usize::from(sizes.panel_width) <= available;

    let board_width = sizes.board_width();
    let cutoff_cells = if board_width <= available {
        0
    } else {
        let stride = sizes.cell_stride().max(1);
        (board_width - available)
            .div_ceil(stride)
            .max(1)
            .min(sizes.cell_count)
    };

    let decision = LayoutDecision {
        show_title,
        show_panel,
        cutoff_cells,
    };
    trace!(?decision, board_width, "Layout decided");
    decision
}
