//! Renderable screen elements.
//!
//! Each element knows its plain content (for measuring) and how to style
//! it with a [`Theme`]. Styling lives here; what to show lives in the core.

use crate::graphics;
use crate::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use strictly_hangman::{Cell, LayoutDecision, Notice};
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells, saturating at `u16::MAX`.
pub fn display_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// Something that can be drawn.
pub trait Component {
    /// Unstyled lines, used for measuring.
    fn lines(&self) -> Vec<String>;

    /// Styled text.
    fn render(&self, theme: &Theme) -> Text<'static>;

    /// Width of the widest line.
    fn width(&self) -> u16 {
        self.lines()
            .iter()
            .map(|l| display_width(l))
            .max()
            .unwrap_or(0)
    }

    /// Number of lines.
    fn height(&self) -> u16 {
        u16::try_from(self.lines().len()).unwrap_or(u16::MAX)
    }
}

/// The greeter at the top of the screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Title;

impl Title {
    const TEXT: [&'static str; 2] = ["Hangman", "Can you save this criminal?"];
    const PADDING: usize = 2;
}

impl Component for Title {
    fn lines(&self) -> Vec<String> {
        let inner = Self::TEXT.iter().map(|l| l.width()).max().unwrap_or(0);
        Self::TEXT
            .iter()
            .map(|l| {
                format!(
                    "{pad}{:^inner$}{pad}",
                    l,
                    pad = " ".repeat(Self::PADDING),
                    inner = inner
                )
            })
            .collect()
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        let style = Style::default()
            .fg(theme.text)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD);
        Text::from(
            self.lines()
                .into_iter()
                .map(|l| Line::from(Span::styled(l, style)))
                .collect::<Vec<_>>(),
        )
    }
}

/// Quit hint at the bottom.
#[derive(Debug, Clone, Copy, Default)]
pub struct Footer;

impl Component for Footer {
    fn lines(&self) -> Vec<String> {
        vec!["Press ESC or Ctrl+C to quit.".to_string()]
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        let style = Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::UNDERLINED);
        Text::styled(self.lines().concat(), style)
    }
}

/// Game messages for the player.
#[derive(Debug, Clone, Default)]
pub struct NoticeView(pub Option<Notice>);

impl Component for NoticeView {
    fn lines(&self) -> Vec<String> {
        match &self.0 {
            Some(notice) => notice.to_string().lines().map(str::to_string).collect(),
            None => Vec::new(),
        }
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        let color = match &self.0 {
            Some(Notice::Won) => theme.success,
            Some(Notice::Lost(_)) => theme.fail,
            _ => theme.primary,
        };
        let style = Style::default()
            .fg(color)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC);
        Text::from(
            self.lines()
                .into_iter()
                .map(|l| Line::from(Span::styled(l, style)))
                .collect::<Vec<_>>(),
        )
    }
}

/// The word being revealed, one coloured tile per letter.
#[derive(Debug, Clone)]
pub struct BoardView {
    cells: Vec<Cell>,
}

impl BoardView {
    const TILE_WIDTH: usize = 5;
    const BLANK: char = ' ';
    /// Gap between tiles.
    pub const SEPARATOR: &'static str = " ";

    /// Board tiles for `cells`.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    fn tile(cell: Cell) -> String {
        format!("{:^width$}", cell.glyph(Self::BLANK), width = Self::TILE_WIDTH)
    }

    /// Number of tiles.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Rendered width of one tile, measured on the first tile.
    ///
    /// All tiles share one style, so the first stands in for every tile.
    pub fn cell_width(&self) -> u16 {
        self.cells
            .first()
            .map(|c| display_width(&Self::tile(*c)))
            .unwrap_or(0)
    }

    fn styled_row(cells: &[Cell], theme: &Theme) -> Line<'static> {
        let tile_style = Style::default()
            .fg(theme.secondary)
            .bg(theme.strong)
            .add_modifier(Modifier::BOLD);
        let spans: Vec<Span<'static>> = cells
            .iter()
            .enumerate()
            .flat_map(|(i, c)| {
                let gap = (i > 0).then(|| Span::raw(Self::SEPARATOR));
                gap.into_iter()
                    .chain(std::iter::once(Span::styled(Self::tile(*c), tile_style)))
            })
            .collect();
        Line::from(spans)
    }

    /// The board split over one or two lines as `layout` dictates.
    ///
    /// Never more than two lines: the continuation line is not wrapped again.
    /// When it is itself wider than the terminal, the trailing tiles are
    /// clipped by the renderer and not shown.
    pub fn render_wrapped(&self, theme: &Theme, layout: &LayoutDecision) -> Text<'static> {
        let (head, tail) = layout.split_board(&self.cells);
        let mut lines = vec![Self::styled_row(head, theme)];
        if !tail.is_empty() {
            lines.push(Self::styled_row(tail, theme));
        }
        Text::from(lines)
    }
}

impl Component for BoardView {
    fn lines(&self) -> Vec<String> {
        vec![
            self.cells
                .iter()
                .map(|c| Self::tile(*c))
                .collect::<Vec<_>>()
                .join(Self::SEPARATOR),
        ]
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        Text::from(Self::styled_row(&self.cells, theme))
    }
}

/// Used letters on a keyboard layout.
#[derive(Debug, Clone)]
pub struct KeyboardPanel {
    rows: Vec<Vec<(char, bool)>>,
}

impl KeyboardPanel {
    /// Space between the graphic and the panel.
    const MARGIN_LEFT: usize = 4;
    const KEY_WIDTH: usize = 3;

    /// Panel for keys marked used or unused.
    pub fn new(rows: Vec<Vec<(char, bool)>>) -> Self {
        Self { rows }
    }

    fn row_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0) * Self::KEY_WIDTH
    }

    fn indent(&self, keys: usize) -> usize {
        Self::MARGIN_LEFT + (self.row_width() - keys * Self::KEY_WIDTH) / 2
    }

    fn key(letter: char) -> String {
        format!("{:^width$}", letter, width = Self::KEY_WIDTH)
    }
}

impl Component for KeyboardPanel {
    fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                let keys: String = row.iter().map(|(k, _)| Self::key(*k)).collect();
                format!("{}{}", " ".repeat(self.indent(row.len())), keys)
            })
            .collect()
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        let unused = Style::default().fg(theme.text).bg(theme.primary);
        let used = Style::default()
            .fg(theme.primary)
            .bg(theme.tertiary)
            .add_modifier(Modifier::BOLD);
        let lines: Vec<Line<'static>> = self
            .rows
            .iter()
            .map(|row| {
                let indent = Span::raw(" ".repeat(self.indent(row.len())));
                let keys = row.iter().map(|(k, is_used)| {
                    Span::styled(Self::key(*k), if *is_used { used } else { unused })
                });
                Line::from(std::iter::once(indent).chain(keys).collect::<Vec<_>>())
            })
            .collect();
        Text::from(lines)
    }
}

/// Feedback colour on the graphic after a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    /// The last guess revealed letters.
    Correct,
    /// The last guess cost a mistake.
    Wrong,
}

/// The mistake figure inside a rounded, padded frame.
#[derive(Debug, Clone, Copy)]
pub struct Gallows {
    stage: usize,
    flash: Option<Flash>,
}

impl Gallows {
    /// Horizontal padding inside the border.
    pub const PADDING_X: u16 = 3;
    /// Vertical padding inside the border.
    pub const PADDING_Y: u16 = 1;

    /// Figure for `stage`, optionally flashing.
    pub fn new(stage: usize, flash: Option<Flash>) -> Self {
        Self { stage, flash }
    }

    /// Colour of the figure and its border.
    pub fn style(&self, theme: &Theme) -> Style {
        let fg = match self.flash {
            Some(Flash::Correct) => theme.success,
            Some(Flash::Wrong) => theme.fail,
            None => theme.primary,
        };
        Style::default()
            .fg(fg)
            .bg(theme.background)
            .add_modifier(Modifier::BOLD)
    }

    /// Width including padding and border.
    pub fn outer_width(&self) -> u16 {
        self.width() + 2 * Self::PADDING_X + 2
    }

    /// Height including padding and border.
    pub fn outer_height(&self) -> u16 {
        self.height() + 2 * Self::PADDING_Y + 2
    }
}

impl Component for Gallows {
    fn lines(&self) -> Vec<String> {
        graphics::frame(self.stage)
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        Text::styled(graphics::frame(self.stage), self.style(theme))
    }

    // Measured across all frames so the box keeps its size as the figure grows.
    fn width(&self) -> u16 {
        graphics::FRAMES
            .iter()
            .flat_map(|f| f.lines())
            .map(display_width)
            .max()
            .unwrap_or(0)
    }
}

/// One-letter input line.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputLine {
    value: Option<char>,
}

impl InputLine {
    const PROMPT: &'static str = "─> ";
    const PLACEHOLDER: &'static str = "Guess a letter!";

    /// Input line showing `value`, or the placeholder when empty.
    pub fn new(value: Option<char>) -> Self {
        Self { value }
    }
}

impl Component for InputLine {
    fn lines(&self) -> Vec<String> {
        let content = match self.value {
            Some(c) => c.to_string(),
            None => Self::PLACEHOLDER.to_string(),
        };
        vec![format!("{}{}", Self::PROMPT, content)]
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        let prompt = Span::styled(Self::PROMPT, Style::default().fg(theme.secondary));
        let content = match self.value {
            Some(c) => Span::raw(c.to_string()),
            None => Span::styled(
                Self::PLACEHOLDER,
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::ITALIC | Modifier::DIM),
            ),
        };
        Text::from(Line::from(vec![prompt, content]))
    }
}
