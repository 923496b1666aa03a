//! Application state and the event loop.
//!
//! The app is the single owner of the session. Events are handled one at a
//! time, to completion, and the screen is redrawn after each one.

use crate::components::{BoardView, Component, Flash, Gallows, KeyboardPanel, Title};
use crate::input::{self, AppEvent};
use crate::theme::Theme;
use crate::ui;
use crossterm::event;
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use std::io;
use std::time::Duration;
use strictly_hangman::{
    ElementSizes, GuessKind, GuessResult, LayoutDecision, Session, decide_layout,
};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// The game being played.
    session: Session,
    /// Colours, fixed for the whole run.
    theme: Theme,
    /// Letter typed but not yet submitted.
    input: Option<char>,
    /// Colour feedback from the last guess.
    flash: Option<Flash>,
    /// Terminal columns.
    width: u16,
    /// Terminal rows.
    height: u16,
    /// What fits on the terminal; recomputed on every resize.
    layout: LayoutDecision,
    /// Set once the player asks to leave.
    should_quit: bool,
    /// How long to wait for input before redrawing.
    poll_interval: Duration,
}

impl App {
    /// Creates the app for a terminal of `width` x `height` cells.
    #[instrument(skip(session, theme))]
    pub fn new(session: Session, theme: Theme, width: u16, height: u16) -> Self {
        let mut app = Self {
            session,
            theme,
            input: None,
            flash: None,
            width,
            height,
            layout: decide_layout(0, 0, &ElementSizes::default()),
            should_quit: false,
            poll_interval: Duration::from_millis(100),
        };
        app.relayout();
        app
    }

    /// Sets how long the loop waits for input before redrawing.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Sizes of everything the layout arranges, measured from the components.
    pub fn element_sizes(&self) -> ElementSizes {
        let board = BoardView::new(self.session.board().cells().to_vec());
        let panel = KeyboardPanel::new(self.session.history().keyboard());
        let gallows = Gallows::new(self.session.mistakes().stage(), self.flash);
        ElementSizes::new(
            Title.width(),
            panel.width(),
            gallows.outer_width(),
            board.cell_count(),
            board.cell_width(),
            BoardView::SEPARATOR.len() as u16,
        )
    }

    fn relayout(&mut self) {
        self.layout = decide_layout(self.width, self.height, &self.element_sizes());
        debug!(width = self.width, height = self.height, layout = ?self.layout, "Layout recomputed");
    }

    /// Applies one event. Returns the guess result when the event was a submit.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: AppEvent) -> Option<GuessResult> {
        match event {
            AppEvent::Quit => {
                info!("Player quit");
                self.should_quit = true;
                None
            }
            AppEvent::Resize(width, height) => {
                self.width = width;
                self.height = height;
                self.relayout();
                None
            }
            AppEvent::Type(letter) => {
                self.flash = None;
                if self.input.is_none() && !self.session.outcome().is_terminal() {
                    self.input = Some(letter);
                }
                None
            }
            AppEvent::Erase => {
                self.flash = None;
                self.input = None;
                None
            }
            AppEvent::Submit => Some(self.submit()),
        }
    }

    fn submit(&mut self) -> GuessResult {
        let guess = self.input.take().map(String::from).unwrap_or_default();
        let result = self.session.submit_guess(&guess);

        self.flash = match result.kind() {
            GuessKind::Correct { .. } => Some(Flash::Correct),
            GuessKind::Wrong { .. } => Some(Flash::Wrong),
            _ => None,
        };

        info!(
            letter = ?result.letter(),
            kind = ?result.kind(),
            outcome = %result.outcome(),
            "Guess processed"
        );
        if let Some(reason) = result.reason() {
            info!(%reason, "Session ended");
        }
        result
    }

    /// Main application loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        info!("Entering event loop");
        loop {
            terminal.draw(|f| ui::draw(f, self)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            if event::poll(self.poll_interval)? {
                let event = event::read()?;
                if let Some(app_event) = input::translate(&event) {
                    self.handle_event(app_event);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_hangman::Outcome;

    fn app(word: &str) -> App {
        App::new(Session::start(word).unwrap(), Theme::default(), 80, 40)
    }

    fn guess(app: &mut App, letter: char) -> GuessResult {
        app.handle_event(AppEvent::Type(letter));
        app.handle_event(AppEvent::Submit).unwrap()
    }

    #[test]
    fn test_input_holds_one_letter() {
        let mut app = app("cat");
        app.handle_event(AppEvent::Type('c'));
        app.handle_event(AppEvent::Type('x'));
        assert_eq!(app.input(), &Some('c'));
        app.handle_event(AppEvent::Erase);
        assert_eq!(app.input(), &None);
    }

    #[test]
    fn test_submit_clears_input_and_flashes() {
        let mut app = app("cat");
        guess(&mut app, 'c');
        assert_eq!(app.input(), &None);
        assert_eq!(app.flash(), &Some(Flash::Correct));

        guess(&mut app, 'z');
        assert_eq!(app.flash(), &Some(Flash::Wrong));

        app.handle_event(AppEvent::Type('a'));
        assert_eq!(app.flash(), &None);
    }

    #[test]
    fn test_empty_submit() {
        let mut app = app("cat");
        let result = app.handle_event(AppEvent::Submit).unwrap();
        assert_eq!(result.kind(), &GuessKind::Empty);
        assert_eq!(app.flash(), &None);
    }

    #[test]
    fn test_quit() {
        let mut app = app("cat");
        assert!(!app.should_quit());
        app.handle_event(AppEvent::Quit);
        assert!(*app.should_quit());
    }

    #[test]
    fn test_resize_recomputes_layout() {
        let mut app = app("abcdefghij");
        assert_eq!(app.layout().cutoff_cells, 0);
        app.handle_event(AppEvent::Resize(40, 30));
        assert!(app.layout().cutoff_cells > 0);
        assert!(!app.layout().show_panel);
        app.handle_event(AppEvent::Resize(120, 30));
        assert_eq!(app.layout().cutoff_cells, 0);
        assert!(app.layout().show_panel);
    }

    #[test]
    fn test_typing_ignored_after_game_over() {
        let mut app = app("a");
        guess(&mut app, 'a');
        assert_eq!(app.session().outcome(), Outcome::Won);
        app.handle_event(AppEvent::Type('b'));
        assert_eq!(app.input(), &None);
        let result = app.handle_event(AppEvent::Submit).unwrap();
        assert_eq!(result.kind(), &GuessKind::SessionOver);
    }
}
