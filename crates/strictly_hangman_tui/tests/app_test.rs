//! Drives the app with key events and checks what lands on screen.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use strictly_hangman::{GuessKind, Outcome, Session};
use strictly_hangman_tui::{App, AppEvent, Theme, draw};

fn app(session: Session, width: u16, height: u16) -> App {
    App::new(session, Theme::default(), width, height)
}

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(*app.width(), *app.height())).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn rows(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (0..area.height)
        .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

fn screen(app: &App) -> String {
    rows(&render(app)).join("\n")
}

fn guess(app: &mut App, letter: char) {
    app.handle_event(AppEvent::Type(letter));
    app.handle_event(AppEvent::Submit);
}

#[test]
fn test_fresh_screen_has_every_element() {
    let app = app(Session::start("cat").unwrap(), 80, 40);
    let text = screen(&app);
    assert!(text.contains("Hangman"));
    assert!(text.contains("Can you save this criminal?"));
    assert!(text.contains("Guess a letter!"));
    assert!(text.contains("Press ESC or Ctrl+C to quit."));
    assert!(text.contains(" Q  W  E "));
    assert!(text.contains("╭"));
}

#[test]
fn test_typed_letter_replaces_placeholder() {
    let mut app = app(Session::start("cat").unwrap(), 80, 40);
    app.handle_event(AppEvent::Type('q'));
    let text = screen(&app);
    assert!(text.contains("─> q"));
    assert!(!text.contains("Guess a letter!"));
}

#[test]
fn test_narrow_terminal_drops_title_and_panel() {
    let app = app(Session::start("cat").unwrap(), 30, 40);
    assert!(!app.layout().show_title);
    assert!(!app.layout().show_panel);
    let text = screen(&app);
    assert!(!text.contains("Hangman"));
    assert!(!text.contains(" Q  W "));
    assert!(text.contains("╭"));
}

#[test]
fn test_long_word_wraps_onto_second_line() {
    let mut app = app(Session::start("aaaaaaaaaaaa").unwrap(), 40, 40);
    guess(&mut app, 'a');
    assert_eq!(app.layout().cutoff_cells, 6);

    let board_rows: Vec<String> = rows(&render(&app))
        .into_iter()
        .filter(|r| r.contains('A'))
        .collect();
    assert_eq!(board_rows.len(), 2);
    for row in &board_rows {
        assert_eq!(row.matches('A').count(), 6);
    }
}

#[test]
fn test_resize_rewraps() {
    let mut app = app(Session::start("aaaaaaaaaaaa").unwrap(), 40, 40);
    app.handle_event(AppEvent::Resize(100, 40));
    assert!(!app.layout().wraps_board());
    assert!(app.layout().show_panel);
}

#[test]
fn test_win_message_shown() {
    let mut app = app(Session::start("cat").unwrap(), 80, 40);
    for letter in ['c', 'a', 't'] {
        guess(&mut app, letter);
    }
    assert_eq!(app.session().outcome(), Outcome::Won);
    assert!(screen(&app).contains("Woo you win!"));
}

#[test]
fn test_loss_discloses_word() {
    let mut app = app(Session::with_ceiling("dog", 3).unwrap(), 80, 40);
    for letter in ['x', 'y', 'z'] {
        guess(&mut app, letter);
    }
    assert_eq!(app.session().outcome(), Outcome::Lost);
    let text = screen(&app);
    assert!(text.contains("You lose :("));
    assert!(text.contains("The word we were looking for: DOG"));
}

#[test]
fn test_duplicate_guess_notice() {
    let mut app = app(Session::start("cat").unwrap(), 80, 40);
    guess(&mut app, 'c');
    app.handle_event(AppEvent::Type('c'));
    let result = app.handle_event(AppEvent::Submit).unwrap();
    assert_eq!(result.kind(), &GuessKind::Duplicate);
    assert!(screen(&app).contains("Silly, you already guessed that!"));
}

#[test]
fn test_wrong_guess_flashes_graphic() {
    let theme = Theme::default();
    let mut app = app(Session::start("cat").unwrap(), 80, 40);
    guess(&mut app, 'z');

    let buffer = render(&app);
    // Title, blank row, then the top-left corner of the gallows box.
    let corner = &buffer[(0, 3)];
    assert_eq!(corner.symbol(), "╭");
    assert_eq!(corner.fg, theme.fail);

    app.handle_event(AppEvent::Type('a'));
    let buffer = render(&app);
    assert_eq!(buffer[(0, 3)].fg, theme.primary);
}
