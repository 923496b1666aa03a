//! Screen rendering.

use crate::app::App;
use crate::components::{
    BoardView, Component, Footer, Gallows, InputLine, KeyboardPanel, NoticeView, Title,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, BorderType, Padding, Paragraph},
};
use tracing::trace;

/// Draws the whole screen for the current app state.
pub fn draw(f: &mut Frame, app: &App) {
    let session = app.session();
    let theme = app.theme();
    let layout = app.layout();

    let gallows = Gallows::new(session.mistakes().stage(), *app.flash());
    let board = BoardView::new(session.board().cells().to_vec());
    let board_height = if layout.wraps_board() { 2 } else { 1 };
    let notice = NoticeView(session.notice().cloned());

    let mut constraints = Vec::new();
    if layout.show_title {
        constraints.push(Constraint::Length(Title.height()));
        constraints.push(Constraint::Length(1));
    }
    constraints.extend([
        Constraint::Length(gallows.outer_height()),
        Constraint::Length(1),
        Constraint::Length(board_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(notice.height()),
        Constraint::Length(1),
        Constraint::Length(Footer.height()),
        Constraint::Min(0),
    ]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());
    trace!(rows = rows.len(), "Drawing frame");

    let mut rows = rows.iter().copied();
    let mut next = || rows.next().unwrap_or_default();

    if layout.show_title {
        f.render_widget(Paragraph::new(Title.render(theme)), next());
        next();
    }

    render_graphic_row(f, next(), app, &gallows);
    next();
    // Two lines at most; an over-wide continuation line is clipped.
    f.render_widget(Paragraph::new(board.render_wrapped(theme, layout)), next());
    next();
    f.render_widget(
        Paragraph::new(InputLine::new(*app.input()).render(theme)),
        next(),
    );
    f.render_widget(Paragraph::new(notice.render(theme)), next());
    next();
    f.render_widget(Paragraph::new(Footer.render(theme)), next());
}

/// The gallows box, with the used-letters panel beside it when there is room.
fn render_graphic_row(f: &mut Frame, area: Rect, app: &App, gallows: &Gallows) {
    let theme = app.theme();
    let style = gallows.style(theme);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .padding(Padding::new(
            Gallows::PADDING_X,
            Gallows::PADDING_X,
            Gallows::PADDING_Y,
            Gallows::PADDING_Y,
        ))
        .style(style);

    let panel = KeyboardPanel::new(app.session().history().keyboard());
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(gallows.outer_width()),
            Constraint::Length(panel.width()),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(Paragraph::new(gallows.render(theme)).block(block), cols[0]);

    if app.layout().show_panel {
        let offset = Block::new().padding(Padding::top(Gallows::PADDING_Y + 1));
        f.render_widget(Paragraph::new(panel.render(theme)).block(offset), cols[1]);
    }
}
