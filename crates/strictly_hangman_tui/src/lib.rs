//! Terminal front end for [`strictly_hangman`].
//!
//! Owns everything the core leaves out: picking the secret word, reading
//! keys, styling, and drawing. The core decides what happens; this crate
//! decides how it looks.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod components;
mod config;
mod graphics;
mod input;
mod terminal;
mod theme;
mod ui;
mod words;

pub use app::App;
pub use cli::Cli;
pub use components::{
    BoardView, Component, Flash, Footer, Gallows, InputLine, KeyboardPanel, NoticeView, Title,
    display_width,
};
pub use config::{AppConfig, ConfigError};
pub use graphics::{FRAMES, MISTAKE_CEILING, frame};
pub use input::{AppEvent, translate, translate_key};
pub use terminal::TerminalGuard;
pub use theme::{Theme, ThemeName};
pub use ui::draw;
pub use words::{Dictionary, FixedWord, WordSource, WordSourceError};

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Sends log output to `log_file`; the terminal belongs to the game.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Does nothing if a
/// subscriber is already installed.
pub fn init_tracing(log_file: &Path) -> std::io::Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
