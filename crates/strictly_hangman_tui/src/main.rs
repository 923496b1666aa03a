//! Hangman in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_hangman::Session;
use strictly_hangman_tui::{
    App, AppConfig, Cli, Dictionary, FixedWord, MISTAKE_CEILING, TerminalGuard, Theme, WordSource,
    init_tracing,
};
use tracing::{error, info};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?.with_overrides(
        cli.theme,
        cli.dictionary.clone(),
        cli.log_file.clone(),
    );
    config.validate()?;

    init_tracing(config.log_file())
        .with_context(|| format!("Failed to open log file {}", config.log_file().display()))?;
    info!(theme = %config.theme(), "Starting hangman");

    let mut source: Box<dyn WordSource> = match (&cli.word, config.dictionary()) {
        (Some(word), _) => Box::new(FixedWord::new(word.as_str())),
        (None, Some(path)) => Box::new(Dictionary::from_file(path)?),
        (None, None) => Box::new(Dictionary::embedded()?),
    };
    let word = source.pick_word()?;
    let session = Session::with_ceiling(&word, MISTAKE_CEILING)?;
    info!(length = session.word_len(), "Session started");

    // The guard restores the terminal on drop if anything below returns early.
    let (guard, mut terminal) = TerminalGuard::enter()?;
    let size = terminal.size()?;
    let mut app = App::new(session, Theme::new(*config.theme()), size.width, size.height)
        .with_poll_interval(config.poll_interval());
    let res = app.run(&mut terminal);
    drop(terminal);
    guard.restore()?;

    if let Err(err) = res {
        error!(error = ?err, "Event loop error");
        return Err(err.into());
    }

    if let Some(notice) = app.session().notice().filter(|n| n.is_final()) {
        println!("{}", notice);
    }
    info!(outcome = %app.session().outcome(), "Exiting");
    Ok(())
}
