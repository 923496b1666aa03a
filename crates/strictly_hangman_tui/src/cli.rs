//! Command-line interface for the hangman game.

use crate::theme::ThemeName;
use clap::Parser;
use std::path::PathBuf;

/// Hangman - can you save this criminal?
#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Guess the word one letter at a time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file. Missing file means defaults.
    #[arg(short, long, default_value = "hangman.toml")]
    pub config: PathBuf,

    /// Word list to pick from instead of the built-in dictionary
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// Play this exact word (handy for demos)
    #[arg(short, long, conflicts_with = "dictionary")]
    pub word: Option<String>,

    /// Colour theme (dark or light)
    #[arg(short, long)]
    pub theme: Option<ThemeName>,

    /// Where to write logs
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
