//! Raw-mode terminal setup that is undone on every exit path.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, warn};

/// Puts the terminal back in cooked mode on the main screen when dropped.
///
/// Created as soon as raw mode is on, so an error anywhere after that point,
/// including a failed restore step, still leaves the alternate screen.
#[derive(Debug)]
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enables raw mode and the alternate screen, returning a terminal to
    /// draw on together with the guard that undoes both.
    pub fn enter() -> io::Result<(Self, Terminal<CrosstermBackend<Stdout>>)> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        debug!("Terminal entered raw mode");
        Ok((guard, terminal))
    }

    /// Restores the terminal now. Every step runs even if an earlier one fails.
    pub fn restore(mut self) -> io::Result<()> {
        self.active = false;
        Self::restore_steps()
    }

    fn restore_steps() -> io::Result<()> {
        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
        debug!("Terminal restored");
        raw.and(screen)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        if let Err(e) = Self::restore_steps() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_restores_without_panicking() {
        // No raw mode was entered; restoring must still be safe to run.
        let guard = TerminalGuard { active: true };
        drop(guard);
    }

    #[test]
    fn test_restore_disarms_drop() {
        let mut guard = TerminalGuard { active: true };
        guard.active = false;
        drop(guard);

        let guard = TerminalGuard { active: true };
        // Succeeds or fails depending on the attached tty; never panics.
        let _ = guard.restore();
    }
}
