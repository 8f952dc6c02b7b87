use std::io::{stdout, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::Result;

pub type CrosstermTerminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode alternate screen, restored on drop and on panic
pub struct Terminal {
    terminal: CrosstermTerminal,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        Self::install_panic_hook();

        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        let terminal = ratatui::Terminal::new(CrosstermBackend::new(stdout()))?;

        Ok(Self { terminal })
    }

    /// Leave the alternate screen before the panic report is printed
    fn install_panic_hook() {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = Self::restore();
            previous(info);
        }));
    }

    fn restore() -> Result<()> {
        disable_raw_mode()?;
        execute!(stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(err) = Self::restore() {
            tracing::warn!(%err, "failed to restore terminal");
        }
    }
}
