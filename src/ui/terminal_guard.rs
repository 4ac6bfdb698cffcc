//! Terminal state guard for guaranteed cleanup.
//!
//! Raw mode and the alternate screen are restored when the guard is dropped,
//! whether the app returns normally, bails out with `?`, or panics (with the
//! panic hook installed).

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Guard that restores terminal state when dropped.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        // From here on Drop undoes raw mode even if the next step fails
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(guard)
    }

    /// Restore the terminal now and make Drop a no-op.
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore()?;
        Ok(())
    }
}

fn restore() -> io::Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(stdout, Show, LeaveAlternateScreen)?;
    stdout.flush()
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            // Best effort cleanup - ignore errors since we can't propagate them from Drop
            if let Err(e) = restore() {
                tracing::debug!(error = %e, "Terminal cleanup failed in Drop");
            }
        }
    }
}

/// Install a panic hook that restores the terminal before the panic message
/// is printed. Call early in main(), before any terminal setup.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = restore() {
            tracing::debug!(error = %e, "Failed to restore terminal in panic hook");
        }
        tracing::error!(panic = %panic_info, "Panicked");
        original_hook(panic_info);
    }));
}
