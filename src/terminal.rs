//! Raw-mode terminal setup that is undone on drop, including when setup fails halfway.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;

pub struct TerminalGuard<W: Write> {
    out: W,
    raw: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Self::setup(Self { out, raw: true })
    }

    /// Alternate screen and hidden cursor, leaving the line discipline alone.
    pub fn screen_only(out: W) -> io::Result<Self> {
        Self::setup(Self { out, raw: false })
    }

    // On error `guard` is dropped here, which restores whatever was already changed.
    fn setup(mut guard: Self) -> io::Result<Self> {
        guard.out.execute(EnterAlternateScreen)?;
        guard.out.execute(Hide)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = self.out.execute(Show);
        let _ = self.out.execute(LeaveAlternateScreen);
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}
