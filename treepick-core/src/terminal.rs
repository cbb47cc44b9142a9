//! src/terminal.rs
//! ============================================================================
//! # Terminal surface and mode tracking
//!
//! The UI is drawn on stdout when it is a terminal and on `/dev/tty`
//! otherwise, so stdout stays free for the picked path. [`ScreenGuard`]
//! owns that writer and records which modes it switched on; dropping it
//! undoes them, whichever way the program leaves.

use std::{
    fs::OpenOptions,
    io::{self, BufWriter, IsTerminal, Write},
};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tracing::{debug, info, warn};

use crate::error::AppError;

pub type TtyWriter = Box<dyn Write + Send>;

/// Where the UI is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiTarget {
    Stdout,
    ControllingTty,
}

impl UiTarget {
    pub fn detect() -> Self {
        Self::for_stdout(io::stdout().is_terminal())
    }

    pub const fn for_stdout(stdout_is_terminal: bool) -> Self {
        if stdout_is_terminal {
            Self::Stdout
        } else {
            Self::ControllingTty
        }
    }

    pub fn open(self) -> Result<TtyWriter, AppError> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout())),
            Self::ControllingTty => {
                let tty = OpenOptions::new()
                    .read(true)
                    .write(true)
                    .open("/dev/tty")
                    .map_err(AppError::NoTerminal)?;

                info!("stdout is not a terminal, drawing on /dev/tty");
                Ok(Box::new(BufWriter::new(tty)))
            }
        }
    }
}

/// Switch `out` to the alternate screen and hide the cursor.
pub fn write_enter<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, Hide)
}

/// Leave the alternate screen and show the cursor again.
pub fn write_restore<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

/// Writer for the UI that restores the terminal when dropped.
pub struct ScreenGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> ScreenGuard<W> {
    pub fn enter(mut out: W) -> io::Result<Self> {
        write_enter(&mut out)?;
        Ok(Self {
            out,
            raw_mode: false,
        })
    }

    /// Also enable raw mode; it is disabled again on drop.
    pub fn raw(mut self) -> io::Result<Self> {
        enable_raw_mode()?;
        self.raw_mode = true;
        Ok(self)
    }

    pub const fn raw_mode_enabled(&self) -> bool {
        self.raw_mode
    }
}

impl<W: Write> Write for ScreenGuard<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for ScreenGuard<W> {
    fn drop(&mut self) {
        if self.raw_mode
            && let Err(e) = disable_raw_mode()
        {
            warn!("Failed to disable raw mode: {}", e);
        }
        if let Err(e) = write_restore(&mut self.out) {
            warn!("Failed to leave alternate screen: {}", e);
        }
        debug!("Terminal restored");
    }
}

/// Best-effort restore for the panic hook, on the same surface the UI used.
pub fn emergency_restore() {
    let _ = disable_raw_mode();
    if let Ok(mut out) = UiTarget::detect().open() {
        let _ = write_restore(&mut out);
    }
}
