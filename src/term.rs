use crate::{Coords, TermInt};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{bail, Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::ClearType;
use crossterm::event::{Event, KeyEvent, read, poll};

/// Holds the terminal in raw mode for as long as it lives. Dropping it puts
/// the terminal back the way it was, on every exit path.
pub struct TermManager {
    stdout: Stdout,
    raw: bool,
}

impl TermManager {
    /// Switches to raw mode, after checking the terminal can fit `needed`.
    pub fn acquire(needed: Coords) -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading size.")?;
        if width < needed.0 || height < needed.1 {
            bail!("terminal is {}x{}, the board needs at least {}x{}", width, height, needed.0, needed.1);
        }

        terminal::enable_raw_mode().context("Error setting raw mode.")?;
        let mut term = TermManager { stdout: stdout(), raw: true };

        execute!(term.stdout, cursor::Hide, cursor::DisableBlinking)
            .context("Error hiding cursor.")?;

        Ok(term)
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;

        terminal::disable_raw_mode().context("Error unsetting raw mode.")?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking)
            .context("Error showing cursor.")?;
        Ok(())
    }

    /// Returns the next pressed key without waiting, skipping other events.
    pub fn poll_key(&self) -> Result<Option<KeyEvent>> {
        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                return Ok(Some(ev));
            }
        }

        Ok(None)
    }

    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while let Some(ev) = self.poll_key()? {
            events.push(ev);
        }

        Ok(events)
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    /// Queues `lines` below the cursor. Raw mode needs the explicit `\r`.
    pub fn print_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        for line in lines {
            queue!(self.stdout, style::Print(line.as_ref()), style::Print("\r\n"))?;
        }
        Ok(())
    }

    /// Moves back up over the last `count` printed lines and blanks them.
    pub fn erase_lines(&mut self, count: TermInt) -> Result<()> {
        if count > 0 {
            queue!(self.stdout, cursor::MoveToPreviousLine(count), terminal::Clear(ClearType::FromCursorDown))?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing.")
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::error!("could not restore the terminal: {:#}", e);
        }
    }
}
