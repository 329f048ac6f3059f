use anyhow::Result;

use crate::config::{APPLE_CHAR, DEAD_SNAKE_CHAR, EMPTY_CHAR, SNAKE_CHAR};
use crate::grid::{Cell, Grid};
use crate::term::TermManager;
use crate::TermInt;

/// Draws the board as text, overwriting the previous frame in place.
pub struct Renderer {
    drawn_lines: TermInt,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer { drawn_lines: 0 }
    }

    /// One line per board row.
    pub fn frame(grid: &Grid, snake_char: char) -> Vec<String> {
        grid.rows()
            .map(|row| row.iter().map(|cell| match cell {
                Cell::Snake => snake_char,
                Cell::Apple => APPLE_CHAR,
                Cell::Empty => EMPTY_CHAR,
            }).collect::<String>())
            .collect()
    }

    pub fn draw(&mut self, term: &mut TermManager, grid: &Grid, status: &str) -> Result<()> {
        self.draw_with(term, grid, SNAKE_CHAR, status)
    }

    /// Redraws the board with the snake marked as dead.
    pub fn draw_defeat(&mut self, term: &mut TermManager, grid: &Grid, status: &str) -> Result<()> {
        self.draw_with(term, grid, DEAD_SNAKE_CHAR, status)
    }

    /// Prints free-form text that the next draw will wipe.
    pub fn show_message(&mut self, term: &mut TermManager, lines: &[&str]) -> Result<()> {
        term.erase_lines(self.drawn_lines)?;
        term.print_lines(lines)?;
        self.drawn_lines = lines.len() as TermInt;
        term.flush()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_with(&mut self, term: &mut TermManager, grid: &Grid, snake_char: char, status: &str) -> Result<()> {
        let mut lines = Self::frame(grid, snake_char);
        lines.push(status.to_string());

        term.erase_lines(self.drawn_lines)?;
        term.print_lines(&lines)?;
        self.drawn_lines = lines.len() as TermInt;
        term.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
