use std::time::Duration;

use crate::snake::Direction;
use crate::{Coords, TermInt};

const BOARD_WIDTH: TermInt = 30;
const BOARD_HEIGHT: TermInt = 20;
const INITIAL_SNAKE_LENGTH: usize = 3;
const TICK_INTERVAL_MS: u64 = 150;

pub const SNAKE_CHAR: char = 'o';
pub const APPLE_CHAR: char = 'a';
pub const EMPTY_CHAR: char = '_';
pub const DEAD_SNAKE_CHAR: char = 'x';

/// Fixed game constants. The binary only ever uses `GameConfig::default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub width: TermInt,
    pub height: TermInt,
    pub initial_length: usize,
    /// Head position of the freshly created snake.
    pub start: Coords,
    pub heading: Direction,
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            initial_length: INITIAL_SNAKE_LENGTH,
            start: (14, 10),
            heading: Direction::Right,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
        }
    }
}

impl GameConfig {
    pub fn bounds(&self) -> Coords {
        (self.width, self.height)
    }

    /// Smallest terminal that redraws the board in place: every board row, the
    /// status line, and the row the cursor lands on after the last line break.
    pub fn terminal_size(&self) -> Coords {
        (self.width, self.height + 2)
    }

    /// A smaller board, handy for tests that need to fill it up.
    pub fn with_board(width: TermInt, height: TermInt, start: Coords) -> Self {
        GameConfig { width, height, start, ..Default::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.bounds(), (30, 20));
        assert_eq!(config.initial_length, 3);
        assert_eq!(config.start, (14, 10));
        assert_eq!(config.heading, Direction::Right);
        assert_eq!(config.tick_interval, Duration::from_millis(150));
    }

    #[test]
    fn custom_board_keeps_other_defaults() {
        let config = GameConfig::with_board(4, 1, (3, 0));
        assert_eq!(config.bounds(), (4, 1));
        assert_eq!(config.initial_length, 3);
    }

    #[test]
    fn terminal_fits_board_status_and_cursor_row() {
        assert_eq!(GameConfig::default().terminal_size(), (30, 22));
        assert_eq!(GameConfig::with_board(4, 1, (3, 0)).terminal_size(), (4, 3));
    }
}
