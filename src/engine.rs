use anyhow::{bail, Result};
use log::{debug, info};
use rand::Rng;

use crate::apple::AppleSpawner;
use crate::config::GameConfig;
use crate::grid::{Cell, Grid};
use crate::snake::{Direction::{self, *}, Snake};
use crate::Coords;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Running,
    Lost,
    /// The snake covers every cell, there is nowhere left to put an apple.
    Won,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickResult {
    /// `old_tail` is `None` when the snake grew this tick.
    Moved { new_head: Coords, old_head: Coords, old_tail: Option<Coords> },
    Crashed { at: Coords },
    BoardFull,
    /// The game had already ended, nothing happened.
    Over,
}

/// Owns the board and the snake and advances them one tick at a time.
pub struct Engine<R: Rng> {
    grid: Grid,
    snake: Snake,
    direction: Direction,
    pending: Option<Direction>,
    state: GameState,
    apple: Option<Coords>,
    spawner: AppleSpawner<R>,
    initial_length: usize,
}

impl<R: Rng> Engine<R> {
    pub fn new(config: &GameConfig, rng: R) -> Self {
        let snake = Snake::new(config.start, config.initial_length, config.bounds());
        Self::with_snake(config, snake, config.heading, rng)
    }

    /// Starts a game from an arbitrary snake, heading in `direction`.
    pub fn with_snake(config: &GameConfig, snake: Snake, direction: Direction, rng: R) -> Self {
        debug_assert_eq!(snake.bounds(), config.bounds());

        let mut grid = Grid::new(config.width, config.height);
        for pos in snake.segments() {
            grid.set(*pos, Cell::Snake);
        }

        let mut spawner = AppleSpawner::new(rng);
        let apple = spawner.spawn(&mut grid);
        let state = if apple.is_some() { GameState::Running } else { GameState::Won };

        Engine {
            grid,
            snake,
            direction,
            pending: None,
            state,
            apple,
            spawner,
            initial_length: config.initial_length,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn apple(&self) -> Option<Coords> {
        self.apple
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Running
    }

    pub fn score(&self) -> usize {
        self.snake.len().saturating_sub(self.initial_length)
    }

    /// Buffers a turn for the next tick. A turn straight back into the neck
    /// is dropped; otherwise the latest one wins.
    pub fn steer(&mut self, direction: Direction) {
        if direction.is_opposite(self.direction) {
            debug!("ignoring reversal from {:?} to {:?}", self.direction, direction);
            return;
        }

        self.pending = Some(direction);
    }

    /// Moves the apple to `pos`. Refuses cells off the board or held by the
    /// snake.
    pub fn place_apple(&mut self, pos: Coords) -> bool {
        if !self.grid.contains(pos) || self.grid.get(pos) == Cell::Snake {
            return false;
        }

        if let Some(old) = self.apple.take() {
            self.grid.set(old, Cell::Empty);
        }
        self.grid.set(pos, Cell::Apple);
        self.apple = Some(pos);
        true
    }

    pub fn tick(&mut self) -> Result<TickResult> {
        if self.is_over() {
            return Ok(TickResult::Over);
        }

        if let Some(dir) = self.pending.take() {
            if dir != self.direction {
                debug!("turning {:?} -> {:?}", self.direction, dir);
            }
            self.direction = dir;
        }

        let old_head = self.snake.head();
        let new_head = self.snake.next_head(self.direction);
        self.grid.set(old_head, Cell::Empty);

        let grew = match self.grid.get(new_head) {
            Cell::Snake => {
                self.grid.set(old_head, Cell::Snake);
                self.state = GameState::Lost;
                info!("crashed into {:?} with score {}", new_head, self.score());
                return Ok(TickResult::Crashed { at: new_head });
            }
            Cell::Apple => {
                let extension = self.tail_extension()?;
                self.snake.grow_at(extension);
                self.apple = None;
                true
            }
            Cell::Empty => false,
        };

        self.grid.set(new_head, Cell::Snake);

        let moved = self.snake.advance(self.direction);
        debug_assert_eq!(moved.new_head, new_head);
        self.grid.set(moved.old_head, Cell::Snake);

        // A grown snake gives up the extension cell, which never reached the grid
        let old_tail = if grew {
            None
        } else {
            self.grid.set(moved.vacated, Cell::Empty);
            Some(moved.vacated)
        };

        if grew {
            self.apple = self.spawner.spawn(&mut self.grid);
            match self.apple {
                Some(apple) => info!("ate an apple at {:?}, length {}, next apple at {:?}", new_head, self.snake.len(), apple),
                None => {
                    self.state = GameState::Won;
                    info!("board filled with score {}", self.score());
                    return Ok(TickResult::BoardFull);
                }
            }
        }

        Ok(TickResult::Moved { new_head, old_head, old_tail })
    }

    ///////////////////////////////////////////////////////////////////////////

    /// Cell one step past the tail, away from the segment in front of it.
    ///
    /// The neighbour is taken from the body rather than from whichever snake
    /// cell touches the tail first, so a coiled body still grows straight
    /// back. The cell is released by the same tick's shift either way.
    fn tail_extension(&self) -> Result<Coords> {
        let bounds = self.grid.size();
        let tail = self.snake.tail();

        let before = match self.snake.before_tail() {
            Some(pos) => pos,
            None => bail!("cannot grow a snake with a single segment"),
        };

        let toward_body = [Right, Left, Up, Down].iter()
            .copied()
            .find(|dir| dir.step(tail, bounds) == before);

        match toward_body {
            Some(dir) => Ok(dir.opposite().step(tail, bounds)),
            None => bail!("snake body is broken: {:?} does not touch the tail at {:?}", before, tail),
        }
    }
}
