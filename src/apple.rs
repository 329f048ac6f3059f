use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::Coords;

/// Drops apples on random cells that are not part of the snake.
pub struct AppleSpawner<R: Rng> {
    rng: R,
}

impl<R: Rng> AppleSpawner<R> {
    pub fn new(rng: R) -> Self {
        AppleSpawner { rng }
    }

    /// Samples cells until one is not a snake segment and puts an apple
    /// there. Returns `None` when the snake covers the whole board.
    pub fn spawn(&mut self, grid: &mut Grid) -> Option<Coords> {
        if grid.count(Cell::Snake) >= grid.capacity() {
            return None;
        }

        let (width, height) = grid.size();
        loop {
            let pos = (self.rng.gen_range(0..width), self.rng.gen_range(0..height));
            if grid.get(pos) != Cell::Snake {
                grid.set(pos, Cell::Apple);
                return Some(pos);
            }
        }
    }
}
