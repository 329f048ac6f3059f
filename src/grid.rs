use crate::{Coords, TermInt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Snake,
    Apple,
}

/// Row-major board of cells. Coordinates handed to it are expected to be
/// already wrapped into range.
#[derive(Debug, Clone)]
pub struct Grid {
    width: TermInt,
    height: TermInt,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        let cells = vec![Cell::Empty; width as usize * height as usize];
        Grid { width, height, cells }
    }

    pub fn size(&self) -> Coords {
        (self.width, self.height)
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Coords) -> bool {
        pos.0 < self.width && pos.1 < self.height
    }

    pub fn get(&self, pos: Coords) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Coords, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Empty);
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, pos: Coords) -> usize {
        debug_assert!(self.contains(pos), "{:?} is off the board", pos);
        self.width as usize * pos.1 as usize + pos.0 as usize
    }
}
