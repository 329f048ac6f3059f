use std::collections::VecDeque;

use crate::Coords;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Moves `pos` one cell, re-entering from the opposite edge of a board of
    /// size `bounds` when it falls off.
    pub fn step(self, pos: Coords, bounds: Coords) -> Coords {
        let (x, y) = pos;
        let (w, h) = bounds;

        match self {
            Up => (x, if y == 0 { h - 1 } else { y - 1 }),
            Down => (x, (y + 1) % h),
            Left => (if x == 0 { w - 1 } else { x - 1 }, y),
            Right => ((x + 1) % w, y),
        }
    }
}

/// Outcome of shifting the body one cell forward.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Advance {
    pub new_head: Coords,
    pub old_head: Coords,
    /// Coordinate given up by the last segment.
    pub vacated: Coords,
}

/// Body segments, head first.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Coords>,
    bounds: Coords,
}

impl Snake {
    /// Lays the body out horizontally, head at `start` and each further
    /// segment one cell to its left.
    pub fn new(start: Coords, size: usize, bounds: Coords) -> Self {
        let body = std::iter::successors(Some(start), |pos| Some(Left.step(*pos, bounds)))
            .take(size)
            .collect();

        Snake { body, bounds }
    }

    /// Builds a snake from explicit segments, head first.
    pub fn from_segments<I: IntoIterator<Item = Coords>>(segments: I, bounds: Coords) -> Self {
        Snake { body: segments.into_iter().collect(), bounds }
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn tail(&self) -> Coords {
        self.body[self.body.len() - 1]
    }

    /// Segment directly in front of the tail, if the snake is longer than one.
    pub fn before_tail(&self) -> Option<Coords> {
        self.body.len().checked_sub(2).map(|i| self.body[i])
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Coords> {
        self.body.iter()
    }

    pub fn contains(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    pub fn bounds(&self) -> Coords {
        self.bounds
    }

    pub fn next_head(&self, direction: Direction) -> Coords {
        direction.step(self.head(), self.bounds)
    }

    /// Moves the head one cell; every other segment takes the place its
    /// predecessor held before the move.
    pub fn advance(&mut self, direction: Direction) -> Advance {
        let old_head = self.head();
        let new_head = direction.step(old_head, self.bounds);

        self.body.push_front(new_head);
        let vacated = self.body.pop_back().unwrap_or(old_head);

        Advance { new_head, old_head, vacated }
    }

    pub fn grow_at(&mut self, pos: Coords) {
        self.body.push_back(pos);
    }
}
