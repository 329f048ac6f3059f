//! Snake on a wrap-around grid, played in the terminal.
//!
//! The simulation (`grid`, `snake`, `apple`, `engine`) has no I/O of its own;
//! `term`, `input`, `render` and `game` drive it from a real terminal.

pub mod apple;
pub mod config;
pub mod engine;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod snake;
pub mod term;

pub type TermInt = u16;
pub type Coords = (u16, u16);
