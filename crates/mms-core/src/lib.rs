//! **mms-core** — the maze model of the micromouse navigator.
//!
//! This crate provides the foundational types shared by the search and the
//! navigator: geometry primitives, compass directions, wall bitmasks and the
//! [`Maze`] itself, which keeps per-cell wall knowledge alongside the
//! distance, traversal pointer and run length written by each search pass.

pub mod geom;
pub mod maze;
pub mod walls;

pub use geom::{Direction, Point, Range, Turn};
pub use maze::{CellId, MAX_SIDE, Maze, Trail, UNREACHED};
pub use walls::DirMask;
