//! The [`Boundary`] trait: everything the navigator asks of the robot or
//! simulator it drives.
//!
//! Sensing and motion are relative to the mouse's own heading. Calls are
//! synchronous and assumed to succeed.

use mms_core::{Direction, Point};

/// Display state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Origin and center cells.
    Goal,
    /// Planned path through known walls.
    KnownPath,
    /// Planned path beyond the first unknown wall.
    IntendedPath,
    /// Cell expanded by the search.
    Visited,
}

impl Color {
    /// Single-letter code understood by maze simulators.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Goal => 'G',
            Self::KnownPath => 'V',
            Self::IntendedPath => 'B',
            Self::Visited => 'Y',
        }
    }
}

/// A wall sensor, relative to the heading.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Front,
    Right,
}

impl Side {
    /// The sensors in reading order.
    pub const ALL: [Side; 3] = [Side::Left, Side::Front, Side::Right];

    /// Absolute direction this sensor looks at for a mouse facing `heading`.
    #[inline]
    pub const fn direction(self, heading: Direction) -> Direction {
        match self {
            Self::Left => heading.left(),
            Self::Front => heading,
            Self::Right => heading.right(),
        }
    }
}

/// Sensor, actuator and display interface consumed by the navigator.
pub trait Boundary {
    /// Maze width reported by the robot or simulator.
    fn maze_width(&self) -> i32;

    /// Maze height reported by the robot or simulator.
    fn maze_height(&self) -> i32;

    fn wall_front(&mut self) -> bool;
    fn wall_left(&mut self) -> bool;
    fn wall_right(&mut self) -> bool;

    /// Read one of the three wall sensors.
    fn wall(&mut self, side: Side) -> bool {
        match side {
            Side::Left => self.wall_left(),
            Side::Front => self.wall_front(),
            Side::Right => self.wall_right(),
        }
    }

    /// Whether a reset signal is pending.
    fn was_reset(&mut self) -> bool;

    /// Acknowledge a serviced reset signal.
    fn ack_reset(&mut self);

    /// Move one cell forward.
    fn move_forward(&mut self);

    /// Turn 90° counter-clockwise in place.
    fn turn_left(&mut self);

    /// Turn 90° clockwise in place.
    fn turn_right(&mut self);

    fn set_color(&mut self, _p: Point, _color: Color) {}

    fn set_text(&mut self, _p: Point, _text: &str) {}

    /// Show a wall on side `d` of the cell at `p`.
    fn set_wall(&mut self, _p: Point, _d: Direction) {}

    /// Remove a shown wall.
    fn clear_wall(&mut self, _p: Point, _d: Direction) {}

    /// Clear every cell color.
    fn clear_all_color(&mut self) {}
}
