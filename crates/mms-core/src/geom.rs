//! Geometry primitives: [`Point`], [`Range`], [`Direction`] and [`Turn`].
//!
//! Maze coordinates put the origin cell `(0, 0)` in the south-west corner.
//! X grows east, Y grows north.

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer cell coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin cell (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent point one step in direction `d` (may lie outside any grid).
    #[inline]
    pub fn step(self, d: Direction) -> Self {
        let o = d.offset();
        self.shift(o.x, o.y)
    }

    /// Direction of the single cardinal step from `self` to `other`, if the
    /// two points are adjacent.
    pub fn direction_to(self, other: Point) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.step(d) == other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Direction / Turn
// ---------------------------------------------------------------------------

/// A compass direction. The discriminants give the fixed enumeration order
/// used everywhere (NORTH, EAST, SOUTH, WEST), clockwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All four directions in enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position of this direction in [`Direction::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index), wrapping modulo 4.
    #[inline]
    pub const fn from_index(i: usize) -> Self {
        Self::ALL[i % 4]
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// The direction 90° clockwise.
    #[inline]
    pub const fn right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The direction 90° counter-clockwise.
    #[inline]
    pub const fn left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// The turn that rotates a mouse facing `self` to face `target`.
    #[inline]
    pub const fn turn_to(self, target: Direction) -> Turn {
        match (target.index() + 4 - self.index()) % 4 {
            0 => Turn::None,
            1 => Turn::Right,
            2 => Turn::Around,
            _ => Turn::Left,
        }
    }

    /// Unit offset of a single step (north is +y).
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Self::North => Point::new(0, 1),
            Self::East => Point::new(1, 0),
            Self::South => Point::new(0, -1),
            Self::West => Point::new(-1, 0),
        }
    }

    /// Single-letter label: `n`, `e`, `s`, `w`.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::North => 'n',
            Self::East => 'e',
            Self::South => 's',
            Self::West => 'w',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(s)
    }
}

/// A rotation relative to the current heading.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    None,
    Right,
    Around,
    Left,
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// An axis-aligned block of cells: `min` inclusive, `max` exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The block spanned by two corners, in either order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Just the cell `p`.
    pub fn single(p: Point) -> Self {
        Self {
            min: p,
            max: p.shift(1, 1),
        }
    }

    /// The central block of a `width` x `height` maze: one or two columns
    /// and one or two rows, depending on parity.
    pub fn center_of(width: i32, height: i32) -> Self {
        Self::new(
            (width - 1) / 2,
            (height - 1) / 2,
            width / 2 + 1,
            height / 2 + 1,
        )
    }

    pub fn is_empty(self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Whether every cell of `self` lies in `outer`. True for an empty block.
    pub fn in_range(self, outer: Range) -> bool {
        self.is_empty()
            || (outer.min.x <= self.min.x
                && outer.min.y <= self.min.y
                && self.max.x <= outer.max.x
                && self.max.y <= outer.max.y)
    }

    /// Cells row by row, starting at `min`.
    pub fn iter(self) -> Cells {
        Cells { block: self, next: 0 }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

/// Iterator over the cells of a [`Range`].
#[derive(Clone, Debug)]
pub struct Cells {
    block: Range,
    next: i32,
}

impl Iterator for Cells {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.block.is_empty() {
            return None;
        }
        let cols = self.block.max.x - self.block.min.x;
        let (row, col) = (self.next / cols, self.next % cols);
        if self.block.min.y + row >= self.block.max.y {
            return None;
        }
        self.next += 1;
        Some(self.block.min.shift(col, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turned(d: Direction, t: Turn) -> Direction {
        match t {
            Turn::None => d,
            Turn::Right => d.right(),
            Turn::Around => d.opposite(),
            Turn::Left => d.left(),
        }
    }

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn left_and_right_rotate_clockwise_order() {
        assert_eq!(Direction::North.right(), Direction::East);
        assert_eq!(Direction::West.right(), Direction::North);
        assert_eq!(Direction::North.left(), Direction::West);
        assert_eq!(Direction::East.left(), Direction::North);
    }

    #[test]
    fn turn_to_covers_all_relative_turns() {
        let h = Direction::East;
        assert_eq!(h.turn_to(Direction::East), Turn::None);
        assert_eq!(h.turn_to(Direction::South), Turn::Right);
        assert_eq!(h.turn_to(Direction::West), Turn::Around);
        assert_eq!(h.turn_to(Direction::North), Turn::Left);
        for a in Direction::ALL {
            for b in Direction::ALL {
                assert_eq!(turned(a, a.turn_to(b)), b);
            }
        }
    }

    #[test]
    fn north_grows_y() {
        assert_eq!(Point::ZERO.step(Direction::North), Point::new(0, 1));
        assert_eq!(Point::new(2, 2).step(Direction::West), Point::new(1, 2));
        assert_eq!(
            Point::new(1, 1).direction_to(Point::new(1, 0)),
            Some(Direction::South)
        );
        assert_eq!(Point::new(1, 1).direction_to(Point::new(2, 2)), None);
    }

    #[test]
    fn center_block_depends_on_parity() {
        let c16 = Range::center_of(16, 16);
        assert_eq!(c16, Range::new(7, 7, 9, 9));
        let c4 = Range::center_of(4, 4);
        assert_eq!(c4.iter().collect::<Vec<_>>(), vec![
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(1, 2),
            Point::new(2, 2),
        ]);
        let c5 = Range::center_of(5, 3);
        assert_eq!(c5, Range::new(2, 1, 3, 2));
        assert_eq!(Range::center_of(1, 1), Range::single(Point::ZERO));
    }

    #[test]
    fn range_membership() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r, Range::new(0, 0, 3, 2));
        assert_eq!(r.iter().count(), 6);
        assert_eq!(r.iter().last(), Some(Point::new(2, 1)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 1)));
        assert!(Range::new(1, 1, 1, 5).is_empty());
        assert_eq!(Range::new(1, 1, 1, 5).iter().next(), None);
        assert!(Range::new(1, 1, 2, 2).in_range(r));
        assert!(!Range::new(2, 1, 4, 2).in_range(r));
        assert_eq!(Range::single(Point::new(1, 1)).to_string(), "(1, 1)..(2, 2)");
    }
}
