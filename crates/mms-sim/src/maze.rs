//! [`SimMaze`]: the true wall layout the simulated mouse runs in.
//!
//! Text format, north row first; every cell is four characters wide and
//! two lines tall:
//!
//! ```text
//! +---+---+
//! |       |
//! +   +---+
//! |   |   |
//! +---+---+
//! ```
//!
//! Horizontal walls are `---` (open: three spaces), vertical walls `|`
//! (open: a space). The perimeter must be closed. Whatever sits inside a
//! cell is ignored, so rendered output with a mouse marker parses back.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use mms_core::{DirMask, Direction, MAX_SIDE, Point, Range};
use mms_nav::Pose;

use crate::error::{Result, SimError};

/// A fully known maze. Walls are stored on both sides of every edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimMaze {
    width: i32,
    height: i32,
    walls: Vec<DirMask>,
}

impl SimMaze {
    fn blank(width: i32, height: i32, fill: DirMask) -> Self {
        assert!(
            (1..=MAX_SIDE).contains(&width) && (1..=MAX_SIDE).contains(&height),
            "maze dimensions {width}x{height} outside [1, {MAX_SIDE}]"
        );
        Self {
            width,
            height,
            walls: vec![fill; (width * height) as usize],
        }
    }

    /// Only the perimeter walls.
    pub fn open(width: i32, height: i32) -> Self {
        let mut maze = Self::blank(width, height, DirMask::NONE);
        for p in maze.bounds() {
            for d in Direction::ALL {
                if !maze.bounds().contains(p.step(d)) {
                    let i = maze.index(p);
                    maze.walls[i].set(d, true);
                }
            }
        }
        maze
    }

    /// Every wall present.
    pub fn closed(width: i32, height: i32) -> Self {
        Self::blank(width, height, DirMask::ALL)
    }

    /// Read a maze from a text file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        fs::read_to_string(path)?.parse()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Whether a wall separates `p` from its neighbour in direction `d`.
    /// Anything leaving the maze counts as a wall.
    pub fn has_wall(&self, p: Point, d: Direction) -> bool {
        let bounds = self.bounds();
        if !bounds.contains(p) || !bounds.contains(p.step(d)) {
            return true;
        }
        self.walls[self.index(p)].contains(d)
    }

    /// Set or remove the wall on side `d` of `p`, on both sides of the
    /// edge. Perimeter walls cannot be removed; such calls are ignored.
    pub fn set_wall(&mut self, p: Point, d: Direction, present: bool) {
        assert!(self.bounds().contains(p), "cell {p} outside the maze");
        let n = p.step(d);
        if !self.bounds().contains(n) {
            return;
        }
        let (i, j) = (self.index(p), self.index(n));
        self.walls[i].set(d, present);
        self.walls[j].set(d.opposite(), present);
    }

    /// Remove every wall between two cells of `region`.
    pub fn open_region(&mut self, region: Range) {
        for p in region {
            for d in [Direction::East, Direction::North] {
                if region.contains(p.step(d)) && self.bounds().contains(p) {
                    self.set_wall(p, d, false);
                }
            }
        }
    }

    /// Number of interior edges without a wall.
    pub fn open_edges(&self) -> usize {
        self.bounds()
            .iter()
            .map(|p| {
                [Direction::East, Direction::North]
                    .into_iter()
                    .filter(|&d| !self.has_wall(p, d))
                    .count()
            })
            .sum()
    }

    /// Text rendering, with the mouse drawn as an arrow if given.
    pub fn render(&self, mouse: Option<Pose>) -> String {
        let mut out = String::new();
        for y in (0..self.height).rev() {
            self.render_horizontal(&mut out, y, Direction::North);
            for x in 0..self.width {
                let p = Point::new(x, y);
                out.push(if self.has_wall(p, Direction::West) { '|' } else { ' ' });
                let marker = match mouse {
                    Some(m) if m.pos == p => arrow(m.heading),
                    _ => ' ',
                };
                out.push(' ');
                out.push(marker);
                out.push(' ');
            }
            out.push_str("|\n");
        }
        self.render_horizontal(&mut out, 0, Direction::South);
        out
    }

    fn render_horizontal(&self, out: &mut String, y: i32, d: Direction) {
        out.push('+');
        for x in 0..self.width {
            out.push_str(if self.has_wall(Point::new(x, y), d) { "---" } else { "   " });
            out.push('+');
        }
        out.push('\n');
    }
}

fn arrow(heading: Direction) -> char {
    match heading {
        Direction::North => '^',
        Direction::East => '>',
        Direction::South => 'v',
        Direction::West => '<',
    }
}

impl fmt::Display for SimMaze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

impl FromStr for SimMaze {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s.lines().map(str::trim_end).collect();
        let first = lines
            .iter()
            .position(|l| !l.is_empty())
            .ok_or_else(|| SimError::parse(1, "empty maze"))?;
        let last = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(first);
        let body = &lines[first..=last];
        let lineno = |i: usize| first + i + 1;

        let top_len = body[0].chars().count();
        if top_len < 5 || (top_len - 1) % 4 != 0 {
            return Err(SimError::parse(lineno(0), "expected a row of +---+ segments"));
        }
        if body.len() < 3 || body.len() % 2 == 0 {
            return Err(SimError::parse(
                lineno(body.len() - 1),
                "expected wall rows and cell rows to alternate, starting and ending with a wall row",
            ));
        }
        let width = ((top_len - 1) / 4) as i32;
        let height = ((body.len() - 1) / 2) as i32;
        if width > MAX_SIDE || height > MAX_SIDE {
            return Err(SimError::parse(
                lineno(0),
                format!("maze {width}x{height} larger than {MAX_SIDE}x{MAX_SIDE}"),
            ));
        }

        let mut maze = SimMaze::open(width, height);
        for (i, line) in body.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() > top_len {
                return Err(SimError::parse(lineno(i), "line longer than the top wall row"));
            }
            let at = |col: usize| chars.get(col).copied().unwrap_or(' ');
            let k = (i / 2) as i32;

            if i % 2 == 0 {
                // Wall row above cell row `height - 1 - k`.
                for x in 0..width {
                    let col = 4 * x as usize;
                    if at(col) != '+' {
                        return Err(SimError::parse(
                            lineno(i),
                            format!("expected '+' at column {}", col + 1),
                        ));
                    }
                    let segment: String = (1..4).map(|o| at(col + o)).collect();
                    let present = match segment.as_str() {
                        "---" => true,
                        "   " => false,
                        _ => {
                            return Err(SimError::parse(
                                lineno(i),
                                format!("bad wall segment {segment:?} at column {}", col + 2),
                            ));
                        }
                    };
                    if k == 0 || k == height {
                        if !present {
                            return Err(SimError::parse(lineno(i), "perimeter must be closed"));
                        }
                    } else {
                        maze.set_wall(Point::new(x, height - 1 - k), Direction::North, present);
                    }
                }
                if at(4 * width as usize) != '+' {
                    return Err(SimError::parse(lineno(i), "wall row must end with '+'"));
                }
            } else {
                let y = height - 1 - k;
                for x in 0..=width {
                    let col = 4 * x as usize;
                    let present = match at(col) {
                        '|' => true,
                        ' ' => false,
                        c => {
                            return Err(SimError::parse(
                                lineno(i),
                                format!("unexpected {c:?} at column {}", col + 1),
                            ));
                        }
                    };
                    if x == 0 || x == width {
                        if !present {
                            return Err(SimError::parse(lineno(i), "perimeter must be closed"));
                        }
                    } else {
                        maze.set_wall(Point::new(x - 1, y), Direction::East, present);
                    }
                }
            }
        }
        Ok(maze)
    }
}
