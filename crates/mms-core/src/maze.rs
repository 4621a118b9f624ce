//! The [`Maze`] model: per-cell wall knowledge plus the scratch state the
//! shortest-path search leaves behind.
//!
//! Cells are stored in a flat row-major vector and addressed by [`CellId`].
//! Wall knowledge is two [`DirMask`]s per cell (known, present); a wall's
//! presence bit is meaningful only where its known bit is set.

use crate::geom::{Direction, Point, Range};
use crate::walls::DirMask;

/// Largest supported maze side, in cells.
pub const MAX_SIDE: i32 = 16;

/// Distance sentinel meaning "infinite / not reached".
pub const UNREACHED: u16 = u16::MAX;

/// Flat index of a cell inside a [`Maze`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub u16);

impl CellId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Traversal pointer of a cell.
///
/// The search links every reached cell back toward the cell it was reached
/// from ([`Trail::Back`]). Once a pass finishes, the chain from the goal is
/// reversed in place so that it reads [`Trail::Forward`] from the start cell
/// to the goal cell. A cell never holds both meanings at once.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Trail {
    /// No edge recorded.
    #[default]
    None,
    /// Direction of the neighbour this cell was reached from.
    Back(Direction),
    /// Direction to move from this cell toward the goal.
    Forward(Direction),
}

#[derive(Clone, Debug)]
struct CellState {
    known: DirMask,
    walls: DirMask,
    distance: u16,
    discovered: bool,
    trail: Trail,
    run_length: u8,
}

impl Default for CellState {
    fn default() -> Self {
        Self {
            known: DirMask::NONE,
            walls: DirMask::NONE,
            distance: UNREACHED,
            discovered: false,
            trail: Trail::None,
            run_length: 0,
        }
    }
}

/// A `width` x `height` maze of cells.
#[derive(Clone, Debug)]
pub struct Maze {
    width: i32,
    height: i32,
    cells: Vec<CellState>,
}

impl Maze {
    /// Create a maze with every wall unknown.
    ///
    /// Both sides must lie in `[1, MAX_SIDE]`; callers validate
    /// configuration before getting here.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            (1..=MAX_SIDE).contains(&width) && (1..=MAX_SIDE).contains(&height),
            "maze dimensions {width}x{height} outside [1, {MAX_SIDE}]"
        );
        Self {
            width,
            height,
            cells: vec![CellState::default(); (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The whole maze as a range.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a point to a cell id. Returns `None` if out of range.
    #[inline]
    pub fn cell_at(&self, p: Point) -> Option<CellId> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some(CellId((p.y * self.width + p.x) as u16))
    }

    /// Cell id of `(x, y)`, which must be inside the maze.
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> CellId {
        match self.cell_at(Point::new(x, y)) {
            Some(id) => id,
            None => panic!("cell ({x}, {y}) outside {}x{} maze", self.width, self.height),
        }
    }

    /// Convert a cell id back to a point.
    #[inline]
    pub fn point(&self, id: CellId) -> Point {
        let i = id.0 as i32;
        Point::new(i % self.width, i / self.width)
    }

    /// Every cell id, row-major from the origin.
    pub fn ids(&self) -> impl Iterator<Item = CellId> + use<> {
        (0..self.cells.len() as u16).map(CellId)
    }

    /// Whether `id` has a neighbour in direction `d` (false at the edge).
    #[inline]
    pub fn has_neighbor(&self, id: CellId, d: Direction) -> bool {
        self.bounds().contains(self.point(id).step(d))
    }

    /// The neighbour of `id` in direction `d`.
    ///
    /// Asking across the maze edge is a programming error.
    #[inline]
    pub fn neighbor(&self, id: CellId, d: Direction) -> CellId {
        let p = self.point(id);
        assert!(
            self.has_neighbor(id, d),
            "no neighbour {d} of cell {p} in {}x{} maze",
            self.width,
            self.height
        );
        let n = p.step(d);
        CellId((n.y * self.width + n.x) as u16)
    }

    // -----------------------------------------------------------------------
    // Walls
    // -----------------------------------------------------------------------

    /// Whether the wall on side `d` of `id` is known.
    #[inline]
    pub fn is_known(&self, id: CellId, d: Direction) -> bool {
        self.cells[id.index()].known.contains(d)
    }

    /// Whether the wall on side `d` of `id` is known to be present.
    #[inline]
    pub fn is_wall(&self, id: CellId, d: Direction) -> bool {
        let c = &self.cells[id.index()];
        c.known.contains(d) && c.walls.contains(d)
    }

    /// `Some(present)` if the wall is known, `None` otherwise.
    #[inline]
    pub fn wall(&self, id: CellId, d: Direction) -> Option<bool> {
        let c = &self.cells[id.index()];
        c.known.contains(d).then(|| c.walls.contains(d))
    }

    /// Mask of the known sides of `id`.
    #[inline]
    pub fn known_sides(&self, id: CellId) -> DirMask {
        self.cells[id.index()].known
    }

    /// Record the wall on side `d` of `id` as known with the given presence.
    ///
    /// With `mirror`, the opposite side of the neighbour (if any) gets the
    /// same value so that both views of the wall agree.
    pub fn set_wall(&mut self, id: CellId, d: Direction, present: bool, mirror: bool) {
        let c = &mut self.cells[id.index()];
        c.known.set(d, true);
        c.walls.set(d, present);
        if mirror && self.has_neighbor(id, d) {
            let n = self.neighbor(id, d);
            self.set_wall(n, d.opposite(), present, false);
        }
    }

    /// Forget the wall on side `d` of `id` (and its mirror, with `mirror`).
    pub fn forget_wall(&mut self, id: CellId, d: Direction, mirror: bool) {
        let c = &mut self.cells[id.index()];
        c.known.set(d, false);
        c.walls.set(d, false);
        if mirror && self.has_neighbor(id, d) {
            let n = self.neighbor(id, d);
            self.forget_wall(n, d.opposite(), false);
        }
    }

    /// Whether the wall on side `d` of `id` is part of the outer boundary.
    #[inline]
    pub fn is_perimeter(&self, id: CellId, d: Direction) -> bool {
        !self.has_neighbor(id, d)
    }

    /// Mark every outer boundary wall known and present.
    pub fn init_perimeter(&mut self) {
        for id in self.ids() {
            for d in Direction::ALL {
                if self.is_perimeter(id, d) {
                    self.set_wall(id, d, true, true);
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Search state
    // -----------------------------------------------------------------------

    #[inline]
    pub fn distance(&self, id: CellId) -> u16 {
        self.cells[id.index()].distance
    }

    #[inline]
    pub fn set_distance(&mut self, id: CellId, distance: u16) {
        self.cells[id.index()].distance = distance;
    }

    /// Whether `id` was reached by the current search pass.
    #[inline]
    pub fn is_discovered(&self, id: CellId) -> bool {
        self.cells[id.index()].discovered
    }

    #[inline]
    pub fn set_discovered(&mut self, id: CellId, discovered: bool) {
        self.cells[id.index()].discovered = discovered;
    }

    #[inline]
    pub fn trail(&self, id: CellId) -> Trail {
        self.cells[id.index()].trail
    }

    #[inline]
    pub fn set_trail(&mut self, id: CellId, trail: Trail) {
        self.cells[id.index()].trail = trail;
    }

    /// Length of the straight run that ends at `id`.
    #[inline]
    pub fn run_length(&self, id: CellId) -> u8 {
        self.cells[id.index()].run_length
    }

    #[inline]
    pub fn set_run_length(&mut self, id: CellId, len: u8) {
        self.cells[id.index()].run_length = len;
    }

    /// Clear the pass-scoped state (discovered flag and traversal pointer)
    /// of every cell. Distances and run lengths are left for the caller.
    pub fn clear_search_state(&mut self) {
        for c in &mut self.cells {
            c.discovered = false;
            c.trail = Trail::None;
        }
    }
}
