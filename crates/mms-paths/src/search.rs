//! Whole-maze shortest-path search from the mouse to a goal region.
//!
//! Every pass recomputes distances from scratch over the entire maze under
//! the walls known so far. Unknown walls count as open. The pass leaves a
//! [`Trail::Forward`] chain from the start cell to the closest goal cell.

use mms_core::{CellId, Direction, Maze, Point, Range, Trail, UNREACHED};

use crate::cost::CostModel;
use crate::queue::CellQueue;
use crate::traits::SearchObserver;

/// Parameters of one search pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Query {
    /// Cell the mouse stands on.
    pub start: CellId,
    /// Direction the mouse faces; the cell behind it counts as where it
    /// came from, so the first edge can continue a straight run.
    pub heading: Direction,
    /// Goal region.
    pub goal: Range,
    pub cost: CostModel,
}

/// Owns the priority queue reused by every pass.
#[derive(Clone, Debug)]
pub struct Planner {
    queue: CellQueue,
    pops: usize,
}

impl Planner {
    /// Create a planner for a maze with `cells` cells.
    pub fn new(cells: usize) -> Self {
        Self {
            queue: CellQueue::new(cells),
            pops: 0,
        }
    }

    /// Number of cells expanded by the last pass.
    #[inline]
    pub fn last_pops(&self) -> usize {
        self.pops
    }

    /// Cells still queued (always zero between passes).
    #[inline]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Run one search pass.
    ///
    /// Returns the cell at the head of the forward chain. That is
    /// `query.start` exactly when the goal region is reachable from the
    /// start under the known walls; otherwise it is the (unreached) goal
    /// cell and no chain is written.
    pub fn search<O: SearchObserver>(
        &mut self,
        maze: &mut Maze,
        query: &Query,
        observer: &mut O,
    ) -> CellId {
        assert!(
            self.queue.is_empty(),
            "search started with {} cells still queued",
            self.queue.len()
        );
        let start = query.start;
        let goal = query.goal;

        maze.clear_search_state();

        // Goal cells may hold stale distances from an earlier pass.
        for p in goal {
            if let Some(id) = maze.cell_at(p) {
                maze.set_distance(id, UNREACHED);
                observer.distance_changed(p, UNREACHED);
            }
        }

        maze.set_discovered(start, true);
        maze.set_distance(start, 0);
        observer.distance_changed(maze.point(start), 0);
        maze.set_trail(start, Trail::Back(query.heading.opposite()));

        self.pops = 0;
        self.queue.push(start, maze);
        let mut found = false;
        while let Some(cell) = self.queue.pop_min(maze) {
            self.pops += 1;
            observer.visited(maze.point(cell));
            if cell == closest_goal(maze, goal) {
                found = true;
                self.queue.clear();
                break;
            }
            for d in Direction::ALL {
                if !maze.is_wall(cell, d) {
                    self.relax(maze, cell, d, query.cost, observer);
                }
            }
        }

        let target = closest_goal(maze, goal);
        log::trace!(
            "search {} -> {}: {} pops, goal {} at {}",
            maze.point(start),
            goal,
            self.pops,
            maze.point(target),
            maze.distance(target)
        );
        if !found {
            return target;
        }
        reverse_chain(maze, target, start)
    }

    fn relax<O: SearchObserver>(
        &mut self,
        maze: &mut Maze,
        cell: CellId,
        d: Direction,
        cost: CostModel,
        observer: &mut O,
    ) {
        let neighbor = maze.neighbor(cell, d);
        let back = d.opposite();
        let straight = maze.trail(cell) == Trail::Back(back);
        let run = maze.run_length(cell);
        let candidate = maze
            .distance(cell)
            .saturating_add(cost.edge_cost(straight, run));

        let discovered = maze.is_discovered(neighbor);
        if discovered && candidate >= maze.distance(neighbor) {
            return;
        }
        maze.set_distance(neighbor, candidate);
        observer.distance_changed(maze.point(neighbor), candidate);
        maze.set_trail(neighbor, Trail::Back(back));
        maze.set_run_length(neighbor, if straight { run.saturating_add(1) } else { 1 });

        if discovered {
            self.queue.decrease_key(neighbor, maze);
        } else {
            maze.set_discovered(neighbor, true);
            self.queue.push(neighbor, maze);
        }
    }
}

/// The goal cell with the smallest distance; ties go to the first cell in
/// row-major order.
pub fn closest_goal(maze: &Maze, goal: Range) -> CellId {
    let mut best: Option<CellId> = None;
    for p in goal {
        let Some(id) = maze.cell_at(p) else {
            continue;
        };
        if best.is_none_or(|b| maze.distance(id) < maze.distance(b)) {
            best = Some(id);
        }
    }
    match best {
        Some(id) => id,
        None => panic!("goal region {goal} has no cell inside the maze"),
    }
}

/// Flip the [`Trail::Back`] chain that runs from `goal` to `start` into a
/// [`Trail::Forward`] chain from `start` to `goal`. Returns `start`.
///
/// The goal cell ends up with [`Trail::None`]: nothing leaves it.
pub fn reverse_chain(maze: &mut Maze, goal: CellId, start: CellId) -> CellId {
    let mut current = goal;
    let mut forward: Option<Direction> = None;
    for _ in 0..maze.len() {
        let back = match maze.trail(current) {
            Trail::Back(d) => d,
            other => panic!(
                "chain from {} broken at {}: {other:?}",
                maze.point(goal),
                maze.point(current)
            ),
        };
        maze.set_trail(current, forward.map_or(Trail::None, Trail::Forward));
        if current == start {
            return start;
        }
        forward = Some(back.opposite());
        current = maze.neighbor(current, back);
    }
    panic!("chain from {} longer than the maze", maze.point(goal));
}

/// Iterator over the forward chain starting at `start` (inclusive).
pub fn forward_chain(maze: &Maze, start: CellId) -> ForwardChain<'_> {
    ForwardChain {
        maze,
        next: Some(start),
        left: maze.len(),
    }
}

/// See [`forward_chain`].
pub struct ForwardChain<'a> {
    maze: &'a Maze,
    next: Option<CellId>,
    left: usize,
}

impl Iterator for ForwardChain<'_> {
    type Item = CellId;

    fn next(&mut self) -> Option<CellId> {
        let cur = self.next.take()?;
        if self.left == 0 {
            return None;
        }
        self.left -= 1;
        if let Trail::Forward(d) = self.maze.trail(cur) {
            self.next = Some(self.maze.neighbor(cur, d));
        }
        Some(cur)
    }
}

/// Points along the forward chain from `start`.
pub fn path_points(maze: &Maze, start: CellId) -> Vec<Point> {
    forward_chain(maze, start).map(|c| maze.point(c)).collect()
}
