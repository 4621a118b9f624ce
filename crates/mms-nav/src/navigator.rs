//! The [`Navigator`]: the sense, replan, move loop of the micromouse.

use std::thread;
use std::time::Duration;

use mms_core::{CellId, DirMask, Direction, Maze, Point, Range, Trail, Turn};
use mms_paths::{Planner, Query, SearchObserver, forward_chain, path_points};

use crate::boundary::{Boundary, Color, Side};
use crate::config::NavConfig;
use crate::error::NavError;
use crate::history::DiscoveryLog;

/// Which goal region the mouse is heading for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Center,
    Origin,
    /// Terminal: the active goal is unreachable under the known walls.
    GiveUp,
}

/// Position and heading of the mouse.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub pos: Point,
    pub heading: Direction,
}

impl Pose {
    /// At the origin facing `heading`.
    pub const fn start(heading: Direction) -> Self {
        Self {
            pos: Point::ZERO,
            heading,
        }
    }
}

/// Counters accumulated over the navigator's lifetime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    pub steps: usize,
    pub hops: usize,
    pub center_arrivals: usize,
    pub origin_arrivals: usize,
    pub resets: usize,
}

/// Mirrors search progress onto the boundary's display.
struct Telemetry<'a, B> {
    boundary: &'a mut B,
    color_visited: bool,
    delay: Duration,
}

impl<B: Boundary> SearchObserver for Telemetry<'_, B> {
    fn distance_changed(&mut self, p: Point, distance: u16) {
        self.boundary.set_text(p, &distance.to_string());
    }

    fn visited(&mut self, p: Point) {
        if self.color_visited {
            self.boundary.set_color(p, Color::Visited);
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
    }
}

/// Drives a mouse through an initially unknown maze.
///
/// Every step senses the walls around the current cell, recomputes the
/// best path to the active goal over the whole maze, and follows the part
/// of that path that runs through known walls. Goals alternate between the
/// center region and the origin until the goal becomes unreachable.
pub struct Navigator<B> {
    config: NavConfig,
    center: Range,
    boundary: B,
    maze: Maze,
    planner: Planner,
    history: DiscoveryLog,
    pose: Pose,
    mode: Mode,
    stats: RunStats,
}

impl<B: Boundary> Navigator<B> {
    /// Validate `config` and initialize a navigator driving `boundary`.
    ///
    /// The maze starts with only its perimeter walls known, and the mouse
    /// at the origin facing the configured heading, heading for the center.
    pub fn new(config: NavConfig, boundary: B) -> Result<Self, NavError> {
        if let Err(e) = config.validate() {
            log::error!("{e}");
            return Err(e);
        }
        let (bw, bh) = (boundary.maze_width(), boundary.maze_height());
        if (bw, bh) != (config.width, config.height) {
            log::warn!(
                "configured maze is {}x{} but the boundary reports {bw}x{bh}; using {}x{}",
                config.width,
                config.height,
                config.width,
                config.height
            );
        }

        let maze = Maze::new(config.width, config.height);
        let mut nav = Self {
            center: config.center(),
            planner: Planner::new(maze.len()),
            pose: Pose::start(config.initial_heading),
            config,
            boundary,
            maze,
            history: DiscoveryLog::new(),
            mode: Mode::Center,
            stats: RunStats::default(),
        };
        nav.init_perimeter();
        Ok(nav)
    }

    fn init_perimeter(&mut self) {
        self.maze.init_perimeter();
        for id in self.maze.ids() {
            for d in Direction::ALL {
                if self.maze.is_perimeter(id, d) {
                    self.boundary.set_wall(self.maze.point(id), d);
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn history(&self) -> &DiscoveryLog {
        &self.history
    }

    #[inline]
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// The center goal region.
    #[inline]
    pub fn center(&self) -> Range {
        self.center
    }

    #[inline]
    pub fn boundary(&self) -> &B {
        &self.boundary
    }

    #[inline]
    pub fn boundary_mut(&mut self) -> &mut B {
        &mut self.boundary
    }

    pub fn into_boundary(self) -> B {
        self.boundary
    }

    /// The cell the mouse stands on.
    #[inline]
    pub fn current_cell(&self) -> CellId {
        self.maze.cell(self.pose.pos.x, self.pose.pos.y)
    }

    /// The active goal region, `None` after giving up.
    pub fn goal(&self) -> Option<Range> {
        match self.mode {
            Mode::Center => Some(self.center),
            Mode::Origin => Some(Range::single(Point::ZERO)),
            Mode::GiveUp => None,
        }
    }

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------

    /// Navigate until the goal becomes unreachable.
    ///
    /// Only returns with [`NavError::Unsolvable`]; a solvable maze keeps the
    /// mouse shuttling between center and origin forever.
    pub fn run(&mut self) -> Result<RunStats, NavError> {
        self.run_limited(None)
    }

    /// Like [`run`](Self::run), but returns the accumulated stats after at
    /// most `max_steps` steps.
    pub fn run_limited(&mut self, max_steps: Option<usize>) -> Result<RunStats, NavError> {
        let mut steps = 0;
        while max_steps.is_none_or(|max| steps < max) {
            self.refresh_display();
            if self.boundary.was_reset() {
                self.reset();
            }
            self.step();
            steps += 1;
            if self.mode == Mode::GiveUp {
                let at = self.pose.pos;
                log::error!("unsolvable maze detected at {at}, giving up");
                return Err(NavError::Unsolvable { at });
            }
        }
        Ok(self.stats)
    }

    fn refresh_display(&mut self) {
        self.boundary.clear_all_color();
        self.boundary.set_color(Point::ZERO, Color::Goal);
        for p in self.center {
            self.boundary.set_color(p, Color::Goal);
        }
    }

    /// One strategic step: sense, replan, render, follow the known prefix,
    /// then switch goals if one was reached.
    ///
    /// Returns the number of cells moved. Switches to [`Mode::GiveUp`] when
    /// the goal is unreachable; does nothing once given up.
    pub fn step(&mut self) -> usize {
        let Some(goal) = self.goal() else {
            return 0;
        };
        self.stats.steps += 1;

        self.sense();

        let start = self.current_cell();
        let head = self.replan(start, goal);
        if head != start {
            self.mode = Mode::GiveUp;
            return 0;
        }

        self.render(start);
        let hops = self.follow(start);
        self.check_goal();
        hops
    }

    /// Read the unknown walls around the current cell.
    fn sense(&mut self) {
        let cell = self.current_cell();
        let mut learned = DirMask::NONE;
        let mut walls = DirMask::NONE;
        for side in Side::ALL {
            let d = side.direction(self.pose.heading);
            if self.maze.is_known(cell, d) {
                continue;
            }
            let present = self.boundary.wall(side);
            self.learn_wall(cell, d, present);
            learned.set(d, true);
            walls.set(d, present);
        }
        if !learned.is_empty() {
            log::debug!(
                "learned {learned:?} at {}, walls {walls:?}",
                self.pose.pos
            );
            self.history.record(cell, learned, walls);
        }
    }

    fn learn_wall(&mut self, cell: CellId, d: Direction, present: bool) {
        self.maze.set_wall(cell, d, present, true);
        if present {
            self.boundary.set_wall(self.maze.point(cell), d);
            if self.maze.has_neighbor(cell, d) {
                let n = self.maze.neighbor(cell, d);
                self.boundary.set_wall(self.maze.point(n), d.opposite());
            }
        }
    }

    fn forget_wall(&mut self, cell: CellId, d: Direction) {
        self.maze.forget_wall(cell, d, true);
        self.boundary.clear_wall(self.maze.point(cell), d);
        if self.maze.has_neighbor(cell, d) {
            let n = self.maze.neighbor(cell, d);
            self.boundary.clear_wall(self.maze.point(n), d.opposite());
        }
    }

    fn replan(&mut self, start: CellId, goal: Range) -> CellId {
        let query = Query {
            start,
            heading: self.pose.heading,
            goal,
            cost: self.config.cost,
        };
        let mut telemetry = Telemetry {
            boundary: &mut self.boundary,
            color_visited: self.config.color_visited,
            delay: Duration::from_millis(self.config.visited_delay_ms),
        };
        self.planner.search(&mut self.maze, &query, &mut telemetry)
    }

    /// Color the planned path: known prefix first, then the rest.
    fn render(&mut self, start: CellId) {
        let frontier = self.first_unknown(start);
        let mut color = if frontier == start {
            Color::IntendedPath
        } else {
            Color::KnownPath
        };
        for cell in forward_chain(&self.maze, start).skip(1) {
            self.boundary.set_color(self.maze.point(cell), color);
            if cell == frontier {
                color = Color::IntendedPath;
            }
        }
    }

    /// Move along the forward chain while the next wall is known. Stops
    /// right after a hop that leaves a reset pending.
    fn follow(&mut self, start: CellId) -> usize {
        let mut cell = start;
        let mut hops = 0;
        for _ in 0..self.maze.len() {
            let Trail::Forward(d) = self.maze.trail(cell) else {
                break;
            };
            if !self.maze.is_known(cell, d) {
                break;
            }
            let next = self.maze.neighbor(cell, d);
            self.move_to(self.maze.point(next));
            self.history.mark_hop();
            hops += 1;
            cell = next;
            if self.boundary.was_reset() {
                break;
            }
        }
        self.stats.hops += hops;
        hops
    }

    fn check_goal(&mut self) {
        let pos = self.pose.pos;
        if self.mode == Mode::Center && self.center.contains(pos) {
            log::info!("success: reached the center at {pos}");
            self.stats.center_arrivals += 1;
            self.mode = Mode::Origin;
        }
        if self.mode == Mode::Origin && pos == Point::ZERO {
            log::info!("back at the origin");
            self.stats.origin_arrivals += 1;
            self.mode = Mode::Center;
        }
    }

    // -----------------------------------------------------------------------
    // Motion
    // -----------------------------------------------------------------------

    /// Move to the adjacent cell `target`, turning first if needed.
    ///
    /// The pose is updated before the boundary commands are issued. Panics
    /// if `target` is not one step away or a known wall is in the way.
    pub fn move_to(&mut self, target: Point) {
        let from = self.pose.pos;
        let Some(d) = from.direction_to(target) else {
            panic!("move from {from} to {target} is not a single step");
        };
        let cell = self.current_cell();
        assert!(
            !self.maze.is_wall(cell, d),
            "move from {from} to {target} crosses a known wall"
        );

        let turn = self.pose.heading.turn_to(d);
        self.pose = Pose {
            pos: target,
            heading: d,
        };
        log::debug!("moving to {target}");

        match turn {
            Turn::None => {}
            Turn::Right => self.boundary.turn_right(),
            Turn::Around => {
                self.boundary.turn_left();
                self.boundary.turn_left();
            }
            Turn::Left => self.boundary.turn_left(),
        }
        self.boundary.move_forward();
    }

    // -----------------------------------------------------------------------
    // Reset
    // -----------------------------------------------------------------------

    /// Service a reset signal: acknowledge it, put the mouse back at the
    /// origin and forget every wall learned since the run started.
    pub fn reset(&mut self) {
        self.boundary.ack_reset();
        self.pose = Pose::start(self.config.initial_heading);
        self.mode = Mode::Center;
        let origin = self.maze.cell(0, 0);
        self.maze.set_run_length(origin, 0);

        let mut forgotten = 0;
        while let Some(entry) = self.history.pop_last() {
            for d in entry.learned.iter() {
                self.forget_wall(entry.cell, d);
                forgotten += 1;
            }
        }
        self.history = DiscoveryLog::new();
        self.stats.resets += 1;
        log::info!("reset: back at the origin, {forgotten} walls forgotten");
    }

    // -----------------------------------------------------------------------
    // Path queries
    // -----------------------------------------------------------------------

    /// First cell on the forward chain from `start` whose outgoing wall is
    /// unknown, or the last cell if the whole chain is known.
    pub fn first_unknown(&self, start: CellId) -> CellId {
        forward_chain(&self.maze, start)
            .find(|&c| match self.maze.trail(c) {
                Trail::Forward(d) => !self.maze.is_known(c, d),
                _ => true,
            })
            .unwrap_or(start)
    }

    /// The planned path from `start` as points, `start` included.
    pub fn path(&self, start: CellId) -> Vec<Point> {
        path_points(&self.maze, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mms_paths::CostModel;
    use std::collections::HashMap;

    /// Minimal open-plan boundary: perimeter plus an explicit wall list.
    struct Fake {
        width: i32,
        height: i32,
        walls: Vec<(Point, Direction)>,
        pose: Pose,
        reset_pending: bool,
        reset_after_moves: Option<usize>,
        commands: String,
        wall_marks: usize,
        cleared_marks: Vec<(Point, Direction)>,
        texts: usize,
        colors: HashMap<Point, Color>,
    }

    impl Fake {
        fn new(width: i32, height: i32) -> Self {
            Self {
                width,
                height,
                walls: Vec::new(),
                pose: Pose::start(Direction::North),
                reset_pending: false,
                reset_after_moves: None,
                commands: String::new(),
                wall_marks: 0,
                cleared_marks: Vec::new(),
                texts: 0,
                colors: HashMap::new(),
            }
        }

        fn with_wall(mut self, x: i32, y: i32, d: Direction) -> Self {
            self.walls.push((Point::new(x, y), d));
            self
        }

        fn has_wall(&self, p: Point, d: Direction) -> bool {
            let n = p.step(d);
            !Range::new(0, 0, self.width, self.height).contains(n)
                || self
                    .walls
                    .iter()
                    .any(|&w| w == (p, d) || w == (n, d.opposite()))
        }
    }

    impl Boundary for Fake {
        fn maze_width(&self) -> i32 {
            self.width
        }
        fn maze_height(&self) -> i32 {
            self.height
        }
        fn wall_front(&mut self) -> bool {
            self.has_wall(self.pose.pos, self.pose.heading)
        }
        fn wall_left(&mut self) -> bool {
            self.has_wall(self.pose.pos, self.pose.heading.left())
        }
        fn wall_right(&mut self) -> bool {
            self.has_wall(self.pose.pos, self.pose.heading.right())
        }
        fn was_reset(&mut self) -> bool {
            self.reset_pending
        }
        fn ack_reset(&mut self) {
            self.reset_pending = false;
            self.pose = Pose::start(Direction::North);
        }
        fn move_forward(&mut self) {
            assert!(!self.has_wall(self.pose.pos, self.pose.heading), "crashed");
            self.pose.pos = self.pose.pos.step(self.pose.heading);
            self.commands.push('F');
            if let Some(n) = self.reset_after_moves.as_mut() {
                *n -= 1;
                if *n == 0 {
                    self.reset_pending = true;
                    self.reset_after_moves = None;
                }
            }
        }
        fn turn_left(&mut self) {
            self.pose.heading = self.pose.heading.left();
            self.commands.push('L');
        }
        fn turn_right(&mut self) {
            self.pose.heading = self.pose.heading.right();
            self.commands.push('R');
        }
        fn set_text(&mut self, _p: Point, _text: &str) {
            self.texts += 1;
        }
        fn set_wall(&mut self, _p: Point, _d: Direction) {
            self.wall_marks += 1;
        }
        fn clear_wall(&mut self, p: Point, d: Direction) {
            self.cleared_marks.push((p, d));
        }
        fn set_color(&mut self, p: Point, color: Color) {
            self.colors.insert(p, color);
        }
        fn clear_all_color(&mut self) {
            self.colors.clear();
        }
    }

    fn nav(fake: Fake) -> Navigator<Fake> {
        let config = NavConfig::new(fake.width, fake.height);
        Navigator::new(config, fake).unwrap()
    }

    /// Mark every interior wall of the navigator's maze known and open.
    fn know_interior(nav: &mut Navigator<Fake>) {
        for id in nav.maze.ids() {
            for d in Direction::ALL {
                if !nav.maze.is_perimeter(id, d) {
                    nav.maze.set_wall(id, d, false, true);
                }
            }
        }
    }

    #[test]
    fn invalid_dimensions_abort_initialization() {
        let err = Navigator::new(NavConfig::new(17, 4), Fake::new(17, 4)).err();
        assert_eq!(
            err,
            Some(NavError::InvalidDimensions {
                width: 17,
                height: 4
            })
        );
    }

    #[test]
    fn heading_away_from_the_perimeter_is_rejected() {
        let config = NavConfig::new(4, 4).with_heading(Direction::South);
        let err = Navigator::new(config, Fake::new(4, 4)).err();
        assert_eq!(
            err,
            Some(NavError::InvalidHeading {
                heading: Direction::South
            })
        );
    }

    #[test]
    fn mismatched_dimensions_still_use_config() {
        let n = Navigator::new(NavConfig::new(3, 3), Fake::new(5, 5)).unwrap();
        assert_eq!(n.maze().len(), 9);
    }

    #[test]
    fn starts_with_perimeter_only() {
        let n = nav(Fake::new(4, 4));
        for id in n.maze().ids() {
            for d in Direction::ALL {
                assert_eq!(n.maze().is_known(id, d), n.maze().is_perimeter(id, d));
            }
        }
        assert_eq!(n.pose(), Pose::start(Direction::North));
        assert_eq!(n.mode(), Mode::Center);
        assert!(n.history().is_empty());
        assert_eq!(n.boundary().wall_marks, 16);
    }

    #[test]
    fn known_open_maze_reaches_center_in_one_step() {
        let mut n = nav(Fake::new(4, 4));
        know_interior(&mut n);
        assert_eq!(n.step(), 2);
        assert!(n.center().contains(n.pose().pos));
        assert_eq!(n.mode(), Mode::Origin);
        assert_eq!(n.boundary().commands, "RFLF");
        assert_eq!(n.boundary().pose, n.pose());
        assert_eq!(n.stats().center_arrivals, 1);
    }

    #[test]
    fn enclosed_start_gives_up_on_first_step() {
        let mut n = nav(Fake::new(4, 4));
        for ((x, y), d) in [
            ((0, 1), Direction::North),
            ((0, 1), Direction::East),
            ((1, 0), Direction::North),
            ((1, 0), Direction::East),
        ] {
            let id = n.maze.cell(x, y);
            n.maze.set_wall(id, d, true, true);
        }
        assert_eq!(n.step(), 0);
        assert_eq!(n.mode(), Mode::GiveUp);
        assert_eq!(n.goal(), None);
        assert_eq!(n.step(), 0);
        assert_eq!(n.stats().steps, 1);
        assert_eq!(
            n.run_limited(Some(5)),
            Err(NavError::Unsolvable { at: Point::ZERO })
        );
    }

    #[test]
    fn sensed_wall_is_forgotten_on_reset() {
        let mut n = nav(Fake::new(4, 4).with_wall(0, 0, Direction::East));
        n.sense();
        let origin = n.maze.cell(0, 0);
        assert_eq!(n.maze.wall(origin, Direction::East), Some(true));
        assert_eq!(n.maze.wall(origin, Direction::North), Some(false));
        assert_eq!(n.history().len(), 1);
        let entry = n.history().iter().next().copied().unwrap();
        assert_eq!(entry.walls, DirMask::of(Direction::East));

        n.reset();
        assert!(!n.maze.is_known(origin, Direction::East));
        assert!(!n.maze.is_known(n.maze.cell(1, 0), Direction::West));
        assert!(!n.maze.is_known(origin, Direction::North));
        assert!(n.maze.is_known(origin, Direction::West));
        assert!(n.history().is_empty());
        assert_eq!(n.pose(), Pose::start(Direction::North));
        assert_eq!(n.mode(), Mode::Center);
        assert!(
            n.boundary()
                .cleared_marks
                .contains(&(Point::new(1, 0), Direction::West))
        );
    }

    #[test]
    fn sensing_skips_known_walls() {
        let mut n = nav(Fake::new(4, 4));
        know_interior(&mut n);
        n.sense();
        assert!(n.history().is_empty());
    }

    #[test]
    fn following_stops_when_reset_goes_pending() {
        let mut fake = Fake::new(4, 4);
        fake.reset_after_moves = Some(1);
        let mut n = nav(fake);
        know_interior(&mut n);
        assert_eq!(n.step(), 1);
        assert_eq!(n.pose().pos, Point::new(1, 0));
        assert_eq!(n.mode(), Mode::Center);

        n.run_limited(Some(1)).unwrap();
        assert_eq!(n.stats().resets, 1);
        assert!(!n.boundary().reset_pending);
    }

    #[test]
    fn following_stops_at_first_unknown_wall() {
        let mut n = nav(Fake::new(4, 4));
        // Nothing inside is known yet: only the sensed edges out of (0, 0).
        let hops = n.step();
        assert_eq!(hops, 1);
        let here = n.current_cell();
        assert_eq!(n.first_unknown(here), here);
    }

    #[test]
    fn search_distances_are_mirrored_as_text() {
        let mut n = nav(Fake::new(2, 2));
        n.step();
        assert!(n.boundary().texts > 0);
    }

    #[test]
    fn path_and_first_unknown_follow_the_chain() {
        let mut n = nav(Fake::new(4, 4));
        know_interior(&mut n);
        let start = n.current_cell();
        let center = n.center();
        n.replan(start, center);
        let path = n.path(start);
        assert_eq!(
            path,
            vec![Point::ZERO, Point::new(1, 0), Point::new(1, 1)]
        );
        assert_eq!(n.first_unknown(start), n.maze.cell(1, 1));
    }

    #[test]
    fn path_is_colored_known_then_intended() {
        let mut n = nav(Fake::new(4, 4));
        let start = n.current_cell();
        for x in 0..2 {
            let cell = n.maze.cell(x, 0);
            n.maze.set_wall(cell, Direction::East, false, true);
        }
        n.replan(start, Range::single(Point::new(3, 0)));
        assert_eq!(n.first_unknown(start), n.maze.cell(2, 0));
        n.render(start);

        let colors = &n.boundary().colors;
        assert_eq!(colors.get(&Point::ZERO), None);
        assert_eq!(colors[&Point::new(1, 0)], Color::KnownPath);
        assert_eq!(colors[&Point::new(2, 0)], Color::KnownPath);
        assert_eq!(colors[&Point::new(3, 0)], Color::IntendedPath);
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn unknown_first_edge_colors_whole_path_intended() {
        let mut n = nav(Fake::new(4, 4));
        let start = n.current_cell();
        n.replan(start, Range::single(Point::new(3, 0)));
        assert_eq!(n.first_unknown(start), start);
        n.render(start);

        let colors = &n.boundary().colors;
        assert_eq!(colors.len(), 3);
        assert!(colors.values().all(|&c| c == Color::IntendedPath));
    }

    #[test]
    fn visited_cells_are_colored_when_enabled() {
        let config = NavConfig {
            color_visited: true,
            visited_delay_ms: 1,
            ..NavConfig::new(4, 4)
        };
        let mut n = Navigator::new(config, Fake::new(4, 4)).unwrap();
        let start = n.current_cell();
        let center = n.center();
        n.replan(start, center);
        let visited = n.boundary().colors.len();
        assert!(visited > 1);
        assert!(n.boundary().colors.values().all(|&c| c == Color::Visited));
        assert_eq!(n.boundary().colors[&Point::ZERO], Color::Visited);

        // The start keeps its color; the rest of the path is repainted.
        n.render(start);
        let colors = &n.boundary().colors;
        assert_eq!(colors[&Point::ZERO], Color::Visited);
        assert_eq!(colors[&Point::new(1, 1)], Color::IntendedPath);
    }

    #[test]
    fn visited_coloring_is_off_by_default() {
        let mut n = nav(Fake::new(4, 4));
        n.step();
        assert!(!n.boundary().colors.values().any(|&c| c == Color::Visited));
        assert!(!n.boundary().colors.is_empty());
    }

    #[test]
    fn motion_translation() {
        let mut n = nav(Fake::new(3, 3));
        know_interior(&mut n);
        n.move_to(Point::new(0, 1));
        n.move_to(Point::new(1, 1));
        n.move_to(Point::new(1, 0));
        n.move_to(Point::new(1, 1));
        n.move_to(Point::new(0, 1));
        assert_eq!(n.boundary().commands, "FRFRFLLFLF");
        assert_eq!(n.pose().heading, Direction::West);
        assert_eq!(n.boundary().pose, n.pose());
    }

    #[test]
    #[should_panic(expected = "not a single step")]
    fn moving_two_cells_panics() {
        let mut n = nav(Fake::new(3, 3));
        n.move_to(Point::new(0, 2));
    }

    #[test]
    #[should_panic(expected = "crosses a known wall")]
    fn moving_through_a_wall_panics() {
        let mut n = nav(Fake::new(3, 3));
        n.move_to(Point::new(-1, 0));
    }

    #[test]
    fn simple_costs_still_reach_center() {
        let fake = Fake::new(4, 4);
        let config = NavConfig::new(4, 4).with_cost(CostModel::Simple);
        let mut n = Navigator::new(config, fake).unwrap();
        let stats = n.run_limited(Some(20)).unwrap();
        assert!(stats.center_arrivals >= 1);
    }
}
