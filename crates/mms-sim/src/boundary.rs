//! [`SimBoundary`]: a [`Boundary`] backed by a [`SimMaze`].

use std::collections::{HashMap, HashSet};

use mms_core::{Direction, Point};
use mms_nav::{Boundary, Color, Pose};

use crate::maze::SimMaze;

/// Simulated mouse in a known maze, with a recorded display.
#[derive(Clone, Debug)]
pub struct SimBoundary {
    maze: SimMaze,
    initial_heading: Direction,
    pose: Pose,
    reset_pending: bool,
    reset_countdown: Option<usize>,
    colors: HashMap<Point, Color>,
    texts: HashMap<Point, String>,
    wall_marks: HashSet<(Point, Direction)>,
    moves: usize,
    turns: usize,
}

impl SimBoundary {
    /// A mouse at the origin of `maze`, facing `initial_heading`.
    pub fn new(maze: SimMaze, initial_heading: Direction) -> Self {
        Self {
            maze,
            initial_heading,
            pose: Pose::start(initial_heading),
            reset_pending: false,
            reset_countdown: None,
            colors: HashMap::new(),
            texts: HashMap::new(),
            wall_marks: HashSet::new(),
            moves: 0,
            turns: 0,
        }
    }

    #[inline]
    pub fn maze(&self) -> &SimMaze {
        &self.maze
    }

    /// Physical pose of the simulated mouse.
    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Raise the reset signal now.
    pub fn press_reset(&mut self) {
        self.reset_pending = true;
    }

    /// Raise the reset signal right after the `hops`-th forward move from now.
    pub fn press_reset_after(&mut self, hops: usize) {
        if hops == 0 {
            self.press_reset();
        } else {
            self.reset_countdown = Some(hops);
        }
    }

    #[inline]
    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    pub fn color(&self, p: Point) -> Option<Color> {
        self.colors.get(&p).copied()
    }

    pub fn text(&self, p: Point) -> Option<&str> {
        self.texts.get(&p).map(String::as_str)
    }

    /// Whether the display shows a wall on side `d` of `p`.
    pub fn has_wall_mark(&self, p: Point, d: Direction) -> bool {
        self.wall_marks.contains(&(p, d))
    }

    /// Number of wall marks on display.
    pub fn wall_mark_count(&self) -> usize {
        self.wall_marks.len()
    }

    /// Forward moves so far.
    #[inline]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Quarter turns so far.
    #[inline]
    pub fn turns(&self) -> usize {
        self.turns
    }

    fn sense(&self, d: Direction) -> bool {
        self.maze.has_wall(self.pose.pos, d)
    }
}

impl Boundary for SimBoundary {
    fn maze_width(&self) -> i32 {
        self.maze.width()
    }

    fn maze_height(&self) -> i32 {
        self.maze.height()
    }

    fn wall_front(&mut self) -> bool {
        self.sense(self.pose.heading)
    }

    fn wall_left(&mut self) -> bool {
        self.sense(self.pose.heading.left())
    }

    fn wall_right(&mut self) -> bool {
        self.sense(self.pose.heading.right())
    }

    fn was_reset(&mut self) -> bool {
        self.reset_pending
    }

    fn ack_reset(&mut self) {
        self.reset_pending = false;
        self.reset_countdown = None;
        self.pose = Pose::start(self.initial_heading);
    }

    fn move_forward(&mut self) {
        let Pose { pos, heading } = self.pose;
        assert!(
            !self.maze.has_wall(pos, heading),
            "mouse crashed into the {heading} wall of {pos}"
        );
        self.pose.pos = pos.step(heading);
        self.moves += 1;
        if let Some(left) = self.reset_countdown {
            if left <= 1 {
                self.reset_countdown = None;
                self.reset_pending = true;
            } else {
                self.reset_countdown = Some(left - 1);
            }
        }
    }

    fn turn_left(&mut self) {
        self.pose.heading = self.pose.heading.left();
        self.turns += 1;
    }

    fn turn_right(&mut self) {
        self.pose.heading = self.pose.heading.right();
        self.turns += 1;
    }

    fn set_color(&mut self, p: Point, color: Color) {
        self.colors.insert(p, color);
    }

    fn set_text(&mut self, p: Point, text: &str) {
        self.texts.insert(p, text.to_owned());
    }

    fn set_wall(&mut self, p: Point, d: Direction) {
        self.wall_marks.insert((p, d));
    }

    fn clear_wall(&mut self, p: Point, d: Direction) {
        self.wall_marks.remove(&(p, d));
    }

    fn clear_all_color(&mut self) {
        self.colors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> SimBoundary {
        // 3x1, wall between (1,0) and (2,0).
        let mut maze = SimMaze::open(3, 1);
        maze.set_wall(Point::new(1, 0), Direction::East, true);
        SimBoundary::new(maze, Direction::East)
    }

    #[test]
    fn sensors_are_relative_to_heading() {
        let mut b = corridor();
        assert!(!b.wall_front());
        assert!(b.wall_left());
        assert!(b.wall_right());
        b.turn_left();
        assert!(b.wall_front());
        assert!(!b.wall_right());
        assert_eq!(b.turns(), 1);
    }

    #[test]
    fn moves_and_reset_countdown() {
        let mut b = corridor();
        b.press_reset_after(1);
        assert!(!b.was_reset());
        b.move_forward();
        assert_eq!(b.pose().pos, Point::new(1, 0));
        assert!(b.was_reset());
        assert!(b.wall_front());
        b.ack_reset();
        assert!(!b.was_reset());
        assert_eq!(b.pose(), Pose::start(Direction::East));
        assert_eq!(b.moves(), 1);
    }

    #[test]
    #[should_panic(expected = "crashed")]
    fn moving_into_a_wall_panics() {
        let mut b = corridor();
        b.move_forward();
        b.move_forward();
    }

    #[test]
    fn display_is_recorded() {
        let mut b = corridor();
        b.set_color(Point::ZERO, Color::Goal);
        b.set_text(Point::ZERO, "0");
        b.set_wall(Point::ZERO, Direction::South);
        assert_eq!(b.color(Point::ZERO), Some(Color::Goal));
        assert_eq!(b.text(Point::ZERO), Some("0"));
        assert!(b.has_wall_mark(Point::ZERO, Direction::South));
        b.clear_all_color();
        b.clear_wall(Point::ZERO, Direction::South);
        assert_eq!(b.color(Point::ZERO), None);
        assert_eq!(b.wall_mark_count(), 0);
        assert_eq!(b.text(Point::ZERO), Some("0"));
    }
}
