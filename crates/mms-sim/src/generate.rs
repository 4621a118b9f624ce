//! Random perfect-maze generation.

use mms_core::{Direction, Point, Range};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::maze::SimMaze;

impl SimMaze {
    /// Generate a maze from `seed`. The same seed always gives the same maze.
    pub fn generate(width: i32, height: i32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate_with(width, height, &mut rng)
    }

    /// Recursive backtracker: starting from the origin, carve into a random
    /// unvisited neighbour, backing up when there is none. Every cell ends up
    /// connected by exactly one route; the center block is then opened up.
    pub fn generate_with(width: i32, height: i32, rng: &mut impl Rng) -> Self {
        let mut maze = SimMaze::closed(width, height);
        let bounds = maze.bounds();
        let index = |p: Point| (p.y * width + p.x) as usize;

        let mut visited = vec![false; (width * height) as usize];
        let mut stack = vec![Point::ZERO];
        visited[0] = true;
        while let Some(&p) = stack.last() {
            let options: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|&d| {
                    let n = p.step(d);
                    bounds.contains(n) && !visited[index(n)]
                })
                .collect();
            if options.is_empty() {
                stack.pop();
                continue;
            }
            let d = options[rng.random_range(0..options.len())];
            let n = p.step(d);
            maze.set_wall(p, d, false);
            visited[index(n)] = true;
            stack.push(n);
        }

        maze.open_region(Range::center_of(width, height));
        log::debug!("generated {width}x{height} maze, {} open edges", maze.open_edges());
        maze
    }
}
