//! Run the navigator in a simulated maze and print what happened.
//!
//! Usage:
//!   mms-sim --width 16 --height 16 --seed 7 --steps 300
//!   mms-sim --maze crates/mms-sim/mazes/classic5.txt --simple-costs
//!   RUST_LOG=debug mms-sim --width 8 --height 8

use std::path::PathBuf;

use clap::Parser;
use mms_nav::{NavConfig, NavError, Navigator};
use mms_paths::CostModel;
use mms_sim::{SimBoundary, SimMaze, load_config};

/// Micromouse navigator on a simulated maze
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze text file (north row first); generated when absent
    #[arg(short, long)]
    maze: Option<PathBuf>,

    /// Width of a generated maze
    #[arg(long, default_value_t = 16)]
    width: i32,

    /// Height of a generated maze
    #[arg(long, default_value_t = 16)]
    height: i32,

    /// Seed of a generated maze
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Stop after this many steps
    #[arg(short, long, default_value_t = 500)]
    steps: usize,

    /// Navigator configuration (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Turn cost 2, straight cost 3
    #[arg(long)]
    simple_costs: bool,

    /// Color cells as the search visits them
    #[arg(long)]
    color_visited: bool,

    /// Press the reset button after this many hops
    #[arg(long)]
    reset_after: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let maze = match &args.maze {
        Some(path) => SimMaze::load(path)?,
        None => {
            NavConfig::new(args.width, args.height).validate()?;
            SimMaze::generate(args.width, args.height, args.seed)
        }
    };

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => NavConfig::new(maze.width(), maze.height()),
    };
    if args.simple_costs {
        config.cost = CostModel::Simple;
    }
    if args.color_visited {
        config.color_visited = true;
    }

    println!("{maze}");
    let mut boundary = SimBoundary::new(maze, config.initial_heading);
    if let Some(hops) = args.reset_after {
        boundary.press_reset_after(hops);
    }

    let mut nav = Navigator::new(config, boundary)?;
    log::info!("navigating with {:?} costs, center {}", nav.config().cost, nav.center());
    let outcome = nav.run_limited(Some(args.steps));

    let stats = nav.stats();
    let sim = nav.into_boundary();
    println!("{}", sim.maze().render(Some(sim.pose())));
    println!(
        "steps {}  hops {}  center {}  origin {}  resets {}  moves {}  turns {}",
        stats.steps,
        stats.hops,
        stats.center_arrivals,
        stats.origin_arrivals,
        stats.resets,
        sim.moves(),
        sim.turns()
    );

    match outcome {
        Ok(_) => Ok(()),
        Err(e @ NavError::Unsolvable { .. }) => {
            println!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
