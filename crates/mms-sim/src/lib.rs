//! **mms-sim** — an in-memory maze simulator for the micromouse navigator.
//!
//! [`SimMaze`] holds the true walls (parsed from text or generated from a
//! seed) and [`SimBoundary`] puts a simulated mouse inside it, implementing
//! [`Boundary`](mms_nav::Boundary) so a [`Navigator`](mms_nav::Navigator)
//! can drive it. The `mms-sim` binary wires both to the command line.

mod boundary;
mod error;
mod generate;
mod maze;

use std::fs;
use std::path::Path;

use mms_nav::NavConfig;

pub use boundary::SimBoundary;
pub use error::{Result, SimError};
pub use maze::SimMaze;

/// Load a [`NavConfig`] from a JSON file. Missing fields take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<NavConfig> {
    let text = fs::read_to_string(path)?;
    let config = serde_json::from_str(&text)?;
    Ok(config)
}
