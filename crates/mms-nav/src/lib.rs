//! **mms-nav** — the micromouse navigator.
//!
//! A [`Navigator`] owns the [`Maze`](mms_core::Maze) knowledge, the mouse
//! pose and a [`DiscoveryLog`], and talks to the robot or simulator only
//! through the [`Boundary`] trait. Each step senses the walls around the
//! mouse, replans over the whole maze and follows the known part of the
//! plan. A reset signal rolls every learned wall back.

mod boundary;
mod config;
mod error;
mod history;
mod navigator;

pub use boundary::{Boundary, Color, Side};
pub use config::NavConfig;
pub use error::NavError;
pub use history::{Discovery, DiscoveryLog};
pub use navigator::{Mode, Navigator, Pose, RunStats};
