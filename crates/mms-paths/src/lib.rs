//! Shortest-path search for the micromouse.
//!
//! The search runs over the whole maze on every step, treating unknown
//! walls as open:
//!
//! - [`CellQueue`] is an indexed min-heap with logarithmic `decrease_key`,
//!   keyed by the distances stored in the [`Maze`](mms_core::Maze).
//! - [`CostModel`] prices each edge as a turn or as a straight-run
//!   continuation.
//! - [`Planner::search`] runs one pass and leaves a forward chain of
//!   traversal pointers from the start cell to the closest goal cell.
//!
//! | Trait | Used for |
//! |---|---|
//! | [`SearchObserver`] | mirroring distances and visited cells to a display |

mod cost;
mod queue;
mod search;
mod traits;

pub use cost::{CostModel, FAST_BASE};
pub use queue::CellQueue;
pub use search::{ForwardChain, Planner, Query, closest_goal, forward_chain, path_points, reverse_chain};
pub use traits::{Quiet, SearchObserver};
