use mms_core::{Direction, MAX_SIDE, Point, Range};
use thiserror::Error;

/// Operational failures of the navigator.
///
/// Broken internal invariants are not reported here; they panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("maze dimensions {width}x{height} outside [1, {max}]", max = MAX_SIDE)]
    InvalidDimensions { width: i32, height: i32 },

    #[error("center region {center} does not fit in a {width}x{height} maze")]
    InvalidCenter { center: Range, width: i32, height: i32 },

    #[error("initial heading {heading} leaves the wall behind the origin unknown")]
    InvalidHeading { heading: Direction },

    #[error("unsolvable maze: goal unreachable from {at}")]
    Unsolvable { at: Point },
}
