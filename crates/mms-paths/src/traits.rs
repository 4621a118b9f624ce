use mms_core::Point;

/// Hooks called while a search pass runs. Both default to doing nothing.
pub trait SearchObserver {
    /// A cell's distance estimate was written (including the seed value of
    /// the start cell and the sentinel written to goal cells).
    fn distance_changed(&mut self, _p: Point, _distance: u16) {}

    /// A cell was popped from the queue and expanded.
    fn visited(&mut self, _p: Point) {}
}

/// Observer that ignores every event.
#[derive(Copy, Clone, Debug, Default)]
pub struct Quiet;

impl SearchObserver for Quiet {}
