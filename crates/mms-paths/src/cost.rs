//! Edge cost model.
//!
//! An edge either continues the straight run the mouse is on or turns.
//! All costs are exact integers.

/// Base cost of the fast-straightaways regime.
pub const FAST_BASE: u16 = 256;

/// Selects how edges are priced during the search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostModel {
    /// Every turn costs [`FAST_BASE`]; the `n`-th consecutive straight edge
    /// costs `FAST_BASE / n`, so long runs get cheaper per cell.
    #[default]
    FastStraightaways,
    /// A turn costs 2 and a straight edge 3, whatever the run length.
    Simple,
}

impl CostModel {
    /// Cost of an edge that changes direction.
    #[inline]
    pub const fn turn_cost(self) -> u16 {
        match self {
            Self::FastStraightaways => FAST_BASE,
            Self::Simple => 2,
        }
    }

    /// Cost of an edge that extends a straight run to length `run`.
    ///
    /// `run` counts the new edge, so it is at least 1.
    #[inline]
    pub const fn straight_cost(self, run: u8) -> u16 {
        match self {
            Self::FastStraightaways => {
                let n = if run == 0 { 1 } else { run as u16 };
                FAST_BASE / n
            }
            Self::Simple => 3,
        }
    }

    /// Cost of one edge given whether it goes straight and the run length
    /// of the cell it leaves from.
    #[inline]
    pub const fn edge_cost(self, straight: bool, run_before: u8) -> u16 {
        if straight {
            self.straight_cost(run_before.saturating_add(1))
        } else {
            self.turn_cost()
        }
    }
}
