//! Navigator configuration.

use mms_core::{Direction, MAX_SIDE, Point, Range};
use mms_paths::CostModel;

use crate::error::NavError;

/// Plain configuration values handed to the navigator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    pub width: i32,
    pub height: i32,
    /// Center goal region; `None` picks [`Range::center_of`] the maze.
    pub center: Option<Range>,
    /// Heading at start and after every reset.
    pub initial_heading: Direction,
    pub cost: CostModel,
    /// Color cells as the search expands them.
    pub color_visited: bool,
    /// Pause after each visited-cell coloring, in milliseconds.
    pub visited_delay_ms: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            width: MAX_SIDE,
            height: MAX_SIDE,
            center: None,
            initial_heading: Direction::North,
            cost: CostModel::default(),
            color_visited: false,
            visited_delay_ms: 10,
        }
    }
}

impl NavConfig {
    /// Default configuration for a `width` x `height` maze.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the cost model (builder).
    pub fn with_cost(mut self, cost: CostModel) -> Self {
        self.cost = cost;
        self
    }

    /// Set an explicit center region (builder).
    pub fn with_center(mut self, center: Range) -> Self {
        self.center = Some(center);
        self
    }

    /// Set the initial heading (builder).
    pub fn with_heading(mut self, heading: Direction) -> Self {
        self.initial_heading = heading;
        self
    }

    /// The center goal region.
    pub fn center(&self) -> Range {
        self.center
            .unwrap_or_else(|| Range::center_of(self.width, self.height))
    }

    /// Check the dimensions, the center region and the initial heading.
    ///
    /// Only the left, front and right walls are ever sensed, so the side
    /// behind the mouse at the origin must be perimeter.
    pub fn validate(&self) -> Result<(), NavError> {
        let side = 1..=MAX_SIDE;
        if !side.contains(&self.width) || !side.contains(&self.height) {
            return Err(NavError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let bounds = Range::new(0, 0, self.width, self.height);
        let center = self.center();
        if center.is_empty() || !center.in_range(bounds) {
            return Err(NavError::InvalidCenter {
                center,
                width: self.width,
                height: self.height,
            });
        }
        if bounds.contains(Point::ZERO.step(self.initial_heading.opposite())) {
            return Err(NavError::InvalidHeading {
                heading: self.initial_heading,
            });
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let c: NavConfig = serde_json::from_str(r#"{"width": 4, "height": 4, "cost": "Simple"}"#).unwrap();
        assert_eq!(c.center(), Range::center_of(4, 4));
        assert_eq!(c.cost, CostModel::Simple);
        assert_eq!(c.visited_delay_ms, 10);
    }

    #[test]
    fn config_round_trip() {
        let c = NavConfig::new(8, 5).with_heading(Direction::East);
        let json = serde_json::to_string(&c).unwrap();
        let back: NavConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
