//! Path compression into directed waypoints.
//!
//! A cell path from the planner is reduced to the cells where the direction
//! of travel changes, plus the final cell. Each waypoint carries the heading
//! the robot has while arriving at it, so the motion controller can drive
//! straight segments and rotate in place between them.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, WorldPoint};
use crate::grid::OccupancyGrid;

/// One of the eight compass octants, or no direction yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None,
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// Direction of travel for a step of `(dx, dy)` cells.
    ///
    /// Only the signs matter, so a path with gaps still yields an octant.
    pub fn from_delta(dx: i32, dy: i32) -> Self {
        match (dx.signum(), dy.signum()) {
            (1, 0) => Direction::East,
            (1, 1) => Direction::NorthEast,
            (0, 1) => Direction::North,
            (-1, 1) => Direction::NorthWest,
            (-1, 0) => Direction::West,
            (-1, -1) => Direction::SouthWest,
            (0, -1) => Direction::South,
            (1, -1) => Direction::SouthEast,
            _ => Direction::None,
        }
    }

    /// Direction from cell `a` to cell `b`.
    #[inline]
    pub fn between(a: GridCoord, b: GridCoord) -> Self {
        let d = b - a;
        Self::from_delta(d.x, d.y)
    }

    /// Heading in radians, CCW from +X. `None` maps to 0.
    pub fn heading(self) -> f32 {
        match self {
            Direction::None | Direction::East => 0.0,
            Direction::NorthEast => FRAC_PI_4,
            Direction::North => FRAC_PI_2,
            Direction::NorthWest => 3.0 * FRAC_PI_4,
            Direction::West => PI,
            Direction::SouthWest => -3.0 * FRAC_PI_4,
            Direction::South => -FRAC_PI_2,
            Direction::SouthEast => -FRAC_PI_4,
        }
    }
}

/// A world-frame target for the motion controller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Grid cell the waypoint was taken from
    pub cell: GridCoord,
    /// Cell centre in the robot's world frame
    pub position: WorldPoint,
    /// Heading on arrival, radians
    pub heading: f32,
}

/// Waypoint extraction settings
#[derive(Clone, Debug, Default)]
pub struct WaypointConfig {
    /// Fixed translation from the map frame to the robot's world frame
    pub frame_offset: WorldPoint,
}

/// Compresses cell paths into waypoints.
#[derive(Clone, Debug, Default)]
pub struct WaypointExtractor {
    config: WaypointConfig,
}

impl WaypointExtractor {
    pub fn new(config: WaypointConfig) -> Self {
        Self { config }
    }

    /// Cells where the direction changes, plus the last cell.
    ///
    /// The first step only establishes the initial direction: the robot is
    /// already standing on the start cell. After that, whenever the step
    /// direction differs from the previous one, the cell before the change is
    /// emitted with the direction used to reach it. Repeated cells (zero
    /// steps) are ignored. A path shorter than two cells yields its single
    /// cell with [`Direction::None`].
    pub fn turning_points(&self, path: &[GridCoord]) -> Vec<(GridCoord, Direction)> {
        let Some(&last) = path.last() else {
            return Vec::new();
        };

        let mut points = Vec::new();
        let mut direction = Direction::None;

        for pair in path.windows(2) {
            let step = Direction::between(pair[0], pair[1]);
            if step == Direction::None {
                continue;
            }
            if direction != Direction::None && step != direction {
                points.push((pair[0], direction));
            }
            direction = step;
        }

        points.push((last, direction));
        points
    }

    /// Compress a path into world-frame waypoints using the grid's mapping.
    pub fn compress(&self, grid: &OccupancyGrid, path: &[GridCoord]) -> Vec<Waypoint> {
        self.turning_points(path)
            .into_iter()
            .map(|(cell, direction)| Waypoint {
                cell,
                position: grid.grid_to_world(cell) + self.config.frame_offset,
                heading: direction.heading(),
            })
            .collect()
    }
}
