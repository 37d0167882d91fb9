//! A* search over the occupancy grid.
//!
//! - 8-connected moves with uniform step cost
//! - Euclidean heuristic, assigned once per cell on discovery
//! - No decrease-key: a cell's parent is fixed when it is first discovered
//! - Search state lives in a reusable [`SearchArena`], not on the grid

mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{AStarConfig, NodeState, PathResult, SearchArena};

use crate::core::GridCoord;
use crate::error::Result;
use crate::grid::OccupancyGrid;

/// Quick path finding with default configuration
pub fn find_path(grid: &OccupancyGrid, start: GridCoord, goal: GridCoord) -> Result<PathResult> {
    AStarPlanner::default().find_path(grid, start, goal)
}

/// Check whether the goal is reachable from start
pub fn path_exists(grid: &OccupancyGrid, start: GridCoord, goal: GridCoord) -> bool {
    find_path(grid, start, goal).is_ok()
}
