//! Route planning on the occupancy grid.
//!
//! - **A* Search**: cell path between two Free cells
//! - **Waypoints**: compress that path into heading changes for the motion controller
//!
//! ```rust,ignore
//! use marga::pathfinding::{AStarPlanner, WaypointExtractor};
//!
//! let mut planner = AStarPlanner::default();
//! let result = planner.find_path(&grid, start, goal)?;
//! let waypoints = WaypointExtractor::default().compress(&grid, &result.path);
//! ```

pub mod astar;
pub mod waypoints;

pub use astar::{
    AStarConfig, AStarPlanner, NodeState, PathResult, SearchArena, find_path, path_exists,
};
pub use waypoints::{Direction, Waypoint, WaypointConfig, WaypointExtractor};
