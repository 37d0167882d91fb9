//! # Marga: Grid Route Planning and Frontier Exploration
//!
//! The spatial-reasoning core of an indoor robot. Given a raw occupancy
//! snapshot from the mapper it answers two questions:
//!
//! - **How do I get there?** A* over the 8-connected grid, compressed into
//!   heading-change waypoints for the motion controller.
//! - **Where should I look next?** Frontier detection, 8-connected clustering
//!   and size-over-distance goal selection.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga::{MapSnapshot, Navigator, Pose2D, WorldPoint};
//!
//! let mut nav = Navigator::default();
//! let snapshot = MapSnapshot::filled(100, 100, 0.05, WorldPoint::ZERO, 0);
//! nav.update_map(snapshot)?;
//!
//! let route = nav.plan_route(Pose2D::new(0.1, 0.1, 0.0), Pose2D::new(4.0, 3.0, 0.0))?;
//! for wp in &route.waypoints {
//!     println!("({:.2}, {:.2}) heading {:.2}", wp.position.x, wp.position.y, wp.heading);
//! }
//! # Ok::<(), marga::NavError>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! All coordinates follow the ROS REP-103 convention:
//! - **X-forward**: Positive X is in front of the robot
//! - **Y-left**: Positive Y is to the left of the robot
//! - **Rotation**: Counter-clockwise positive
//!
//! Grid cell `(x, y)` covers `origin + [x, x+1) × [y, y+1)` cells of
//! `resolution` meters; world positions of cells are their centres.
//!
//! ## Architecture
//!
//! - [`core`]: Cell state, coordinates, pose
//! - [`grid`]: Snapshot → classified [`OccupancyGrid`], local patches
//! - [`pathfinding`]: A* planner and waypoint extraction
//! - [`frontier`]: Frontier detection, clustering, goal selection
//! - [`viz`]: Observer seam for intermediate cell sets
//! - [`navigator`]: [`Navigator`] owning the grid and role lists
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!                   ┌──────────────┐
//!                   │ MapSnapshot  │
//!                   └──────┬───────┘
//!                          │ build()
//!                          ▼
//!                   ┌──────────────┐
//!                   │OccupancyGrid │
//!                   └──────┬───────┘
//!             ┌────────────┴────────────┐
//!             ▼                         ▼
//!     ┌──────────────┐          ┌──────────────┐
//!     │ AStarPlanner │          │FrontierDetect│
//!     └──────┬───────┘          └──────┬───────┘
//!            ▼                         ▼
//!     ┌──────────────┐          ┌──────────────┐
//!     │  Waypoints   │          │  Clusterer   │
//!     └──────────────┘          └──────┬───────┘
//!                                      ▼
//!                               ┌──────────────┐
//!                               │ GoalSelector │
//!                               └──────────────┘
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod navigator;
pub mod pathfinding;
pub mod viz;

pub use config::{ConfigLoadError, MargaConfig};
pub use crate::core::{CellType, GridCoord, Pose2D, WorldPoint};
pub use error::{NavError, PathFailure, Result};
pub use frontier::{
    ExplorationConfig, ExplorationGoal, FrontierCluster, FrontierClusterer, FrontierDetector,
    GoalSelector, ScoredCluster,
};
pub use grid::{LocalPatch, MapSnapshot, OccupancyConfig, OccupancyGrid};
pub use navigator::{MapUpdate, Navigator, Route};
pub use pathfinding::{
    AStarConfig, AStarPlanner, Direction, PathResult, Waypoint, WaypointExtractor,
};
pub use viz::{CellObserver, CellRecorder, CellRole, NoopObserver, SearchControl, SearchProgress};
