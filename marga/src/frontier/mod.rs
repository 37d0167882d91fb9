//! Frontier-based exploration.
//!
//! Pipeline per snapshot:
//! 1. [`FrontierDetector::scan`] finds Unknown cells on the edge of explored space
//! 2. [`FrontierClusterer::group`] splits them into 8-connected clusters
//! 3. [`GoalSelector::select_goal`] weights clusters by size over distance and picks one
//!
//! ```rust,ignore
//! use marga::frontier::{FrontierClusterer, FrontierDetector, GoalSelector};
//!
//! let cells = FrontierDetector::new().scan(&grid);
//! let clusters = FrontierClusterer::new().group(&cells);
//! let goal = GoalSelector::default().select_goal(&grid, &clusters, robot.position())?;
//! ```

mod cluster;
mod detector;
mod selector;

pub use cluster::{FrontierCluster, FrontierClusterer};
pub use detector::FrontierDetector;
pub use selector::{ExplorationConfig, ExplorationGoal, GoalSelector, ScoredCluster, pick_best};
