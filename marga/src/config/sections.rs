//! Configuration sections.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Occupancy classification settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OccupancySection {
    /// Raw values above this are obstacles
    #[serde(default = "defaults::occupied_threshold")]
    pub occupied_threshold: i8,

    /// Raw value marking unobserved cells
    #[serde(default = "defaults::unknown_value")]
    pub unknown_value: i8,

    /// Local patch cells carrying this value are skipped
    #[serde(default)]
    pub patch_default_value: i8,
}

impl Default for OccupancySection {
    fn default() -> Self {
        Self {
            occupied_threshold: 30,
            unknown_value: -1,
            patch_default_value: 0,
        }
    }
}

/// A* settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PathfindingSection {
    /// Maximum cells to expand before giving up (unlimited by default)
    #[serde(default = "defaults::max_expansions")]
    pub max_expansions: usize,

    /// Report each expansion to the observer
    #[serde(default = "defaults::enabled")]
    pub report_progress: bool,
}

impl Default for PathfindingSection {
    fn default() -> Self {
        Self {
            max_expansions: usize::MAX,
            report_progress: true,
        }
    }
}

/// Waypoint output settings
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct WaypointSection {
    /// Map-to-world translation, X (meters)
    #[serde(default)]
    pub frame_offset_x: f32,

    /// Map-to-world translation, Y (meters)
    #[serde(default)]
    pub frame_offset_y: f32,
}

/// Frontier goal selection settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExplorationSection {
    /// Ignore clusters with fewer cells
    #[serde(default = "defaults::min_cluster_size")]
    pub min_cluster_size: usize,

    /// Lower clamp for robot-to-centroid distance (meters)
    #[serde(default = "defaults::min_goal_distance")]
    pub min_goal_distance: f32,
}

impl Default for ExplorationSection {
    fn default() -> Self {
        Self {
            min_cluster_size: 1,
            min_goal_distance: 1e-3,
        }
    }
}
