//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;
use crate::frontier::ExplorationConfig;
use crate::grid::OccupancyConfig;
use crate::pathfinding::{AStarConfig, WaypointConfig};

use super::error::ConfigLoadError;
use super::sections::{ExplorationSection, OccupancySection, PathfindingSection, WaypointSection};

/// Full marga configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    #[serde(default)]
    pub occupancy: OccupancySection,

    #[serde(default)]
    pub pathfinding: PathfindingSection,

    #[serde(default)]
    pub waypoints: WaypointSection,

    #[serde(default)]
    pub exploration: ExplorationSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    pub fn occupancy_config(&self) -> OccupancyConfig {
        OccupancyConfig {
            occupied_threshold: self.occupancy.occupied_threshold,
            unknown_value: self.occupancy.unknown_value,
            patch_default_value: self.occupancy.patch_default_value,
        }
    }

    pub fn astar_config(&self) -> AStarConfig {
        AStarConfig {
            max_expansions: self.pathfinding.max_expansions,
            report_progress: self.pathfinding.report_progress,
        }
    }

    pub fn waypoint_config(&self) -> WaypointConfig {
        WaypointConfig {
            frame_offset: WorldPoint::new(
                self.waypoints.frame_offset_x,
                self.waypoints.frame_offset_y,
            ),
        }
    }

    pub fn exploration_config(&self) -> ExplorationConfig {
        ExplorationConfig {
            min_cluster_size: self.exploration.min_cluster_size,
            min_goal_distance: self.exploration.min_goal_distance,
        }
    }
}
