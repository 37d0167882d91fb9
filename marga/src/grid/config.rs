//! Occupancy classification settings.

use serde::{Deserialize, Serialize};

use crate::core::CellType;

/// Raw value written for obstacles by [`OccupancyConfig::raw_value`].
pub const RAW_OCCUPIED: i8 = 100;
/// Raw value written for free space by [`OccupancyConfig::raw_value`].
pub const RAW_FREE: i8 = 0;

/// How raw occupancy values map onto [`CellType`].
///
/// Raw values follow the ROS `OccupancyGrid` convention: `0..=100` is an
/// obstacle probability in percent and `-1` marks unobserved cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OccupancyConfig {
    /// Values strictly above this are Occupied
    pub occupied_threshold: i8,

    /// Sentinel meaning "never observed"
    pub unknown_value: i8,

    /// Patch cells carrying this value are left untouched by incremental updates
    pub patch_default_value: i8,
}

impl Default for OccupancyConfig {
    fn default() -> Self {
        Self {
            occupied_threshold: 30,
            unknown_value: -1,
            patch_default_value: 0,
        }
    }
}

impl OccupancyConfig {
    /// Classify a raw occupancy value.
    #[inline]
    pub fn classify(&self, raw: i8) -> CellType {
        if raw == self.unknown_value {
            CellType::Unknown
        } else if raw > self.occupied_threshold {
            CellType::Occupied
        } else {
            CellType::Free
        }
    }

    /// Canonical raw value for a cell type (used when building fixtures).
    pub fn raw_value(&self, cell_type: CellType) -> i8 {
        match cell_type {
            CellType::Unknown => self.unknown_value,
            CellType::Free => RAW_FREE,
            CellType::Occupied => RAW_OCCUPIED,
        }
    }
}
