//! Raw occupancy inputs handed to the core by the mapping subsystem.

use serde::{Deserialize, Serialize};

use super::config::OccupancyConfig;
use crate::core::{CellType, WorldPoint};

/// A full occupancy map as published by the mapper.
///
/// `data` is row-major: index `y * width + x`, with `y = 0` being the row
/// closest to `origin`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
    /// Meters per cell
    pub resolution: f32,
    /// World position of the lower-left corner of cell (0, 0)
    pub origin: WorldPoint,
    /// Raw occupancy values
    pub data: Vec<i8>,
}

impl MapSnapshot {
    /// Create a snapshot from raw parts. Length is validated when the grid is built.
    pub fn new(
        width: usize,
        height: usize,
        resolution: f32,
        origin: WorldPoint,
        data: Vec<i8>,
    ) -> Self {
        Self {
            width,
            height,
            resolution,
            origin,
            data,
        }
    }

    /// Snapshot where every cell carries the same raw value.
    pub fn filled(
        width: usize,
        height: usize,
        resolution: f32,
        origin: WorldPoint,
        value: i8,
    ) -> Self {
        Self::new(width, height, resolution, origin, vec![value; width * height])
    }

    /// Build a snapshot from character rows (`.` free, `#` occupied, `?` unknown).
    ///
    /// Rows are listed in storage order, so the first string is row `y = 0`.
    /// Unrecognised characters are read as unknown. Rows shorter than the
    /// first one produce a snapshot whose data length does not match its
    /// declared size, which the grid builder rejects.
    pub fn from_rows<S: AsRef<str>>(
        rows: &[S],
        resolution: f32,
        origin: WorldPoint,
        config: &OccupancyConfig,
    ) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());

        let data = rows
            .iter()
            .flat_map(|row| row.as_ref().chars().take(width))
            .map(|c| config.raw_value(CellType::from_char(c).unwrap_or(CellType::Unknown)))
            .collect();

        Self::new(width, height, resolution, origin, data)
    }

    /// Number of cells implied by the declared dimensions, saturating at `usize::MAX`.
    #[inline]
    pub fn expected_len(&self) -> usize {
        self.width.saturating_mul(self.height)
    }
}

/// A small occupancy rectangle folded into an existing grid without a rebuild.
///
/// `origin` is in the same world frame as the map. Cells are placed by
/// converting each patch cell's centre through the target grid's
/// `world_to_grid`, so patch and map resolutions are expected to match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocalPatch {
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
    /// Meters per cell
    pub resolution: f32,
    /// World position of the lower-left corner of patch cell (0, 0)
    pub origin: WorldPoint,
    /// Raw occupancy values, row-major
    pub data: Vec<i8>,
}

impl LocalPatch {
    pub fn new(
        width: usize,
        height: usize,
        resolution: f32,
        origin: WorldPoint,
        data: Vec<i8>,
    ) -> Self {
        Self {
            width,
            height,
            resolution,
            origin,
            data,
        }
    }

    /// World-frame centre of patch cell `(px, py)`.
    #[inline]
    pub fn cell_center(&self, px: usize, py: usize) -> WorldPoint {
        WorldPoint::new(
            self.origin.x + (px as f32 + 0.5) * self.resolution,
            self.origin.y + (py as f32 + 0.5) * self.resolution,
        )
    }

    /// Iterate `(world_center, raw_value)` over the patch, row-major.
    ///
    /// Stops at the shorter of the declared size and the data length.
    pub fn cells(&self) -> impl Iterator<Item = (WorldPoint, i8)> + '_ {
        self.data
            .iter()
            .take(self.width * self.height)
            .enumerate()
            .map(move |(i, &v)| (self.cell_center(i % self.width, i / self.width), v))
    }
}
