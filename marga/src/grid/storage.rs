//! Typed occupancy grid built from a [`MapSnapshot`].
//!
//! Cell state lives in a flat row-major array next to the raw values it was
//! classified from. Search bookkeeping (g, h, parent) lives in the planner's
//! arena, so a grid is read-only during a search.

use log::{debug, warn};

use super::config::OccupancyConfig;
use super::snapshot::{LocalPatch, MapSnapshot};
use crate::core::{CellType, GridCoord, WorldPoint};
use crate::error::{NavError, Result};

/// Row-major offsets of the 8-neighbourhood (dy outer, dx inner).
const NEIGHBOR_OFFSETS_8: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A single cell as seen by callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    pub coord: GridCoord,
    pub state: CellType,
    /// Raw occupancy value the state was derived from
    pub raw: i8,
}

/// Occupancy grid for one snapshot.
///
/// Coordinate system:
/// - Cell (x, y) covers `origin + [x, x+1) * resolution` horizontally
///   and `origin + [y, y+1) * resolution` vertically
/// - Positive X is forward/east, positive Y is left/north
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    /// Cell states, row-major
    cell_types: Vec<CellType>,
    /// Raw occupancy values, row-major
    raw: Vec<i8>,

    width: usize,
    height: usize,
    /// Meters per cell
    resolution: f32,
    /// World position of the lower-left corner of cell (0, 0)
    origin: WorldPoint,
    config: OccupancyConfig,
}

impl OccupancyGrid {
    /// Classify raw occupancy data into a grid.
    ///
    /// Fails with [`NavError::InvalidMapSnapshot`] if `data.len() != width * height`
    /// (or the product overflows), and with [`NavError::InvalidResolution`] unless
    /// `resolution` is finite and positive.
    pub fn build(
        data: Vec<i8>,
        width: usize,
        height: usize,
        resolution: f32,
        origin: WorldPoint,
        config: &OccupancyConfig,
    ) -> Result<Self> {
        if !resolution.is_finite() || resolution <= 0.0 {
            debug!("[Grid] Rejecting snapshot: resolution {}", resolution);
            return Err(NavError::InvalidResolution { resolution });
        }

        let Some(expected) = width.checked_mul(height) else {
            debug!("[Grid] Rejecting snapshot: {}x{} overflows", width, height);
            return Err(NavError::InvalidMapSnapshot {
                expected: usize::MAX,
                actual: data.len(),
            });
        };
        if data.len() != expected {
            debug!(
                "[Grid] Rejecting snapshot: {}x{} declares {} cells, data has {}",
                width,
                height,
                expected,
                data.len()
            );
            return Err(NavError::InvalidMapSnapshot {
                expected,
                actual: data.len(),
            });
        }

        let cell_types = data.iter().map(|&v| config.classify(v)).collect();

        Ok(Self {
            cell_types,
            raw: data,
            width,
            height,
            resolution,
            origin,
            config: config.clone(),
        })
    }

    /// Build from a snapshot (clones the raw data).
    pub fn from_snapshot(snapshot: &MapSnapshot, config: &OccupancyConfig) -> Result<Self> {
        Self::build(
            snapshot.data.clone(),
            snapshot.width,
            snapshot.height,
            snapshot.resolution,
            snapshot.origin,
            config,
        )
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resolution in meters per cell
    #[inline]
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Classification settings this grid was built with
    pub fn occupancy_config(&self) -> &OccupancyConfig {
        &self.config
    }

    /// Convert world coordinates to grid coordinates
    #[inline]
    pub fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        let x = ((point.x - self.origin.x) / self.resolution).floor() as i32;
        let y = ((point.y - self.origin.y) / self.resolution).floor() as i32;
        GridCoord::new(x, y)
    }

    /// Convert grid coordinates to world coordinates (cell center)
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            self.origin.x + (coord.x as f32 + 0.5) * self.resolution,
            self.origin.y + (coord.y as f32 + 0.5) * self.resolution,
        )
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Convert flat array index to grid coordinates
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Look up a cell, failing with [`NavError::OutOfBoundsCell`] outside the grid.
    pub fn cell(&self, coord: GridCoord) -> Result<GridCell> {
        let index = self.coord_to_index(coord).ok_or(NavError::OutOfBoundsCell {
            x: coord.x,
            y: coord.y,
        })?;
        Ok(GridCell {
            coord,
            state: self.cell_types[index],
            raw: self.raw[index],
        })
    }

    /// Cell state, or Unknown outside the grid
    #[inline]
    pub fn get_type(&self, coord: GridCoord) -> CellType {
        self.coord_to_index(coord)
            .map(|i| self.cell_types[i])
            .unwrap_or(CellType::Unknown)
    }

    /// Cell state at a world position, or Unknown outside the grid
    #[inline]
    pub fn get_type_world(&self, point: WorldPoint) -> CellType {
        self.get_type(self.world_to_grid(point))
    }

    #[inline]
    pub fn is_free(&self, coord: GridCoord) -> bool {
        self.get_type(coord).is_traversable()
    }

    /// In-bounds 8-neighbours of `coord`, row-major, excluding `coord` itself.
    pub fn neighbors8(&self, coord: GridCoord) -> impl Iterator<Item = GridCoord> + '_ {
        NEIGHBOR_OFFSETS_8
            .iter()
            .map(move |&(dx, dy)| GridCoord::new(coord.x + dx, coord.y + dy))
            .filter(move |&n| self.is_valid_coord(n))
    }

    /// True if any in-bounds 8-neighbour of `coord` has been observed.
    pub fn has_known_neighbor(&self, coord: GridCoord) -> bool {
        self.neighbors8(coord).any(|n| self.get_type(n).is_known())
    }

    /// Iterate over all cells, row-major
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, CellType)> + '_ {
        self.cell_types
            .iter()
            .enumerate()
            .map(move |(i, &t)| (self.index_to_coord(i), t))
    }

    /// Raw cell states, row-major
    #[inline]
    pub fn cell_types(&self) -> &[CellType] {
        &self.cell_types
    }

    /// Raw occupancy values, row-major
    #[inline]
    pub fn raw_values(&self) -> &[i8] {
        &self.raw
    }

    /// All Occupied cells, row-major
    pub fn wall_cells(&self) -> Vec<GridCoord> {
        self.iter()
            .filter(|(_, t)| t.is_obstacle())
            .map(|(c, _)| c)
            .collect()
    }

    /// Count cells by type
    pub fn count_by_type(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &cell_type in &self.cell_types {
            match cell_type {
                CellType::Unknown => counts.unknown += 1,
                CellType::Free => counts.free += 1,
                CellType::Occupied => counts.occupied += 1,
            }
        }
        counts
    }

    /// Fold a local patch into the grid in place.
    ///
    /// Patch cells equal to the configured default value are skipped, as are
    /// cells that land outside the grid. Every other cell overwrites the raw
    /// value and is reclassified. Returns the number of cells written.
    pub fn apply_patch(&mut self, patch: &LocalPatch) -> usize {
        let mut written = 0;
        let mut outside = 0;

        for (center, value) in patch.cells() {
            if value == self.config.patch_default_value {
                continue;
            }
            let coord = self.world_to_grid(center);
            match self.coord_to_index(coord) {
                Some(index) => {
                    self.raw[index] = value;
                    self.cell_types[index] = self.config.classify(value);
                    written += 1;
                }
                None => outside += 1,
            }
        }

        if outside > 0 {
            warn!(
                "[Grid] Local patch: {} cells outside the {}x{} grid ignored",
                outside, self.width, self.height
            );
        }
        debug!("[Grid] Local patch: {} cells reclassified", written);

        written
    }
}

/// Cell count statistics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    pub unknown: usize,
    pub free: usize,
    pub occupied: usize,
}

impl CellCounts {
    /// Total known cells
    pub fn known(&self) -> usize {
        self.free + self.occupied
    }

    /// Total cells
    pub fn total(&self) -> usize {
        self.unknown + self.known()
    }
}
