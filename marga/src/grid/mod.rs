//! Occupancy grid model.
//!
//! - [`MapSnapshot`] / [`LocalPatch`]: raw inputs from the mapper
//! - [`OccupancyConfig`]: raw value → [`CellType`](crate::core::CellType) classification
//! - [`OccupancyGrid`]: classified grid with world↔grid conversion

mod config;
mod snapshot;
mod storage;

pub use config::{OccupancyConfig, RAW_FREE, RAW_OCCUPIED};
pub use snapshot::{LocalPatch, MapSnapshot};
pub use storage::{CellCounts, GridCell, OccupancyGrid};
