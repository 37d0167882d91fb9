//! Core types shared by every stage of the navigation pipeline.
//!
//! - [`CellType`]: Occupancy state of a cell (Free, Occupied, Unknown)
//! - [`GridCoord`] and [`WorldPoint`]: Coordinate types
//! - [`Pose2D`]: Robot pose (position + orientation)

mod cell;
mod point;
mod pose;

pub use cell::CellType;
pub use point::{GridCoord, WorldPoint};
pub use pose::{Pose2D, normalize_angle};
