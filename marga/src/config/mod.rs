//! Configuration loading for marga.
//!
//! All settings live in a single YAML file; every field is optional.

mod defaults;
mod error;
mod marga;
mod sections;

pub use error::ConfigLoadError;
pub use marga::MargaConfig;
pub use sections::{ExplorationSection, OccupancySection, PathfindingSection, WaypointSection};
