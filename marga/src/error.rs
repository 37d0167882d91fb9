//! Error types for marga.
//!
//! Every failure of the planning and exploration core is returned to the
//! caller as a [`NavError`]. The surrounding control loop decides the policy
//! (replan on the next snapshot, declare exploration complete, ...).

use thiserror::Error;

/// Why the planner could not produce a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start cell is not Free
    StartBlocked,
    /// Goal cell is not Free
    GoalBlocked,
    /// Open set emptied before the goal was selected
    Exhausted,
    /// Expansion budget spent before the goal was selected
    BudgetExceeded,
}

impl std::fmt::Display for PathFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            PathFailure::StartBlocked => "start cell is not free",
            PathFailure::GoalBlocked => "goal cell is not free",
            PathFailure::Exhausted => "open set exhausted",
            PathFailure::BudgetExceeded => "expansion budget exceeded",
        };
        f.write_str(text)
    }
}

/// marga error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavError {
    #[error("Invalid map snapshot: expected {expected} cells, got {actual}")]
    InvalidMapSnapshot { expected: usize, actual: usize },

    #[error("Invalid map resolution: {resolution} m/cell")]
    InvalidResolution { resolution: f32 },

    #[error("No path found: {reason}")]
    NoPathFound { reason: PathFailure },

    #[error("No frontier found")]
    NoFrontierFound,

    #[error("Cell ({x}, {y}) is outside the grid")]
    OutOfBoundsCell { x: i32, y: i32 },

    #[error("Search cancelled after {expanded} expansions")]
    SearchCancelled { expanded: usize },

    #[error("No map snapshot has been applied")]
    NoMap,
}

impl NavError {
    /// Get a short error code for logging/metrics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidMapSnapshot { .. } => "INVALID_MAP_SNAPSHOT",
            Self::InvalidResolution { .. } => "INVALID_RESOLUTION",
            Self::NoPathFound { .. } => "NO_PATH_FOUND",
            Self::NoFrontierFound => "NO_FRONTIER_FOUND",
            Self::OutOfBoundsCell { .. } => "OUT_OF_BOUNDS_CELL",
            Self::SearchCancelled { .. } => "SEARCH_CANCELLED",
            Self::NoMap => "NO_MAP",
        }
    }
}

pub type Result<T> = std::result::Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NavError::InvalidMapSnapshot {
            expected: 100,
            actual: 99,
        };
        assert_eq!(
            err.to_string(),
            "Invalid map snapshot: expected 100 cells, got 99"
        );

        let err = NavError::NoPathFound {
            reason: PathFailure::GoalBlocked,
        };
        assert_eq!(err.to_string(), "No path found: goal cell is not free");
    }

    #[test]
    fn test_error_code() {
        assert_eq!(NavError::NoFrontierFound.code(), "NO_FRONTIER_FOUND");
        assert_eq!(
            NavError::OutOfBoundsCell { x: -1, y: 0 }.code(),
            "OUT_OF_BOUNDS_CELL"
        );
        assert_eq!(
            NavError::InvalidResolution { resolution: 0.0 }.code(),
            "INVALID_RESOLUTION"
        );
    }
}
