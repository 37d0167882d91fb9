//! Cell occupancy classification.
//!
//! Raw sensor values are reduced to three states. The classification is a
//! pure function of the raw value (see [`crate::grid::OccupancyConfig`]).

use serde::{Deserialize, Serialize};

/// Occupancy state of a grid cell.
///
/// - `Unknown` - Never observed (raw value equals the unknown sentinel)
/// - `Free` - Observed and below the occupancy threshold
/// - `Occupied` - Observed and above the occupancy threshold
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellType {
    /// Cell has not been observed
    #[default]
    Unknown = 0,

    /// Drivable, observed free space
    Free = 1,

    /// Obstacle (wall, furniture, inflated costmap cell)
    Occupied = 2,
}

impl CellType {
    /// Can the robot enter this cell?
    #[inline]
    pub fn is_traversable(self) -> bool {
        matches!(self, CellType::Free)
    }

    /// Is this cell an obstacle?
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, CellType::Occupied)
    }

    /// Has this cell been observed?
    #[inline]
    pub fn is_known(self) -> bool {
        self != CellType::Unknown
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellType::Unknown => '?',
            CellType::Free => '.',
            CellType::Occupied => '#',
        }
    }

    /// Parse the debugging character back into a cell type.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '?' => Some(CellType::Unknown),
            '.' => Some(CellType::Free),
            '#' => Some(CellType::Occupied),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_type_traversable() {
        assert!(!CellType::Unknown.is_traversable());
        assert!(CellType::Free.is_traversable());
        assert!(!CellType::Occupied.is_traversable());
    }

    #[test]
    fn test_cell_type_known() {
        assert!(!CellType::Unknown.is_known());
        assert!(CellType::Free.is_known());
        assert!(CellType::Occupied.is_known());
        assert!(CellType::Occupied.is_obstacle());
    }

    #[test]
    fn test_char_roundtrip() {
        for t in [CellType::Unknown, CellType::Free, CellType::Occupied] {
            assert_eq!(CellType::from_char(t.as_char()), Some(t));
        }
        assert_eq!(CellType::from_char('x'), None);
    }
}
