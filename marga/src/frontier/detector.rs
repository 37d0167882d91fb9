//! Frontier cell detection.
//!
//! A cell is a frontier cell when it is Unknown, touches a Free cell, and
//! that Free cell itself touches at least one known cell (Free or Occupied).
//! This is stricter than the common single-hop rule (Unknown next to Free):
//! a lone Free cell surrounded by Unknown produces no frontier.

use log::debug;

use crate::core::{CellType, GridCoord};
use crate::grid::OccupancyGrid;

/// Scans a grid for frontier cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrontierDetector;

impl FrontierDetector {
    pub fn new() -> Self {
        Self
    }

    /// Check the frontier predicate for a single cell.
    pub fn is_frontier_cell(&self, grid: &OccupancyGrid, coord: GridCoord) -> bool {
        if !grid.is_valid_coord(coord) || grid.get_type(coord) != CellType::Unknown {
            return false;
        }
        grid.neighbors8(coord)
            .any(|n| grid.is_free(n) && grid.has_known_neighbor(n))
    }

    /// All frontier cells of the grid, in row-major order.
    pub fn scan(&self, grid: &OccupancyGrid) -> Vec<GridCoord> {
        let frontier: Vec<GridCoord> = grid
            .iter()
            .filter(|&(coord, cell_type)| {
                cell_type == CellType::Unknown && self.is_frontier_cell(grid, coord)
            })
            .map(|(coord, _)| coord)
            .collect();

        debug!(
            "[Frontier] Scan found {} frontier cells in {}x{} grid",
            frontier.len(),
            grid.width(),
            grid.height()
        );
        frontier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorldPoint;
    use crate::grid::{MapSnapshot, OccupancyConfig};

    fn grid_from_rows(rows: &[&str]) -> OccupancyGrid {
        let config = OccupancyConfig::default();
        let snapshot = MapSnapshot::from_rows(rows, 0.1, WorldPoint::ZERO, &config);
        OccupancyGrid::from_snapshot(&snapshot, &config).unwrap()
    }

    #[test]
    fn test_two_hop_frontier() {
        // (0,1) Unknown, (1,1) Free, (2,1) Occupied gives (1,1) a known neighbour
        let grid = grid_from_rows(&["???", "?.#", "???"]);
        let detector = FrontierDetector::new();
        assert!(detector.is_frontier_cell(&grid, GridCoord::new(0, 1)));
    }

    #[test]
    fn test_isolated_free_cell_is_not_a_frontier() {
        // Same layout without the second-hop known cell
        let grid = grid_from_rows(&["???", "?.?", "???"]);
        let detector = FrontierDetector::new();
        assert!(!detector.is_frontier_cell(&grid, GridCoord::new(0, 1)));
        assert!(detector.scan(&grid).is_empty());
    }

    #[test]
    fn test_known_cells_are_never_frontiers() {
        let grid = grid_from_rows(&["..", ".#"]);
        let detector = FrontierDetector::new();
        assert!(detector.scan(&grid).is_empty());
    }

    #[test]
    fn test_scan_row_major() {
        // Explored left half, unknown right half
        let grid = grid_from_rows(&["..??", "..??", "..??"]);
        let detector = FrontierDetector::new();
        let frontier = detector.scan(&grid);
        assert_eq!(
            frontier,
            vec![
                GridCoord::new(2, 0),
                GridCoord::new(2, 1),
                GridCoord::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_occupied_neighbor_alone_is_not_enough() {
        // Unknown cell only touches a wall
        let grid = grid_from_rows(&["#?", "??"]);
        let detector = FrontierDetector::new();
        assert!(!detector.is_frontier_cell(&grid, GridCoord::new(1, 0)));
    }
}
