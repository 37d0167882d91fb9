//! Shared fixtures for marga integration tests.

#![allow(dead_code)]

use marga::{GridCoord, MapSnapshot, OccupancyConfig, OccupancyGrid, WorldPoint};

/// Enable log output when tests run with `RUST_LOG` set.
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Snapshot from character rows at 1 m/cell, origin at zero. First row is y = 0.
pub fn snapshot_from_rows(rows: &[&str]) -> MapSnapshot {
    MapSnapshot::from_rows(rows, 1.0, WorldPoint::ZERO, &OccupancyConfig::default())
}

/// Grid from character rows at 1 m/cell.
pub fn grid_from_rows(rows: &[&str]) -> OccupancyGrid {
    OccupancyGrid::from_snapshot(&snapshot_from_rows(rows), &OccupancyConfig::default()).unwrap()
}

/// Fully free grid.
pub fn open_grid(width: usize, height: usize, resolution: f32, origin: WorldPoint) -> OccupancyGrid {
    let snapshot = MapSnapshot::filled(width, height, resolution, origin, 0);
    OccupancyGrid::from_snapshot(&snapshot, &OccupancyConfig::default()).unwrap()
}

pub fn coords(list: &[(i32, i32)]) -> Vec<GridCoord> {
    list.iter().map(|&(x, y)| GridCoord::new(x, y)).collect()
}

/// Assert that a path is a chain of 8-adjacent Free cells from `start` to `goal`.
pub fn assert_valid_path(grid: &OccupancyGrid, path: &[GridCoord], start: GridCoord, goal: GridCoord) {
    assert_eq!(path.first(), Some(&start), "path must begin at start");
    assert_eq!(path.last(), Some(&goal), "path must end at goal");
    for cell in path {
        assert!(grid.is_free(*cell), "path crosses non-free cell {:?}", cell);
    }
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1]),
            "{:?} -> {:?} is not a single step",
            pair[0],
            pair[1]
        );
    }
}
