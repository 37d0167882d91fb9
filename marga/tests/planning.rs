//! Route planning integration tests.

mod common;

use approx::assert_relative_eq;
use marga::pathfinding::{find_path, path_exists};
use marga::{
    AStarConfig, AStarPlanner, Direction, GridCoord, MapSnapshot, NavError, Navigator,
    PathFailure, Pose2D, WaypointExtractor, WorldPoint,
};

// ============================================================================
// A* properties
// ============================================================================

#[test]
fn test_open_grid_step_count_is_chebyshev() {
    common::init_logging();
    let grid = common::open_grid(10, 10, 0.05, WorldPoint::ZERO);
    let mut planner = AStarPlanner::default();

    let pairs = [
        ((0, 0), (9, 9)),
        ((0, 0), (3, 7)),
        ((9, 0), (0, 4)),
        ((5, 5), (5, 5)),
        ((2, 8), (8, 1)),
        ((4, 4), (5, 4)),
    ];

    for ((sx, sy), (gx, gy)) in pairs {
        let start = GridCoord::new(sx, sy);
        let goal = GridCoord::new(gx, gy);
        let result = planner.find_path(&grid, start, goal).unwrap();

        common::assert_valid_path(&grid, &result.path, start, goal);
        assert_eq!(
            result.steps() as i32,
            start.chebyshev_distance(&goal),
            "step count for {:?} -> {:?}",
            start,
            goal
        );
        assert_relative_eq!(result.cost, result.steps() as f32);
    }
}

#[test]
fn test_detour_around_wall() {
    common::init_logging();
    let grid = common::grid_from_rows(&[
        "...#...", "...#...", "...#...", "...#...", "...#...", "...#...", ".......",
    ]);
    let start = GridCoord::new(1, 0);
    let goal = GridCoord::new(5, 0);

    let result = find_path(&grid, start, goal).unwrap();

    common::assert_valid_path(&grid, &result.path, start, goal);
    assert!(result.path.contains(&GridCoord::new(3, 6)));
    assert_eq!(result.steps(), 12);
}

#[test]
fn test_occupied_goal_fails() {
    let grid = common::grid_from_rows(&["....", "..#.", "...."]);
    let err = find_path(&grid, GridCoord::new(0, 0), GridCoord::new(2, 1)).unwrap_err();
    assert_eq!(
        err,
        NavError::NoPathFound {
            reason: PathFailure::GoalBlocked
        }
    );
}

#[test]
fn test_unknown_goal_fails() {
    let grid = common::grid_from_rows(&["...?"]);
    assert!(!path_exists(&grid, GridCoord::new(0, 0), GridCoord::new(3, 0)));
}

#[test]
fn test_enclosed_goal_exhausts_open_set() {
    let grid = common::grid_from_rows(&[".......", "....###", "....#.#", "....###"]);
    let err = find_path(&grid, GridCoord::new(0, 0), GridCoord::new(5, 2)).unwrap_err();
    assert_eq!(
        err,
        NavError::NoPathFound {
            reason: PathFailure::Exhausted
        }
    );
}

#[test]
fn test_unknown_cells_are_not_crossed() {
    // The only gap in the wall is unobserved
    let grid = common::grid_from_rows(&["..#..", "..?..", "..#.."]);
    assert!(!path_exists(&grid, GridCoord::new(0, 1), GridCoord::new(4, 1)));
}

#[test]
fn test_budget_limits_search() {
    let grid = common::open_grid(50, 50, 0.05, WorldPoint::ZERO);
    let mut planner = AStarPlanner::new(AStarConfig {
        max_expansions: 5,
        ..Default::default()
    });
    let err = planner
        .find_path(&grid, GridCoord::new(0, 0), GridCoord::new(49, 49))
        .unwrap_err();
    assert_eq!(
        err,
        NavError::NoPathFound {
            reason: PathFailure::BudgetExceeded
        }
    );
}

/// 20 m square room split by walls on every fourth row, gaps alternating sides.
fn serpentine_snapshot(size: usize) -> MapSnapshot {
    let mut data = vec![0i8; size * size];
    for y in (2..size).step_by(4) {
        let gap = if (y / 4) % 2 == 0 { size - 1 } else { 0 };
        for x in (0..size).filter(|&x| x != gap) {
            data[y * size + x] = 100;
        }
    }
    MapSnapshot::new(size, size, 0.05, WorldPoint::ZERO, data)
}

#[test]
fn test_default_navigator_routes_long_serpentine() {
    common::init_logging();
    let mut nav = Navigator::default();
    nav.update_map(serpentine_snapshot(400)).unwrap();

    let start = Pose2D::new(0.025, 0.025, 0.0);
    let goal = Pose2D::new(0.025, 19.975, 0.0);
    let route = nav.plan_route(start, goal).unwrap();

    let grid = nav.grid().unwrap();
    common::assert_valid_path(
        grid,
        &route.cells,
        GridCoord::new(0, 0),
        GridCoord::new(0, 399),
    );
    // Far more work than any fixed budget tuned for small rooms would allow
    assert!(route.nodes_expanded > 100_000);
    assert!(route.cells.len() > 39_000);
}

#[test]
fn test_planner_is_reusable_across_grids() {
    let mut planner = AStarPlanner::default();
    let small = common::open_grid(5, 5, 0.1, WorldPoint::ZERO);
    let large = common::open_grid(30, 30, 0.1, WorldPoint::ZERO);

    let a = planner
        .find_path(&large, GridCoord::new(0, 0), GridCoord::new(29, 0))
        .unwrap();
    let b = planner
        .find_path(&small, GridCoord::new(0, 0), GridCoord::new(4, 0))
        .unwrap();
    let c = planner
        .find_path(&large, GridCoord::new(0, 0), GridCoord::new(29, 0))
        .unwrap();

    assert_eq!(b.steps(), 4);
    assert_eq!(a.path, c.path);
}

// ============================================================================
// Waypoints
// ============================================================================

#[test]
fn test_straight_route_single_waypoint() {
    let grid = common::open_grid(10, 10, 0.5, WorldPoint::ZERO);
    let result = find_path(&grid, GridCoord::new(0, 0), GridCoord::new(7, 0)).unwrap();

    let waypoints = WaypointExtractor::default().compress(&grid, &result.path);

    assert_eq!(waypoints.len(), 1);
    assert_eq!(waypoints[0].cell, GridCoord::new(7, 0));
    assert_relative_eq!(waypoints[0].position.x, 3.75);
    assert_relative_eq!(waypoints[0].position.y, 0.25);
    assert_relative_eq!(waypoints[0].heading, 0.0);
}

#[test]
fn test_l_shaped_path_two_waypoints() {
    let extractor = WaypointExtractor::default();
    let path = common::coords(&[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (3, 2)]);

    let points = extractor.turning_points(&path);

    assert_eq!(
        points,
        vec![
            (GridCoord::new(3, 0), Direction::East),
            (GridCoord::new(3, 2), Direction::North),
        ]
    );
}

#[test]
fn test_vertical_route_heads_north() {
    let grid = common::open_grid(10, 10, 0.1, WorldPoint::ZERO);
    let result = find_path(&grid, GridCoord::new(2, 3), GridCoord::new(2, 9)).unwrap();

    let waypoints = WaypointExtractor::default().compress(&grid, &result.path);

    assert_eq!(waypoints.len(), 1);
    assert_relative_eq!(waypoints[0].heading, std::f32::consts::FRAC_PI_2);
}

// ============================================================================
// Coordinate mapping
// ============================================================================

#[test]
fn test_world_grid_roundtrip() {
    let grid = common::open_grid(20, 20, 0.05, WorldPoint::new(-0.5, -0.5));
    for y in 0..20 {
        for x in 0..20 {
            let cell = GridCoord::new(x, y);
            assert_eq!(grid.world_to_grid(grid.grid_to_world(cell)), cell);
        }
    }
}

#[test]
fn test_world_planning_uses_cell_centres() {
    let grid = common::open_grid(10, 10, 0.1, WorldPoint::new(-0.5, -0.5));
    let mut planner = AStarPlanner::default();

    let result = planner
        .find_path_world(&grid, WorldPoint::new(-0.44, -0.44), WorldPoint::new(0.02, -0.44))
        .unwrap();

    assert_eq!(result.path.first(), Some(&GridCoord::new(0, 0)));
    assert_eq!(result.path.last(), Some(&GridCoord::new(5, 0)));
    let world = result.to_world(&grid);
    assert_relative_eq!(world[0].x, -0.45, epsilon = 1e-5);
    assert_relative_eq!(result.length_meters(&grid), 0.5, epsilon = 1e-5);
}
