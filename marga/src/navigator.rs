//! Request-level entry point.
//!
//! [`Navigator`] holds the latest grid and the cell-role lists produced by
//! the last request. Every request is a full recomputation over the current
//! grid; nothing from a previous search carries over.

use log::{debug, info};

use crate::config::MargaConfig;
use crate::core::{GridCoord, Pose2D};
use crate::error::{NavError, Result};
use crate::frontier::{
    ExplorationGoal, FrontierClusterer, FrontierDetector, GoalSelector, pick_best,
};
use crate::grid::{LocalPatch, MapSnapshot, OccupancyConfig, OccupancyGrid};
use crate::pathfinding::{AStarPlanner, Waypoint, WaypointExtractor};
use crate::viz::{CellObserver, CellRecorder, CellRole, NoopObserver, Tee};

/// Outcome of [`Navigator::update_map`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapUpdate {
    /// The grid was rebuilt from the new snapshot
    Rebuilt { cells: usize, walls: usize },
    /// Snapshot identical to the last one; grid kept
    Unchanged,
}

/// A planned route.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Cell path from start to goal, both included
    pub cells: Vec<GridCoord>,
    /// Compressed waypoints for the motion controller
    pub waypoints: Vec<Waypoint>,
    pub nodes_expanded: usize,
}

/// Owns the current grid and runs planning / exploration requests against it.
#[derive(Debug)]
pub struct Navigator {
    occupancy: OccupancyConfig,
    planner: AStarPlanner,
    extractor: WaypointExtractor,
    detector: FrontierDetector,
    clusterer: FrontierClusterer,
    selector: GoalSelector,

    grid: Option<OccupancyGrid>,
    /// Last snapshot the grid was built from, for duplicate suppression
    last_snapshot: Option<MapSnapshot>,
    roles: CellRecorder,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(&MargaConfig::default())
    }
}

impl Navigator {
    pub fn new(config: &MargaConfig) -> Self {
        Self {
            occupancy: config.occupancy_config(),
            planner: AStarPlanner::new(config.astar_config()),
            extractor: WaypointExtractor::new(config.waypoint_config()),
            detector: FrontierDetector::new(),
            clusterer: FrontierClusterer::new(),
            selector: GoalSelector::new(config.exploration_config()),
            grid: None,
            last_snapshot: None,
            roles: CellRecorder::new(),
        }
    }

    /// Current grid, if a snapshot has been applied
    pub fn grid(&self) -> Option<&OccupancyGrid> {
        self.grid.as_ref()
    }

    /// Cells recorded for `role` by the last snapshot / request.
    pub fn cells(&self, role: CellRole) -> &[GridCoord] {
        self.roles.cells(role)
    }

    /// Replace the grid with one built from `snapshot`.
    ///
    /// A snapshot identical to the previous one is ignored. An invalid
    /// snapshot is rejected and the previous grid stays in place.
    pub fn update_map(&mut self, snapshot: MapSnapshot) -> Result<MapUpdate> {
        if self.grid.is_some() && self.last_snapshot.as_ref() == Some(&snapshot) {
            debug!("[Navigator] Snapshot unchanged, skipping rebuild");
            return Ok(MapUpdate::Unchanged);
        }

        let grid = OccupancyGrid::from_snapshot(&snapshot, &self.occupancy)?;
        let walls = grid.wall_cells();
        let update = MapUpdate::Rebuilt {
            cells: grid.cell_count(),
            walls: walls.len(),
        };

        info!(
            "[Navigator] Map rebuilt: {}x{} @ {:.3}m, {} walls",
            grid.width(),
            grid.height(),
            grid.resolution(),
            walls.len()
        );

        self.roles.on_cells(CellRole::Wall, &walls);
        self.grid = Some(grid);
        self.last_snapshot = Some(snapshot);
        Ok(update)
    }

    /// Fold a local patch into the current grid.
    ///
    /// Returns the number of cells rewritten, or 0 when no grid exists yet.
    pub fn apply_patch(&mut self, patch: &LocalPatch) -> usize {
        let Some(grid) = self.grid.as_mut() else {
            debug!("[Navigator] Local patch before first map, ignored");
            return 0;
        };

        let written = grid.apply_patch(patch);
        if written > 0 {
            self.roles.on_cells(CellRole::Wall, &grid.wall_cells());
            // The grid no longer matches the stored snapshot
            self.last_snapshot = None;
        }
        written
    }

    /// Plan a route between two world poses.
    pub fn plan_route(&mut self, start: Pose2D, goal: Pose2D) -> Result<Route> {
        self.plan_route_observed(start, goal, &mut NoopObserver)
    }

    /// Plan a route, forwarding search progress and the final path to `observer`.
    pub fn plan_route_observed(
        &mut self,
        start: Pose2D,
        goal: Pose2D,
        observer: &mut dyn CellObserver,
    ) -> Result<Route> {
        let grid = self.grid.as_ref().ok_or(NavError::NoMap)?;
        let start_cell = grid.world_to_grid(start.position());
        let goal_cell = grid.world_to_grid(goal.position());

        self.roles.clear_request();
        let mut tee = Tee::new(&mut self.roles, observer);

        let result = self
            .planner
            .find_path_observed(grid, start_cell, goal_cell, &mut tee)?;
        tee.on_cells(CellRole::Path, &result.path);

        let waypoints = self.extractor.compress(grid, &result.path);
        info!(
            "[Navigator] Route ({},{}) -> ({},{}): {} cells, {} waypoints",
            start_cell.x,
            start_cell.y,
            goal_cell.x,
            goal_cell.y,
            result.path.len(),
            waypoints.len()
        );

        Ok(Route {
            cells: result.path,
            waypoints,
            nodes_expanded: result.nodes_expanded,
        })
    }

    /// Pick the next frontier to explore from the robot's pose.
    pub fn next_exploration_goal(&mut self, robot: Pose2D) -> Result<ExplorationGoal> {
        self.next_exploration_goal_observed(robot, &mut NoopObserver)
    }

    /// Pick the next frontier, forwarding frontier, centroid and goal cells to `observer`.
    pub fn next_exploration_goal_observed(
        &mut self,
        robot: Pose2D,
        observer: &mut dyn CellObserver,
    ) -> Result<ExplorationGoal> {
        let grid = self.grid.as_ref().ok_or(NavError::NoMap)?;

        self.roles.clear_request();
        let mut tee = Tee::new(&mut self.roles, observer);

        let frontier = self.detector.scan(grid);
        tee.on_cells(CellRole::Frontier, &frontier);
        if frontier.is_empty() {
            debug!("[Navigator] No frontier cells, exploration complete");
            return Err(NavError::NoFrontierFound);
        }

        let clusters = self.clusterer.group(&frontier);
        let ranked = self.selector.rank(grid, &clusters, robot.position());
        let centroids: Vec<GridCoord> = ranked.iter().map(|s| s.centroid).collect();
        tee.on_cells(CellRole::Centroid, &centroids);

        let goal = ExplorationGoal::from(pick_best(&ranked).ok_or(NavError::NoFrontierFound)?);

        let mut highlight = vec![goal.cell];
        highlight.extend(
            goal.cell
                .neighbors_4()
                .into_iter()
                .filter(|&c| grid.is_valid_coord(c)),
        );
        tee.on_cells(CellRole::Goal, &highlight);

        info!(
            "[Navigator] Exploration goal ({},{}) at ({:.2}, {:.2}), {} clusters, weight {:.3}",
            goal.cell.x,
            goal.cell.y,
            goal.world.x,
            goal.world.y,
            clusters.len(),
            goal.weight
        );
        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorldPoint;

    fn snapshot(rows: &[&str]) -> MapSnapshot {
        MapSnapshot::from_rows(rows, 1.0, WorldPoint::ZERO, &OccupancyConfig::default())
    }

    fn pose(x: f32, y: f32) -> Pose2D {
        Pose2D::new(x, y, 0.0)
    }

    #[test]
    fn test_requests_before_map_fail() {
        let mut nav = Navigator::default();
        assert_eq!(
            nav.plan_route(pose(0.5, 0.5), pose(1.5, 0.5)),
            Err(NavError::NoMap)
        );
        assert_eq!(nav.next_exploration_goal(pose(0.5, 0.5)), Err(NavError::NoMap));
        assert_eq!(
            nav.apply_patch(&LocalPatch::new(1, 1, 1.0, WorldPoint::ZERO, vec![100])),
            0
        );
    }

    #[test]
    fn test_duplicate_snapshot_is_skipped() {
        let mut nav = Navigator::default();
        let snap = snapshot(&["..#", "..."]);
        assert_eq!(
            nav.update_map(snap.clone()),
            Ok(MapUpdate::Rebuilt { cells: 6, walls: 1 })
        );
        assert_eq!(nav.update_map(snap), Ok(MapUpdate::Unchanged));
        assert_eq!(nav.cells(CellRole::Wall), &[GridCoord::new(2, 0)]);
    }

    #[test]
    fn test_invalid_snapshot_keeps_previous_grid() {
        let mut nav = Navigator::default();
        nav.update_map(snapshot(&["...", "..."])).unwrap();

        let bad = MapSnapshot::new(4, 4, 1.0, WorldPoint::ZERO, vec![0; 3]);
        assert_eq!(
            nav.update_map(bad),
            Err(NavError::InvalidMapSnapshot {
                expected: 16,
                actual: 3
            })
        );
        assert_eq!(nav.grid().map(|g| g.width()), Some(3));
    }

    #[test]
    fn test_patch_invalidates_duplicate_check() {
        let mut nav = Navigator::default();
        let snap = snapshot(&["...", "..."]);
        nav.update_map(snap.clone()).unwrap();

        let patch = LocalPatch::new(1, 1, 1.0, WorldPoint::new(1.0, 0.0), vec![100]);
        assert_eq!(nav.apply_patch(&patch), 1);
        assert_eq!(nav.cells(CellRole::Wall), &[GridCoord::new(1, 0)]);

        // Same full snapshot again must undo the patch
        assert!(matches!(
            nav.update_map(snap),
            Ok(MapUpdate::Rebuilt { walls: 0, .. })
        ));
    }

    #[test]
    fn test_plan_route_records_roles() {
        let mut nav = Navigator::default();
        nav.update_map(snapshot(&["....", "....", "...."])).unwrap();

        let route = nav.plan_route(pose(0.5, 0.5), pose(3.5, 0.5)).unwrap();
        assert_eq!(route.cells.len(), 4);
        assert_eq!(route.waypoints.len(), 1);
        assert_eq!(route.waypoints[0].cell, GridCoord::new(3, 0));
        assert_eq!(nav.cells(CellRole::Path), route.cells.as_slice());
        assert_eq!(nav.cells(CellRole::Expanded).len(), route.nodes_expanded);
    }

    #[test]
    fn test_exploration_goal_and_highlight() {
        let mut nav = Navigator::default();
        nav.update_map(snapshot(&["...??", "...??", "...??"])).unwrap();

        let goal = nav.next_exploration_goal(pose(0.5, 1.5)).unwrap();
        // Frontier column x = 3, mean (3, 1) is unknown and snaps to (2, 0)
        assert_eq!(nav.cells(CellRole::Frontier).len(), 3);
        assert_eq!(goal.cell, GridCoord::new(2, 0));
        assert_eq!(goal.cluster_size, 3);
        assert_eq!(nav.cells(CellRole::Centroid), &[GridCoord::new(2, 0)]);

        let highlight = nav.cells(CellRole::Goal);
        assert_eq!(highlight[0], goal.cell);
        // (2,-1) is outside the grid
        assert_eq!(highlight.len(), 4);
    }

    #[test]
    fn test_fully_explored_map_has_no_frontier() {
        let mut nav = Navigator::default();
        nav.update_map(snapshot(&["...", ".#."])).unwrap();
        assert_eq!(
            nav.next_exploration_goal(pose(0.5, 0.5)),
            Err(NavError::NoFrontierFound)
        );
    }

    #[test]
    fn test_new_request_clears_previous_roles() {
        let mut nav = Navigator::default();
        nav.update_map(snapshot(&["...??", "...??"])).unwrap();
        nav.next_exploration_goal(pose(0.5, 0.5)).unwrap();
        assert!(!nav.cells(CellRole::Frontier).is_empty());

        nav.plan_route(pose(0.5, 0.5), pose(2.5, 0.5)).unwrap();
        assert!(nav.cells(CellRole::Frontier).is_empty());
        assert_eq!(nav.cells(CellRole::Path).len(), 3);
    }
}
