//! A* planner implementation.

use crate::core::{GridCoord, WorldPoint};
use crate::error::{NavError, PathFailure, Result};
use crate::grid::OccupancyGrid;
use crate::viz::{CellObserver, NoopObserver, SearchControl, SearchProgress};
use log::{debug, trace};

use super::types::{AStarConfig, NodeState, PathResult, SearchArena};

/// Neighbour expansion order: E, N, W, S, SW, NE, NW, SE.
///
/// Together with first-found tie-breaking in the open list this fixes the
/// exact path returned among equal-cost alternatives.
const EXPANSION_ORDER: [(i32, i32); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

/// Every accepted move costs one, diagonals included.
///
/// This makes path cost equal to Chebyshev distance on open ground while the
/// heuristic stays Euclidean, so routes are not guaranteed shortest in
/// metres.
const STEP_COST: f32 = 1.0;

/// A* pathfinder over an [`OccupancyGrid`].
///
/// Owns its [`SearchArena`] so repeated searches reuse the allocation.
/// The grid is borrowed per call and never mutated.
#[derive(Clone, Debug, Default)]
pub struct AStarPlanner {
    config: AStarConfig,
    arena: SearchArena,
}

impl AStarPlanner {
    /// Create a new A* planner
    pub fn new(config: AStarConfig) -> Self {
        Self {
            config,
            arena: SearchArena::new(),
        }
    }

    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    /// Bookkeeping left behind by the last search
    pub fn arena(&self) -> &SearchArena {
        &self.arena
    }

    /// Find a path from start to goal (grid coordinates)
    pub fn find_path(
        &mut self,
        grid: &OccupancyGrid,
        start: GridCoord,
        goal: GridCoord,
    ) -> Result<PathResult> {
        self.find_path_observed(grid, start, goal, &mut NoopObserver)
    }

    /// Find a path from start to goal (world coordinates)
    pub fn find_path_world(
        &mut self,
        grid: &OccupancyGrid,
        start: WorldPoint,
        goal: WorldPoint,
    ) -> Result<PathResult> {
        self.find_path(grid, grid.world_to_grid(start), grid.world_to_grid(goal))
    }

    /// Find a path, reporting every expansion to `observer`.
    ///
    /// The observer may cancel the search between expansions, in which case
    /// [`NavError::SearchCancelled`] is returned and the partial search is
    /// discarded.
    pub fn find_path_observed(
        &mut self,
        grid: &OccupancyGrid,
        start: GridCoord,
        goal: GridCoord,
        observer: &mut dyn CellObserver,
    ) -> Result<PathResult> {
        trace!(
            "[AStar] find_path: start=({},{}) goal=({},{})",
            start.x, start.y, goal.x, goal.y
        );

        let start_idx = grid.coord_to_index(start).ok_or(NavError::OutOfBoundsCell {
            x: start.x,
            y: start.y,
        })?;
        let goal_idx = grid.coord_to_index(goal).ok_or(NavError::OutOfBoundsCell {
            x: goal.x,
            y: goal.y,
        })?;

        if !grid.is_free(start) {
            debug!("[AStar] FAILED: StartBlocked at ({},{})", start.x, start.y);
            return Err(NavError::NoPathFound {
                reason: PathFailure::StartBlocked,
            });
        }
        if !grid.is_free(goal) {
            debug!("[AStar] FAILED: GoalBlocked at ({},{})", goal.x, goal.y);
            return Err(NavError::NoPathFound {
                reason: PathFailure::GoalBlocked,
            });
        }

        self.arena.reset(grid.cell_count());
        self.arena.discover(start_idx, 0.0, heuristic(start, goal), None);

        let mut current = self.arena.pop_min_f().unwrap_or(start_idx);
        let mut nodes_expanded = 0;
        let mut opened: Vec<GridCoord> = Vec::with_capacity(EXPANSION_ORDER.len());

        while current != goal_idx {
            if nodes_expanded >= self.config.max_expansions {
                debug!(
                    "[AStar] FAILED: BudgetExceeded ({} expansions)",
                    nodes_expanded
                );
                return Err(NavError::NoPathFound {
                    reason: PathFailure::BudgetExceeded,
                });
            }
            nodes_expanded += 1;

            let coord = grid.index_to_coord(current);
            let g_next = self.arena.g(current) + STEP_COST;
            opened.clear();

            for &(dx, dy) in &EXPANSION_ORDER {
                let neighbor = GridCoord::new(coord.x + dx, coord.y + dy);
                let Some(index) = grid.coord_to_index(neighbor) else {
                    continue;
                };
                if !grid.is_free(neighbor) || self.arena.state(index) != NodeState::Unseen {
                    continue;
                }
                let h = heuristic(neighbor, goal);
                self.arena.discover(index, g_next, h, Some(current));
                opened.push(neighbor);
            }

            trace!(
                "[AStar] expand #{} ({},{}) g={} opened={} open={}",
                nodes_expanded,
                coord.x,
                coord.y,
                self.arena.g(current),
                opened.len(),
                self.arena.open_len()
            );

            if self.config.report_progress {
                let progress = SearchProgress {
                    expanded: nodes_expanded,
                    current: coord,
                    opened: &opened,
                    open_len: self.arena.open_len(),
                };
                if observer.on_expansion(&progress) == SearchControl::Cancel {
                    debug!("[AStar] Cancelled after {} expansions", nodes_expanded);
                    return Err(NavError::SearchCancelled {
                        expanded: nodes_expanded,
                    });
                }
            }

            current = match self.arena.pop_min_f() {
                Some(index) => index,
                None => {
                    debug!(
                        "[AStar] FAILED: Exhausted after expanding {} nodes",
                        nodes_expanded
                    );
                    return Err(NavError::NoPathFound {
                        reason: PathFailure::Exhausted,
                    });
                }
            };
        }

        let path: Vec<GridCoord> = self
            .arena
            .trace_back(goal_idx)
            .into_iter()
            .map(|i| grid.index_to_coord(i))
            .collect();

        debug!(
            "[AStar] SUCCESS: {} cells, cost {:.1}, {} expansions",
            path.len(),
            self.arena.g(goal_idx),
            nodes_expanded
        );

        Ok(PathResult {
            path,
            cost: self.arena.g(goal_idx),
            nodes_expanded,
        })
    }
}

/// Straight-line distance in cells, evaluated once per cell on discovery.
#[inline]
fn heuristic(from: GridCoord, to: GridCoord) -> f32 {
    from.euclidean_distance(&to)
}
