//! Exploration goal selection.
//!
//! Each cluster is represented by its centroid cell and weighted by
//! `size / distance(centroid, robot)`, so large nearby frontiers win. The
//! first cluster with the highest weight is chosen.

use std::collections::VecDeque;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::cluster::FrontierCluster;
use crate::core::{GridCoord, WorldPoint};
use crate::error::{NavError, Result};
use crate::grid::OccupancyGrid;

/// Goal selection settings
#[derive(Clone, Debug, PartialEq)]
pub struct ExplorationConfig {
    /// Clusters smaller than this are ignored
    pub min_cluster_size: usize,
    /// Lower bound on the robot-to-centroid distance (meters)
    pub min_goal_distance: f32,
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            min_cluster_size: 1,
            min_goal_distance: 1e-3,
        }
    }
}

/// A cluster with its centroid and score.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredCluster {
    /// Position in the cluster list passed to [`GoalSelector::rank`]
    pub index: usize,
    /// Centroid snapped to a Free cell
    pub centroid: GridCoord,
    /// Centroid cell center in world coordinates
    pub world: WorldPoint,
    /// Number of frontier cells
    pub size: usize,
    /// Distance from the robot to `world` (meters, clamped)
    pub distance: f32,
    /// `size / distance`
    pub weight: f32,
}

/// The next place to explore.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplorationGoal {
    pub cell: GridCoord,
    pub world: WorldPoint,
    pub weight: f32,
    pub cluster_size: usize,
}

impl From<&ScoredCluster> for ExplorationGoal {
    fn from(scored: &ScoredCluster) -> Self {
        Self {
            cell: scored.centroid,
            world: scored.world,
            weight: scored.weight,
            cluster_size: scored.size,
        }
    }
}

/// Scores frontier clusters and picks the exploration target.
#[derive(Clone, Debug, Default)]
pub struct GoalSelector {
    config: ExplorationConfig,
}

impl GoalSelector {
    pub fn new(config: ExplorationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExplorationConfig {
        &self.config
    }

    /// Representative cell of a cluster.
    ///
    /// The truncated mean of the members if it is Free, otherwise the first
    /// Free cell reached by a breadth-first search from the mean over the
    /// whole grid. `None` if the cluster is empty or the grid has no Free
    /// cell at all.
    pub fn centroid(&self, grid: &OccupancyGrid, cluster: &FrontierCluster) -> Option<GridCoord> {
        let mean = cluster.mean_cell()?;
        if grid.is_free(mean) {
            return Some(mean);
        }
        let snapped = nearest_free_cell(grid, mean);
        if let Some(cell) = snapped {
            trace!(
                "[Frontier] Centroid ({},{}) not free, snapped to ({},{})",
                mean.x, mean.y, cell.x, cell.y
            );
        }
        snapped
    }

    /// Score every usable cluster, preserving input order.
    ///
    /// Clusters below `min_cluster_size`, or without a Free centroid, are left out.
    pub fn rank(
        &self,
        grid: &OccupancyGrid,
        clusters: &[FrontierCluster],
        robot: WorldPoint,
    ) -> Vec<ScoredCluster> {
        clusters
            .iter()
            .enumerate()
            .filter(|(_, cluster)| {
                !cluster.is_empty() && cluster.len() >= self.config.min_cluster_size
            })
            .filter_map(|(index, cluster)| {
                let centroid = self.centroid(grid, cluster)?;
                let world = grid.grid_to_world(centroid);
                let distance = world.distance(&robot).max(self.config.min_goal_distance);
                let size = cluster.len();
                Some(ScoredCluster {
                    index,
                    centroid,
                    world,
                    size,
                    distance,
                    weight: size as f32 / distance,
                })
            })
            .collect()
    }

    /// Pick the highest-weight cluster; ties go to the earliest one.
    ///
    /// Fails with [`NavError::NoFrontierFound`] when there is nothing to rank.
    pub fn select_goal(
        &self,
        grid: &OccupancyGrid,
        clusters: &[FrontierCluster],
        robot: WorldPoint,
    ) -> Result<ExplorationGoal> {
        let ranked = self.rank(grid, clusters, robot);
        let best = pick_best(&ranked).ok_or(NavError::NoFrontierFound)?;

        debug!(
            "[Frontier] Goal ({},{}) from cluster {} of {}: size={}, dist={:.2}m, weight={:.3}",
            best.centroid.x,
            best.centroid.y,
            best.index,
            clusters.len(),
            best.size,
            best.distance,
            best.weight
        );
        Ok(ExplorationGoal::from(best))
    }
}

/// First entry with strictly maximal weight.
pub fn pick_best(ranked: &[ScoredCluster]) -> Option<&ScoredCluster> {
    let mut best: Option<&ScoredCluster> = None;
    for candidate in ranked {
        match best {
            Some(current) if candidate.weight <= current.weight => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Breadth-first search over 8-neighbours for the closest Free cell.
fn nearest_free_cell(grid: &OccupancyGrid, from: GridCoord) -> Option<GridCoord> {
    let start = grid.coord_to_index(from)?;
    let mut visited = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if grid.is_free(current) {
            return Some(current);
        }
        for neighbor in grid.neighbors8(current) {
            let Some(index) = grid.coord_to_index(neighbor) else {
                continue;
            };
            if !visited[index] {
                visited[index] = true;
                queue.push_back(neighbor);
            }
        }
    }
    None
}
