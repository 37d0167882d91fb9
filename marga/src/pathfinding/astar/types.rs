//! A* pathfinding types.

use crate::core::{GridCoord, WorldPoint};
use crate::grid::OccupancyGrid;

/// Sentinel for "no parent" in the arena.
const NO_PARENT: usize = usize::MAX;

/// Per-cell lifecycle inside one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NodeState {
    #[default]
    Unseen,
    Open,
    Closed,
}

/// Search bookkeeping for one planning run, indexed by flat grid index.
///
/// g, h and parent are assigned once on discovery and never revised.
/// `reset` wipes everything at the start of every run, so no state leaks
/// between searches even when the arena is reused.
#[derive(Clone, Debug, Default)]
pub struct SearchArena {
    g: Vec<f32>,
    h: Vec<f32>,
    parent: Vec<usize>,
    state: Vec<NodeState>,
    /// Open cells in discovery order
    open: Vec<usize>,
}

impl SearchArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the arena for `cell_count` cells and clear all fields.
    pub fn reset(&mut self, cell_count: usize) {
        self.g.clear();
        self.g.resize(cell_count, f32::INFINITY);
        self.h.clear();
        self.h.resize(cell_count, 0.0);
        self.parent.clear();
        self.parent.resize(cell_count, NO_PARENT);
        self.state.clear();
        self.state.resize(cell_count, NodeState::Unseen);
        self.open.clear();
    }

    /// Record a newly discovered cell and append it to the open list.
    pub(super) fn discover(&mut self, index: usize, g: f32, h: f32, parent: Option<usize>) {
        self.g[index] = g;
        self.h[index] = h;
        self.parent[index] = parent.unwrap_or(NO_PARENT);
        self.state[index] = NodeState::Open;
        self.open.push(index);
    }

    /// Remove and close the open cell with the smallest f.
    ///
    /// Ties go to the earliest-discovered cell.
    pub(super) fn pop_min_f(&mut self) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (pos, &index) in self.open.iter().enumerate() {
            let f = self.f(index);
            match best {
                Some((_, best_f)) if f >= best_f => {}
                _ => best = Some((pos, f)),
            }
        }

        let (pos, _) = best?;
        let index = self.open.remove(pos);
        self.state[index] = NodeState::Closed;
        Some(index)
    }

    #[inline]
    pub fn state(&self, index: usize) -> NodeState {
        self.state.get(index).copied().unwrap_or_default()
    }

    /// Cost from start; infinite for cells never discovered
    #[inline]
    pub fn g(&self, index: usize) -> f32 {
        self.g.get(index).copied().unwrap_or(f32::INFINITY)
    }

    /// Heuristic assigned on discovery
    #[inline]
    pub fn h(&self, index: usize) -> f32 {
        self.h.get(index).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn f(&self, index: usize) -> f32 {
        self.g(index) + self.h(index)
    }

    #[inline]
    pub fn parent(&self, index: usize) -> Option<usize> {
        match self.parent.get(index) {
            Some(&p) if p != NO_PARENT => Some(p),
            _ => None,
        }
    }

    /// Number of cells currently open
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Open cells in discovery order
    pub fn open_cells(&self) -> &[usize] {
        &self.open
    }

    /// Number of closed cells
    pub fn closed_len(&self) -> usize {
        self.state
            .iter()
            .filter(|&&s| s == NodeState::Closed)
            .count()
    }

    /// Walk parent links from `goal` back to the root, then reverse.
    pub(super) fn trace_back(&self, goal: usize) -> Vec<usize> {
        let mut chain = vec![goal];
        let mut current = goal;
        while let Some(prev) = self.parent(current) {
            chain.push(prev);
            current = prev;
        }
        chain.reverse();
        chain
    }
}

/// A* pathfinding configuration
#[derive(Clone, Debug)]
pub struct AStarConfig {
    /// Maximum number of expansions before giving up; `usize::MAX` means no limit
    pub max_expansions: usize,
    /// Report every expansion to the observer (also enables cancellation)
    pub report_progress: bool,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            max_expansions: usize::MAX,
            report_progress: true,
        }
    }
}

/// Result of a successful A* search
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Cells from start to goal, both included
    pub path: Vec<GridCoord>,
    /// Accumulated step cost (one per step, diagonal included)
    pub cost: f32,
    /// Number of cells expanded during search
    pub nodes_expanded: usize,
}

impl PathResult {
    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.path.len()
    }

    /// Number of moves between cells
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Cell centres in world coordinates
    pub fn to_world(&self, grid: &OccupancyGrid) -> Vec<WorldPoint> {
        self.path.iter().map(|&c| grid.grid_to_world(c)).collect()
    }

    /// Path length in meters along cell centres
    pub fn length_meters(&self, grid: &OccupancyGrid) -> f32 {
        self.to_world(grid)
            .windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_min_f_prefers_first_on_tie() {
        let mut arena = SearchArena::new();
        arena.reset(4);
        arena.discover(2, 1.0, 2.0, None);
        arena.discover(0, 2.0, 1.0, None);
        arena.discover(3, 0.5, 3.0, None);

        // 2 and 0 tie at f = 3.0; 2 was discovered first
        assert_eq!(arena.pop_min_f(), Some(2));
        assert_eq!(arena.pop_min_f(), Some(0));
        assert_eq!(arena.pop_min_f(), Some(3));
        assert_eq!(arena.pop_min_f(), None);
        assert_eq!(arena.closed_len(), 3);
    }

    #[test]
    fn test_reset_clears_previous_run() {
        let mut arena = SearchArena::new();
        arena.reset(3);
        arena.discover(0, 0.0, 1.0, None);
        arena.discover(1, 1.0, 0.0, Some(0));
        assert_eq!(arena.parent(1), Some(0));

        arena.reset(3);
        assert_eq!(arena.parent(1), None);
        assert_eq!(arena.state(1), NodeState::Unseen);
        assert_eq!(arena.open_len(), 0);
        assert!(arena.g(0).is_infinite());
    }

    #[test]
    fn test_trace_back() {
        let mut arena = SearchArena::new();
        arena.reset(5);
        arena.discover(4, 0.0, 0.0, None);
        arena.discover(1, 1.0, 0.0, Some(4));
        arena.discover(3, 2.0, 0.0, Some(1));
        assert_eq!(arena.trace_back(3), vec![4, 1, 3]);
    }
}
