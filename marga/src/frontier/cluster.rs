//! Grouping of frontier cells into 8-connected clusters.

use std::collections::HashSet;

use log::debug;

use crate::core::GridCoord;

/// A maximal 8-connected group of frontier cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontierCluster {
    /// Members in absorption order; the first one seeded the cluster
    pub cells: Vec<GridCoord>,
}

impl FrontierCluster {
    pub fn new(cells: Vec<GridCoord>) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        self.cells.contains(&coord)
    }

    /// Truncated mean of the member coordinates.
    ///
    /// Returns `None` for an empty cluster.
    pub fn mean_cell(&self) -> Option<GridCoord> {
        if self.cells.is_empty() {
            return None;
        }
        let n = self.cells.len() as i64;
        let sum_x: i64 = self.cells.iter().map(|c| c.x as i64).sum();
        let sum_y: i64 = self.cells.iter().map(|c| c.y as i64).sum();
        Some(GridCoord::new((sum_x / n) as i32, (sum_y / n) as i32))
    }
}

/// Partitions frontier cells into clusters.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrontierClusterer;

impl FrontierClusterer {
    pub fn new() -> Self {
        Self
    }

    /// Group cells into maximal 8-adjacency-connected clusters.
    ///
    /// Each cluster is seeded with the first still-ungrouped input cell and
    /// then grown pass by pass, absorbing every remaining cell adjacent to a
    /// member, until a full pass absorbs nothing. Clusters come out in the
    /// order of their seeds. Duplicate input cells are ignored.
    pub fn group(&self, cells: &[GridCoord]) -> Vec<FrontierCluster> {
        let mut seen = HashSet::with_capacity(cells.len());
        let mut remaining: Vec<GridCoord> =
            cells.iter().copied().filter(|c| seen.insert(*c)).collect();
        let mut clusters = Vec::new();

        while !remaining.is_empty() {
            let seed = remaining.remove(0);
            let mut members = vec![seed];
            let mut member_set: HashSet<GridCoord> = HashSet::from([seed]);

            loop {
                let mut grew = false;
                let mut i = 0;
                while i < remaining.len() {
                    let candidate = remaining[i];
                    if touches_any(candidate, &member_set) {
                        remaining.remove(i);
                        members.push(candidate);
                        member_set.insert(candidate);
                        grew = true;
                    } else {
                        i += 1;
                    }
                }
                if !grew {
                    break;
                }
            }

            clusters.push(FrontierCluster::new(members));
        }

        debug!(
            "[Frontier] Grouped {} cells into {} clusters",
            seen.len(),
            clusters.len()
        );
        clusters
    }
}

/// True if any 8-neighbour of `cell` is in `members`.
fn touches_any(cell: GridCoord, members: &HashSet<GridCoord>) -> bool {
    (-1..=1).any(|dy| {
        (-1..=1).any(|dx| {
            (dx != 0 || dy != 0) && members.contains(&GridCoord::new(cell.x + dx, cell.y + dy))
        })
    })
}
