//! Observer seam for intermediate cell sets.
//!
//! The core never publishes anything itself. Callers that want to render
//! search progress or exploration state implement [`CellObserver`] and pass
//! it into the planner / navigator. [`CellRecorder`] keeps everything in
//! memory, which is what tests and the example binary use.

use crate::core::GridCoord;

/// Role a cell plays in the latest computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellRole {
    /// Occupied cell of the current snapshot
    Wall,
    /// Discovered by the planner but not yet expanded
    Open,
    /// Expanded by the planner
    Expanded,
    /// Member of the final route
    Path,
    /// Frontier cell
    Frontier,
    /// Representative cell of a frontier cluster
    Centroid,
    /// Chosen exploration target and its orthogonal neighbours
    Goal,
}

impl CellRole {
    pub const ALL: [CellRole; 7] = [
        CellRole::Wall,
        CellRole::Open,
        CellRole::Expanded,
        CellRole::Path,
        CellRole::Frontier,
        CellRole::Centroid,
        CellRole::Goal,
    ];

    /// Stable topic name for external visualizers.
    pub fn topic(self) -> &'static str {
        match self {
            CellRole::Wall => "wall",
            CellRole::Open => "open",
            CellRole::Expanded => "expanded",
            CellRole::Path => "path",
            CellRole::Frontier => "frontier",
            CellRole::Centroid => "centroid",
            CellRole::Goal => "goal",
        }
    }

    #[inline]
    fn slot(self) -> usize {
        match self {
            CellRole::Wall => 0,
            CellRole::Open => 1,
            CellRole::Expanded => 2,
            CellRole::Path => 3,
            CellRole::Frontier => 4,
            CellRole::Centroid => 5,
            CellRole::Goal => 6,
        }
    }
}

/// Whether a running search should keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SearchControl {
    #[default]
    Continue,
    Cancel,
}

/// Delta reported after every A* expansion.
///
/// Observers that want the full open/closed sets rebuild them from the
/// deltas: `current` leaves the open set and joins the closed set, `opened`
/// joins the open set.
#[derive(Clone, Copy, Debug)]
pub struct SearchProgress<'a> {
    /// Number of expansions so far, including this one
    pub expanded: usize,
    /// Cell just moved to the closed set
    pub current: GridCoord,
    /// Cells discovered by this expansion
    pub opened: &'a [GridCoord],
    /// Open set size after this expansion
    pub open_len: usize,
}

/// Receives intermediate cell sets.
///
/// Both methods default to no-ops so implementors pick what they need.
pub trait CellObserver {
    /// Called after each A* expansion. Returning [`SearchControl::Cancel`]
    /// aborts the search at this expansion boundary.
    fn on_expansion(&mut self, _progress: &SearchProgress<'_>) -> SearchControl {
        SearchControl::Continue
    }

    /// Called with a complete cell set for one role.
    fn on_cells(&mut self, _role: CellRole, _cells: &[GridCoord]) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl CellObserver for NoopObserver {}

/// In-memory observer keeping one cell list per role.
#[derive(Clone, Debug, Default)]
pub struct CellRecorder {
    cells: [Vec<GridCoord>; 7],
    expansions: usize,
    cancel_after: Option<usize>,
}

impl CellRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder that cancels the search once `expansions` have been reported.
    pub fn cancelling_after(expansions: usize) -> Self {
        Self {
            cancel_after: Some(expansions),
            ..Self::default()
        }
    }

    /// Cells recorded for `role`, in report order.
    pub fn cells(&self, role: CellRole) -> &[GridCoord] {
        &self.cells[role.slot()]
    }

    /// Expansions observed since the last clear.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Forget one role's cells.
    pub fn clear_role(&mut self, role: CellRole) {
        self.cells[role.slot()].clear();
    }

    /// Forget everything except walls.
    pub fn clear_request(&mut self) {
        for role in CellRole::ALL {
            if role != CellRole::Wall {
                self.clear_role(role);
            }
        }
        self.expansions = 0;
    }
}

impl CellObserver for CellRecorder {
    fn on_expansion(&mut self, progress: &SearchProgress<'_>) -> SearchControl {
        self.expansions = progress.expanded;

        let open = &mut self.cells[CellRole::Open.slot()];
        open.retain(|c| *c != progress.current);
        open.extend_from_slice(progress.opened);
        self.cells[CellRole::Expanded.slot()].push(progress.current);

        match self.cancel_after {
            Some(limit) if progress.expanded >= limit => SearchControl::Cancel,
            _ => SearchControl::Continue,
        }
    }

    fn on_cells(&mut self, role: CellRole, cells: &[GridCoord]) {
        let slot = &mut self.cells[role.slot()];
        slot.clear();
        slot.extend_from_slice(cells);
    }
}

/// Forwards every event to two observers.
///
/// The search is cancelled if either side asks for it.
pub struct Tee<'a> {
    first: &'a mut dyn CellObserver,
    second: &'a mut dyn CellObserver,
}

impl<'a> Tee<'a> {
    pub fn new(first: &'a mut dyn CellObserver, second: &'a mut dyn CellObserver) -> Self {
        Self { first, second }
    }
}

impl CellObserver for Tee<'_> {
    fn on_expansion(&mut self, progress: &SearchProgress<'_>) -> SearchControl {
        let a = self.first.on_expansion(progress);
        let b = self.second.on_expansion(progress);
        if a == SearchControl::Cancel || b == SearchControl::Cancel {
            SearchControl::Cancel
        } else {
            SearchControl::Continue
        }
    }

    fn on_cells(&mut self, role: CellRole, cells: &[GridCoord]) {
        self.first.on_cells(role, cells);
        self.second.on_cells(role, cells);
    }
}
