use crate::error::MazeError;
use crate::graph::Maze;
use crate::grid::Position;
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Estimate of the remaining distance from a node to the goal.
///
/// A* only guarantees a shortest path when the estimate never exceeds the
/// true remaining cost. Nothing here checks that.
pub trait Heuristic<N> {
    fn estimate(&self, node: N) -> u32;
}

/// Hand-authored estimates. Nodes missing from the table estimate to zero.
#[derive(Debug, Clone)]
pub struct HeuristicTable<N> {
    values: FxHashMap<N, u32>,
}

impl<N: Copy + Eq + Hash + Debug> HeuristicTable<N> {
    pub fn new(entries: impl IntoIterator<Item = (N, u32)>) -> Self {
        HeuristicTable {
            values: entries.into_iter().collect(),
        }
    }

    /// Fails on the first entry that names a node outside `maze`.
    pub fn check_nodes<M: Maze<Node = N>>(&self, maze: &M) -> Result<(), MazeError> {
        match self.values.keys().find(|node| !maze.contains(**node)) {
            Some(node) => Err(MazeError::UnknownHeuristicNode(format!("{:?}", node))),
            None => Ok(()),
        }
    }
}

impl<N: Eq + Hash> Heuristic<N> for HeuristicTable<N> {
    fn estimate(&self, node: N) -> u32 {
        self.values.get(&node).copied().unwrap_or(0)
    }
}

/// Manhattan distance to a fixed goal cell.
#[derive(Debug, Clone, Copy)]
pub struct Manhattan {
    pub goal: Position,
}

impl Heuristic<Position> for Manhattan {
    fn estimate(&self, pos: Position) -> u32 {
        (pos.row.abs_diff(self.goal.row) + pos.col.abs_diff(self.goal.col)) as u32
    }
}
