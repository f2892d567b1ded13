use crate::algorithms::common::{SearchAlgorithm, SearchResult};
use crate::algorithms::path::reconstruct;
use crate::graph::Maze;
use rustc_hash::{FxHashMap, FxHashSet};

/// Depth-first search over an explicit stack.
///
/// A node counts as visited when it is popped, and neighbors are pushed in
/// reverse so the first neighbor is expanded first. That reproduces the
/// preorder of a recursive DFS: same expansion order, same path.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dfs;

impl<M: Maze> SearchAlgorithm<M> for Dfs {
    fn search(&self, maze: &M, start: M::Node, goal: M::Node) -> SearchResult<M::Node> {
        let mut frontier = vec![(start, None)];
        let mut visited = FxHashSet::default();
        let mut predecessors = FxHashMap::default();
        let mut explored = Vec::new();

        while let Some((node, parent)) = frontier.pop() {
            if !visited.insert(node) {
                continue;
            }
            if let Some(parent) = parent {
                predecessors.insert(node, parent);
            }
            explored.push(node);
            if node == goal {
                let path = reconstruct(&predecessors, start, goal);
                return SearchResult::found(path, explored);
            }
            for neighbor in maze.neighbors(node).into_iter().rev() {
                if !visited.contains(&neighbor) {
                    frontier.push((neighbor, Some(node)));
                }
            }
        }

        SearchResult::exhausted(explored)
    }
}
