use crate::algorithms::common::{SearchAlgorithm, SearchResult};
use crate::algorithms::path::reconstruct;
use crate::graph::Maze;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Breadth-first search. Finds a path with the fewest edges.
///
/// Nodes are marked visited when enqueued, so each one enters the queue at
/// most once and the first route recorded to it is a shortest one.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bfs;

impl<M: Maze> SearchAlgorithm<M> for Bfs {
    fn search(&self, maze: &M, start: M::Node, goal: M::Node) -> SearchResult<M::Node> {
        let mut frontier = VecDeque::from([start]);
        let mut visited = FxHashSet::default();
        let mut predecessors = FxHashMap::default();
        let mut explored = Vec::new();
        visited.insert(start);

        while let Some(node) = frontier.pop_front() {
            explored.push(node);
            if node == goal {
                let path = reconstruct(&predecessors, start, goal);
                return SearchResult::found(path, explored);
            }
            for neighbor in maze.neighbors(node) {
                if visited.insert(neighbor) {
                    predecessors.insert(neighbor, node);
                    frontier.push_back(neighbor);
                }
            }
        }

        SearchResult::exhausted(explored)
    }
}
