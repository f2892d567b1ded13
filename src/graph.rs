use crate::error::MazeError;
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Read-only view of a maze that the search algorithms walk.
///
/// The order of the nodes returned by [`Maze::neighbors`] decides which of
/// several equal-cost paths a search finds first, so implementations must
/// return them in a fixed order.
pub trait Maze {
    type Node: Copy + Eq + Ord + Hash + Debug;

    /// Nodes reachable from `node` in one unit-cost step.
    fn neighbors(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Whether `node` is part of the maze.
    fn contains(&self, node: Self::Node) -> bool;
}

/// Maze of named nodes, each with an explicit neighbor list.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    order: Vec<&'static str>,
    edges: FxHashMap<&'static str, Vec<&'static str>>,
}

impl AdjacencyGraph {
    /// Builds the graph, checking that no node is listed twice and that every
    /// neighbor has an entry of its own.
    pub fn new(entries: &[(&'static str, &[&'static str])]) -> Result<Self, MazeError> {
        let mut order = Vec::with_capacity(entries.len());
        let mut edges = FxHashMap::default();

        for &(node, neighbors) in entries {
            if edges.insert(node, neighbors.to_vec()).is_some() {
                return Err(MazeError::DuplicateNode(node.to_string()));
            }
            order.push(node);
        }

        for &(node, neighbors) in entries {
            if let Some(missing) = neighbors.iter().find(|n| !edges.contains_key(*n)) {
                return Err(MazeError::DanglingNeighbor {
                    node: node.to_string(),
                    neighbor: missing.to_string(),
                });
            }
        }

        Ok(AdjacencyGraph { order, edges })
    }

    /// Nodes in the order they were declared.
    pub fn nodes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Edges `(from, to)` whose reverse `(to, from)` is not listed.
    pub fn asymmetric_edges(&self) -> Vec<(&'static str, &'static str)> {
        self.order
            .iter()
            .flat_map(|&from| {
                self.edges[from]
                    .iter()
                    .filter(move |&&to| !self.edges[to].contains(&from))
                    .map(move |&to| (from, to))
            })
            .collect()
    }
}

impl Maze for AdjacencyGraph {
    type Node = &'static str;

    fn neighbors(&self, node: &'static str) -> Vec<&'static str> {
        self.edges.get(node).cloned().unwrap_or_default()
    }

    fn contains(&self, node: &'static str) -> bool {
        self.edges.contains_key(node)
    }
}
