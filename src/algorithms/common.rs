use crate::algorithms::a_star::AStar;
use crate::algorithms::bfs::Bfs;
use crate::algorithms::dfs::Dfs;
use crate::graph::Maze;
use crate::heuristic::Heuristic;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub trait SearchAlgorithm<M: Maze> {
    /// Searches `maze` for a path from `start` to `goal`.
    fn search(&self, maze: &M, start: M::Node, goal: M::Node) -> SearchResult<M::Node>;
}

/// Outcome of one search: the path (if any) and every node expanded, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<N> {
    pub path: Option<Vec<N>>,
    pub explored: Vec<N>,
}

impl<N> SearchResult<N> {
    pub fn found(path: Vec<N>, explored: Vec<N>) -> Self {
        SearchResult {
            path: Some(path),
            explored,
        }
    }

    /// The frontier emptied without reaching the goal.
    pub fn exhausted(explored: Vec<N>) -> Self {
        SearchResult { path: None, explored }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of unit-cost steps along the path.
    pub fn cost(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::AStar => "astar",
        }
    }

    /// Instantiates the search. Only A* reads the heuristic.
    pub fn build<'h, M, H>(self, heuristic: &'h H) -> Box<dyn SearchAlgorithm<M> + 'h>
    where
        M: Maze,
        H: Heuristic<M::Node>,
    {
        match self {
            Algorithm::Bfs => Box::new(Bfs),
            Algorithm::Dfs => Box::new(Dfs),
            Algorithm::AStar => Box::new(AStar::new(heuristic)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?}, expected one of bfs, dfs, astar")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Exact, lowercase names only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
