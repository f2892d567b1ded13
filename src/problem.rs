use crate::algorithms::{Algorithm, SearchResult};
use crate::error::MazeError;
use crate::graph::Maze;
use crate::heuristic::Heuristic;

/// A maze together with its heuristic and fixed endpoints.
///
/// Built once at startup and shared read-only by every search.
#[derive(Debug, Clone)]
pub struct Problem<M: Maze, H> {
    pub maze: M,
    pub heuristic: H,
    pub start: M::Node,
    pub goal: M::Node,
}

impl<M, H> Problem<M, H>
where
    M: Maze,
    H: Heuristic<M::Node>,
{
    pub fn new(maze: M, heuristic: H, start: M::Node, goal: M::Node) -> Result<Self, MazeError> {
        for endpoint in [start, goal] {
            if !maze.contains(endpoint) {
                return Err(MazeError::UnknownEndpoint(format!("{:?}", endpoint)));
            }
        }
        Ok(Problem {
            maze,
            heuristic,
            start,
            goal,
        })
    }

    pub fn solve(&self, algorithm: Algorithm) -> SearchResult<M::Node> {
        algorithm
            .build::<M, H>(&self.heuristic)
            .search(&self.maze, self.start, self.goal)
    }
}
