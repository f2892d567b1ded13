use thiserror::Error;

/// Errors raised while building the fixed mazes at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("node {0:?} is listed more than once")]
    DuplicateNode(String),

    #[error("node {node:?} lists unknown neighbor {neighbor:?}")]
    DanglingNeighbor { node: String, neighbor: String },

    #[error("heuristic entry for unknown node {0:?}")]
    UnknownHeuristicNode(String),

    #[error("endpoint {0} is not a node of the maze")]
    UnknownEndpoint(String),

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected marker {marker:?} at ({row}, {col})")]
    UnknownMarker { row: usize, col: usize, marker: char },

    #[error("grid layout has no {0:?} marker")]
    MissingMarker(char),

    #[error("grid layout has more than one {0:?} marker")]
    DuplicateMarker(char),
}
