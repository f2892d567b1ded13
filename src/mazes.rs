//! The two fixed mazes served by the solver.

use crate::error::MazeError;
use crate::graph::AdjacencyGraph;
use crate::grid::Grid;
use crate::heuristic::{HeuristicTable, Manhattan};
use crate::problem::Problem;

pub type GraphProblem = Problem<AdjacencyGraph, HeuristicTable<&'static str>>;
pub type GridProblem = Problem<Grid, Manhattan>;

pub const GRAPH_START: &str = "A";
pub const GRAPH_GOAL: &str = "B";

pub const GRAPH_EDGES: &[(&str, &[&str])] = &[
    ("A", &["1", "15"]),
    ("1", &["A", "2"]),
    ("2", &["1", "3", "4"]),
    ("3", &["2"]),
    ("4", &["2", "5", "20"]),
    ("5", &["4", "6", "7"]),
    ("6", &["5"]),
    ("7", &["5", "14"]),
    ("8", &["9", "11", "18", "19", "B"]),
    ("9", &["8", "10", "12", "13"]),
    ("10", &["9"]),
    ("11", &["8"]),
    ("12", &["9"]),
    ("13", &["9"]),
    ("14", &["7", "17"]),
    ("15", &["A", "16"]),
    ("16", &["15"]),
    ("17", &["14"]),
    ("18", &["8"]),
    ("19", &["8"]),
    ("20", &["4", "21"]),
    ("21", &["20", "B"]),
    ("B", &["8", "21"]),
];

/// Hand-tuned estimates for the named maze. Several entries exceed the true
/// distance to `B` (e.g. `A` is 6 steps away), but every pair of nodes is
/// joined by exactly one route, so A* still returns the shortest path.
pub const GRAPH_HEURISTIC: &[(&str, u32)] = &[
    ("A", 8),
    ("1", 6),
    ("2", 6),
    ("3", 6),
    ("4", 7),
    ("5", 4),
    ("6", 12),
    ("7", 7),
    ("8", 15),
    ("9", 18),
    ("10", 6),
    ("11", 8),
    ("12", 6),
    ("13", 5),
    ("14", 4),
    ("15", 8),
    ("16", 6),
    ("17", 3),
    ("18", 5),
    ("19", 5),
    ("20", 2),
    ("21", 1),
    ("B", 0),
];

/// `S` is the robot's start at (6, 0), `B` the flag at (0, 11).
pub const GRID_LAYOUT: &str = "
    .#.#.###..#B
    .#.#...#.##.
    ...#.#...##.
    #.##.#.#.##.
    #....#.#....
    ###.##.#####
    S...##......
    ....##......
";

pub fn graph_problem() -> Result<GraphProblem, MazeError> {
    let graph = AdjacencyGraph::new(GRAPH_EDGES)?;
    let heuristic = HeuristicTable::new(GRAPH_HEURISTIC.iter().copied());
    heuristic.check_nodes(&graph)?;
    Problem::new(graph, heuristic, GRAPH_START, GRAPH_GOAL)
}

pub fn grid_problem() -> Result<GridProblem, MazeError> {
    let grid = Grid::parse(GRID_LAYOUT)?;
    let (start, goal) = (grid.start, grid.goal);
    Problem::new(grid, Manhattan { goal }, start, goal)
}
