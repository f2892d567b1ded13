//! Solves a small fixed maze with breadth-first search, depth-first search or
//! A*, and serves the result over HTTP.
//!
//! Two mazes ship with the crate: a graph of named nodes ([`graph::AdjacencyGraph`])
//! and a walled grid ([`grid::Grid`]). Both implement [`graph::Maze`], which is
//! all the searches in [`algorithms`] need.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod graph;
pub mod grid;
pub mod heuristic;
pub mod mazes;
pub mod problem;
pub mod server;
pub mod statistics;

pub use error::MazeError;
