pub mod a_star;
pub mod bfs;
pub mod common;
pub mod dfs;
pub mod path;

pub use a_star::AStar;
pub use bfs::Bfs;
pub use common::{Algorithm, SearchAlgorithm, SearchResult, UnknownAlgorithm};
pub use dfs::Dfs;
