use clap::{Parser, ValueEnum};
use std::net::{IpAddr, SocketAddr};

/// Which fixed maze answers plain `/solve`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeKind {
    /// Named nodes with neighbor lists (`?algo=`).
    Graph,
    /// 2-D grid with walls (`?algorithm=`).
    Grid,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Solves a fixed maze with BFS, DFS or A* over HTTP", long_about = None)]
pub struct Config {
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: IpAddr,

    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    #[arg(long, value_enum, default_value_t = MazeKind::Grid)]
    pub maze: MazeKind,

    /// Print a comparison of all algorithms on both mazes and exit.
    #[arg(long, default_value_t = false)]
    pub compare: bool,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
