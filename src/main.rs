use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use maze_solver::algorithms::Algorithm;
use maze_solver::config::Config;
use maze_solver::mazes;
use maze_solver::server::{self, AppState};
use maze_solver::statistics::{print_comparison_results, run_all_algorithms};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let graph = mazes::graph_problem().context("invalid graph maze")?;
    let grid = mazes::grid_problem().context("invalid grid maze")?;
    for (from, to) in graph.maze.asymmetric_edges() {
        warn!(from, to, "one-way edge in graph maze");
    }

    if config.compare {
        print_comparison_results("GRAPH MAZE", &run_all_algorithms(&graph));
        print_comparison_results("GRID MAZE", &run_all_algorithms(&grid));

        println!("\nLegend: S=Start, B=Goal, *=Path, #=Wall, .=Empty");
        let path = grid.solve(Algorithm::Bfs).path.unwrap_or_default();
        print!("{}", grid.maze.render(&path));
        return Ok(());
    }

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, maze = ?config.maze, "maze solver listening");

    let app = server::router(AppState::new(graph, grid), config.maze);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("maze solver stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
