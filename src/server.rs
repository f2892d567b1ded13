//! HTTP front end: one `/solve` route per maze.
//!
//! | Route | Query | Maze |
//! |---|---|---|
//! | `GET /graph/solve` | `algo=bfs\|dfs\|astar` (required, exact) | named nodes |
//! | `GET /grid/solve` | `algorithm=...` (optional, any case, default `bfs`) | grid |
//! | `GET /grid/maze` | | grid layout |
//! | `GET /solve` | as the variant picked by `--maze` | |

use crate::algorithms::Algorithm;
use crate::config::MazeKind;
use crate::grid::Position;
use crate::mazes::{GraphProblem, GridProblem};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Read-only mazes shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<GraphProblem>,
    pub grid: Arc<GridProblem>,
}

impl AppState {
    pub fn new(graph: GraphProblem, grid: GridProblem) -> Self {
        AppState {
            graph: Arc::new(graph),
            grid: Arc::new(grid),
        }
    }
}

pub fn router(state: AppState, default_maze: MazeKind) -> Router {
    let solve = match default_maze {
        MazeKind::Graph => get(solve_graph),
        MazeKind::Grid => get(solve_grid),
    };
    Router::new()
        .route("/solve", solve)
        .route("/graph/solve", get(solve_graph))
        .route("/grid/solve", get(solve_grid))
        .route("/grid/maze", get(grid_layout))
        .with_state(state)
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid algorithm")]
    InvalidAlgorithm,

    #[error("No path found")]
    NoPath { explored: Vec<Position> },
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    explored: Option<&'a [Position]>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, explored) = match &self {
            ApiError::InvalidAlgorithm => (StatusCode::BAD_REQUEST, None),
            ApiError::NoPath { explored } => (StatusCode::NOT_FOUND, Some(explored.as_slice())),
        };
        let body = ErrorBody {
            error: self.to_string(),
            explored,
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQuery {
    algo: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GraphSolution {
    pub algorithm: Algorithm,
    pub path: Vec<&'static str>,
}

/// Named-node maze. An unreachable goal is reported as an empty path.
pub async fn solve_graph(
    State(state): State<AppState>,
    Query(query): Query<GraphQuery>,
) -> Result<Json<GraphSolution>, ApiError> {
    let algorithm = query
        .algo
        .as_deref()
        .and_then(|name| name.parse::<Algorithm>().ok())
        .ok_or_else(|| {
            warn!(algo = ?query.algo, "rejected algorithm");
            ApiError::InvalidAlgorithm
        })?;

    let result = state.graph.solve(algorithm);
    info!(
        %algorithm,
        cost = ?result.cost(),
        explored = result.explored.len(),
        "solved graph maze"
    );
    Ok(Json(GraphSolution {
        algorithm,
        path: result.path.unwrap_or_default(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct GridQuery {
    algorithm: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GridSolution {
    pub algorithm: Algorithm,
    pub solution: Vec<Position>,
    pub explored: Vec<Position>,
    pub cost: usize,
}

/// Grid maze. An unreachable goal is a 404 carrying the exploration trace.
pub async fn solve_grid(
    State(state): State<AppState>,
    Query(query): Query<GridQuery>,
) -> Result<Json<GridSolution>, ApiError> {
    let name = query
        .algorithm
        .as_deref()
        .map_or_else(|| "bfs".to_string(), str::to_lowercase);
    let algorithm = name.parse::<Algorithm>().map_err(|e| {
        warn!(error = %e, "rejected algorithm");
        ApiError::InvalidAlgorithm
    })?;

    let result = state.grid.solve(algorithm);
    let cost = result.cost();
    let Some(solution) = result.path else {
        warn!(%algorithm, explored = result.explored.len(), "grid goal unreachable");
        return Err(ApiError::NoPath {
            explored: result.explored,
        });
    };

    info!(
        %algorithm,
        cost = ?cost,
        explored = result.explored.len(),
        "solved grid maze"
    );
    Ok(Json(GridSolution {
        algorithm,
        cost: cost.unwrap_or_default(),
        solution,
        explored: result.explored,
    }))
}

#[derive(Debug, Serialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    pub walls: Vec<Position>,
    pub start: Position,
    pub goal: Position,
}

pub async fn grid_layout(State(state): State<AppState>) -> Json<GridLayout> {
    let grid = &state.grid.maze;
    Json(GridLayout {
        rows: grid.rows(),
        cols: grid.cols(),
        walls: grid.walls(),
        start: state.grid.start,
        goal: state.grid.goal,
    })
}
