use crate::algorithms::Algorithm;
use crate::graph::Maze;
use crate::heuristic::Heuristic;
use crate::problem::Problem;
use pathfinding::prelude::bfs;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    pub success: bool,
    pub cost: Option<usize>,
    pub explored: usize,
    pub optimal_path_length: Option<usize>,
    pub elapsed: Duration,
}

impl AlgorithmResult {
    /// Path cost relative to the optimal one; 1.0 means shortest.
    pub fn route_efficiency(&self) -> Option<f64> {
        match (self.cost, self.optimal_path_length) {
            (Some(cost), Some(optimal)) if optimal > 0 => Some(cost as f64 / optimal as f64),
            (Some(0), Some(0)) => Some(1.0),
            _ => None,
        }
    }
}

impl fmt::Display for AlgorithmResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let success = if self.success { "✓" } else { "✗" };
        let cost = self.cost.map_or("-".to_string(), |c| c.to_string());
        let optimal = self.optimal_path_length.map_or("-".to_string(), |c| c.to_string());
        let efficiency = self.route_efficiency().map_or("-".to_string(), |e| format!("{:.3}", e));
        write!(
            f,
            "{:<10} {:<8} {:<8} {:<8} {:<12} {:<10} {:<12}",
            self.algorithm.name(),
            success,
            cost,
            optimal,
            efficiency,
            self.explored,
            format!("{:.2?}", self.elapsed)
        )
    }
}

/// Shortest unit-cost distance from start to goal, computed with the
/// `pathfinding` crate as an independent reference.
pub fn optimal_path_length<M, H>(problem: &Problem<M, H>) -> Option<usize>
where
    M: Maze,
    H: Heuristic<M::Node>,
{
    let goal = problem.goal;
    bfs(&problem.start, |n| problem.maze.neighbors(*n), |n| *n == goal).map(|path| path.len() - 1)
}

/// Runs every algorithm against the same problem.
pub fn run_all_algorithms<M, H>(problem: &Problem<M, H>) -> Vec<AlgorithmResult>
where
    M: Maze,
    H: Heuristic<M::Node>,
{
    let optimal_path_length = optimal_path_length(problem);

    Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let started = Instant::now();
            let result = problem.solve(algorithm);
            let elapsed = started.elapsed();
            AlgorithmResult {
                algorithm,
                success: result.is_found(),
                cost: result.cost(),
                explored: result.explored.len(),
                optimal_path_length,
                elapsed,
            }
        })
        .collect()
}

/// Print comparison results in a table.
pub fn print_comparison_results(title: &str, results: &[AlgorithmResult]) {
    println!("\n=== {} ===", title);
    println!(
        "{:<10} {:<8} {:<8} {:<8} {:<12} {:<10} {:<12}",
        "Algorithm", "Success", "Cost", "Optimal", "Efficiency", "Explored", "Time"
    );
    println!("{}", "-".repeat(74));
    for result in results {
        println!("{}", result);
    }

    let fewest_expansions = results
        .iter()
        .filter(|r| r.success)
        .min_by_key(|r| r.explored);
    if let Some(best) = fewest_expansions {
        println!(
            "Fewest expansions: {} ({} nodes)",
            best.algorithm.name(),
            best.explored
        );
    }
}
