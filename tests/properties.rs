//! Checks the searches against the `pathfinding` crate on seeded random grids.

use maze_solver::algorithms::{AStar, Bfs, Dfs, SearchAlgorithm, SearchResult};
use maze_solver::graph::Maze;
use maze_solver::grid::{Cell, Grid, Position};
use maze_solver::heuristic::Manhattan;
use pathfinding::prelude::{bfs, bfs_reach};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const SEEDS: u64 = 200;

/// Random walls, with start and goal on free cells.
fn random_grid(seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = rng.gen_range(4..10);
    let cols = rng.gen_range(4..10);
    let mut cells: Vec<Vec<Cell>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| if rng.gen_bool(0.3) { Cell::Wall } else { Cell::Empty })
                .collect()
        })
        .collect();
    cells[0][0] = Cell::Empty;

    let free: Vec<Position> = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| Position::new(row, col)))
        .filter(|p| cells[p.row][p.col] == Cell::Empty)
        .collect();
    let start = free[rng.gen_range(0..free.len())];
    let goal = free[rng.gen_range(0..free.len())];
    Grid::new(cells, start, goal).unwrap()
}

fn run_all(grid: &Grid) -> [SearchResult<Position>; 3] {
    let manhattan = Manhattan { goal: grid.goal };
    [
        Bfs.search(grid, grid.start, grid.goal),
        Dfs.search(grid, grid.start, grid.goal),
        AStar::new(&manhattan).search(grid, grid.start, grid.goal),
    ]
}

fn is_valid_path(grid: &Grid, path: &[Position]) -> bool {
    path.first() == Some(&grid.start)
        && path.last() == Some(&grid.goal)
        && path.windows(2).all(|w| grid.neighbors(w[0]).contains(&w[1]))
}

#[test]
fn bfs_and_astar_match_reference_distance() {
    for seed in 0..SEEDS {
        let grid = random_grid(seed);
        let reference = bfs(&grid.start, |p| grid.neighbors(*p), |p| *p == grid.goal).map(|p| p.len() - 1);
        let [by_bfs, _, by_astar] = run_all(&grid);
        assert_eq!(by_bfs.cost(), reference, "seed {seed}");
        assert_eq!(by_astar.cost(), reference, "seed {seed}");
    }
}

#[test]
fn every_found_path_is_walkable() {
    for seed in 0..SEEDS {
        let grid = random_grid(seed);
        for result in run_all(&grid) {
            if let Some(path) = result.path {
                assert!(is_valid_path(&grid, &path), "seed {seed}: {path:?}");
            }
        }
    }
}

#[test]
fn dfs_finds_a_path_exactly_when_one_exists() {
    for seed in 0..SEEDS {
        let grid = random_grid(seed);
        let [by_bfs, by_dfs, _] = run_all(&grid);
        assert_eq!(by_dfs.is_found(), by_bfs.is_found(), "seed {seed}");
        if let (Some(dfs_cost), Some(bfs_cost)) = (by_dfs.cost(), by_bfs.cost()) {
            assert!(dfs_cost >= bfs_cost, "seed {seed}");
        }
    }
}

#[test]
fn unreachable_goal_explores_whole_component() {
    let mut unreachable = 0;
    for seed in 0..SEEDS {
        let grid = random_grid(seed);
        let component: BTreeSet<Position> = bfs_reach(grid.start, |p| grid.neighbors(*p)).collect();
        if component.contains(&grid.goal) {
            continue;
        }
        unreachable += 1;
        for result in run_all(&grid) {
            assert!(!result.is_found(), "seed {seed}");
            let explored: BTreeSet<Position> = result.explored.iter().copied().collect();
            assert_eq!(explored, component, "seed {seed}");
        }
    }
    assert!(unreachable > 0, "no disconnected grid among the seeds");
}

#[test]
fn searches_are_deterministic() {
    for seed in 0..SEEDS / 4 {
        let grid = random_grid(seed);
        assert_eq!(run_all(&grid), run_all(&grid), "seed {seed}");
    }
}
