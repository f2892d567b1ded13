use crate::algorithms::common::{SearchAlgorithm, SearchResult};
use crate::algorithms::path::reconstruct;
use crate::graph::Maze;
use crate::heuristic::Heuristic;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A* search with unit edge costs.
///
/// The open list is a min-heap on `(f, g, node)`: equal `f` goes to the lower
/// `g`, then to the lower node. Entries whose `g` is worse than the best known
/// cost of their node are stale and skipped when popped.
pub struct AStar<'h, H> {
    heuristic: &'h H,
}

impl<'h, H> AStar<'h, H> {
    /// Creates a new instance of the A* algorithm over the given heuristic.
    pub fn new(heuristic: &'h H) -> Self {
        AStar { heuristic }
    }
}

impl<M, H> SearchAlgorithm<M> for AStar<'_, H>
where
    M: Maze,
    H: Heuristic<M::Node>,
{
    /// Finds a path from start to goal.
    ///
    /// A node whose cost improves after it was expanded is expanded again, so
    /// with an inconsistent heuristic it can appear twice in `explored`.
    fn search(&self, maze: &M, start: M::Node, goal: M::Node) -> SearchResult<M::Node> {
        let mut open = BinaryHeap::new();
        let mut best_cost: FxHashMap<M::Node, u32> = FxHashMap::default();
        let mut predecessors = FxHashMap::default();
        let mut explored = Vec::new();

        best_cost.insert(start, 0);
        open.push(Reverse((self.heuristic.estimate(start), 0u32, start)));

        while let Some(Reverse((_, g, node))) = open.pop() {
            if best_cost.get(&node).is_some_and(|&best| g > best) {
                continue;
            }
            explored.push(node);
            if node == goal {
                let path = reconstruct(&predecessors, start, goal);
                return SearchResult::found(path, explored);
            }

            let tentative = g + 1; // Cost of moving to a neighbor is 1.
            for neighbor in maze.neighbors(node) {
                if best_cost.get(&neighbor).map_or(true, |&known| tentative < known) {
                    best_cost.insert(neighbor, tentative);
                    predecessors.insert(neighbor, node);
                    let f = tentative + self.heuristic.estimate(neighbor);
                    open.push(Reverse((f, tentative, neighbor)));
                }
            }
        }

        SearchResult::exhausted(explored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bfs::Bfs;
    use crate::graph::AdjacencyGraph;
    use crate::grid::{Grid, Position};
    use crate::heuristic::{HeuristicTable, Manhattan};

    #[test]
    fn heuristic_steers_expansion() {
        let graph = AdjacencyGraph::new(&[
            ("s", &["a", "b"]),
            ("a", &["s", "g"]),
            ("b", &["s", "g"]),
            ("g", &["a", "b"]),
        ])
        .unwrap();
        // Without guidance "a" wins the tie on name; a high estimate pushes it back.
        let table = HeuristicTable::new([("a", 5), ("b", 1)]);
        let result = AStar::new(&table).search(&graph, "s", "g");
        assert_eq!(result.path, Some(vec!["s", "b", "g"]));
        assert_eq!(result.explored, vec!["s", "b", "g"]);
    }

    #[test]
    fn ties_break_on_node_order() {
        let graph = AdjacencyGraph::new(&[
            ("s", &["b", "a"]),
            ("a", &["s", "g"]),
            ("b", &["s", "g"]),
            ("g", &["a", "b"]),
        ])
        .unwrap();
        let zero = HeuristicTable::<&str>::new([]);
        let result = AStar::new(&zero).search(&graph, "s", "g");
        assert_eq!(result.explored, vec!["s", "a", "b", "g"]);
        assert_eq!(result.path, Some(vec!["s", "a", "g"]));
    }

    #[test]
    fn reopens_node_when_cheaper_route_appears() {
        // The estimate on "m" is inconsistent: "x" and "t" are expanded via the
        // long branch first, then improved through "m" and expanded again.
        let graph = AdjacencyGraph::new(&[
            ("s", &["m", "l1"]),
            ("m", &["s", "x"]),
            ("l1", &["s", "l2"]),
            ("l2", &["l1", "x"]),
            ("x", &["m", "l2", "t"]),
            ("t", &["x", "g"]),
            ("g", &["t"]),
        ])
        .unwrap();
        let table = HeuristicTable::new([("m", 4)]);
        let result = AStar::new(&table).search(&graph, "s", "g");
        assert_eq!(result.path, Some(vec!["s", "m", "x", "t", "g"]));
        assert_eq!(result.cost(), Some(4));
        assert_eq!(
            result.explored,
            vec!["s", "l1", "l2", "x", "t", "m", "x", "t", "g"]
        );
    }

    #[test]
    fn matches_bfs_cost_on_open_grid() {
        let grid = Grid::parse(
            "
            S....
            .###.
            ...#.
            .#...
            ...#B
            ",
        )
        .unwrap();
        let manhattan = Manhattan { goal: grid.goal };
        let a_star = AStar::new(&manhattan).search(&grid, grid.start, grid.goal);
        let bfs = Bfs.search(&grid, grid.start, grid.goal);
        assert_eq!(a_star.cost(), bfs.cost());
        assert_eq!(a_star.cost(), Some(8));
        assert!(a_star.explored.len() <= bfs.explored.len());
        assert_eq!(a_star.path.unwrap().last(), Some(&Position::new(4, 4)));
    }

    #[test]
    fn unreachable_goal_exhausts_open_list() {
        let grid = Grid::parse("S#B").unwrap();
        let manhattan = Manhattan { goal: grid.goal };
        let result = AStar::new(&manhattan).search(&grid, grid.start, grid.goal);
        assert!(!result.is_found());
        assert_eq!(result.explored, vec![grid.start]);
    }
}
