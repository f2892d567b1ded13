use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Walks predecessor links back from `goal` to `start` and returns the path
/// in start-to-goal order.
///
/// The map must be acyclic along the walk; searches only ever record a
/// predecessor that was reached more cheaply, which keeps it a tree.
pub fn reconstruct<N: Copy + Eq + Hash>(predecessors: &FxHashMap<N, N>, start: N, goal: N) -> Vec<N> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = predecessors[&current];
        path.push(current);
        debug_assert!(path.len() <= predecessors.len() + 1, "predecessor cycle");
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_links_to_start() {
        let predecessors: FxHashMap<_, _> = [(2, 1), (3, 2), (4, 3), (9, 1)].into_iter().collect();
        assert_eq!(reconstruct(&predecessors, 1, 4), vec![1, 2, 3, 4]);
    }

    #[test]
    fn start_is_its_own_path() {
        assert_eq!(reconstruct(&FxHashMap::default(), 'a', 'a'), vec!['a']);
    }
}
