use fxhash::FxBuildHasher;
/// This module implements a uniform-cost variant of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html):
/// a plain Dijkstra search over an implicit graph given by a successor function,
/// as all grid moves in this crate share the same cost.
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

struct FrontierEntry<K> {
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for FrontierEntry<K> {}

impl<K: PartialEq> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Orders by cost first so the BinaryHeap (a max-heap) pops the cheapest
        // entry. Equal costs are ordered by parent map index, so of two
        // equal-cost entries the earliest discovered node is popped first.
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.index.cmp(&self.index),
            s => s,
        }
    }
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Runs a uniform-cost (Dijkstra) search from `start`, expanding nodes with
/// `successors` until a node satisfying `success` is settled. Returns the
/// settled path and its total cost, or [None] once the frontier is exhausted.
///
/// Stale duplicate frontier entries are discarded lazily on extraction.
/// Tie-break: among equal-cost frontier entries, the node discovered earliest
/// is extracted first. This makes results deterministic for a fixed successor
/// order but is not otherwise significant; any consistent order would yield an
/// equally short path.
pub fn dijkstra_search<N, C, FN, IN, FS>(
    start: &N,
    mut successors: FN,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FS: FnMut(&N) -> bool,
{
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    while let Some(FrontierEntry { cost, index }) = frontier.pop() {
        let successors = {
            let (node, &(_, c)) = parents.get_index(index).unwrap();
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return Some((path, cost));
            }
            // We may have inserted a node several times into the binary heap if
            // we found a better way to access it. Ensure that we are currently
            // dealing with the best path and discard the others.
            if cost > c {
                continue;
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            frontier.push(FrontierEntry {
                cost: new_cost,
                index: n,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Searches a small line graph 0 - 1 - 2 - 3.
    #[test]
    fn line_graph() {
        let (path, cost) = dijkstra_search(
            &0i32,
            |&n| [(n - 1, 1), (n + 1, 1)].into_iter().filter(|&(m, _)| (0..=3).contains(&m)),
            |&n| n == 3,
        )
        .unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(cost, 3);
    }

    #[test]
    fn start_satisfies_goal() {
        let (path, cost) =
            dijkstra_search(&7i32, |&n| vec![(n + 1, 1)], |&n| n == 7).unwrap();
        assert_eq!(path, vec![7]);
        assert_eq!(cost, 0);
    }

    /// An exhausted frontier yields no path.
    #[test]
    fn exhausted_frontier() {
        let result = dijkstra_search(&0i32, |_| Vec::<(i32, i32)>::new(), |&n| n == 3);
        assert!(result.is_none());
    }

    /// Two equal-cost routes to the goal exist; the cost must be minimal either way.
    #[test]
    fn equal_cost_routes() {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3
        let (path, cost) = dijkstra_search(
            &0i32,
            |&n| match n {
                0 => vec![(1, 1), (2, 1)],
                1 | 2 => vec![(3, 1)],
                _ => vec![],
            },
            |&n| n == 3,
        )
        .unwrap();
        assert_eq!(cost, 2);
        // Earliest-discovered tie-break: node 1 was discovered before node 2.
        assert_eq!(path, vec![0, 1, 3]);
    }
}
