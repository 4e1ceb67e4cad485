//! This module implements a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! whose frontier and cost table live in a [SearchContext] owned by the caller.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, info};
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on estimated cost so the max-heap pops the smallest estimate. Equal
        // estimates favour the node that got furthest, i.e. the larger cost.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

fn reverse_path<N: Clone, C>(parents: &FxIndexMap<N, (usize, C)>, start: usize) -> Vec<N> {
    let mut path: Vec<N> = std::iter::successors(Some(start), |&i| {
        parents.get_index(i).map(|(_, &(parent, _))| parent)
    })
    .map_while(|i| parents.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    path
}

/// Frontier and best-known-cost table of a single search. The table maps every node seen so far
/// to the index of its parent and the cheapest cost found to reach it.
pub struct SearchContext<N, C> {
    to_see: BinaryHeap<SmallestCostHolder<C>>,
    parents: FxIndexMap<N, (usize, C)>,
}

impl<N, C> Default for SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    fn default() -> Self {
        SearchContext::new()
    }
}

impl<N, C> SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    pub fn new() -> SearchContext<N, C> {
        SearchContext {
            to_see: BinaryHeap::new(),
            parents: FxIndexMap::default(),
        }
    }

    /// Number of nodes that received a finite cost during the last search.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Best cost found for a node during the last search.
    pub fn cost(&self, node: &N) -> Option<C> {
        self.parents.get(node).map(|&(_, c)| c)
    }

    /// Runs A* from `start` until a node satisfying `success` is popped from the frontier.
    /// Returns the path including both endpoints and its total cost, or [None] once the frontier
    /// is exhausted. Any state from a previous search is discarded first.
    pub fn astar<FN, IN, FH, FS>(
        &mut self,
        start: &N,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
    ) -> Option<(Vec<N>, C)>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        self.to_see.clear();
        self.parents.clear();
        self.to_see.push(SmallestCostHolder {
            estimated_cost: heuristic(start),
            cost: Zero::zero(),
            index: 0,
        });
        self.parents.insert(start.clone(), (usize::MAX, Zero::zero()));
        let mut expanded = 0_usize;
        while let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() {
            let successors = {
                let Some((node, &(_, c))) = self.parents.get_index(index) else {
                    continue;
                };
                // A node is pushed again whenever a cheaper way to it is found; only the
                // entry matching the recorded best cost is expanded.
                if cost > c {
                    continue;
                }
                if success(node) {
                    debug!("Goal reached after expanding {} nodes", expanded);
                    let path = reverse_path(&self.parents, index);
                    return Some((path, cost));
                }
                expanded += 1;
                successors(node)
            };
            for (successor, move_cost) in successors {
                let new_cost = cost + move_cost;
                let h; // heuristic(&successor)
                let n; // index for successor
                match self.parents.entry(successor) {
                    Vacant(e) => {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            h = heuristic(e.key());
                            n = e.index();
                            e.insert((index, new_cost));
                        } else {
                            continue;
                        }
                    }
                }

                self.to_see.push(SmallestCostHolder {
                    estimated_cost: new_cost + h,
                    cost: new_cost,
                    index: n,
                });
            }
        }
        info!(
            "Frontier exhausted after expanding {} nodes without reaching the goal",
            expanded
        );
        None
    }
}
