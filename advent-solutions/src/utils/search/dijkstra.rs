use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use super::{Edge, Path, reconstruct};

/// Heap entry ordered so that `BinaryHeap` pops the cheapest first, and the
/// earliest pushed among equal costs.
struct Entry<S> {
    cost: u64,
    seq: u64,
    state: S,
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<S> Eq for Entry<S> {}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pop the cheapest entry until `goal` matches or the heap empties.
///
/// Improving a distance pushes a new entry instead of updating the old one;
/// entries costlier than the best known distance are skipped when popped.
fn explore<S, G, N, I, E>(
    start: S,
    mut goal: G,
    mut neighbors: N,
    mut parents: Option<&mut HashMap<S, S>>,
) -> (HashMap<S, u64>, Option<S>)
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = E>,
    E: Into<Edge<S>>,
{
    let mut dist = HashMap::from([(start.clone(), 0)]);
    let mut heap = BinaryHeap::new();
    let mut seq = 0;
    heap.push(Entry {
        cost: 0,
        seq,
        state: start,
    });

    let mut stale = 0usize;
    while let Some(Entry { cost, state, .. }) = heap.pop() {
        if dist.get(&state).is_some_and(|&best| cost > best) {
            stale += 1;
            continue;
        }
        if goal(&state) {
            return (dist, Some(state));
        }

        for edge in neighbors(&state) {
            let Edge {
                state: next,
                cost: step,
            } = edge.into();
            let next_cost = cost.saturating_add(step);
            if dist.get(&next).is_some_and(|&best| best <= next_cost) {
                continue;
            }

            dist.insert(next.clone(), next_cost);
            if let Some(parents) = parents.as_deref_mut() {
                parents.insert(next.clone(), state.clone());
            }
            seq += 1;
            heap.push(Entry {
                cost: next_cost,
                seq,
                state: next,
            });
        }
    }

    log::trace!(
        "dijkstra exhausted after discovering {} states ({stale} stale entries skipped)",
        dist.len()
    );
    (dist, None)
}

/// Cheapest total cost from `start` to any state matching `goal`.
///
/// `neighbors` yields [`Edge`]s or `(state, cost)` tuples. The goal is tested
/// when a state is popped, so the first match is optimal. `None` means no
/// goal is reachable.
pub fn dijkstra<S, G, N, I, E>(start: S, goal: G, neighbors: N) -> Option<u64>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = E>,
    E: Into<Edge<S>>,
{
    let (dist, found) = explore(start, goal, neighbors, None);
    found.and_then(|state| dist.get(&state).copied())
}

/// Like [`dijkstra`], but also returns the states along one cheapest route.
pub fn dijkstra_path<S, G, N, I, E>(start: S, goal: G, neighbors: N) -> Option<Path<S>>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = E>,
    E: Into<Edge<S>>,
{
    let mut parents = HashMap::new();
    let (dist, found) = explore(start, goal, neighbors, Some(&mut parents));
    let goal = found?;
    let cost = *dist.get(&goal)?;
    Some(Path {
        states: reconstruct(&parents, goal),
        cost,
    })
}

/// Cheapest cost from `start` to every reachable state, `start` included.
pub fn dijkstra_all<S, N, I, E>(start: S, neighbors: N) -> HashMap<S, u64>
where
    S: Clone + Eq + Hash,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = E>,
    E: Into<Edge<S>>,
{
    explore(start, |_: &S| false, neighbors, None).0
}
