use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use super::{Path, reconstruct};

/// Expand level by level until `goal` matches or the frontier empties.
///
/// A state is recorded in the distance map when it is first generated, so it
/// is enqueued at most once. The start is tested before anything else; every
/// other state is tested as it is generated.
fn explore<S, G, N, I>(
    start: S,
    mut goal: G,
    mut neighbors: N,
    mut parents: Option<&mut HashMap<S, S>>,
) -> (HashMap<S, usize>, Option<S>)
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut dist = HashMap::from([(start.clone(), 0)]);
    if goal(&start) {
        return (dist, Some(start));
    }

    let mut frontier = VecDeque::from([(start, 0)]);
    while let Some((state, d)) = frontier.pop_front() {
        for next in neighbors(&state) {
            if dist.contains_key(&next) {
                continue;
            }
            dist.insert(next.clone(), d + 1);
            if let Some(parents) = parents.as_deref_mut() {
                parents.insert(next.clone(), state.clone());
            }
            if goal(&next) {
                return (dist, Some(next));
            }
            frontier.push_back((next, d + 1));
        }
    }

    log::trace!("bfs exhausted after visiting {} states", dist.len());
    (dist, None)
}

/// Fewest edges from `start` to any state matching `goal`.
///
/// Returns `Some(0)` when the start itself is a goal and `None` when no goal
/// is reachable.
pub fn bfs<S, G, N, I>(start: S, goal: G, neighbors: N) -> Option<usize>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let (dist, found) = explore(start, goal, neighbors, None);
    found.and_then(|state| dist.get(&state).copied())
}

/// Like [`bfs`], but also returns the states along one shortest route.
///
/// ```
/// use advent_solutions::utils::search::bfs_path;
///
/// let path = bfs_path(0i32, |&n| n == 3, |&n| [n - 1, n + 1]).unwrap();
/// assert_eq!(path.states, vec![0, 1, 2, 3]);
/// assert_eq!(path.cost, 3);
/// ```
pub fn bfs_path<S, G, N, I>(start: S, goal: G, neighbors: N) -> Option<Path<S>>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut parents = HashMap::new();
    let (dist, found) = explore(start, goal, neighbors, Some(&mut parents));
    let goal = found?;
    let cost = *dist.get(&goal)? as u64;
    Some(Path {
        states: reconstruct(&parents, goal),
        cost,
    })
}

/// Edge distance from `start` to every reachable state, `start` included.
pub fn bfs_all<S, N, I>(start: S, neighbors: N) -> HashMap<S, usize>
where
    S: Clone + Eq + Hash,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    explore(start, |_: &S| false, neighbors, None).0
}
