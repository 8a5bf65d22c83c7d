//! Tests for the search module.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use super::*;
use crate::utils::{Grid, Point};

/// Adjacency list with weighted, possibly parallel, edges.
type Graph = Vec<Vec<(usize, u64)>>;

fn graph() -> impl Strategy<Value = Graph> {
    (1usize..7).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0u64..20), 0..n * 3).prop_map(move |edges| {
            let mut adj = vec![Vec::new(); n];
            for (from, to, cost) in edges {
                adj[from].push((to, cost));
            }
            adj
        })
    })
}

/// Cheapest simple path by enumerating all of them. `unit` counts edges
/// instead of summing costs.
fn brute_force(adj: &Graph, from: usize, to: usize, unit: bool) -> Option<u64> {
    fn walk(
        adj: &Graph,
        node: usize,
        to: usize,
        unit: bool,
        cost: u64,
        on_path: &mut Vec<bool>,
        best: &mut Option<u64>,
    ) {
        if node == to {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        on_path[node] = true;
        for &(next, w) in &adj[node] {
            if !on_path[next] {
                let step = if unit { 1 } else { w };
                walk(adj, next, to, unit, cost + step, on_path, best);
            }
        }
        on_path[node] = false;
    }

    let mut best = None;
    walk(adj, from, to, unit, 0, &mut vec![false; adj.len()], &mut best);
    best
}

fn unweighted(adj: &Graph) -> impl FnMut(&usize) -> Vec<usize> + '_ {
    |&n| adj[n].iter().map(|&(m, _)| m).collect()
}

fn weighted(adj: &Graph) -> impl FnMut(&usize) -> Vec<(usize, u64)> + '_ {
    |&n| adj[n].clone()
}

/// Cheapest single edge `a -> b`
fn edge_cost(adj: &Graph, a: usize, b: usize) -> Option<u64> {
    adj[a].iter().filter(|&&(m, _)| m == b).map(|&(_, w)| w).min()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_bfs_matches_brute_force(adj in graph()) {
        let target = adj.len() - 1;
        let expected = brute_force(&adj, 0, target, true);
        let got = bfs(0, |&s| s == target, unweighted(&adj));
        prop_assert_eq!(got.map(|d| d as u64), expected);
    }

    #[test]
    fn prop_dijkstra_matches_brute_force(adj in graph()) {
        let target = adj.len() - 1;
        let expected = brute_force(&adj, 0, target, false);
        let got = dijkstra(0, |&s| s == target, weighted(&adj));
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_all_reachable_maps(adj in graph()) {
        let distances = bfs_all(0, unweighted(&adj));
        let costs = dijkstra_all(0, weighted(&adj));

        for node in 0..adj.len() {
            let hops = brute_force(&adj, 0, node, true);
            let cheapest = brute_force(&adj, 0, node, false);
            prop_assert_eq!(distances.get(&node).map(|&d| d as u64), hops);
            prop_assert_eq!(costs.get(&node).copied(), cheapest);
        }
    }

    #[test]
    fn prop_bfs_path_is_consistent(adj in graph()) {
        let target = adj.len() - 1;
        let cost = bfs(0, |&s| s == target, unweighted(&adj));
        let path = bfs_path(0, |&s| s == target, unweighted(&adj));
        prop_assert_eq!(path.as_ref().map(|p| p.cost as usize), cost);

        if let Some(path) = path {
            prop_assert_eq!(path.start(), Some(&0));
            prop_assert_eq!(path.goal(), Some(&target));
            prop_assert_eq!(path.steps() as u64, path.cost);
            for pair in path.states.windows(2) {
                prop_assert!(edge_cost(&adj, pair[0], pair[1]).is_some());
            }
        }
    }

    #[test]
    fn prop_dijkstra_path_is_consistent(adj in graph()) {
        let target = adj.len() - 1;
        let cost = dijkstra(0, |&s| s == target, weighted(&adj));
        let path = dijkstra_path(0, |&s| s == target, weighted(&adj));
        prop_assert_eq!(path.as_ref().map(|p| p.cost), cost);

        if let Some(path) = path {
            prop_assert_eq!(path.start(), Some(&0));
            prop_assert_eq!(path.goal(), Some(&target));
            let mut total = 0;
            for pair in path.states.windows(2) {
                let w = edge_cost(&adj, pair[0], pair[1]);
                prop_assert!(w.is_some());
                total += w.unwrap_or_default();
            }
            prop_assert_eq!(total, path.cost);
        }
    }
}

#[test]
fn test_start_is_goal() {
    assert_eq!(bfs(7, |&s| s == 7, |&s: &i32| [s + 1]), Some(0));
    assert_eq!(dijkstra(7, |&s| s == 7, |&s: &i32| [(s + 1, 3u64)]), Some(0));

    let path = bfs_path('a', |&c| c == 'a', |_: &char| None).unwrap();
    assert_eq!(path.states, vec!['a']);
    assert_eq!(path.steps(), 0);
}

#[test]
fn test_unreachable_goal() {
    // 0 -> 1 -> 2, goal 3 has no incoming edges
    let adj: Graph = vec![vec![(1, 1)], vec![(2, 1)], vec![], vec![(0, 1)]];
    assert_eq!(bfs(0, |&s| s == 3, unweighted(&adj)), None);
    assert_eq!(bfs_path(0, |&s| s == 3, unweighted(&adj)), None);
    assert_eq!(dijkstra(0, |&s| s == 3, weighted(&adj)), None);
    assert_eq!(dijkstra_path(0, |&s| s == 3, weighted(&adj)), None);

    let all = bfs_all(0, unweighted(&adj));
    assert_eq!(all.keys().copied().collect::<HashSet<_>>(), HashSet::from([0, 1, 2]));
    assert!(!dijkstra_all(0, weighted(&adj)).contains_key(&3));
}

#[test]
fn test_bfs_goal_checked_when_generated() {
    // Every state at distance 1 is a goal, the second one must never be expanded
    let expanded = Cell::new(0);
    let found = bfs(
        0u8,
        |&s| s > 0,
        |&s| {
            expanded.set(expanded.get() + 1);
            vec![s + 1, s + 2]
        },
    );
    assert_eq!(found, Some(1));
    assert_eq!(expanded.get(), 1);
}

#[test]
fn test_dijkstra_prefers_cheaper_longer_route() {
    //   a --10--> d
    //   a -1-> b -1-> c -1-> d
    let edges: HashMap<char, Vec<(char, u64)>> = HashMap::from([
        ('a', vec![('d', 10), ('b', 1)]),
        ('b', vec![('c', 1)]),
        ('c', vec![('d', 1)]),
    ]);
    let neighbors = |s: &char| edges.get(s).cloned().unwrap_or_default();

    let path = dijkstra_path('a', |&s| s == 'd', neighbors).unwrap();
    assert_eq!(path.states, vec!['a', 'b', 'c', 'd']);
    assert_eq!(path.cost, 3);
    assert_eq!(bfs(
        'a',
        |&s| s == 'd',
        |s: &char| edges.get(s).into_iter().flatten().map(|&(n, _)| n).collect::<Vec<_>>()
    ), Some(1));
}

#[test]
fn test_dijkstra_accepts_edges_and_zero_costs() {
    // Zero-cost cycle between 0 and 1
    let costs = dijkstra_all(0u8, |&s| match s {
        0 => vec![Edge::new(1, 0), Edge::new(2, 4)],
        1 => vec![Edge::new(0, 0), Edge::new(2, 1)],
        _ => vec![],
    });
    assert_eq!(costs, HashMap::from([(0, 0), (1, 0), (2, 1)]));
}

#[test]
fn test_dijkstra_saturates_instead_of_overflowing() {
    let cost = dijkstra(0u8, |&s| s == 2, |&s| match s {
        0 => vec![(1, u64::MAX - 1)],
        1 => vec![(2, 5)],
        _ => vec![],
    });
    assert_eq!(cost, Some(u64::MAX));
}

#[test]
fn test_dijkstra_ties_are_deterministic() {
    // Two equally cheap routes: the one discovered first wins
    let route = |first: char, second: char| {
        dijkstra_path('s', |&c| c == 't', move |&c| match c {
            's' => vec![(first, 1u64), (second, 1)],
            'x' | 'y' => vec![('t', 1)],
            _ => vec![],
        })
        .map(|p| p.states)
    };
    assert_eq!(route('x', 'y'), Some(vec!['s', 'x', 't']));
    assert_eq!(route('y', 'x'), Some(vec!['s', 'y', 't']));
}

#[test]
fn test_grid_maze() {
    let maze: Grid<char> = "\
S.#.....
.##.###.
....#..E
.##...#.
"
    .parse()
    .unwrap();
    let start = maze.find(|&c| c == 'S').unwrap();
    let end = maze.find(|&c| c == 'E').unwrap();
    let open = |p: &Point| {
        maze.neighbors_4(*p)
            .filter(|&n| maze[n] != '#')
            .collect::<Vec<_>>()
    };

    let path = bfs_path(start, |&p| p == end, open).unwrap();
    assert_eq!(path.cost, 11);
    assert!(path.states.windows(2).all(|w| w[0].manhattan(w[1]) == 1));

    let reachable = bfs_all(start, open);
    assert_eq!(reachable.len(), maze.count(|&c| c != '#'));
    assert_eq!(reachable[&end], 11);
}
