//! Day 9: All in a Single Night
//!
//! Visit every city exactly once, shortest and longest route.

use std::collections::HashMap;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow};

use crate::utils::combinatorics::permute;
use crate::utils::input::{lines, parse_int};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 9, tags = ["permutations"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// `distances[a][b]`, indices into the list of cities
    distances: Vec<Vec<u32>>,
    route_lengths: Option<(u32, u32)>,
}

fn parse_distances(input: &str) -> anyhow::Result<Vec<Vec<u32>>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut edges = Vec::new();

    for (line_idx, line) in lines(input).enumerate() {
        let (route, distance) = line
            .split_once(" = ")
            .ok_or_else(|| anyhow!("(line {}) expected `A to B = N`", line_idx + 1))?;
        let (from, to) = route
            .split_once(" to ")
            .ok_or_else(|| anyhow!("(line {}) expected `A to B = N`", line_idx + 1))?;
        let distance: u32 =
            parse_int(distance).with_context(|| format!("(line {})", line_idx + 1))?;

        let next = index.len();
        let a = *index.entry(from).or_insert(next);
        let next = index.len();
        let b = *index.entry(to).or_insert(next);
        edges.push((a, b, distance));
    }

    let n = index.len();
    let mut distances = vec![vec![0; n]; n];
    for (a, b, d) in edges {
        distances[a][b] = d;
        distances[b][a] = d;
    }
    Ok(distances)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let distances =
            parse_distances(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if distances.is_empty() {
            return Err(ParseError::MissingData("no routes".into()));
        }
        Ok(SharedData {
            distances,
            route_lengths: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(route_lengths(shared).0.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(route_lengths(shared).1.to_string())
    }
}

/// `(shortest, longest)` over every ordering of the cities.
fn route_lengths(shared: &mut SharedData) -> (u32, u32) {
    *shared.route_lengths.get_or_insert_with(|| {
        let cities: Vec<usize> = (0..shared.distances.len()).collect();
        permute(&cities)
            .iter()
            .map(|route| {
                route
                    .windows(2)
                    .map(|leg| shared.distances[leg[0]][leg[1]])
                    .sum::<u32>()
            })
            .fold((u32::MAX, 0), |(min, max), len| (min.min(len), max.max(len)))
    })
}
