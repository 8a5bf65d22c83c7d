//! Day 24: It Hangs in the Balance
//!
//! Split the packages into equally heavy groups. The front group must have
//! as few packages as possible, ties broken by the smallest product
//! ("quantum entanglement").

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::Context;
use itertools::Itertools;

use crate::utils::input::{lines, parse_int};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 24, tags = ["combinations"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        lines(input)
            .enumerate()
            .map(|(line_idx, line)| {
                parse_int(line).with_context(|| format!("(line {})", line_idx + 1))
            })
            .collect::<anyhow::Result<Vec<u64>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(shared, 3)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(shared, 4)
    }
}

fn answer(packages: &[u64], groups: u64) -> Result<String, SolveError> {
    best_entanglement(packages, groups)
        .map(|qe| qe.to_string())
        .ok_or_else(|| {
            SolveError::NoSolution(format!("packages cannot be split into {groups} groups"))
        })
}

/// Whether `packages` splits into `groups` groups each weighing `target`.
fn can_split(packages: &[u64], target: u64, groups: u64) -> bool {
    if groups <= 1 {
        return packages.iter().sum::<u64>() == target;
    }
    (1..=packages.len()).any(|size| {
        (0..packages.len()).combinations(size).any(|picked| {
            let weight: u64 = picked.iter().map(|&i| packages[i]).sum();
            weight == target && {
                let rest: Vec<u64> = (0..packages.len())
                    .filter(|i| !picked.contains(i))
                    .map(|i| packages[i])
                    .collect();
                can_split(&rest, target, groups - 1)
            }
        })
    })
}

/// Smallest quantum entanglement of a minimal front group that still leaves
/// a valid split for the remaining groups.
pub fn best_entanglement(packages: &[u64], groups: u64) -> Option<u64> {
    let total: u64 = packages.iter().sum();
    if groups == 0 || total % groups != 0 {
        return None;
    }
    let target = total / groups;

    for size in 1..=packages.len() {
        let candidates = (0..packages.len())
            .combinations(size)
            .filter(|picked| picked.iter().map(|&i| packages[i]).sum::<u64>() == target)
            .map(|picked| {
                let qe: u64 = picked.iter().map(|&i| packages[i]).product();
                (qe, picked)
            })
            .sorted_unstable_by_key(|(qe, _)| *qe);

        for (qe, picked) in candidates {
            let rest: Vec<u64> = (0..packages.len())
                .filter(|i| !picked.contains(i))
                .map(|i| packages[i])
                .collect();
            if can_split(&rest, target, groups - 1) {
                log::debug!("front group of {size} packages, entanglement {qe}");
                return Some(qe);
            }
        }
    }
    None
}
