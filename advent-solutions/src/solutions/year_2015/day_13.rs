//! Day 13: Knights of the Dinner Table
//!
//! Best total happiness of a circular seating plan. Part 2 adds a guest who
//! is indifferent to everybody.

use std::collections::HashMap;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{anyhow, bail};

use crate::utils::combinatorics::permute;
use crate::utils::input::{lines, parse_int};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 13, tags = ["permutations"])]
pub struct Solver;

/// `happiness[a][b]`: what guest `a` feels when seated next to `b`
pub type Happiness = Vec<Vec<i64>>;

fn parse_line(line: &str) -> anyhow::Result<(&str, i64, &str)> {
    let words: Vec<&str> = line.trim_end_matches('.').split_whitespace().collect();
    let [who, "would", sign, amount, .., neighbor] = words.as_slice() else {
        bail!("unexpected line {line:?}");
    };
    let amount: i64 = parse_int(amount)?;
    let change = match *sign {
        "gain" => amount,
        "lose" => -amount,
        other => bail!("expected `gain` or `lose`, found {other:?}"),
    };
    Ok((*who, change, *neighbor))
}

fn parse_happiness(input: &str) -> anyhow::Result<Happiness> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries = Vec::new();

    for (line_idx, line) in lines(input).enumerate() {
        let (who, change, neighbor) =
            parse_line(line).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))?;
        let next = index.len();
        let a = *index.entry(who).or_insert(next);
        let next = index.len();
        let b = *index.entry(neighbor).or_insert(next);
        entries.push((a, b, change));
    }

    let n = index.len();
    let mut happiness = vec![vec![0; n]; n];
    for (a, b, change) in entries {
        happiness[a][b] = change;
    }
    Ok(happiness)
}

impl AocParser for Solver {
    type SharedData<'a> = Happiness;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_happiness(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_seating(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_seating(&with_indifferent_guest(shared)).to_string())
    }
}

fn with_indifferent_guest(happiness: &Happiness) -> Happiness {
    let mut extended: Happiness = happiness
        .iter()
        .map(|row| row.iter().copied().chain([0]).collect())
        .collect();
    extended.push(vec![0; happiness.len() + 1]);
    extended
}

/// Highest total happiness over all circular arrangements.
///
/// Rotations of a table are equivalent, so guest 0 stays in the first seat
/// and only the others are permuted.
pub fn best_seating(happiness: &Happiness) -> i64 {
    let n = happiness.len();
    if n < 2 {
        return 0;
    }
    let others: Vec<usize> = (1..n).collect();

    permute(&others)
        .into_iter()
        .map(|mut table| {
            table.insert(0, 0);
            (0..n)
                .map(|i| {
                    let (a, b) = (table[i], table[(i + 1) % n]);
                    happiness[a][b] + happiness[b][a]
                })
                .sum::<i64>()
        })
        .max()
        .unwrap_or(0)
}
