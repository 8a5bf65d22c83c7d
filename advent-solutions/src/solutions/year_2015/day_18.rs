//! Day 18: Like a GIF For Your Yard
//!
//! Game of Life on a grid of lights. In part 2 the four corners are stuck on.

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{Grid, Point};

const STEPS: usize = 100;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 18, tags = ["grid", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<bool>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse(input, |c| match c {
            '#' => Some(true),
            '.' => Some(false),
            _ => None,
        })
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(animate(shared, STEPS, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(animate(shared, STEPS, true).to_string())
    }
}

fn corners(grid: &Grid<bool>) -> [Point; 4] {
    let (w, h) = (grid.width() as i64 - 1, grid.height() as i64 - 1);
    [
        Point::new(0, 0),
        Point::new(w, 0),
        Point::new(0, h),
        Point::new(w, h),
    ]
}

fn step(grid: &Grid<bool>) -> Grid<bool> {
    let mut next = grid.clone();
    for (p, &on) in grid.iter() {
        let lit = grid.neighbors_8(p).filter(|&n| grid[n]).count();
        next[p] = matches!((on, lit), (true, 2) | (_, 3));
    }
    next
}

/// Number of lights on after `steps` generations.
pub fn animate(initial: &Grid<bool>, steps: usize, stuck_corners: bool) -> usize {
    let mut grid = initial.clone();
    let stick = |grid: &mut Grid<bool>| {
        if stuck_corners {
            for corner in corners(grid) {
                grid.set(corner, true);
            }
        }
    };

    stick(&mut grid);
    for _ in 0..steps {
        grid = step(&grid);
        stick(&mut grid);
    }
    grid.count(|&on| on)
}
