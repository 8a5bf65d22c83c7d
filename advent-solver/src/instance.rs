//! Parsed puzzle inputs and the type-erased [`DynSolver`] interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{TimeDelta, Utc};

/// Run `f` and measure its wall-clock time
fn timed<T>(f: impl FnOnce() -> T) -> (T, TimeDelta) {
    let start = Utc::now();
    let value = f();
    (value, Utc::now() - start)
}

/// Answer to one part and how long solving it took. Parse time is kept on
/// the instance, since every part shares a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub duration: TimeDelta,
}

/// The parsed input for one year/day, ready to solve any of its parts.
///
/// Parts run against the same shared data in the order they are asked for,
/// so part 2 sees whatever part 1 left behind.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_duration: TimeDelta,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_duration) = timed(|| S::parse(input));
        let shared = shared?;
        log::trace!("{year}/{day:02}: parsed input in {parse_duration}");

        Ok(Self {
            year,
            day,
            shared,
            parse_duration,
        })
    }
}

/// Object-safe view of a [`SolverInstance`], so the registry can hand out
/// solvers of different types behind one `Box<dyn DynSolver>`.
///
/// ```no_run
/// use advent_solver::DynSolver;
///
/// fn report(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {}: {} ({})", result.part, result.answer, result.duration);
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve one part. Out-of-range parts fail with `PartOutOfRange`.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Time spent parsing the input when the instance was built
    fn parse_duration(&self) -> TimeDelta;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, duration) = timed(|| S::solve_part_checked_range(&mut self.shared, part));
        let answer = answer?;
        log::debug!(
            "{}/{:02} part {part}: {answer} in {duration}",
            self.year,
            self.day
        );

        Ok(SolveResult {
            part,
            answer,
            duration,
        })
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parse_duration
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::AocParser;

    /// Part 1 counts the words, part 2 reports how often it has been asked
    struct Words;

    impl AocParser for Words {
        type SharedData<'a> = (Vec<&'a str>, usize);

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("no words".into()));
            }
            Ok((input.split_whitespace().collect(), 0))
        }
    }

    impl Solver for Words {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            shared.1 += 1;
            match part {
                1 => Ok(shared.0.len().to_string()),
                2 => Ok(shared.1.to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_parts_share_state() {
        let mut solver = SolverInstance::<Words>::new(2015, 3, "a b c").unwrap();
        assert_eq!((solver.year(), solver.day(), solver.parts()), (2015, 3, 2));
        assert!(solver.parse_duration() >= TimeDelta::zero());

        let first = solver.solve(1).unwrap();
        assert_eq!((first.part, first.answer.as_str()), (1, "3"));
        assert!(first.duration >= TimeDelta::zero());
        assert_eq!(solver.solve(2).unwrap().answer, "2");
    }

    #[test]
    fn test_errors_surface() {
        assert!(matches!(
            SolverInstance::<Words>::new(2015, 3, ""),
            Err(ParseError::MissingData(_))
        ));

        let mut solver = SolverInstance::<Words>::new(2015, 3, "x").unwrap();
        assert!(matches!(solver.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    }
}
