//! Advent of Code solver framework
//!
//! Each puzzle is a type implementing [`AocParser`] (input → shared data) and
//! [`Solver`] (shared data → answer per part). Solvers are collected in a
//! [`SolverRegistry`] keyed by year and day, either explicitly through
//! [`RegistryBuilder`] or automatically through `inventory` plugins.
//!
//! # Quick example
//!
//! ```
//! use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Floors;
//!
//! impl AocParser for Floors {
//!     type SharedData<'a> = &'a str;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         Ok(input.trim())
//!     }
//! }
//!
//! impl PartSolver<1> for Floors {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         let floor: i64 = shared.chars().map(|c| if c == '(' { 1 } else { -1 }).sum();
//!         Ok(floor.to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Floors {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         let mut floor = 0i64;
//!         for (i, c) in shared.chars().enumerate() {
//!             floor += if c == '(' { 1 } else { -1 };
//!             if floor < 0 {
//!                 return Ok((i + 1).to_string());
//!             }
//!         }
//!         Err(SolveError::NoSolution("never reached the basement".into()))
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Floors>(2015, 1, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2015, 1, "()())").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "-1");
//! assert_eq!(solver.solve(2).unwrap().answer, "5");
//! ```
//!
//! # Plugins
//!
//! `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`]; the runner then
//! calls [`RegistryBuilder::register_all_plugins`] or filters plugins by tag
//! with [`RegistryBuilder::register_solver_plugins`].
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2015, day = 9, tags = ["permutations"])]
//! pub struct Solver;
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, RegistryBuilder,
    SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the code generated from `AutoRegisterSolver`
pub use inventory;

pub use advent_solver_macros::{AocSolver, AutoRegisterSolver};
