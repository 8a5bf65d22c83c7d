//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::store::AnswerStore;
use advent_solver::{DynSolver, SolverRegistry};
use chrono::{TimeDelta, Utc};
use itertools::Itertools;
use rayon::prelude::*;
use std::any::Any;
use std::ops::RangeInclusive;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::mpsc::Sender;

/// What running one part produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The solver returned an answer
    Answer(String),
    /// Input, parse or solve failed
    Failed(String),
    /// No solver is registered for this year/day
    NoSolver,
}

/// Result from a single solver execution
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub outcome: Outcome,
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    pub fn failed(year: u16, day: u8, part: u8, message: impl Into<String>) -> Self {
        Self {
            year,
            day,
            part,
            outcome: Outcome::Failed(message.into()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    pub fn no_solver(year: u16, day: u8, part: u8) -> Self {
        Self {
            year,
            day,
            part,
            outcome: Outcome::NoSolver,
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    /// Parse and solve time together
    pub fn elapsed(&self) -> TimeDelta {
        self.parse_duration.unwrap_or_else(TimeDelta::zero) + self.solve_duration
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    store: AnswerStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                store: AnswerStore::new(config.data_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cfg.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        log::debug!(
            "running {} solvers, parallelized by {:?}",
            work_items.len(),
            self.sync_executor_config.parallelize_by
        );

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_solver(&work, &tx, &self.sync_executor_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part additionally splits each work item in run_solver
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_solver(&work, tx, sync_executor_config).err())
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_solver(&work, tx, sync_executor_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

/// Parts to run given the part filter and the solver's part count
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Report every part of `work` as failed with the same message
fn send_failed(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    message: &str,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        send(tx, SolverResult::failed(work.year, work.day, part, message))?;
    }
    Ok(())
}

/// Read the input for one work item and run its parts
fn run_solver(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let input = match sync_executor_config.store.input(year, day) {
        Ok(input) => input,
        Err(source) => {
            let err = ExecutorError::Input { year, day, source };
            log::debug!("{err}");
            return send_failed(work, tx, &err.to_string());
        }
    };

    if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        run_solver_parts_parallel(work, &input, tx, &sync_executor_config.registry)
    } else {
        run_solver_sequential(work, &input, tx, &sync_executor_config.registry)
    }
}

/// Run each part on its own parsed instance, emitting results in part order
fn run_solver_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (result_tx, result_rx) = std::sync::mpsc::channel();
    let (year, day) = (work.year, work.day);

    work.parts
        .clone()
        .into_par_iter()
        .for_each_with(result_tx, |rtx, part| {
            let result = match create_solver(registry, year, day, input) {
                Ok(mut solver) => solve_part(part, &mut *solver),
                Err(message) => SolverResult::failed(year, day, part, message),
            };
            rtx.send(result).ok();
        });

    let mut results: Vec<SolverResult> = result_rx.into_iter().collect();
    results.sort_by_key(|r| r.part);
    results.into_iter().try_for_each(|result| send(tx, result))
}

/// Parse once and run the parts in order on the same instance
fn run_solver_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let mut solver = match create_solver(registry, work.year, work.day, input) {
        Ok(solver) => solver,
        Err(message) => return send_failed(work, tx, &message),
    };

    for part in work.parts.clone() {
        send(tx, solve_part(part, &mut *solver))?;
    }
    Ok(())
}

/// Run `f`, turning a panic into a failure message so one broken solver
/// cannot take the rest of the run down with it
fn catch_panic<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        log::debug!("solver panicked: {message}");
        format!("solver panicked: {message}")
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown cause"
    }
}

/// Parse the input, with errors and panics reduced to a message
fn create_solver<'a>(
    registry: &SolverRegistry,
    year: u16,
    day: u8,
    input: &'a str,
) -> Result<Box<dyn DynSolver + 'a>, String> {
    catch_panic(|| registry.create_solver(year, day, input))?.map_err(|e| e.to_string())
}

/// Solve a single part
fn solve_part(part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let (year, day) = (solver.year(), solver.day());
    let start = Utc::now();
    let (outcome, solve_duration) = match catch_panic(|| solver.solve(part)) {
        Ok(Ok(result)) => (Outcome::Answer(result.answer), result.duration),
        Ok(Err(e)) => (Outcome::Failed(e.to_string()), Utc::now() - start),
        Err(message) => (Outcome::Failed(message), Utc::now() - start),
    };

    SolverResult {
        year,
        day,
        part,
        outcome,
        parse_duration: Some(solver.parse_duration()),
        solve_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use advent_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    /// Part 1 sums the numbers, part 2 multiplies them
    struct Arith;

    impl AocParser for Arith {
        type SharedData<'a> = Vec<u64>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .split_whitespace()
                .map(|s| s.parse().map_err(|_| ParseError::InvalidFormat(s.into())))
                .collect()
        }
    }

    impl Solver for Arith {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.iter().sum::<u64>().to_string()),
                2 => Ok(shared.iter().product::<u64>().to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    /// Panics while parsing input that says "boom", and always in part 1
    struct Fragile;

    impl AocParser for Fragile {
        type SharedData<'a> = ();

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.contains("boom") {
                panic!("cannot parse {input}");
            }
            Ok(())
        }
    }

    impl Solver for Fragile {
        const PARTS: u8 = 2;

        fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => panic!("part {part} gave up"),
                _ => Ok("fine".to_string()),
            }
        }
    }

    fn executor_with(data: &TempDir, argv: &[&str], registry: SolverRegistry) -> Executor {
        let mut full = vec!["verify", "--data-dir", data.path().to_str().unwrap()];
        full.extend_from_slice(argv);
        let config = Config::from_args(Args::try_parse_from(full).unwrap());
        Executor::new(registry, &config).unwrap()
    }

    fn executor(data: &TempDir, argv: &[&str]) -> Executor {
        let registry = RegistryBuilder::new()
            .register_solver::<Arith>(2015, 1, &[])
            .unwrap()
            .register_solver::<Arith>(2015, 2, &[])
            .unwrap()
            .register_solver::<Arith>(2016, 1, &[])
            .unwrap()
            .build();
        executor_with(data, argv, registry)
    }

    fn write_input(data: &TempDir, year: u16, day: u8, input: &str) {
        let store = AnswerStore::new(data.path().to_path_buf());
        fs::create_dir_all(store.day_dir(year, day)).unwrap();
        fs::write(store.input_path(year, day), input).unwrap();
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<SolverResult> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        results
    }

    #[test]
    fn test_filter_parts() {
        assert_eq!(filter_parts(None, 2), 1..=2);
        assert_eq!(filter_parts(Some(2), 2), 2..=2);
        assert!(filter_parts(Some(2), 1).is_empty());
    }

    #[test]
    fn test_collect_work_items_filters() {
        let data = TempDir::new().unwrap();
        assert_eq!(executor(&data, &[]).collect_work_items().len(), 3);

        let items = executor(&data, &["2015", "-p", "2"]).collect_work_items();
        assert_eq!(
            items,
            vec![
                WorkItem {
                    year: 2015,
                    day: 1,
                    parts: 2..=2
                },
                WorkItem {
                    year: 2015,
                    day: 2,
                    parts: 2..=2
                },
            ]
        );
    }

    #[test]
    fn test_every_mode_reports_the_same_outcomes() {
        let data = TempDir::new().unwrap();
        write_input(&data, 2015, 1, "2 3 4");
        write_input(&data, 2015, 2, "5 x");
        // 2016/1 has no input at all

        for mode in ["sequential", "year", "day", "part"] {
            let results = run(&executor(&data, &["--parallelize-by", mode, "--threads", "2"]));
            let outcomes: Vec<_> = results.iter().map(|r| r.outcome.clone()).collect();
            assert_eq!(outcomes.len(), 6, "mode {mode}");
            assert_eq!(outcomes[0], Outcome::Answer("9".into()), "mode {mode}");
            assert_eq!(outcomes[1], Outcome::Answer("24".into()), "mode {mode}");
            for outcome in &outcomes[2..] {
                assert!(matches!(outcome, Outcome::Failed(_)), "mode {mode}");
            }
        }
    }

    #[test]
    fn test_panicking_solver_is_reported_as_failed() {
        let data = TempDir::new().unwrap();
        write_input(&data, 2015, 1, "2 3");
        write_input(&data, 2015, 2, "ok");
        write_input(&data, 2015, 3, "boom");

        for mode in ["sequential", "year", "day", "part"] {
            let registry = RegistryBuilder::new()
                .register_solver::<Arith>(2015, 1, &[])
                .unwrap()
                .register_solver::<Fragile>(2015, 2, &[])
                .unwrap()
                .register_solver::<Fragile>(2015, 3, &[])
                .unwrap()
                .build();
            let argv = ["--parallelize-by", mode, "--threads", "2"];
            let results = run(&executor_with(&data, &argv, registry));
            let outcomes: Vec<_> = results.iter().map(|r| r.outcome.clone()).collect();
            assert_eq!(outcomes.len(), 6, "mode {mode}");
            assert_eq!(outcomes[0], Outcome::Answer("5".into()), "mode {mode}");
            assert_eq!(outcomes[1], Outcome::Answer("6".into()), "mode {mode}");
            assert_eq!(
                outcomes[2],
                Outcome::Failed("solver panicked: part 1 gave up".into()),
                "mode {mode}"
            );
            assert_eq!(outcomes[3], Outcome::Answer("fine".into()), "mode {mode}");
            for outcome in &outcomes[4..] {
                assert_eq!(
                    outcome,
                    &Outcome::Failed("solver panicked: cannot parse boom".into()),
                    "mode {mode}"
                );
            }
        }
    }

    #[test]
    fn test_missing_input_message_names_the_day() {
        let data = TempDir::new().unwrap();
        let results = run(&executor(&data, &["2016", "1", "-p", "1"]));
        assert_eq!(results.len(), 1);
        match &results[0].outcome {
            Outcome::Failed(message) => assert!(message.contains("2016/1"), "{message}"),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(results[0].parse_duration, None);
    }

    #[test]
    fn test_parts_arrive_in_order_per_day() {
        let data = TempDir::new().unwrap();
        write_input(&data, 2015, 1, "1 2");
        let (tx, rx) = std::sync::mpsc::channel();
        executor(&data, &["2015", "1", "--parallelize-by", "part"])
            .execute(tx)
            .unwrap();
        let parts: Vec<u8> = rx.into_iter().map(|r| r.part).collect();
        assert_eq!(parts, vec![1, 2]);
    }
}
