//! verify - check Advent of Code solutions against recorded answers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod output;
mod store;
mod verdict;

// Import advent-solutions to link the solver plugins
use advent_solutions as _;

use advent_solver::{RegistryBuilder, SolverRegistry};
use aggregator::{ResultAggregator, ResultKey};
use clap::Parser;
use cli::Args;
use colored::Colorize;
use config::Config;
use error::{ArcExecutorError, CliError};
use executor::{Executor, SolverResult};
use output::Reporter;
use store::AnswerStore;
use verdict::{Judged, Tally, Verdict};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(args) {
        Ok(tally) if tally.has_failures() => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<Tally, CliError> {
    let config = Config::from_args(args);
    log::debug!("{config:?}");

    let registry = build_registry(&config.tags)?;
    let store = AnswerStore::new(config.data_dir.clone());
    let missing = missing_solutions(&registry, &store, &config)?;

    let executor = Executor::new(registry, &config).map_err(ArcExecutorError::from)?;
    let work_items = executor.collect_work_items();

    let expected_keys: Vec<ResultKey> = work_items
        .iter()
        .flat_map(|w| w.parts.clone().map(move |p| ResultKey::new(w.year, w.day, p)))
        .chain(missing.iter().map(ResultKey::from))
        .collect();
    log::info!(
        "{} solver(s) to run, {} recorded answer(s) without a solver",
        work_items.len(),
        missing.len()
    );

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let mut reporter = Reporter::new(config.quiet, config.write_missing);
    let mut aggregator = ResultAggregator::new(expected_keys);

    let mut ready = Vec::new();
    for result in missing {
        ready.extend(aggregator.add(result));
    }
    for result in rx {
        ready.extend(aggregator.add(result));
        for result in ready.drain(..) {
            report(&mut reporter, &store, config.write_missing, result)?;
        }
    }
    ready.extend(aggregator.drain());
    for result in ready {
        report(&mut reporter, &store, config.write_missing, result)?;
    }

    if !aggregator.is_complete() {
        log::warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))?
        .map_err(CliError::Executor)?;

    Ok(reporter.finish())
}

/// Judge one result, record its answer if asked to, and print it
fn report(
    reporter: &mut Reporter,
    store: &AnswerStore,
    write_missing: bool,
    result: SolverResult,
) -> Result<(), CliError> {
    let expected = store.expected(result.year, result.day, result.part)?;
    let Some(mut verdict) = Verdict::judge(&result.outcome, expected.as_deref()) else {
        return Ok(());
    };

    if write_missing && let Verdict::MissingAnswer { answer, written } = &mut verdict {
        let outcome = store.write_answer(result.year, result.day, result.part, answer);
        if let Err(e) = &outcome {
            log::warn!("{e}");
        }
        *written = Some(outcome.is_ok());
    }

    reporter.report(&Judged { result, verdict });
    Ok(())
}

/// Recorded answers for days that have no registered solver.
///
/// Skipped when filtering by tag, since an unregistered solver has no tags.
fn missing_solutions(
    registry: &SolverRegistry,
    store: &AnswerStore,
    config: &Config,
) -> Result<Vec<SolverResult>, CliError> {
    if !config.tags.is_empty() {
        return Ok(Vec::new());
    }

    let years = match config.year_filter {
        Some(year) => vec![year],
        None => store.years()?,
    };
    let parts = match config.part_filter {
        Some(part) => part..=part,
        None => 1..=2,
    };

    let mut missing = Vec::new();
    for year in years {
        for day in store.days(year)? {
            if config.day_filter.is_some_and(|d| d != day) || registry.contains(year, day) {
                continue;
            }
            for part in parts.clone() {
                if store.expected(year, day, part)?.is_some() {
                    missing.push(SolverResult::no_solver(year, day, part));
                }
            }
        }
    }
    Ok(missing)
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
