//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; run every solver in order
    Sequential,
    /// Parallelize across years; days and parts run in order within a year
    Year,
    /// Parallelize across year/day combinations; parts run in order (default)
    #[default]
    Day,
    /// Parallelize across all year/day/part combinations
    Part,
}

/// Check Advent of Code answers against the ones recorded in the data directory
#[derive(Parser, Debug)]
#[command(name = "verify", about = "Verify Advent of Code solutions", version)]
pub struct Args {
    /// Year to verify (takes priority over --year)
    #[arg(value_name = "YEAR")]
    pub year_pos: Option<u16>,

    /// Day to verify (takes priority over --day)
    #[arg(value_name = "DAY", value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day_pos: Option<u8>,

    /// Year to verify (verifies all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to verify (verifies all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to verify (verifies all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}/{day}/input` and `{year}/{day}/solution-{part}`
    #[arg(long, default_value = "aoc-data")]
    pub data_dir: PathBuf,

    /// Record answers for parts that have no expected answer yet
    #[arg(short, long)]
    pub write_missing: bool,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
