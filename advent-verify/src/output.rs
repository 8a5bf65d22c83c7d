//! Report formatting for verification results

use crate::verdict::{Judged, Tally, Verdict};
use chrono::TimeDelta;
use colored::Colorize;

const RULE_WIDTH: usize = 60;

/// Prints judged results grouped by year, with per-year and overall summaries
pub struct Reporter {
    quiet: bool,
    write_missing: bool,
    current_year: Option<u16>,
    year_tally: Tally,
    total: Tally,
    years_reported: usize,
}

impl Reporter {
    pub fn new(quiet: bool, write_missing: bool) -> Self {
        Self {
            quiet,
            write_missing,
            current_year: None,
            year_tally: Tally::default(),
            total: Tally::default(),
            years_reported: 0,
        }
    }

    /// Print one result, opening a new year section when the year changes
    pub fn report(&mut self, judged: &Judged) {
        let year = judged.result.year;
        if self.current_year != Some(year) {
            self.finish_year();
            self.current_year = Some(year);
            self.years_reported += 1;
            if !self.quiet {
                println!("{}", year_header(year));
            }
        }
        self.year_tally.record(&judged.verdict);

        if self.quiet {
            if let Some(answer) = answer_of(&judged.verdict) {
                println!("Part {}: {}", judged.result.part, answer);
            }
        } else {
            println!("{}", format_line(judged));
        }
    }

    /// Close the last section and print the closing summaries. Returns the
    /// counts over every year.
    pub fn finish(mut self) -> Tally {
        self.finish_year();
        if !self.quiet {
            if self.years_reported > 1 {
                println!("\n{}", "Overall Summary:".bold());
                print!("{}", format_tally(&self.total, self.write_missing));
            }
            if !self.total.has_failures() {
                if self.total.verified() > 0 {
                    println!("\n{}", "All verified solutions are correct!".green().bold());
                } else {
                    println!("\nNo solutions were verified.");
                }
            }
        }
        self.total
    }

    fn finish_year(&mut self) {
        let Some(year) = self.current_year.take() else {
            return;
        };
        if !self.quiet {
            println!("\n{}", format!("Summary for {year}:").bold());
            print!("{}", format_tally(&self.year_tally, self.write_missing));
        }
        self.total.merge(&self.year_tally);
        self.year_tally = Tally::default();
    }
}

fn year_header(year: u16) -> String {
    format!(
        "\nVerifying {year} Advent of Code Solutions\n{}",
        "=".repeat(RULE_WIDTH)
    )
}

fn answer_of(verdict: &Verdict) -> Option<&str> {
    match verdict {
        Verdict::Correct { answer } | Verdict::MissingAnswer { answer, .. } => Some(answer),
        Verdict::Incorrect { got, .. } => Some(got),
        Verdict::Failed { .. } | Verdict::MissingSolution => None,
    }
}

/// One status line, e.g. `Day  9 Part 1: ✓ CORRECT (answer: 605, 0.012s) ⚡`
pub fn format_line(judged: &Judged) -> String {
    let result = &judged.result;
    let prefix = format!("Day {:2} Part {}:", result.day, result.part);
    let elapsed = result.elapsed();
    let time = format_seconds(elapsed);
    let marker = speed_marker(elapsed);

    match &judged.verdict {
        Verdict::Correct { answer } => format!(
            "{prefix} {} (answer: {answer}, {time}) {marker}",
            "✓ CORRECT".green()
        ),
        Verdict::Incorrect { expected, got } => format!(
            "{prefix} {} (expected: {expected}, got: {got}, {time}) {marker}",
            "✗ INCORRECT".red()
        ),
        Verdict::Failed { reason } => format!(
            "{prefix} {} ({reason}, {time}) {marker}",
            "✗ FAILED TO RUN".red()
        ),
        Verdict::MissingAnswer {
            written: Some(true),
            answer,
        } => format!("{prefix} {} (wrote: {answer})", "○ MISSING".yellow()),
        Verdict::MissingAnswer {
            written: Some(false),
            ..
        } => format!("{prefix} {} (failed to write)", "○ MISSING".yellow()),
        Verdict::MissingAnswer {
            written: None,
            answer,
        } => format!(
            "{prefix} {} (answer: {answer}, {time}) {marker}",
            "○ MISSING".yellow()
        ),
        Verdict::MissingSolution => {
            format!("{prefix} {} (solution file not found)", "○ MISSING".yellow())
        }
    }
}

fn format_tally(tally: &Tally, write_missing: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("  {:<16}{}\n", "Correct:", tally.correct.to_string().green()));
    out.push_str(&format!("  {:<16}{}\n", "Incorrect:", tally.incorrect.to_string().red()));
    out.push_str(&format!("  {:<16}{}\n", "Failed:", tally.failed.to_string().red()));
    out.push_str(&format!("  {:<16}{}\n", "Missing:", tally.missing.to_string().yellow()));
    if write_missing && tally.written > 0 {
        out.push_str(&format!("  {:<16}{}\n", "Written:", tally.written));
    }
    out.push_str(&format!("  {:<16}{}\n", "Total Verified:", tally.verified()));
    out
}

/// Seconds with millisecond precision
fn format_seconds(d: TimeDelta) -> String {
    let micros = d.num_microseconds().unwrap_or(i64::MAX);
    format!("{:.3}s", micros as f64 / 1_000_000.0)
}

/// Speed marker by elapsed time: < 1s, < 3s, < 10s, < 30s, slower
pub fn speed_marker(d: TimeDelta) -> &'static str {
    let millis = d.num_milliseconds();
    match millis {
        ..1_000 => "⚡",
        1_000..3_000 => "🚀",
        3_000..10_000 => "▶️",
        10_000..30_000 => "🐢",
        _ => "🐌",
    }
}
