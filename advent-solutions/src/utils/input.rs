//! Small parsers for puzzle input.

use std::str::FromStr;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;

/// Trimmed, non-empty lines.
pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Parse a single (trimmed) integer, with the offending text in the error.
pub fn parse_int<T>(s: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let s = s.trim();
    s.parse()
        .with_context(|| format!("not an integer: {s:?}"))
}

/// Every signed integer embedded in `line`, ignoring the text around them.
///
/// ```
/// use advent_solutions::utils::input::parse_ints;
///
/// let ints: Vec<i64> = parse_ints("Sensor at x=-2, y=15: 3 beacons");
/// assert_eq!(ints, vec![-2, 15, 3]);
/// ```
pub fn parse_ints<T: FromStr>(line: &str) -> Vec<T> {
    int_regex()
        .find_iter(line)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Get or compile the signed integer regex
fn int_regex() -> &'static Regex {
    static INT: OnceLock<Regex> = OnceLock::new();
    INT.get_or_init(|| Regex::new(r"-?\d+").unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_skips_blank() {
        let got: Vec<&str> = lines("  a \n\n b\n   \n").collect();
        assert_eq!(got, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int::<i32>(" -42\n").unwrap(), -42);
        let err = parse_int::<u8>("300").unwrap_err();
        assert!(err.to_string().contains("300"));
    }

    #[test]
    fn test_parse_ints() {
        assert_eq!(parse_ints::<i64>("no numbers here"), Vec::<i64>::new());
        assert_eq!(parse_ints::<i64>("a-b 7-3 --5"), vec![7, -3, -5]);
        assert_eq!(parse_ints::<u32>("1x2x3"), vec![1, 2, 3]);
        // Values that do not fit are dropped
        assert_eq!(parse_ints::<u8>("12 999 -4"), vec![12]);
    }

    #[test]
    fn test_parse_ints_boss_stats() {
        let ints: Vec<i32> = "Hit Points: 58\nDamage: 9\n"
            .lines()
            .flat_map(parse_ints)
            .collect();
        assert_eq!(ints, vec![58, 9]);
        assert_eq!(parse_ints::<i64>("x=-12..-3"), vec![-12, -3]);
    }
}
