//! Puzzle inputs and recorded answers on disk

use crate::error::StoreError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-based store of inputs and expected answers
///
/// Directory structure: `{root}/{year}/{day}/input` and
/// `{root}/{year}/{day}/solution-{part}`
pub struct AnswerStore {
    root: PathBuf,
}

impl AnswerStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn day_dir(&self, year: u16, day: u8) -> PathBuf {
        self.root.join(year.to_string()).join(day.to_string())
    }

    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.day_dir(year, day).join("input")
    }

    pub fn answer_path(&self, year: u16, day: u8, part: u8) -> PathBuf {
        self.day_dir(year, day).join(format!("solution-{part}"))
    }

    /// Read the puzzle input. A missing file is an error.
    pub fn input(&self, year: u16, day: u8) -> Result<String, StoreError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| StoreError::Io { path, source })
    }

    /// Expected answer for a part, or None if missing, empty or `0`
    pub fn expected(&self, year: u16, day: u8, part: u8) -> Result<Option<String>, StoreError> {
        let path = self.answer_path(year, day, part);
        match fs::read_to_string(&path) {
            Ok(content) => {
                let answer = content.trim();
                Ok((!answer.is_empty() && answer != "0").then(|| answer.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    /// Record an answer, creating the day directory if needed
    pub fn write_answer(
        &self,
        year: u16,
        day: u8,
        part: u8,
        answer: &str,
    ) -> Result<(), StoreError> {
        let dir = self.day_dir(year, day);
        fs::create_dir_all(&dir).map_err(|source| StoreError::DirCreation {
            path: dir.clone(),
            source,
        })?;

        let path = self.answer_path(year, day, part);
        fs::write(&path, answer).map_err(|source| StoreError::Io { path, source })?;
        log::debug!("{year}/{day:02} part {part}: recorded {answer}");
        Ok(())
    }

    /// Years that have a directory, ascending
    pub fn years(&self) -> Result<Vec<u16>, StoreError> {
        numeric_entries(&self.root)
    }

    /// Days of `year` that have a directory, ascending
    pub fn days(&self, year: u16) -> Result<Vec<u8>, StoreError> {
        Ok(numeric_entries::<u8>(&self.root.join(year.to_string()))?
            .into_iter()
            .filter(|day| (1..=25).contains(day))
            .collect())
    }
}

/// Sorted numeric directory names under `dir`; a missing `dir` is empty
fn numeric_entries<T: std::str::FromStr + Ord>(dir: &Path) -> Result<Vec<T>, StoreError> {
    let io_err = |source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(io_err(e)),
    };

    let mut values = Vec::new();
    for entry in entries {
        let entry = entry.map_err(io_err)?;
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(value) = entry.file_name().to_str().and_then(|s| s.parse().ok()) {
            values.push(value);
        }
    }
    values.sort_unstable();
    Ok(values)
}
