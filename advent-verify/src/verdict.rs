//! Judging solver results against recorded answers

use crate::executor::{Outcome, SolverResult};

/// How one year/day/part compares with its recorded answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct { answer: String },
    Incorrect { expected: String, got: String },
    Failed { reason: String },
    /// The solver ran but nothing was recorded to compare against
    MissingAnswer { answer: String, written: Option<bool> },
    /// An answer is recorded but no solver exists
    MissingSolution,
}

impl Verdict {
    /// Compare an outcome with the expected answer. `None` means there is
    /// nothing to report (no solver and no recorded answer).
    pub fn judge(outcome: &Outcome, expected: Option<&str>) -> Option<Self> {
        let verdict = match (outcome, expected) {
            // An empty answer means the solver ran but produced nothing
            (Outcome::Answer(answer), _) if answer.trim().is_empty() => Verdict::Failed {
                reason: "empty answer".to_string(),
            },
            (Outcome::Answer(answer), Some(expected)) if answer.trim() == expected => {
                Verdict::Correct {
                    answer: answer.clone(),
                }
            }
            (Outcome::Answer(answer), Some(expected)) => Verdict::Incorrect {
                expected: expected.to_string(),
                got: answer.clone(),
            },
            (Outcome::Answer(answer), None) => Verdict::MissingAnswer {
                answer: answer.clone(),
                written: None,
            },
            (Outcome::Failed(reason), _) => Verdict::Failed {
                reason: reason.clone(),
            },
            (Outcome::NoSolver, Some(_)) => Verdict::MissingSolution,
            (Outcome::NoSolver, None) => return None,
        };
        Some(verdict)
    }
}

/// A result with its verdict, ready to print
#[derive(Debug, Clone)]
pub struct Judged {
    pub result: SolverResult,
    pub verdict: Verdict,
}

/// Running counts for one year, or for the whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub correct: usize,
    pub incorrect: usize,
    pub failed: usize,
    pub missing: usize,
    pub written: usize,
}

impl Tally {
    pub fn record(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Correct { .. } => self.correct += 1,
            Verdict::Incorrect { .. } => self.incorrect += 1,
            Verdict::Failed { .. } => self.failed += 1,
            Verdict::MissingAnswer {
                written: Some(true),
                ..
            } => {
                self.missing += 1;
                self.written += 1;
            }
            Verdict::MissingAnswer { .. } | Verdict::MissingSolution => self.missing += 1,
        }
    }

    /// Parts that ran and were compared with a recorded answer
    pub fn verified(&self) -> usize {
        self.correct + self.incorrect
    }

    /// Whether the run should exit non-zero
    pub fn has_failures(&self) -> bool {
        self.incorrect + self.failed > 0
    }

    pub fn merge(&mut self, other: &Tally) {
        self.correct += other.correct;
        self.incorrect += other.incorrect;
        self.failed += other.failed;
        self.missing += other.missing;
        self.written += other.written;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(s: &str) -> Outcome {
        Outcome::Answer(s.to_string())
    }

    #[test]
    fn test_judge() {
        assert_eq!(
            Verdict::judge(&answer("42"), Some("42")),
            Some(Verdict::Correct {
                answer: "42".into()
            })
        );
        assert_eq!(
            Verdict::judge(&answer("41"), Some("42")),
            Some(Verdict::Incorrect {
                expected: "42".into(),
                got: "41".into()
            })
        );
        assert_eq!(
            Verdict::judge(&answer("7"), None),
            Some(Verdict::MissingAnswer {
                answer: "7".into(),
                written: None
            })
        );
        assert_eq!(
            Verdict::judge(&Outcome::Failed("boom".into()), Some("1")),
            Some(Verdict::Failed {
                reason: "boom".into()
            })
        );
        assert_eq!(
            Verdict::judge(&Outcome::NoSolver, Some("1")),
            Some(Verdict::MissingSolution)
        );
        assert_eq!(Verdict::judge(&Outcome::NoSolver, None), None);
    }

    #[test]
    fn test_trailing_whitespace_in_answer_ignored() {
        assert!(matches!(
            Verdict::judge(&answer("42\n"), Some("42")),
            Some(Verdict::Correct { .. })
        ));
    }

    #[test]
    fn test_empty_answer_is_failure() {
        let failed = Some(Verdict::Failed {
            reason: "empty answer".into(),
        });
        assert_eq!(Verdict::judge(&answer(""), Some("42")), failed);
        assert_eq!(Verdict::judge(&answer("  \n"), None), failed);
        assert_eq!(Verdict::judge(&answer(""), Some("")), failed);
    }

    #[test]
    fn test_tally() {
        let mut tally = Tally::default();
        tally.record(&Verdict::Correct { answer: "1".into() });
        tally.record(&Verdict::MissingSolution);
        tally.record(&Verdict::MissingAnswer {
            answer: "2".into(),
            written: Some(true),
        });
        tally.record(&Verdict::MissingAnswer {
            answer: "3".into(),
            written: Some(false),
        });
        assert_eq!(tally.verified(), 1);
        assert_eq!(tally.missing, 3);
        assert_eq!(tally.written, 1);
        assert!(!tally.has_failures());

        let mut total = Tally::default();
        total.merge(&tally);
        total.record(&Verdict::Failed {
            reason: "x".into(),
        });
        assert_eq!(total.verified(), 1);
        assert_eq!(total.failed, 1);
        assert!(total.has_failures());
    }
}
