use std::fmt;

/// Default tolerance for decimal answers.
pub const DECIMAL_EPSILON: f64 = 0.001;

/// Strict absolute tolerance: `|given - expected| < epsilon`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    #[must_use]
    pub const fn new(epsilon: f64) -> Self {
        Self(epsilon)
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.0
    }

    /// Differences of exactly `epsilon` are rejected.
    #[must_use]
    pub fn accepts(&self, given: f64, expected: f64) -> bool {
        (given - expected).abs() < self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(DECIMAL_EPSILON)
    }
}

/// Outcome of one checked sub-step (a partial product, the remainder, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub label: String,
    pub expected: String,
    pub given: String,
    pub correct: bool,
}

impl StepResult {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        expected: impl fmt::Display,
        given: impl Into<String>,
        correct: bool,
    ) -> Self {
        Self {
            label: label.into(),
            expected: expected.to_string(),
            given: given.into(),
            correct,
        }
    }
}

/// Verdict on a readable submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub correct: bool,
    /// Correct answer in the form the user would type it.
    pub expected: String,
    /// Per-step results; empty for single-value topics.
    pub steps: Vec<StepResult>,
    /// Extra feedback, e.g. "equal, but not in simplest form".
    pub note: Option<String>,
}

impl Assessment {
    #[must_use]
    pub fn new(correct: bool, expected: impl fmt::Display) -> Self {
        Self {
            correct,
            expected: expected.to_string(),
            steps: Vec::new(),
            note: None,
        }
    }

    /// Correct only when every step is.
    #[must_use]
    pub fn from_steps(expected: impl fmt::Display, steps: Vec<StepResult>) -> Self {
        let correct = !steps.is_empty() && steps.iter().all(|s| s.correct);
        Self {
            correct,
            expected: expected.to_string(),
            steps,
            note: None,
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    #[must_use]
    pub fn correct_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.correct).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_boundary_is_exclusive() {
        // Binary-exact values so the boundary is really hit.
        let tol = Tolerance::new(0.25);
        assert!(tol.accepts(0.625, 0.5));
        assert!(tol.accepts(0.375, 0.5));
        assert!(!tol.accepts(0.75, 0.5));
        assert!(!tol.accepts(0.25, 0.5));
        assert!(!tol.accepts(1.0, 0.5));
    }

    #[test]
    fn default_tolerance_accepts_rounding_noise() {
        let tol = Tolerance::default();
        assert!(tol.accepts(0.1 + 0.2, 0.3));
        assert!(tol.accepts(4.6505, 4.65));
        assert!(!tol.accepts(4.66, 4.65));
    }

    #[test]
    fn steps_decide_overall_verdict() {
        let all_good = Assessment::from_steps(
            "280",
            vec![
                StepResult::new("a", 1, "1", true),
                StepResult::new("b", 2, "2", true),
            ],
        );
        assert!(all_good.correct);

        let one_bad = Assessment::from_steps(
            "280",
            vec![
                StepResult::new("a", 1, "1", true),
                StepResult::new("b", 2, "3", false),
            ],
        );
        assert!(!one_bad.correct);
        assert_eq!(one_bad.correct_steps(), 1);
        assert!(!Assessment::from_steps("x", Vec::new()).correct);
    }
}
