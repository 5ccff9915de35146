use rand::Rng;

use crate::answer::{AnswerError, Response, parse_integer};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::problem::Exercise;
use crate::topics::join;
use crate::visual::{InputKind, Visual};

const SHOWN: usize = 5;

/// Arithmetic sequence; the user gives the next term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPattern {
    pub terms: Vec<i64>,
    pub step: i64,
    pub answer: i64,
}

impl NumberPattern {
    #[must_use]
    pub fn new(start: i64, step: i64) -> Self {
        let terms: Vec<i64> = (0..SHOWN as i64).map(|i| start + i * step).collect();
        let answer = start + SHOWN as i64 * step;
        Self {
            terms,
            step,
            answer,
        }
    }

    /// Level 1 counts up by small steps; higher levels count down too and never go below zero.
    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let (steps, start_max, allow_down) = match level {
            1 => (1..=5, 20, false),
            2 => (2..=12, 100, true),
            _ => (3..=25, 200, true),
        };
        let step = rng.random_range(steps);
        let start = rng.random_range(0..=start_max);
        if allow_down && rng.random_bool(0.5) {
            // Leave room for the hidden term.
            let start = start + step * SHOWN as i64;
            return Self::new(start, -step);
        }
        Self::new(start, step)
    }
}

impl Exercise for NumberPattern {
    fn prompt(&self) -> String {
        format!("What number comes next? {}, ...", join(&self.terms))
    }

    fn visual(&self) -> Visual {
        let mut cards: Vec<String> = self.terms.iter().map(ToString::to_string).collect();
        cards.push("?".to_string());
        Visual::NumberCards(cards)
    }

    fn input(&self) -> InputKind {
        InputKind::Number
    }

    fn expected(&self) -> String {
        self.answer.to_string()
    }

    fn canonical_response(&self) -> Response {
        Response::text(self.answer.to_string())
    }

    fn grade(&self, response: &Response) -> Result<Assessment, AnswerError> {
        let given = parse_integer(response.single()?)?;
        Ok(Assessment::new(given == self.answer, self.answer))
    }

    fn explain(&self) -> Explanation {
        let rule = if self.step >= 0 {
            format!("add {}", self.step)
        } else {
            format!("subtract {}", -self.step)
        };
        let last = self.terms.last().copied().unwrap_or_default();
        Explanation::new()
            .step("Find the difference between neighbouring numbers.")
            .step(format!("Every step does the same thing: {rule}."))
            .step(format!("{last} → {}.", self.answer))
    }
}
