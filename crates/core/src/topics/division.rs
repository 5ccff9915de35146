use rand::Rng;

use crate::answer::{AnswerError, Response, parse_integer};
use crate::explain::Explanation;
use crate::grade::{Assessment, StepResult};
use crate::problem::Exercise;
use crate::visual::{InputKind, Visual};

const LABELS: [&str; 2] = ["Quotient", "Remainder"];

/// Whole-number division with a remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongDivision {
    pub dividend: u32,
    pub divisor: u32,
    pub quotient: u32,
    pub remainder: u32,
}

impl LongDivision {
    /// `divisor` is treated as at least 1.
    #[must_use]
    pub fn new(dividend: u32, divisor: u32) -> Self {
        let divisor = divisor.max(1);
        Self {
            dividend,
            divisor,
            quotient: dividend / divisor,
            remainder: dividend % divisor,
        }
    }

    /// Level 1 divides exactly; later levels build a larger quotient and add a remainder.
    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let (divisors, quotients, with_remainder) = match level {
            1 => (2..=5, 2..=12, false),
            2 => (2..=9, 10..=99, true),
            _ => (2..=12, 100..=999, true),
        };
        let divisor = rng.random_range(divisors);
        let quotient = rng.random_range(quotients);
        let remainder = if with_remainder {
            rng.random_range(0..divisor)
        } else {
            0
        };
        Self::new(divisor * quotient + remainder, divisor)
    }

    fn digit_steps(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut carried = 0;
        for ch in self.dividend.to_string().chars() {
            let digit = ch.to_digit(10).unwrap_or(0);
            let current = carried * 10 + digit;
            let fits = current / self.divisor;
            let left = current - fits * self.divisor;
            if fits > 0 || !lines.is_empty() {
                lines.push(format!(
                    "{} ÷ {} = {fits}, {fits} × {} = {}, {current} − {} = {left}",
                    current,
                    self.divisor,
                    self.divisor,
                    fits * self.divisor,
                    fits * self.divisor
                ));
            }
            carried = left;
        }
        lines
    }
}

impl Exercise for LongDivision {
    fn prompt(&self) -> String {
        format!(
            "What is {} ÷ {}? Give the quotient and the remainder.",
            self.dividend, self.divisor
        )
    }

    fn visual(&self) -> Visual {
        Visual::DivisionBracket {
            dividend: self.dividend,
            divisor: self.divisor,
        }
    }

    fn input(&self) -> InputKind {
        InputKind::Fields(LABELS.iter().map(ToString::to_string).collect())
    }

    fn expected(&self) -> String {
        format!("{} R {}", self.quotient, self.remainder)
    }

    fn canonical_response(&self) -> Response {
        Response::fields([self.quotient.to_string(), self.remainder.to_string()])
    }

    fn grade(&self, response: &Response) -> Result<Assessment, AnswerError> {
        let parts = response.parts(LABELS.len())?;
        let quotient = parse_integer(parts[0])?;
        let remainder = parse_integer(parts[1])?;
        let steps = vec![
            StepResult::new(
                LABELS[0],
                self.quotient,
                parts[0],
                quotient == i64::from(self.quotient),
            ),
            StepResult::new(
                LABELS[1],
                self.remainder,
                parts[1],
                remainder == i64::from(self.remainder),
            ),
        ];
        let assessment = Assessment::from_steps(self.expected(), steps);
        if !assessment.correct && remainder >= i64::from(self.divisor) {
            return Ok(assessment.with_note(format!(
                "The remainder must be smaller than {}.",
                self.divisor
            )));
        }
        Ok(assessment)
    }

    fn explain(&self) -> Explanation {
        let mut explanation = Explanation::new().step(format!(
            "Divide {} by {} one digit at a time, from the left.",
            self.dividend, self.divisor
        ));
        for line in self.digit_steps() {
            explanation.push(line);
        }
        explanation
            .step(format!(
                "Quotient {}, remainder {}.",
                self.quotient, self.remainder
            ))
            .step(format!(
                "Check: {} × {} + {} = {}.",
                self.quotient, self.divisor, self.remainder, self.dividend
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn remainder_is_reported() {
        let p = LongDivision::new(47, 5);
        assert_eq!((p.quotient, p.remainder), (9, 2));
        assert_eq!(p.expected(), "9 R 2");
        let assessment = p.grade(&Response::fields(["9", "2"])).unwrap();
        assert!(assessment.correct);
        assert_eq!(assessment.steps.len(), 2);
    }

    #[test]
    fn oversized_remainder_gets_a_note() {
        let p = LongDivision::new(47, 5);
        let assessment = p.grade(&Response::fields(["8", "7"])).unwrap();
        assert!(!assessment.correct);
        assert!(assessment.note.is_some());
    }

    #[test]
    fn explanation_walks_each_digit() {
        let text = LongDivision::new(156, 4).explain().steps().join("\n");
        assert!(text.contains("15 ÷ 4 = 3"), "{text}");
        assert!(text.contains("36 ÷ 4 = 9"), "{text}");
        assert!(text.contains("39 × 4 + 0 = 156"), "{text}");
    }

    #[test]
    fn quotient_times_divisor_plus_remainder() {
        let mut rng = StdRng::seed_from_u64(17);
        for level in 1..=3 {
            for _ in 0..300 {
                let p = LongDivision::generate(level, &mut rng);
                assert!(p.divisor >= 2);
                assert!(p.remainder < p.divisor);
                assert_eq!(p.quotient * p.divisor + p.remainder, p.dividend);
                if level == 1 {
                    assert_eq!(p.remainder, 0);
                }
            }
        }
    }
}
