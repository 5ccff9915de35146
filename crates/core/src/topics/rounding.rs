use rand::Rng;

use crate::answer::{AnswerError, Response, parse_integer};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::problem::Exercise;
use crate::visual::InputKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rounding {
    pub value: u32,
    /// 10, 100 or 1000.
    pub base: u32,
    pub answer: u32,
}

fn base_name(base: u32) -> &'static str {
    match base {
        10 => "ten",
        100 => "hundred",
        _ => "thousand",
    }
}

fn deciding_place(base: u32) -> &'static str {
    match base {
        10 => "ones",
        100 => "tens",
        _ => "hundreds",
    }
}

impl Rounding {
    #[must_use]
    pub fn new(value: u32, base: u32) -> Self {
        let base = base.max(1);
        Self {
            value,
            base,
            answer: (value + base / 2) / base * base,
        }
    }

    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let (base, range) = match level {
            1 => (10, 11..=999),
            2 => (100, 101..=9_999),
            _ => (1_000, 1_001..=99_999),
        };
        let mut value = rng.random_range(range);
        if value % base == 0 {
            value += 1;
        }
        Self::new(value, base)
    }
}

impl Exercise for Rounding {
    fn prompt(&self) -> String {
        format!(
            "Round {} to the nearest {}.",
            self.value,
            base_name(self.base)
        )
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
        Ok(Assessment::new(given == i64::from(self.answer), self.answer))
    }

    fn explain(&self) -> Explanation {
        let lower = self.value / self.base * self.base;
        let upper = lower + self.base;
        let digit = self.value % self.base / (self.base / 10);
        let direction = if digit >= 5 {
            "5 or more, so round up"
        } else {
            "less than 5, so round down"
        };
        Explanation::new()
            .step(format!(
                "{} is between {} and {}.",
                self.value, lower, upper
            ))
            .step(format!(
                "Look at the {} digit: {}. It is {}.",
                deciding_place(self.base),
                digit,
                direction
            ))
            .step(format!("{} rounds to {}.", self.value, self.answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn half_rounds_up() {
        assert_eq!(Rounding::new(45, 10).answer, 50);
        assert_eq!(Rounding::new(44, 10).answer, 40);
        assert_eq!(Rounding::new(1_250, 100).answer, 1_300);
        assert_eq!(Rounding::new(96_499, 1_000).answer, 96_000);
    }

    #[test]
    fn answers_are_nearest_multiples() {
        let mut rng = StdRng::seed_from_u64(12);
        for level in 1..=3 {
            for _ in 0..300 {
                let p = Rounding::generate(level, &mut rng);
                assert_eq!(p.answer % p.base, 0);
                assert!(p.answer.abs_diff(p.value) <= p.base / 2);
            }
        }
    }

    #[test]
    fn explanation_names_the_deciding_digit() {
        let steps = Rounding::new(372, 100).explain();
        assert!(steps.steps()[1].contains("tens digit: 7"));
    }
}
