use rand::Rng;

use crate::answer::{AnswerError, Response, parse_integer};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::problem::Exercise;
use crate::visual::InputKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplicationFact {
    pub a: u32,
    pub b: u32,
    pub answer: u32,
}

impl MultiplicationFact {
    #[must_use]
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b, answer: a * b }
    }

    /// Tables up to 5, 10 and 12 by level.
    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let max = match level {
            1 => 5,
            2 => 10,
            _ => 12,
        };
        Self::new(rng.random_range(2..=max), rng.random_range(2..=max))
    }
}

impl Exercise for MultiplicationFact {
    fn prompt(&self) -> String {
        format!("{} × {} = ?", self.a, self.b)
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
        let groups = (1..=self.b)
            .map(|i| (self.a * i).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Explanation::new()
            .step(format!("{} × {} means {} groups of {}.", self.a, self.b, self.b, self.a))
            .step(format!("Skip count by {}: {groups}.", self.a))
            .step(format!("{} × {} = {}.", self.a, self.b, self.answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn tables_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(15);
        for (level, max) in [(1, 5), (2, 10), (3, 12)] {
            for _ in 0..300 {
                let p = MultiplicationFact::generate(level, &mut rng);
                assert!(p.a <= max && p.b <= max);
                assert_eq!(p.answer, p.a * p.b);
            }
        }
    }

    #[test]
    fn explanation_skip_counts() {
        let text = MultiplicationFact::new(4, 3).explain().steps().join("\n");
        assert!(text.contains("4, 8, 12"), "{text}");
    }
}
