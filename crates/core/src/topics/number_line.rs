use rand::Rng;

use crate::answer::{AnswerError, Response};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::number::Fraction;
use crate::problem::Exercise;
use crate::visual::{InputKind, Visual};

/// A point on a number line from 0 to 1 split into `denominator` equal parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLineFraction {
    pub denominator: u32,
    pub numerator: u32,
}

impl NumberLineFraction {
    #[must_use]
    pub fn new(numerator: u32, denominator: u32) -> Self {
        let denominator = denominator.max(2);
        Self {
            denominator,
            numerator: numerator.clamp(1, denominator - 1),
        }
    }

    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let max = match level {
            1 => 4,
            2 => 8,
            _ => 12,
        };
        let denominator = rng.random_range(2..=max);
        Self::new(rng.random_range(1..denominator), denominator)
    }

    #[must_use]
    pub fn answer(&self) -> Fraction {
        Fraction::of(self.numerator, self.denominator)
    }
}

impl Exercise for NumberLineFraction {
    fn prompt(&self) -> String {
        "What fraction is marked on the number line?".to_string()
    }

    fn visual(&self) -> Visual {
        Visual::NumberLine {
            denominator: self.denominator,
            marked: self.numerator,
        }
    }

    fn input(&self) -> InputKind {
        InputKind::Fraction
    }

    fn expected(&self) -> String {
        self.answer().to_string()
    }

    fn canonical_response(&self) -> Response {
        Response::text(self.answer().to_string())
    }

    fn grade(&self, response: &Response) -> Result<Assessment, AnswerError> {
        let given = Fraction::parse(response.single()?)?;
        Ok(Assessment::new(given.same_value(&self.answer()), self.answer()))
    }

    fn explain(&self) -> Explanation {
        Explanation::new()
            .step(format!(
                "The line from 0 to 1 is split into {} equal jumps, so each jump is 1/{}.",
                self.denominator, self.denominator
            ))
            .step(format!(
                "The point is {} jumps from 0.",
                self.numerator
            ))
            .step(format!("So it marks {}.", self.answer()))
    }
}
