use rand::Rng;

use crate::answer::{AnswerError, Response, parse_integer};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::number::Fraction;
use crate::problem::Exercise;
use crate::visual::InputKind;

/// `a/b = ?/d`: find the missing numerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalentFraction {
    pub given: Fraction,
    pub target_denominator: i64,
    pub answer: i64,
}

impl EquivalentFraction {
    #[must_use]
    pub fn new(numerator: u32, denominator: u32, factor: u32) -> Self {
        let given = Fraction::of(numerator, denominator);
        let factor = i64::from(factor.max(1));
        Self {
            given,
            target_denominator: given.denominator() * factor,
            answer: given.numerator() * factor,
        }
    }

    /// Base fractions are proper and in lowest terms; the factor grows with level.
    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let (denominators, factors) = match level {
            1 => (2..=5, 2..=3),
            2 => (2..=8, 2..=5),
            _ => (3..=12, 2..=9),
        };
        let denominator = rng.random_range(denominators);
        let numerator = loop {
            let n = rng.random_range(1..denominator);
            if Fraction::of(n, denominator).is_lowest_terms() {
                break n;
            }
        };
        Self::new(numerator, denominator, rng.random_range(factors))
    }

    fn factor(&self) -> i64 {
        self.target_denominator / self.given.denominator()
    }
}

impl Exercise for EquivalentFraction {
    fn prompt(&self) -> String {
        format!(
            "Fill in the missing number: {} = ?/{}",
            self.given, self.target_denominator
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
        Ok(Assessment::new(given == self.answer, self.answer))
    }

    fn explain(&self) -> Explanation {
        let factor = self.factor();
        Explanation::new()
            .step(format!(
                "{} × {factor} = {}, so the denominator was multiplied by {factor}.",
                self.given.denominator(),
                self.target_denominator
            ))
            .step("Multiply the numerator by the same number to keep the value.")
            .step(format!(
                "{} × {factor} = {}, so {} = {}/{}.",
                self.given.numerator(),
                self.answer,
                self.given,
                self.answer,
                self.target_denominator
            ))
    }
}
