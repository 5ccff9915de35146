use rand::Rng;

use crate::answer::{AnswerError, Response};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::number::{Fraction, lcm};
use crate::problem::Exercise;
use crate::topics::Operation;
use crate::visual::{InputKind, Visual};

/// Adding or subtracting fractions. The answer is accepted in any equivalent form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractionArithmetic {
    pub left: Fraction,
    pub right: Fraction,
    pub operation: Operation,
    pub common_denominator: i64,
    /// Result over the common denominator, not reduced.
    pub result: Fraction,
}

impl FractionArithmetic {
    /// Subtraction swaps the operands so the result is never negative.
    #[must_use]
    pub fn new(left: Fraction, right: Fraction, operation: Operation) -> Self {
        let (left, right) = match operation {
            Operation::Subtract if left.cmp_value(&right).is_lt() => (right, left),
            _ => (left, right),
        };
        let common_denominator = lcm(left.denominator(), right.denominator()).max(1);
        let a = left.scaled_to(common_denominator).numerator();
        let b = right.scaled_to(common_denominator).numerator();
        let numerator = match operation {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
        };
        Self {
            left,
            right,
            operation,
            common_denominator,
            result: Fraction::from_parts(numerator, common_denominator),
        }
    }

    /// Level 1 adds like denominators, level 2 adds or subtracts them, and
    /// level 3 uses unlike denominators where one divides the other.
    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let operation = if level == 1 || rng.random_bool(0.5) {
            Operation::Add
        } else {
            Operation::Subtract
        };
        let (left_den, right_den) = match level {
            1 => {
                let d = rng.random_range(2..=10);
                (d, d)
            }
            2 => {
                let d = rng.random_range(2..=12);
                (d, d)
            }
            _ => {
                let small = rng.random_range(2..=6);
                let large = small * rng.random_range(2..=4);
                if rng.random_bool(0.5) {
                    (small, large)
                } else {
                    (large, small)
                }
            }
        };
        let left = Fraction::of(rng.random_range(1..left_den), left_den);
        let right = Fraction::of(rng.random_range(1..right_den), right_den);
        Self::new(left, right, operation)
    }

    fn sentence(&self) -> String {
        format!(
            "{} {} {}",
            self.left,
            self.operation.symbol(),
            self.right
        )
    }
}

impl Exercise for FractionArithmetic {
    fn prompt(&self) -> String {
        format!("What is {}?", self.sentence())
    }

    fn visual(&self) -> Visual {
        Visual::FractionBars {
            left: self.left,
            right: self.right,
        }
    }

    fn input(&self) -> InputKind {
        InputKind::Fraction
    }

    fn expected(&self) -> String {
        self.result.to_string()
    }

    fn canonical_response(&self) -> Response {
        Response::text(self.result.to_string())
    }

    fn grade(&self, response: &Response) -> Result<Assessment, AnswerError> {
        let given = Fraction::parse(response.single()?)?;
        Ok(Assessment::new(given.same_value(&self.result), self.result))
    }

    fn explain(&self) -> Explanation {
        let mut explanation = Explanation::new();
        let d = self.common_denominator;
        if self.left.denominator() == self.right.denominator() {
            explanation.push(format!(
                "The denominators are both {d}, so {} the numerators.",
                self.operation.verb().to_lowercase()
            ));
        } else {
            explanation.push(format!(
                "Rewrite both fractions with denominator {d}: {} and {}.",
                self.left.scaled_to(d),
                self.right.scaled_to(d)
            ));
        }
        let a = self.left.scaled_to(d).numerator();
        let b = self.right.scaled_to(d).numerator();
        explanation.push(format!(
            "{a} {} {b} = {}, so the answer is {}.",
            self.operation.symbol(),
            self.result.numerator(),
            self.result
        ));
        let simplest = self.result.reduced();
        if simplest != self.result {
            explanation.push(format!("In simplest form that is {simplest}."));
        }
        explanation
    }
}
