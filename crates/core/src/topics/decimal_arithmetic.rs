use rand::Rng;

use crate::answer::{AnswerError, Response, parse_decimal};
use crate::explain::Explanation;
use crate::grade::{Assessment, Tolerance};
use crate::number::Decimal;
use crate::problem::Exercise;
use crate::topics::Operation;
use crate::visual::InputKind;

/// Adding or subtracting decimals. Answers within [`Tolerance::default`] are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalArithmetic {
    pub left: Decimal,
    pub right: Decimal,
    pub operation: Operation,
    pub answer: Decimal,
}

impl DecimalArithmetic {
    /// Subtraction swaps the operands so the answer is never negative.
    #[must_use]
    pub fn new(left: Decimal, right: Decimal, operation: Operation) -> Self {
        let (left, right) = match operation {
            Operation::Subtract if right > left => (right, left),
            _ => (left, right),
        };
        let answer = match operation {
            Operation::Add => left.add(right),
            Operation::Subtract => left.sub(right),
        };
        Self {
            left,
            right,
            operation,
            answer,
        }
    }

    /// Level 1 adds tenths, level 2 adds or subtracts tenths, level 3 mixes tenths and hundredths.
    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let operation = if level == 1 || rng.random_bool(0.5) {
            Operation::Add
        } else {
            Operation::Subtract
        };
        let (left, right) = match level {
            1 => (
                Decimal::new(rng.random_range(1..=99), 1),
                Decimal::new(rng.random_range(1..=99), 1),
            ),
            2 => (
                Decimal::new(rng.random_range(10..=999), 1),
                Decimal::new(rng.random_range(10..=999), 1),
            ),
            _ => (
                Decimal::new(rng.random_range(100..=9_999), 2),
                Decimal::new(rng.random_range(10..=999), 1),
            ),
        };
        Self::new(left, right, operation)
    }

    fn tolerance(&self) -> Tolerance {
        Tolerance::default()
    }
}

impl Exercise for DecimalArithmetic {
    fn prompt(&self) -> String {
        format!(
            "What is {} {} {}?",
            self.left,
            self.operation.symbol(),
            self.right
        )
    }

    fn input(&self) -> InputKind {
        InputKind::Decimal
    }

    fn expected(&self) -> String {
        self.answer.to_string()
    }

    fn canonical_response(&self) -> Response {
        Response::text(self.answer.to_string())
    }

    fn grade(&self, response: &Response) -> Result<Assessment, AnswerError> {
        let given = parse_decimal(response.single()?)?;
        let correct = self.tolerance().accepts(given, self.answer.to_f64());
        Ok(Assessment::new(correct, self.answer))
    }

    fn explain(&self) -> Explanation {
        let places = self.left.places().max(self.right.places());
        Explanation::new()
            .step("Line up the decimal points, filling empty places with zeros.")
            .step(format!(
                "{} {} {}",
                self.left.padded(places),
                self.operation.symbol(),
                self.right.padded(places)
            ))
            .step(format!(
                "{} as with whole numbers, then put the point back in the same column.",
                self.operation.verb()
            ))
            .step(format!(
                "{} {} {} = {}.",
                self.left,
                self.operation.symbol(),
                self.right,
                self.answer
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::DECIMAL_EPSILON;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn mixed_places_add() {
        let p = DecimalArithmetic::new(Decimal::new(325, 2), Decimal::new(12, 1), Operation::Add);
        assert_eq!(p.answer, Decimal::new(445, 2));
        assert!(p.grade(&Response::text("4.45")).unwrap().correct);
        assert!(p.grade(&Response::text("4.4504")).unwrap().correct);
        assert!(!p.grade(&Response::text("4.5")).unwrap().correct);
    }

    #[test]
    fn default_tolerance_bounds_accepted_answers() {
        let p = DecimalArithmetic::new(Decimal::new(325, 2), Decimal::new(12, 1), Operation::Add);
        assert_eq!(p.tolerance().epsilon(), DECIMAL_EPSILON);

        for inside in ["4.4509", "4.4491", "4.450"] {
            assert!(p.grade(&Response::text(inside)).unwrap().correct, "{inside}");
        }
        for outside in ["4.4511", "4.4489", "4.452", "4.448"] {
            assert!(!p.grade(&Response::text(outside)).unwrap().correct, "{outside}");
        }
    }

    #[test]
    fn malformed_decimal_is_an_error() {
        let p = DecimalArithmetic::new(Decimal::new(5, 1), Decimal::new(2, 1), Operation::Add);
        assert!(matches!(
            p.grade(&Response::text("0.7.1")),
            Err(AnswerError::NotANumber(_))
        ));
    }

    #[test]
    fn results_match_and_stay_non_negative() {
        let mut rng = StdRng::seed_from_u64(18);
        for level in 1..=3 {
            for _ in 0..300 {
                let p = DecimalArithmetic::generate(level, &mut rng);
                let expected = match p.operation {
                    Operation::Add => p.left.to_f64() + p.right.to_f64(),
                    Operation::Subtract => p.left.to_f64() - p.right.to_f64(),
                };
                assert!((p.answer.to_f64() - expected).abs() < 1e-9);
                assert!(p.answer.units() >= 0);
                if level == 1 {
                    assert_eq!(p.operation, Operation::Add);
                }
            }
        }
    }
}
