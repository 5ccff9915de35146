use rand::Rng;

use crate::answer::{AnswerError, Response, parse_choice};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::number::Decimal;
use crate::problem::Exercise;
use crate::topics::Comparison;
use crate::visual::InputKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareDecimals {
    pub left: Decimal,
    pub right: Decimal,
    pub answer: Comparison,
}

impl CompareDecimals {
    #[must_use]
    pub fn new(left: Decimal, right: Decimal) -> Self {
        Self {
            left,
            right,
            answer: Comparison::from(left.cmp(&right)),
        }
    }

    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let (left, right) = match level {
            1 => (
                Decimal::new(rng.random_range(1..=99), 1),
                Decimal::new(rng.random_range(1..=99), 1),
            ),
            2 => {
                let whole = rng.random_range(0..=20_i64) * 100;
                (
                    Decimal::new(whole + rng.random_range(1..=99), 2),
                    Decimal::new(whole + rng.random_range(1..=99), 2),
                )
            }
            _ => {
                // Mixed places; sometimes the same value written two ways.
                let whole = rng.random_range(0..=9_i64);
                let tenths = rng.random_range(1..=9_i64);
                let short = Decimal::new(whole * 10 + tenths, 1);
                let long = if rng.random_bool(0.2) {
                    short.padded(2)
                } else {
                    Decimal::new(whole * 100 + rng.random_range(1..=99), 2)
                };
                if rng.random_bool(0.5) {
                    (short, long)
                } else {
                    (long, short)
                }
            }
        };
        Self::new(left, right)
    }
}

impl Exercise for CompareDecimals {
    fn prompt(&self) -> String {
        format!("Choose the sign that makes this true: {} ? {}", self.left, self.right)
    }

    fn input(&self) -> InputKind {
        InputKind::Choice(Comparison::choices())
    }

    fn expected(&self) -> String {
        self.answer.symbol().to_string()
    }

    fn canonical_response(&self) -> Response {
        Response::text(self.answer.symbol())
    }

    fn grade(&self, response: &Response) -> Result<Assessment, AnswerError> {
        let choices = Comparison::choices();
        let given = parse_choice(response.single()?, &choices)?;
        Ok(Assessment::new(given == self.answer.symbol(), self.answer.symbol()))
    }

    fn explain(&self) -> Explanation {
        let places = self.left.places().max(self.right.places());
        let left = self.left.padded(places);
        let right = self.right.padded(places);
        let mut explanation = Explanation::new()
            .step("Line up the decimal points and fill empty places with zeros.")
            .step(format!("{left} and {right}"));
        if left.whole_part() == right.whole_part() {
            explanation.push(format!(
                "The whole parts are both {}, so compare the digits after the point.",
                left.whole_part()
            ));
        } else {
            explanation.push(format!(
                "Compare the whole parts first: {} and {}.",
                left.whole_part(),
                right.whole_part()
            ));
        }
        explanation.step(format!(
            "{} {} {}, so the answer is {}.",
            self.left,
            self.answer.words(),
            self.right,
            self.answer.symbol()
        ))
    }
}
