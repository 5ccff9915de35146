use rand::Rng;

use crate::answer::{AnswerError, Response, parse_integer};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::problem::Exercise;
use crate::topics::{Operation, digits_range};
use crate::visual::{InputKind, Visual};

/// Column addition or subtraction of whole numbers. Subtraction keeps `top >= bottom`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnArithmetic {
    pub top: u32,
    pub bottom: u32,
    pub operation: Operation,
    pub answer: u32,
}

impl ColumnArithmetic {
    #[must_use]
    pub fn new(top: u32, bottom: u32, operation: Operation) -> Self {
        let (top, bottom) = match operation {
            Operation::Subtract if bottom > top => (bottom, top),
            _ => (top, bottom),
        };
        let answer = match operation {
            Operation::Add => top + bottom,
            Operation::Subtract => top - bottom,
        };
        Self {
            top,
            bottom,
            operation,
            answer,
        }
    }

    /// Level `n` adds two `n`-digit numbers.
    pub fn addition<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let range = digits_range(u32::from(level.clamp(1, 4)));
        let top = rng.random_range(range.clone());
        let bottom = rng.random_range(range);
        Self::new(top, bottom, Operation::Add)
    }

    /// Level `n` subtracts numbers of up to `n` digits from an `n`-digit number.
    pub fn subtraction<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let range = digits_range(u32::from(level.clamp(1, 4)));
        let top = rng.random_range(range);
        let bottom = rng.random_range(1..=top.max(1));
        Self::new(top, bottom, Operation::Subtract)
    }

    fn column_steps(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let names = ["ones", "tens", "hundreds", "thousands", "ten thousands"];
        let (mut top, mut bottom) = (self.top, self.bottom);
        let mut carry = 0_u32;
        let mut borrow = 0_u32;
        let mut column = 0;
        while top > 0 || bottom > 0 || carry > 0 {
            let name = names.get(column).copied().unwrap_or("next");
            let (t, b) = (top % 10, bottom % 10);
            match self.operation {
                Operation::Add => {
                    let sum = t + b + carry;
                    if carry > 0 {
                        lines.push(format!("{name}: {t} + {b} + {carry} (carried) = {sum}"));
                    } else {
                        lines.push(format!("{name}: {t} + {b} = {sum}"));
                    }
                    if sum >= 10 {
                        lines.push(format!("Write {} and carry 1.", sum % 10));
                    }
                    carry = sum / 10;
                }
                Operation::Subtract => {
                    let t = i64::from(t) - i64::from(borrow);
                    let b = i64::from(b);
                    if t < b {
                        lines.push(format!(
                            "{name}: borrow 10 from the next column: {} − {b} = {}",
                            t + 10,
                            t + 10 - b
                        ));
                        borrow = 1;
                    } else {
                        lines.push(format!("{name}: {t} − {b} = {}", t - b));
                        borrow = 0;
                    }
                }
            }
            top /= 10;
            bottom /= 10;
            column += 1;
        }
        lines
    }
}

impl Exercise for ColumnArithmetic {
    fn prompt(&self) -> String {
        format!(
            "What is {} {} {}?",
            self.top,
            self.operation.symbol(),
            self.bottom
        )
    }

    fn visual(&self) -> Visual {
        Visual::Stacked {
            top: self.top,
            bottom: self.bottom,
            operator: self.operation.symbol(),
        }
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
        let mut explanation = Explanation::new().step(format!(
            "{} the columns from right to left.",
            self.operation.verb()
        ));
        for line in self.column_steps() {
            explanation.push(line);
        }
        explanation.step(format!(
            "{} {} {} = {}.",
            self.top,
            self.operation.symbol(),
            self.bottom,
            self.answer
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn addition_with_carry_is_explained() {
        let p = ColumnArithmetic::new(58, 67, Operation::Add);
        assert_eq!(p.answer, 125);
        let text = p.explain().steps().join("\n");
        assert!(text.contains("carry 1"), "{text}");
    }

    #[test]
    fn subtraction_swaps_to_stay_non_negative() {
        let p = ColumnArithmetic::new(12, 40, Operation::Subtract);
        assert_eq!((p.top, p.bottom, p.answer), (40, 12, 28));
        let text = p.explain().steps().join("\n");
        assert!(text.contains("borrow 10"), "{text}");
    }

    #[test]
    fn identities_hold() {
        let mut rng = StdRng::seed_from_u64(14);
        for level in 1..=4 {
            for _ in 0..300 {
                let add = ColumnArithmetic::addition(level, &mut rng);
                assert_eq!(add.answer, add.top + add.bottom);
                let sub = ColumnArithmetic::subtraction(level, &mut rng);
                assert_eq!(sub.answer + sub.bottom, sub.top);
            }
        }
    }
}
