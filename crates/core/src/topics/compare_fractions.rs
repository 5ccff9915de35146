use rand::Rng;

use crate::answer::{AnswerError, Response, parse_choice};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::number::Fraction;
use crate::problem::Exercise;
use crate::topics::Comparison;
use crate::visual::{InputKind, Visual};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareFractions {
    pub left: Fraction,
    pub right: Fraction,
    pub answer: Comparison,
}

impl CompareFractions {
    #[must_use]
    pub fn new(left: Fraction, right: Fraction) -> Self {
        Self {
            left,
            right,
            answer: Comparison::from(left.cmp_value(&right)),
        }
    }

    /// Level 1 shares the denominator, level 2 shares the numerator, level 3
    /// uses any pair and sometimes an equivalent one.
    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        match level {
            1 => {
                let d = rng.random_range(3..=12);
                Self::new(
                    Fraction::of(rng.random_range(1..d), d),
                    Fraction::of(rng.random_range(1..d), d),
                )
            }
            2 => {
                let n = rng.random_range(1..=5);
                Self::new(
                    Fraction::of(n, rng.random_range(n + 1..=12)),
                    Fraction::of(n, rng.random_range(n + 1..=12)),
                )
            }
            _ => {
                let d1 = rng.random_range(2..=12);
                let left = Fraction::of(rng.random_range(1..d1), d1);
                let right = if rng.random_bool(0.2) {
                    let factor = rng.random_range(2..=3);
                    left.scaled_to(left.denominator() * factor)
                } else {
                    let d2 = rng.random_range(2..=12);
                    Fraction::of(rng.random_range(1..d2), d2)
                };
                Self::new(left, right)
            }
        }
    }

    fn cross_products(&self) -> (i64, i64) {
        (
            self.left.numerator() * self.right.denominator(),
            self.right.numerator() * self.left.denominator(),
        )
    }
}

impl Exercise for CompareFractions {
    fn prompt(&self) -> String {
        format!("Choose the sign that makes this true: {} ? {}", self.left, self.right)
    }

    fn visual(&self) -> Visual {
        Visual::FractionBars {
            left: self.left,
            right: self.right,
        }
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
        let mut explanation = Explanation::new();
        if self.left.denominator() == self.right.denominator() {
            explanation.push(format!(
                "Same denominator, so compare the numerators: {} and {}.",
                self.left.numerator(),
                self.right.numerator()
            ));
        } else if self.left.numerator() == self.right.numerator() {
            explanation.push(
                "Same numerator: the larger denominator means smaller pieces, so that fraction is smaller.",
            );
        } else {
            let (a, b) = self.cross_products();
            explanation.push("Cross multiply to compare.");
            explanation.push(format!(
                "{} × {} = {a} and {} × {} = {b}.",
                self.left.numerator(),
                self.right.denominator(),
                self.right.numerator(),
                self.left.denominator()
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

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn equivalent_fractions_are_equal() {
        let p = CompareFractions::new(Fraction::new(2, 3).unwrap(), Fraction::new(4, 6).unwrap());
        assert_eq!(p.answer, Comparison::Equal);
        assert!(p.grade(&Response::text("=")).unwrap().correct);
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let p = CompareFractions::new(Fraction::new(1, 3).unwrap(), Fraction::new(1, 4).unwrap());
        assert_eq!(
            p.grade(&Response::text("≥")).unwrap_err(),
            AnswerError::UnknownChoice("≥".into())
        );
    }

    #[test]
    fn symbol_matches_cross_multiplication() {
        let mut rng = StdRng::seed_from_u64(22);
        for level in 1..=3 {
            for _ in 0..300 {
                let p = CompareFractions::generate(level, &mut rng);
                let (a, b) = p.cross_products();
                assert_eq!(p.answer, Comparison::from(a.cmp(&b)));
                match level {
                    1 => assert_eq!(p.left.denominator(), p.right.denominator()),
                    2 => assert_eq!(p.left.numerator(), p.right.numerator()),
                    _ => {}
                }
            }
        }
    }
}
