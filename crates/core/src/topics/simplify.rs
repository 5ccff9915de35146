use rand::Rng;

use crate::answer::{AnswerError, Response};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::number::{Fraction, gcd};
use crate::problem::Exercise;
use crate::visual::InputKind;

/// Reduce a fraction to lowest terms. Equal but unreduced answers are wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifyFraction {
    pub original: Fraction,
    pub simplest: Fraction,
}

impl SimplifyFraction {
    #[must_use]
    pub fn new(original: Fraction) -> Self {
        Self {
            original,
            simplest: original.reduced(),
        }
    }

    /// Builds a lowest-terms fraction and scales it up by a common factor.
    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let (denominators, factors) = match level {
            1 => (2..=5, 2..=3),
            2 => (2..=9, 2..=6),
            _ => (3..=12, 2..=12),
        };
        let denominator = rng.random_range(denominators);
        let numerator = loop {
            let n = rng.random_range(1..denominator);
            if Fraction::of(n, denominator).is_lowest_terms() {
                break n;
            }
        };
        let factor = rng.random_range(factors);
        Self::new(Fraction::of(numerator * factor, denominator * factor))
    }

    fn common_factor(&self) -> i64 {
        gcd(self.original.numerator(), self.original.denominator())
    }
}

impl Exercise for SimplifyFraction {
    fn prompt(&self) -> String {
        format!("Write {} in simplest form.", self.original)
    }

    fn input(&self) -> InputKind {
        InputKind::Fraction
    }

    fn expected(&self) -> String {
        self.simplest.to_string()
    }

    fn canonical_response(&self) -> Response {
        Response::text(self.simplest.to_string())
    }

    fn grade(&self, response: &Response) -> Result<Assessment, AnswerError> {
        let given = Fraction::parse(response.single()?)?;
        let equal = given.same_value(&self.simplest);
        let assessment = Assessment::new(equal && given.is_lowest_terms(), self.simplest);
        if equal && !assessment.correct {
            return Ok(assessment.with_note("Equal, but not in simplest form yet."));
        }
        Ok(assessment)
    }

    fn explain(&self) -> Explanation {
        let g = self.common_factor();
        Explanation::new()
            .step(format!(
                "The greatest common factor of {} and {} is {g}.",
                self.original.numerator(),
                self.original.denominator()
            ))
            .step(format!(
                "{} ÷ {g} = {}, {} ÷ {g} = {}.",
                self.original.numerator(),
                self.simplest.numerator(),
                self.original.denominator(),
                self.simplest.denominator()
            ))
            .step(format!("{} = {}.", self.original, self.simplest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn unreduced_answer_is_wrong_with_note() {
        let p = SimplifyFraction::new(Fraction::new(6, 8).unwrap());
        assert!(p.grade(&Response::text("3/4")).unwrap().correct);
        let partial = p.grade(&Response::text("6/8")).unwrap();
        assert!(!partial.correct);
        assert!(partial.note.is_some());
        let wrong = p.grade(&Response::text("2/3")).unwrap();
        assert!(!wrong.correct);
        assert!(wrong.note.is_none());
    }

    #[test]
    fn simplest_is_reduced_and_equal() {
        let mut rng = StdRng::seed_from_u64(21);
        for level in 1..=3 {
            for _ in 0..300 {
                let p = SimplifyFraction::generate(level, &mut rng);
                assert!(p.simplest.is_lowest_terms());
                assert!(p.simplest.same_value(&p.original));
                assert!(!p.original.is_lowest_terms());
            }
        }
    }
}
