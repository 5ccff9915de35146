use rand::Rng;

use crate::answer::{AnswerError, Response};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::number::Fraction;
use crate::problem::Exercise;
use crate::visual::{InputKind, Visual};

/// A shaded grid; name the fraction that is shaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractionModel {
    pub rows: u32,
    pub cols: u32,
    pub shaded: u32,
}

impl FractionModel {
    #[must_use]
    pub fn new(rows: u32, cols: u32, shaded: u32) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            shaded: shaded.min(rows * cols),
        }
    }

    /// Level 1 is a single strip, later levels use larger grids.
    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let (rows, cols) = match level {
            1 => (1, rng.random_range(2..=6)),
            2 => (rng.random_range(1..=2), rng.random_range(2..=5)),
            _ => (rng.random_range(2..=4), rng.random_range(2..=5)),
        };
        let total = rows * cols;
        Self::new(rows, cols, rng.random_range(1..total))
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.rows * self.cols
    }

    #[must_use]
    pub fn answer(&self) -> Fraction {
        Fraction::of(self.shaded, self.total())
    }
}

impl Exercise for FractionModel {
    fn prompt(&self) -> String {
        "What fraction of the shape is shaded?".to_string()
    }

    fn visual(&self) -> Visual {
        Visual::FractionGrid {
            rows: self.rows,
            cols: self.cols,
            shaded: self.shaded,
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
        let mut explanation = Explanation::new()
            .step(format!(
                "Count all the equal parts: {} × {} = {}. That is the denominator.",
                self.rows,
                self.cols,
                self.total()
            ))
            .step(format!(
                "Count the shaded parts: {}. That is the numerator.",
                self.shaded
            ))
            .step(format!("The shaded fraction is {}.", self.answer()));
        let simplest = self.answer().reduced();
        if simplest != self.answer() {
            explanation.push(format!("This is the same as {simplest}."));
        }
        explanation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn equivalent_names_are_accepted() {
        let p = FractionModel::new(2, 4, 4);
        assert_eq!(p.answer(), Fraction::new(4, 8).unwrap());
        assert!(p.grade(&Response::text("1/2")).unwrap().correct);
        assert!(!p.grade(&Response::text("4/4")).unwrap().correct);
    }

    #[test]
    fn shaded_is_a_proper_part() {
        let mut rng = StdRng::seed_from_u64(23);
        for level in 1..=3 {
            for _ in 0..300 {
                let p = FractionModel::generate(level, &mut rng);
                assert!(p.shaded >= 1 && p.shaded < p.total());
                if level == 1 {
                    assert_eq!(p.rows, 1);
                }
            }
        }
    }
}
