use rand::Rng;
use rand::seq::SliceRandom;

use crate::answer::{AnswerError, Response};
use crate::explain::Explanation;
use crate::grade::{Assessment, StepResult};
use crate::number::Decimal;
use crate::problem::Exercise;
use crate::topics::{SortOrder, join};
use crate::visual::InputKind;

const COUNT: usize = 4;

/// Decimal tiles to click into order. `values` is the shuffled display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDecimals {
    pub values: Vec<Decimal>,
    pub order: SortOrder,
}

impl OrderDecimals {
    /// Level 1: tenths. Level 2: hundredths. Level 3: shared whole part with
    /// mixed tenths and hundredths (the 0.5 vs 0.45 trap).
    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let mut values: Vec<Decimal> = Vec::with_capacity(COUNT);
        let whole = rng.random_range(0..=9_i64);
        while values.len() < COUNT {
            let candidate = match level {
                1 => Decimal::new(rng.random_range(1..=99), 1),
                2 => Decimal::new(rng.random_range(1..=999), 2),
                _ => Decimal::new(whole * 100 + rng.random_range(1..=99), 2).trimmed(),
            };
            if !values.contains(&candidate) {
                values.push(candidate);
            }
        }
        values.shuffle(rng);
        Self {
            values,
            order: SortOrder::random(rng),
        }
    }

    #[must_use]
    pub fn sorted(&self) -> Vec<Decimal> {
        let mut out = self.values.clone();
        self.order.sort(&mut out);
        out
    }

    fn labels(values: &[Decimal]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }
}

impl Exercise for OrderDecimals {
    fn prompt(&self) -> String {
        format!(
            "Click the decimals in order from {}.",
            self.order.phrase()
        )
    }

    fn input(&self) -> InputKind {
        InputKind::Order(Self::labels(&self.values))
    }

    fn expected(&self) -> String {
        join(&self.sorted())
    }

    fn canonical_response(&self) -> Response {
        Response::order(Self::labels(&self.sorted()))
    }

    fn grade(&self, response: &Response) -> Result<Assessment, AnswerError> {
        let offered = Self::labels(&self.values);
        let given = response.parts(COUNT)?;
        for label in &given {
            if !offered.iter().any(|o| o == label) {
                return Err(AnswerError::UnknownChoice((*label).to_string()));
            }
        }
        let expected = Self::labels(&self.sorted());
        let steps = expected
            .iter()
            .zip(&given)
            .enumerate()
            .map(|(i, (want, got))| {
                StepResult::new(format!("Position {}", i + 1), want, *got, want == got)
            })
            .collect();
        Ok(Assessment::from_steps(self.expected(), steps))
    }

    fn explain(&self) -> Explanation {
        let places = self.values.iter().map(Decimal::places).max().unwrap_or(0);
        let padded: Vec<Decimal> = self.values.iter().map(|v| v.padded(places)).collect();
        Explanation::new()
            .step("Line up the decimal points and give every number the same number of places.")
            .step(format!("Written that way: {}.", join(&padded)))
            .step("Compare whole numbers first, then tenths, then hundredths.")
            .step(format!("From {}: {}.", self.order.phrase(), self.expected()))
    }
}
