use rand::Rng;

use crate::answer::{AnswerError, Response, parse_integer};
use crate::explain::Explanation;
use crate::grade::{Assessment, StepResult};
use crate::problem::Exercise;
use crate::visual::{InputKind, Visual};

const LABELS: [&str; 5] = [
    "Top left",
    "Top right",
    "Bottom left",
    "Bottom right",
    "Total",
];

/// Split of a two-digit number into tens and ones.
fn split(n: u32) -> (u32, u32) {
    (n / 10 * 10, n % 10)
}

/// The four boxes of the area model. Rows split `num1`, columns split `num2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partials {
    pub top_left: u32,
    pub top_right: u32,
    pub bottom_left: u32,
    pub bottom_right: u32,
}

impl Partials {
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.top_left + self.top_right + self.bottom_left + self.bottom_right
    }

    fn as_array(self) -> [u32; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }
}

/// Two-digit by two-digit multiplication with the box (area) method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxMultiplication {
    pub num1: u32,
    pub num2: u32,
    pub partials: Partials,
    pub product: u32,
}

impl BoxMultiplication {
    #[must_use]
    pub fn new(num1: u32, num2: u32) -> Self {
        let (t1, o1) = split(num1);
        let (t2, o2) = split(num2);
        let partials = Partials {
            top_left: t1 * t2,
            top_right: t1 * o2,
            bottom_left: o1 * t2,
            bottom_right: o1 * o2,
        };
        Self {
            num1,
            num2,
            partials,
            product: num1 * num2,
        }
    }

    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let (first, second) = match level {
            1 => (10..=29, 10..=19),
            2 => (10..=59, 10..=59),
            _ => (10..=99, 10..=99),
        };
        Self::new(rng.random_range(first), rng.random_range(second))
    }

    fn expected_values(&self) -> [u32; 5] {
        let [a, b, c, d] = self.partials.as_array();
        [a, b, c, d, self.product]
    }
}

impl Exercise for BoxMultiplication {
    fn prompt(&self) -> String {
        format!(
            "Use the box method to find {} × {}. Fill in each box, then the total.",
            self.num1, self.num2
        )
    }

    fn visual(&self) -> Visual {
        let (t1, o1) = split(self.num1);
        let (t2, o2) = split(self.num2);
        Visual::AreaModel {
            rows: [t1, o1],
            columns: [t2, o2],
        }
    }

    fn input(&self) -> InputKind {
        InputKind::Fields(LABELS.iter().map(ToString::to_string).collect())
    }

    fn expected(&self) -> String {
        self.product.to_string()
    }

    fn canonical_response(&self) -> Response {
        Response::fields(self.expected_values().iter().map(ToString::to_string))
    }

    fn grade(&self, response: &Response) -> Result<Assessment, AnswerError> {
        let parts = response.parts(LABELS.len())?;
        let mut steps = Vec::with_capacity(LABELS.len());
        for ((label, want), raw) in LABELS.iter().zip(self.expected_values()).zip(parts) {
            let given = parse_integer(raw)?;
            steps.push(StepResult::new(*label, want, raw, given == i64::from(want)));
        }
        Ok(Assessment::from_steps(self.product, steps))
    }

    fn explain(&self) -> Explanation {
        let (t1, o1) = split(self.num1);
        let (t2, o2) = split(self.num2);
        let p = self.partials;
        Explanation::new()
            .step(format!(
                "Split {} into {t1} + {o1} and {} into {t2} + {o2}.",
                self.num1, self.num2
            ))
            .step(format!("Top left: {t1} × {t2} = {}", p.top_left))
            .step(format!("Top right: {t1} × {o2} = {}", p.top_right))
            .step(format!("Bottom left: {o1} × {t2} = {}", p.bottom_left))
            .step(format!("Bottom right: {o1} × {o2} = {}", p.bottom_right))
            .step(format!(
                "Add the boxes: {} + {} + {} + {} = {}.",
                p.top_left, p.top_right, p.bottom_left, p.bottom_right, self.product
            ))
    }
}
