use rand::Rng;
use rand::seq::IndexedRandom;

use crate::answer::{AnswerError, Response, parse_integer};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::problem::Exercise;
use crate::topics::digits_range;
use crate::visual::InputKind;

const PLACE_NAMES: [&str; 6] = [
    "ones",
    "tens",
    "hundreds",
    "thousands",
    "ten thousands",
    "hundred thousands",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceValue {
    pub number: u32,
    /// Power of ten of the asked place (0 = ones).
    pub exponent: u32,
    pub digit: u32,
    pub answer: u32,
}

impl PlaceValue {
    #[must_use]
    pub fn new(number: u32, exponent: u32) -> Self {
        let place = 10_u32.pow(exponent);
        let digit = number / place % 10;
        Self {
            number,
            exponent,
            digit,
            answer: digit * place,
        }
    }

    /// Level `n` uses numbers with `n + 2` digits and asks about a non-zero digit.
    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let digits = u32::from(level.clamp(1, 4)) + 2;
        let number = rng.random_range(digits_range(digits));
        let nonzero: Vec<u32> = (0..digits)
            .filter(|e| number / 10_u32.pow(*e) % 10 != 0)
            .collect();
        // The leading digit is never zero, so `nonzero` is never empty.
        let exponent = nonzero.choose(rng).copied().unwrap_or(digits - 1);
        Self::new(number, exponent)
    }

    #[must_use]
    pub fn place_name(&self) -> &'static str {
        PLACE_NAMES
            .get(self.exponent as usize)
            .copied()
            .unwrap_or("ones")
    }
}

impl Exercise for PlaceValue {
    fn prompt(&self) -> String {
        format!(
            "In {}, what is the value of the digit in the {} place?",
            self.number,
            self.place_name()
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
        let assessment = Assessment::new(given == i64::from(self.answer), self.answer);
        if !assessment.correct && given == i64::from(self.digit) && self.exponent > 0 {
            return Ok(assessment.with_note(
                "That is the digit itself. Its value depends on its place.",
            ));
        }
        Ok(assessment)
    }

    fn explain(&self) -> Explanation {
        Explanation::new()
            .step(format!(
                "The digit in the {} place of {} is {}.",
                self.place_name(),
                self.number,
                self.digit
            ))
            .step(format!(
                "One {} is worth {}.",
                self.place_name().trim_end_matches('s'),
                10_u32.pow(self.exponent)
            ))
            .step(format!(
                "{} × {} = {}.",
                self.digit,
                10_u32.pow(self.exponent),
                self.answer
            ))
    }
}
