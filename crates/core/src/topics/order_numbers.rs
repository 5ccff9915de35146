use rand::Rng;
use rand::seq::index::sample;

use crate::answer::{AnswerError, Response, parse_integer};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::problem::Exercise;
use crate::topics::{SortOrder, digits_range, join};
use crate::visual::{InputKind, Visual};

const COUNT: usize = 5;

/// Five distinct numbers; the user names the one at `position` once sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutNumbersInOrder {
    pub values: Vec<u32>,
    pub order: SortOrder,
    /// 1-based.
    pub position: usize,
    pub answer: u32,
}

impl PutNumbersInOrder {
    /// Level `n` draws `n`-digit numbers.
    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let range = digits_range(u32::from(level.clamp(1, 3)));
        let start = *range.start();
        let span = (range.end() - start + 1) as usize;
        let values = sample(rng, span, COUNT)
            .into_iter()
            .map(|offset| start + u32::try_from(offset).unwrap_or(0))
            .collect();
        let order = SortOrder::random(rng);
        let position = rng.random_range(1..=COUNT);
        Self::from_values(values, order, position)
    }

    /// Builds the problem and its answer from fixed values.
    #[must_use]
    pub fn from_values(values: Vec<u32>, order: SortOrder, position: usize) -> Self {
        let position = position.clamp(1, values.len().max(1));
        let sorted = sorted(&values, order);
        let answer = sorted.get(position - 1).copied().unwrap_or_default();
        Self {
            values,
            order,
            position,
            answer,
        }
    }

    #[must_use]
    pub fn sorted(&self) -> Vec<u32> {
        sorted(&self.values, self.order)
    }
}

fn sorted(values: &[u32], order: SortOrder) -> Vec<u32> {
    let mut out = values.to_vec();
    order.sort(&mut out);
    out
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

impl Exercise for PutNumbersInOrder {
    fn prompt(&self) -> String {
        format!(
            "Put these numbers in order from {}. Which number is {} in the list?",
            self.order.phrase(),
            ordinal(self.position)
        )
    }

    fn visual(&self) -> Visual {
        Visual::NumberCards(self.values.iter().map(ToString::to_string).collect())
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
        let sorted = self.sorted();
        Explanation::new()
            .step("Compare the numbers starting from the biggest place value.")
            .step(format!("From {}: {}.", self.order.phrase(), join(&sorted)))
            .step(format!(
                "Counting to position {} gives {}.",
                self.position, self.answer
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn descending_second_of_three_digit_numbers() {
        let problem =
            PutNumbersInOrder::from_values(vec![482, 117, 930, 265, 750], SortOrder::Descending, 2);
        assert_eq!(problem.answer, 750);
        assert!(problem.grade(&Response::text("750")).unwrap().correct);
        assert!(!problem.grade(&Response::text("482")).unwrap().correct);
    }

    #[test]
    fn ascending_first_is_minimum() {
        let problem = PutNumbersInOrder::from_values(vec![9, 3, 7, 1, 5], SortOrder::Ascending, 1);
        assert_eq!(problem.answer, 1);
    }

    #[test]
    fn generated_values_are_unique_and_sized_by_level() {
        let mut rng = StdRng::seed_from_u64(3);
        for level in 1..=3_u8 {
            let range = digits_range(u32::from(level));
            for _ in 0..300 {
                let problem = PutNumbersInOrder::generate(level, &mut rng);
                let unique: HashSet<_> = problem.values.iter().collect();
                assert_eq!(unique.len(), COUNT);
                assert!(problem.values.iter().all(|v| range.contains(v)));
                assert_eq!(problem.sorted()[problem.position - 1], problem.answer);
            }
        }
    }

    #[test]
    fn ordinals() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
    }

    #[test]
    fn text_answer_is_a_parse_error() {
        let problem = PutNumbersInOrder::from_values(vec![1, 2, 3, 4, 5], SortOrder::Ascending, 3);
        assert!(matches!(
            problem.grade(&Response::text("three")),
            Err(AnswerError::NotAnInteger(_))
        ));
    }
}
