//! One module per practice topic: generator, grader, and worked explanation.

pub mod angles;
pub mod area;
pub mod area_model;
pub mod column;
pub mod compare_decimals;
pub mod compare_fractions;
pub mod decimal_arithmetic;
pub mod division;
pub mod equivalent;
pub mod facts;
pub mod fraction_arithmetic;
pub mod fraction_model;
pub mod number_line;
pub mod order_decimals;
pub mod order_numbers;
pub mod patterns;
pub mod place_value;
pub mod rounding;
pub mod simplify;

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use rand::Rng;

/// Inclusive range of numbers with exactly `digits` digits (1 to 9 digits).
pub(crate) fn digits_range(digits: u32) -> RangeInclusive<u32> {
    let digits = digits.clamp(1, 9);
    let low = if digits == 1 { 1 } else { 10_u32.pow(digits - 1) };
    let high = 10_u32.pow(digits) - 1;
    low..=high
}

pub(crate) fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Direction for ordering topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            SortOrder::Ascending => "smallest to largest",
            SortOrder::Descending => "largest to smallest",
        }
    }

    pub(crate) fn sort<T: Ord>(self, values: &mut [T]) {
        values.sort();
        if self == SortOrder::Descending {
            values.reverse();
        }
    }
}

/// Answer of the comparison topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Less,
    Greater,
    Equal,
}

impl Comparison {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Less => "<",
            Comparison::Greater => ">",
            Comparison::Equal => "=",
        }
    }

    #[must_use]
    pub fn words(self) -> &'static str {
        match self {
            Comparison::Less => "is less than",
            Comparison::Greater => "is greater than",
            Comparison::Equal => "is equal to",
        }
    }

    pub(crate) fn choices() -> Vec<String> {
        [Comparison::Less, Comparison::Greater, Comparison::Equal]
            .iter()
            .map(|c| c.symbol().to_string())
            .collect()
    }
}

impl From<Ordering> for Comparison {
    fn from(value: Ordering) -> Self {
        match value {
            Ordering::Less => Comparison::Less,
            Ordering::Greater => Comparison::Greater,
            Ordering::Equal => Comparison::Equal,
        }
    }
}

/// Add or subtract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '−',
        }
    }

    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_ranges() {
        assert_eq!(digits_range(1), 1..=9);
        assert_eq!(digits_range(3), 100..=999);
        assert_eq!(digits_range(0), 1..=9);
    }

    #[test]
    fn sort_order_directions() {
        let mut values = vec![3, 1, 2];
        SortOrder::Descending.sort(&mut values);
        assert_eq!(values, vec![3, 2, 1]);
        SortOrder::Ascending.sort(&mut values);
        assert_eq!(values, vec![1, 2, 3]);
    }
}
