use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::difficulty::AdaptiveDifficulty;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown topic: {0}")]
pub struct UnknownTopic(pub String);

/// Catalogue grouping shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    NumberSense,
    Operations,
    Fractions,
    Geometry,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::NumberSense,
        Category::Operations,
        Category::Fractions,
        Category::Geometry,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::NumberSense => "Number sense",
            Category::Operations => "Operations",
            Category::Fractions => "Fractions",
            Category::Geometry => "Geometry",
        }
    }
}

/// One practice activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicId {
    PutNumbersInOrder,
    OrderDecimals,
    CompareDecimalNumbers,
    Rounding,
    PlaceValue,
    NumberPatterns,
    Addition,
    Subtraction,
    MultiplicationFacts,
    BoxMultiplication,
    LongDivision,
    DecimalArithmetic,
    AddSubtractFractions,
    EquivalentFractions,
    SimplifyFraction,
    CompareFractions,
    FractionModels,
    NumberLineFractions,
    AreaPerimeter,
    ClassifyAngles,
}

/// Static catalogue entry for a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicInfo {
    pub id: TopicId,
    pub title: &'static str,
    pub summary: &'static str,
    pub category: Category,
    pub min_level: u8,
    pub max_level: u8,
    /// Consecutive correct answers needed before the level rises.
    pub step_every: u32,
}

impl TopicInfo {
    /// Fresh difficulty ramp at the lowest level.
    #[must_use]
    pub fn difficulty(&self) -> AdaptiveDifficulty {
        AdaptiveDifficulty::from_bounds(self.min_level, self.max_level, self.step_every)
    }
}

impl TopicId {
    pub const ALL: [TopicId; 20] = [
        TopicId::PutNumbersInOrder,
        TopicId::OrderDecimals,
        TopicId::CompareDecimalNumbers,
        TopicId::Rounding,
        TopicId::PlaceValue,
        TopicId::NumberPatterns,
        TopicId::Addition,
        TopicId::Subtraction,
        TopicId::MultiplicationFacts,
        TopicId::BoxMultiplication,
        TopicId::LongDivision,
        TopicId::DecimalArithmetic,
        TopicId::AddSubtractFractions,
        TopicId::EquivalentFractions,
        TopicId::SimplifyFraction,
        TopicId::CompareFractions,
        TopicId::FractionModels,
        TopicId::NumberLineFractions,
        TopicId::AreaPerimeter,
        TopicId::ClassifyAngles,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            TopicId::PutNumbersInOrder => "put_numbers_in_order",
            TopicId::OrderDecimals => "order_decimals",
            TopicId::CompareDecimalNumbers => "compare_decimal_numbers",
            TopicId::Rounding => "rounding",
            TopicId::PlaceValue => "place_value",
            TopicId::NumberPatterns => "number_patterns",
            TopicId::Addition => "addition",
            TopicId::Subtraction => "subtraction",
            TopicId::MultiplicationFacts => "multiplication_facts",
            TopicId::BoxMultiplication => "box_multiplication",
            TopicId::LongDivision => "long_division",
            TopicId::DecimalArithmetic => "decimal_arithmetic",
            TopicId::AddSubtractFractions => "add_subtract_fractions",
            TopicId::EquivalentFractions => "equivalent_fractions",
            TopicId::SimplifyFraction => "simplify_fraction",
            TopicId::CompareFractions => "compare_fractions",
            TopicId::FractionModels => "fraction_models",
            TopicId::NumberLineFractions => "number_line_fractions",
            TopicId::AreaPerimeter => "area_perimeter",
            TopicId::ClassifyAngles => "classify_angles",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.slug() == slug)
    }

    #[must_use]
    pub fn info(self) -> TopicInfo {
        use Category::{Fractions, Geometry, NumberSense, Operations};

        let (title, summary, category, max_level, step_every) = match self {
            TopicId::PutNumbersInOrder => (
                "Put numbers in order",
                "Sort five numbers and pick the one at a given position.",
                NumberSense,
                3,
                1,
            ),
            TopicId::OrderDecimals => (
                "Order decimals",
                "Click decimal tiles into order.",
                NumberSense,
                3,
                1,
            ),
            TopicId::CompareDecimalNumbers => (
                "Compare decimal numbers",
                "Choose <, > or = between two decimals.",
                NumberSense,
                3,
                1,
            ),
            TopicId::Rounding => (
                "Rounding",
                "Round to the nearest ten, hundred or thousand.",
                NumberSense,
                3,
                1,
            ),
            TopicId::PlaceValue => (
                "Place value",
                "Find the value of a digit in its place.",
                NumberSense,
                4,
                1,
            ),
            TopicId::NumberPatterns => (
                "Number patterns",
                "Find the next number in a counting pattern.",
                NumberSense,
                3,
                1,
            ),
            TopicId::Addition => (
                "Addition",
                "Column addition with regrouping.",
                Operations,
                4,
                3,
            ),
            TopicId::Subtraction => (
                "Subtraction",
                "Column subtraction with borrowing.",
                Operations,
                4,
                3,
            ),
            TopicId::MultiplicationFacts => (
                "Multiplication facts",
                "Times tables up to 12 × 12.",
                Operations,
                3,
                3,
            ),
            TopicId::BoxMultiplication => (
                "Box multiplication",
                "Multiply two-digit numbers with the area model.",
                Operations,
                3,
                1,
            ),
            TopicId::LongDivision => (
                "Long division",
                "Find the quotient and remainder.",
                Operations,
                3,
                1,
            ),
            TopicId::DecimalArithmetic => (
                "Add and subtract decimals",
                "Line up the decimal points and calculate.",
                Operations,
                3,
                1,
            ),
            TopicId::AddSubtractFractions => (
                "Add and subtract fractions",
                "Combine fractions over a common denominator.",
                Fractions,
                3,
                1,
            ),
            TopicId::EquivalentFractions => (
                "Equivalent fractions",
                "Find the missing numerator.",
                Fractions,
                3,
                1,
            ),
            TopicId::SimplifyFraction => (
                "Simplify fractions",
                "Write a fraction in lowest terms.",
                Fractions,
                3,
                1,
            ),
            TopicId::CompareFractions => (
                "Compare fractions",
                "Choose <, > or = between two fractions.",
                Fractions,
                3,
                1,
            ),
            TopicId::FractionModels => (
                "Fraction models",
                "Name the fraction of the grid that is shaded.",
                Fractions,
                3,
                1,
            ),
            TopicId::NumberLineFractions => (
                "Fractions on a number line",
                "Name the fraction marked on the line.",
                Fractions,
                3,
                1,
            ),
            TopicId::AreaPerimeter => (
                "Area and perimeter",
                "Measure rectangles.",
                Geometry,
                3,
                1,
            ),
            TopicId::ClassifyAngles => (
                "Classify angles",
                "Acute, right, obtuse and more.",
                Geometry,
                3,
                1,
            ),
        };

        TopicInfo {
            id: self,
            title,
            summary,
            category,
            min_level: 1,
            max_level,
            step_every,
        }
    }

    #[must_use]
    pub fn category(self) -> Category {
        self.info().category
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for TopicId {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s.trim()).ok_or_else(|| UnknownTopic(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_round_trip_and_are_unique() {
        let mut seen = HashSet::new();
        for topic in TopicId::ALL {
            assert!(seen.insert(topic.slug()));
            assert_eq!(topic.slug().parse::<TopicId>().unwrap(), topic);
        }
        assert_eq!(
            "long_divison".parse::<TopicId>().unwrap_err(),
            UnknownTopic("long_divison".into())
        );
    }

    #[test]
    fn catalogue_bounds_are_sane() {
        for topic in TopicId::ALL {
            let info = topic.info();
            assert_eq!(info.id, topic);
            assert!((3..=5).contains(&info.max_level), "{topic}");
            let ramp = info.difficulty();
            assert_eq!(ramp.level(), info.min_level);
            assert_eq!(ramp.max(), info.max_level);
        }
    }

    #[test]
    fn every_category_has_topics() {
        for category in Category::ALL {
            assert!(TopicId::ALL.iter().any(|t| t.category() == category));
        }
    }
}
