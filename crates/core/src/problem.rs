use rand::Rng;

use crate::answer::{AnswerError, Response};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::topic::TopicId;
use crate::topics::{
    angles::ClassifyAngle, area::AreaPerimeter, area_model::BoxMultiplication,
    column::ColumnArithmetic, compare_decimals::CompareDecimals,
    compare_fractions::CompareFractions, decimal_arithmetic::DecimalArithmetic,
    division::LongDivision, equivalent::EquivalentFraction, facts::MultiplicationFact,
    fraction_arithmetic::FractionArithmetic, fraction_model::FractionModel,
    number_line::NumberLineFraction, order_decimals::OrderDecimals,
    order_numbers::PutNumbersInOrder, patterns::NumberPattern, place_value::PlaceValue,
    rounding::Rounding, simplify::SimplifyFraction,
};
use crate::visual::{InputKind, Visual};

/// Behavior every topic's problem provides.
pub trait Exercise {
    fn prompt(&self) -> String;

    fn visual(&self) -> Visual {
        Visual::None
    }

    fn input(&self) -> InputKind;

    /// Correct answer in the form the user would type it.
    fn expected(&self) -> String;

    /// The correct answer as an input control would submit it.
    fn canonical_response(&self) -> Response;

    /// # Errors
    ///
    /// Returns `AnswerError` when the submission cannot be read.
    fn grade(&self, response: &Response) -> Result<Assessment, AnswerError>;

    fn explain(&self) -> Explanation;
}

/// A generated question with its precomputed answer, one variant per topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    PutNumbersInOrder(PutNumbersInOrder),
    OrderDecimals(OrderDecimals),
    CompareDecimalNumbers(CompareDecimals),
    Rounding(Rounding),
    PlaceValue(PlaceValue),
    NumberPatterns(NumberPattern),
    Addition(ColumnArithmetic),
    Subtraction(ColumnArithmetic),
    MultiplicationFacts(MultiplicationFact),
    BoxMultiplication(BoxMultiplication),
    LongDivision(LongDivision),
    DecimalArithmetic(DecimalArithmetic),
    AddSubtractFractions(FractionArithmetic),
    EquivalentFractions(EquivalentFraction),
    SimplifyFraction(SimplifyFraction),
    CompareFractions(CompareFractions),
    FractionModels(FractionModel),
    NumberLineFractions(NumberLineFraction),
    AreaPerimeter(AreaPerimeter),
    ClassifyAngles(ClassifyAngle),
}

impl Problem {
    /// Draw a problem for `topic` at `level`. Levels outside the topic's bounds are clamped.
    pub fn generate<R: Rng + ?Sized>(topic: TopicId, level: u8, rng: &mut R) -> Self {
        let info = topic.info();
        let level = level.clamp(info.min_level, info.max_level);
        match topic {
            TopicId::PutNumbersInOrder => {
                Problem::PutNumbersInOrder(PutNumbersInOrder::generate(level, rng))
            }
            TopicId::OrderDecimals => Problem::OrderDecimals(OrderDecimals::generate(level, rng)),
            TopicId::CompareDecimalNumbers => {
                Problem::CompareDecimalNumbers(CompareDecimals::generate(level, rng))
            }
            TopicId::Rounding => Problem::Rounding(Rounding::generate(level, rng)),
            TopicId::PlaceValue => Problem::PlaceValue(PlaceValue::generate(level, rng)),
            TopicId::NumberPatterns => Problem::NumberPatterns(NumberPattern::generate(level, rng)),
            TopicId::Addition => Problem::Addition(ColumnArithmetic::addition(level, rng)),
            TopicId::Subtraction => Problem::Subtraction(ColumnArithmetic::subtraction(level, rng)),
            TopicId::MultiplicationFacts => {
                Problem::MultiplicationFacts(MultiplicationFact::generate(level, rng))
            }
            TopicId::BoxMultiplication => {
                Problem::BoxMultiplication(BoxMultiplication::generate(level, rng))
            }
            TopicId::LongDivision => Problem::LongDivision(LongDivision::generate(level, rng)),
            TopicId::DecimalArithmetic => {
                Problem::DecimalArithmetic(DecimalArithmetic::generate(level, rng))
            }
            TopicId::AddSubtractFractions => {
                Problem::AddSubtractFractions(FractionArithmetic::generate(level, rng))
            }
            TopicId::EquivalentFractions => {
                Problem::EquivalentFractions(EquivalentFraction::generate(level, rng))
            }
            TopicId::SimplifyFraction => {
                Problem::SimplifyFraction(SimplifyFraction::generate(level, rng))
            }
            TopicId::CompareFractions => {
                Problem::CompareFractions(CompareFractions::generate(level, rng))
            }
            TopicId::FractionModels => Problem::FractionModels(FractionModel::generate(level, rng)),
            TopicId::NumberLineFractions => {
                Problem::NumberLineFractions(NumberLineFraction::generate(level, rng))
            }
            TopicId::AreaPerimeter => Problem::AreaPerimeter(AreaPerimeter::generate(level, rng)),
            TopicId::ClassifyAngles => Problem::ClassifyAngles(ClassifyAngle::generate(level, rng)),
        }
    }

    #[must_use]
    pub fn topic(&self) -> TopicId {
        match self {
            Problem::PutNumbersInOrder(_) => TopicId::PutNumbersInOrder,
            Problem::OrderDecimals(_) => TopicId::OrderDecimals,
            Problem::CompareDecimalNumbers(_) => TopicId::CompareDecimalNumbers,
            Problem::Rounding(_) => TopicId::Rounding,
            Problem::PlaceValue(_) => TopicId::PlaceValue,
            Problem::NumberPatterns(_) => TopicId::NumberPatterns,
            Problem::Addition(_) => TopicId::Addition,
            Problem::Subtraction(_) => TopicId::Subtraction,
            Problem::MultiplicationFacts(_) => TopicId::MultiplicationFacts,
            Problem::BoxMultiplication(_) => TopicId::BoxMultiplication,
            Problem::LongDivision(_) => TopicId::LongDivision,
            Problem::DecimalArithmetic(_) => TopicId::DecimalArithmetic,
            Problem::AddSubtractFractions(_) => TopicId::AddSubtractFractions,
            Problem::EquivalentFractions(_) => TopicId::EquivalentFractions,
            Problem::SimplifyFraction(_) => TopicId::SimplifyFraction,
            Problem::CompareFractions(_) => TopicId::CompareFractions,
            Problem::FractionModels(_) => TopicId::FractionModels,
            Problem::NumberLineFractions(_) => TopicId::NumberLineFractions,
            Problem::AreaPerimeter(_) => TopicId::AreaPerimeter,
            Problem::ClassifyAngles(_) => TopicId::ClassifyAngles,
        }
    }

    fn exercise(&self) -> &dyn Exercise {
        match self {
            Problem::PutNumbersInOrder(p) => p,
            Problem::OrderDecimals(p) => p,
            Problem::CompareDecimalNumbers(p) => p,
            Problem::Rounding(p) => p,
            Problem::PlaceValue(p) => p,
            Problem::NumberPatterns(p) => p,
            Problem::Addition(p) | Problem::Subtraction(p) => p,
            Problem::MultiplicationFacts(p) => p,
            Problem::BoxMultiplication(p) => p,
            Problem::LongDivision(p) => p,
            Problem::DecimalArithmetic(p) => p,
            Problem::AddSubtractFractions(p) => p,
            Problem::EquivalentFractions(p) => p,
            Problem::SimplifyFraction(p) => p,
            Problem::CompareFractions(p) => p,
            Problem::FractionModels(p) => p,
            Problem::NumberLineFractions(p) => p,
            Problem::AreaPerimeter(p) => p,
            Problem::ClassifyAngles(p) => p,
        }
    }
}

impl Exercise for Problem {
    fn prompt(&self) -> String {
        self.exercise().prompt()
    }

    fn visual(&self) -> Visual {
        self.exercise().visual()
    }

    fn input(&self) -> InputKind {
        self.exercise().input()
    }

    fn expected(&self) -> String {
        self.exercise().expected()
    }

    fn canonical_response(&self) -> Response {
        self.exercise().canonical_response()
    }

    fn grade(&self, response: &Response) -> Result<Assessment, AnswerError> {
        self.exercise().grade(response)
    }

    fn explain(&self) -> Explanation {
        self.exercise().explain()
    }
}
