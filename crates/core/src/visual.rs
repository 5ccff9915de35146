//! Presentation-neutral description of what a problem shows and how it is answered.

use crate::number::Fraction;

/// Picture drawn next to the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visual {
    None,
    /// Numbers shown as cards.
    NumberCards(Vec<String>),
    /// Column arithmetic, `top` over `bottom`.
    Stacked { top: u32, bottom: u32, operator: char },
    /// Area model: rows split the first factor, columns the second.
    AreaModel { rows: [u32; 2], columns: [u32; 2] },
    /// Long-division bracket.
    DivisionBracket { dividend: u32, divisor: u32 },
    /// Grid with the first `shaded` cells colored.
    FractionGrid { rows: u32, cols: u32, shaded: u32 },
    /// Two fraction bars, one above the other.
    FractionBars { left: Fraction, right: Fraction },
    /// Line from 0 to 1 split into `denominator` parts with a dot at `marked`.
    NumberLine { denominator: u32, marked: u32 },
    Rectangle { width: u32, height: u32 },
    Angle { degrees: u32 },
}

/// Input control the answer is entered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    Number,
    Decimal,
    Fraction,
    Choice(Vec<String>),
    /// Tiles clicked into order.
    Order(Vec<String>),
    /// Labelled boxes, answered in this order.
    Fields(Vec<String>),
}

impl InputKind {
    /// Placeholder text for single-box inputs.
    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        match self {
            InputKind::Number => "Type a whole number",
            InputKind::Decimal => "Type a decimal, e.g. 4.25",
            InputKind::Fraction => "Type a fraction, e.g. 3/4",
            InputKind::Choice(_) | InputKind::Order(_) | InputKind::Fields(_) => "",
        }
    }
}
