use rand::Rng;

use crate::answer::{AnswerError, Response, parse_integer};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::problem::Exercise;
use crate::visual::{InputKind, Visual};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Area,
    Perimeter,
}

/// Area or perimeter of a rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaPerimeter {
    pub width: u32,
    pub height: u32,
    pub measure: Measure,
    pub answer: u32,
}

impl AreaPerimeter {
    #[must_use]
    pub fn new(width: u32, height: u32, measure: Measure) -> Self {
        let answer = match measure {
            Measure::Area => width * height,
            Measure::Perimeter => 2 * (width + height),
        };
        Self {
            width,
            height,
            measure,
            answer,
        }
    }

    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let sides = match level {
            1 => 1..=10,
            2 => 2..=15,
            _ => 5..=25,
        };
        let measure = if rng.random_bool(0.5) {
            Measure::Area
        } else {
            Measure::Perimeter
        };
        Self::new(
            rng.random_range(sides.clone()),
            rng.random_range(sides),
            measure,
        )
    }
}

impl Exercise for AreaPerimeter {
    fn prompt(&self) -> String {
        let what = match self.measure {
            Measure::Area => "area (in square units)",
            Measure::Perimeter => "perimeter (in units)",
        };
        format!(
            "A rectangle is {} wide and {} tall. What is its {what}?",
            self.width, self.height
        )
    }

    fn visual(&self) -> Visual {
        Visual::Rectangle {
            width: self.width,
            height: self.height,
        }
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
        let other = match self.measure {
            Measure::Area => 2 * (self.width + self.height),
            Measure::Perimeter => self.width * self.height,
        };
        if !assessment.correct && given == i64::from(other) {
            let hint = match self.measure {
                Measure::Area => "That is the perimeter. Area counts the squares inside.",
                Measure::Perimeter => "That is the area. Perimeter is the distance around.",
            };
            return Ok(assessment.with_note(hint));
        }
        Ok(assessment)
    }

    fn explain(&self) -> Explanation {
        let (w, h) = (self.width, self.height);
        match self.measure {
            Measure::Area => Explanation::new()
                .step("Area = width × height.")
                .step(format!("{w} × {h} = {} square units.", self.answer)),
            Measure::Perimeter => Explanation::new()
                .step("Perimeter = 2 × (width + height).")
                .step(format!("{w} + {h} = {}", w + h))
                .step(format!("2 × {} = {} units.", w + h, self.answer)),
        }
    }
}
