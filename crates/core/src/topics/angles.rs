use rand::Rng;

use crate::answer::{AnswerError, Response, parse_choice};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::problem::Exercise;
use crate::visual::{InputKind, Visual};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleClass {
    Acute,
    Right,
    Obtuse,
    Straight,
    Reflex,
}

impl AngleClass {
    #[must_use]
    pub fn of(degrees: u32) -> Self {
        match degrees {
            0..=89 => AngleClass::Acute,
            90 => AngleClass::Right,
            91..=179 => AngleClass::Obtuse,
            180 => AngleClass::Straight,
            _ => AngleClass::Reflex,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AngleClass::Acute => "acute",
            AngleClass::Right => "right",
            AngleClass::Obtuse => "obtuse",
            AngleClass::Straight => "straight",
            AngleClass::Reflex => "reflex",
        }
    }

    #[must_use]
    pub fn rule(self) -> &'static str {
        match self {
            AngleClass::Acute => "An acute angle is less than 90°.",
            AngleClass::Right => "A right angle is exactly 90°.",
            AngleClass::Obtuse => "An obtuse angle is between 90° and 180°.",
            AngleClass::Straight => "A straight angle is exactly 180°.",
            AngleClass::Reflex => "A reflex angle is more than 180°.",
        }
    }
}

/// Name the kind of an angle given in degrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyAngle {
    pub degrees: u32,
    /// Whether straight and reflex are among the choices.
    pub extended: bool,
    pub answer: AngleClass,
}

impl ClassifyAngle {
    #[must_use]
    pub fn new(degrees: u32, extended: bool) -> Self {
        Self {
            degrees,
            extended,
            answer: AngleClass::of(degrees),
        }
    }

    /// Level 2 stays near 90°; level 3 adds straight and reflex angles.
    pub fn generate<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let pick = rng.random_range(0..10);
        match level {
            1 => {
                let degrees = match pick {
                    0..=3 => rng.random_range(10..=80),
                    4..=5 => 90,
                    _ => rng.random_range(100..=170),
                };
                Self::new(degrees, false)
            }
            2 => {
                let degrees = match pick {
                    0..=3 => rng.random_range(70..=89),
                    4..=5 => 90,
                    _ => rng.random_range(91..=110),
                };
                Self::new(degrees, false)
            }
            _ => {
                let degrees = match pick {
                    0..=2 => rng.random_range(5..=89),
                    3 => 90,
                    4..=6 => rng.random_range(91..=179),
                    7 => 180,
                    _ => rng.random_range(181..=355),
                };
                Self::new(degrees, true)
            }
        }
    }

    fn choices(&self) -> Vec<String> {
        let mut classes = vec![AngleClass::Acute, AngleClass::Right, AngleClass::Obtuse];
        if self.extended {
            classes.extend([AngleClass::Straight, AngleClass::Reflex]);
        }
        classes.iter().map(|c| c.name().to_string()).collect()
    }
}

impl Exercise for ClassifyAngle {
    fn prompt(&self) -> String {
        format!("What kind of angle is {}°?", self.degrees)
    }

    fn visual(&self) -> Visual {
        Visual::Angle {
            degrees: self.degrees,
        }
    }

    fn input(&self) -> InputKind {
        InputKind::Choice(self.choices())
    }

    fn expected(&self) -> String {
        self.answer.name().to_string()
    }

    fn canonical_response(&self) -> Response {
        Response::text(self.answer.name())
    }

    fn grade(&self, response: &Response) -> Result<Assessment, AnswerError> {
        let choices = self.choices();
        let given = parse_choice(response.single()?, &choices)?;
        Ok(Assessment::new(given == self.answer.name(), self.answer.name()))
    }

    fn explain(&self) -> Explanation {
        Explanation::new()
            .step(self.answer.rule())
            .step(format!(
                "{}° is {} angle.",
                self.degrees,
                match self.answer {
                    AngleClass::Acute | AngleClass::Obtuse => format!("an {}", self.answer.name()),
                    _ => format!("a {}", self.answer.name()),
                }
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn band_edges() {
        assert_eq!(AngleClass::of(89), AngleClass::Acute);
        assert_eq!(AngleClass::of(90), AngleClass::Right);
        assert_eq!(AngleClass::of(91), AngleClass::Obtuse);
        assert_eq!(AngleClass::of(180), AngleClass::Straight);
        assert_eq!(AngleClass::of(181), AngleClass::Reflex);
    }

    #[test]
    fn choices_are_case_insensitive() {
        let p = ClassifyAngle::new(120, false);
        assert!(p.grade(&Response::text("Obtuse")).unwrap().correct);
        assert!(matches!(
            p.grade(&Response::text("reflex")),
            Err(AnswerError::UnknownChoice(_))
        ));
    }

    #[test]
    fn class_matches_degrees_and_choices() {
        let mut rng = StdRng::seed_from_u64(26);
        for level in 1..=3 {
            for _ in 0..300 {
                let p = ClassifyAngle::generate(level, &mut rng);
                assert_eq!(p.answer, AngleClass::of(p.degrees));
                assert!(p.choices().contains(&p.answer.name().to_string()));
                if level < 3 {
                    assert!(p.degrees < 180);
                }
            }
        }
    }
}
