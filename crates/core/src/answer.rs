use std::fmt;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Reasons a submission could not be read. None of these count as a wrong answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("please enter an answer")]
    Empty,

    #[error("`{0}` is not a whole number")]
    NotAnInteger(String),

    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("`{0}` is not a fraction like 3/4")]
    InvalidFraction(String),

    #[error("a fraction cannot have a zero denominator")]
    ZeroDenominator,

    #[error("expected {expected} answers but got {got}")]
    WrongCount { expected: usize, got: usize },

    #[error("`{0}` is not one of the choices")]
    UnknownChoice(String),
}

//
// ─── RESPONSE ──────────────────────────────────────────────────────────────────
//

/// Raw submission as it comes from an input control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A single text or number box, or a clicked choice.
    Text(String),
    /// Several labelled boxes, in the order the problem lists them.
    Fields(Vec<String>),
    /// Tile labels in the order the user clicked them.
    Order(Vec<String>),
}

impl Response {
    #[must_use]
    pub fn text(raw: impl Into<String>) -> Self {
        Self::Text(raw.into())
    }

    #[must_use]
    pub fn fields<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Fields(values.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn order<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Order(labels.into_iter().map(Into::into).collect())
    }

    /// True when nothing was typed or clicked.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Response::Text(raw) => raw.trim().is_empty(),
            Response::Fields(values) | Response::Order(values) => {
                values.iter().all(|v| v.trim().is_empty())
            }
        }
    }

    /// The single value of a one-box answer.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::WrongCount` when several values were submitted.
    pub fn single(&self) -> Result<&str, AnswerError> {
        match self {
            Response::Text(raw) => Ok(raw.as_str()),
            Response::Fields(values) | Response::Order(values) if values.len() == 1 => {
                Ok(values[0].as_str())
            }
            Response::Fields(values) | Response::Order(values) => Err(AnswerError::WrongCount {
                expected: 1,
                got: values.len(),
            }),
        }
    }

    /// Exactly `expected` non-empty values. Plain text is split on commas.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::Empty` if any value is blank and
    /// `AnswerError::WrongCount` if the count does not match.
    pub fn parts(&self, expected: usize) -> Result<Vec<&str>, AnswerError> {
        let parts: Vec<&str> = match self {
            Response::Text(raw) => {
                if raw.trim().is_empty() {
                    return Err(AnswerError::Empty);
                }
                raw.split(',').map(str::trim).collect()
            }
            Response::Fields(values) | Response::Order(values) => {
                values.iter().map(|v| v.trim()).collect()
            }
        };
        if parts.len() != expected {
            return Err(AnswerError::WrongCount {
                expected,
                got: parts.len(),
            });
        }
        if parts.iter().any(|p| p.is_empty()) {
            return Err(AnswerError::Empty);
        }
        Ok(parts)
    }
}

/// What the user submitted, as shown in attempt history.
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Text(raw) => f.write_str(raw.trim()),
            Response::Fields(values) => f.write_str(&values.join(", ")),
            Response::Order(values) => f.write_str(&values.join(" → ")),
        }
    }
}

//
// ─── PARSERS ───────────────────────────────────────────────────────────────────
//

/// # Errors
///
/// Returns `AnswerError::Empty` or `AnswerError::NotAnInteger`.
pub fn parse_integer(raw: &str) -> Result<i64, AnswerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnswerError::Empty);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| AnswerError::NotAnInteger(trimmed.to_string()))
}

/// # Errors
///
/// Returns `AnswerError::Empty` or `AnswerError::NotANumber` (including `inf`/`NaN`).
pub fn parse_decimal(raw: &str) -> Result<f64, AnswerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnswerError::Empty);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AnswerError::NotANumber(trimmed.to_string())),
    }
}

/// Case-insensitive match against the offered choices.
///
/// # Errors
///
/// Returns `AnswerError::Empty` or `AnswerError::UnknownChoice`.
pub fn parse_choice<'a>(raw: &str, options: &'a [String]) -> Result<&'a str, AnswerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnswerError::Empty);
    }
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(trimmed))
        .map(String::as_str)
        .ok_or_else(|| AnswerError::UnknownChoice(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_trim_and_reject_garbage() {
        assert_eq!(parse_integer(" 42 ").unwrap(), 42);
        assert_eq!(parse_integer("-7").unwrap(), -7);
        assert_eq!(parse_integer("   ").unwrap_err(), AnswerError::Empty);
        assert_eq!(
            parse_integer("4.5").unwrap_err(),
            AnswerError::NotAnInteger("4.5".into())
        );
    }

    #[test]
    fn decimals_reject_non_finite() {
        assert_eq!(parse_decimal("3.25").unwrap(), 3.25);
        assert!(matches!(parse_decimal("inf"), Err(AnswerError::NotANumber(_))));
        assert!(matches!(parse_decimal("NaN"), Err(AnswerError::NotANumber(_))));
        assert!(matches!(parse_decimal("abc"), Err(AnswerError::NotANumber(_))));
    }

    #[test]
    fn choices_ignore_case() {
        let options = vec!["Acute".to_string(), "Right".to_string()];
        assert_eq!(parse_choice("acute", &options).unwrap(), "Acute");
        assert_eq!(
            parse_choice("wide", &options).unwrap_err(),
            AnswerError::UnknownChoice("wide".into())
        );
    }

    #[test]
    fn text_parts_split_on_commas() {
        let response = Response::text("200, 80 ,0,0, 280");
        assert_eq!(response.parts(5).unwrap(), vec!["200", "80", "0", "0", "280"]);
        assert_eq!(
            response.parts(2).unwrap_err(),
            AnswerError::WrongCount {
                expected: 2,
                got: 5
            }
        );
    }

    #[test]
    fn blank_field_is_empty_error() {
        let response = Response::fields(["12", " "]);
        assert_eq!(response.parts(2).unwrap_err(), AnswerError::Empty);
        assert!(!response.is_blank());
        assert!(Response::fields(["", " "]).is_blank());
    }

    #[test]
    fn single_rejects_multiple_fields() {
        assert_eq!(Response::fields(["3"]).single().unwrap(), "3");
        assert_eq!(
            Response::order(["a", "b"]).single().unwrap_err(),
            AnswerError::WrongCount {
                expected: 1,
                got: 2
            }
        );
    }
}
