//! Exact number types used by generators: fractions and fixed-place decimals.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::answer::AnswerError;

#[must_use]
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    // Only gcd(i64::MIN, 0 or i64::MIN) exceeds i64::MAX.
    i64::try_from(a).unwrap_or(i64::MAX)
}

#[must_use]
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

//
// ─── FRACTION ──────────────────────────────────────────────────────────────────
//

/// A fraction as written, not automatically reduced. The denominator is always positive
/// and neither part is `i64::MIN`, so signs can be flipped without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// # Errors
    ///
    /// Returns `AnswerError::ZeroDenominator` when `denominator` is zero, or
    /// `AnswerError::InvalidFraction` when a part is out of range.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, AnswerError> {
        if denominator == 0 {
            return Err(AnswerError::ZeroDenominator);
        }
        let out_of_range = || AnswerError::InvalidFraction(format!("{numerator}/{denominator}"));
        if numerator == i64::MIN || denominator == i64::MIN {
            return Err(out_of_range());
        }
        let (numerator, denominator) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Generator-side constructor; callers guarantee a positive denominator.
    pub(crate) fn of(numerator: u32, denominator: u32) -> Self {
        Self::from_parts(i64::from(numerator), i64::from(denominator))
    }

    pub(crate) fn from_parts(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator: denominator.max(1),
        }
    }

    #[must_use]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    #[must_use]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    #[must_use]
    pub fn reduced(self) -> Self {
        let g = gcd(self.numerator, self.denominator).max(1);
        Self {
            numerator: self.numerator / g,
            denominator: self.denominator / g,
        }
    }

    #[must_use]
    pub fn is_lowest_terms(&self) -> bool {
        gcd(self.numerator, self.denominator) == 1
    }

    /// Same value, possibly written differently (`2/4` and `1/2`).
    #[must_use]
    pub fn same_value(&self, other: &Fraction) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }

    #[must_use]
    pub fn cmp_value(&self, other: &Fraction) -> Ordering {
        let left = i128::from(self.numerator) * i128::from(other.denominator);
        let right = i128::from(other.numerator) * i128::from(self.denominator);
        left.cmp(&right)
    }

    /// Rewrite over a multiple of the current denominator.
    #[must_use]
    pub fn scaled_to(self, denominator: i64) -> Self {
        if denominator <= 0 || denominator % self.denominator != 0 {
            return self;
        }
        let factor = denominator / self.denominator;
        Self {
            numerator: self.numerator * factor,
            denominator,
        }
    }

    /// Accepts `3/4`, ` 3 / 4 `, `-1/2`, or a whole number such as `2`.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::Empty`, `AnswerError::InvalidFraction`, or
    /// `AnswerError::ZeroDenominator`.
    pub fn parse(raw: &str) -> Result<Self, AnswerError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AnswerError::Empty);
        }
        let invalid = || AnswerError::InvalidFraction(trimmed.to_string());
        match trimmed.split_once('/') {
            Some((num, den)) => {
                let numerator = num.trim().parse::<i64>().map_err(|_| invalid())?;
                let denominator = den.trim().parse::<i64>().map_err(|_| invalid())?;
                Self::new(numerator, denominator)
            }
            None => {
                let whole = trimmed.parse::<i64>().map_err(|_| invalid())?;
                Self::new(whole, 1)
            }
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

//
// ─── DECIMAL ───────────────────────────────────────────────────────────────────
//

fn pow10(places: u8) -> i64 {
    10_i64.pow(u32::from(places))
}

/// Fixed-place decimal: `units / 10^places`.
///
/// Equality and ordering compare values, so `0.5 == 0.50`; `Display` keeps the
/// written number of places.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Decimal {
    units: i64,
    places: u8,
}

impl Decimal {
    #[must_use]
    pub const fn new(units: i64, places: u8) -> Self {
        Self { units, places }
    }

    #[must_use]
    pub fn units(&self) -> i64 {
        self.units
    }

    #[must_use]
    pub fn places(&self) -> u8 {
        self.places
    }

    /// Units when written with `places` decimal places. Never drops digits.
    #[must_use]
    pub fn scaled_units(&self, places: u8) -> i64 {
        if places >= self.places {
            self.units * pow10(places - self.places)
        } else {
            self.units / pow10(self.places - places)
        }
    }

    /// Same value written with at least `places` places.
    #[must_use]
    pub fn padded(self, places: u8) -> Self {
        if places <= self.places {
            return self;
        }
        Self::new(self.scaled_units(places), places)
    }

    /// Drop trailing zeros after the point.
    #[must_use]
    pub fn trimmed(self) -> Self {
        let mut out = self;
        while out.places > 0 && out.units % 10 == 0 {
            out.units /= 10;
            out.places -= 1;
        }
        out
    }

    #[must_use]
    pub fn whole_part(&self) -> i64 {
        self.units / pow10(self.places)
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.units as f64 / pow10(self.places) as f64
    }

    #[must_use]
    pub fn add(self, other: Decimal) -> Decimal {
        let places = self.places.max(other.places);
        Decimal::new(self.scaled_units(places) + other.scaled_units(places), places)
    }

    #[must_use]
    pub fn sub(self, other: Decimal) -> Decimal {
        let places = self.places.max(other.places);
        Decimal::new(self.scaled_units(places) - other.scaled_units(places), places)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let places = self.places.max(other.places);
        self.scaled_units(places).cmp(&other.scaled_units(places))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.units < 0 { "-" } else { "" };
        let abs = self.units.abs();
        if self.places == 0 {
            return write!(f, "{sign}{abs}");
        }
        let scale = pow10(self.places);
        let width = usize::from(self.places);
        write!(f, "{sign}{}.{:0width$}", abs / scale, abs % scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-4, 6), 2);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(0, 6), 0);
    }

    #[test]
    fn fraction_parse_forms() {
        assert_eq!(Fraction::parse(" 3 / 4 ").unwrap(), Fraction::new(3, 4).unwrap());
        assert_eq!(Fraction::parse("2").unwrap(), Fraction::new(2, 1).unwrap());
        assert_eq!(Fraction::parse("1/-2").unwrap(), Fraction::new(-1, 2).unwrap());
        assert_eq!(Fraction::parse("1/0").unwrap_err(), AnswerError::ZeroDenominator);
        assert_eq!(
            Fraction::parse("a/b").unwrap_err(),
            AnswerError::InvalidFraction("a/b".into())
        );
        assert_eq!(Fraction::parse("").unwrap_err(), AnswerError::Empty);
    }

    #[test]
    fn fraction_parse_rejects_parts_that_cannot_change_sign() {
        assert!(matches!(
            Fraction::parse("-9223372036854775808/-1"),
            Err(AnswerError::InvalidFraction(_))
        ));
        assert!(matches!(
            Fraction::parse("1/-9223372036854775808"),
            Err(AnswerError::InvalidFraction(_))
        ));
        assert!(matches!(
            Fraction::parse("-9223372036854775808"),
            Err(AnswerError::InvalidFraction(_))
        ));

        let widest = Fraction::parse("9223372036854775807/-9223372036854775807").unwrap();
        assert_eq!(widest.numerator(), -i64::MAX);
        assert_eq!(widest.reduced(), Fraction::new(-1, 1).unwrap());
        assert!(!widest.is_lowest_terms());
        assert_eq!(gcd(i64::MIN, 0), i64::MAX);
    }

    #[test]
    fn fraction_value_comparison() {
        let half = Fraction::new(1, 2).unwrap();
        let two_quarters = Fraction::new(2, 4).unwrap();
        assert!(half.same_value(&two_quarters));
        assert_ne!(half, two_quarters);
        assert_eq!(two_quarters.reduced(), half);
        assert!(!two_quarters.is_lowest_terms());
        assert_eq!(
            Fraction::new(2, 3).unwrap().cmp_value(&Fraction::new(3, 4).unwrap()),
            Ordering::Less
        );
        assert_eq!(half.scaled_to(8), Fraction::new(4, 8).unwrap());
        assert_eq!(half.scaled_to(7), half);
    }

    #[test]
    fn decimal_display_and_value_equality() {
        assert_eq!(Decimal::new(93, 1).to_string(), "9.3");
        assert_eq!(Decimal::new(5, 2).to_string(), "0.05");
        assert_eq!(Decimal::new(-5, 1).to_string(), "-0.5");
        assert_eq!(Decimal::new(7, 0).to_string(), "7");
        assert_eq!(Decimal::new(5, 1), Decimal::new(50, 2));
        assert!(Decimal::new(45, 2) < Decimal::new(5, 1));
        assert_eq!(Decimal::new(50, 2).trimmed().to_string(), "0.5");
        assert_eq!(Decimal::new(5, 1).padded(2).to_string(), "0.50");
    }

    #[test]
    fn decimal_arithmetic_aligns_places() {
        let sum = Decimal::new(12, 1).add(Decimal::new(345, 2));
        assert_eq!(sum.to_string(), "4.65");
        let diff = Decimal::new(5, 0).sub(Decimal::new(25, 2));
        assert_eq!(diff.to_string(), "4.75");
        assert_eq!(Decimal::new(1234, 2).whole_part(), 12);
    }
}
