use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DifficultyError {
    #[error("minimum level must be at least 1")]
    ZeroMinimum,

    #[error("minimum level {min} is above maximum level {max}")]
    InvertedBounds { min: u8, max: u8 },

    #[error("ramp cadence must be > 0")]
    ZeroStep,
}

//
// ─── CHANGE ────────────────────────────────────────────────────────────────────
//

/// What a single graded answer did to the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyChange {
    Raised { from: u8, to: u8 },
    Lowered { from: u8, to: u8 },
    Unchanged,
}

impl DifficultyChange {
    #[must_use]
    pub fn is_change(self) -> bool {
        !matches!(self, DifficultyChange::Unchanged)
    }
}

//
// ─── ADAPTIVE DIFFICULTY ───────────────────────────────────────────────────────
//

/// Per-topic difficulty level clamped to `[min, max]`.
///
/// A correct answer extends the streak; once the streak reaches `step_every`
/// the level goes up by one and the streak starts over. A wrong answer drops
/// the level by one and clears the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveDifficulty {
    level: u8,
    min: u8,
    max: u8,
    streak: u32,
    step_every: u32,
}

impl AdaptiveDifficulty {
    /// Creates a ramp starting at `min`.
    ///
    /// # Errors
    ///
    /// Returns `DifficultyError` if `min` is zero, `min > max`, or `step_every` is zero.
    pub fn new(min: u8, max: u8, step_every: u32) -> Result<Self, DifficultyError> {
        if min == 0 {
            return Err(DifficultyError::ZeroMinimum);
        }
        if min > max {
            return Err(DifficultyError::InvertedBounds { min, max });
        }
        if step_every == 0 {
            return Err(DifficultyError::ZeroStep);
        }
        Ok(Self {
            level: min,
            min,
            max,
            streak: 0,
            step_every,
        })
    }

    /// Builds a ramp from catalogue constants, repairing bad bounds instead of failing.
    pub(crate) fn from_bounds(min: u8, max: u8, step_every: u32) -> Self {
        let min = min.max(1);
        Self {
            level: min,
            min,
            max: max.max(min),
            streak: 0,
            step_every: step_every.max(1),
        }
    }

    /// Returns a copy starting at `level`, clamped into bounds.
    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level.clamp(self.min, self.max);
        self
    }

    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[must_use]
    pub fn min(&self) -> u8 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u8 {
        self.max
    }

    /// Consecutive correct answers since the last level change.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Apply one graded answer.
    pub fn record(&mut self, correct: bool) -> DifficultyChange {
        let from = self.level;
        if correct {
            self.streak = self.streak.saturating_add(1);
            if self.streak < self.step_every {
                return DifficultyChange::Unchanged;
            }
            self.streak = 0;
            self.level = self.level.saturating_add(1).min(self.max);
        } else {
            self.streak = 0;
            self.level = self.level.saturating_sub(1).max(self.min);
        }

        match self.level.cmp(&from) {
            std::cmp::Ordering::Greater => DifficultyChange::Raised {
                from,
                to: self.level,
            },
            std::cmp::Ordering::Less => DifficultyChange::Lowered {
                from,
                to: self.level,
            },
            std::cmp::Ordering::Equal => DifficultyChange::Unchanged,
        }
    }

    /// Back to the lowest level with an empty streak.
    pub fn reset(&mut self) {
        self.level = self.min;
        self.streak = 0;
    }
}
