//! Per-position feedback for a guess
//!
//! Each position of a guess is marked independently:
//! - Exact: the letter sits at this position in the true word
//! - Elsewhere: not exact, but the letter occurs somewhere in the true word
//! - Absent: the letter does not occur in the true word at all
//!
//! Presence is global: how many times a letter occurs is never consulted. A guess that
//! repeats a letter the answer holds once gets every copy marked exact or elsewhere,
//! which is not what the official game shows. The compatibility count in
//! [`crate::solver::CompatibilityEngine`] applies this same rule in reverse, so the two
//! stay consistent with each other.

use super::word::{WLEN, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Gray
    Absent,
    /// Yellow
    Elsewhere,
    /// Green
    Exact,
}

impl Mark {
    /// Base-3 digit: absent = 0, elsewhere = 1, exact = 2
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Elsewhere => 1,
            Self::Exact => 2,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Elsewhere => '🟨',
            Self::Exact => '🟩',
        }
    }

    const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Elsewhere),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must have exactly {expected} marks, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid feedback symbol {0:?}, use G/Y/- or 🟩/🟨/⬜")]
    InvalidSymbol(char),
}

/// The marks a guess receives, one per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback<const N: usize = WLEN> {
    marks: [Mark; N],
}

impl<const N: usize> Feedback<N> {
    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; N]) -> Self {
        Self { marks }
    }

    /// Classify `guess` against `truth`
    ///
    /// # Examples
    /// ```
    /// use first_guess::core::{Feedback, Word};
    ///
    /// let guess: Word<3> = Word::encode("cat").unwrap();
    /// let truth: Word<3> = Word::encode("cab").unwrap();
    /// assert_eq!(Feedback::classify(&guess, &truth).to_string(), "🟩🟩⬜");
    /// ```
    #[must_use]
    pub fn classify(guess: &Word<N>, truth: &Word<N>) -> Self {
        let marks = std::array::from_fn(|i| {
            let letter = guess.letter(i);
            if letter == truth.letter(i) {
                Mark::Exact
            } else if truth.contains(letter) {
                Mark::Elsewhere
            } else {
                Mark::Absent
            }
        });
        Self { marks }
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; N] {
        &self.marks
    }

    /// # Panics
    /// Panics if `position >= N`
    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Mark {
        self.marks[position]
    }

    /// Base-3 encoding, position `i` weighted by `3^i`
    #[must_use]
    pub fn value(&self) -> u32 {
        self.marks
            .iter()
            .rev()
            .fold(0, |acc, &mark| acc * 3 + mark.digit())
    }

    /// Render as a row of colored squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|&m| m.emoji()).collect()
    }
}

impl<const N: usize> FromStr for Feedback<N> {
    type Err = FeedbackError;

    /// Parse a string like `"GY-GY"` or `"🟩🟨⬜🟩🟨"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actual = s.chars().count();
        if actual != N {
            return Err(FeedbackError::InvalidLength {
                expected: N,
                actual,
            });
        }

        let mut marks = [Mark::Absent; N];
        for (slot, ch) in marks.iter_mut().zip(s.chars()) {
            *slot = Mark::from_symbol(ch).ok_or(FeedbackError::InvalidSymbol(ch))?;
        }
        Ok(Self { marks })
    }
}

impl<const N: usize> fmt::Display for Feedback<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
