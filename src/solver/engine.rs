//! Compatibility counting
//!
//! Given the feedback a guess earns against some true word, count how many solutions
//! would earn that same feedback under the same rule. Each position selects one
//! precomputed mask from the [`CandidateIndex`] and the masks are ANDed together:
//!
//! - exact at `i`     → solutions with `guess[i]` at position `i`
//! - elsewhere at `i` → solutions containing `guess[i]` anywhere
//! - absent at `i`    → solutions not containing `guess[i]`
//!
//! The true word always satisfies its own feedback, so counts are at least 1.

use super::index::{CandidateIndex, Mask};
use crate::core::{Feedback, Mark, WLEN, Word};

/// Borrowed view over a [`CandidateIndex`] that answers compatibility queries
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityEngine<'a, const N: usize = WLEN> {
    index: &'a CandidateIndex<N>,
}

impl<'a, const N: usize> CompatibilityEngine<'a, N> {
    #[must_use]
    pub const fn new(index: &'a CandidateIndex<N>) -> Self {
        Self { index }
    }

    /// A filter buffer sized for this solution set, for reuse across calls
    #[must_use]
    pub fn scratch(&self) -> Mask {
        Mask::repeat(true, self.index.len())
    }

    /// Number of solutions consistent with the feedback `guess` earns against `truth`
    ///
    /// # Examples
    /// ```
    /// use first_guess::core::Word;
    /// use first_guess::solver::{CandidateIndex, CompatibilityEngine};
    ///
    /// let solutions: Vec<Word<3>> = ["cab", "bat", "cat"]
    ///     .iter()
    ///     .map(|w| Word::encode(w).unwrap())
    ///     .collect();
    /// let index = CandidateIndex::build(&solutions);
    /// let engine = CompatibilityEngine::new(&index);
    ///
    /// let guess = Word::encode("cat").unwrap();
    /// assert_eq!(engine.remaining_count(&guess, &solutions[0]), 1);
    /// ```
    #[must_use]
    pub fn remaining_count(&self, guess: &Word<N>, truth: &Word<N>) -> usize {
        let mut scratch = self.scratch();
        self.count_for_feedback(guess, &Feedback::classify(guess, truth), &mut scratch)
    }

    /// Number of solutions that would earn `feedback` for `guess`
    ///
    /// `scratch` is overwritten; it is resized if it does not match the solution set.
    pub fn count_for_feedback(
        &self,
        guess: &Word<N>,
        feedback: &Feedback<N>,
        scratch: &mut Mask,
    ) -> usize {
        self.filter_into(guess, feedback, scratch);
        scratch.count_ones()
    }

    /// Indices of the solutions consistent with the feedback `guess` earns against `truth`
    #[must_use]
    pub fn compatible(&self, guess: &Word<N>, truth: &Word<N>) -> Vec<usize> {
        self.compatible_with(guess, &Feedback::classify(guess, truth))
    }

    /// Indices of the solutions that would earn `feedback` for `guess`
    #[must_use]
    pub fn compatible_with(&self, guess: &Word<N>, feedback: &Feedback<N>) -> Vec<usize> {
        let mut filter = self.scratch();
        self.filter_into(guess, feedback, &mut filter);
        filter.iter_ones().collect()
    }

    fn filter_into(&self, guess: &Word<N>, feedback: &Feedback<N>, filter: &mut Mask) {
        filter.resize(self.index.len(), true);
        filter.fill(true);

        for (position, (&letter, &mark)) in guess.letters().iter().zip(feedback.marks()).enumerate()
        {
            let mask = match mark {
                Mark::Exact => self.index.exact_mask(position, letter),
                Mark::Elsewhere => self.index.presence_mask(letter),
                Mark::Absent => self.index.absence_mask(letter),
            };
            *filter &= mask;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words<const N: usize>(texts: &[&str]) -> Vec<Word<N>> {
        texts.iter().map(|t| Word::encode(t).unwrap()).collect()
    }

    #[test]
    fn three_letter_scenario() {
        let solutions: Vec<Word<3>> = words(&["cab", "bat", "cat"]);
        let index = CandidateIndex::build(&solutions);
        let engine = CompatibilityEngine::new(&index);
        let guess = Word::encode("cat").unwrap();

        // Against CAB: C exact, A exact, T absent → only CAB fits
        assert_eq!(engine.remaining_count(&guess, &solutions[0]), 1);
        assert_eq!(engine.compatible(&guess, &solutions[0]), vec![0]);

        // Against BAT: C absent, A exact, T exact → BAT only (CAB lacks T, CAT has C)
        assert_eq!(engine.compatible(&guess, &solutions[1]), vec![1]);

        // Against CAT: perfect → CAT only
        assert_eq!(engine.compatible(&guess, &solutions[2]), vec![2]);
    }

    #[test]
    fn elsewhere_does_not_exclude_exact_position() {
        // TAB vs BAT: T elsewhere, A exact, B elsewhere.
        // BAT and TAB both contain T and B with A in the middle, so both count.
        let solutions: Vec<Word<3>> = words(&["bat", "tab", "cat"]);
        let index = CandidateIndex::build(&solutions);
        let engine = CompatibilityEngine::new(&index);
        let guess = Word::encode("tab").unwrap();

        assert_eq!(engine.compatible(&guess, &solutions[0]), vec![0, 1]);
    }

    #[test]
    fn counts_are_reflexive_and_bounded() {
        let solutions: Vec<Word> = words(&[
            "crane", "slate", "irate", "crate", "grate", "speed", "abide", "floor",
        ]);
        let guesses: Vec<Word> = words(&["crane", "robot", "zzzzz", "eerie", "speed"]);
        let index = CandidateIndex::build(&solutions);
        let engine = CompatibilityEngine::new(&index);

        for guess in &guesses {
            for (s, truth) in solutions.iter().enumerate() {
                let count = engine.remaining_count(guess, truth);
                assert!((1..=solutions.len()).contains(&count));
                assert!(engine.compatible(guess, truth).contains(&s));
            }
        }
    }

    #[test]
    fn scratch_is_reusable_across_feedbacks() {
        let solutions: Vec<Word> = words(&["crane", "slate", "irate", "crate", "grate"]);
        let index = CandidateIndex::build(&solutions);
        let engine = CompatibilityEngine::new(&index);
        let guess = Word::encode("crate").unwrap();

        let mut scratch = Mask::new();
        for truth in &solutions {
            let feedback = Feedback::classify(&guess, truth);
            let reused = engine.count_for_feedback(&guess, &feedback, &mut scratch);
            assert_eq!(reused, engine.remaining_count(&guess, truth));
        }
    }

    #[test]
    fn count_for_parsed_feedback() {
        let solutions: Vec<Word> = words(&["crane", "slate", "irate", "crate", "grate"]);
        let index = CandidateIndex::build(&solutions);
        let engine = CompatibilityEngine::new(&index);
        let guess = Word::encode("slate").unwrap();

        // S absent, L absent, A exact, T exact, E exact
        let feedback: Feedback = "--GGG".parse().unwrap();
        let compatible = engine.compatible_with(&guess, &feedback);
        assert_eq!(compatible, vec![2, 3, 4]); // irate, crate, grate

        let mut scratch = engine.scratch();
        assert_eq!(engine.count_for_feedback(&guess, &feedback, &mut scratch), 3);
    }
}
