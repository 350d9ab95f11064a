//! Exhaustive first-guess search
//!
//! Every vocabulary word is scored by the mean, over all solutions, of how many
//! solutions stay consistent with the feedback it would earn. Lower is better.

use super::engine::CompatibilityEngine;
use super::index::CandidateIndex;
use super::observer::SearchObserver;
use crate::core::{Feedback, WLEN, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Guesses per chunk; the best-so-far is folded and reported after each chunk
pub const DEFAULT_CHUNK_SIZE: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("solution set is empty, so the expected remaining count is undefined")]
    EmptyCandidateSet,
}

/// Search tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Score guesses within a chunk on the rayon pool
    pub parallel: bool,
    /// Guesses per chunk (0 is treated as 1)
    pub chunk_size: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Evaluation of a single guess against the whole solution set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessScore {
    /// Expected number of remaining solutions
    pub mean: f64,
    /// Largest remaining count over all true solutions
    pub worst: usize,
    /// Number of distinct feedbacks the guess can earn
    pub distinct_feedbacks: usize,
}

/// Lowest-scoring guess seen so far
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestGuess<const N: usize = WLEN> {
    /// Position in the vocabulary
    pub index: usize,
    pub word: Word<N>,
    pub score: f64,
}

impl<const N: usize> BestGuess<N> {
    /// Combine with a guess that comes later in vocabulary order
    ///
    /// `later` wins only on a strictly lower score, so ties keep the earlier guess.
    #[must_use]
    pub fn merge(self, later: Self) -> Self {
        if later.score < self.score { later } else { self }
    }
}

/// One score per vocabulary word, in vocabulary order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreTable {
    scores: Vec<f64>,
}

impl ScoreTable {
    #[must_use]
    pub const fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.scores.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }

    /// The `n` lowest scores as `(vocabulary index, score)`, ties in vocabulary order
    #[must_use]
    pub fn ranked(&self, n: usize) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self.scores.iter().copied().enumerate().collect();
        ranked.sort_by(|(i1, s1), (i2, s2)| s1.total_cmp(s2).then(i1.cmp(i2)));
        ranked.truncate(n);
        ranked
    }
}

/// Result of a full search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<const N: usize = WLEN> {
    pub scores: ScoreTable,
    /// `None` only when the vocabulary is empty
    pub best: Option<BestGuess<N>>,
}

/// Drives the guess × solution search
///
/// The candidate index is built once in [`Searcher::new`] and shared read-only by all
/// workers.
#[derive(Debug)]
pub struct Searcher<'a, const N: usize = WLEN> {
    vocabulary: &'a [Word<N>],
    index: CandidateIndex<N>,
    options: SearchOptions,
}

impl<'a, const N: usize> Searcher<'a, N> {
    /// # Errors
    /// Returns `SearchError::EmptyCandidateSet` if `solutions` is empty.
    pub fn new(
        vocabulary: &'a [Word<N>],
        solutions: &[Word<N>],
        options: SearchOptions,
    ) -> Result<Self, SearchError> {
        if solutions.is_empty() {
            return Err(SearchError::EmptyCandidateSet);
        }

        Ok(Self {
            vocabulary,
            index: CandidateIndex::build(solutions),
            options,
        })
    }

    #[must_use]
    pub const fn engine(&self) -> CompatibilityEngine<'_, N> {
        CompatibilityEngine::new(&self.index)
    }

    /// Score one guess against every solution
    ///
    /// Solutions that give the guess the same feedback share one compatibility count,
    /// keyed by the feedback's base-3 value, so each distinct feedback is filtered once.
    #[must_use]
    pub fn score_guess(&self, guess: &Word<N>) -> GuessScore {
        let engine = self.engine();
        let mut scratch = engine.scratch();
        let mut counts: FxHashMap<u32, usize> = FxHashMap::default();

        let mut total = 0usize;
        let mut worst = 0usize;
        for truth in self.index.solutions() {
            let feedback = Feedback::classify(guess, truth);
            let remaining = *counts
                .entry(feedback.value())
                .or_insert_with(|| engine.count_for_feedback(guess, &feedback, &mut scratch));
            total += remaining;
            worst = worst.max(remaining);
        }

        GuessScore {
            mean: total as f64 / self.index.len() as f64,
            worst,
            distinct_feedbacks: counts.len(),
        }
    }

    /// Score the whole vocabulary
    ///
    /// Each chunk writes its own slice of the score table; the best guess is then folded
    /// over that slice in order. Parallel and sequential runs give identical results.
    pub fn run<O: SearchObserver>(&self, observer: &O) -> SearchOutcome<N> {
        let chunk_size = self.options.chunk_size.max(1);
        let mut scores = vec![0.0; self.vocabulary.len()];
        let mut best: Option<BestGuess<N>> = None;

        for (chunk, (words, slots)) in self
            .vocabulary
            .chunks(chunk_size)
            .zip(scores.chunks_mut(chunk_size))
            .enumerate()
        {
            let offset = chunk * chunk_size;
            let score_one = |(i, (guess, slot)): (usize, (&Word<N>, &mut f64))| {
                *slot = self.score_guess(guess).mean;
                observer.guess_scored(offset + i, *slot);
            };

            if self.options.parallel {
                words
                    .par_iter()
                    .zip(slots.par_iter_mut())
                    .enumerate()
                    .for_each(score_one);
            } else {
                words
                    .iter()
                    .zip(slots.iter_mut())
                    .enumerate()
                    .for_each(score_one);
            }

            for (i, (&word, &score)) in words.iter().zip(slots.iter()).enumerate() {
                let candidate = BestGuess {
                    index: offset + i,
                    word,
                    score,
                };
                let merged = best.map_or(candidate, |current| current.merge(candidate));
                if best != Some(merged) {
                    observer.best_improved(&merged);
                    best = Some(merged);
                }
            }
        }

        SearchOutcome {
            scores: ScoreTable::new(scores),
            best,
        }
    }
}
