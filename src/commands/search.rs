//! Exhaustive search command
//!
//! Scores every guess in the vocabulary and reports the best opening.

use crate::core::Word;
use crate::solver::{SearchError, SearchObserver, SearchOptions, SearchOutcome, Searcher};
use std::time::{Duration, Instant};

/// Result of a full search run
#[derive(Debug)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub vocabulary_size: usize,
    pub solution_count: usize,
    pub duration: Duration,
    pub guesses_per_second: f64,
}

impl SearchReport {
    /// The `n` best guesses as `(word, score)`
    #[must_use]
    pub fn top(&self, vocabulary: &[Word], n: usize) -> Vec<(Word, f64)> {
        self.outcome
            .scores
            .ranked(n)
            .into_iter()
            .filter_map(|(index, score)| vocabulary.get(index).map(|&word| (word, score)))
            .collect()
    }
}

/// Run the search over `vocabulary` against `solutions`
///
/// # Errors
///
/// Returns `SearchError::EmptyCandidateSet` if `solutions` is empty; nothing is scored.
pub fn run_search<O: SearchObserver>(
    vocabulary: &[Word],
    solutions: &[Word],
    options: SearchOptions,
    observer: &O,
) -> Result<SearchReport, SearchError> {
    let searcher = Searcher::new(vocabulary, solutions, options)?;

    let start = Instant::now();
    let outcome = searcher.run(observer);
    let duration = start.elapsed();

    Ok(SearchReport {
        outcome,
        vocabulary_size: vocabulary.len(),
        solution_count: solutions.len(),
        duration,
        guesses_per_second: vocabulary.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::NullObserver;
    use crate::wordlists::words_from_slice;

    #[test]
    fn search_runs() {
        let vocabulary: Vec<Word> =
            words_from_slice(&["zzzzz", "crane", "slate", "irate", "crate"]).unwrap();
        let solutions: Vec<Word> = words_from_slice(&["slate", "irate", "crate", "grate"]).unwrap();

        let report = run_search(
            &vocabulary,
            &solutions,
            SearchOptions::default(),
            &NullObserver,
        )
        .unwrap();

        assert_eq!(report.vocabulary_size, 5);
        assert_eq!(report.solution_count, 4);
        assert_eq!(report.outcome.scores.len(), 5);

        // ZZZZZ leaves everything
        assert_eq!(report.outcome.scores.get(0), Some(4.0));

        let best = report.outcome.best.unwrap();
        assert!(best.index > 0);
        assert!(best.score < 4.0);
    }

    #[test]
    fn top_lists_best_first() {
        let vocabulary: Vec<Word> = words_from_slice(&["zzzzz", "crate", "slate"]).unwrap();
        let solutions: Vec<Word> = words_from_slice(&["slate", "irate", "crate", "grate"]).unwrap();

        let report = run_search(
            &vocabulary,
            &solutions,
            SearchOptions::default(),
            &NullObserver,
        )
        .unwrap();
        let top = report.top(&vocabulary, 2);

        assert_eq!(top.len(), 2);
        assert!(top[0].1 <= top[1].1);
        assert_eq!(Some(top[0].0), report.outcome.best.map(|b| b.word));
        assert!(top.iter().all(|(word, _)| word.decode() != "zzzzz"));
    }

    #[test]
    fn search_empty_solutions() {
        let vocabulary: Vec<Word> = words_from_slice(&["crane"]).unwrap();
        let result = run_search(&vocabulary, &[], SearchOptions::default(), &NullObserver);
        assert_eq!(result.unwrap_err(), SearchError::EmptyCandidateSet);
    }
}
