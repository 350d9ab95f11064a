//! Single-guess scoring command
//!
//! Evaluates one opening guess without running the whole vocabulary.

use super::{CommandError, parse_word};
use crate::core::Word;
use crate::solver::{GuessScore, SearchOptions, Searcher};

/// Result of scoring one guess
pub struct ScoreResult {
    pub word: String,
    pub score: GuessScore,
    pub total_solutions: usize,
    /// Whether the guess could itself be the answer
    pub is_solution: bool,
}

/// Score `word` as an opening guess against `solutions`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (wrong length or characters outside a-z)
/// - The solution set is empty
pub fn score_word(word: &str, solutions: &[Word]) -> Result<ScoreResult, CommandError> {
    let guess = parse_word(word)?;
    let searcher = Searcher::new(&[], solutions, SearchOptions::default())?;

    Ok(ScoreResult {
        word: guess.decode(),
        score: searcher.score_guess(&guess),
        total_solutions: solutions.len(),
        is_solution: solutions.contains(&guess),
    })
}
