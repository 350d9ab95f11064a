//! Feedback inspection command
//!
//! Shows the feedback a guess earns and, given a solution set, which solutions would
//! earn the same feedback.

use super::{CommandError, parse_word};
use crate::core::{Feedback, Word};
use crate::solver::{CandidateIndex, CompatibilityEngine};

/// Result of classifying a guess
pub struct ClassifyResult {
    pub guess: String,
    pub feedback: Feedback,
    /// Solutions consistent with the feedback, when a solution set was given
    pub compatible: Option<Vec<String>>,
}

/// Classify `guess` against `truth`, or take `feedback` as already observed
///
/// `truth` wins if both are given.
///
/// # Errors
///
/// Returns an error if a word or the feedback pattern cannot be parsed, or if neither a
/// true word nor a feedback pattern is given.
pub fn classify_guess(
    guess: &str,
    truth: Option<&str>,
    feedback: Option<&str>,
    solutions: Option<&[Word]>,
) -> Result<ClassifyResult, CommandError> {
    let guess_word = parse_word(guess)?;
    let feedback: Feedback = match (truth, feedback) {
        (Some(truth), _) => Feedback::classify(&guess_word, &parse_word(truth)?),
        (None, Some(pattern)) => pattern.parse()?,
        (None, None) => return Err(CommandError::MissingTarget),
    };

    let compatible = solutions.map(|solutions| {
        let index = CandidateIndex::build(solutions);
        CompatibilityEngine::new(&index)
            .compatible_with(&guess_word, &feedback)
            .into_iter()
            .map(|s| solutions[s].decode())
            .collect()
    });

    Ok(ClassifyResult {
        guess: guess_word.decode(),
        feedback,
        compatible,
    })
}
