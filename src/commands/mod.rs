//! Command implementations

pub mod classify;
pub mod score;
pub mod search;

pub use classify::{ClassifyResult, classify_guess};
pub use score::{ScoreResult, score_word};
pub use search::{SearchReport, run_search};

use crate::core::{FeedbackError, Word, WordError};
use crate::solver::SearchError;
use thiserror::Error;

/// Errors raised while turning command arguments into a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("invalid word {word:?}: {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    #[error(transparent)]
    Feedback(#[from] FeedbackError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("give either a true word or a feedback pattern")]
    MissingTarget,
}

pub(crate) fn parse_word(word: &str) -> Result<Word, CommandError> {
    word.parse().map_err(|source| CommandError::InvalidWord {
        word: word.to_string(),
        source,
    })
}
