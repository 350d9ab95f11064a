//! First-guess search
//!
//! Leaves first: the candidate index is built from the solution set, the compatibility
//! engine answers "how many solutions survive this feedback", and the searcher averages
//! those counts over every (guess, solution) pair.

mod engine;
mod index;
mod observer;
mod search;

pub use engine::CompatibilityEngine;
pub use index::{CandidateIndex, Mask};
pub use observer::{NullObserver, SearchObserver};
pub use search::{
    BestGuess, DEFAULT_CHUNK_SIZE, GuessScore, ScoreTable, SearchError, SearchOptions,
    SearchOutcome, Searcher,
};
