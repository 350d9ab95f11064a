//! First Guess
//!
//! Exhaustive search for the Wordle opening guess that leaves the fewest candidate
//! answers on average.
//!
//! # Quick Start
//!
//! ```rust
//! use first_guess::core::Word;
//! use first_guess::solver::{NullObserver, SearchOptions, Searcher};
//!
//! let vocabulary: Vec<Word> = ["crane", "zzzzz"].iter().map(|w| Word::encode(w).unwrap()).collect();
//! let solutions: Vec<Word> = ["slate", "crate"].iter().map(|w| Word::encode(w).unwrap()).collect();
//!
//! let searcher = Searcher::new(&vocabulary, &solutions, SearchOptions::default()).unwrap();
//! let outcome = searcher.run(&NullObserver);
//! assert_eq!(outcome.best.unwrap().word.decode(), "crane");
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
