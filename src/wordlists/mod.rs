//! Word lists for the search
//!
//! The guess vocabulary and the solution set are both plain text files, one word per line.

pub mod loader;

pub use loader::{LoadError, load_from_file, load_words, words_from_slice};
