//! Word list loading utilities
//!
//! Lists are newline separated, one word per line. Lines are taken as they are: a blank
//! or padded line is malformed, and any malformed line fails the whole load.

use crate::core::{WLEN, Word, WordError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: invalid word {text:?}")]
    InvalidWord {
        line: usize,
        text: String,
        #[source]
        source: WordError,
    },
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::InvalidWord`
/// naming the first malformed line.
///
/// # Examples
/// ```no_run
/// use first_guess::core::Word;
/// use first_guess::wordlists::loader::load_from_file;
///
/// let words: Vec<Word> = load_from_file("solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<const N: usize, P: AsRef<Path>>(path: P) -> Result<Vec<Word<N>>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    words_from_lines(content.lines())
}

/// Convert an in-memory list to words, with the same rules as [`load_from_file`]
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` for the first malformed entry (1-based).
///
/// # Examples
/// ```
/// use first_guess::core::Word;
/// use first_guess::wordlists::loader::words_from_slice;
///
/// let words: Vec<Word> = words_from_slice(&["crane", "slate"]).unwrap();
/// assert_eq!(words.len(), 2);
/// ```
pub fn words_from_slice<const N: usize>(slice: &[&str]) -> Result<Vec<Word<N>>, LoadError> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'s, const N: usize>(
    lines: impl Iterator<Item = &'s str>,
) -> Result<Vec<Word<N>>, LoadError> {
    lines
        .enumerate()
        .map(|(i, text)| {
            Word::encode(text).map_err(|source| LoadError::InvalidWord {
                line: i + 1,
                text: text.to_string(),
                source,
            })
        })
        .collect()
}

/// Load a list of standard-length words
///
/// # Errors
///
/// See [`load_from_file`].
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<Word<WLEN>>, LoadError> {
    load_from_file(path)
}
