//! Word codec
//!
//! A [`Word`] stores a fixed-length word as alphabet indices (`'a'` = 0 … `'z'` = 25),
//! which is the form every later stage of the search works on.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Word length used by the real game
pub const WLEN: usize = 5;

/// Number of letters in the alphabet
pub const NCHAR: usize = 26;

/// A word of exactly `N` letters, each stored as an index in `0..NCHAR`
///
/// Immutable once constructed. The default length is [`WLEN`]; other lengths exist so
/// that small, hand-checkable games can be built in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word<const N: usize = WLEN> {
    letters: [u8; N],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid character {ch:?} at position {position}, only a-z allowed")]
    InvalidCharacter { ch: char, position: usize },

    #[error("letter index {index} at position {position} is outside the alphabet")]
    InvalidLetter { index: u8, position: usize },
}

impl<const N: usize> Word<N> {
    /// Encode a lowercase word into alphabet indices
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The length is not exactly `N` characters
    /// - Any character falls outside `a..=z` (uppercase is rejected too)
    ///
    /// # Examples
    /// ```
    /// use first_guess::core::Word;
    ///
    /// let word: Word = Word::encode("crane").unwrap();
    /// assert_eq!(word.letters(), &[2, 17, 0, 13, 4]);
    ///
    /// assert!(Word::<5>::encode("too long").is_err());
    /// assert!(Word::<5>::encode("sh0rt").is_err());
    /// ```
    pub fn encode(text: &str) -> Result<Self, WordError> {
        let actual = text.chars().count();
        if actual != N {
            return Err(WordError::InvalidLength {
                expected: N,
                actual,
            });
        }

        let mut letters = [0u8; N];
        for (position, (slot, ch)) in letters.iter_mut().zip(text.chars()).enumerate() {
            if !ch.is_ascii_lowercase() {
                return Err(WordError::InvalidCharacter { ch, position });
            }
            *slot = ch as u8 - b'a';
        }

        Ok(Self { letters })
    }

    /// Build a word directly from alphabet indices
    ///
    /// # Errors
    /// Returns `WordError::InvalidLetter` if any index is `>= NCHAR`.
    pub fn from_letters(letters: [u8; N]) -> Result<Self, WordError> {
        if let Some((position, &index)) = letters
            .iter()
            .enumerate()
            .find(|&(_, &l)| usize::from(l) >= NCHAR)
        {
            return Err(WordError::InvalidLetter { index, position });
        }
        Ok(Self { letters })
    }

    /// Decode back into the lowercase string form
    ///
    /// Exact inverse of [`Word::encode`].
    #[must_use]
    pub fn decode(&self) -> String {
        self.letters.iter().map(|&l| char::from(b'a' + l)).collect()
    }

    /// The alphabet indices, one per position
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; N] {
        &self.letters
    }

    /// The alphabet index at a position
    ///
    /// # Panics
    /// Panics if `position >= N`
    #[inline]
    #[must_use]
    pub const fn letter(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Whether the letter occurs anywhere in the word
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }
}

impl<const N: usize> FromStr for Word<N> {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::encode(s)
    }
}

impl<const N: usize> fmt::Display for Word<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_valid() {
        let word: Word = Word::encode("crane").unwrap();
        assert_eq!(word.letters(), &[2, 17, 0, 13, 4]);
        assert_eq!(word.letter(0), 2);
        assert_eq!(word.letter(4), 4);
    }

    #[test]
    fn encode_alphabet_bounds() {
        let word: Word<2> = Word::encode("az").unwrap();
        assert_eq!(word.letters(), &[0, 25]);
    }

    #[test]
    fn decode_inverts_encode() {
        for text in ["crane", "slate", "aaaaa", "zzzzz", "speed"] {
            let word: Word = Word::encode(text).unwrap();
            assert_eq!(word.decode(), text);
        }
    }

    #[test]
    fn encode_invalid_length() {
        assert_eq!(
            Word::<5>::encode("too long"),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 8
            })
        );
        assert_eq!(
            Word::<5>::encode("shrt"),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
        assert!(matches!(
            Word::<5>::encode(""),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn encode_invalid_characters() {
        assert_eq!(
            Word::<5>::encode("cran3"),
            Err(WordError::InvalidCharacter {
                ch: '3',
                position: 4
            })
        );
        assert!(Word::<5>::encode("cran ").is_err()); // Space
        assert!(Word::<5>::encode("Crane").is_err()); // Uppercase is not folded
        assert!(Word::<5>::encode("cranë").is_err()); // Non-ASCII
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Five characters, six bytes
        assert!(matches!(
            Word::<5>::encode("crané"),
            Err(WordError::InvalidCharacter { position: 4, .. })
        ));
    }

    #[test]
    fn from_letters_checks_alphabet() {
        let word = Word::from_letters([2, 0, 1]).unwrap();
        assert_eq!(word.decode(), "cab");

        assert_eq!(
            Word::from_letters([0, 26, 1]),
            Err(WordError::InvalidLetter {
                index: 26,
                position: 1
            })
        );
    }

    #[test]
    fn contains_ignores_position_and_count() {
        let word: Word = Word::encode("speed").unwrap();
        assert!(word.contains(b'e' - b'a'));
        assert!(word.contains(b's' - b'a'));
        assert!(!word.contains(b'z' - b'a'));
    }

    #[test]
    fn parse_and_display() {
        let word: Word = "crane".parse().unwrap();
        assert_eq!(format!("{word}"), "crane");
        assert!("CRANE".parse::<Word>().is_err());
    }
}
