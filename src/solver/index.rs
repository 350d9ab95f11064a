//! Precomputed bitsets over the solution set
//!
//! Every mask has one bit per solution, in solution order, so a whole-set predicate
//! is a single lookup and combining predicates is a word-wise AND.

use crate::core::{NCHAR, WLEN, Word};
use bitvec::prelude::*;

/// One bit per solution
pub type Mask = BitVec<u64, Lsb0>;

/// Immutable side-table built once from the solution set
///
/// Holds, for every letter, which solutions contain it anywhere (and the complement),
/// and for every (position, letter) pair, which solutions have that letter there.
#[derive(Debug, Clone)]
pub struct CandidateIndex<const N: usize = WLEN> {
    solutions: Vec<Word<N>>,
    presence: Vec<Mask>,
    absence: Vec<Mask>,
    exact: Vec<Mask>,
}

impl<const N: usize> CandidateIndex<N> {
    /// Build the index in O(|solutions| · N)
    #[must_use]
    pub fn build(solutions: &[Word<N>]) -> Self {
        let len = solutions.len();
        let mut presence = vec![Mask::repeat(false, len); NCHAR];
        let mut exact = vec![Mask::repeat(false, len); N * NCHAR];

        for (s, word) in solutions.iter().enumerate() {
            for (position, &letter) in word.letters().iter().enumerate() {
                let letter = usize::from(letter);
                presence[letter].set(s, true);
                exact[position * NCHAR + letter].set(s, true);
            }
        }

        let absence = presence.iter().map(|mask| !mask.clone()).collect();

        Self {
            solutions: solutions.to_vec(),
            presence,
            absence,
            exact,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn solutions(&self) -> &[Word<N>] {
        &self.solutions
    }

    /// Whether `letter` occurs anywhere in solution `s`
    ///
    /// # Panics
    /// Panics if `s` is out of range or `letter >= NCHAR`
    #[inline]
    #[must_use]
    pub fn presence(&self, s: usize, letter: u8) -> bool {
        self.presence[usize::from(letter)][s]
    }

    /// The full letter-presence feature of solution `s`
    #[must_use]
    pub fn letters_present(&self, s: usize) -> [bool; NCHAR] {
        std::array::from_fn(|letter| self.presence[letter][s])
    }

    /// Solutions containing `letter` anywhere
    #[inline]
    #[must_use]
    pub fn presence_mask(&self, letter: u8) -> &BitSlice<u64, Lsb0> {
        &self.presence[usize::from(letter)]
    }

    /// Solutions not containing `letter` at all
    #[inline]
    #[must_use]
    pub fn absence_mask(&self, letter: u8) -> &BitSlice<u64, Lsb0> {
        &self.absence[usize::from(letter)]
    }

    /// Solutions with `letter` at `position`
    #[inline]
    #[must_use]
    pub fn exact_mask(&self, position: usize, letter: u8) -> &BitSlice<u64, Lsb0> {
        &self.exact[position * NCHAR + usize::from(letter)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words<const N: usize>(texts: &[&str]) -> Vec<Word<N>> {
        texts.iter().map(|t| Word::encode(t).unwrap()).collect()
    }

    fn letter(ch: char) -> u8 {
        ch as u8 - b'a'
    }

    #[test]
    fn presence_matches_word_contents() {
        let solutions: Vec<Word> = words(&["speed", "crane", "aaaaa"]);
        let index = CandidateIndex::build(&solutions);

        for (s, word) in solutions.iter().enumerate() {
            for l in 0..NCHAR as u8 {
                assert_eq!(index.presence(s, l), word.contains(l));
            }
        }
    }

    #[test]
    fn presence_ignores_multiplicity() {
        let solutions: Vec<Word> = words(&["speed"]);
        let index = CandidateIndex::build(&solutions);
        let features = index.letters_present(0);

        assert_eq!(features.iter().filter(|&&p| p).count(), 4); // s, p, e, d
        assert!(features[usize::from(letter('e'))]);
    }

    #[test]
    fn masks_cover_solution_set() {
        let solutions: Vec<Word<3>> = words(&["cab", "bat", "cat"]);
        let index = CandidateIndex::build(&solutions);

        assert_eq!(index.len(), 3);
        assert_eq!(
            index.presence_mask(letter('t')).iter_ones().collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(
            index.absence_mask(letter('t')).iter_ones().collect::<Vec<_>>(),
            vec![0]
        );
        assert_eq!(
            index.exact_mask(0, letter('c')).iter_ones().collect::<Vec<_>>(),
            vec![0, 2]
        );
        assert_eq!(index.exact_mask(1, letter('a')).count_ones(), 3);
        assert_eq!(index.exact_mask(2, letter('z')).count_ones(), 0);
    }

    #[test]
    fn absence_is_complement_of_presence() {
        let solutions: Vec<Word> = words(&["crane", "slate", "pious", "mummy"]);
        let index = CandidateIndex::build(&solutions);

        for l in 0..NCHAR as u8 {
            let present = index.presence_mask(l).count_ones();
            let absent = index.absence_mask(l).count_ones();
            assert_eq!(present + absent, solutions.len());
        }
    }

    #[test]
    fn empty_solution_set() {
        let index = CandidateIndex::<5>::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.presence_mask(0).len(), 0);
    }
}
