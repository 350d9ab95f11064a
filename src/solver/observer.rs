//! Progress hooks for the exhaustive search
//!
//! The search does no I/O of its own. Reporting goes through an observer so the CLI can
//! drive a progress bar while tests run silently.

use super::search::BestGuess;

/// Receives events while a search runs
///
/// `guess_scored` may be called concurrently from worker threads and in any order.
/// `best_improved` is called from the driving thread, in vocabulary order.
pub trait SearchObserver: Sync {
    fn guess_scored(&self, _index: usize, _score: f64) {}

    fn best_improved<const N: usize>(&self, _best: &BestGuess<N>) {}
}

/// Ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}
