//! Terminal progress for a running search

use crate::solver::{BestGuess, SearchObserver};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}";

/// Progress bar plus a line per best-guess improvement
pub struct SearchProgress {
    bar: ProgressBar,
    quiet: bool,
}

impl SearchProgress {
    #[must_use]
    pub fn new(total: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total as u64)
        };
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("█▓▒░"));
        }
        Self { bar, quiet }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl SearchObserver for SearchProgress {
    fn guess_scored(&self, _index: usize, _score: f64) {
        self.bar.inc(1);
    }

    fn best_improved<const N: usize>(&self, best: &BestGuess<N>) {
        let word = best.word.decode();
        self.bar.set_message(format!("best {word} {:.3}", best.score));
        if !self.quiet {
            self.bar.suspend(|| {
                println!(
                    "{} {}",
                    format!("{:.3}", best.score).bright_yellow(),
                    word.to_uppercase().bold()
                );
            });
        }
    }
}
