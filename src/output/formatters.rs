//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing what fraction of the solution set a score leaves
#[must_use]
pub fn remaining_bar(score: f64, solutions: usize, width: usize) -> String {
    create_progress_bar(score, solutions as f64, width)
}

/// Share of the solution set, as a percentage
#[must_use]
pub fn percent_of(score: f64, solutions: usize) -> f64 {
    if solutions == 0 {
        0.0
    } else {
        score / solutions as f64 * 100.0
    }
}
