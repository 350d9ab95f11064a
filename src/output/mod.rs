//! Terminal output formatting
//!
//! Display utilities for CLI results, search progress, and the score table file.

pub mod display;
pub mod formatters;
pub mod progress;
pub mod table;

pub use display::{
    print_classify_result, print_score_result, print_search_header, print_search_result,
};
pub use progress::SearchProgress;
pub use table::{format_score, save_score_table, write_score_table};
