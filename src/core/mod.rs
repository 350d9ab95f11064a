//! Core domain types
//!
//! The word codec and the feedback rule. Everything here is pure and allocation-light.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{NCHAR, WLEN, Word, WordError};
