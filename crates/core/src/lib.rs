#![forbid(unsafe_code)]

pub mod interpretation;
pub mod model;
pub mod scoring;
pub mod time;

pub use interpretation::{Interpretation, interpret_scores};
pub use scoring::{Scores, calculate_scores};
pub use time::Clock;
