//! Adherence aggregator: dose-check events → percentages, grade, and a
//! per-day breakdown for the clinician summary.
//!
//! "No checks" is reported as `None` throughout and must never be shown as
//! 0%. Every percentage is rounded half-up to one decimal place.

mod aggregates;
mod grade;
mod report;
mod types;

pub use aggregates::*;
pub use grade::*;
pub use report::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AdherenceError {
    #[error("Percentage must be a finite value in 0..=100, got {0}")]
    InvalidPercentage(f64),
}
