//! Frequency scheduler: free-text dosing frequency → canonical clock slots.
//!
//! `frequency` holds the ordered idiom table, `slots` maps a count to clock
//! times and merges medications that share a time, `course` expands a
//! prescribed duration into individual pending doses.

mod course;
mod frequency;
mod slots;
mod types;

pub use course::*;
pub use frequency::*;
pub use slots::*;
pub use types::*;
