//! Input and output records exchanged with the ingestion, compliance-tracking
//! and presentation layers.

mod check;
mod enums;
mod medication;

pub use check::*;
pub use enums::*;
pub use medication::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
