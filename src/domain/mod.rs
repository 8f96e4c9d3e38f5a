//! Core domain types for tabmask
//!
//! This module contains the record model, the error hierarchy, and the
//! `Result` alias used throughout the crate.

pub mod dataset;
pub mod errors;
pub mod result;

// Re-export commonly used types
pub use dataset::{DataFormat, Dataset, MaskOutcome, ParseOutcome, Record};
pub use errors::{ParseError, TabmaskError};
pub use result::Result;
