//! Masking engine
//!
//! Applies one of four strategies to selected columns of a dataset,
//! producing a transformed dataset and aggregate statistics:
//!
//! - `mask` — shape-aware partial masking (email/IBAN/phone patterns)
//! - `hash` — salted one-way SHA-256 digest
//! - `random` — type-preserving randomization
//! - `redact` — full `[GIZLI]` replacement

pub mod engine;
pub mod strategy;

// Re-export main types
pub use engine::{mask, preview, PREVIEW_ROWS};
pub use strategy::{transform, MaskingStrategy, REDACTED};
