// tabmask - dataset anonymization pipeline
// Copyright (c) 2025 Tabmask Contributors
// Licensed under the MIT License

//! # tabmask - dataset anonymization pipeline
//!
//! tabmask ingests tabular or semi-structured records, identifies columns
//! likely to hold personally identifiable information (PII), rewrites the
//! selected column values with one of four masking strategies, and
//! re-serializes the result.
//!
//! ## Architecture
//!
//! tabmask follows a layered architecture:
//!
//! - [`domain`] - Record model, error taxonomy, and `Result` alias
//! - [`codec`] - Delimited-text (CSV) and structured-object (JSON) codecs
//! - [`detect`] - Heuristic sensitive-column detection
//! - [`masking`] - The four masking strategies and the batch engine
//! - [`pipeline`] - The façade external callers use
//! - [`config`] - Masking profile configuration
//! - [`logging`] - Structured logging setup
//! - [`cli`] - Command-line interface
//!
//! The core is pure, synchronous, single-threaded compute over an
//! in-memory dataset: parsing, detection, masking, and serialization are
//! deterministic functions of their inputs (apart from the `random`
//! strategy) with no I/O. The CLI shell owns file reads and writes.
//!
//! ## Quick Start
//!
//! ```
//! use tabmask::masking::MaskingStrategy;
//! use tabmask::pipeline::Pipeline;
//!
//! # fn main() -> tabmask::domain::Result<()> {
//! let pipeline = Pipeline::new();
//!
//! // Parse (the format is sniffed from the content)
//! let parsed = pipeline.parse("id,email\n1,ahmet@example.com\n", "people.csv", None)?;
//!
//! // Let the detector seed the selection
//! let selected: Vec<String> = pipeline
//!     .suggest_sensitive_columns(&parsed.dataset)
//!     .into_iter()
//!     .collect();
//!
//! // Mask and re-serialize
//! let outcome = pipeline.mask(&parsed.dataset, &selected, MaskingStrategy::Mask, "");
//! let csv = pipeline.serialize(&outcome.dataset, None)?;
//!
//! assert!(csv.contains("ah***@ex*****.com"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Masking strategies
//!
//! | Strategy | Behavior |
//! |----------|----------|
//! | `mask`   | Shape-aware partial masking (email/IBAN/phone patterns) |
//! | `hash`   | Salted one-way SHA-256 digest, lowercase hex |
//! | `random` | Type-preserving randomization per character class |
//! | `redact` | Constant `[GIZLI]` replacement |
//!
//! ## Error Handling
//!
//! tabmask uses [`domain::TabmaskError`] for all errors:
//!
//! ```
//! use tabmask::domain::Result;
//! use tabmask::pipeline::Pipeline;
//!
//! fn example() -> Result<()> {
//!     let pipeline = Pipeline::new();
//!     // Errors are converted automatically with the ? operator
//!     let _parsed = pipeline.parse("id\n1\n", "tiny.csv", None)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod detect;
pub mod domain;
pub mod logging;
pub mod masking;
pub mod pipeline;
