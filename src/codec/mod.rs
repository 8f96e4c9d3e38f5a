//! Format codecs
//!
//! Each codec converts between a wire format and the in-memory
//! [`Dataset`](crate::domain::Dataset) model:
//!
//! - [`delimited`] — comma-separated text with RFC4180-style quoting
//! - [`structured`] — JSON array of flat key-value objects
//!
//! Codec selection (declared format or first-character sniffing) lives in
//! the [`pipeline`](crate::pipeline) façade.

pub mod delimited;
pub mod structured;
