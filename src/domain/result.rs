//! Result type alias for tabmask
//!
//! This module provides a convenient Result type alias that uses
//! `TabmaskError` as the error type.

use super::errors::TabmaskError;

/// Result type alias for tabmask operations
///
/// # Examples
///
/// ```
/// use tabmask::domain::result::Result;
/// use tabmask::domain::errors::TabmaskError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(TabmaskError::Configuration("invalid profile".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, TabmaskError>;
