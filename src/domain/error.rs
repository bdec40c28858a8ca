//! Error types for the document index view.
//!
//! This module defines the centralized error type [`DocIndexError`] and a type alias
//! [`Result`] used throughout the crate. Missing host data (view state, view
//! settings, stale order ids) is never an error: those conditions degrade to
//! defaults. The variants here cover theme loading, decoding host data and
//! host contract violations.

use thiserror::Error;

/// The main error type for document index operations.
///
/// # Examples
///
/// ```
/// use docindex::DocIndexError;
///
/// fn validate_theme() -> Result<(), DocIndexError> {
///     Err(DocIndexError::Theme("unknown color key".to_string()))
/// }
///
/// assert!(validate_theme().is_err());
/// ```
#[derive(Debug, Error)]
pub enum DocIndexError {
    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme file cannot be parsed. The string describes what
    /// went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (theme files, log files,
    /// fixture files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Host data could not be decoded from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A reorder request referenced a position outside the displayed list.
    ///
    /// The host UI guarantees valid indices, so this signals a host bug. The
    /// request is rejected before any state is touched.
    #[error("Reorder out of range: {from} -> {to} (list length {len})")]
    Reorder {
        /// Source position.
        from: usize,
        /// Destination position.
        to: usize,
        /// Length of the list the indices were checked against.
        len: usize,
    },
}

/// A specialized `Result` type for document index operations.
pub type Result<T> = std::result::Result<T, DocIndexError>;
