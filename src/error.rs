//! Error types for manager-highlight

use thiserror::Error;

/// Result type alias for manager-highlight operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
///
/// The scan itself is infallible; errors only arise at the I/O rim
/// around it (reading the buffer file, reading configuration).
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    Message(String),
}
