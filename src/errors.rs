/*!
 * Error types for the vttkit library.
 *
 * Cue-level failures, whole-file rejections and missing save targets are
 * kept as distinct variants so callers can react to each one separately,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while reading, building or writing captions
#[derive(Error, Debug)]
pub enum CaptionError {
    /// A single cue has an unparseable timestamp or structure
    #[error("Malformed caption: {0}")]
    MalformedCaption(String),

    /// The whole stream was rejected (bad header/signature or no usable cues)
    #[error("Malformed file: {0}")]
    MalformedFile(String),

    /// A save was attempted without any known target path
    #[error("No filename known: provide an output path to save captions")]
    MissingFilename,

    /// A non-text value was assigned to a text view
    #[error("Text must be a string, got {found}")]
    TextTypeMismatch {
        /// Kind of the rejected value
        found: String,
    },

    /// Error from the underlying reader or writer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CaptionError {
    /// Whether this error concerns a single cue
    pub fn is_malformed_caption(&self) -> bool {
        matches!(self, Self::MalformedCaption(_))
    }

    /// Whether this error rejects the whole stream
    pub fn is_malformed_file(&self) -> bool {
        matches!(self, Self::MalformedFile(_))
    }
}

/// Result alias used across the library surface
pub type Result<T> = std::result::Result<T, CaptionError>;
