//! Error types for the pixel-grid engine.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the engine.
///
/// Note what is *not* here: out-of-range pixel indices and grid-size
/// mismatches on load are handled silently (no-op and resize
/// respectively), never as errors.
#[derive(Error, Debug)]
pub enum Error {
    /// A stored record names a grid size outside the allowed set.
    #[error("grid size {0} is not one of the allowed sizes (8, 16, 32, 64)")]
    InvalidGridSize(u32),

    /// PNG encoding failed. The buffer is untouched; export can be
    /// retried.
    #[error("image export failed: {0}")]
    Export(#[from] image::ImageError),

    /// A project record could not be read or written as JSON.
    #[error("project record (de)serialization failed: {0}")]
    Codec(#[from] serde_json::Error),

    /// A record's embedded thumbnail is not valid base64.
    #[error("invalid thumbnail data: {0}")]
    Thumbnail(#[from] base64::DecodeError),
}
