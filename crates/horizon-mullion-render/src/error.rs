//! Error types for the paint-surface crate.

use std::path::PathBuf;

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while preparing paint resources.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Image decoding failed.
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Reading an image file failed.
    #[error("Failed to read image '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A raw pixel buffer does not match its declared dimensions.
    #[error(
        "Pixel buffer length {actual} does not match {width}x{height} RGBA (expected {expected})"
    )]
    PixelBufferMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// An image with zero width or height.
    #[error("Image dimensions {width}x{height} must be non-zero")]
    EmptyImage { width: u32, height: u32 },
}

impl RenderError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
