//! Image handles for asset-backed dividers.
//!
//! This module provides [`ImageSource`], a decoded RGBA image with known
//! intrinsic dimensions. The decoration engine never rasterizes images
//! itself; it hands an `ImageSource` to the host's [`PaintSurface`]
//! implementation, which maps the handle's [`id`](ImageSource::id) to its
//! own texture resources. The intrinsic dimensions feed the painter
//! thickness floor.
//!
//! [`PaintSurface`]: crate::PaintSurface

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{RenderError, Result};
use crate::types::Size;

/// Monotonic source of image handle identifiers.
static NEXT_IMAGE_ID: AtomicU64 = AtomicU64::new(1);

/// A decoded image that can back a divider painter.
///
/// `ImageSource` is cheap to clone; the pixel data is shared. Two clones
/// compare equal on [`id`](Self::id), which is unique per decoded image.
#[derive(Clone)]
pub struct ImageSource {
    /// Stable identifier hosts use to key texture uploads.
    id: u64,
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
    /// RGBA8 pixel data, row-major.
    pixels: Arc<[u8]>,
}

impl ImageSource {
    fn from_parts(width: u32, height: u32, pixels: Arc<[u8]>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(RenderError::PixelBufferMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            id: NEXT_IMAGE_ID.fetch_add(1, Ordering::Relaxed),
            width,
            height,
            pixels,
        })
    }

    /// Create an image source from a raw RGBA8 pixel buffer.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        Self::from_parts(width, height, pixels.into())
    }

    /// Decode an image from an in-memory encoded buffer (PNG, JPEG, ...).
    pub fn from_memory(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes)?.into_rgba8();
        let (width, height) = decoded.dimensions();
        tracing::debug!("Decoded {}x{} image from memory", width, height);
        Self::from_parts(width, height, decoded.into_raw().into())
    }

    /// Decode an image from a file on disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| RenderError::io(path, e))?;
        Self::from_memory(&bytes)
    }

    /// Get the stable identifier for this image.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the width of the image in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height of the image in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the intrinsic size of the image in logical pixels.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Get the RGBA8 pixel data, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl std::fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageSource")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl PartialEq for ImageSource {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ImageSource {}

/// How to scale an image when rendering to a different size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageScaleMode {
    /// Stretch the image to fill the destination rectangle.
    /// This may distort the image's aspect ratio.
    #[default]
    Stretch,

    /// Scale the image to fit within the destination rectangle while
    /// maintaining aspect ratio.
    Fit,

    /// Scale the image to fill the destination rectangle while
    /// maintaining aspect ratio, cropping overflow.
    Fill,

    /// Tile the image at its original size to fill the destination.
    Tile,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_rgba(width: u32, height: u32) -> Vec<u8> {
        vec![0xFF; (width * height * 4) as usize]
    }

    #[test]
    fn test_from_rgba8() {
        let img = ImageSource::from_rgba8(4, 2, solid_rgba(4, 2)).unwrap();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);
        assert_eq!(img.size(), Size::new(4.0, 2.0));
        assert_eq!(img.pixels().len(), 32);
    }

    #[test]
    fn test_unique_ids() {
        let a = ImageSource::from_rgba8(1, 1, solid_rgba(1, 1)).unwrap();
        let b = ImageSource::from_rgba8(1, 1, solid_rgba(1, 1)).unwrap();
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_buffer_mismatch_rejected() {
        let err = ImageSource::from_rgba8(4, 4, vec![0u8; 3]).unwrap_err();
        assert!(matches!(err, RenderError::PixelBufferMismatch { .. }));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let err = ImageSource::from_rgba8(0, 4, Vec::new()).unwrap_err();
        assert!(matches!(err, RenderError::EmptyImage { .. }));
    }
}
