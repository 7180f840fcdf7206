//! The paint surface capability consumed by divider decorations.
//!
//! Decorations never talk to a GPU or a canvas directly. During the host
//! widget's decoration-draw phase, the host hands the decoration a
//! [`PaintSurface`] and the decoration emits fill and image commands into
//! it. Hosts implement the trait on top of whatever renderer they use;
//! [`RecordingSurface`] is a ready-made implementation that captures the
//! command stream, used by the test suites and useful for offscreen
//! capture.

use crate::image::{ImageScaleMode, ImageSource};
use crate::types::{Color, Rect};

/// A drawing surface that accepts divider paint commands.
///
/// Implementations translate these calls into the host toolkit's own
/// drawing primitives. Commands arrive in paint order within a single
/// decoration-draw pass; surfaces are not expected to retain state between
/// passes.
pub trait PaintSurface {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw an image into the destination rectangle.
    fn draw_image(&mut self, image: &ImageSource, dest: Rect, scale_mode: ImageScaleMode);
}

/// A single captured paint command.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// A solid fill.
    FillRect { rect: Rect, color: Color },
    /// An image draw, identified by the image handle's id.
    DrawImage {
        image_id: u64,
        dest: Rect,
        scale_mode: ImageScaleMode,
    },
}

impl PaintCommand {
    /// The destination rectangle of this command.
    pub fn rect(&self) -> Rect {
        match self {
            PaintCommand::FillRect { rect, .. } => *rect,
            PaintCommand::DrawImage { dest, .. } => *dest,
        }
    }
}

/// A [`PaintSurface`] that records commands instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<PaintCommand>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded commands in emission order.
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Discard all recorded commands.
    ///
    /// Call this between passes when reusing a surface.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl PaintSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(PaintCommand::FillRect { rect, color });
    }

    fn draw_image(&mut self, image: &ImageSource, dest: Rect, scale_mode: ImageScaleMode) {
        self.commands.push(PaintCommand::DrawImage {
            image_id: image.id(),
            dest,
            scale_mode,
        });
    }
}
