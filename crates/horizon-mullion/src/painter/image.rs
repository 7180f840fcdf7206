//! Image-backed divider painter.

use horizon_mullion_render::{ImageScaleMode, ImageSource, PaintSurface, Rect};

use super::DividerPainter;

/// Paints dividers by drawing an image into the divider rectangle.
///
/// The image's intrinsic dimensions act as a thickness floor: a divider
/// configured thinner than the image reserves and paints the image's own
/// size instead, so the asset is never squashed below its natural
/// thickness.
#[derive(Debug, Clone)]
pub struct ImagePainter {
    image: ImageSource,
    scale_mode: ImageScaleMode,
}

impl ImagePainter {
    /// Create a painter that stretches the image into each divider rect.
    pub fn new(image: ImageSource) -> Self {
        Self {
            image,
            scale_mode: ImageScaleMode::Stretch,
        }
    }

    /// Set the scale mode using builder pattern.
    pub fn with_scale_mode(mut self, scale_mode: ImageScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }

    /// Get the backing image.
    pub fn image(&self) -> &ImageSource {
        &self.image
    }

    /// Get the scale mode.
    pub fn scale_mode(&self) -> ImageScaleMode {
        self.scale_mode
    }
}

impl DividerPainter for ImagePainter {
    fn draw_divider(&self, surface: &mut dyn PaintSurface, rect: Rect) {
        surface.draw_image(&self.image, rect, self.scale_mode);
    }

    fn horizontal_thickness(&self, assumed: f32) -> f32 {
        assumed.max(self.image.width() as f32)
    }

    fn vertical_thickness(&self, assumed: f32) -> f32 {
        assumed.max(self.image.height() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_mullion_render::{PaintCommand, RecordingSurface};

    fn test_image(width: u32, height: u32) -> ImageSource {
        ImageSource::from_rgba8(width, height, vec![0xFF; (width * height * 4) as usize]).unwrap()
    }

    #[test]
    fn test_intrinsic_size_floors_thickness() {
        let painter = ImagePainter::new(test_image(8, 40));
        assert_eq!(painter.vertical_thickness(15.0), 40.0);
        assert_eq!(painter.vertical_thickness(64.0), 64.0);
        assert_eq!(painter.horizontal_thickness(2.0), 8.0);
    }

    #[test]
    fn test_draws_image_command() {
        let image = test_image(4, 4);
        let painter = ImagePainter::new(image.clone()).with_scale_mode(ImageScaleMode::Tile);
        let mut surface = RecordingSurface::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 4.0);
        painter.draw_divider(&mut surface, rect);

        assert_eq!(
            surface.commands(),
            &[PaintCommand::DrawImage {
                image_id: image.id(),
                dest: rect,
                scale_mode: ImageScaleMode::Tile,
            }]
        );
    }
}
