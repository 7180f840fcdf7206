//! Flat-color divider painter.

use horizon_mullion_render::{Color, PaintSurface, Rect};

use super::DividerPainter;

/// Paints dividers as solid color fills.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPainter {
    color: Color,
}

impl ColorPainter {
    /// Create a painter with the given fill color.
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Get the fill color.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl DividerPainter for ColorPainter {
    fn draw_divider(&self, surface: &mut dyn PaintSurface, rect: Rect) {
        surface.fill_rect(rect, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_mullion_render::{PaintCommand, RecordingSurface};

    #[test]
    fn test_fills_rect_with_color() {
        let painter = ColorPainter::new(Color::RED);
        let mut surface = RecordingSurface::new();
        let rect = Rect::new(0.0, 10.0, 100.0, 2.0);
        painter.draw_divider(&mut surface, rect);

        assert_eq!(
            surface.commands(),
            &[PaintCommand::FillRect {
                rect,
                color: Color::RED,
            }]
        );
    }
}
