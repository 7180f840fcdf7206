//! Painter strategies for divider rectangles.
//!
//! A painter turns one divider rectangle into paint commands and can widen
//! the divider when its own content demands it: both thickness queries
//! default to pass-through, and content-backed painters such as
//! [`ImagePainter`] floor them at their intrinsic dimensions. The geometry
//! engines call the thickness queries during both measure and draw so the
//! reserved inset and the painted rectangle always agree.

mod color;
mod image;

pub use color::ColorPainter;
pub use image::ImagePainter;

use std::sync::{Arc, OnceLock};

use horizon_mullion_render::{PaintSurface, Rect};

use crate::style::StyleContext;

/// Strategy for drawing a single divider rectangle.
pub trait DividerPainter: Send + Sync {
    /// Paint one divider rectangle into the surface.
    fn draw_divider(&self, surface: &mut dyn PaintSurface, rect: Rect);

    /// Effective thickness along the x axis, given the configured value.
    ///
    /// Applies to dividers that extend vertically (side dividers in a
    /// vertical list). The default passes the configured value through.
    fn horizontal_thickness(&self, assumed: f32) -> f32 {
        assumed
    }

    /// Effective thickness along the y axis, given the configured value.
    ///
    /// Applies to dividers that extend horizontally. The default passes
    /// the configured value through.
    fn vertical_thickness(&self, assumed: f32) -> f32 {
        assumed
    }
}

/// Factory producing a painter from the host's style context.
///
/// Used for theme-dependent painters whose resources only exist once the
/// host can provide a [`StyleContext`]; see
/// [`lazy_painter`](crate::LinearDividerBuilder::lazy_painter).
pub type PainterFactory = Arc<dyn Fn(&StyleContext) -> Arc<dyn DividerPainter> + Send + Sync>;

/// A painter that is either ready or deferred behind a factory.
pub(crate) enum PainterSource {
    Ready(Arc<dyn DividerPainter>),
    Deferred(PainterFactory),
}

impl Clone for PainterSource {
    fn clone(&self) -> Self {
        match self {
            PainterSource::Ready(p) => PainterSource::Ready(p.clone()),
            PainterSource::Deferred(f) => PainterSource::Deferred(f.clone()),
        }
    }
}

/// Holder for a decoration's painter with resolve-once semantics.
///
/// Deferred factories run at most once per decoration; the resolved
/// painter is cached for the decoration's lifetime. The cache cell is the
/// only mutable state a decoration carries.
pub(crate) struct PainterSlot {
    source: PainterSource,
    resolved: OnceLock<Arc<dyn DividerPainter>>,
}

impl PainterSlot {
    pub(crate) fn from_source(source: PainterSource) -> Self {
        Self {
            source,
            resolved: OnceLock::new(),
        }
    }

    /// Get the painter, resolving a deferred factory on first use.
    pub(crate) fn get(&self, style: &StyleContext) -> &Arc<dyn DividerPainter> {
        match &self.source {
            PainterSource::Ready(painter) => painter,
            PainterSource::Deferred(factory) => self.resolved.get_or_init(|| factory(style)),
        }
    }
}

impl std::fmt::Debug for PainterSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.source {
            PainterSource::Ready(_) => "ready",
            PainterSource::Deferred(_) if self.resolved.get().is_some() => "resolved",
            PainterSource::Deferred(_) => "deferred",
        };
        f.debug_struct("PainterSlot").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use horizon_mullion_render::Color;

    #[test]
    fn test_default_thickness_is_pass_through() {
        struct Noop;
        impl DividerPainter for Noop {
            fn draw_divider(&self, _surface: &mut dyn PaintSurface, _rect: Rect) {}
        }

        let painter = Noop;
        assert_eq!(painter.horizontal_thickness(7.0), 7.0);
        assert_eq!(painter.vertical_thickness(3.0), 3.0);
    }

    #[test]
    fn test_deferred_slot_resolves_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = calls.clone();
        let factory: PainterFactory = Arc::new(move |style| {
            counted.fetch_add(1, Ordering::SeqCst);
            Arc::new(ColorPainter::new(style.divider_color))
        });

        let slot = PainterSlot::from_source(PainterSource::Deferred(factory));
        let style = StyleContext::default();
        slot.get(&style);
        slot.get(&style);
        slot.get(&style);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_ready_slot_ignores_style() {
        let painter: Arc<dyn DividerPainter> = Arc::new(ColorPainter::new(Color::RED));
        let slot = PainterSlot::from_source(PainterSource::Ready(painter));
        let style = StyleContext::default();
        slot.get(&style);
    }
}
