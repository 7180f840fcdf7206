//! Divider decoration for single-axis list layouts.
//!
//! [`LinearDivider`] draws a separator after every item of a vertical or
//! horizontal list, with optional separators before the first and after
//! the last item, and reserves matching insets so the separators never
//! overlap content.
//!
//! # Example
//!
//! ```
//! use horizon_mullion::{LinearDivider, Orientation};
//! use horizon_mullion_render::Color;
//!
//! let divider = LinearDivider::builder()
//!     .orientation(Orientation::Vertical)
//!     .thickness(1.0)
//!     .color(Color::from_rgb8(220, 220, 220))
//!     .build()
//!     .unwrap();
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use horizon_mullion_render::{Color, ImageSource, PaintSurface, Rect};

use crate::decoration::{DecorationHost, ItemDecoration};
use crate::error::{ConfigError, Result, checked_dimension};
use crate::layout::{EdgeInsets, LayoutSource, Orientation};
use crate::painter::{ColorPainter, DividerPainter, ImagePainter, PainterSlot, PainterSource};
use crate::style::StyleContext;

/// Divider decoration for linear (single-axis) layouts.
///
/// Immutable once built; construct through [`LinearDivider::builder`]. One
/// instance can be shared across any number of widgets.
pub struct LinearDivider {
    orientation: Orientation,
    thickness: f32,
    start_padding: f32,
    end_padding: f32,
    draw_first: bool,
    draw_last: bool,
    skip_positions: HashSet<usize>,
    painter: PainterSlot,
}

impl LinearDivider {
    /// Start building a linear divider decoration.
    pub fn builder() -> LinearDividerBuilder {
        LinearDividerBuilder::new()
    }

    /// Get the orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get the configured thickness (before any painter floor).
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Check whether a divider is drawn before the first item.
    pub fn draws_first(&self) -> bool {
        self.draw_first
    }

    /// Check whether a divider is drawn after the last item.
    pub fn draws_last(&self) -> bool {
        self.draw_last
    }

    /// Check whether the given position is excluded from drawing.
    pub fn is_skipped(&self, position: usize) -> bool {
        self.skip_positions.contains(&position)
    }

    fn draw_vertical(
        &self,
        surface: &mut dyn PaintSurface,
        layout: &dyn LayoutSource,
        painter: &Arc<dyn DividerPainter>,
    ) {
        let padding = layout.padding();
        let left = padding.left + self.start_padding;
        let right = layout.viewport().width - padding.right - self.end_padding;

        let count = layout.visible_count();
        for index in 0..count {
            let Some(child) = layout.child(index) else {
                continue;
            };

            let top = child.bounds.bottom() + child.margins.bottom;
            let bottom = top + painter.vertical_thickness(self.thickness);
            if (index < count - 1 || self.draw_last)
                && !self.skip_positions.contains(&child.layout_position)
            {
                emit(painter, surface, Rect::from_edges(left, top, right, bottom));
            }

            if index == 0 && self.draw_first {
                let bottom = child.bounds.top() - child.margins.top;
                let top = bottom - painter.vertical_thickness(self.thickness);
                emit(painter, surface, Rect::from_edges(left, top, right, bottom));
            }
        }
    }

    fn draw_horizontal(
        &self,
        surface: &mut dyn PaintSurface,
        layout: &dyn LayoutSource,
        painter: &Arc<dyn DividerPainter>,
    ) {
        let padding = layout.padding();
        let top = padding.top + self.start_padding;
        let bottom = layout.viewport().height - padding.bottom - self.end_padding;

        let count = layout.visible_count();
        for index in 0..count {
            let Some(child) = layout.child(index) else {
                continue;
            };

            let left = child.bounds.right() + child.margins.right;
            let right = left + painter.horizontal_thickness(self.thickness);
            if (index < count - 1 || self.draw_last)
                && !self.skip_positions.contains(&child.layout_position)
            {
                emit(painter, surface, Rect::from_edges(left, top, right, bottom));
            }

            if index == 0 && self.draw_first {
                let right = child.bounds.left() - child.margins.left;
                let left = right - painter.horizontal_thickness(self.thickness);
                emit(painter, surface, Rect::from_edges(left, top, right, bottom));
            }
        }
    }
}

/// Hand a rectangle to the painter, dropping degenerate rects.
fn emit(painter: &Arc<dyn DividerPainter>, surface: &mut dyn PaintSurface, rect: Rect) {
    if !rect.is_empty() {
        painter.draw_divider(surface, rect);
    }
}

impl ItemDecoration for LinearDivider {
    fn item_offsets(
        &self,
        layout: &dyn LayoutSource,
        style: &StyleContext,
        position: usize,
    ) -> EdgeInsets {
        let painter = self.painter.get(style);
        let last = layout.item_count().saturating_sub(1);
        let trailing_suppressed =
            (position == last && !self.draw_last) || self.skip_positions.contains(&position);

        let mut insets = EdgeInsets::ZERO;
        match self.orientation {
            Orientation::Vertical => {
                if position == 0 && self.draw_first {
                    insets.top = painter.vertical_thickness(self.thickness);
                }
                if !trailing_suppressed {
                    insets.bottom = painter.vertical_thickness(self.thickness);
                }
            }
            Orientation::Horizontal => {
                if position == 0 && self.draw_first {
                    insets.left = painter.horizontal_thickness(self.thickness);
                }
                if !trailing_suppressed {
                    insets.right = painter.horizontal_thickness(self.thickness);
                }
            }
        }
        insets
    }

    fn draw(
        &self,
        surface: &mut dyn PaintSurface,
        layout: &dyn LayoutSource,
        style: &StyleContext,
    ) {
        let painter = self.painter.get(style);
        match self.orientation {
            Orientation::Vertical => self.draw_vertical(surface, layout, painter),
            Orientation::Horizontal => self.draw_horizontal(surface, layout, painter),
        }
        tracing::trace!(
            children = layout.visible_count(),
            "Linear divider draw pass complete"
        );
    }
}

impl std::fmt::Debug for LinearDivider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearDivider")
            .field("orientation", &self.orientation)
            .field("thickness", &self.thickness)
            .field("draw_first", &self.draw_first)
            .field("draw_last", &self.draw_last)
            .field("skip_positions", &self.skip_positions)
            .field("painter", &self.painter)
            .finish()
    }
}

static_assertions::assert_impl_all!(LinearDivider: Send, Sync);

/// Builder for [`LinearDivider`].
///
/// Thickness and padding values are validated at [`build`](Self::build):
/// non-finite input is rejected, negative input clamps to zero. A painter
/// (or painter factory) must be configured.
#[derive(Clone, Default)]
pub struct LinearDividerBuilder {
    orientation: Orientation,
    thickness: f32,
    start_padding: f32,
    end_padding: f32,
    draw_first: bool,
    draw_last: bool,
    skip_positions: HashSet<usize>,
    painter: Option<PainterSource>,
}

impl LinearDividerBuilder {
    /// Create a builder with default settings: vertical orientation, zero
    /// thickness, no edge dividers, no painter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the divider thickness along the primary axis.
    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the cross-axis inset before each divider (left edge in a
    /// vertical list, top edge in a horizontal one).
    pub fn start_padding(mut self, padding: f32) -> Self {
        self.start_padding = padding;
        self
    }

    /// Set the cross-axis inset after each divider.
    pub fn end_padding(mut self, padding: f32) -> Self {
        self.end_padding = padding;
        self
    }

    /// Draw a divider before the first item.
    pub fn draw_first(mut self, draw: bool) -> Self {
        self.draw_first = draw;
        self
    }

    /// Draw a divider after the last item.
    pub fn draw_last(mut self, draw: bool) -> Self {
        self.draw_last = draw;
        self
    }

    /// Exclude a single position from divider drawing.
    ///
    /// The position reserves no trailing inset and emits no divider,
    /// overriding the edge-drawing flags.
    pub fn skip_position(mut self, position: usize) -> Self {
        self.skip_positions.insert(position);
        self
    }

    /// Exclude several positions from divider drawing.
    pub fn skip_positions(mut self, positions: impl IntoIterator<Item = usize>) -> Self {
        self.skip_positions.extend(positions);
        self
    }

    /// Use a flat-color painter.
    pub fn color(self, color: Color) -> Self {
        self.painter(Arc::new(ColorPainter::new(color)))
    }

    /// Use an image painter; the image's intrinsic size floors the
    /// divider thickness.
    pub fn image(self, image: ImageSource) -> Self {
        self.painter(Arc::new(ImagePainter::new(image)))
    }

    /// Use a custom painter.
    pub fn painter(mut self, painter: Arc<dyn DividerPainter>) -> Self {
        self.painter = Some(PainterSource::Ready(painter));
        self
    }

    /// Defer painter creation until the first measure or draw call.
    ///
    /// The factory runs once with the host's [`StyleContext`]; the result
    /// is cached for the decoration's lifetime.
    pub fn lazy_painter(
        mut self,
        factory: impl Fn(&StyleContext) -> Arc<dyn DividerPainter> + Send + Sync + 'static,
    ) -> Self {
        self.painter = Some(PainterSource::Deferred(Arc::new(factory)));
        self
    }

    /// Defer color selection until the first measure or draw call.
    pub fn lazy_color(
        self,
        color: impl Fn(&StyleContext) -> Color + Send + Sync + 'static,
    ) -> Self {
        self.lazy_painter(move |style| Arc::new(ColorPainter::new(color(style))))
    }

    /// Validate the configuration and build the decoration.
    pub fn build(self) -> Result<LinearDivider> {
        let painter = self.painter.ok_or(ConfigError::MissingPainter)?;
        Ok(LinearDivider {
            orientation: self.orientation,
            thickness: checked_dimension("thickness", self.thickness)?,
            start_padding: checked_dimension("start_padding", self.start_padding)?,
            end_padding: checked_dimension("end_padding", self.end_padding)?,
            draw_first: self.draw_first,
            draw_last: self.draw_last,
            skip_positions: self.skip_positions,
            painter: PainterSlot::from_source(painter),
        })
    }

    /// Build and install the decoration into a host widget.
    pub fn apply_to(self, host: &mut dyn DecorationHost) -> Result<Arc<LinearDivider>> {
        let divider = Arc::new(self.build()?);
        host.add_decoration(divider.clone());
        Ok(divider)
    }

    /// Build once and install the shared decoration into several hosts.
    pub fn apply_to_all(self, hosts: &mut [&mut dyn DecorationHost]) -> Result<Arc<LinearDivider>> {
        let divider = Arc::new(self.build()?);
        for host in hosts {
            host.add_decoration(divider.clone());
        }
        Ok(divider)
    }
}

impl std::fmt::Debug for LinearDividerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearDividerBuilder")
            .field("orientation", &self.orientation)
            .field("thickness", &self.thickness)
            .field("draw_first", &self.draw_first)
            .field("draw_last", &self.draw_last)
            .field("has_painter", &self.painter.is_some())
            .finish()
    }
}
