//! Divider decoration for grid and staggered-grid layouts.
//!
//! [`GridDivider`] separates items along both axes: primary dividers
//! between rows (columns in a horizontal grid) and side dividers between
//! columns, with independent edge flags for the outer boundary. The inset
//! computation distributes the shared side-divider width fairly across a
//! row so the gap between any two neighboring cells is always exactly the
//! configured side thickness, regardless of span sizes.
//!
//! # Example
//!
//! ```
//! use horizon_mullion::{GridDivider, GridInfo, LayoutSnapshot};
//! use horizon_mullion_render::{Color, Size};
//!
//! let divider = GridDivider::builder()
//!     .thickness(2.0)
//!     .side_thickness(2.0)
//!     .color(Color::from_rgb8(220, 220, 220))
//!     .build()
//!     .unwrap();
//!
//! let layout = LayoutSnapshot::new(Size::new(300.0, 500.0))
//!     .with_grid(GridInfo::uniform(3));
//! # let _ = (divider, layout);
//! ```

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use horizon_mullion_render::{Color, ImageSource, PaintSurface, Rect};

use crate::decoration::{DecorationHost, ItemDecoration};
use crate::error::{ConfigError, Result, checked_dimension};
use crate::layout::{ChildInfo, EdgeInsets, GridInfo, GridKind, LayoutSource, Orientation, SpanLookup};
use crate::painter::{ColorPainter, DividerPainter, ImagePainter, PainterSlot, PainterSource};
use crate::style::StyleContext;

/// Precomputed span assignment for one layout pass of a fixed grid.
///
/// Span indices follow from the lookup's span sizes by forward
/// accumulation. The table also records where the second row starts and
/// where the last row starts, found by forward and backward scans over the
/// accumulated indices; the backward scan is what keeps a short final row
/// classified as a true edge.
#[derive(Debug)]
struct SpanTable {
    item_count: usize,
    span_count: usize,
    /// Span index per position.
    indices: Vec<usize>,
    /// Span size per position.
    sizes: Vec<usize>,
    /// First position of the second row.
    first_row_end: usize,
    /// First position of the last row.
    last_row_start: usize,
}

impl SpanTable {
    fn build(lookup: &dyn SpanLookup, item_count: usize, span_count: usize) -> Self {
        let mut indices = Vec::with_capacity(item_count);
        let mut sizes = Vec::with_capacity(item_count);
        let mut acc = 0;
        for pos in 0..item_count {
            let size = lookup.span_size(pos);
            indices.push(if acc + size <= span_count { acc } else { 0 });
            sizes.push(size);
            acc += size;
            if acc == span_count {
                acc = 0;
            } else if acc > span_count {
                acc = size;
            }
        }

        let first_row_end = (1..item_count)
            .find(|&i| indices[i] == 0)
            .unwrap_or(span_count);
        let last_row_start = (0..item_count)
            .rev()
            .find(|&i| indices[i] == 0)
            .unwrap_or(0);

        Self {
            item_count,
            span_count,
            indices,
            sizes,
            first_row_end,
            last_row_start,
        }
    }

    fn span_index(&self, position: usize) -> usize {
        self.indices
            .get(position)
            .copied()
            .unwrap_or(position % self.span_count)
    }

    fn span_size(&self, position: usize) -> usize {
        self.sizes.get(position).copied().unwrap_or(1)
    }

    /// Whether the item after `position` starts a new row.
    ///
    /// The final item counts only when it spans the full width, matching
    /// the behavior list hosts have historically relied on.
    fn next_wraps(&self, position: usize) -> bool {
        if position + 1 >= self.item_count {
            self.span_size(position) == self.span_count
        } else {
            self.span_index(position + 1) == 0
        }
    }
}

/// Cached span table together with the lookup that produced it.
///
/// Holding the lookup keeps its address stable, so pointer identity plus
/// the `(item_count, span_count)` key is enough to detect staleness.
struct SpanCache {
    lookup: Arc<dyn SpanLookup>,
    table: Arc<SpanTable>,
}

/// Resolved span structure for one query.
enum SpanModel {
    Fixed(Arc<SpanTable>),
    Staggered { span_count: usize },
}

impl SpanModel {
    fn span_count(&self) -> usize {
        match self {
            SpanModel::Fixed(table) => table.span_count,
            SpanModel::Staggered { span_count } => *span_count,
        }
    }

    fn span_index(&self, position: usize) -> usize {
        match self {
            SpanModel::Fixed(table) => table.span_index(position),
            SpanModel::Staggered { span_count } => position % span_count,
        }
    }

    fn span_size(&self, position: usize) -> usize {
        match self {
            SpanModel::Fixed(table) => table.span_size(position).max(1),
            SpanModel::Staggered { .. } => 1,
        }
    }

    /// First position of the trailing row group in a staggered grid.
    fn staggered_tail(item_count: usize, span_count: usize) -> usize {
        let remainder = item_count % span_count;
        if remainder == 0 {
            item_count.saturating_sub(span_count)
        } else {
            item_count - remainder
        }
    }

    fn is_first_row(&self, position: usize, orientation: Orientation) -> bool {
        match self {
            SpanModel::Fixed(table) => match orientation {
                Orientation::Vertical => position < table.first_row_end,
                Orientation::Horizontal => table.span_index(position) == 0,
            },
            SpanModel::Staggered { span_count } => match orientation {
                Orientation::Vertical => position < *span_count,
                Orientation::Horizontal => position % span_count == 0,
            },
        }
    }

    fn is_first_column(&self, position: usize, orientation: Orientation) -> bool {
        match self {
            SpanModel::Fixed(table) => match orientation {
                Orientation::Vertical => table.span_index(position) == 0,
                Orientation::Horizontal => position < table.first_row_end,
            },
            SpanModel::Staggered { span_count } => match orientation {
                Orientation::Vertical => position % span_count == 0,
                Orientation::Horizontal => position < *span_count,
            },
        }
    }

    fn is_last_row(&self, position: usize, item_count: usize, orientation: Orientation) -> bool {
        match self {
            SpanModel::Fixed(table) => match orientation {
                Orientation::Vertical => position >= table.last_row_start,
                Orientation::Horizontal => table.next_wraps(position),
            },
            SpanModel::Staggered { span_count } => match orientation {
                Orientation::Vertical => {
                    position >= Self::staggered_tail(item_count, *span_count)
                }
                Orientation::Horizontal => (position + 1) % span_count == 0,
            },
        }
    }

    fn is_last_column(&self, position: usize, item_count: usize, orientation: Orientation) -> bool {
        match self {
            SpanModel::Fixed(table) => match orientation {
                Orientation::Vertical => table.next_wraps(position),
                Orientation::Horizontal => position >= table.last_row_start,
            },
            SpanModel::Staggered { span_count } => match orientation {
                Orientation::Vertical => (position + 1) % span_count == 0,
                Orientation::Horizontal => {
                    position >= Self::staggered_tail(item_count, *span_count)
                }
            },
        }
    }
}

/// Divider decoration for grid and staggered-grid layouts.
///
/// Immutable once built; construct through [`GridDivider::builder`]. One
/// instance can be shared across any number of widgets.
pub struct GridDivider {
    orientation: Orientation,
    thickness: f32,
    side_thickness: f32,
    draw_top_edge: bool,
    draw_bottom_edge: bool,
    draw_side_edges: bool,
    skip_positions: HashSet<usize>,
    painter: PainterSlot,
    /// `None` falls back to the primary painter (and its resolve cache).
    side_painter: Option<PainterSlot>,
    /// Span table memo for the current layout pass.
    span_cache: Mutex<Option<SpanCache>>,
    /// Set once the missing-grid fallback has been reported.
    warned_missing_grid: AtomicBool,
}

impl GridDivider {
    /// Start building a grid divider decoration.
    pub fn builder() -> GridDividerBuilder {
        GridDividerBuilder::new()
    }

    /// Get the orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get the primary divider thickness.
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Get the side divider thickness.
    pub fn side_thickness(&self) -> f32 {
        self.side_thickness
    }

    fn side_slot(&self) -> &PainterSlot {
        self.side_painter.as_ref().unwrap_or(&self.painter)
    }

    /// Resolve the span structure for this query, memoizing fixed-grid
    /// span tables per `(lookup, item_count, span_count)`.
    fn span_model(&self, layout: &dyn LayoutSource) -> SpanModel {
        match layout.grid_info() {
            Some(GridInfo {
                span_count,
                kind: GridKind::Fixed(lookup),
            }) => {
                let span_count = span_count.max(1);
                let item_count = layout.item_count();
                let mut cache = self.span_cache.lock();
                if let Some(entry) = cache.as_ref() {
                    if Arc::ptr_eq(&entry.lookup, &lookup)
                        && entry.table.item_count == item_count
                        && entry.table.span_count == span_count
                    {
                        return SpanModel::Fixed(entry.table.clone());
                    }
                }
                tracing::debug!(item_count, span_count, "Rebuilding grid span table");
                let table = Arc::new(SpanTable::build(&*lookup, item_count, span_count));
                *cache = Some(SpanCache {
                    lookup,
                    table: table.clone(),
                });
                SpanModel::Fixed(table)
            }
            Some(GridInfo {
                span_count,
                kind: GridKind::Staggered,
            }) => SpanModel::Staggered {
                span_count: span_count.max(1),
            },
            None => {
                if !self.warned_missing_grid.swap(true, Ordering::Relaxed) {
                    tracing::warn!(
                        "Grid divider attached to a layout without span info; \
                         treating it as a single-span list"
                    );
                }
                SpanModel::Staggered { span_count: 1 }
            }
        }
    }

    /// Fair cross-axis insets for an item covering `span_index..=span_end`.
    ///
    /// Every item in a row reserves the same total; leading and trailing
    /// shares are skewed so the gap between neighboring cells always sums
    /// to exactly one side thickness, and outer edges (when enabled) get a
    /// full side thickness.
    fn cross_insets(&self, model: &SpanModel, position: usize) -> (f32, f32) {
        let span_count = model.span_count();
        let mut divider_count = span_count - 1;
        if self.draw_side_edges {
            divider_count += 2;
        }
        let each = divider_count as f32 * self.side_thickness / span_count as f32;
        let dc = each - self.side_thickness;
        let edge = if self.draw_side_edges {
            self.side_thickness
        } else {
            0.0
        };

        let span_index = model.span_index(position);
        let span_end = span_index + model.span_size(position) - 1;
        let leading = edge - dc * span_index as f32;
        let trailing = each - edge + dc * span_end as f32;
        (leading, trailing)
    }

    fn draw_vertical(
        &self,
        surface: &mut dyn PaintSurface,
        model: &SpanModel,
        item_count: usize,
        child: &ChildInfo,
        painter: &Arc<dyn DividerPainter>,
        side_painter: &Arc<dyn DividerPainter>,
    ) {
        let position = child.layout_position;
        let bounds = child.bounds;
        let margins = child.margins;

        // Horizontal separators along the row boundaries.
        let top = bounds.bottom() + margins.bottom;
        let bottom = top + self.thickness;
        if (!model.is_last_row(position, item_count, self.orientation) || self.draw_bottom_edge)
            && !self.skip_positions.contains(&position)
        {
            emit(
                painter,
                surface,
                Rect::from_edges(bounds.left(), top, bounds.right(), bottom),
            );
        }
        if self.draw_top_edge && model.is_first_row(position, self.orientation) {
            let bottom = bounds.top() - margins.top;
            let top = bottom - self.thickness;
            emit(
                painter,
                surface,
                Rect::from_edges(bounds.left(), top, bounds.right(), bottom),
            );
        }

        // Vertical separators between columns.
        let left = bounds.right() + margins.right;
        let right = left + self.side_thickness;
        if !model.is_last_column(position, item_count, self.orientation) || self.draw_side_edges {
            emit(
                side_painter,
                surface,
                Rect::from_edges(left, bounds.top(), right, bounds.bottom()),
            );
        }
        if model.is_first_column(position, self.orientation) && self.draw_side_edges {
            let right = bounds.left() - margins.left;
            let left = right - self.side_thickness;
            emit(
                side_painter,
                surface,
                Rect::from_edges(left, bounds.top(), right, bounds.bottom()),
            );
        }
    }

    fn draw_horizontal(
        &self,
        surface: &mut dyn PaintSurface,
        model: &SpanModel,
        item_count: usize,
        child: &ChildInfo,
        painter: &Arc<dyn DividerPainter>,
        side_painter: &Arc<dyn DividerPainter>,
    ) {
        let position = child.layout_position;
        let bounds = child.bounds;
        let margins = child.margins;

        // Vertical separators along the column boundaries.
        let left = bounds.right() + margins.right;
        let right = left + self.thickness;
        if (!model.is_last_column(position, item_count, self.orientation) || self.draw_bottom_edge)
            && !self.skip_positions.contains(&position)
        {
            emit(
                painter,
                surface,
                Rect::from_edges(left, bounds.top(), right, bounds.bottom()),
            );
        }
        if self.draw_top_edge && model.is_first_column(position, self.orientation) {
            let right = bounds.left() - margins.left;
            let left = right - self.thickness;
            emit(
                painter,
                surface,
                Rect::from_edges(left, bounds.top(), right, bounds.bottom()),
            );
        }

        // Horizontal separators between rows.
        let top = bounds.bottom() + margins.bottom;
        let bottom = top + self.side_thickness;
        if !model.is_last_row(position, item_count, self.orientation) || self.draw_side_edges {
            emit(
                side_painter,
                surface,
                Rect::from_edges(bounds.left(), top, bounds.right(), bottom),
            );
        }
        if model.is_first_row(position, self.orientation) && self.draw_side_edges {
            let bottom = bounds.top() - margins.top;
            let top = bottom - self.side_thickness;
            emit(
                side_painter,
                surface,
                Rect::from_edges(bounds.left(), top, bounds.right(), bottom),
            );
        }
    }
}

/// Hand a rectangle to the painter, dropping degenerate rects.
fn emit(painter: &Arc<dyn DividerPainter>, surface: &mut dyn PaintSurface, rect: Rect) {
    if !rect.is_empty() {
        painter.draw_divider(surface, rect);
    }
}

impl ItemDecoration for GridDivider {
    fn item_offsets(
        &self,
        layout: &dyn LayoutSource,
        _style: &StyleContext,
        position: usize,
    ) -> EdgeInsets {
        let model = self.span_model(layout);
        let item_count = layout.item_count();
        let (leading, trailing) = self.cross_insets(&model, position);

        let skipped = self.skip_positions.contains(&position);
        match self.orientation {
            Orientation::Vertical => {
                let mut top = 0.0;
                if model.is_first_row(position, self.orientation) && self.draw_top_edge {
                    top = self.thickness;
                }
                let mut bottom = self.thickness;
                if (model.is_last_row(position, item_count, self.orientation)
                    && !self.draw_bottom_edge)
                    || skipped
                {
                    bottom = 0.0;
                }
                EdgeInsets::new(leading, top, trailing, bottom)
            }
            Orientation::Horizontal => {
                let mut left = 0.0;
                if model.is_first_column(position, self.orientation) && self.draw_top_edge {
                    left = self.thickness;
                }
                let mut right = self.thickness;
                if (model.is_last_column(position, item_count, self.orientation)
                    && !self.draw_bottom_edge)
                    || skipped
                {
                    right = 0.0;
                }
                EdgeInsets::new(left, leading, right, trailing)
            }
        }
    }

    fn draw(
        &self,
        surface: &mut dyn PaintSurface,
        layout: &dyn LayoutSource,
        style: &StyleContext,
    ) {
        let painter = self.painter.get(style).clone();
        let side_painter = self.side_slot().get(style).clone();
        let model = self.span_model(layout);
        let item_count = layout.item_count();

        for index in 0..layout.visible_count() {
            let Some(child) = layout.child(index) else {
                continue;
            };
            match self.orientation {
                Orientation::Vertical => self.draw_vertical(
                    surface,
                    &model,
                    item_count,
                    &child,
                    &painter,
                    &side_painter,
                ),
                Orientation::Horizontal => self.draw_horizontal(
                    surface,
                    &model,
                    item_count,
                    &child,
                    &painter,
                    &side_painter,
                ),
            }
        }
        tracing::trace!(
            children = layout.visible_count(),
            "Grid divider draw pass complete"
        );
    }
}

impl std::fmt::Debug for GridDivider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridDivider")
            .field("orientation", &self.orientation)
            .field("thickness", &self.thickness)
            .field("side_thickness", &self.side_thickness)
            .field("draw_top_edge", &self.draw_top_edge)
            .field("draw_bottom_edge", &self.draw_bottom_edge)
            .field("draw_side_edges", &self.draw_side_edges)
            .field("skip_positions", &self.skip_positions)
            .finish()
    }
}

static_assertions::assert_impl_all!(GridDivider: Send, Sync);

/// Builder for [`GridDivider`].
///
/// The primary painter is required. Side dividers use the primary painter
/// unless a side painter is configured afterwards; configuring a primary
/// painter resets any earlier side painter, mirroring the precedence hosts
/// expect from the classic item-decoration API.
#[derive(Clone, Default)]
pub struct GridDividerBuilder {
    orientation: Orientation,
    thickness: f32,
    side_thickness: f32,
    draw_top_edge: bool,
    draw_bottom_edge: bool,
    draw_side_edges: bool,
    skip_positions: HashSet<usize>,
    painter: Option<PainterSource>,
    side_painter: Option<PainterSource>,
}

impl GridDividerBuilder {
    /// Create a builder with default settings: vertical orientation, zero
    /// thicknesses, no edge dividers, no painter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the primary divider thickness (between rows in a vertical
    /// grid, between columns in a horizontal one).
    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the side divider thickness (between columns in a vertical
    /// grid, between rows in a horizontal one).
    pub fn side_thickness(mut self, thickness: f32) -> Self {
        self.side_thickness = thickness;
        self
    }

    /// Draw a divider along the leading primary-axis edge (top edge of a
    /// vertical grid, left edge of a horizontal one).
    pub fn draw_top_edge(mut self, draw: bool) -> Self {
        self.draw_top_edge = draw;
        self
    }

    /// Draw a divider along the trailing primary-axis edge.
    pub fn draw_bottom_edge(mut self, draw: bool) -> Self {
        self.draw_bottom_edge = draw;
        self
    }

    /// Draw dividers along both cross-axis edges.
    pub fn draw_side_edges(mut self, draw: bool) -> Self {
        self.draw_side_edges = draw;
        self
    }

    /// Exclude a position's trailing primary divider from drawing.
    pub fn skip_position(mut self, position: usize) -> Self {
        self.skip_positions.insert(position);
        self
    }

    /// Exclude several positions from divider drawing.
    pub fn skip_positions(mut self, positions: impl IntoIterator<Item = usize>) -> Self {
        self.skip_positions.extend(positions);
        self
    }

    /// Use a flat-color painter for both primary and side dividers.
    pub fn color(self, color: Color) -> Self {
        self.painter(Arc::new(ColorPainter::new(color)))
    }

    /// Use a flat-color painter for side dividers only.
    pub fn side_color(self, color: Color) -> Self {
        self.side_painter(Arc::new(ColorPainter::new(color)))
    }

    /// Use an image painter for both primary and side dividers.
    pub fn image(self, image: ImageSource) -> Self {
        self.painter(Arc::new(ImagePainter::new(image)))
    }

    /// Use an image painter for side dividers only.
    pub fn side_image(self, image: ImageSource) -> Self {
        self.side_painter(Arc::new(ImagePainter::new(image)))
    }

    /// Use a custom painter for both primary and side dividers.
    pub fn painter(mut self, painter: Arc<dyn DividerPainter>) -> Self {
        self.painter = Some(PainterSource::Ready(painter));
        self.side_painter = None;
        self
    }

    /// Use a custom painter for side dividers only.
    pub fn side_painter(mut self, painter: Arc<dyn DividerPainter>) -> Self {
        self.side_painter = Some(PainterSource::Ready(painter));
        self
    }

    /// Defer primary (and side, unless overridden) painter creation until
    /// first use.
    pub fn lazy_painter(
        mut self,
        factory: impl Fn(&StyleContext) -> Arc<dyn DividerPainter> + Send + Sync + 'static,
    ) -> Self {
        self.painter = Some(PainterSource::Deferred(Arc::new(factory)));
        self.side_painter = None;
        self
    }

    /// Defer side painter creation until first use.
    pub fn lazy_side_painter(
        mut self,
        factory: impl Fn(&StyleContext) -> Arc<dyn DividerPainter> + Send + Sync + 'static,
    ) -> Self {
        self.side_painter = Some(PainterSource::Deferred(Arc::new(factory)));
        self
    }

    /// Validate the configuration and build the decoration.
    pub fn build(self) -> Result<GridDivider> {
        let painter = self.painter.ok_or(ConfigError::MissingPainter)?;
        Ok(GridDivider {
            orientation: self.orientation,
            thickness: checked_dimension("thickness", self.thickness)?,
            side_thickness: checked_dimension("side_thickness", self.side_thickness)?,
            draw_top_edge: self.draw_top_edge,
            draw_bottom_edge: self.draw_bottom_edge,
            draw_side_edges: self.draw_side_edges,
            skip_positions: self.skip_positions,
            painter: PainterSlot::from_source(painter),
            side_painter: self.side_painter.map(PainterSlot::from_source),
            span_cache: Mutex::new(None),
            warned_missing_grid: AtomicBool::new(false),
        })
    }

    /// Build and install the decoration into a host widget.
    pub fn apply_to(self, host: &mut dyn DecorationHost) -> Result<Arc<GridDivider>> {
        let divider = Arc::new(self.build()?);
        host.add_decoration(divider.clone());
        Ok(divider)
    }

    /// Build once and install the shared decoration into several hosts.
    pub fn apply_to_all(self, hosts: &mut [&mut dyn DecorationHost]) -> Result<Arc<GridDivider>> {
        let divider = Arc::new(self.build()?);
        for host in hosts {
            host.add_decoration(divider.clone());
        }
        Ok(divider)
    }
}

impl std::fmt::Debug for GridDividerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridDividerBuilder")
            .field("orientation", &self.orientation)
            .field("thickness", &self.thickness)
            .field("side_thickness", &self.side_thickness)
            .field("has_painter", &self.painter.is_some())
            .field("has_side_painter", &self.side_painter.is_some())
            .finish()
    }
}
