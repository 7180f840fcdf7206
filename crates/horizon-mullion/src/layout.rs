//! The read-only layout boundary between host widgets and decorations.
//!
//! Decorations never own or arrange items. At measure and draw time the
//! host widget exposes its current child geometry through [`LayoutSource`],
//! and the decoration turns that snapshot into insets and paint commands.
//!
//! The central subtlety is [`ChildInfo::layout_position`]: it is the
//! position of the child as known to the *layout pass*, which can lag the
//! adapter/model position for a frame after structural changes. Decorations
//! key all per-position logic (edge detection, skip lists, span lookups) on
//! the layout position so pending updates never mis-place a divider.

use std::ops::Add;
use std::sync::Arc;

use horizon_mullion_render::{Rect, Size};

/// Primary-axis orientation of the host list widget.
///
/// `Vertical` lists scroll along y and draw primary dividers as horizontal
/// bands; `Horizontal` lists are the transpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Items stack along the y axis.
    #[default]
    Vertical,
    /// Items stack along the x axis.
    Horizontal,
}

impl Orientation {
    /// Check if vertical.
    #[inline]
    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }
}

/// Space reserved on each side of a rectangle.
///
/// Used in three roles: per-item insets emitted by decorations, child
/// margins reported by the host, and the host widget's own content padding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    /// Left inset.
    pub left: f32,
    /// Top inset.
    pub top: f32,
    /// Right inset.
    pub right: f32,
    /// Bottom inset.
    pub bottom: f32,
}

impl EdgeInsets {
    /// Create new insets.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create uniform insets (same value on all sides).
    pub const fn uniform(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Zero insets.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Total horizontal inset (left + right).
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Size occupied by the insets.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.horizontal(), self.vertical())
    }
}

impl Add for EdgeInsets {
    type Output = EdgeInsets;

    fn add(self, other: EdgeInsets) -> EdgeInsets {
        EdgeInsets::new(
            self.left + other.left,
            self.top + other.top,
            self.right + other.right,
            self.bottom + other.bottom,
        )
    }
}

/// Geometry of one currently attached child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildInfo {
    /// Position of the child as assigned by the current layout pass.
    ///
    /// This can transiently differ from the adapter/model index while a
    /// structural update is pending; decorations must use this value, not
    /// a cached model index.
    pub layout_position: usize,

    /// Bounding box of the child in the widget's coordinate space,
    /// excluding margins.
    pub bounds: Rect,

    /// Margins around the child.
    pub margins: EdgeInsets,
}

impl ChildInfo {
    /// Create a child descriptor.
    pub fn new(layout_position: usize, bounds: Rect) -> Self {
        Self {
            layout_position,
            bounds,
            margins: EdgeInsets::ZERO,
        }
    }

    /// Set margins using builder pattern.
    pub fn with_margins(mut self, margins: EdgeInsets) -> Self {
        self.margins = margins;
        self
    }
}

/// Maps item positions to span assignments in a fixed grid.
///
/// A lookup reports how many spans each item occupies. The span *index* of
/// an item follows from the sizes by forward accumulation: rows never split
/// an item, so an item that does not fit in the remainder of a row wraps to
/// index 0. [`span_index`](Self::span_index) implements that rule;
/// overrides (for example, cached implementations) must agree with it
/// because the grid engine precomputes indices by the same rule.
pub trait SpanLookup: Send + Sync {
    /// Number of spans the item at `position` occupies.
    fn span_size(&self, position: usize) -> usize;

    /// Span index at which the item at `position` starts.
    fn span_index(&self, position: usize, span_count: usize) -> usize {
        let mut index = 0;
        for pos in 0..position {
            let size = self.span_size(pos);
            index += size;
            if index == span_count {
                index = 0;
            } else if index > span_count {
                // Item did not fit, wrapped to a fresh row.
                index = size;
            }
        }
        let size = self.span_size(position);
        if index + size <= span_count { index } else { 0 }
    }
}

/// A lookup where every item occupies exactly one span.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSpanLookup;

impl SpanLookup for UniformSpanLookup {
    fn span_size(&self, _position: usize) -> usize {
        1
    }

    fn span_index(&self, position: usize, span_count: usize) -> usize {
        position % span_count
    }
}

/// The packing discipline of a two-axis layout.
#[derive(Clone)]
pub enum GridKind {
    /// Fixed grid: span assignment is known upfront through a lookup.
    Fixed(Arc<dyn SpanLookup>),
    /// Staggered grid: spans are always size 1 but lane packing can be
    /// irregular, so classification is purely positional.
    Staggered,
}

impl std::fmt::Debug for GridKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridKind::Fixed(_) => f.write_str("Fixed(..)"),
            GridKind::Staggered => f.write_str("Staggered"),
        }
    }
}

/// Span structure of a grid layout.
#[derive(Debug, Clone)]
pub struct GridInfo {
    /// Number of spans across the cross axis.
    pub span_count: usize,
    /// Packing discipline.
    pub kind: GridKind,
}

impl GridInfo {
    /// A fixed grid with the given span lookup.
    pub fn fixed(span_count: usize, lookup: Arc<dyn SpanLookup>) -> Self {
        Self {
            span_count,
            kind: GridKind::Fixed(lookup),
        }
    }

    /// A fixed grid where every item spans one column.
    pub fn uniform(span_count: usize) -> Self {
        Self::fixed(span_count, Arc::new(UniformSpanLookup))
    }

    /// A staggered grid.
    pub fn staggered(span_count: usize) -> Self {
        Self {
            span_count,
            kind: GridKind::Staggered,
        }
    }
}

/// Read-only view of the host widget's current layout state.
///
/// Implemented by the host list widget (or a snapshot of it) and consumed
/// by decorations during measure and draw. All queries refer to the
/// current layout pass.
pub trait LayoutSource {
    /// Number of children currently attached (visible), not total items.
    fn visible_count(&self) -> usize;

    /// Descriptor for the `index`-th attached child, in layout order.
    fn child(&self, index: usize) -> Option<ChildInfo>;

    /// Total number of items in the current layout pass.
    fn item_count(&self) -> usize;

    /// Size of the widget's viewport.
    fn viewport(&self) -> Size;

    /// The widget's own content padding.
    fn padding(&self) -> EdgeInsets;

    /// Span structure, or `None` for single-axis and unrecognized layouts.
    fn grid_info(&self) -> Option<GridInfo> {
        None
    }
}

/// An owned layout snapshot assembled from plain child descriptors.
///
/// Hosts that cannot hand out a live [`LayoutSource`] view can build one of
/// these per pass; it is also the fixture type used throughout the test
/// suites.
#[derive(Debug, Clone, Default)]
pub struct LayoutSnapshot {
    children: Vec<ChildInfo>,
    item_count: usize,
    viewport: Size,
    padding: EdgeInsets,
    grid: Option<GridInfo>,
}

impl LayoutSnapshot {
    /// Create an empty snapshot with the given viewport size.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    /// Set the widget padding using builder pattern.
    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the total item count using builder pattern.
    ///
    /// Defaults to the number of pushed children when not set explicitly.
    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    /// Set the grid structure using builder pattern.
    pub fn with_grid(mut self, grid: GridInfo) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Append a child; its layout position is the insertion index.
    pub fn push_child(&mut self, bounds: Rect, margins: EdgeInsets) {
        let position = self.children.len();
        self.children
            .push(ChildInfo::new(position, bounds).with_margins(margins));
    }

    /// Append a child with an explicit layout position.
    ///
    /// Use this to model a viewport scrolled into the middle of the item
    /// range, or a pending structural update.
    pub fn push_child_at(&mut self, layout_position: usize, bounds: Rect, margins: EdgeInsets) {
        self.children
            .push(ChildInfo::new(layout_position, bounds).with_margins(margins));
    }
}

impl LayoutSource for LayoutSnapshot {
    fn visible_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<ChildInfo> {
        self.children.get(index).copied()
    }

    fn item_count(&self) -> usize {
        self.item_count.max(self.children.len())
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn padding(&self) -> EdgeInsets {
        self.padding
    }

    fn grid_info(&self) -> Option<GridInfo> {
        self.grid.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_insets_sums() {
        let insets = EdgeInsets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.horizontal(), 4.0);
        assert_eq!(insets.vertical(), 6.0);
        assert_eq!(insets.size(), Size::new(4.0, 6.0));
    }

    #[test]
    fn test_edge_insets_add() {
        let a = EdgeInsets::new(1.0, 2.0, 3.0, 4.0);
        let b = EdgeInsets::uniform(1.0);
        assert_eq!(a + b, EdgeInsets::new(2.0, 3.0, 4.0, 5.0));
    }

    #[test]
    fn test_uniform_span_lookup() {
        let lookup = UniformSpanLookup;
        assert_eq!(lookup.span_size(7), 1);
        assert_eq!(lookup.span_index(7, 3), 1);
        assert_eq!(lookup.span_index(6, 3), 0);
    }

    /// First item spans the full width, the rest are single-span.
    struct HeaderLookup {
        span_count: usize,
    }

    impl SpanLookup for HeaderLookup {
        fn span_size(&self, position: usize) -> usize {
            if position == 0 { self.span_count } else { 1 }
        }
    }

    #[test]
    fn test_span_index_accumulation_with_header() {
        let lookup = HeaderLookup { span_count: 3 };
        // Header occupies the whole first row.
        assert_eq!(lookup.span_index(0, 3), 0);
        // Items 1..=3 form the second row.
        assert_eq!(lookup.span_index(1, 3), 0);
        assert_eq!(lookup.span_index(2, 3), 1);
        assert_eq!(lookup.span_index(3, 3), 2);
        assert_eq!(lookup.span_index(4, 3), 0);
    }

    /// Sizes 2,2 over span count 3: the second item cannot fit after the
    /// first and wraps to a fresh row.
    struct WideLookup;

    impl SpanLookup for WideLookup {
        fn span_size(&self, _position: usize) -> usize {
            2
        }
    }

    #[test]
    fn test_span_index_wraps_oversized_remainder() {
        let lookup = WideLookup;
        assert_eq!(lookup.span_index(0, 3), 0);
        assert_eq!(lookup.span_index(1, 3), 0);
        assert_eq!(lookup.span_index(2, 3), 0);
    }

    #[test]
    fn test_snapshot_positions_and_counts() {
        let mut layout = LayoutSnapshot::new(Size::new(300.0, 500.0));
        layout.push_child(Rect::new(0.0, 0.0, 300.0, 80.0), EdgeInsets::ZERO);
        layout.push_child(Rect::new(0.0, 80.0, 300.0, 80.0), EdgeInsets::ZERO);

        assert_eq!(layout.visible_count(), 2);
        assert_eq!(layout.item_count(), 2);
        assert_eq!(layout.child(1).unwrap().layout_position, 1);
        assert!(layout.child(2).is_none());

        let layout = layout.with_item_count(10);
        assert_eq!(layout.item_count(), 10);
    }

    #[test]
    fn test_snapshot_scrolled_window() {
        let mut layout = LayoutSnapshot::new(Size::new(300.0, 500.0)).with_item_count(50);
        layout.push_child_at(20, Rect::new(0.0, 0.0, 300.0, 80.0), EdgeInsets::ZERO);
        assert_eq!(layout.child(0).unwrap().layout_position, 20);
        assert_eq!(layout.item_count(), 50);
    }
}
