//! Horizon Mullion - divider decorations for list and grid widgets.
//!
//! Mullion turns a list widget's current child geometry into divider paint
//! commands and per-item spacing insets. It owns no data and draws no
//! pixels itself: the host widget exposes its layout through
//! [`LayoutSource`], collects insets from [`ItemDecoration::item_offsets`]
//! while measuring, and hands a
//! [`PaintSurface`](horizon_mullion_render::PaintSurface) to
//! [`ItemDecoration::draw`] during its decoration-draw phase.
//!
//! # Example
//!
//! ```
//! use horizon_mullion::{DecorationSet, LinearDivider};
//! use horizon_mullion_render::Color;
//!
//! let mut decorations = DecorationSet::new();
//! LinearDivider::builder()
//!     .thickness(1.0)
//!     .color(Color::from_rgb8(220, 220, 220))
//!     .apply_to(&mut decorations)
//!     .unwrap();
//! ```

mod decoration;
mod error;
mod grid;
mod layout;
mod linear;
mod painter;
mod style;

pub use decoration::{DecorationHost, DecorationSet, ItemDecoration};
pub use error::{ConfigError, Result};
pub use grid::{GridDivider, GridDividerBuilder};
pub use layout::{
    ChildInfo, EdgeInsets, GridInfo, GridKind, LayoutSnapshot, LayoutSource, Orientation,
    SpanLookup, UniformSpanLookup,
};
pub use linear::{LinearDivider, LinearDividerBuilder};
pub use painter::{ColorPainter, DividerPainter, ImagePainter, PainterFactory};
pub use style::StyleContext;

/// Prelude module re-exporting the most commonly used types.
///
/// ```
/// use horizon_mullion::prelude::*;
/// ```
pub mod prelude {
    pub use crate::decoration::{DecorationHost, DecorationSet, ItemDecoration};
    pub use crate::grid::GridDivider;
    pub use crate::layout::{EdgeInsets, GridInfo, LayoutSource, Orientation};
    pub use crate::linear::LinearDivider;
    pub use crate::painter::{ColorPainter, DividerPainter, ImagePainter};
    pub use crate::style::StyleContext;
    pub use horizon_mullion_render::{Color, PaintSurface, Rect};
}
