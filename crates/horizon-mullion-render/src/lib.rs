//! Paint-surface abstraction and geometry types for Horizon Mullion.
//!
//! This crate is the painting-side foundation of the Mullion divider
//! decoration system. It defines the geometry and color vocabulary shared
//! with host widgets, the [`PaintSurface`] capability hosts implement to
//! receive divider draw commands, and [`ImageSource`], a decoded image
//! handle whose intrinsic dimensions drive painter thickness floors.
//!
//! # Example
//!
//! ```
//! use horizon_mullion_render::{Color, PaintSurface, Rect, RecordingSurface};
//!
//! let mut surface = RecordingSurface::new();
//! surface.fill_rect(Rect::new(0.0, 48.0, 320.0, 1.0), Color::from_rgb8(200, 200, 200));
//! assert_eq!(surface.commands().len(), 1);
//! ```

mod error;
mod image;
mod surface;
mod types;

pub use error::{RenderError, Result};
pub use image::{ImageScaleMode, ImageSource};
pub use surface::{PaintCommand, PaintSurface, RecordingSurface};
pub use types::{Color, Point, Rect, Size};
