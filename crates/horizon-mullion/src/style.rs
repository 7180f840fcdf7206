//! Style resolution context for deferred painters.

use horizon_mullion_render::Color;

/// Host-provided context for resolving theme-dependent painters.
///
/// Painter factories registered with
/// [`lazy_painter`](crate::LinearDividerBuilder::lazy_painter) receive a
/// `StyleContext` so dividers can pick up theme colors and display scale at
/// resolve time instead of capturing them at configuration time. The host
/// passes the current context into every measure and draw call; the first
/// call resolves deferred painters, after which the resolved painter is
/// cached for the decoration's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleContext {
    /// Physical pixels per logical unit for the target window.
    pub scale_factor: f32,

    /// Theme color for primary (along-axis) dividers.
    pub divider_color: Color,

    /// Theme color for side/edge dividers.
    pub edge_color: Color,
}

impl Default for StyleContext {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            divider_color: Color::from_rgb8(192, 192, 192),
            edge_color: Color::from_rgb8(192, 192, 192),
        }
    }
}

impl StyleContext {
    /// Create a context with the default theme colors at the given scale.
    pub fn with_scale_factor(scale_factor: f32) -> Self {
        Self {
            scale_factor,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = StyleContext::default();
        assert_eq!(ctx.scale_factor, 1.0);
        assert_eq!(ctx.divider_color, Color::from_rgb8(192, 192, 192));
    }
}
