//! The decoration capability consumed by host widgets.
//!
//! A host list widget holds a collection of [`ItemDecoration`]
//! implementations and invokes them during its measure and draw passes:
//! [`ItemDecoration::item_offsets`] while sizing each item, and
//! [`ItemDecoration::draw`] during the decoration-draw phase. Decorations
//! are immutable and shareable; one instance may be installed into any
//! number of widgets.

use std::sync::Arc;

use horizon_mullion_render::PaintSurface;

use crate::layout::{EdgeInsets, LayoutSource};
use crate::style::StyleContext;

/// A visual decoration attached to a list widget.
///
/// Both operations are pure with respect to the layout snapshot: they may
/// be called any number of times per pass and never fail. All fallible
/// validation happens when the decoration is built.
pub trait ItemDecoration: Send + Sync {
    /// Space to reserve around the item at `position`.
    ///
    /// `position` is the item's *layout* position (see
    /// [`ChildInfo::layout_position`](crate::layout::ChildInfo::layout_position)).
    fn item_offsets(
        &self,
        layout: &dyn LayoutSource,
        style: &StyleContext,
        position: usize,
    ) -> EdgeInsets;

    /// Emit paint commands for every visible divider.
    fn draw(&self, surface: &mut dyn PaintSurface, layout: &dyn LayoutSource, style: &StyleContext);
}

/// A widget that can receive decorations.
///
/// Builders use this to attach a freshly built decoration to one or many
/// widgets in a single call.
pub trait DecorationHost {
    /// Install a decoration; it is invoked after previously added ones.
    fn add_decoration(&mut self, decoration: Arc<dyn ItemDecoration>);
}

/// An ordered collection of decorations, invoked as one.
///
/// This is the storage a host widget embeds: offsets accumulate
/// component-wise across members and drawing follows insertion order. The
/// set itself implements [`ItemDecoration`], so sets can forward to other
/// sets if a host composes views.
#[derive(Default)]
pub struct DecorationSet {
    decorations: Vec<Arc<dyn ItemDecoration>>,
}

impl DecorationSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of installed decorations.
    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    /// Remove all decorations.
    pub fn clear(&mut self) {
        self.decorations.clear();
    }

    /// Iterate over the installed decorations in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ItemDecoration>> {
        self.decorations.iter()
    }
}

impl std::fmt::Debug for DecorationSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecorationSet")
            .field("len", &self.decorations.len())
            .finish()
    }
}

impl DecorationHost for DecorationSet {
    fn add_decoration(&mut self, decoration: Arc<dyn ItemDecoration>) {
        self.decorations.push(decoration);
    }
}

impl ItemDecoration for DecorationSet {
    fn item_offsets(
        &self,
        layout: &dyn LayoutSource,
        style: &StyleContext,
        position: usize,
    ) -> EdgeInsets {
        self.decorations
            .iter()
            .fold(EdgeInsets::ZERO, |insets, decoration| {
                insets + decoration.item_offsets(layout, style, position)
            })
    }

    fn draw(
        &self,
        surface: &mut dyn PaintSurface,
        layout: &dyn LayoutSource,
        style: &StyleContext,
    ) {
        for decoration in &self.decorations {
            decoration.draw(surface, layout, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_mullion_render::{Color, Rect, RecordingSurface, Size};

    use crate::layout::LayoutSnapshot;

    /// Reserves a fixed inset and fills a marker rect.
    struct FixedInset(EdgeInsets, Color);

    impl ItemDecoration for FixedInset {
        fn item_offsets(
            &self,
            _layout: &dyn LayoutSource,
            _style: &StyleContext,
            _position: usize,
        ) -> EdgeInsets {
            self.0
        }

        fn draw(
            &self,
            surface: &mut dyn PaintSurface,
            _layout: &dyn LayoutSource,
            _style: &StyleContext,
        ) {
            surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), self.1);
        }
    }

    #[test]
    fn test_set_sums_offsets() {
        let mut set = DecorationSet::new();
        set.add_decoration(Arc::new(FixedInset(
            EdgeInsets::new(1.0, 2.0, 3.0, 4.0),
            Color::RED,
        )));
        set.add_decoration(Arc::new(FixedInset(EdgeInsets::uniform(1.0), Color::BLUE)));

        let layout = LayoutSnapshot::new(Size::new(100.0, 100.0));
        let style = StyleContext::default();
        let insets = set.item_offsets(&layout, &style, 0);
        assert_eq!(insets, EdgeInsets::new(2.0, 3.0, 4.0, 5.0));
    }

    #[test]
    fn test_set_draws_in_insertion_order() {
        let mut set = DecorationSet::new();
        set.add_decoration(Arc::new(FixedInset(EdgeInsets::ZERO, Color::RED)));
        set.add_decoration(Arc::new(FixedInset(EdgeInsets::ZERO, Color::BLUE)));

        let layout = LayoutSnapshot::new(Size::new(100.0, 100.0));
        let style = StyleContext::default();
        let mut surface = RecordingSurface::new();
        set.draw(&mut surface, &layout, &style);

        let colors: Vec<_> = surface
            .commands()
            .iter()
            .map(|cmd| match cmd {
                horizon_mullion_render::PaintCommand::FillRect { color, .. } => *color,
                other => panic!("unexpected command: {other:?}"),
            })
            .collect();
        assert_eq!(colors, vec![Color::RED, Color::BLUE]);
    }

    #[test]
    fn test_empty_set_is_neutral() {
        let set = DecorationSet::new();
        let layout = LayoutSnapshot::new(Size::new(100.0, 100.0));
        let style = StyleContext::default();
        assert!(set.is_empty());
        assert_eq!(set.item_offsets(&layout, &style, 3), EdgeInsets::ZERO);
    }
}
