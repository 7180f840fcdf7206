//! End-to-end tests for grid divider decorations.

use std::sync::Arc;

use horizon_mullion::{
    EdgeInsets, GridDivider, GridInfo, ItemDecoration, LayoutSnapshot, Orientation, SpanLookup,
    StyleContext,
};
use horizon_mullion_render::{Color, Rect, RecordingSurface, Size};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

const CELL: f32 = 90.0;

/// A vertical grid snapshot with `count` cells packed across `span_count`
/// columns, one span each.
fn uniform_grid(count: usize, span_count: usize) -> LayoutSnapshot {
    let mut layout = LayoutSnapshot::new(Size::new(span_count as f32 * CELL, 540.0))
        .with_grid(GridInfo::uniform(span_count));
    for i in 0..count {
        let col = (i % span_count) as f32;
        let row = (i / span_count) as f32;
        layout.push_child(
            Rect::new(col * CELL, row * CELL, CELL, CELL),
            EdgeInsets::ZERO,
        );
    }
    layout
}

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-4, "expected {b}, got {a}");
}

#[test]
fn test_fair_shares_across_span_counts() {
    init_tracing();
    let style = StyleContext::default();
    for span_count in 2..=5 {
        let divider = GridDivider::builder()
            .thickness(2.0)
            .side_thickness(7.0)
            .color(Color::GRAY)
            .build()
            .unwrap();
        let layout = uniform_grid(span_count * 3, span_count);

        // Every item in a row reserves the same left+right total.
        let row_base = span_count; // second row
        let reference = divider
            .item_offsets(&layout, &style, row_base)
            .horizontal();
        for offset in 1..span_count {
            let insets = divider.item_offsets(&layout, &style, row_base + offset);
            assert_close(insets.horizontal(), reference);
        }

        // Neighboring cells always share exactly one side thickness.
        for offset in 0..span_count - 1 {
            let a = divider.item_offsets(&layout, &style, row_base + offset);
            let b = divider.item_offsets(&layout, &style, row_base + offset + 1);
            assert_close(a.right + b.left, 7.0);
        }
    }
}

#[test]
fn test_header_row_keeps_neighbor_gaps() {
    init_tracing();
    /// A full-width header above single-span cells.
    struct HeaderLookup;
    impl SpanLookup for HeaderLookup {
        fn span_size(&self, position: usize) -> usize {
            if position == 0 { 3 } else { 1 }
        }
    }

    let divider = GridDivider::builder()
        .thickness(2.0)
        .side_thickness(6.0)
        .draw_side_edges(true)
        .color(Color::GRAY)
        .build()
        .unwrap();

    let mut layout = LayoutSnapshot::new(Size::new(270.0, 540.0))
        .with_grid(GridInfo::fixed(3, Arc::new(HeaderLookup)));
    layout.push_child(Rect::new(0.0, 0.0, 270.0, CELL), EdgeInsets::ZERO);
    for i in 0..3 {
        layout.push_child(
            Rect::new(i as f32 * CELL, CELL, CELL, CELL),
            EdgeInsets::ZERO,
        );
    }
    let style = StyleContext::default();

    // The header spans every column, so it reserves a full side thickness
    // on both of its outer edges.
    let header = divider.item_offsets(&layout, &style, 0);
    assert_close(header.left, 6.0);
    assert_close(header.right, 6.0);

    // The single-span row below keeps constant neighbor gaps and edges.
    let a = divider.item_offsets(&layout, &style, 1);
    let b = divider.item_offsets(&layout, &style, 2);
    let c = divider.item_offsets(&layout, &style, 3);
    assert_close(a.left, 6.0);
    assert_close(a.right + b.left, 6.0);
    assert_close(b.right + c.left, 6.0);
    assert_close(c.right, 6.0);
}

#[test]
fn test_trailing_full_span_footer_offsets() {
    init_tracing();
    /// Three cells and a full-width footer.
    struct FooterLookup;
    impl SpanLookup for FooterLookup {
        fn span_size(&self, position: usize) -> usize {
            if position == 3 { 3 } else { 1 }
        }
    }

    let divider = GridDivider::builder()
        .thickness(5.0)
        .side_thickness(3.0)
        .color(Color::GRAY)
        .build()
        .unwrap();

    let mut layout = LayoutSnapshot::new(Size::new(270.0, 540.0))
        .with_grid(GridInfo::fixed(3, Arc::new(FooterLookup)));
    for i in 0..3 {
        layout.push_child(
            Rect::new(i as f32 * CELL, 0.0, CELL, CELL),
            EdgeInsets::ZERO,
        );
    }
    layout.push_child(Rect::new(0.0, CELL, 270.0, CELL), EdgeInsets::ZERO);
    let style = StyleContext::default();

    // The footer is the sole member of the final row: nothing reserved
    // after it without a bottom edge.
    let footer = divider.item_offsets(&layout, &style, 3);
    assert_eq!(footer.bottom, 0.0);
    // The row above still reserves space for the divider before the footer.
    let cell = divider.item_offsets(&layout, &style, 1);
    assert_eq!(cell.bottom, 5.0);
}

#[test]
fn test_grid_draw_rect_geometry_with_margins() {
    init_tracing();
    let divider = GridDivider::builder()
        .thickness(4.0)
        .side_thickness(4.0)
        .color(Color::GRAY)
        .build()
        .unwrap();

    let mut layout =
        LayoutSnapshot::new(Size::new(270.0, 540.0)).with_grid(GridInfo::uniform(2));
    let margins = EdgeInsets::new(2.0, 2.0, 2.0, 2.0);
    layout.push_child(Rect::new(2.0, 2.0, 86.0, 86.0), margins);
    layout.push_child(Rect::new(92.0, 2.0, 86.0, 86.0), margins);
    layout.push_child(Rect::new(2.0, 92.0, 86.0, 86.0), margins);
    layout.push_child(Rect::new(92.0, 92.0, 86.0, 86.0), margins);
    let style = StyleContext::default();

    let mut surface = RecordingSurface::new();
    divider.draw(&mut surface, &layout, &style);

    // First command: the row divider below item 0, pushed out by the
    // child's bottom margin.
    let below = surface.commands()[0].rect();
    assert_eq!(below, Rect::new(2.0, 90.0, 86.0, 4.0));

    // Second command: the column divider after item 0, pushed out by the
    // right margin, spanning the child's height.
    let side = surface.commands()[1].rect();
    assert_eq!(side, Rect::new(90.0, 2.0, 4.0, 86.0));
}

#[test]
fn test_staggered_grid_positional_edges() {
    init_tracing();
    let divider = GridDivider::builder()
        .thickness(3.0)
        .side_thickness(3.0)
        .color(Color::GRAY)
        .build()
        .unwrap();

    // Six items over three lanes, irregular heights.
    let mut layout =
        LayoutSnapshot::new(Size::new(270.0, 540.0)).with_grid(GridInfo::staggered(3));
    let heights = [120.0, 80.0, 100.0, 90.0, 140.0, 60.0];
    let mut lane_y = [0.0f32; 3];
    for (i, height) in heights.iter().enumerate() {
        let lane = i % 3;
        layout.push_child(
            Rect::new(lane as f32 * CELL, lane_y[lane], CELL, *height),
            EdgeInsets::ZERO,
        );
        lane_y[lane] += height;
    }
    let style = StyleContext::default();

    // First row (positions 0..3) reserves no top inset even with the flag
    // off; the exact-multiple tail (positions 3..6) is the last row.
    for position in 0..3 {
        assert_eq!(divider.item_offsets(&layout, &style, position).bottom, 3.0);
    }
    for position in 3..6 {
        assert_eq!(divider.item_offsets(&layout, &style, position).bottom, 0.0);
    }
}

#[test]
fn test_grid_exclusion_set() {
    init_tracing();
    let divider = GridDivider::builder()
        .thickness(4.0)
        .side_thickness(0.0)
        .draw_bottom_edge(true)
        .skip_positions([0, 4])
        .color(Color::GRAY)
        .build()
        .unwrap();
    let layout = uniform_grid(6, 3);
    let style = StyleContext::default();

    // Skipped positions draw nothing behind them despite the bottom edge.
    assert_eq!(divider.item_offsets(&layout, &style, 0).bottom, 0.0);
    assert_eq!(divider.item_offsets(&layout, &style, 4).bottom, 0.0);
    assert_eq!(divider.item_offsets(&layout, &style, 1).bottom, 4.0);

    let mut surface = RecordingSurface::new();
    divider.draw(&mut surface, &layout, &style);
    // All six cells draw below (bottom edge on), minus the two skipped.
    assert_eq!(surface.len(), 4);
}

#[test]
fn test_horizontal_grid_round_trip() {
    init_tracing();
    let divider = GridDivider::builder()
        .orientation(Orientation::Horizontal)
        .thickness(4.0)
        .side_thickness(6.0)
        .color(Color::GRAY)
        .build()
        .unwrap();

    // Two columns of three lanes each.
    let mut layout =
        LayoutSnapshot::new(Size::new(540.0, 270.0)).with_grid(GridInfo::uniform(3));
    for i in 0..6 {
        let lane = (i % 3) as f32;
        let col = (i / 3) as f32;
        layout.push_child(
            Rect::new(col * CELL, lane * CELL, CELL, CELL),
            EdgeInsets::ZERO,
        );
    }
    let style = StyleContext::default();

    // Vertical neighbor gap equals the side thickness.
    let a = divider.item_offsets(&layout, &style, 0);
    let b = divider.item_offsets(&layout, &style, 1);
    assert_close(a.bottom + b.top, 6.0);

    // The first column reserves a trailing (right) inset; the last does not.
    assert_eq!(a.right, 4.0);
    assert_eq!(divider.item_offsets(&layout, &style, 5).right, 0.0);

    let mut surface = RecordingSurface::new();
    divider.draw(&mut surface, &layout, &style);
    // Column dividers after the first column (3) plus lane separators
    // below lanes 0 and 1 in both columns (4); the final item also draws
    // a lane separator since a single-span final item does not close its
    // lane group.
    assert_eq!(surface.len(), 8);
}

#[test]
fn test_one_decoration_shared_across_grids() {
    init_tracing();
    let divider = Arc::new(
        GridDivider::builder()
            .thickness(2.0)
            .side_thickness(2.0)
            .color(Color::GRAY)
            .build()
            .unwrap(),
    );
    let style = StyleContext::default();

    // Two widgets with different span structures use the same instance;
    // the span memo follows whichever layout was queried last.
    let narrow = uniform_grid(6, 2);
    let wide = uniform_grid(12, 4);

    let narrow_insets = divider.item_offsets(&narrow, &style, 0);
    let wide_insets = divider.item_offsets(&wide, &style, 0);
    assert_close(narrow_insets.right, 1.0);
    assert_close(wide_insets.right, 1.5);

    let narrow_again = divider.item_offsets(&narrow, &style, 0);
    assert_eq!(narrow_insets, narrow_again);
}
