//! End-to-end passes driven through the host protocol.

use gridfit_core::{Axis, Rect, Sides, Size};
use gridfit_layout::{
    ChildRatio, DynamicGridLayout, FitType, FrameContainer, GridConfig, LayoutContainer,
    LayoutGroup, Preset, run_layout,
};
use pretty_assertions::assert_eq;

/// Host that refuses to shrink below a minimum size, like a rect with a
/// min-size constraint from its parent.
struct MinSizeHost {
    inner: FrameContainer,
    min: Size,
}

impl LayoutContainer for MinSizeHost {
    fn rect_size(&self) -> Size {
        self.inner.rect_size()
    }

    fn child_count(&self) -> usize {
        self.inner.child_count()
    }

    fn set_size_along_axis(&mut self, axis: Axis, size: f32) {
        self.inner.set_size_along_axis(axis, size.max(self.min.along(axis)));
    }

    fn set_child_along_axis(&mut self, index: usize, axis: Axis, position: f32, size: f32) {
        self.inner.set_child_along_axis(index, axis, position, size);
    }
}

#[test]
fn vertical_list_stacks_children() {
    let config = GridConfig::new()
        .preset(Preset::VerticalList)
        .spacing(0.0, 10.0)
        .padding(Sides::new(5.0, 5.0, 5.0, 5.0));
    let mut grid = DynamicGridLayout::new(config);
    let mut host = FrameContainer::new(Size::new(210.0, 350.0), 3);
    run_layout(&mut grid, &mut host);

    let pass = grid.last_pass().unwrap();
    assert_eq!((pass.rows, pass.columns), (3, 1));
    // Fixed ratio with both fit flags fills the slot: (350 - 10 - 20) / 3.
    assert_eq!(pass.cell_size, Size::new(200.0, 320.0 / 3.0));
    let step = 320.0 / 3.0 + 10.0;
    for (i, child) in host.children().iter().enumerate() {
        assert_eq!(child.x, 5.0);
        assert_eq!(child.y, 5.0 + i as f32 * step);
    }
    assert_eq!(host.resize_requests().len(), 1);
    assert_eq!(host.resize_requests()[0].0, Axis::Vertical);
}

#[test]
fn horizontal_list_grows_width() {
    let config = GridConfig::new().preset(Preset::HorizontalList).spacing(4.0, 0.0);
    let mut grid = DynamicGridLayout::new(config);
    let mut host = FrameContainer::new(Size::new(100.0, 50.0), 4);
    run_layout(&mut grid, &mut host);

    let pass = grid.last_pass().unwrap();
    assert_eq!((pass.rows, pass.columns), (1, 4));
    assert_eq!(grid.config().columns, 4);
    // (100 - 12) / 4 wide, full height.
    assert_eq!(pass.cell_size, Size::new(22.0, 50.0));
    assert_eq!(host.size(), Size::new(4.0 * 22.0 + 3.0 * 4.0, 50.0));
    assert_eq!(host.child(3), Some(Rect::new(78.0, 0.0, 22.0, 50.0)));
}

#[test]
fn item_grid_uses_square_tiles() {
    let config = GridConfig::new()
        .preset(Preset::ItemGridVertical)
        .columns(4)
        .spacing(8.0, 8.0);
    let mut grid = DynamicGridLayout::new(config);
    let mut host = FrameContainer::new(Size::new(424.0, 200.0), 10);
    run_layout(&mut grid, &mut host);

    let pass = grid.last_pass().unwrap();
    assert_eq!((pass.rows, pass.columns), (3, 4));
    // Square with both fits takes the smaller slot: min(100, 61.33).
    let slot_h = (200.0 - 16.0) / 3.0;
    assert_eq!(pass.cell_size, Size::square(slot_h));
    assert_eq!(host.child(5), Some(Rect::new(slot_h + 8.0, slot_h + 8.0, slot_h, slot_h)));
}

#[test]
fn width_fit_type_sizes_height_from_content() {
    let config = GridConfig::new()
        .fit_type(FitType::Width)
        .child_ratio(ChildRatio::Fixed)
        .fixed_ratio(2.0, 1.0);
    let mut grid = DynamicGridLayout::new(config);
    let mut host = FrameContainer::new(Size::new(300.0, 1000.0), 5);
    let pass = grid.compute(&mut host).clone();

    assert_eq!((pass.rows, pass.columns), (2, 3));
    assert!(pass.fit_x && !pass.fit_y);
    assert_eq!(pass.cell_size, Size::new(100.0, 50.0));
    assert_eq!(host.size(), Size::new(300.0, 100.0));
}

#[test]
fn height_fit_type_sizes_width_from_content() {
    let config = GridConfig::new()
        .fit_type(FitType::Height)
        .child_ratio(ChildRatio::Fixed)
        .fixed_ratio(2.0, 1.0)
        // Overridden by the fit type.
        .fit(true, false);
    let mut grid = DynamicGridLayout::new(config);
    let mut host = FrameContainer::new(Size::new(1000.0, 300.0), 5);
    let pass = grid.compute(&mut host).clone();

    assert_eq!((pass.rows, pass.columns), (2, 3));
    assert!(!pass.fit_x && pass.fit_y);
    // Height fills (300 / 2), width follows the 2:1 ratio.
    assert_eq!(pass.cell_size, Size::new(300.0, 150.0));
    assert_eq!(host.resize_requests(), &[(Axis::Horizontal, 900.0)]);
    assert_eq!(host.size(), Size::new(900.0, 300.0));
    assert_eq!(host.child(4), Some(Rect::new(300.0, 150.0, 300.0, 150.0)));
    assert!(!grid.config().fit_x && grid.config().fit_y);
}

#[test]
fn extreme_fixed_ratio_never_requests_infinite_size() {
    let config = GridConfig::new()
        .fit_type(FitType::FixedRows)
        .rows(1)
        .child_ratio(ChildRatio::Fixed)
        .fixed_ratio(1e30, 1e-30)
        .fit(false, true);
    let mut grid = DynamicGridLayout::new(config);
    let mut host = FrameContainer::new(Size::new(400.0, 100.0), 4);
    let pass = grid.compute(&mut host).clone();

    // The overflowing ratio falls back to 1:1.
    assert_eq!(pass.cell_size, Size::square(100.0));
    assert!(!pass.recovered);
    assert_eq!(host.resize_requests(), &[(Axis::Horizontal, 400.0)]);
    assert!(host.children().iter().all(|c| c.x.is_finite() && c.width.is_finite()));
}

#[test]
fn recovery_reads_post_resize_rect() {
    // Zero-height container: the fixed-ratio cell collapses to nothing and the
    // requested height is zero, but the host keeps a 100px minimum.
    let config = GridConfig::new()
        .fit_type(FitType::FixedColumns)
        .columns(2)
        .child_ratio(ChildRatio::Fixed)
        .fixed_ratio(4.0, 1.0);
    let mut grid = DynamicGridLayout::new(config);
    let mut host = MinSizeHost {
        inner: FrameContainer::new(Size::new(200.0, 0.0), 4),
        min: Size::new(0.0, 100.0),
    };
    let pass = grid.compute(&mut host).clone();

    assert!(pass.recovered);
    assert!(!pass.insufficient_space);
    assert_eq!(pass.placement_attempts, 2);
    assert_eq!(pass.cell_size, Size::new(100.0, 50.0));
    assert_eq!(host.inner.child(3), Some(Rect::new(100.0, 50.0, 100.0, 50.0)));
    assert_eq!(grid.config().cell_size, Size::new(100.0, 50.0));
}

#[test]
fn child_added_between_passes_is_laid_out() {
    let mut grid = DynamicGridLayout::new(GridConfig::new().child_ratio(ChildRatio::Free));
    let mut host = FrameContainer::new(Size::new(120.0, 120.0), 4);
    run_layout(&mut grid, &mut host);
    assert_eq!(grid.last_pass().unwrap().columns, 2);

    host.set_child_count(5);
    run_layout(&mut grid, &mut host);
    let pass = grid.last_pass().unwrap();
    assert_eq!((pass.rows, pass.columns), (2, 3));
    assert_eq!(host.child(4), Some(Rect::new(40.0, 60.0, 40.0, 60.0)));
}

#[test]
fn config_edit_applies_on_next_pass() {
    let mut grid = DynamicGridLayout::new(GridConfig::new().child_ratio(ChildRatio::Free));
    let mut host = FrameContainer::new(Size::new(100.0, 100.0), 4);
    run_layout(&mut grid, &mut host);
    assert_eq!(host.child(1), Some(Rect::new(50.0, 0.0, 50.0, 50.0)));

    grid.config_mut().preset = Preset::VerticalList;
    // Replay alone keeps the old rects.
    grid.apply_horizontal_layout(&mut host);
    assert_eq!(host.child(1), Some(Rect::new(50.0, 0.0, 50.0, 50.0)));

    run_layout(&mut grid, &mut host);
    assert_eq!(host.child(1), Some(Rect::new(0.0, 25.0, 100.0, 25.0)));
}

#[test]
fn json_config_drives_a_pass() {
    // Underscored SCREAMING names are a FromStr convenience, not a serde spelling.
    assert!(GridConfig::from_json(r#"{ "fit_type": "FIXED_ROWS" }"#).is_err());

    let config = GridConfig::from_json(
        r#"{
            "fit_type": "FIXEDROWS",
            "rows": 2,
            "child_ratio": "Square",
            "spacing": { "x": 2, "y": 2 }
        }"#,
    )
    .unwrap();
    assert_eq!(config.fit_type, "FIXED_ROWS".parse::<FitType>().unwrap());

    let mut grid = DynamicGridLayout::new(config);
    let mut host = FrameContainer::new(Size::new(500.0, 62.0), 6);
    run_layout(&mut grid, &mut host);
    let pass = grid.last_pass().unwrap();
    assert_eq!((pass.rows, pass.columns), (2, 3));
    // Square, no fit flags: min((500 - 4) / 3, (62 - 2) / 2) = 30.
    assert_eq!(pass.cell_size, Size::square(30.0));
    assert_eq!(host.size().width, 3.0 * 30.0 + 2.0 * 2.0);
}

#[test]
fn pass_report_serializes() {
    let mut grid = DynamicGridLayout::new(GridConfig::new());
    let mut host = FrameContainer::new(Size::new(10.0, 10.0), 1);
    let pass = grid.compute(&mut host);
    let json = serde_json::to_value(pass).unwrap();
    assert_eq!(json["rows"], 1);
    assert_eq!(json["placement_attempts"], 1);
    assert_eq!(json["placements"]["items"][0]["rect"]["width"], 10.0);
}
