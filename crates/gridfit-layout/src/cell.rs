#![forbid(unsafe_code)]

//! Cell sizing.
//!
//! Every cell in a pass shares one size. It is derived in two steps:
//!
//! 1. The **raw slot**: the available space (container minus padding) minus
//!    the inter-cell spacing, split evenly across rows and columns, clamped
//!    to `>= 0`.
//! 2. The **ratio policy** ([`ChildRatio`]) shapes the raw slot, with the
//!    fit flags deciding which dimension fills it.
//!
//! | ratio | fit x | fit y | cell |
//! |---|---|---|---|
//! | `Square` | both or neither | | `min(w, h)` square |
//! | `Square` | yes | no | `(w, w)` |
//! | `Square` | no | yes | `(h, h)` |
//! | `Fixed` | no | no | largest `ratio` box inside the slot |
//! | `Fixed` | yes | no | `(w, w / ratio)` |
//! | `Fixed` | no | yes | `(h * ratio, h)` |
//! | `Fixed` | yes | yes | `(w, h)`, ratio not kept |
//! | `Free` | any | any | `(w, h)` |
//!
//! Fit types that size the container from content also report the
//! container extent the cells need along the derived axis. A dimension that
//! overflows to infinity is reported as 0, which sends the pass down the
//! recovery path.

use gridfit_core::{Axis, Rect, Sides, Size, Vec2, non_negative};

use crate::config::{ChildRatio, FitType};

/// Container extent the content needs along one axis.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct RequiredSize {
    pub axis: Axis,
    pub size: f32,
}

/// Output of the sizing stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSizing {
    pub cell: Size,
    pub required: Option<RequiredSize>,
}

/// Inputs of the sizing stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSizer {
    /// Container size minus padding.
    pub available: Size,
    pub rows: usize,
    pub columns: usize,
    pub spacing: Vec2,
    pub child_ratio: ChildRatio,
    /// Width divided by height, `> 0`.
    pub aspect: f32,
    pub fit_x: bool,
    pub fit_y: bool,
    pub fit_type: FitType,
    pub padding: Sides,
}

impl CellSizer {
    /// Run the stage.
    #[must_use]
    pub fn size(&self) -> CellSizing {
        let raw = raw_slot(self.available, self.rows, self.columns, self.spacing);
        let cell = apply_ratio(raw, self.child_ratio, self.aspect, self.fit_x, self.fit_y);
        // An extreme aspect can overflow one dimension; treat that as degenerate.
        let cell = Size::new(finite_or_zero(cell.width), finite_or_zero(cell.height));
        let required = required_container_size(
            self.fit_type,
            cell,
            self.rows,
            self.columns,
            self.spacing,
            self.padding,
        );
        CellSizing { cell, required }
    }
}

/// Evenly split `available` into `rows` x `columns` slots after spacing.
#[must_use]
pub fn raw_slot(available: Size, rows: usize, columns: usize, spacing: Vec2) -> Size {
    Size::new(
        track_size(available.width, columns, spacing.x),
        track_size(available.height, rows, spacing.y),
    )
}

/// `(extent - gap * (count - 1)) / count`, clamped to `>= 0`.
#[inline]
fn track_size(extent: f32, count: usize, gap: f32) -> f32 {
    let count = count.max(1) as f32;
    non_negative((extent - gap * (count - 1.0)) / count)
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

/// Shape a raw slot according to the ratio policy and fit flags.
#[must_use]
pub fn apply_ratio(raw: Size, child_ratio: ChildRatio, aspect: f32, fit_x: bool, fit_y: bool) -> Size {
    let (w, h) = (raw.width, raw.height);
    match child_ratio {
        ChildRatio::Square => match (fit_x, fit_y) {
            (true, false) => Size::square(w),
            (false, true) => Size::square(h),
            _ => Size::square(w.min(h)),
        },
        ChildRatio::Fixed => match (fit_x, fit_y) {
            (true, true) => raw,
            (true, false) => Size::new(w, w / aspect),
            (false, true) => Size::new(h * aspect, h),
            (false, false) => {
                if w / aspect <= h {
                    Size::new(w, w / aspect)
                } else {
                    Size::new(h * aspect, h)
                }
            }
        },
        ChildRatio::Free => raw,
    }
}

/// Axis along which `fit_type` derives the container size, if any.
#[inline]
#[must_use]
pub const fn content_axis(fit_type: FitType) -> Option<Axis> {
    match fit_type {
        FitType::FixedRows | FitType::Height => Some(Axis::Horizontal),
        FitType::FixedColumns | FitType::Width => Some(Axis::Vertical),
        FitType::Uniform => None,
    }
}

/// `cell * count + spacing * (count - 1) + padding` along the content axis.
#[must_use]
pub fn required_container_size(
    fit_type: FitType,
    cell: Size,
    rows: usize,
    columns: usize,
    spacing: Vec2,
    padding: Sides,
) -> Option<RequiredSize> {
    let axis = content_axis(fit_type)?;
    let count = match axis {
        Axis::Horizontal => columns,
        Axis::Vertical => rows,
    }
    .max(1) as f32;
    let size = cell.along(axis) * count
        + spacing.along(axis) * (count - 1.0)
        + padding.sum_along(axis);
    Some(RequiredSize { axis, size })
}

/// Last-resort size straight from the container rect, without any ratio
/// policy. Used when the regular stage produced a non-positive dimension.
#[must_use]
pub fn recovery_cell_size(
    container: Size,
    rows: usize,
    columns: usize,
    spacing: Vec2,
    padding: Sides,
) -> Size {
    let available = Rect::from_size(container).inner(padding).size();
    raw_slot(available, rows, columns, spacing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizer(available: Size, rows: usize, columns: usize) -> CellSizer {
        CellSizer {
            available,
            rows,
            columns,
            spacing: Vec2::ZERO,
            child_ratio: ChildRatio::Free,
            aspect: 1.0,
            fit_x: true,
            fit_y: true,
            fit_type: FitType::Uniform,
            padding: Sides::ZERO,
        }
    }

    #[test]
    fn raw_slot_subtracts_spacing() {
        let raw = raw_slot(Size::new(100.0, 50.0), 2, 3, Vec2::new(5.0, 10.0));
        assert_eq!(raw, Size::new(30.0, 20.0));
    }

    #[test]
    fn raw_slot_clamps_negative() {
        let raw = raw_slot(Size::new(4.0, 4.0), 2, 2, Vec2::splat(10.0));
        assert_eq!(raw, Size::ZERO);
    }

    #[test]
    fn square_both_fit_takes_min() {
        let cell = apply_ratio(Size::new(300.0, 100.0), ChildRatio::Square, 1.0, true, true);
        assert_eq!(cell, Size::new(100.0, 100.0));
    }

    #[test]
    fn square_single_fit_follows_fit_axis() {
        let raw = Size::new(300.0, 100.0);
        assert_eq!(apply_ratio(raw, ChildRatio::Square, 1.0, true, false), Size::square(300.0));
        assert_eq!(apply_ratio(raw, ChildRatio::Square, 1.0, false, true), Size::square(100.0));
        assert_eq!(apply_ratio(raw, ChildRatio::Square, 1.0, false, false), Size::square(100.0));
    }

    #[test]
    fn fixed_equality_picks_width_branch() {
        let cell = apply_ratio(Size::new(200.0, 50.0), ChildRatio::Fixed, 4.0, false, false);
        assert_eq!(cell, Size::new(200.0, 50.0));
    }

    #[test]
    fn fixed_height_limited() {
        let cell = apply_ratio(Size::new(400.0, 50.0), ChildRatio::Fixed, 4.0, false, false);
        assert_eq!(cell, Size::new(200.0, 50.0));
    }

    #[test]
    fn fixed_width_limited() {
        let cell = apply_ratio(Size::new(100.0, 50.0), ChildRatio::Fixed, 4.0, false, false);
        assert_eq!(cell, Size::new(100.0, 25.0));
    }

    #[test]
    fn fixed_single_fit_rederives_other_axis() {
        let raw = Size::new(100.0, 500.0);
        assert_eq!(apply_ratio(raw, ChildRatio::Fixed, 4.0, true, false), Size::new(100.0, 25.0));
        assert_eq!(apply_ratio(raw, ChildRatio::Fixed, 4.0, false, true), Size::new(2000.0, 500.0));
    }

    #[test]
    fn fixed_both_fit_degrades_to_free() {
        let raw = Size::new(100.0, 500.0);
        assert_eq!(apply_ratio(raw, ChildRatio::Fixed, 4.0, true, true), raw);
    }

    #[test]
    fn free_ignores_fit_flags() {
        let raw = Size::new(70.0, 30.0);
        for (fx, fy) in [(false, false), (true, false), (false, true), (true, true)] {
            assert_eq!(apply_ratio(raw, ChildRatio::Free, 3.0, fx, fy), raw);
        }
    }

    #[test]
    fn uniform_requires_no_resize() {
        let out = sizer(Size::new(100.0, 100.0), 2, 2).size();
        assert_eq!(out.cell, Size::new(50.0, 50.0));
        assert_eq!(out.required, None);
    }

    #[test]
    fn fixed_columns_requires_height() {
        let mut s = sizer(Size::new(200.0, 100.0), 3, 2);
        s.fit_type = FitType::FixedColumns;
        s.child_ratio = ChildRatio::Square;
        s.fit_y = false;
        s.spacing = Vec2::new(0.0, 10.0);
        s.padding = Sides::new(0.0, 0.0, 5.0, 5.0);
        let out = s.size();
        assert_eq!(out.cell, Size::square(100.0));
        // 3 * 100 + 2 * 10 + 10
        assert_eq!(
            out.required,
            Some(RequiredSize {
                axis: Axis::Vertical,
                size: 330.0
            })
        );
    }

    #[test]
    fn fixed_rows_requires_width() {
        let mut s = sizer(Size::new(100.0, 40.0), 1, 4);
        s.fit_type = FitType::FixedRows;
        s.child_ratio = ChildRatio::Square;
        s.fit_x = false;
        s.spacing = Vec2::new(2.0, 0.0);
        s.padding = Sides::new(3.0, 3.0, 0.0, 0.0);
        let out = s.size();
        assert_eq!(out.cell, Size::square(40.0));
        assert_eq!(
            out.required,
            Some(RequiredSize {
                axis: Axis::Horizontal,
                size: 4.0 * 40.0 + 3.0 * 2.0 + 6.0
            })
        );
    }

    #[test]
    fn overflowing_aspect_collapses_to_zero_width() {
        let mut s = sizer(Size::new(400.0, 100.0), 1, 4);
        s.fit_type = FitType::FixedRows;
        s.child_ratio = ChildRatio::Fixed;
        s.aspect = f32::MAX;
        s.fit_x = false;
        let out = s.size();
        assert_eq!(out.cell, Size::new(0.0, 100.0));
        let required = out.required.unwrap();
        assert_eq!(required.axis, Axis::Horizontal);
        assert!(required.size.is_finite());
    }

    #[test]
    fn content_axis_per_fit_type() {
        assert_eq!(content_axis(FitType::Height), Some(Axis::Horizontal));
        assert_eq!(content_axis(FitType::FixedRows), Some(Axis::Horizontal));
        assert_eq!(content_axis(FitType::Width), Some(Axis::Vertical));
        assert_eq!(content_axis(FitType::FixedColumns), Some(Axis::Vertical));
        assert_eq!(content_axis(FitType::Uniform), None);
    }

    #[test]
    fn recovery_uses_container_rect() {
        let cell = recovery_cell_size(
            Size::new(110.0, 60.0),
            2,
            2,
            Vec2::splat(10.0),
            Sides::all(5.0),
        );
        assert_eq!(cell, Size::new(45.0, 20.0));
    }
}
