#![forbid(unsafe_code)]

//! The dynamic grid component.
//!
//! One layout pass runs the stages in a fixed order on an immutable
//! [`LayoutContext`]:
//!
//! ```text
//! sanitize + preset -> dimensions -> cell size -> container resize -> place
//!                                                     |
//!                         (cell size <= 0) -> recovery size -> place again
//! ```
//!
//! Only after the last stage are the results committed back to the
//! persisted [`GridConfig`].
//!
//! # Invariants
//!
//! 1. **Bounded recovery**: a pass places children at most twice. The second
//!    placement happens only when the first cell size had a non-positive
//!    dimension, and is never followed by a third.
//! 2. **Replay**: the secondary entry points write exactly the rects of the
//!    last pass; they never recompute.
//! 3. **Zero children**: no placement and no resize request; the pass
//!    reports a 1x1 grid.
//! 4. **Commit**: fixed-axis inputs (`rows` for `FixedRows`, `columns` for
//!    `FixedColumns`) are written back sanitized, never replaced by a
//!    derived value.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Container smaller than padding + spacing | recovery runs once, `insufficient_space` set, zero cell size kept |
//! | Host ignores resize requests | recovery reads the host's actual rect |
//! | Replay before any pass | a full pass runs instead |

use gridfit_core::{Axis, Size};
use serde::Serialize;

use crate::cell::{RequiredSize, recovery_cell_size};
use crate::config::{FitType, GridConfig};
use crate::context::LayoutContext;
use crate::host::{LayoutContainer, LayoutGroup};
use crate::place::{Placements, place};

/// Observable record of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridPass {
    /// Container size when the pass started.
    pub container: Size,
    pub child_count: usize,
    pub rows: usize,
    pub columns: usize,
    pub fit_x: bool,
    pub fit_y: bool,
    /// Final cell size (after recovery, if it ran).
    pub cell_size: Size,
    /// Resize requested from the host, if the fit type sizes the container.
    pub required: Option<RequiredSize>,
    pub placements: Placements,
    /// 0 without children, 1 normally, 2 when recovery ran.
    pub placement_attempts: u8,
    pub recovered: bool,
    /// The cell size stayed non-positive even after recovery.
    pub insufficient_space: bool,
}

/// A grid layout group: owns its configuration and the last pass.
#[derive(Debug, Clone, Default)]
pub struct DynamicGridLayout {
    config: GridConfig,
    last_pass: Option<GridPass>,
}

impl DynamicGridLayout {
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            last_pass: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Mutable configuration for inspectors. Takes effect on the next
    /// horizontal pass.
    #[inline]
    pub fn config_mut(&mut self) -> &mut GridConfig {
        &mut self.config
    }

    /// Result of the most recent pass, if any.
    #[inline]
    pub fn last_pass(&self) -> Option<&GridPass> {
        self.last_pass.as_ref()
    }

    /// Run a full pass against `host` and commit the results.
    pub fn compute<C: LayoutContainer + ?Sized>(&mut self, host: &mut C) -> &GridPass {
        let ctx = LayoutContext::new(&self.config, host.rect_size(), host.child_count());

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "grid_layout_pass",
            preset = %ctx.config().preset,
            fit_type = %ctx.config().fit_type,
            children = ctx.child_count(),
            w = ctx.container().width,
            h = ctx.container().height
        )
        .entered();

        let pass = run_pass(&ctx, host);
        self.commit(&ctx, &pass);
        self.last_pass.insert(pass)
    }

    fn commit(&mut self, ctx: &LayoutContext, pass: &GridPass) {
        let resolved = ctx.config();
        let (rows, columns) = match resolved.fit_type {
            FitType::FixedRows => (resolved.rows, count_to_i32(pass.columns)),
            FitType::FixedColumns => (count_to_i32(pass.rows), resolved.columns),
            FitType::Uniform | FitType::Width | FitType::Height => {
                (count_to_i32(pass.rows), count_to_i32(pass.columns))
            }
        };
        self.config = GridConfig {
            rows,
            columns,
            fit_x: pass.fit_x,
            fit_y: pass.fit_y,
            cell_size: pass.cell_size,
            ..resolved.clone()
        };
    }

    fn replay<C: LayoutContainer + ?Sized>(&mut self, host: &mut C, axis: Axis) {
        if let Some(pass) = self.last_pass.as_ref() {
            write_axis(host, &pass.placements, axis);
            return;
        }
        self.compute(host);
    }
}

impl LayoutGroup for DynamicGridLayout {
    fn provide_horizontal_input<C: LayoutContainer + ?Sized>(&mut self, host: &mut C) {
        self.compute(host);
    }

    fn provide_vertical_input<C: LayoutContainer + ?Sized>(&mut self, host: &mut C) {
        self.replay(host, Axis::Vertical);
    }

    fn apply_horizontal_layout<C: LayoutContainer + ?Sized>(&mut self, host: &mut C) {
        self.replay(host, Axis::Horizontal);
    }

    fn apply_vertical_layout<C: LayoutContainer + ?Sized>(&mut self, host: &mut C) {
        self.replay(host, Axis::Vertical);
    }
}

fn run_pass<C: LayoutContainer + ?Sized>(ctx: &LayoutContext, host: &mut C) -> GridPass {
    let dims = ctx.dimensions();
    let child_count = ctx.child_count();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        rows = dims.rows,
        columns = dims.columns,
        capacity = dims.capacity(),
        fit_x = dims.fit_x,
        fit_y = dims.fit_y,
        "dimensions"
    );

    if child_count == 0 {
        return GridPass {
            container: ctx.container(),
            child_count,
            rows: 1,
            columns: 1,
            fit_x: dims.fit_x,
            fit_y: dims.fit_y,
            cell_size: Size::ZERO,
            required: None,
            placements: Placements::default(),
            placement_attempts: 0,
            recovered: false,
            insufficient_space: false,
        };
    }

    let config = ctx.config();
    let sizing = ctx.sizer(&dims).size();

    #[cfg(feature = "tracing")]
    tracing::trace!(w = sizing.cell.width, h = sizing.cell.height, "cell size");

    if let Some(required) = sizing.required {
        host.set_size_along_axis(required.axis, required.size);
    }

    #[cfg(feature = "tracing")]
    {
        if child_count > dims.capacity() {
            tracing::debug!(
                child_count,
                rows = dims.rows,
                columns = dims.columns,
                "grid short on rows, extending downward"
            );
        }
    }

    let mut cell = sizing.cell;
    let mut placements = place(child_count, dims.columns, cell, config.spacing, config.padding);
    write_placements(host, &placements);
    let mut placement_attempts = 1;
    let mut recovered = false;

    if !cell.is_positive() {
        let current = host.rect_size();
        cell = recovery_cell_size(current, dims.rows, dims.columns, config.spacing, config.padding);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            container_w = current.width,
            container_h = current.height,
            w = cell.width,
            h = cell.height,
            "non-positive cell size, recovering from container rect"
        );

        placements = place(child_count, dims.columns, cell, config.spacing, config.padding);
        write_placements(host, &placements);
        placement_attempts = 2;
        recovered = true;
    }

    let insufficient_space = !cell.is_positive();

    #[cfg(feature = "tracing")]
    {
        if insufficient_space {
            tracing::warn!(w = cell.width, h = cell.height, "insufficient space for grid cells");
        }
    }

    GridPass {
        container: ctx.container(),
        child_count,
        rows: dims.rows,
        columns: dims.columns,
        fit_x: dims.fit_x,
        fit_y: dims.fit_y,
        cell_size: cell,
        required: sizing.required,
        placements,
        placement_attempts,
        recovered,
        insufficient_space,
    }
}

fn write_placements<C: LayoutContainer + ?Sized>(host: &mut C, placements: &Placements) {
    for axis in Axis::ALL {
        write_axis(host, placements, axis);
    }
}

fn write_axis<C: LayoutContainer + ?Sized>(host: &mut C, placements: &Placements, axis: Axis) {
    for p in placements {
        let (position, size) = match axis {
            Axis::Horizontal => (p.rect.x, p.rect.width),
            Axis::Vertical => (p.rect.y, p.rect.height),
        };
        host.set_child_along_axis(p.index, axis, position, size);
    }
}

#[inline]
fn count_to_i32(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
