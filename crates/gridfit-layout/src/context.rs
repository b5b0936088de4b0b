#![forbid(unsafe_code)]

//! Per-pass input snapshot.
//!
//! A [`LayoutContext`] is built once at the start of a pass from the
//! persisted [`GridConfig`] and the host's current container size and child
//! count. It holds a sanitized, preset-resolved copy of the configuration,
//! so every stage reads the same values regardless of what the host does to
//! its own `GridConfig` in the meantime. Nothing here is mutated after
//! construction.

use gridfit_core::{Rect, Size};

use crate::cell::CellSizer;
use crate::config::GridConfig;
use crate::dimensions::{Dimensions, dimensions_for};
use crate::preset;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutContext {
    container: Size,
    child_count: usize,
    config: GridConfig,
}

impl LayoutContext {
    /// Snapshot `config` for a container of `container` size holding
    /// `child_count` children.
    #[must_use]
    pub fn new(config: &GridConfig, container: Size, child_count: usize) -> Self {
        Self {
            container,
            child_count,
            config: preset::resolve(&config.sanitized(), child_count),
        }
    }

    #[inline]
    pub fn container(&self) -> Size {
        self.container
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.child_count
    }

    /// The sanitized, preset-resolved configuration for this pass.
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Container size minus padding, saturating at zero.
    #[must_use]
    pub fn available(&self) -> Size {
        Rect::from_size(self.container).inner(self.config.padding).size()
    }

    /// Dimension stage.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        let c = &self.config;
        dimensions_for(c.fit_type, self.child_count, c.rows, c.columns, c.fit_x, c.fit_y)
    }

    /// Inputs for the sizing stage on the grid `dims`.
    #[must_use]
    pub fn sizer(&self, dims: &Dimensions) -> CellSizer {
        let c = &self.config;
        CellSizer {
            available: self.available(),
            rows: dims.rows,
            columns: dims.columns,
            spacing: c.spacing,
            child_ratio: c.child_ratio,
            aspect: c.aspect(),
            fit_x: dims.fit_x,
            fit_y: dims.fit_y,
            fit_type: c.fit_type,
            padding: c.padding,
        }
    }
}
