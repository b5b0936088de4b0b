#![forbid(unsafe_code)]

//! Dynamic grid layout for gridfit.
//!
//! Arranges a container's children in a grid whose row/column counts and
//! shared cell size are derived every pass from the container size, the
//! child count and a small set of policies:
//!
//! - [`Preset`] bundles of settings for common layouts (lists, item grids)
//! - [`FitType`] choosing which axis count is fixed and which is derived
//! - [`ChildRatio`] shaping cells (square, fixed aspect, free)
//! - fit flags deciding which cell dimension fills its slot
//!
//! # Example
//!
//! ```
//! use gridfit_core::Size;
//! use gridfit_layout::{ChildRatio, DynamicGridLayout, FitType, FrameContainer, GridConfig};
//!
//! let config = GridConfig::new()
//!     .fit_type(FitType::FixedColumns)
//!     .columns(3)
//!     .child_ratio(ChildRatio::Square)
//!     .fit(true, false)
//!     .spacing(4.0, 4.0);
//!
//! let mut grid = DynamicGridLayout::new(config);
//! let mut host = FrameContainer::new(Size::new(308.0, 0.0), 7);
//!
//! let pass = grid.compute(&mut host);
//! assert_eq!((pass.rows, pass.columns), (3, 3));
//! assert_eq!(pass.cell_size, Size::new(100.0, 100.0));
//! // The container grew to fit three rows.
//! assert_eq!(host.size().height, 3.0 * 100.0 + 2.0 * 4.0);
//! ```

/// Cell sizing and required container size.
pub mod cell;
/// Persisted grid configuration, sanitization, and JSON loading.
pub mod config;
/// Immutable per-pass input snapshot.
pub mod context;
/// Row and column counts.
pub mod dimensions;
/// The grid component and its pass pipeline.
pub mod engine;
/// Host container and layout-group protocol.
pub mod host;
/// Row-major child placement.
pub mod place;
/// Preset resolution.
pub mod preset;

pub use cell::{CellSizer, CellSizing, RequiredSize};
pub use config::{ChildRatio, ConfigError, FitType, GridConfig, Preset};
pub use context::LayoutContext;
pub use dimensions::{Dimensions, balanced, compute_dimensions};
pub use engine::{DynamicGridLayout, GridPass};
pub use host::{FrameContainer, LayoutContainer, LayoutGroup, run_layout};
pub use place::{ChildPlacement, Placements, place};
pub use preset::resolve;
