#![forbid(unsafe_code)]

//! Preset resolution.
//!
//! A non-custom [`Preset`] overwrites the policy fields it owns and leaves
//! everything else (spacing, padding, `fixed_ratio`, and the counts it does
//! not force) as configured.
//!
//! | preset | fit type | counts | ratio | fit x/y |
//! |---|---|---|---|---|
//! | `Custom` | - | - | - | - |
//! | `VerticalList` | `FixedColumns` | `columns = 1` | `Fixed` | both |
//! | `HorizontalList` | `FixedRows` | `rows = 1`, `columns = children` | `Fixed` | both |
//! | `ItemGridVertical` | `FixedColumns` | `rows = 4` | `Square` | both |

use crate::config::{ChildRatio, FitType, GridConfig, Preset};

/// Rows hint for [`Preset::ItemGridVertical`]; the dimension stage derives
/// the real row count from `columns`.
pub const ITEM_GRID_ROWS_HINT: i32 = 4;

/// Apply `config.preset` to a copy of `config`.
///
/// `child_count` only matters for [`Preset::HorizontalList`], which sizes
/// its single row to the children. The result is never below one column.
#[must_use]
pub fn resolve(config: &GridConfig, child_count: usize) -> GridConfig {
    let mut out = config.clone();
    match config.preset {
        Preset::Custom => return out,
        Preset::VerticalList => {
            out.fit_type = FitType::FixedColumns;
            out.columns = 1;
            out.child_ratio = ChildRatio::Fixed;
        }
        Preset::HorizontalList => {
            out.fit_type = FitType::FixedRows;
            out.rows = 1;
            out.columns = i32::try_from(child_count).unwrap_or(i32::MAX).max(1);
            out.child_ratio = ChildRatio::Fixed;
        }
        Preset::ItemGridVertical => {
            out.fit_type = FitType::FixedColumns;
            out.rows = ITEM_GRID_ROWS_HINT;
            out.child_ratio = ChildRatio::Square;
        }
    }
    out.fit_x = true;
    out.fit_y = true;
    out
}
