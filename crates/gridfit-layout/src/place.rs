#![forbid(unsafe_code)]

//! Child placement.
//!
//! Children fill the grid row-major: flat index `i` lands in row
//! `i / columns`, column `i % columns`. Offsets are measured from the
//! container's top-left corner and start inside the padding.
//!
//! Positions depend only on the column count, so the loop is bounded by the
//! child count rather than by `rows * columns`: a grid that is short on rows
//! simply grows downward and every child is placed.

use gridfit_core::{Rect, Sides, Size, Vec2};
use serde::Serialize;

/// Where one child goes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChildPlacement {
    /// Flat index in host child order.
    pub index: usize,
    pub row: usize,
    pub column: usize,
    /// Top-left offset and the shared cell size.
    pub rect: Rect,
}

/// All placements of one pass, in child order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Placements {
    items: Vec<ChildPlacement>,
    columns: usize,
}

impl Placements {
    /// Number of placed children.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Placement of the child at flat `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&ChildPlacement> {
        self.items.get(index)
    }

    /// Rectangle of the child occupying `(row, column)`, if any.
    pub fn cell(&self, row: usize, column: usize) -> Option<Rect> {
        if column >= self.columns {
            return None;
        }
        self.items.get(row * self.columns + column).map(|p| p.rect)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChildPlacement> + '_ {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Placements {
    type Item = &'a ChildPlacement;
    type IntoIter = std::slice::Iter<'a, ChildPlacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Place `child_count` children on a grid with `columns` columns.
///
/// The row count is implied; placement never drops a child.
#[must_use]
pub fn place(
    child_count: usize,
    columns: usize,
    cell: Size,
    spacing: Vec2,
    padding: Sides,
) -> Placements {
    let columns = columns.max(1);
    let step_x = cell.width + spacing.x;
    let step_y = cell.height + spacing.y;

    let items = (0..child_count)
        .map(|index| {
            let row = index / columns;
            let column = index % columns;
            ChildPlacement {
                index,
                row,
                column,
                rect: Rect::new(
                    padding.left + column as f32 * step_x,
                    padding.top + row as f32 * step_y,
                    cell.width,
                    cell.height,
                ),
            }
        })
        .collect();

    Placements { items, columns }
}
