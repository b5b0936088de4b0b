#![forbid(unsafe_code)]

//! Row and column counts.
//!
//! Fixed-axis fit types hold one count and derive the other by ceiling
//! division. Balanced fit types start from the smallest square that holds
//! every child and then try to drop trailing empty rows.
//!
//! # Invariants
//!
//! 1. `rows >= 1` and `columns >= 1` for every input, including zero
//!    children and zero/negative fixed counts.
//! 2. `rows * columns >= child_count` for every fit type.

use crate::config::FitType;

/// Grid shape plus the fit flags in effect for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
    pub fit_x: bool,
    pub fit_y: bool,
}

impl Dimensions {
    /// Number of cells in the grid.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.rows * self.columns
    }
}

/// Fit flags forced by balanced fit types, `None` for fixed-axis types.
#[inline]
#[must_use]
pub const fn forced_fit(fit_type: FitType) -> Option<(bool, bool)> {
    match fit_type {
        FitType::Uniform => Some((true, true)),
        FitType::Width => Some((true, false)),
        FitType::Height => Some((false, true)),
        FitType::FixedRows | FitType::FixedColumns => None,
    }
}

/// Derive `(rows, columns)` for `child_count` children.
///
/// `rows` is read for [`FitType::FixedRows`] and `columns` for
/// [`FitType::FixedColumns`]; non-positive values count as 1.
#[must_use]
pub fn compute_dimensions(
    fit_type: FitType,
    child_count: usize,
    rows: i32,
    columns: i32,
) -> (usize, usize) {
    if child_count == 0 {
        return (1, 1);
    }
    match fit_type {
        FitType::FixedRows => {
            let rows = positive_count(rows);
            (rows, child_count.div_ceil(rows))
        }
        FitType::FixedColumns => {
            let columns = positive_count(columns);
            (child_count.div_ceil(columns), columns)
        }
        FitType::Uniform | FitType::Width | FitType::Height => balanced(child_count),
    }
}

/// Full dimension stage: counts plus the fit flags for this pass.
#[must_use]
pub fn dimensions_for(
    fit_type: FitType,
    child_count: usize,
    rows: i32,
    columns: i32,
    fit_x: bool,
    fit_y: bool,
) -> Dimensions {
    let (rows, columns) = compute_dimensions(fit_type, child_count, rows, columns);
    let (fit_x, fit_y) = forced_fit(fit_type).unwrap_or((fit_x, fit_y));
    Dimensions {
        rows,
        columns,
        fit_x,
        fit_y,
    }
}

/// Balanced shape for `n > 0` children.
///
/// Compares the square `(s, s)`, `s = ceil(sqrt(n))`, against
/// `(r, ceil(n / r))` with `r = ceil(n / s)`, preferring fewer rows and then
/// fewer columns. Both candidates hold all `n` children.
#[must_use]
pub fn balanced(n: usize) -> (usize, usize) {
    if n == 0 {
        return (1, 1);
    }
    let side = ceil_sqrt(n);
    let square = (side, side);
    let tight_rows = n.div_ceil(side);
    let tight = (tight_rows, n.div_ceil(tight_rows));

    if tight.0 < square.0 || (tight.0 == square.0 && tight.1 < square.1) {
        tight
    } else {
        square
    }
}

/// Smallest `s` with `s * s >= n`.
fn ceil_sqrt(n: usize) -> usize {
    let mut s = (n as f64).sqrt().ceil() as usize;
    // f64 rounding can land one off for very large n.
    while s * s < n {
        s += 1;
    }
    while s > 1 && (s - 1) * (s - 1) >= n {
        s -= 1;
    }
    s.max(1)
}

#[inline]
fn positive_count(v: i32) -> usize {
    usize::try_from(v).unwrap_or(0).max(1)
}
