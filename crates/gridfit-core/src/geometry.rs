#![forbid(unsafe_code)]

//! Floating-point geometry primitives shared by the layout engine and hosts.
//!
//! All values are UI-scale `f32` pixels. None of these types enforce
//! non-negativity on construction; the layout engine sanitizes its inputs
//! before use, and hosts are free to carry whatever their scene graph holds.

use serde::{Deserialize, Serialize};

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// X axis (widths, left offsets).
    Horizontal,
    /// Y axis (heights, top offsets).
    Vertical,
}

impl Axis {
    /// Both axes in host pass order.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size with both components equal.
    #[inline]
    #[must_use]
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// Component along `axis`.
    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Copy with the component along `axis` replaced.
    #[inline]
    #[must_use]
    pub const fn with_axis(self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(value, self.height),
            Axis::Vertical => Self::new(self.width, value),
        }
    }

    /// Both components strictly positive.
    #[inline]
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// A generic x/y pair, used for inter-cell spacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same value on both axes.
    #[inline]
    #[must_use]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// Insets from the four edges of a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Sides {
    pub const ZERO: Self = Self::all(0.0);

    #[inline]
    #[must_use]
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Same inset on every edge.
    #[inline]
    #[must_use]
    pub const fn all(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// `left + right`.
    #[inline]
    #[must_use]
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// `top + bottom`.
    #[inline]
    #[must_use]
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }

    /// Total inset along `axis`.
    #[inline]
    #[must_use]
    pub fn sum_along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal_sum(),
            Axis::Vertical => self.vertical_sum(),
        }
    }
}

/// An axis-aligned rectangle with a top-left origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Shrink by `sides`. Dimensions saturate at zero.
    #[must_use]
    pub fn inner(&self, sides: Sides) -> Self {
        Self::new(
            self.x + sides.left,
            self.y + sides.top,
            non_negative(self.width - sides.horizontal_sum()),
            non_negative(self.height - sides.vertical_sum()),
        )
    }
}

/// Clamp to `>= 0`, mapping NaN to 0.
#[inline]
#[must_use]
pub fn non_negative(v: f32) -> f32 {
    if v > 0.0 { v } else { 0.0 }
}
