#![forbid(unsafe_code)]

//! Host protocol.
//!
//! The grid does not own a scene graph. A host exposes its container
//! through [`LayoutContainer`] and drives the grid through the four
//! [`LayoutGroup`] entry points, always in host order:
//!
//! 1. `provide_horizontal_input`: runs the full pass. May resize the
//!    container and writes every child on both axes.
//! 2. `provide_vertical_input`, `apply_horizontal_layout`,
//!    `apply_vertical_layout`: replay the placements of step 1 without
//!    recomputing anything.
//!
//! The host must not call into the same grid reentrantly. Separate grids
//! share nothing and may be laid out in any order or in parallel.

use gridfit_core::{Axis, Rect, Size};

/// What a host container provides to, and accepts from, a layout group.
pub trait LayoutContainer {
    /// Current size of the container rect.
    fn rect_size(&self) -> Size;

    /// Number of positionable children.
    fn child_count(&self) -> usize;

    /// Resize the container along one axis, keeping its anchors.
    fn set_size_along_axis(&mut self, axis: Axis, size: f32);

    /// Position and size the child at `index` along one axis.
    fn set_child_along_axis(&mut self, index: usize, axis: Axis, position: f32, size: f32);
}

/// Entry points a host layout scheduler calls on a layout group.
pub trait LayoutGroup {
    fn provide_horizontal_input<C: LayoutContainer + ?Sized>(&mut self, host: &mut C);
    fn provide_vertical_input<C: LayoutContainer + ?Sized>(&mut self, host: &mut C);
    fn apply_horizontal_layout<C: LayoutContainer + ?Sized>(&mut self, host: &mut C);
    fn apply_vertical_layout<C: LayoutContainer + ?Sized>(&mut self, host: &mut C);
}

/// Call all four entry points in host order.
pub fn run_layout<G, C>(group: &mut G, host: &mut C)
where
    G: LayoutGroup,
    C: LayoutContainer + ?Sized,
{
    group.provide_horizontal_input(host);
    group.provide_vertical_input(host);
    group.apply_horizontal_layout(host);
    group.apply_vertical_layout(host);
}

/// In-memory container: a sized rect holding child rects.
///
/// Records every resize request and counts child writes so callers can
/// observe exactly what a layout group did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameContainer {
    size: Size,
    children: Vec<Rect>,
    resize_requests: Vec<(Axis, f32)>,
    child_writes: usize,
}

impl FrameContainer {
    #[must_use]
    pub fn new(size: Size, child_count: usize) -> Self {
        Self {
            size,
            children: vec![Rect::default(); child_count],
            resize_requests: Vec::new(),
            child_writes: 0,
        }
    }

    /// Resize from outside (as a parent layout would).
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Add or remove children; new children start at the origin with zero
    /// size.
    pub fn set_child_count(&mut self, count: usize) {
        self.children.resize(count, Rect::default());
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn children(&self) -> &[Rect] {
        &self.children
    }

    #[inline]
    pub fn child(&self, index: usize) -> Option<Rect> {
        self.children.get(index).copied()
    }

    /// Every `set_size_along_axis` call, oldest first.
    #[inline]
    pub fn resize_requests(&self) -> &[(Axis, f32)] {
        &self.resize_requests
    }

    /// Total `set_child_along_axis` calls.
    #[inline]
    pub fn child_writes(&self) -> usize {
        self.child_writes
    }

    /// Forget recorded resize requests and write counts.
    pub fn clear_log(&mut self) {
        self.resize_requests.clear();
        self.child_writes = 0;
    }
}

impl LayoutContainer for FrameContainer {
    fn rect_size(&self) -> Size {
        self.size
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn set_size_along_axis(&mut self, axis: Axis, size: f32) {
        self.resize_requests.push((axis, size));
        self.size = self.size.with_axis(axis, size);
    }

    fn set_child_along_axis(&mut self, index: usize, axis: Axis, position: f32, size: f32) {
        self.child_writes += 1;
        let Some(child) = self.children.get_mut(index) else {
            return;
        };
        match axis {
            Axis::Horizontal => {
                child.x = position;
                child.width = size;
            }
            Axis::Vertical => {
                child.y = position;
                child.height = size;
            }
        }
    }
}
