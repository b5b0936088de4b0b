#![forbid(unsafe_code)]

//! Core: geometry primitives and the logging facade for gridfit.
//!
//! # Role in gridfit
//! `gridfit-core` is the foundation layer. It owns the `f32` rectangle
//! vocabulary ([`Size`], [`Vec2`], [`Sides`], [`Rect`], [`Axis`]) that the
//! layout engine and its hosts exchange, and the optional `tracing`
//! re-exports used for per-pass diagnostics.
//!
//! # How it fits in the system
//! `gridfit-layout` consumes these types for configuration (spacing,
//! padding, ratios) and for everything it writes back to a host
//! (container resize requests, child rectangles). Hosts depend on this
//! crate alone to implement the container side of the protocol.

pub mod geometry;
pub mod logging;

pub use geometry::{Axis, Rect, Sides, Size, Vec2, non_negative};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
