//! Logging facade.
//!
//! With the `tracing` feature the usual `tracing` macros are re-exported so
//! dependent crates can log through `gridfit_core::{debug, trace, ...}`
//! without naming `tracing` themselves. Without the feature this module is
//! empty and no logging code is compiled.
//!
//! `tracing-json` adds [`init_json_logging`], which installs a global JSON
//! subscriber filtered by `RUST_LOG` (default `info`).

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a JSON-formatting global subscriber.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .try_init()
        .is_ok()
}
