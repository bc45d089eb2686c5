//! Call-path capture for classified errors
//!
//! A [`StackTrace`] is recorded once, when a failure is first classified,
//! and rendered as a compact `outer>inner` path of the application's own
//! functions. What counts as "own code" is decided by a [`StackFilter`],
//! installed once at startup.

#![allow(clippy::must_use_candidate)]

mod filter;
mod symbol;
mod trace;

use std::sync::OnceLock;

pub use filter::StackFilter;
pub use trace::StackTrace;

static FILTER: OnceLock<StackFilter> = OnceLock::new();

/// Install the process-wide filter
///
/// Must run before the first trace is rendered. Returns `false` if a filter
/// was already installed (or the default was already frozen by a render),
/// in which case the existing one stays in effect.
pub fn install(filter: StackFilter) -> bool {
    FILTER.set(filter).is_ok()
}

/// The process-wide filter, defaulting to [`StackFilter::default`]
pub fn global_filter() -> &'static StackFilter {
    FILTER.get_or_init(StackFilter::default)
}
