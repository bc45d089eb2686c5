use std::backtrace::Backtrace;
use std::fmt;
use std::sync::{Arc, OnceLock};

use faultline_config::MAX_STACK_DEPTH;
use regex::Regex;

use crate::StackFilter;

/// Frames that belong to the capture machinery rather than the caller
const MACHINERY_PREFIXES: &[&str] = &["std::", "core::", "alloc::", "backtrace::", "<std::", "<alloc::"];

/// Call path captured at the point where an error was first classified
///
/// Capturing only records return addresses; symbols are resolved the first
/// time the trace is rendered and the result is cached. Clones share the
/// same capture.
#[derive(Clone)]
pub struct StackTrace {
    inner: Arc<Captured>,
}

struct Captured {
    backtrace: Backtrace,
    symbols: OnceLock<Vec<String>>,
    rendered: OnceLock<String>,
}

impl StackTrace {
    /// Capture the current call path, excluding this function's own frame
    ///
    /// Ignores `RUST_BACKTRACE`: a trace is always recorded.
    #[inline(never)]
    pub fn capture() -> Self {
        Self {
            inner: Arc::new(Captured {
                backtrace: Backtrace::force_capture(),
                symbols: OnceLock::new(),
                rendered: OnceLock::new(),
            }),
        }
    }

    /// Demangled symbols of the caller's frames, innermost first
    pub fn symbols(&self) -> &[String] {
        self.inner.symbols.get_or_init(|| caller_symbols(&self.inner.backtrace.to_string()))
    }

    /// Path rendered with the process-wide filter
    pub fn render(&self) -> &str {
        self.inner
            .rendered
            .get_or_init(|| crate::global_filter().render(self.symbols().iter().map(String::as_str)))
    }

    /// Path rendered with an explicit filter (not cached)
    pub fn render_with(&self, filter: &StackFilter) -> String {
        filter.render(self.symbols().iter().map(String::as_str))
    }

    /// Whether both values come from the same capture
    pub fn same_capture(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StackTrace").field(&self.render()).finish()
    }
}

/// Extract frame symbols from a formatted backtrace, skipping everything up
/// to and including [`StackTrace::capture`]
fn caller_symbols(formatted: &str) -> Vec<String> {
    fn symbol_line() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        // `  12: crate::module::function`, or an unnumbered line for each
        // further function inlined into the same frame
        RE.get_or_init(|| Regex::new(r"^\s*(?:\d+:\s+)?(\S.*?)\s*$").expect("symbol regex is valid"))
    }

    let mut symbols = formatted
        .lines()
        .filter_map(|line| symbol_line().captures(line))
        .map(|captures| captures[1].to_owned())
        .filter(|symbol| !symbol.starts_with("at "))
        .skip_while(|symbol| MACHINERY_PREFIXES.iter().any(|prefix| symbol.starts_with(prefix)))
        .peekable();

    if symbols
        .peek()
        .is_some_and(|symbol| crate::symbol::strip_hash(symbol).ends_with("StackTrace::capture"))
    {
        symbols.next();
    }

    symbols.take(MAX_STACK_DEPTH).collect()
}
