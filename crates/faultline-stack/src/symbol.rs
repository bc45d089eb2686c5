//! Reduction of demangled symbol names

use std::sync::OnceLock;

use regex::Regex;

/// Remove the legacy mangling hash (`::h0123456789abcdef`)
pub fn strip_hash(symbol: &str) -> &str {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"::h[0-9a-f]{16}$").expect("hash regex is valid"))
    }

    re().find(symbol).map_or(symbol, |hash| &symbol[..hash.start()])
}

/// Module path used for prefix matching
///
/// For trait impls (`<a::B as c::D>::f`) this is the implementing type's
/// path, so a trait method counts as part of the implementor's module.
pub fn module_path(symbol: &str) -> &str {
    symbol.trim_start_matches(['<', '&'])
}

/// Bare function name of a symbol, without receiver, generics or closures
///
/// `<app::Handler as app::Service>::call::{{closure}}` reduces to `call`.
pub fn bare_name(symbol: &str) -> Option<&str> {
    split_path(symbol)
        .into_iter()
        .rev()
        .find(|segment| !segment.is_empty() && !segment.starts_with(['{', '<']))
}

/// Split on `::` outside of angle brackets
fn split_path(symbol: &str) -> Vec<&str> {
    let bytes = symbol.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            // `->` inside fn pointer types is not a closing bracket
            b'>' if i == 0 || bytes[i - 1] != b'-' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&symbol[start..i]);
                start = i + 2;
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&symbol[start..]);

    segments
}
