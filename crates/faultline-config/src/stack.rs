use serde::Deserialize;

/// Upper bound for `stack.depth`, and for the frames kept from one capture
pub const MAX_STACK_DEPTH: usize = 256;

/// Call-path capture and filtering
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackConfig {
    /// Maximum number of frames kept from a capture
    #[serde(default = "default_depth")]
    pub depth: usize,
    /// Module path prefixes that make up the application's own code
    ///
    /// Frames outside these prefixes are dropped from rendered paths.
    #[serde(default = "default_module_prefixes")]
    pub module_prefixes: Vec<String>,
    /// Prefixes inside the application's own code that are still dropped
    /// (vendored or generated modules, and the framework's own crates)
    #[serde(default = "default_exclude_prefixes")]
    pub exclude_prefixes: Vec<String>,
    /// Function names that never appear in rendered paths
    #[serde(default = "default_ignored_functions")]
    pub ignored_functions: Vec<String>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            depth: default_depth(),
            module_prefixes: default_module_prefixes(),
            exclude_prefixes: default_exclude_prefixes(),
            ignored_functions: default_ignored_functions(),
        }
    }
}

const fn default_depth() -> usize {
    32
}

fn default_module_prefixes() -> Vec<String> {
    vec!["faultline".to_owned()]
}

fn default_exclude_prefixes() -> Vec<String> {
    vec!["faultline_error".to_owned(), "faultline_stack".to_owned()]
}

fn default_ignored_functions() -> Vec<String> {
    [
        "capture",
        "classify",
        "annotate",
        "wrap",
        "force_stack",
        "with_data",
        "caused_by",
        "or_fallback",
        "append",
        "append_result",
        "extend",
        "from_iter",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}
