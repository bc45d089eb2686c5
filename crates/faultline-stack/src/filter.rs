use std::collections::HashSet;

use faultline_config::StackConfig;

use crate::symbol;

/// Rules turning raw frames into a compact diagnostic path
#[derive(Debug, Clone)]
pub struct StackFilter {
    depth: usize,
    module_prefixes: Vec<String>,
    exclude_prefixes: Vec<String>,
    ignored_functions: HashSet<String>,
}

impl StackFilter {
    /// Build a filter from configuration
    pub fn new(config: &StackConfig) -> Self {
        Self {
            depth: config.depth,
            module_prefixes: config.module_prefixes.clone(),
            exclude_prefixes: config.exclude_prefixes.clone(),
            ignored_functions: config.ignored_functions.iter().cloned().collect(),
        }
    }

    /// Maximum number of frames considered
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Render frames into an outermost-caller-first path joined with `>`
    ///
    /// `symbols` are demangled symbol names, innermost frame first, as they
    /// appear in a backtrace. Only the first [`depth`](Self::depth) frames
    /// are considered.
    pub fn render<'a, I>(&self, symbols: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut names: Vec<&str> = Vec::new();

        for raw in symbols.into_iter().take(self.depth) {
            let symbol = symbol::strip_hash(raw.trim());
            if !self.is_own_code(symbol::module_path(symbol)) {
                continue;
            }

            let Some(name) = symbol::bare_name(symbol) else {
                continue;
            };
            if self.ignored_functions.contains(name) || names.last() == Some(&name) {
                continue;
            }

            names.push(name);
        }

        names.reverse();
        names.join(">")
    }

    fn is_own_code(&self, path: &str) -> bool {
        let within = |prefixes: &[String]| prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()));
        within(&self.module_prefixes) && !within(&self.exclude_prefixes)
    }
}

impl Default for StackFilter {
    fn default() -> Self {
        Self::new(&StackConfig::default())
    }
}

impl From<&StackConfig> for StackFilter {
    fn from(config: &StackConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_filter() -> StackFilter {
        StackFilter::new(&StackConfig {
            module_prefixes: vec!["faultline".to_owned(), "projects_api".to_owned()],
            exclude_prefixes: vec!["projects_api::vendor".to_owned()],
            ..StackConfig::default()
        })
    }

    #[test]
    fn keeps_own_frames_outermost_first() {
        let symbols = [
            "projects_api::store::fetch_row",
            "projects_api::store::load_project",
            "projects_api::handlers::get_project",
            "projects_api::main",
        ];

        assert_eq!(service_filter().render(symbols), "main>get_project>load_project>fetch_row");
    }

    #[test]
    fn drops_foreign_vendored_and_helper_frames() {
        let symbols = [
            "faultline_error::fault::Fault::classify::h0123456789abcdef",
            "faultline_error::ext::<impl faultline_error::ResultExt<T> for core::result::Result<T,E>>::wrap",
            "projects_api::vendor::pool::Pool::checkout",
            "projects_api::store::load_project::{{closure}}",
            "projects_api::store::load_project",
            "tokio::runtime::task::harness::poll",
            "<projects_api::handlers::Projects as projects_api::Handler>::call",
            "std::rt::lang_start",
        ];

        assert_eq!(service_filter().render(symbols), "call>load_project");
    }

    #[test]
    fn ignored_names_are_configurable() {
        let filter = StackFilter::new(&StackConfig {
            module_prefixes: vec!["projects_api".to_owned()],
            ignored_functions: vec!["load_project".to_owned()],
            ..StackConfig::default()
        });

        assert_eq!(
            filter.render(["projects_api::store::load_project", "projects_api::sync::classify"]),
            "classify"
        );
    }

    #[test]
    fn depth_bounds_considered_frames() {
        let filter = StackFilter::new(&StackConfig {
            depth: 2,
            module_prefixes: vec!["projects_api".to_owned()],
            ..StackConfig::default()
        });

        assert_eq!(
            filter.render(["projects_api::a", "projects_api::b", "projects_api::c"]),
            "b>a"
        );
    }

    #[test]
    fn default_filter_hides_framework_frames() {
        let symbols = [
            "faultline_error::causal::CausalError::capture",
            "faultline_error::fault::Fault::classify",
            "faultline_error::fault::Fault::force_stack",
            "faultline_error::aggregate::AggregateError::append",
            "<faultline_error::aggregate::AggregateError as core::iter::traits::collect::Extend<faultline_error::fault::Fault>>::extend",
            "<faultline_error::aggregate::AggregateError as core::iter::traits::collect::FromIterator<faultline_error::fault::Fault>>::from_iter",
            "core::iter::traits::iterator::Iterator::collect",
            "faultline_server::tests::import_projects::{{closure}}",
            "faultline::commands::decode",
        ];

        assert_eq!(StackFilter::default().render(symbols), "decode>import_projects");
    }

    #[test]
    fn default_helper_names_cover_collection_traits() {
        let filter = StackFilter::new(&StackConfig {
            module_prefixes: vec!["faultline".to_owned()],
            exclude_prefixes: Vec::new(),
            ..StackConfig::default()
        });
        let symbols = [
            "<faultline_error::aggregate::AggregateError as core::iter::traits::collect::Extend<faultline_error::fault::Fault>>::extend",
            "<faultline_error::aggregate::AggregateError as core::iter::traits::collect::FromIterator<faultline_error::fault::Fault>>::from_iter",
            "faultline_server::tests::import_projects",
        ];

        assert_eq!(filter.render(symbols), "import_projects");
    }

    #[test]
    fn nothing_in_module_space_renders_empty() {
        assert_eq!(StackFilter::default().render(["std::rt::lang_start", "<unknown>"]), "");
    }
}
