use std::sync::OnceLock;

use regex::{Captures, Regex};
use thiserror::Error;

/// Failure to expand a `{{ env.VAR }}` placeholder
#[derive(Debug, PartialEq, Eq, Error)]
pub enum EnvError {
    /// Variable is unset and the placeholder has no default
    #[error("environment variable not found: `{0}`")]
    Missing(String),

    /// Placeholder is not scoped with `env.`
    #[error("only variables scoped with 'env.' are supported: `{0}`")]
    UnsupportedScope(String),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Group 1: dotted key, group 2: optional default("...") value
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder regex is valid")
    })
}

/// Expand `{{ env.VAR }}` and `{{ env.VAR | default("x") }}` placeholders
///
/// Runs on the raw TOML text before deserialization. Comment lines are left
/// untouched so documented examples never require their variables.
pub fn expand_env(input: &str) -> Result<String, EnvError> {
    let mut lines = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
            continue;
        }

        let mut failure = None;
        let expanded = placeholder().replace_all(line, |captures: &Captures<'_>| {
            resolve(captures).unwrap_or_else(|error| {
                if failure.is_none() {
                    failure = Some(error);
                }
                String::new()
            })
        });

        if let Some(error) = failure {
            return Err(error);
        }
        lines.push(expanded.into_owned());
    }

    let mut output = lines.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn resolve(captures: &Captures<'_>) -> Result<String, EnvError> {
    let key = &captures[1];
    let Some(name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        return Err(EnvError::UnsupportedScope(key.to_owned()));
    };

    match (std::env::var(name), captures.get(2)) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.as_str().to_owned()),
        (Err(_), None) => Err(EnvError::Missing(name.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let input = "depth = 16\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn expands_set_variables() {
        temp_env::with_vars([("FAULTLINE_CRATE", Some("billing")), ("FAULTLINE_DEPTH", Some("8"))], || {
            let result = expand_env("prefix = \"{{ env.FAULTLINE_CRATE }}\"\ndepth = {{env.FAULTLINE_DEPTH}}").unwrap();
            assert_eq!(result, "prefix = \"billing\"\ndepth = 8");
        });
    }

    #[test]
    fn missing_variable_is_reported() {
        temp_env::with_var_unset("FAULTLINE_MISSING", || {
            let err = expand_env("key = \"{{ env.FAULTLINE_MISSING }}\"").unwrap_err();
            assert_eq!(err, EnvError::Missing("FAULTLINE_MISSING".to_owned()));
        });
    }

    #[test]
    fn default_applies_only_when_unset() {
        temp_env::with_var_unset("FAULTLINE_OPTIONAL", || {
            let result = expand_env("key = \"{{ env.FAULTLINE_OPTIONAL | default(\"x-trace-id\") }}\"").unwrap();
            assert_eq!(result, "key = \"x-trace-id\"");
        });
        temp_env::with_var("FAULTLINE_OPTIONAL", Some("x-corr-id"), || {
            let result = expand_env("key = \"{{ env.FAULTLINE_OPTIONAL | default(\"x-trace-id\") }}\"").unwrap();
            assert_eq!(result, "key = \"x-corr-id\"");
        });
    }

    #[test]
    fn other_scopes_are_rejected() {
        let err = expand_env("key = \"{{ vault.TOKEN }}\"").unwrap_err();
        assert_eq!(err, EnvError::UnsupportedScope("vault.TOKEN".to_owned()));
    }

    #[test]
    fn comments_are_not_expanded() {
        temp_env::with_var_unset("FAULTLINE_COMMENTED", || {
            let input = "  # key = \"{{ env.FAULTLINE_COMMENTED }}\"";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }
}
