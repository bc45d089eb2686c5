use std::path::Path;

use http::HeaderName;

use crate::{Config, MAX_STACK_DEPTH};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable expansion, TOML parsing or
    /// validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the stack filter or response settings are unusable
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_stack_config()?;
        self.validate_response_config()?;
        Ok(())
    }

    fn validate_stack_config(&self) -> anyhow::Result<()> {
        let stack = &self.stack;

        if stack.depth == 0 || stack.depth > MAX_STACK_DEPTH {
            anyhow::bail!("stack.depth must be between 1 and {MAX_STACK_DEPTH}");
        }

        if stack.module_prefixes.is_empty() {
            anyhow::bail!("stack.module_prefixes must name at least one module prefix");
        }

        let all_prefixes = stack.module_prefixes.iter().chain(&stack.exclude_prefixes);
        if all_prefixes.clone().any(|prefix| prefix.trim().is_empty()) {
            anyhow::bail!("stack prefixes must not be empty strings");
        }
        if let Some(prefix) = all_prefixes.clone().find(|prefix| prefix.contains(char::is_whitespace)) {
            anyhow::bail!("stack prefix '{prefix}' must not contain whitespace");
        }

        Ok(())
    }

    fn validate_response_config(&self) -> anyhow::Result<()> {
        HeaderName::try_from(self.response.request_id_header.as_str()).map_err(|e| {
            anyhow::anyhow!(
                "response.request_id_header '{}' is not a valid header name: {e}",
                self.response.request_id_header
            )
        })?;

        Ok(())
    }
}
