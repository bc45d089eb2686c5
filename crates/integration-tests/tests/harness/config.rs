//! Programmatic configuration builder for integration tests

use faultline_config::{Config, ResponseConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Include captured call paths in error bodies
    pub fn with_stack_traces(mut self) -> Self {
        self.config.response.expose_stack_trace = true;
        self
    }

    /// Echo a different request header as `request_id`
    pub fn with_request_id_header(mut self, header: &str) -> Self {
        self.config.response = ResponseConfig {
            request_id_header: header.to_owned(),
            ..self.config.response
        };
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
