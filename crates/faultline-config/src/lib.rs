#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod response;
pub mod stack;
pub mod telemetry;

use serde::Deserialize;

pub use env::EnvError;
pub use response::ResponseConfig;
pub use stack::{MAX_STACK_DEPTH, StackConfig};
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level faultline configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Call-path capture and filtering
    #[serde(default)]
    pub stack: StackConfig,
    /// HTTP boundary behavior
    #[serde(default)]
    pub response: ResponseConfig,
    /// Log output
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
