use serde::Deserialize;

/// HTTP boundary behavior
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponseConfig {
    /// Include the captured call path in response bodies
    #[serde(default)]
    pub expose_stack_trace: bool,
    /// Request header whose value is echoed as `request_id`
    #[serde(default = "default_request_id_header")]
    pub request_id_header: String,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            expose_stack_trace: false,
            request_id_header: default_request_id_header(),
        }
    }
}

fn default_request_id_header() -> String {
    "x-request-id".to_owned()
}
