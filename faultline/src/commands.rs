use std::io::Read;
use std::path::Path;

use anyhow::Context;
use faultline_config::Config;
use faultline_core::{ErrorKind, Locale, translate};
use faultline_error::{ClassifiedError, HttpError};

/// One line per kind: id, status, name and message
pub fn kinds(accept_language: &str) -> String {
    let locale = Locale::negotiate(accept_language);

    ErrorKind::all()
        .map(|kind| {
            format!(
                "{:>4}  {}  {:<40}  {}\n",
                kind.id(),
                kind.status().as_u16(),
                kind.name(),
                kind.message(locale)
            )
        })
        .collect()
}

pub fn translate_id(id: u32, accept_language: &str) -> String {
    let message = translate(id, accept_language);
    if ErrorKind::lookup(id).is_none() {
        tracing::warn!(id, "unregistered kind id, using the unknown-error message");
    }
    message.to_owned()
}

/// Describe a serialized error body
///
/// # Errors
///
/// Returns an error if the body is not a classified error
pub fn decode(body: &[u8]) -> anyhow::Result<String> {
    let decoded = ClassifiedError::decode(body).context("input is not a serialized error")?;
    let name = decoded.kind().map_or("unregistered", ErrorKind::name);

    let mut lines = vec![format!(
        "{name} (id {}, status {}): {}",
        decoded.id,
        decoded.status_code().as_u16(),
        decoded.text()
    )];
    if let Some(request_id) = &decoded.request_id {
        lines.push(format!("request id: {request_id}"));
    }
    if let Some(stack_trace) = &decoded.stack_trace {
        lines.push(format!("stack trace: {stack_trace}"));
    }
    if let Some(data) = &decoded.data {
        lines.push(format!("data: {data}"));
    }

    Ok(lines.join("\n"))
}

/// Read a body from `file`, or stdin without one
///
/// # Errors
///
/// Returns an error if the input cannot be read
pub fn read_input(file: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut body = Vec::new();
            std::io::stdin().read_to_end(&mut body).context("failed to read stdin")?;
            Ok(body)
        }
    }
}

/// Summary of the effective configuration
pub fn describe(config: &Config) -> String {
    let stack = &config.stack;
    format!(
        "stack: depth {}, modules [{}], excluded [{}], {} ignored functions\n\
         response: request id header {}, stack traces {}\n\
         telemetry: filter {:?}, format {:?}",
        stack.depth,
        stack.module_prefixes.join(", "),
        stack.exclude_prefixes.join(", "),
        stack.ignored_functions.len(),
        config.response.request_id_header,
        if config.response.expose_stack_trace { "exposed" } else { "hidden" },
        config.telemetry.log_filter,
        config.telemetry.format,
    )
}
