use std::fmt;

use faultline_core::{ErrorKind, HttpError, Locale, translate};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Public face of a failure: a catalog kind plus optional overrides
///
/// This is what API consumers receive. The HTTP status is applied to the
/// transport response and `from` only feeds diagnostics, so neither is
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedError {
    /// Catalog id of the kind
    pub id: u32,
    /// HTTP status of the kind, restored from the catalog when decoding
    #[serde(skip)]
    pub status: Option<StatusCode>,
    /// Message overriding the catalog default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Opaque payload for the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Rendered call path, only present when the boundary exposes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
    /// Cumulative context describing where the error was classified
    #[serde(skip)]
    pub from: Option<String>,
}

impl ClassifiedError {
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            id: kind.id(),
            status: Some(kind.status()),
            message: None,
            data: None,
            request_id: None,
            stack_trace: None,
            from: None,
        }
    }

    /// Parse a serialized body
    ///
    /// Returns `None` for anything that is not a classified error (invalid
    /// JSON or a zero id). The status is looked up in the catalog.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        let mut decoded: Self = serde_json::from_slice(bytes).ok()?;
        if decoded.id == 0 {
            return None;
        }

        decoded.status = ErrorKind::lookup(decoded.id).map(ErrorKind::status);
        Some(decoded)
    }

    /// Registered kind of this error, if the id is known
    pub fn kind(&self) -> Option<ErrorKind> {
        ErrorKind::lookup(self.id)
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    #[must_use]
    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Add context in front of any existing `from` (`"new: old"`)
    pub fn prepend_from(&mut self, context: impl Into<String>) {
        let context = context.into();
        self.from = Some(match self.from.take() {
            Some(existing) if !existing.is_empty() => format!("{context}: {existing}"),
            _ => context,
        });
    }

    /// Message override, or the English catalog message
    pub fn text(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or_else(|| faultline_core::catalog::message(self.id, Locale::AmericanEnglish))
    }

    /// Compact render used inside aggregate summaries: `message: from`
    pub fn light(&self) -> String {
        match self.from.as_deref() {
            Some(from) if !from.is_empty() => format!("{}: {from}", self.text()),
            _ => self.text().to_owned(),
        }
    }

    /// Fill the status and message for a client speaking `accept_language`
    #[must_use]
    pub fn localized(mut self, accept_language: &str) -> Self {
        self.status.get_or_insert(ErrorKind::UNKNOWN_ERROR.status());
        if self.message.is_none() {
            self.message = Some(translate(self.id, accept_language).to_owned());
        }
        self
    }
}

impl From<ErrorKind> for ClassifiedError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())?;
        match self.from.as_deref() {
            Some(from) if !from.is_empty() => write!(f, " (from: {from})"),
            _ => Ok(()),
        }
    }
}

impl std::error::Error for ClassifiedError {}

impl HttpError for ClassifiedError {
    fn status_code(&self) -> StatusCode {
        self.status.unwrap_or(ErrorKind::UNKNOWN_ERROR.status())
    }

    fn kind_id(&self) -> u32 {
        self.id
    }

    fn client_message(&self, accept_language: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| translate(self.id, accept_language).to_owned())
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use serde_json::json;

    use super::*;

    #[test]
    fn wire_shape_omits_status_and_from() {
        let error = ClassifiedError::new(ErrorKind::NOT_FOUND)
            .localized("en-US")
            .with_request_id("req-42")
            .with_from("loading project KEY-1");

        assert_snapshot!(
            serde_json::to_string(&error).unwrap(),
            @r#"{"id":38,"message":"resource not found","request_id":"req-42"}"#
        );
    }

    #[test]
    fn optional_fields_are_serialized_when_present() {
        let error = ClassifiedError::new(ErrorKind::FORBIDDEN)
            .with_message("no access to KEY")
            .with_data(json!({"project": "KEY"}))
            .with_stack_trace("handler>load_project");

        assert_snapshot!(
            serde_json::to_string(&error).unwrap(),
            @r#"{"id":11,"message":"no access to KEY","data":{"project":"KEY"},"stack_trace":"handler>load_project"}"#
        );
    }

    #[test]
    fn renders() {
        let bare = ClassifiedError::new(ErrorKind::NOT_FOUND);
        assert_eq!(bare.to_string(), "resource not found");
        assert_eq!(bare.light(), "resource not found");

        let annotated = bare.with_from("loading project KEY-1");
        assert_eq!(annotated.to_string(), "resource not found (from: loading project KEY-1)");
        assert_eq!(annotated.light(), "resource not found: loading project KEY-1");
    }

    #[test]
    fn prepend_from_accumulates() {
        let mut error = ClassifiedError::new(ErrorKind::NOT_FOUND);
        error.prepend_from("fetching row");
        error.prepend_from("loading project KEY-1");

        assert_eq!(error.from.as_deref(), Some("loading project KEY-1: fetching row"));
    }

    #[test]
    fn localized_fills_missing_message_only() {
        let french = ClassifiedError::new(ErrorKind::NOT_FOUND).localized("fr-FR,fr;q=0.9");
        assert_eq!(french.message.as_deref(), Some("la ressource n'existe pas"));

        let custom = ClassifiedError::new(ErrorKind::NOT_FOUND)
            .with_message("no such project")
            .localized("fr");
        assert_eq!(custom.message.as_deref(), Some("no such project"));
    }

    #[test]
    fn missing_status_defaults_to_unknown() {
        let decoded = ClassifiedError::decode(br#"{"id": 4242, "message": "from a newer peer"}"#).unwrap();
        assert_eq!(decoded.status, None);
        assert_eq!(decoded.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(decoded.localized("").status, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn decode_restores_status() {
        let decoded = ClassifiedError::decode(br#"{"id": 38, "message": "resource not found"}"#).unwrap();
        assert_eq!(decoded.kind(), Some(ErrorKind::NOT_FOUND));
        assert_eq!(decoded.status, Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn decode_rejects_non_errors() {
        assert_eq!(ClassifiedError::decode(b"not json"), None);
        assert_eq!(ClassifiedError::decode(br#"{"message": "no id"}"#), None);
        assert_eq!(ClassifiedError::decode(br#"{"id": 0}"#), None);
    }
}
