use std::error::Error as StdError;
use std::fmt;

use faultline_core::{ErrorKind, HttpError};
use http::StatusCode;
use serde_json::Value;

use crate::{AggregateError, CausalError, ClassifiedError};

/// Any error value the framework accepts
///
/// Every operation matches on the shape exhaustively. Transitions consume
/// the value and return the updated one.
#[derive(Debug)]
pub enum Fault {
    /// Failure that has not been classified yet
    Raw(anyhow::Error),
    /// Bare kind without a cause or call path
    Classified(ClassifiedError),
    /// Classified failure carrying its cause and call path
    Causal(Box<CausalError>),
    /// Several failures reported together
    Aggregate(AggregateError),
}

impl Fault {
    /// Wrap a foreign failure
    pub fn raw(error: impl Into<anyhow::Error>) -> Self {
        Self::Raw(error.into())
    }

    /// Unclassified failure made from a plain message
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::Raw(anyhow::Error::msg(message))
    }

    /// Assign `kind`, capturing the call path if none was captured yet
    ///
    /// An already captured path and the accumulated context are kept. For
    /// an aggregate the context summarizes every element; the kind is always
    /// the one given, never inferred from the elements.
    #[must_use]
    pub fn classify(self, kind: ErrorKind) -> Self {
        match self {
            Self::Causal(mut causal) => {
                causal.reclassify(kind);
                Self::Causal(causal)
            }
            Self::Aggregate(aggregate) => {
                let classification = ClassifiedError::new(kind).with_from(aggregate.summary());
                let root = anyhow::Error::new(aggregate);
                Self::Causal(Box::new(CausalError::capture(Some(root), classification)))
            }
            Self::Classified(previous) => {
                let classification = ClassifiedError::new(kind).with_from(previous.to_string());
                let root = anyhow::Error::new(previous);
                Self::Causal(Box::new(CausalError::capture(Some(root), classification)))
            }
            Self::Raw(root) => {
                let classification = ClassifiedError::new(kind).with_from(format!("{root:#}"));
                Self::Causal(Box::new(CausalError::capture(Some(root), classification)))
            }
        }
    }

    /// Record where the failure was (re-)classified
    ///
    /// The context is put in front of any existing one. A bare kind keeps
    /// its kind; an unclassified value becomes a bad request.
    #[must_use]
    pub fn annotate(self, context: impl Into<String>) -> Self {
        match self {
            Self::Causal(mut causal) => {
                causal.classification.prepend_from(context);
                Self::Causal(causal)
            }
            Self::Classified(_) => self.force_stack().annotate(context),
            Self::Raw(_) | Self::Aggregate(_) => self.classify(ErrorKind::WRONG_REQUEST).annotate(context),
        }
    }

    /// Add a message to the cause chain without touching kind or context
    ///
    /// Unclassified values are classified as unknown.
    #[must_use]
    pub fn wrap<C>(self, message: C) -> Self
    where
        C: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        match self {
            Self::Causal(mut causal) => {
                causal.root = Some(match causal.root.take() {
                    Some(root) => root.context(message),
                    None => anyhow::Error::msg(message),
                });
                Self::Causal(causal)
            }
            Self::Classified(classification) => Self::Causal(Box::new(CausalError::capture(
                Some(anyhow::Error::msg(message)),
                classification,
            ))),
            Self::Raw(root) => Self::Raw(root.context(message)).classify(ErrorKind::UNKNOWN_ERROR),
            Self::Aggregate(_) => self.classify(ErrorKind::UNKNOWN_ERROR).wrap(message),
        }
    }

    /// Make sure a call path is captured, keeping an existing one
    #[must_use]
    pub fn force_stack(self) -> Self {
        match self {
            Self::Causal(_) => self,
            Self::Classified(classification) => Self::Causal(Box::new(CausalError::capture(None, classification))),
            Self::Raw(_) | Self::Aggregate(_) => self.classify(ErrorKind::UNKNOWN_ERROR),
        }
    }

    /// Attach an opaque payload for the client
    #[must_use]
    pub fn with_data(self, data: Value) -> Self {
        match self.force_stack() {
            Self::Causal(mut causal) => {
                causal.classification.data = Some(data);
                Self::Causal(causal)
            }
            other => other,
        }
    }

    /// Wrap `root`, taking the classification from another error value
    pub fn caused_by(root: impl Into<anyhow::Error>, source: impl Into<Self>) -> Self {
        let classification = match source.into() {
            Self::Causal(causal) => causal.classification,
            Self::Classified(classification) => classification,
            other => other.extract(""),
        };

        Self::Causal(Box::new(CausalError::capture(Some(root.into()), classification)))
    }

    /// Classify as `kind` with `context` unless a kind was already assigned
    #[must_use]
    pub fn or_fallback(self, kind: ErrorKind, context: impl Into<String>) -> Self {
        if self.is_unknown() {
            self.classify(kind).annotate(context)
        } else {
            self
        }
    }

    /// Whether the resolved kind is `kind`
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind_id() == kind.id()
    }

    pub fn is_unknown(&self) -> bool {
        self.is(ErrorKind::UNKNOWN_ERROR)
    }

    /// Classification, when one was assigned
    pub fn classification(&self) -> Option<&ClassifiedError> {
        match self {
            Self::Classified(classification) => Some(classification),
            Self::Causal(causal) => Some(causal.classification()),
            Self::Raw(_) | Self::Aggregate(_) => None,
        }
    }

    /// Original failure, when there is one
    pub fn root(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Raw(root) => Some(root),
            Self::Causal(causal) => causal.root(),
            Self::Classified(_) | Self::Aggregate(_) => None,
        }
    }

    /// Innermost cause of the chain
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        match self {
            Self::Raw(root) => root.root_cause(),
            Self::Causal(causal) => match causal.root() {
                Some(root) => root.root_cause(),
                None => causal.classification(),
            },
            Self::Classified(classification) => classification,
            Self::Aggregate(aggregate) => aggregate,
        }
    }

    pub const fn has_stack(&self) -> bool {
        matches!(self, Self::Causal(_))
    }

    /// Rendered call path, when one was captured
    pub fn stack_trace(&self) -> Option<&str> {
        match self {
            Self::Causal(causal) => Some(causal.stack().render()),
            _ => None,
        }
    }

    /// Public representation for a client speaking `accept_language`
    ///
    /// Total: foreign failures become the unknown kind, aggregates become
    /// the unknown kind with a summary of every element.
    pub fn extract(&self, accept_language: &str) -> ClassifiedError {
        let classification = match self {
            Self::Aggregate(aggregate) => {
                let summary = aggregate
                    .iter()
                    .map(|fault| fault.extract(accept_language).light())
                    .collect::<Vec<_>>()
                    .join(", ");
                ClassifiedError::new(ErrorKind::UNKNOWN_ERROR).with_message(summary)
            }
            Self::Causal(causal) => causal.classification().clone(),
            Self::Classified(classification) => classification.clone(),
            Self::Raw(_) => ClassifiedError::new(ErrorKind::UNKNOWN_ERROR),
        };

        classification.localized(accept_language)
    }

    /// Full diagnostic render, including the call path and the root chain
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Causal(causal) => causal.to_string(),
            _ => self.to_string(),
        }
    }
}

/// Full render: `message (from: context)`
impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(root) => write!(f, "{root:#}"),
            Self::Classified(classification) => fmt::Display::fmt(classification, f),
            Self::Causal(causal) => fmt::Display::fmt(causal.classification(), f),
            Self::Aggregate(aggregate) => fmt::Display::fmt(aggregate, f),
        }
    }
}

impl StdError for Fault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Raw(root) => root.source(),
            Self::Causal(causal) => causal.source(),
            Self::Classified(_) | Self::Aggregate(_) => None,
        }
    }
}

impl HttpError for Fault {
    fn status_code(&self) -> StatusCode {
        self.classification()
            .map_or(ErrorKind::UNKNOWN_ERROR.status(), HttpError::status_code)
    }

    fn kind_id(&self) -> u32 {
        self.classification()
            .map_or(ErrorKind::UNKNOWN_ERROR.id(), |classification| classification.id)
    }

    fn client_message(&self, accept_language: &str) -> String {
        self.extract(accept_language).text().to_owned()
    }
}

impl From<anyhow::Error> for Fault {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<Self>() {
            Ok(fault) => fault,
            Err(error) => Self::Raw(error),
        }
    }
}

impl From<ErrorKind> for Fault {
    fn from(kind: ErrorKind) -> Self {
        Self::Classified(ClassifiedError::new(kind))
    }
}

impl From<ClassifiedError> for Fault {
    fn from(classification: ClassifiedError) -> Self {
        Self::Classified(classification)
    }
}

impl From<CausalError> for Fault {
    fn from(causal: CausalError) -> Self {
        Self::Causal(Box::new(causal))
    }
}

impl From<AggregateError> for Fault {
    fn from(aggregate: AggregateError) -> Self {
        Self::Aggregate(aggregate)
    }
}

impl From<std::io::Error> for Fault {
    fn from(error: std::io::Error) -> Self {
        Self::Raw(error.into())
    }
}

impl From<serde_json::Error> for Fault {
    fn from(error: serde_json::Error) -> Self {
        Self::Raw(error.into())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use serde_json::json;

    use super::*;

    fn connection_refused() -> Fault {
        Fault::raw(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"))
    }

    #[test]
    fn classify_raw_captures_once() {
        let fault = connection_refused().classify(ErrorKind::NOT_FOUND);

        assert!(fault.has_stack());
        assert!(fault.is(ErrorKind::NOT_FOUND));
        assert_eq!(fault.to_string(), "resource not found (from: connection refused)");
    }

    #[test]
    fn reclassify_resolves_to_latest_kind_and_keeps_root() {
        let first = connection_refused().classify(ErrorKind::REPO_OPERATION_TIMEOUT);
        let Fault::Causal(causal) = &first else {
            panic!("expected a causal error");
        };
        let stack = causal.stack().clone();

        let second = first.classify(ErrorKind::NOT_FOUND);
        let Fault::Causal(causal) = &second else {
            panic!("expected a causal error");
        };

        assert!(second.is(ErrorKind::NOT_FOUND));
        assert!(!second.is(ErrorKind::REPO_OPERATION_TIMEOUT));
        assert!(causal.stack().same_capture(&stack));

        let root = second.root().unwrap();
        assert_eq!(root.to_string(), "connection refused");
        assert_eq!(
            root.downcast_ref::<io::Error>().map(io::Error::kind),
            Some(io::ErrorKind::ConnectionRefused)
        );
    }

    #[test]
    fn force_stack_is_idempotent() {
        let once = Fault::from(ErrorKind::FORBIDDEN).force_stack();
        let path = once.stack_trace().unwrap().to_owned();
        let twice = once.force_stack();

        assert_eq!(twice.stack_trace(), Some(path.as_str()));
        assert!(twice.root().is_none());
        assert!(twice.is(ErrorKind::FORBIDDEN));
    }

    #[test]
    fn force_stack_keeps_the_first_capture_of_raw_values() {
        let once = connection_refused().force_stack();
        let Fault::Causal(first) = &once else {
            panic!("expected a causal error");
        };
        let stack = first.stack().clone();
        let path = once.stack_trace().map(str::to_owned);

        let twice = once.force_stack();
        let Fault::Causal(second) = &twice else {
            panic!("expected a causal error");
        };

        assert!(second.stack().same_capture(&stack));
        assert_eq!(twice.stack_trace().map(str::to_owned), path);
        assert!(twice.is_unknown());
        assert_eq!(twice.root().map(ToString::to_string).as_deref(), Some("connection refused"));
    }

    #[test]
    fn force_stack_keeps_the_first_capture_of_aggregates() {
        let aggregate: AggregateError = [connection_refused(), Fault::from(ErrorKind::FORBIDDEN)]
            .into_iter()
            .collect();

        let once = Fault::from(aggregate).force_stack();
        let Fault::Causal(first) = &once else {
            panic!("expected a causal error");
        };
        let stack = first.stack().clone();

        let twice = once.force_stack();
        let Fault::Causal(second) = &twice else {
            panic!("expected a causal error");
        };

        assert!(second.stack().same_capture(&stack));
        assert!(twice.is_unknown());
        assert_eq!(
            twice.to_string(),
            "internal server error (from: internal server error: connection refused, forbidden)"
        );
    }

    #[test]
    fn classify_bare_kind_keeps_it_as_root() {
        let fault = Fault::from(ErrorKind::FORBIDDEN).classify(ErrorKind::NOT_FOUND);

        assert!(fault.has_stack());
        assert!(fault.is(ErrorKind::NOT_FOUND));
        assert_eq!(fault.to_string(), "resource not found (from: forbidden)");

        let root = fault.root().unwrap();
        assert_eq!(
            root.downcast_ref::<ClassifiedError>().map(|previous| previous.id),
            Some(ErrorKind::FORBIDDEN.id())
        );
        assert_eq!(fault.root_cause().to_string(), "forbidden");
    }

    #[test]
    fn foreign_errors_are_unknown() {
        let fault = Fault::msg("disk on fire");

        assert!(fault.is_unknown());
        assert!(!fault.is(ErrorKind::NOT_FOUND));
        assert_eq!(fault.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let public = fault.extract("en-US");
        assert_eq!(public.id, ErrorKind::UNKNOWN_ERROR.id());
        assert_eq!(public.status, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(public.message.as_deref(), Some("internal server error"));
    }

    #[test]
    fn extract_localizes_bare_kind() {
        let public = Fault::from(ErrorKind::NOT_FOUND).extract("fr-FR,fr;q=0.9,en;q=0.8");
        assert_eq!(public.id, 38);
        assert_eq!(public.status, Some(StatusCode::NOT_FOUND));
        assert_eq!(public.message.as_deref(), Some("la ressource n'existe pas"));
    }

    #[test]
    fn annotate_prepends_context_without_recapture() {
        let fault = connection_refused().classify(ErrorKind::NOT_FOUND);
        let path = fault.stack_trace().map(str::to_owned);
        let fault = fault.annotate("loading project KEY-1");

        assert_eq!(fault.stack_trace().map(str::to_owned), path);
        assert_eq!(
            fault.to_string(),
            "resource not found (from: loading project KEY-1: connection refused)"
        );
    }

    #[test]
    fn annotate_promotes_bare_values() {
        let kind = Fault::from(ErrorKind::FORBIDDEN).annotate("checking permissions");
        assert!(kind.has_stack());
        assert!(kind.is(ErrorKind::FORBIDDEN));
        assert_eq!(kind.to_string(), "forbidden (from: checking permissions)");

        let raw = Fault::msg("bad payload").annotate("parsing body");
        assert!(raw.is(ErrorKind::WRONG_REQUEST));
        assert_eq!(raw.classification().and_then(|c| c.from.as_deref()), Some("parsing body: bad payload"));
    }

    #[test]
    fn wrap_extends_root_chain_only() {
        let fault = connection_refused()
            .classify(ErrorKind::NOT_FOUND)
            .wrap("loading project KEY-1");

        assert!(fault.is(ErrorKind::NOT_FOUND));
        assert_eq!(
            format!("{:#}", fault.root().unwrap()),
            "loading project KEY-1: connection refused"
        );
        assert_eq!(fault.to_string(), "resource not found (from: connection refused)");
    }

    #[test]
    fn wrap_defaults_unclassified_to_unknown() {
        let fault = connection_refused().wrap("loading project KEY-1");

        assert!(fault.has_stack());
        assert!(fault.is_unknown());
        assert_eq!(
            fault.to_string(),
            "internal server error (from: loading project KEY-1: connection refused)"
        );
    }

    #[test]
    fn with_data_reaches_the_client() {
        let public = Fault::from(ErrorKind::INVALID_ID)
            .with_data(json!({"field": "project_id"}))
            .extract("en");

        assert_eq!(public.data, Some(json!({"field": "project_id"})));
    }

    #[test]
    fn caused_by_takes_classification_from_source() {
        let fault = Fault::caused_by(anyhow::anyhow!("row missing"), ErrorKind::NOT_FOUND);
        assert!(fault.is(ErrorKind::NOT_FOUND));
        assert_eq!(fault.root_cause().to_string(), "row missing");

        let foreign = Fault::caused_by(anyhow::anyhow!("row missing"), Fault::msg("whatever"));
        assert!(foreign.is_unknown());
    }

    #[test]
    fn or_fallback_only_applies_to_unknown() {
        let unknown = connection_refused().or_fallback(ErrorKind::NOT_FOUND, "loading project KEY-1");
        assert!(unknown.is(ErrorKind::NOT_FOUND));
        assert_eq!(
            unknown.to_string(),
            "resource not found (from: loading project KEY-1: connection refused)"
        );

        let known = Fault::from(ErrorKind::FORBIDDEN).or_fallback(ErrorKind::NOT_FOUND, "ignored");
        assert!(known.is(ErrorKind::FORBIDDEN));
        assert!(!known.has_stack());
    }

    #[test]
    fn faults_survive_a_trip_through_anyhow() {
        let fault = Fault::from(ErrorKind::NOT_FOUND).force_stack();
        let back = Fault::from(anyhow::Error::new(fault));

        assert!(back.is(ErrorKind::NOT_FOUND));
        assert!(back.has_stack());
    }

    #[test]
    fn root_cause_without_root_is_the_classification() {
        let fault = Fault::from(ErrorKind::FORBIDDEN).force_stack();
        assert_eq!(fault.root_cause().to_string(), "forbidden");
    }
}
