use std::error::Error as StdError;
use std::fmt;

use faultline_core::ErrorKind;
use faultline_stack::StackTrace;

use crate::ClassifiedError;

/// A classified failure together with its root cause and call path
///
/// The stack is captured once, when the failure first crosses a
/// classification boundary. Later re-classification only swaps
/// `classification`.
#[derive(Debug)]
pub struct CausalError {
    pub(crate) root: Option<anyhow::Error>,
    stack: StackTrace,
    pub(crate) classification: ClassifiedError,
}

impl CausalError {
    /// Capture the current call path and attach it to `classification`
    pub fn capture(root: Option<anyhow::Error>, classification: ClassifiedError) -> Self {
        Self {
            root,
            stack: StackTrace::capture(),
            classification,
        }
    }

    /// Original failure, if any
    pub const fn root(&self) -> Option<&anyhow::Error> {
        self.root.as_ref()
    }

    pub const fn stack(&self) -> &StackTrace {
        &self.stack
    }

    pub const fn classification(&self) -> &ClassifiedError {
        &self.classification
    }

    /// Swap the kind, keeping the accumulated `from` context and payload
    pub(crate) fn reclassify(&mut self, kind: ErrorKind) {
        let previous = std::mem::replace(&mut self.classification, ClassifiedError::new(kind));
        self.classification.from = previous.from;
        self.classification.data = previous.data;
    }

    /// Root chain rendered as `outer: inner`, empty without a root
    pub(crate) fn cause(&self) -> String {
        self.root.as_ref().map(|root| format!("{root:#}")).unwrap_or_default()
    }
}

/// Diagnostic render: `path: classification (caused by: root)`
impl fmt::Display for CausalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.stack.render();
        if !path.is_empty() {
            write!(f, "{path}: ")?;
        }
        write!(f, "{}", self.classification)?;

        let cause = self.cause();
        if !cause.is_empty() && self.classification.from.as_deref() != Some(cause.as_str()) {
            write!(f, " (caused by: {cause})")?;
        }

        Ok(())
    }
}

impl StdError for CausalError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.root.as_deref().map(|root| root as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reclassify_keeps_context_and_stack() {
        let mut causal = CausalError::capture(
            Some(anyhow::anyhow!("connection refused")),
            ClassifiedError::new(ErrorKind::UNKNOWN_ERROR).with_from("connection refused"),
        );
        let stack = causal.stack().clone();

        causal.reclassify(ErrorKind::NOT_FOUND);

        assert_eq!(causal.classification().id, ErrorKind::NOT_FOUND.id());
        assert_eq!(causal.classification().from.as_deref(), Some("connection refused"));
        assert!(causal.stack().same_capture(&stack));
    }

    #[test]
    fn cause_is_omitted_when_it_repeats_from() {
        let causal = CausalError::capture(
            Some(anyhow::anyhow!("connection refused")),
            ClassifiedError::new(ErrorKind::NOT_FOUND).with_from("connection refused"),
        );

        let rendered = causal.to_string();
        assert!(rendered.ends_with("resource not found (from: connection refused)"), "{rendered}");
        assert!(!rendered.contains("caused by"));
    }

    #[test]
    fn cause_chain_is_rendered() {
        let root = anyhow::anyhow!("connection refused").context("loading project KEY-1");
        let causal = CausalError::capture(Some(root), ClassifiedError::new(ErrorKind::NOT_FOUND));

        assert!(
            causal
                .to_string()
                .ends_with("resource not found (caused by: loading project KEY-1: connection refused)")
        );
        assert_eq!(causal.source().map(ToString::to_string).as_deref(), Some("loading project KEY-1"));
    }

    #[test]
    fn no_root_means_no_cause() {
        let causal = CausalError::capture(None, ClassifiedError::new(ErrorKind::FORBIDDEN));
        assert!(causal.source().is_none());
        assert!(causal.to_string().ends_with("forbidden"));
    }
}
