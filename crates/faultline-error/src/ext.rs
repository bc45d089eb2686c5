use std::fmt;

use faultline_core::ErrorKind;
use serde_json::Value;

use crate::Fault;

/// [`Fault`] transitions applied to the error side of a `Result`
///
/// `Ok` values pass through untouched, so a success is never turned into a
/// failure by classifying it.
pub trait ResultExt<T> {
    /// See [`Fault::classify`]
    fn classify(self, kind: ErrorKind) -> Result<T, Fault>;

    /// See [`Fault::annotate`]
    fn annotate(self, context: impl Into<String>) -> Result<T, Fault>;

    /// See [`Fault::wrap`]
    fn wrap<C>(self, message: C) -> Result<T, Fault>
    where
        C: fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// See [`Fault::force_stack`]
    fn force_stack(self) -> Result<T, Fault>;

    /// See [`Fault::with_data`]
    fn with_data(self, data: Value) -> Result<T, Fault>;

    /// See [`Fault::or_fallback`]
    fn or_fallback(self, kind: ErrorKind, context: impl Into<String>) -> Result<T, Fault>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Fault>,
{
    fn classify(self, kind: ErrorKind) -> Result<T, Fault> {
        self.map_err(|error| error.into().classify(kind))
    }

    fn annotate(self, context: impl Into<String>) -> Result<T, Fault> {
        self.map_err(|error| error.into().annotate(context))
    }

    fn wrap<C>(self, message: C) -> Result<T, Fault>
    where
        C: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.map_err(|error| error.into().wrap(message))
    }

    fn force_stack(self) -> Result<T, Fault> {
        self.map_err(|error| error.into().force_stack())
    }

    fn with_data(self, data: Value) -> Result<T, Fault> {
        self.map_err(|error| error.into().with_data(data))
    }

    fn or_fallback(self, kind: ErrorKind, context: impl Into<String>) -> Result<T, Fault> {
        self.map_err(|error| error.into().or_fallback(kind, context))
    }
}
