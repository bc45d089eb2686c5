use std::sync::Arc;

use axum::Json;
use axum::response::{IntoResponse, Response};
use faultline_error::{ClassifiedError, Fault, HttpError};
use http::StatusCode;

/// Error returned by handlers
///
/// Anything convertible into a [`Fault`] converts into an `ApiError`, so
/// handlers can use `?` directly. On its own it renders an English body;
/// the [`error_handling`](crate::error_handling) middleware re-renders it
/// for the client's locale.
#[derive(Debug)]
pub struct ApiError(Fault);

impl ApiError {
    pub const fn fault(&self) -> &Fault {
        &self.0
    }

    pub fn into_fault(self) -> Fault {
        self.0
    }
}

impl<E> From<E> for ApiError
where
    E: Into<Fault>,
{
    fn from(error: E) -> Self {
        Self(error.into())
    }
}

/// Marker left on responses produced from an [`ApiError`]
#[derive(Clone)]
pub(crate) struct Reported(pub(crate) Arc<Fault>);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let fault = Arc::new(self.0);
        let mut response = ErrorResponse::new(&fault, "").into_response();
        response.extensions_mut().insert(Reported(fault));
        response
    }
}

/// Status and public body for a failure
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    pub status: StatusCode,
    pub body: ClassifiedError,
}

impl ErrorResponse {
    /// Extract the public body of `fault` for a client speaking `accept_language`
    pub fn new(fault: &Fault, accept_language: &str) -> Self {
        let body = fault.extract(accept_language);
        Self {
            status: body.status_code(),
            body,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
