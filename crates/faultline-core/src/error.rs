use http::StatusCode;

use crate::{ErrorKind, Locale};

/// Values that can be turned into an HTTP error response
///
/// Implemented by every error shape of the framework. The boundary layer
/// uses it to pick the transport status and the body message, keeping the
/// error values themselves decoupled from any web framework.
pub trait HttpError: std::fmt::Display {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Catalog id exposed to API consumers
    fn kind_id(&self) -> u32;

    /// Message safe to expose to API consumers, in the negotiated locale
    fn client_message(&self, accept_language: &str) -> String;
}

impl HttpError for ErrorKind {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn kind_id(&self) -> u32 {
        self.id()
    }

    fn client_message(&self, accept_language: &str) -> String {
        self.message(Locale::negotiate(accept_language)).to_owned()
    }
}
