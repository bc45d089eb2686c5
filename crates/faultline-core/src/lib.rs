//! Error kind catalog for faultline
//!
//! Holds the closed registry of [`ErrorKind`]s, their default messages in
//! every supported [`Locale`], and `Accept-Language` negotiation.

#![allow(clippy::must_use_candidate)]

pub mod catalog;
mod error;
mod kind;
pub mod locale;

pub use error::HttpError;
pub use kind::ErrorKind;
pub use locale::{LanguageRange, Locale, LocaleError, parse_accept_language};

/// Default message of kind `id` for the given `Accept-Language` value
///
/// Never fails: unknown ids use the unknown-error message and unusable
/// language lists resolve to American English.
pub fn translate(id: u32, accept_language: &str) -> &'static str {
    catalog::message(id, Locale::negotiate(accept_language))
}
