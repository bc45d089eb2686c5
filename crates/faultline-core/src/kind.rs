use std::fmt;

use http::StatusCode;

use crate::{Locale, catalog};

/// Class of failure meaningful to API consumers
///
/// Every kind is a catalog constant such as [`ErrorKind::NOT_FOUND`]. Ids
/// are persisted and logged by consumers, so they are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorKind {
    id: u32,
    status: StatusCode,
}

impl ErrorKind {
    pub(crate) const fn new(id: u32, status: StatusCode) -> Self {
        Self { id, status }
    }

    /// Numeric identifier exposed on the wire
    pub const fn id(self) -> u32 {
        self.id
    }

    /// HTTP status applied to the transport response
    pub const fn status(self) -> StatusCode {
        self.status
    }

    /// Find the registered kind with the given id
    pub fn lookup(id: u32) -> Option<Self> {
        catalog::entry(id).map(|entry| entry.kind)
    }

    /// Iterate over every registered kind in id order
    pub fn all() -> impl Iterator<Item = Self> {
        catalog::entries().iter().map(|entry| entry.kind)
    }

    /// Symbolic name of the kind (e.g. `NOT_FOUND`)
    pub fn name(self) -> &'static str {
        catalog::entry(self.id).map_or("UNKNOWN_ERROR", |entry| entry.name)
    }

    /// Default message in the given locale
    pub fn message(self, locale: Locale) -> &'static str {
        catalog::message(self.id, locale)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message(Locale::AmericanEnglish))
    }
}
