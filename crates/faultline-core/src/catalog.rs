//! Registry of error kinds and their default messages
//!
//! The table is compiled in and indexed once on first lookup. Nothing in
//! here can be mutated after startup, so lookups are safe from any thread.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::{ErrorKind, Locale};

/// Declares every kind as an associated constant on [`ErrorKind`] together
/// with its row in the message table
macro_rules! catalog {
    ($($name:ident = $id:literal => $status:ident { en: $en:literal, fr: $fr:literal $(,)? }),* $(,)?) => {
        impl ErrorKind {
            $(
                #[doc = $en]
                pub const $name: Self = Self::new($id, StatusCode::$status);
            )*
        }

        pub(super) static ENTRIES: &[Entry] = &[
            $(
                Entry {
                    kind: ErrorKind::$name,
                    name: stringify!($name),
                    american_english: $en,
                    french: $fr,
                },
            )*
        ];
    };
}

mod entries;

/// A single row of the catalog
#[derive(Debug)]
pub struct Entry {
    /// Kind identified by this row
    pub kind: ErrorKind,
    /// Symbolic name (e.g. `NOT_FOUND`)
    pub name: &'static str,
    american_english: &'static str,
    french: &'static str,
}

impl Entry {
    /// Default message for the given locale
    pub const fn message(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::AmericanEnglish => self.american_english,
            Locale::French => self.french,
        }
    }
}

fn index() -> &'static HashMap<u32, &'static Entry> {
    static INDEX: OnceLock<HashMap<u32, &'static Entry>> = OnceLock::new();
    INDEX.get_or_init(|| entries::ENTRIES.iter().map(|entry| (entry.kind.id(), entry)).collect())
}

/// All registered entries in id order
pub fn entries() -> &'static [Entry] {
    entries::ENTRIES
}

/// Find the entry registered for `id`
pub fn entry(id: u32) -> Option<&'static Entry> {
    index().get(&id).copied()
}

/// Default message for `id` in `locale`
///
/// Unregistered ids resolve to the unknown-error message of the same locale.
pub fn message(id: u32, locale: Locale) -> &'static str {
    entry(id).unwrap_or_else(unknown).message(locale)
}

/// The unknown-error row, always first in the table
fn unknown() -> &'static Entry {
    &entries::ENTRIES[0]
}
