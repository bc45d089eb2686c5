//! Locale negotiation from `Accept-Language` values

use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

/// Longest subtag allowed by BCP 47
const MAX_SUBTAG_LEN: usize = 8;

/// Locales with a message catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum Locale {
    /// American English, the fallback for everything
    #[default]
    #[strum(serialize = "en-US")]
    AmericanEnglish,
    /// French
    #[strum(serialize = "fr")]
    French,
}

impl Locale {
    /// Resolve an `Accept-Language` value to the best supported locale
    ///
    /// Ranges are tried from the highest quality down; the first one whose
    /// primary language is supported wins. Empty, malformed or unmatched
    /// input resolves to American English.
    pub fn negotiate(accept_language: &str) -> Self {
        let Ok(ranges) = parse_accept_language(accept_language) else {
            return Self::default();
        };

        ranges
            .iter()
            .filter(|range| range.quality > 0.0)
            .find_map(|range| Self::matching(&range.tag))
            .unwrap_or_default()
    }

    fn matching(tag: &str) -> Option<Self> {
        if tag == "*" {
            return Some(Self::default());
        }

        let primary = tag.split(['-', '_']).next()?;
        if primary.eq_ignore_ascii_case("en") {
            Some(Self::AmericanEnglish)
        } else if primary.eq_ignore_ascii_case("fr") {
            Some(Self::French)
        } else {
            None
        }
    }
}

/// Errors raised while parsing an `Accept-Language` value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// A language tag is not well formed
    #[error("invalid language tag: {0:?}")]
    InvalidTag(String),

    /// A parameter or quality value is not well formed
    #[error("invalid quality value: {0:?}")]
    InvalidQuality(String),
}

/// One entry of a weighted language list
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange {
    /// Language tag as sent by the client (`fr-FR`, `en`, `*`)
    pub tag: String,
    /// Weight in `0.0..=1.0`, `1.0` when omitted
    pub quality: f32,
}

/// Parse a weighted language list such as `fr-FR,fr;q=0.9,en;q=0.8`
///
/// The result is ordered by descending quality; ranges of equal quality
/// keep the order in which the client sent them.
///
/// # Errors
///
/// Returns an error if a tag or a quality value is malformed
pub fn parse_accept_language(header: &str) -> Result<Vec<LanguageRange>, LocaleError> {
    let mut ranges = Vec::new();

    for item in header.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        let mut params = item.split(';');
        let tag = params.next().map(str::trim).unwrap_or_default();

        if !is_valid_tag(tag) {
            return Err(LocaleError::InvalidTag(tag.to_owned()));
        }

        let mut quality = 1.0;
        for param in params.map(str::trim) {
            let Some((key, value)) = param.split_once('=') else {
                return Err(LocaleError::InvalidQuality(param.to_owned()));
            };
            if key.trim().eq_ignore_ascii_case("q") {
                quality = parse_quality(value.trim())?;
            }
        }

        ranges.push(LanguageRange {
            tag: tag.to_owned(),
            quality,
        });
    }

    ranges.sort_by(|a, b| b.quality.total_cmp(&a.quality));

    Ok(ranges)
}

fn is_valid_tag(tag: &str) -> bool {
    if tag == "*" {
        return true;
    }

    let mut subtags = tag.split(['-', '_']);
    let primary_ok = subtags
        .next()
        .is_some_and(|primary| is_subtag(primary) && primary.chars().all(|c| c.is_ascii_alphabetic()));

    primary_ok && subtags.all(is_subtag)
}

fn is_subtag(subtag: &str) -> bool {
    (1..=MAX_SUBTAG_LEN).contains(&subtag.len()) && subtag.chars().all(|c| c.is_ascii_alphanumeric())
}

fn parse_quality(value: &str) -> Result<f32, LocaleError> {
    let invalid = || LocaleError::InvalidQuality(value.to_owned());

    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(invalid());
    }

    let quality: f32 = value.parse().map_err(|_| invalid())?;
    if (0.0..=1.0).contains(&quality) {
        Ok(quality)
    } else {
        Err(invalid())
    }
}
