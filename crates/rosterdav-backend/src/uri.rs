//! Resource URI handling.
//!
//! A resource URI is the underlying stable identity plus an extension;
//! stripping the extension must recover the identity used for lookup.
//! Suffix matching is exact and case-sensitive.

use uuid::Uuid;

use crate::error::{DavError, DavResult};

/// Strips `suffix` from `uri`, requiring a non-empty stem.
#[must_use]
pub fn strip_suffix<'a>(uri: &'a str, suffix: &str) -> Option<&'a str> {
    uri.strip_suffix(suffix).filter(|stem| !stem.is_empty())
}

/// ## Summary
/// Recovers the stable identity from a resource URI.
///
/// ## Errors
/// Returns `NotFound` when the suffix does not match exactly or the stem is
/// not a UUID; a malformed URI names nothing.
pub fn resource_identity(uri: &str, suffix: &str) -> DavResult<Uuid> {
    let stem =
        strip_suffix(uri, suffix).ok_or_else(|| DavError::NotFound(format!("resource {uri}")))?;
    Uuid::parse_str(stem).map_err(|_e| DavError::NotFound(format!("resource {uri}")))
}
