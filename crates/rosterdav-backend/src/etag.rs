//! `ETag` generation for synthesized resource bodies.

use sha2::{Digest, Sha256};

/// ## Summary
/// Generates an `ETag` from the serialized body using SHA256.
///
/// The `ETag` is the hex-encoded SHA256 hash of the content, wrapped in
/// quotes. Bodies are recomputed deterministically from row state, so the
/// same rows always hash to the same tag.
#[must_use]
pub fn generate_etag(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body);
    let hash = hasher.finalize();
    format!("\"{}\"", hex::encode(hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etag_is_quoted_hex() {
        let etag = generate_etag(b"BEGIN:VCALENDAR");
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert_eq!(etag.len(), 66);
        assert!(etag.trim_matches('"').chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn etag_is_deterministic() {
        assert_eq!(generate_etag(b"same"), generate_etag(b"same"));
        assert_ne!(generate_etag(b"same"), generate_etag(b"other"));
    }
}
