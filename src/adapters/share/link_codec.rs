//! Link Codec - converts a document to and from a URL-fragment-safe token.
//!
//! Encoding: compact JSON, percent-encoded, then base64 with the URL-safe
//! alphabet and no padding. Decoding inverts each step and runs the version
//! gate before the structure is interpreted.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::domain::proposal::{document_from_value, ProposalDocument};

/// Fragment parameter that carries the token in a share URL.
pub const STATE_PARAM: &str = "state";

/// Serializes a document into a share token.
pub fn encode(document: &ProposalDocument) -> String {
    // serde_json writes non-finite floats as null, so this only fails on a
    // broken Serialize impl.
    let json = serde_json::to_string(document).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to serialize document for link");
        String::from("{}")
    });
    let escaped = urlencoding::encode(&json);
    URL_SAFE_NO_PAD.encode(escaped.as_bytes())
}

/// Parses a share token. Any malformed or incompatible token yields `None`.
pub fn decode(token: &str) -> Option<ProposalDocument> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    // Also accept tokens produced with the standard alphabet or padding.
    let normalized: String = token
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = match URL_SAFE_NO_PAD.decode(normalized.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, "share token is not valid base64");
            return None;
        }
    };

    let escaped = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(error = %e, "share token payload is not UTF-8");
            return None;
        }
    };

    let json = match urlencoding::decode(&escaped) {
        Ok(json) => json,
        Err(e) => {
            tracing::debug!(error = %e, "share token payload is not percent-encoded UTF-8");
            return None;
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "share token payload is not JSON");
            return None;
        }
    };

    match document_from_value(value) {
        Ok(document) => Some(document),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring share token");
            None
        }
    }
}

/// Builds `base#state=<token>`. Any existing fragment on `base` is replaced.
pub fn share_url(base: &str, document: &ProposalDocument) -> String {
    let base = base.split('#').next().unwrap_or(base);
    format!("{}#{}={}", base, STATE_PARAM, encode(document))
}

/// Extracts the token from a full URL, a `#state=...` fragment, or a bare
/// `state=...` pair. Only the fragment is searched; a `state` query parameter
/// is not a token. Returns `None` when no non-empty token is present.
pub fn token_from_url(location: &str) -> Option<&str> {
    let fragment = match location.split_once('#') {
        Some((_, fragment)) => fragment,
        None if location.contains("://") || location.contains('?') => return None,
        None => location,
    };

    fragment
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == STATE_PARAM)
        .map(|(_, token)| token)
        .filter(|token| !token.is_empty())
}
