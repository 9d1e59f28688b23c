//! Link transport: the `[&...]` envelope over a base64 payload.
//!
//! This layer only handles framing. It is pure, stateless, and exactly
//! reversible: `decode_envelope(encode_envelope(b)) == b` for any byte
//! sequence `b`, including the empty one.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{FormatError, Result};

/// Marker opening a chat link.
pub const LINK_PREFIX: &str = "[&";

/// Marker closing a chat link.
pub const LINK_SUFFIX: &str = "]";

/// Strips the `[&...]` markers and base64-decodes the payload.
///
/// # Errors
///
/// - [`FormatError::BadEnvelope`] when either marker is missing.
/// - [`FormatError::BadEncoding`] when the payload is not valid standard
///   base64 (non-alphabet characters, bad padding length).
pub fn decode_envelope(text: &str) -> Result<Vec<u8>> {
    let payload = text
        .strip_prefix(LINK_PREFIX)
        .and_then(|rest| rest.strip_suffix(LINK_SUFFIX))
        .ok_or(FormatError::BadEnvelope)?;

    Ok(STANDARD.decode(payload)?)
}

/// Base64-encodes `bytes` with standard padding and wraps the markers.
pub fn encode_envelope(bytes: &[u8]) -> String {
    format!("{LINK_PREFIX}{}{LINK_SUFFIX}", STANDARD.encode(bytes))
}
