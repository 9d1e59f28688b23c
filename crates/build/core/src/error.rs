//! Error types raised by the chat-link codec.
//!
//! Every failure is surfaced as a typed [`FormatError`] carrying enough
//! context (offset, expected vs available length) to render a precise
//! message. Decoding is deterministic, so none of these errors are
//! retryable, and no partial template is ever exposed alongside one.

use thiserror::Error;

/// Errors surfaced while decoding or encoding chat links.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The input string is missing the `[&` prefix or the `]` suffix.
    #[error("chat link must be wrapped in `[&...]` markers")]
    BadEnvelope,

    /// The text between the markers is not valid standard base64.
    #[error("invalid base64 payload: {0}")]
    BadEncoding(#[from] base64::DecodeError),

    /// The leading type tag does not match any known link kind.
    #[error("unknown link type tag 0x{tag:02X}")]
    UnknownLinkType { tag: u8 },

    /// The declared layout requires more bytes than the payload holds.
    #[error("payload truncated at offset {offset}: needed {needed} bytes, got {got}")]
    Truncated {
        /// Read position at which the payload ran out.
        offset: usize,
        /// Total payload length the pending read required.
        needed: usize,
        /// Actual payload length.
        got: usize,
    },

    /// Encode-time contract violation: a field value does not fit its
    /// wire width. The data model is supposed to prevent this before
    /// encode is ever called.
    #[error("{field} value {value} does not fit on the wire (max {max})")]
    ValueOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

pub type Result<T> = core::result::Result<T, FormatError>;
