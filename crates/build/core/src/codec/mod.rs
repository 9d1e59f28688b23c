//! Tag-dispatched binary codec for chat-link payloads.
//!
//! A payload's first byte selects the link kind; the rest follows that
//! kind's fixed layout. The codec has no state: every call is
//! independent, side-effect-free, and all-or-nothing.

mod build;
mod equipment;
mod reader;

use crate::error::{FormatError, Result};
use crate::template::{BuildTemplate, EquipmentTemplate};
use crate::transport;

use reader::PayloadReader;

/// Type tag opening a build link payload.
pub const LINK_TYPE_BUILD: u8 = 0x0D;

/// Type tag opening an equipment-template link payload.
pub const LINK_TYPE_EQUIPMENT: u8 = 0x0E;

/// Fixed payload length of a canonical build link, tag included.
pub const BUILD_PAYLOAD_LEN: usize = 28;

/// A decoded chat link, tagged by kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChatLink {
    /// A character build (profession, specializations, skill bars).
    Build(BuildTemplate),

    /// An equipment template (opaque slot records).
    Equipment(EquipmentTemplate),
}

impl ChatLink {
    /// Decodes a bracketed chat string into a link.
    ///
    /// # Errors
    ///
    /// Envelope failures ([`FormatError::BadEnvelope`],
    /// [`FormatError::BadEncoding`]) or any payload failure from
    /// [`decode`].
    pub fn from_chat_string(text: &str) -> Result<Self> {
        decode(&transport::decode_envelope(text)?)
    }

    /// Encodes this link as a bracketed chat string.
    ///
    /// # Errors
    ///
    /// Propagates [`FormatError::ValueOutOfRange`] from [`encode`].
    pub fn chat_string(&self) -> Result<String> {
        Ok(transport::encode_envelope(&encode(self)?))
    }
}

/// Decodes a raw payload into a typed link.
///
/// # Errors
///
/// - [`FormatError::Truncated`] when the payload is shorter than its
///   declared layout requires (including an empty payload).
/// - [`FormatError::UnknownLinkType`] for an unrecognized tag byte.
pub fn decode(bytes: &[u8]) -> Result<ChatLink> {
    let mut reader = PayloadReader::new(bytes);
    let tag = reader.read_u8()?;
    match tag {
        LINK_TYPE_BUILD => Ok(ChatLink::Build(build::decode_build(&mut reader)?)),
        LINK_TYPE_EQUIPMENT => Ok(ChatLink::Equipment(equipment::decode_equipment(
            &mut reader,
        )?)),
        tag => Err(FormatError::UnknownLinkType { tag }),
    }
}

/// Encodes a typed link into its raw payload.
///
/// # Errors
///
/// [`FormatError::ValueOutOfRange`] when a field value cannot fit its
/// wire width; the data model is supposed to rule this out before
/// encode is called.
pub fn encode(link: &ChatLink) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(BUILD_PAYLOAD_LEN);
    match link {
        ChatLink::Build(template) => {
            out.push(LINK_TYPE_BUILD);
            build::encode_build(template, &mut out)?;
        }
        ChatLink::Equipment(template) => {
            out.push(LINK_TYPE_EQUIPMENT);
            equipment::encode_equipment(template, &mut out)?;
        }
    }
    Ok(out)
}
