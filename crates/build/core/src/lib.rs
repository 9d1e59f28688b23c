//! Chat-link transport and build codec shared across the workspace.
//!
//! `build-core` defines the canonical build model ([`BuildTemplate`] and
//! friends) and the two pure layers that move it across the game's chat
//! string format: [`transport`] strips/applies the `[&...]` base64
//! envelope, and [`codec`] interprets the raw payload by its leading
//! type tag. Both layers are synchronous, stateless, and free of I/O;
//! catalog lookups and persistence live in the collaborator crates.
pub mod codec;
pub mod error;
pub mod template;
pub mod transport;

pub use codec::{BUILD_PAYLOAD_LEN, ChatLink, LINK_TYPE_BUILD, LINK_TYPE_EQUIPMENT};
pub use error::{FormatError, Result};
pub use template::{
    BuildTemplate, EquipmentRecord, EquipmentTemplate, Profession, SkillBar, SkillSlot,
    SpecializationSlot, TemplateError, TraitChoice, TraitTier,
};
pub use transport::{decode_envelope, encode_envelope};
