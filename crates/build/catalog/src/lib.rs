//! Catalog collaborator: metadata fetch and name lookup.
//!
//! This crate owns every conversation with the game's public API. It
//! exposes an async [`CatalogClient`] for fetching profession,
//! specialization, trait, and skill records, plus the read-only
//! [`NameOracle`] capability the rest of the workspace uses to annotate
//! decoded ids with display names. Codec correctness never depends on
//! anything in here being reachable.

mod client;
mod error;
mod oracle;
mod types;

pub use client::{CatalogClient, DEFAULT_BASE_URL};
pub use error::{CatalogError, Result};
pub use oracle::{CatalogIndex, Category, NameOracle};
pub use types::{ProfessionInfo, SkillInfo, SpecializationInfo, TraitInfo, TraitSlotKind};
