//! Storage collaborator: named build records on disk.
//!
//! `build-store` persists complete [`build_core::BuildTemplate`] values
//! as structured JSON records under a user-chosen name. It has no
//! opinion on build semantics or the wire format — it receives a
//! validated template and round-trips it.
mod error;
mod record;
mod repository;

pub use error::{Result, StoreError};
pub use record::{BuildRecord, validate_name};
pub use repository::{BuildRepository, FileBuildRepository, MemoryBuildRepository};
