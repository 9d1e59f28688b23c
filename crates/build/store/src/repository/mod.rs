//! Build persistence behind a repository trait.
//!
//! The storage layer has no opinion on build semantics: it receives a
//! complete, validated [`BuildRecord`](crate::record::BuildRecord) and
//! round-trips it under a user-chosen name. Two implementations are
//! provided: file-backed JSON documents for the real client, and an
//! in-memory map for tests and tooling.

mod file;
mod memory;

pub use file::FileBuildRepository;
pub use memory::MemoryBuildRepository;

use crate::error::Result;
use crate::record::BuildRecord;

/// Storage interface for named builds.
pub trait BuildRepository {
    /// Persists a record, overwriting any record with the same name.
    fn save(&self, record: &BuildRecord) -> Result<()>;

    /// Loads a record by name.
    fn load(&self, name: &str) -> Result<Option<BuildRecord>>;

    /// Returns true if a record with this name exists.
    fn exists(&self, name: &str) -> bool;

    /// Removes a record; removing an absent name is not an error.
    fn delete(&self, name: &str) -> Result<()>;

    /// Lists stored record names, sorted.
    fn list_names(&self) -> Result<Vec<String>>;
}
