//! In-memory BuildRepository implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, StoreError};
use crate::record::{BuildRecord, validate_name};
use crate::repository::BuildRepository;

/// In-memory implementation of BuildRepository.
///
/// Useful for tests and tooling that need repository semantics without
/// touching the filesystem. Names are validated exactly like the
/// file-backed implementation so the two stay interchangeable.
#[derive(Default)]
pub struct MemoryBuildRepository {
    records: Mutex<HashMap<String, BuildRecord>>,
}

impl MemoryBuildRepository {
    /// Create an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BuildRepository for MemoryBuildRepository {
    fn save(&self, record: &BuildRecord) -> Result<()> {
        validate_name(&record.name)?;
        let mut records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        records.insert(record.name.clone(), record.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<BuildRecord>> {
        validate_name(name)?;
        let records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(name).cloned())
    }

    fn exists(&self, name: &str) -> bool {
        self.records
            .lock()
            .map(|records| records.contains_key(name))
            .unwrap_or(false)
    }

    fn delete(&self, name: &str) -> Result<()> {
        validate_name(name)?;
        let mut records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        records.remove(name);
        Ok(())
    }

    fn list_names(&self) -> Result<Vec<String>> {
        let records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut names: Vec<String> = records.keys().cloned().collect();
        names.sort_unstable();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use build_core::{BuildTemplate, Profession};

    #[test]
    fn behaves_like_the_file_repository() {
        let repo = MemoryBuildRepository::new();
        let record =
            BuildRecord::new("wvw roamer", BuildTemplate::new(Profession::Thief)).unwrap();

        repo.save(&record).unwrap();
        assert!(repo.exists("wvw roamer"));
        assert_eq!(repo.load("wvw roamer").unwrap().unwrap(), record);
        assert_eq!(repo.list_names().unwrap(), vec!["wvw roamer".to_owned()]);

        repo.delete("wvw roamer").unwrap();
        assert!(repo.load("wvw roamer").unwrap().is_none());
        repo.delete("wvw roamer").unwrap();
    }

    #[test]
    fn rejects_invalid_names() {
        let repo = MemoryBuildRepository::new();
        assert!(matches!(
            repo.load(""),
            Err(StoreError::InvalidName { .. })
        ));
    }
}
