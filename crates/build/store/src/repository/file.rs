//! File-based BuildRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::record::{BuildRecord, validate_name};
use crate::repository::BuildRepository;

/// File-based implementation of BuildRepository.
///
/// Stores each build as an individual pretty-printed JSON document so
/// saved builds stay inspectable and diffable by hand.
///
/// # File Format
///
/// Records are stored as `{name}.json` under the base directory; the
/// name doubles as the storage key and is validated before any path is
/// formed. Writes go through a temp file plus atomic rename.
pub struct FileBuildRepository {
    base_dir: PathBuf,
}

impl FileBuildRepository {
    /// Create a new file-based build repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Create a repository under the per-user data directory.
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "gw2build")
            .ok_or(StoreError::NoDataDirectory)?;
        Self::new(dirs.data_dir().join("builds"))
    }

    /// Directory the records live in.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a record file.
    fn record_path(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.base_dir.join(format!("{name}.json")))
    }
}

impl BuildRepository for FileBuildRepository {
    fn save(&self, record: &BuildRecord) -> Result<()> {
        let path = self.record_path(&record.name)?;
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_vec_pretty(record)?;

        // Write to temp file, then atomic rename
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved build {:?} to {}", record.name, path.display());

        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<BuildRecord>> {
        let path = self.record_path(name)?;

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let record: BuildRecord = serde_json::from_slice(&bytes)?;

        tracing::debug!("Loaded build {:?} from {}", name, path.display());

        Ok(Some(record))
    }

    fn exists(&self, name: &str) -> bool {
        self.record_path(name)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.record_path(name)?;

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted build {:?}", name);
        }

        Ok(())
    }

    fn list_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let entry = entry?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(name) = filename.strip_suffix(".json")
            {
                names.push(name.to_owned());
            }
        }

        names.sort_unstable();
        Ok(names)
    }
}
