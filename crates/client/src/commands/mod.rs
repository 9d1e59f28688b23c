//! CLI subcommands.

mod builds;
mod decode;
mod encode;
mod professions;

pub use builds::{Delete, Link, List, Save, Show};
pub use decode::Decode;
pub use encode::Encode;
pub use professions::Professions;

use anyhow::{Context, Result};
use build_catalog::CatalogClient;
use build_store::FileBuildRepository;

/// Opens the catalog client, honoring a `GW2_API_BASE_URL` override.
pub(crate) fn catalog_client() -> CatalogClient {
    match std::env::var("GW2_API_BASE_URL") {
        Ok(url) if !url.trim().is_empty() => {
            tracing::debug!("Using catalog endpoint override: {}", url);
            CatalogClient::with_base_url(url)
        }
        _ => CatalogClient::new(),
    }
}

/// Opens the default on-disk build repository.
pub(crate) fn open_repository() -> Result<FileBuildRepository> {
    FileBuildRepository::open_default().context("Failed to open the build repository")
}
