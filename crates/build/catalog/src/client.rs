//! Catalog HTTP client implementation.

use crate::error::{CatalogError, Result};
use crate::types::{ProfessionInfo, SkillInfo, SpecializationInfo, TraitInfo};

/// Public catalog endpoint of the live game.
pub const DEFAULT_BASE_URL: &str = "https://api.guildwars2.com/v2";

/// Catalog client over the game's public HTTP API.
///
/// All methods are plain request/response reads; nothing here mutates
/// remote state, and the codec never depends on these calls.
pub struct CatalogClient {
    /// API root, without a trailing slash.
    base_url: String,

    /// HTTP client
    http_client: reqwest::Client,
}

impl CatalogClient {
    /// Creates a client against the live catalog endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a specific endpoint (mirrors, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    /// Fetches every profession record.
    pub async fn professions(&self) -> Result<Vec<ProfessionInfo>> {
        self.get("professions?ids=all").await
    }

    /// Fetches specialization records by id.
    pub async fn specializations(&self, ids: &[u32]) -> Result<Vec<SpecializationInfo>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.get(&format!("specializations?ids={}", ids_param(ids)))
            .await
    }

    /// Fetches trait records by id.
    pub async fn traits(&self, ids: &[u32]) -> Result<Vec<TraitInfo>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.get(&format!("traits?ids={}", ids_param(ids))).await
    }

    /// Fetches skill records by id.
    pub async fn skills(&self, ids: &[u32]) -> Result<Vec<SkillInfo>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.get(&format!("skills?ids={}", ids_param(ids))).await
    }

    /// Issues one GET and decodes the JSON body.
    async fn get<T: serde::de::DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path_and_query);

        tracing::debug!("Fetching catalog data: {}", url);

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CatalogError::Api {
                status: status.as_u16(),
                body,
            });
        }

        // Read the body as text first so a shape mismatch can be
        // diagnosed from the log without replaying the request.
        let body = response.text().await?;
        let value = serde_json::from_str(&body).inspect_err(|_| {
            tracing::debug!("Unparseable catalog response from {}: {}", url, body);
        })?;

        Ok(value)
    }

    /// Returns the configured API root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

fn ids_param(ids: &[u32]) -> String {
    let mut param = String::new();
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            param.push(',');
        }
        param.push_str(&id.to_string());
    }
    param
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CatalogClient::new();
        assert_eq!(client.base_url(), "https://api.guildwars2.com/v2");

        let client = CatalogClient::with_base_url("http://localhost:8080/v2/");
        assert_eq!(client.base_url(), "http://localhost:8080/v2");
    }

    #[test]
    fn ids_param_joins_with_commas() {
        assert_eq!(ids_param(&[6, 38, 47]), "6,38,47");
        assert_eq!(ids_param(&[5503]), "5503");
        assert_eq!(ids_param(&[]), "");
    }
}
