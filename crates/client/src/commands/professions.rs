//! List professions known to the catalog.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use crate::commands::catalog_client;

/// List professions known to the catalog
#[derive(Parser, Debug)]
pub struct Professions;

impl Professions {
    pub async fn execute(self) -> Result<()> {
        let client = catalog_client();
        let mut professions = client
            .professions()
            .await
            .context("Failed to fetch professions from the catalog")?;

        professions.sort_by_key(|profession| profession.code);

        for profession in professions {
            println!(
                "  {} {}  {}",
                style(profession.code).bold(),
                profession.name,
                style(format!(
                    "{} specialization(s)",
                    profession.specializations.len()
                ))
                .dim()
            );
        }
        Ok(())
    }
}
