//! Saved-build management commands.

use anyhow::{Context, Result, bail};
use build_core::ChatLink;
use build_store::{BuildRecord, BuildRepository};
use clap::Parser;
use console::style;

use crate::commands::open_repository;
use crate::render;

/// Decode a build link and save it under a name
#[derive(Parser, Debug)]
pub struct Save {
    /// Name to store the build under
    pub name: String,

    /// The bracketed chat string to import
    pub link: String,
}

impl Save {
    pub fn execute(self) -> Result<()> {
        let template = match ChatLink::from_chat_string(&self.link)
            .context("Failed to decode chat link")?
        {
            ChatLink::Build(template) => template,
            ChatLink::Equipment(_) => bail!("only build links can be saved"),
        };

        if let Err(err) = template.validate() {
            println!(
                "{} saving anyway: {}",
                style("!").yellow().bold(),
                err
            );
        }

        let repository = open_repository()?;
        let record = BuildRecord::new(self.name, template)?.with_chat_link(self.link);
        repository.save(&record)?;

        println!(
            "{} Saved build {}",
            style("✓").green().bold(),
            style(&record.name).cyan()
        );
        Ok(())
    }
}

/// Show a saved build
#[derive(Parser, Debug)]
pub struct Show {
    /// Name of the saved build
    pub name: String,
}

impl Show {
    pub fn execute(self) -> Result<()> {
        let repository = open_repository()?;
        let Some(record) = repository.load(&self.name)? else {
            bail!("no build named {:?}", self.name);
        };

        println!(
            "{} {}  (saved {})",
            style("build:").bold(),
            style(&record.name).cyan(),
            record.saved_at.format("%Y-%m-%d %H:%M UTC")
        );
        render::print_build(&record.template, None);
        if let Some(chat_link) = &record.chat_link {
            println!("{} {}", style("imported from:").bold(), chat_link);
        }
        Ok(())
    }
}

/// List saved builds
#[derive(Parser, Debug)]
pub struct List;

impl List {
    pub fn execute(self) -> Result<()> {
        let repository = open_repository()?;
        let names = repository.list_names()?;

        if names.is_empty() {
            println!("{}", style("No builds saved yet").dim());
            return Ok(());
        }

        for name in names {
            match repository.load(&name)? {
                Some(record) => {
                    let profession = record
                        .template
                        .profession()
                        .map(|p| p.to_string())
                        .unwrap_or_else(|| format!("code {}", record.template.profession_id));
                    println!(
                        "  {} {}  {} {}",
                        style("→").cyan(),
                        style(&name).bold(),
                        profession,
                        style(record.saved_at.format("%Y-%m-%d")).dim()
                    );
                }
                // Listed a moment ago but gone now; keep the listing going.
                None => println!("  {} {}", style("→").cyan(), style(&name).bold()),
            }
        }
        Ok(())
    }
}

/// Delete a saved build
#[derive(Parser, Debug)]
pub struct Delete {
    /// Name of the saved build
    pub name: String,
}

impl Delete {
    pub fn execute(self) -> Result<()> {
        let repository = open_repository()?;
        if !repository.exists(&self.name) {
            bail!("no build named {:?}", self.name);
        }
        repository.delete(&self.name)?;
        println!(
            "{} Deleted build {}",
            style("✓").green().bold(),
            style(&self.name).cyan()
        );
        Ok(())
    }
}

/// Print the chat link for a saved build
#[derive(Parser, Debug)]
pub struct Link {
    /// Name of the saved build
    pub name: String,
}

impl Link {
    pub fn execute(self) -> Result<()> {
        let repository = open_repository()?;
        let Some(record) = repository.load(&self.name)? else {
            bail!("no build named {:?}", self.name);
        };

        // Re-encode from the stored template rather than echoing the
        // imported string; the two agree by the round-trip law.
        let chat_string = ChatLink::Build(record.template)
            .chat_string()
            .context("Failed to encode build link")?;
        println!("{chat_string}");
        Ok(())
    }
}
