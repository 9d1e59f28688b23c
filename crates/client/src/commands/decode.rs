//! Decode a chat link and print its contents.

use anyhow::{Context, Result};
use build_core::ChatLink;
use clap::Parser;
use console::style;

use crate::annotate;
use crate::commands::catalog_client;
use crate::render;

/// Decode a chat link and print its contents
#[derive(Parser, Debug)]
pub struct Decode {
    /// The bracketed chat string, e.g. '[&DQYAAAAA...=]'
    pub link: String,

    /// Annotate ids with names from the catalog (needs network access)
    #[arg(long)]
    pub names: bool,
}

impl Decode {
    pub async fn execute(self) -> Result<()> {
        let link = ChatLink::from_chat_string(&self.link).context("Failed to decode chat link")?;

        match link {
            ChatLink::Build(template) => {
                let annotations = if self.names {
                    Some(
                        annotate::fetch(&catalog_client(), &template)
                            .await
                            .context("Failed to fetch catalog names")?,
                    )
                } else {
                    None
                };

                render::print_build(&template, annotations.as_ref());

                if let Err(err) = template.validate() {
                    println!();
                    println!(
                        "{} link decodes but is semantically invalid: {}",
                        style("!").yellow().bold(),
                        err
                    );
                }
            }
            ChatLink::Equipment(template) => render::print_equipment(&template),
        }

        Ok(())
    }
}
