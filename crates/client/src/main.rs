//! Build manager entry point.
//!
//! This binary is the composition root that wires the three libraries
//! together: `build-core` (chat-link codec), `build-catalog` (name
//! lookups), and `build-store` (saved builds). Every subcommand drives
//! the validated constructors directly; there are no interactive
//! prompts.

mod annotate;
mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Decode, Delete, Encode, Link, List, Professions, Save, Show};

/// Chat-link build manager
#[derive(Parser)]
#[command(name = "gw2build")]
#[command(about = "Decode, compose, and manage build links", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Decode a chat link and print its contents
    Decode(Decode),

    /// Compose a build from flags and print its chat link
    Encode(Encode),

    /// Decode a build link and save it under a name
    Save(Save),

    /// Show a saved build
    Show(Show),

    /// List saved builds
    List(List),

    /// Delete a saved build
    Delete(Delete),

    /// Print the chat link for a saved build
    Link(Link),

    /// List professions known to the catalog
    Professions(Professions),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (GW2_API_BASE_URL, RUST_LOG)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();

    match cli.command {
        Command::Decode(cmd) => cmd.execute().await,
        Command::Encode(cmd) => cmd.execute(),
        Command::Save(cmd) => cmd.execute(),
        Command::Show(cmd) => cmd.execute(),
        Command::List(cmd) => cmd.execute(),
        Command::Delete(cmd) => cmd.execute(),
        Command::Link(cmd) => cmd.execute(),
        Command::Professions(cmd) => cmd.execute().await,
    }
}

/// Setup logging to stderr, filtered by RUST_LOG (default: warnings).
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
