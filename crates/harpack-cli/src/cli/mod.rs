//! CLI for the harpack capture tool.

mod commands;
mod store_socket;

use anyhow::Result;
use clap::{Parser, Subcommand};
use harpack_core::config;
use std::path::{Path, PathBuf};

use commands::{
    run_clear, run_export, run_import, run_pack, run_serve, run_status, run_types,
};

/// Top-level CLI for the harpack network-capture curation tool.
#[derive(Debug, Parser)]
#[command(name = "harpack")]
#[command(about = "harpack: classify captured network exchanges and export curated archives", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the resident capture store and its socket listener.
    Serve,

    /// Replay a HAR file into the resident store.
    Import {
        /// Path to the HAR file.
        path: String,
    },

    /// Show capture counts.
    Status,

    /// List distinct captured resource types.
    Types,

    /// Export selected resource types (plus any API calls) as a zip archive.
    Export {
        /// Comma-separated resource types to include (default: all observed).
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,

        /// Output file (default: <prefix>_<stamp>.zip in the current directory).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clear all captured data.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// One-shot pipeline: import a HAR and export without a resident store.
    Pack {
        /// Path to the HAR file.
        path: String,

        /// Comma-separated resource types to include (default: all observed).
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,

        /// Output file (default: <prefix>_<stamp>.zip in the current directory).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Serve => run_serve(&cfg).await?,
            CliCommand::Import { path } => run_import(&cfg, Path::new(&path)).await?,
            CliCommand::Status => run_status(&cfg).await?,
            CliCommand::Types => run_types(&cfg).await?,
            CliCommand::Export { types, output } => {
                run_export(&cfg, &types, output.as_deref()).await?;
            }
            CliCommand::Clear { yes } => run_clear(&cfg, yes).await?,
            CliCommand::Pack {
                path,
                types,
                output,
            } => run_pack(&cfg, Path::new(&path), &types, output.as_deref()).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
