mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sfmap-cli")]
#[command(about = "Fetch and normalize Satisfactory map data")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Download the map data, extract every category and write the data files
    Fetch {
        /// Directory to write into (defaults to `SFMAP_DATA_DIR`)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Print the per-category counts without writing any file
        #[arg(long)]
        dry_run: bool,
    },
    /// Run the same pipeline on a map-data JSON file already on disk
    Parse {
        #[arg(long)]
        input: PathBuf,

        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Print the raw JSON of the first group with the given `type`
    Group {
        #[arg(long = "type")]
        category_type: String,

        /// Read from this file instead of fetching
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// List every top-level group with its tab id, type and name
    Tabs {
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = sfmap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // stdout carries command output (`group` prints JSON), so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Fetch { out_dir, dry_run }) => {
            commands::run_fetch(&config, out_dir.as_deref(), dry_run).await?;
        }
        Some(Commands::Parse { input, out_dir }) => {
            commands::run_parse(&config, &input, out_dir.as_deref())?;
        }
        Some(Commands::Group {
            category_type,
            input,
        }) => {
            commands::run_group(&config, &category_type, input.as_deref()).await?;
        }
        Some(Commands::Tabs { input }) => commands::run_tabs(&config, input.as_deref()).await?,
        None => println!("sfmap-cli: run with --help to list commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
