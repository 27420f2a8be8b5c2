use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use tagwright_mapper::{Config, EntityKind};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "tagwright", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file (default: ~/.config/tagwright/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Map a MusicBrainz JSON document to tags
    ///
    /// Reads a document as returned by the MusicBrainz web service and prints
    /// the tags it maps to, one per line. Multi-valued tags are joined with
    /// "; ".
    ///
    /// Kinds: artist, release, release-group, recording, track, medium, work
    ///
    /// Output:
    /// - Visible tags (hidden "~" tags with --hidden)
    /// - DJ-mix credits per medium, if any
    /// - Collected genres, most votes first
    ///
    /// With --json the whole mapped document is printed instead, hidden tags
    /// included.
    Map {
        /// Kind of document
        kind: EntityKind,

        /// Path to the JSON document (default: read stdin)
        file: Option<PathBuf>,

        /// Print the mapped document as JSON
        #[arg(long)]
        json: bool,

        /// Include hidden tags in text output
        #[arg(long)]
        hidden: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path.clone())?,
        None => Config::load()?,
    };

    twyg::setup(config.logging.clone())
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {:?}", e))?;

    let config_path = cli
        .config
        .unwrap_or_else(tagwright_mapper::config::config_file_path);

    match cli.command {
        Commands::Map {
            kind,
            file,
            json,
            hidden,
        } => {
            commands::run_map(&config, kind, file, json, hidden)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config, &config_path)?,
            ConfigAction::Path => commands::config::show_path(&config_path)?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config(&config_path)?,
        },
    }

    Ok(())
}
