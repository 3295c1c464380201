mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mcad_core::catalog::DataCatalog;
use mcad_core::config::AppConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mcad", about = "Lunar crater imagery browser and measurement tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Root of the image data tree (overrides MCAD_DATA_DIR and the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a crater's physical diameter from its pixel diameter
    Compute(commands::compute::ComputeArgs),
    /// List image folders in the data tree
    Folders,
    /// List PNG images in a folder
    Images(commands::browse::ImagesArgs),
    /// List every image that has a metadata file, with the total count
    Pairs,
    /// Show the metadata of an image
    Metadata(commands::browse::MetadataArgs),
    /// Measure a crater size across every image of a folder
    Batch(commands::batch::BatchArgs),
    /// Print or save the default config as TOML
    Config(commands::config::ConfigArgs),
    /// Check a password (read from stdin) against the account policy
    CheckPassword(commands::password::CheckPasswordArgs),
}

/// Settings shared by all subcommands.
pub struct Session {
    pub config: AppConfig,
    data_dir_override: Option<PathBuf>,
}

impl Session {
    fn new(cli: &Cli) -> Result<Self> {
        let config = match cli.config {
            Some(ref path) => AppConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => AppConfig::default(),
        };
        Ok(Self {
            config,
            data_dir_override: cli.data_dir.clone(),
        })
    }

    pub fn catalog(&self) -> Result<DataCatalog> {
        let dir = self.config.resolve_data_dir(self.data_dir_override.as_deref());
        tracing::debug!(data_dir = %dir.display(), "resolved data directory");
        DataCatalog::open(&dir).with_context(|| "Set --data-dir or MCAD_DATA_DIR".to_string())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let session = Session::new(&cli)?;

    match &cli.command {
        Commands::Compute(args) => commands::compute::run(args, &session),
        Commands::Folders => commands::browse::run_folders(&session),
        Commands::Images(args) => commands::browse::run_images(args, &session),
        Commands::Pairs => commands::browse::run_pairs(&session),
        Commands::Metadata(args) => commands::browse::run_metadata(args, &session),
        Commands::Batch(args) => commands::batch::run(args, &session),
        Commands::Config(args) => commands::config::run(args, &session),
        Commands::CheckPassword(args) => commands::password::run(args),
    }
}
