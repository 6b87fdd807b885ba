//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{self, Context};
use labelrig::config::Config;
use labelrig::output::OutputMode;

/// labelrig - Set up image-annotation workflows on the Scale API
#[derive(Parser, Debug)]
#[command(
    name = "labelrig",
    version,
    about = "Set up image-annotation workflows on the Scale API",
    long_about = "Create an annotation project and batch, then submit one image-annotation task per image.\n\n\
                  Each task carries a bounding-box geometry and conditional follow-up questions.\n\
                  Created tasks are printed as JSON; rejected tasks print the error code and message."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./labelrig.toml, then ~/.config/labelrig/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API key (default: $SCALE_API_KEY, then [api].key)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API root (default: $SCALE_API_BASE_URL, then [api].base_url)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the project and batch, then submit every task (default)
    Run,

    /// Create the project only
    Project,

    /// Create the batch only (the project must exist)
    Batch,

    /// Submit the tasks only (the batch must exist)
    Tasks,

    /// Print the task bodies that would be sent, without sending anything
    Preview,

    /// Write the workflow as an editable config file
    Init {
        /// Where to write it
        #[arg(default_value = labelrig::paths::LOCAL_CONFIG)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    if let Some(Command::Version) = cli.command {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION")
                })
            );
        } else {
            println!("labelrig v{}", env!("CARGO_PKG_VERSION"));
        }
        return Ok(());
    }

    let (config, source) = Config::discover(cli.config.as_deref())?;
    if let Some(path) = &source {
        log::debug!("Loaded config from {}", path.display());
    }

    let ctx = Context {
        config,
        api_key: cli.api_key,
        base_url: cli.base_url,
        mode: output_mode,
    };

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => commands::run(&ctx),
        Command::Project => commands::project(&ctx),
        Command::Batch => commands::batch(&ctx),
        Command::Tasks => commands::tasks(&ctx),
        Command::Preview => commands::preview(&ctx),
        Command::Init { path, force } => commands::init(&ctx, &path, force),
        Command::Version => Ok(()),
    }
}
