use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::{content::Portfolio, AppConfig};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A terminal portfolio with responsive carousels")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of ~/.config/folio/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Print one section as plain text
    Show {
        /// Section name (about, skills, projects, ...)
        section: String,
    },
    /// Print carousel state for a section at a given viewport width
    Inspect {
        /// Section name (must be a carousel section)
        section: String,
        /// Viewport width in pixels
        #[arg(short, long)]
        width: u32,
        /// Number of forward steps to simulate
        #[arg(short, long, default_value_t = 0)]
        steps: usize,
    },
    /// Send a message through the contact relay
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(short, long)]
        message: String,
    },
    /// Write a default config and an editable portfolio file
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Init { force } => {
            // Init writes the config, so it must not require a loadable one
            init_logging(&AppConfig::default(), false)?;
            commands::init::run(&config_path, force)
        }
        Commands::Run => {
            let config = load_config(&config_path)?;
            init_logging(&config, true)?;
            let portfolio = load_portfolio(&config)?;
            commands::run::run(config, portfolio).await
        }
        Commands::Show { section } => {
            let config = load_config(&config_path)?;
            init_logging(&config, false)?;
            let portfolio = load_portfolio(&config)?;
            commands::show::run(&portfolio, &section)
        }
        Commands::Inspect { section, width, steps } => {
            let config = load_config(&config_path)?;
            init_logging(&config, false)?;
            let portfolio = load_portfolio(&config)?;
            commands::inspect::run(&config, &portfolio, &section, width, steps)
        }
        Commands::Contact { name, email, phone, message } => {
            let config = load_config(&config_path)?;
            init_logging(&config, false)?;
            commands::contact::run(&config, &name, &email, phone.as_deref(), &message).await
        }
    }
}

fn load_config(path: &Path) -> Result<Arc<AppConfig>> {
    let config = AppConfig::load_from(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    Ok(Arc::new(config))
}

/// RUST_LOG wins over `general.log_level`; the TUI logs to a file so it does
/// not draw over the screen
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Configured content file, or the bundled sample
fn load_portfolio(config: &AppConfig) -> Result<Portfolio> {
    match config.content_path() {
        Some(path) => Portfolio::load(&path)
            .with_context(|| format!("Failed to load portfolio from {}", path.display())),
        None => Ok(Portfolio::bundled()?),
    }
}
