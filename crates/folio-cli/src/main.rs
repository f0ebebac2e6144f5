use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A terminal portfolio card with animated text effects")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use an alternate profile file
    #[arg(short = 'p', long = "profile")]
    profile: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Write the default config and sample profile to ~/.config/folio
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
    /// Print the profile without starting the TUI
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the config and profile files
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if let Some(profile) = cli.profile {
        config.general.profile = Some(profile);
    }

    // Initialize logging; RUST_LOG wins over the configured level.
    // Logs go to stderr so the TUI's screen is left alone.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Init { force }) => commands::init::run(&config, force),
        Some(Commands::Show { json }) => commands::show::run(&config, json),
        Some(Commands::Check) => commands::check::run(&config),
    }
}
